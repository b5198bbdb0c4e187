// src/config/merge.rs

use std::time::Duration;

use tracing::debug;

use crate::cli::CliArgs;
use crate::config::loader::{default_config_path, load_and_validate};
use crate::config::model::ConfigFile;
use crate::errors::Result;
use crate::watcher::{IgnoreMatcher, IgnoreSpec, WatchOptions};

/// Load the config file named by `--config`, or the default one if it
/// exists. An explicitly named file must exist.
pub fn load_for_cli(args: &CliArgs) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => load_and_validate(path).map(Some),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_and_validate(&path).map(Some)
            } else {
                debug!(path = ?path, "no default config file");
                Ok(None)
            }
        }
    }
}

/// Combine file settings with command-line flags.
///
/// Flags override file values; targets and ignore entries from the command
/// line are appended to the file's.
pub fn merge_cli(args: &CliArgs, file: Option<&ConfigFile>) -> Result<(Vec<String>, WatchOptions)> {
    let mut targets = match file {
        Some(file) => file.targets()?,
        None => Vec::new(),
    };
    targets.extend(args.targets.iter().cloned());

    let mut options = file.map(ConfigFile::watch_options).unwrap_or_default();

    if !args.ignore.is_empty() {
        let mut ignored = options.ignored.take().map(IgnoreSpec::into_list).unwrap_or_default();
        ignored.extend(args.ignore.iter().map(|s| IgnoreMatcher::from(s.as_str())));
        options.ignored = Some(IgnoreSpec::Many(ignored));
    }
    if let Some(cwd) = &args.cwd {
        options.cwd = Some(cwd.clone());
    }
    if args.ignore_initial {
        options.ignore_initial = Some(true);
    }
    if let Some(depth) = args.depth {
        options.depth = Some(depth);
    }
    if args.poll {
        options.use_polling = Some(true);
    }
    if let Some(ms) = args.interval_ms {
        options.interval = Some(Duration::from_millis(ms));
    }
    options.disable_globbing |= args.disable_globbing;

    Ok((targets, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::model::{RawConfigFile, WatchSection};
    use crate::session::WatchTargets;
    use clap::Parser;

    fn file(section: WatchSection) -> ConfigFile {
        ConfigFile::try_from(RawConfigFile { watch: section }).unwrap()
    }

    #[test]
    fn cli_targets_and_ignores_are_appended() {
        let cfg = file(WatchSection {
            targets: Some(WatchTargets::from(vec!["src/**/*.rs"])),
            ignored: Some("target".into()),
            ..WatchSection::default()
        });
        let args = CliArgs::parse_from(["globwatch", "Cargo.toml", "--ignore", "**/*.log"]);

        let (targets, options) = merge_cli(&args, Some(&cfg)).unwrap();
        assert_eq!(targets, vec!["src/**/*.rs", "Cargo.toml"]);
        let ignored = options.ignored.unwrap().into_list();
        let names: Vec<_> = ignored.iter().filter_map(IgnoreMatcher::as_str).collect();
        assert_eq!(names, vec!["target", "**/*.log"]);
    }

    #[test]
    fn flags_override_file_values() {
        let cfg = file(WatchSection {
            depth: Some(1),
            use_polling: Some(false),
            interval_ms: Some(500),
            ..WatchSection::default()
        });
        let args = CliArgs::parse_from(["globwatch", "--depth", "3", "--poll", "--interval-ms", "20"]);

        let (_, options) = merge_cli(&args, Some(&cfg)).unwrap();
        assert_eq!(options.depth, Some(3));
        assert_eq!(options.use_polling, Some(true));
        assert_eq!(options.interval, Some(Duration::from_millis(20)));
    }

    #[test]
    fn unset_flags_leave_options_unset() {
        let args = CliArgs::parse_from(["globwatch", "a"]);
        let (targets, options) = merge_cli(&args, None).unwrap();
        assert_eq!(targets, vec!["a"]);
        assert!(options.ignored.is_none());
        assert!(options.ignore_initial.is_none());
        assert!(options.use_polling.is_none());
        assert!(!options.disable_globbing);
    }
}
