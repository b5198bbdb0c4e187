// tests/property_classify.rs

use proptest::prelude::*;
use globwatch::glob::is_glob;
use globwatch::session::{classify, WatchTargets};

// Plain path segments: no glob syntax, no negation marker.
fn literal_path() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-z0-9_.-]{1,8}", 1..4)
        .prop_map(|segs| segs.join("/"))
}

fn any_target() -> impl Strategy<Value = String> {
    prop_oneof![
        literal_path(),
        literal_path().prop_map(|p| format!("{p}/*.rs")),
        literal_path().prop_map(|p| format!("{p}/**")),
        literal_path().prop_map(|p| format!("!{p}/*.tmp")),
    ]
}

proptest! {
    #[test]
    fn literal_lists_pass_through(paths in proptest::collection::vec(literal_path(), 0..6)) {
        prop_assume!(paths.iter().all(|p| !is_glob(p)));
        let plan = classify(&WatchTargets::from(paths.clone()), None).unwrap();
        prop_assert_eq!(plan.roots, paths);
        prop_assert!(plan.filter.is_none());
    }

    #[test]
    fn classification_is_idempotent(
        targets in proptest::collection::vec(any_target(), 1..6),
        probes in proptest::collection::vec(literal_path(), 1..8),
    ) {
        let first = classify(&WatchTargets::from(targets.clone()), None).unwrap();
        let second = classify(&WatchTargets::from(targets), None).unwrap();
        prop_assert_eq!(&first.roots, &second.roots);

        match (first.filter, second.filter) {
            (Some(a), Some(b)) => {
                for probe in &probes {
                    prop_assert_eq!(a.ignores(probe), b.ignores(probe));
                    let nested = format!("{probe}/x.rs");
                    prop_assert_eq!(a.ignores(&nested), b.ignores(&nested));
                }
            }
            (None, None) => {}
            _ => prop_assert!(false, "filter presence differs"),
        }
    }

    #[test]
    fn negated_matches_are_always_suppressed(dir in literal_path(), name in "[a-z]{1,6}") {
        let targets = vec![format!("{dir}/**"), format!("!{dir}/*.tmp"), format!("{dir}/{name}.tmp")];
        let filter = classify(&WatchTargets::from(targets), None).unwrap().filter.unwrap();
        let suppressed = format!("{dir}/{name}.tmp");
        prop_assert!(filter.ignores(&suppressed));
        let kept = format!("{dir}/{name}.rs");
        prop_assert!(!filter.ignores(&kept));
    }
}
