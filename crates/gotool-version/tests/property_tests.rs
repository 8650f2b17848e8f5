use gotool_version::{ParseErrorKind, Version, VersionCollection};
use proptest::prelude::*;

fn prerelease() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::collection::vec("[a-z][a-z0-9]{0,6}|[1-9][0-9]{0,3}", 1..4))
        .prop_map(|ids| ids.map(|ids| ids.join(".")))
}

fn go_version() -> impl Strategy<Value = String> {
    (0u64..50, 0u64..50, 0u64..50, prerelease()).prop_map(|(major, minor, patch, pre)| match pre {
        Some(pre) => format!("v{major}.{minor}.{patch}-{pre}"),
        None => format!("v{major}.{minor}.{patch}"),
    })
}

proptest! {
    #[test]
    fn test_parse_preserves_original_text(raw in go_version()) {
        let v = Version::parse(&raw).unwrap();
        prop_assert_eq!(v.to_string(), raw.clone());
        prop_assert_eq!(v.original(), raw.as_str());
    }

    #[test]
    fn test_missing_prefix_always_rejected(raw in go_version()) {
        let stripped = raw.trim_start_matches('v');
        let err = Version::parse(stripped).unwrap_err();
        prop_assert_eq!(err.kind(), ParseErrorKind::MissingPrefix);
    }

    #[test]
    fn test_build_metadata_always_rejected(raw in go_version(), build in "[a-z0-9]{1,8}") {
        let with_build = format!("{raw}+{build}");
        let err = Version::parse(&with_build).unwrap_err();
        prop_assert_eq!(err.kind(), ParseErrorKind::ContainsBuildMetadata);
    }

    #[test]
    fn test_release_sorts_after_its_prereleases(
        (major, minor, patch) in (0u64..50, 0u64..50, 0u64..50),
        pre in "[a-z][a-z0-9]{0,6}",
    ) {
        let release = Version::parse(&format!("v{major}.{minor}.{patch}")).unwrap();
        let prerelease = Version::parse(&format!("v{major}.{minor}.{patch}-{pre}")).unwrap();
        prop_assert!(prerelease < release);
    }

    #[test]
    fn test_collection_is_sorted(raws in prop::collection::vec(go_version(), 0..20)) {
        let collection = VersionCollection::collect("example", &raws).versions;
        prop_assert_eq!(collection.len(), raws.len());
        let sorted = collection.as_slice().windows(2).all(|w| w[0] <= w[1]);
        prop_assert!(sorted);
    }

    #[test]
    fn test_latest_stable_is_highest_release(raws in prop::collection::vec(go_version(), 1..20)) {
        let collection = VersionCollection::collect("example", &raws).versions;
        let highest = collection.iter().filter(|v| v.is_release()).max();
        match (collection.latest_stable(), highest) {
            (Ok(found), Some(expected)) => prop_assert_eq!(found, expected),
            (Err(_), None) => {}
            (found, expected) => prop_assert!(false, "mismatch: {:?} vs {:?}", found.ok(), expected),
        }
    }
}
