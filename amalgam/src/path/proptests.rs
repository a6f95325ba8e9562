//! Property-based tests for lexical path resolution.

use super::normalize::resolve_components;
use super::ResolvedPath;
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

fn component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-z0-9_]{1,10}(\\.h)?",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(component_strategy(), 1..8)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Resolution is idempotent.
    #[test]
    fn resolve_idempotent(path in relative_path_strategy()) {
        let once = resolve_components(&path);
        let twice = resolve_components(&once);
        prop_assert_eq!(once, twice);
    }

    // No `.` survives, and `..` only appears as a leading run.
    #[test]
    fn resolve_leaves_only_leading_parents(path in relative_path_strategy()) {
        let resolved = resolve_components(&path);
        let mut seen_normal = false;
        for component in resolved.components() {
            prop_assert_ne!(component, Component::CurDir);
            match component {
                Component::Normal(_) => seen_normal = true,
                Component::ParentDir => prop_assert!(!seen_normal),
                _ => {}
            }
        }
    }

    // Including a file by its own name from a sibling gives the same key as
    // naming it directly.
    #[test]
    fn sibling_include_matches_direct_key(
        dir in prop::collection::vec("[a-z]{1,6}", 0..4),
        name in "[a-z]{1,8}\\.h",
    ) {
        let dir: PathBuf = dir.iter().collect();
        let via_include = ResolvedPath::for_include(&dir.join("other.h"), &name);
        let direct = ResolvedPath::new(&dir.join(&name));
        prop_assert_eq!(via_include, direct);
    }

    #[test]
    fn resolve_never_panics(s in "[a-z./]{0,30}") {
        let _ = resolve_components(Path::new(&s));
    }
}
