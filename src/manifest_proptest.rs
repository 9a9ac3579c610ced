//! Property-based tests for manifest resolution and the fence transform.
//!
//! These tests use proptest to generate random manifests and fragment text and
//! verify that the ordering and exclusion invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::compile::transform;
    use crate::defaults::STRUCTURAL_MARKERS;
    use crate::manifest::parse;
    use proptest::prelude::*;
    use std::collections::BTreeSet;
    use std::path::{Path, PathBuf};

    fn markers() -> BTreeSet<String> {
        STRUCTURAL_MARKERS.iter().map(|m| m.to_string()).collect()
    }

    /// A manifest line: a fragment name, a marker, or blank.
    fn manifest_line() -> impl Strategy<Value = String> {
        prop_oneof![
            4 => "[a-z0-9]{1,8}\\.txt",
            1 => prop::sample::select(STRUCTURAL_MARKERS.to_vec()).prop_map(String::from),
            1 => Just(String::new()),
        ]
    }

    proptest! {
        /// Property: no structural marker ever becomes a fragment path
        #[test]
        fn markers_never_resolve(lines in prop::collection::vec(manifest_line(), 0..20)) {
            let list = parse(&lines.join("\n"), Path::new("/book/"), &markers(), &[]);
            for path in &list {
                let name = path.to_str().unwrap().trim_start_matches("/book/");
                prop_assert!(!STRUCTURAL_MARKERS.contains(&name));
            }
        }

        /// Property: surviving lines keep manifest order
        #[test]
        fn manifest_order_is_preserved(lines in prop::collection::vec(manifest_line(), 0..20)) {
            let list = parse(&lines.join("\n"), Path::new("/book/"), &markers(), &[]);
            let expected: Vec<PathBuf> = lines
                .iter()
                .filter(|l| !l.is_empty() && !STRUCTURAL_MARKERS.contains(&l.as_str()))
                .map(|l| PathBuf::from(format!("/book/{}", l)))
                .collect();
            prop_assert_eq!(list.into_vec(), expected);
        }

        /// Property: literal includes always lead the list
        #[test]
        fn includes_come_first(
            lines in prop::collection::vec(manifest_line(), 0..10),
            includes in prop::collection::vec("/inc/[a-z]{1,6}\\.md", 1..5),
        ) {
            let includes: Vec<PathBuf> = includes.into_iter().map(PathBuf::from).collect();
            let list = parse(&lines.join("\n"), Path::new("/book/"), &markers(), &includes);
            prop_assert_eq!(&list.as_slice()[..includes.len()], includes.as_slice());
        }

        /// Property: CRLF line endings resolve the same as LF
        #[test]
        fn crlf_matches_lf(lines in prop::collection::vec(manifest_line(), 0..20)) {
            let lf = parse(&lines.join("\n"), Path::new("/b/"), &markers(), &[]);
            let crlf = parse(&lines.join("\r\n"), Path::new("/b/"), &markers(), &[]);
            prop_assert_eq!(lf, crlf);
        }

        /// Property: text without tildes passes through unchanged
        #[test]
        fn transform_without_tildes_is_identity(input in "[^~]*") {
            let transformed = transform(&input);
            prop_assert_eq!(transformed.as_ref(), input.as_str());
        }

        /// Property: runs other than eight tildes survive the transform
        #[test]
        fn transform_keeps_other_runs(len in 1usize..20, prefix in "[a-z ]{0,5}") {
            prop_assume!(len != 8);
            let input = format!("{}{}", prefix, "~".repeat(len));
            let transformed = transform(&input);
            prop_assert_eq!(transformed.as_ref(), input.as_str());
        }

        /// Property: each eight-tilde marker becomes exactly one code fence
        #[test]
        fn transform_counts_fences(parts in prop::collection::vec("[a-z ]{1,5}", 1..6)) {
            let input = parts.join("~~~~~~~~");
            let output = transform(&input);
            prop_assert_eq!(output.matches("```").count(), parts.len() - 1);
            prop_assert!(!output.contains('~'));
        }
    }
}
