//! Property tests pinning the engine's contracts:
//! - `clean` is an idempotent fixpoint (no double spaces, no newlines left)
//! - `wrap`/`unwrap` round-trip for tag-free payloads
//! - rendering with no values is the identity
//! - forking with a value for every placeholder leaves none behind

use proptest::prelude::*;
use serde_json::json;
use stencil::util::{clean, unwrap, wrap};
use stencil::{Overrides, Template};

proptest! {
    /// clean reaches a fixpoint: applying it twice changes nothing, and the
    /// result holds no double space and no newline.
    #[test]
    fn clean_is_idempotent(s in "[ a-zA-Z0-9\\n.,-]{0,60}") {
        let once = clean(&s);
        prop_assert_eq!(&clean(&once), &once);
        prop_assert!(!once.contains("  "));
        prop_assert!(!once.contains('\n'));
    }
}

proptest! {
    /// Wrapping then unwrapping with the same tag pair returns the payload,
    /// as long as the payload contains neither tag.
    #[test]
    fn wrap_unwrap_round_trip(s in "[a-zA-Z0-9_-]{0,24}") {
        for (start, end) in [("{", "}"), ("<<", ">>"), ("[[", "]]")] {
            prop_assert_eq!(unwrap(&wrap(&s, start, end), start, end), s.clone());
        }
    }
}

proptest! {
    /// With no defaults and no overrides, rendering returns the source
    /// untouched, whatever it contains.
    #[test]
    fn render_without_values_is_identity(s in "\\PC{0,80}") {
        let template = Template::new(s.clone());
        prop_assert_eq!(template.render(), s);
    }
}

proptest! {
    /// Newline-free sources scan identically before and after cleaning:
    /// the construction-time token set equals a raw rescan of the source.
    #[test]
    fn scan_stable_without_newlines(s in "[a-z{} ]{0,60}") {
        let template = Template::new(s.clone());
        prop_assert_eq!(
            template.placeholders().to_vec(),
            template.remaining_placeholders(&s)
        );
    }
}

proptest! {
    /// Forking with a plain value for every placeholder leaves a template
    /// with an empty schema, and its render validates.
    #[test]
    fn fork_with_all_values_resolves(names in prop::collection::hash_set("[a-z]{1,8}", 1..5)) {
        let source = names
            .iter()
            .map(|n| format!("{{{n}}}"))
            .collect::<Vec<_>>()
            .join(" and ");
        let template = Template::new(source);
        let values: Overrides = names
            .iter()
            .map(|n| (n.clone(), json!("x")))
            .collect();
        let forked = template.fork(&values);
        prop_assert!(forked.placeholders().is_empty());
        prop_assert!(forked.validate(&forked.render()).is_ok());
    }
}
