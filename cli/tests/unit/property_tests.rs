//! Property-based tests for critical validation and state-tracking logic.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use atelier_cli::domain::config::{validate_config_key, validate_config_value};
use atelier_cli::domain::draft::{Draft, drafts_differ, is_valid_agent_id};
use atelier_cli::domain::style;

// ============================================================================
// drafts_differ() property tests
// ============================================================================

proptest! {
    /// A draft never differs from its own clone.
    #[test]
    fn prop_draft_equals_its_clone(
        name in ".{0,40}",
        description in ".{0,40}",
        prompt in ".{0,200}",
        is_default in any::<bool>(),
    ) {
        let draft = Draft {
            name,
            description,
            system_prompt: prompt,
            is_default,
            ..Draft::default()
        };
        prop_assert!(!drafts_differ(&draft, &draft.clone()));
    }

    /// Changing any serialized field makes the drafts differ.
    #[test]
    fn prop_changed_name_differs(name in ".{0,40}", suffix in ".{1,10}") {
        let baseline = Draft { name: name.clone(), ..Draft::default() };
        let changed = Draft { name: format!("{name}{suffix}"), ..Draft::default() };
        prop_assert!(drafts_differ(&changed, &baseline));
    }
}

// ============================================================================
// Avatar fallback property tests
// ============================================================================

proptest! {
    /// The fallback style is a pure function of the agent id.
    #[test]
    fn prop_fallback_style_is_deterministic(id in "[a-zA-Z0-9_-]{1,40}") {
        let a = style::resolve(None, None, &id);
        let b = style::resolve(None, None, &id);
        prop_assert_eq!(a, b);
    }

    /// Fallback colors are always well-formed hex.
    #[test]
    fn prop_fallback_color_is_hex(id in "[a-zA-Z0-9_-]{1,40}") {
        let resolved = style::resolve(None, None, &id);
        prop_assert!(resolved.color.starts_with('#'));
        prop_assert_eq!(resolved.color.len(), 7);
        prop_assert!(!resolved.glyph.is_empty());
    }

    /// Explicit styling is never overridden by the fallback.
    #[test]
    fn prop_explicit_style_wins(id in "[a-zA-Z0-9_-]{1,40}", glyph in "[a-z]{1,4}") {
        let resolved = style::resolve(Some(&glyph), Some("#123456"), &id);
        prop_assert_eq!(resolved.glyph, glyph);
        prop_assert_eq!(resolved.color, "#123456");
    }
}

// ============================================================================
// is_valid_agent_id() property tests
// ============================================================================

proptest! {
    /// Well-formed ids are accepted.
    #[test]
    fn prop_wellformed_ids_accepted(id in "[A-Za-z0-9][A-Za-z0-9_-]{0,63}") {
        prop_assert!(is_valid_agent_id(&id), "rejected valid id: {id}");
    }

    /// Ids containing a path separator are always rejected.
    #[test]
    fn prop_ids_with_slash_rejected(prefix in "[a-z]{0,10}", suffix in "[a-z]{0,10}") {
        let id = format!("{prefix}/{suffix}");
        prop_assert!(!is_valid_agent_id(&id), "accepted id with slash: {id}");
    }
}

// ============================================================================
// validate_config_key() and validate_config_value() property tests
// ============================================================================

proptest! {
    /// Arbitrary keys (not in whitelist) are rejected.
    #[test]
    fn prop_arbitrary_keys_rejected(key in "[a-z]{1,20}\\.[a-z]{1,20}") {
        if key != "api.base_url" && key != "output.format" {
            prop_assert!(validate_config_key(&key).is_err(), "accepted invalid key: {key}");
        }
    }

    /// Arbitrary values for output.format (not in whitelist) are rejected.
    #[test]
    fn prop_arbitrary_format_values_rejected(value in "[a-z]{1,20}") {
        if value != "human" && value != "json" {
            prop_assert!(
                validate_config_value("output.format", &value).is_err(),
                "accepted invalid value: {value}"
            );
        }
    }
}
