//! Property-Based Tests — Router List Invariants
//!
//! Uses `proptest` to verify that splitting and parsing the router
//! configuration value maintains its invariants across random inputs.

use alloy::primitives::Address;
use proptest::prelude::*;

use diamond_hands_deployer::domain::routers::{parse_routers, split_routers};

/// Strategy producing an arbitrary 20-byte address.
fn arb_address() -> impl Strategy<Value = Address> {
    proptest::array::uniform20(any::<u8>()).prop_map(Address::from)
}

// ── Split Properties ────────────────────────────────────────

proptest! {
    /// Splitting yields exactly one more entry than there are commas.
    #[test]
    fn split_entry_count_is_commas_plus_one(raw in ".{0,200}") {
        let commas = raw.matches(',').count();
        let entries = split_routers(&raw);
        prop_assert_eq!(entries.len(), commas + 1);
    }

    /// No entry ever contains the delimiter.
    #[test]
    fn split_entries_never_contain_delimiter(raw in ".{0,200}") {
        for entry in split_routers(&raw) {
            prop_assert!(!entry.contains(','));
        }
    }

    /// An input without the delimiter is returned as-is, unmodified.
    #[test]
    fn split_without_delimiter_is_identity(raw in "[^,]{0,80}") {
        prop_assert_eq!(split_routers(&raw), vec![raw]);
    }
}

// ── Parse Properties ────────────────────────────────────────

proptest! {
    /// Parsing a joined address list preserves order and multiplicity.
    #[test]
    fn parse_preserves_configured_order(
        addrs in proptest::collection::vec(arb_address(), 1..12),
    ) {
        let raw = addrs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let parsed = parse_routers(&raw).unwrap();
        prop_assert_eq!(parsed, addrs);
    }

    /// A trailing comma is always rejected, whatever precedes it.
    #[test]
    fn parse_rejects_trailing_comma(
        addrs in proptest::collection::vec(arb_address(), 1..6),
    ) {
        let mut raw = addrs
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        raw.push(',');

        prop_assert!(parse_routers(&raw).is_err());
    }
}
