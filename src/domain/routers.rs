//! Router list parsing - the supported-routers constructor argument.
//!
//! The DiamondHands constructor takes the list of Uniswap router
//! addresses it will recognize. Operators supply that list as a single
//! comma-separated string (`SUPPORTED_UNISWAP_ROUTERS`); this module
//! turns it into an ordered, validated address list. Pure, no I/O
//! (hexagonal architecture inner ring).

use alloy::primitives::Address;
use thiserror::Error;

/// Errors from validating the router list.
#[derive(Debug, Error)]
pub enum RouterListError {
    /// The configuration value was empty or contained an empty entry
    /// (e.g. a trailing comma).
    #[error("router list entry {index} is empty")]
    EmptyEntry {
        /// Zero-based position of the offending entry.
        index: usize,
    },
    /// An entry did not parse as a 20-byte hex address.
    #[error("router list entry {index} ({entry:?}) is not a valid address: {source}")]
    InvalidAddress {
        /// Zero-based position of the offending entry.
        index: usize,
        /// The raw entry as supplied.
        entry: String,
        /// The underlying hex parse failure.
        #[source]
        source: alloy::hex::FromHexError,
    },
}

/// Split the raw configuration value into its entries.
///
/// Preserves the source semantics exactly: split on `,`, keep order,
/// no trimming, no deduplication. An empty input yields a single
/// empty-string entry; validation of entries is `parse_routers`'s job.
#[must_use]
pub fn split_routers(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}

/// Split and validate the router list into addresses.
///
/// Entries are trimmed before parsing so that a value like
/// `"0xA..., 0xB..."` works, but an empty entry (empty input, trailing
/// comma, double comma) is rejected rather than silently dropped -
/// deploying with a malformed router list is never recoverable
/// downstream.
///
/// Order is preserved and duplicates are kept: the constructor receives
/// the list exactly as configured.
pub fn parse_routers(raw: &str) -> Result<Vec<Address>, RouterListError> {
    split_routers(raw)
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let trimmed = entry.trim();
            if trimmed.is_empty() {
                return Err(RouterListError::EmptyEntry { index });
            }
            trimmed
                .parse::<Address>()
                .map_err(|source| RouterListError::InvalidAddress {
                    index,
                    entry: entry.clone(),
                    source,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTER_A: &str = "0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D";
    const ROUTER_B: &str = "0xE592427A0AEce92De3Edee1F18E0157C05861564";
    const ROUTER_C: &str = "0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45";

    #[test]
    fn split_preserves_order() {
        let raw = "0xAAA,0xBBB,0xCCC";
        assert_eq!(split_routers(raw), vec!["0xAAA", "0xBBB", "0xCCC"]);
    }

    #[test]
    fn split_single_entry_without_delimiter() {
        assert_eq!(split_routers("0xAAA"), vec!["0xAAA"]);
    }

    #[test]
    fn split_empty_input_yields_one_empty_entry() {
        assert_eq!(split_routers(""), vec![String::new()]);
    }

    #[test]
    fn parse_valid_list_keeps_order_and_duplicates() {
        let raw = format!("{ROUTER_A},{ROUTER_B},{ROUTER_A}");
        let routers = parse_routers(&raw).unwrap();
        assert_eq!(routers.len(), 3);
        assert_eq!(routers[0], ROUTER_A.parse::<Address>().unwrap());
        assert_eq!(routers[1], ROUTER_B.parse::<Address>().unwrap());
        assert_eq!(routers[2], routers[0]);
    }

    #[test]
    fn parse_trims_whitespace_around_entries() {
        let raw = format!(" {ROUTER_A} , {ROUTER_C}");
        let routers = parse_routers(&raw).unwrap();
        assert_eq!(routers.len(), 2);
        assert_eq!(routers[1], ROUTER_C.parse::<Address>().unwrap());
    }

    #[test]
    fn parse_rejects_empty_input() {
        match parse_routers("") {
            Err(RouterListError::EmptyEntry { index: 0 }) => {}
            other => panic!("expected EmptyEntry, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_trailing_comma() {
        let raw = format!("{ROUTER_A},");
        match parse_routers(&raw) {
            Err(RouterListError::EmptyEntry { index: 1 }) => {}
            other => panic!("expected EmptyEntry at 1, got {other:?}"),
        }
    }

    #[test]
    fn parse_rejects_garbage_entry() {
        let raw = format!("{ROUTER_A},not-an-address");
        match parse_routers(&raw) {
            Err(RouterListError::InvalidAddress { index: 1, entry, .. }) => {
                assert_eq!(entry, "not-an-address");
            }
            other => panic!("expected InvalidAddress at 1, got {other:?}"),
        }
    }
}
