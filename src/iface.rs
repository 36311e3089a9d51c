// Wireless interface locator

//! Wireless interface discovery
//!
//! This module finds the host's wireless network interface by enumerating
//! all interfaces that carry an IPv4 or IPv6 address and selecting the
//! first one whose name matches the platform's wireless naming convention.
//!
//! The naming check is an injectable predicate so platform-specific
//! schemes can be swapped without touching the selection logic. Field
//! platforms are assumed to have at most one active wireless interface,
//! so first-match is sufficient.

use crate::types::WirelessInterface;
use anyhow::{Context, Result};

/// One enumerated network interface carrying an address
#[derive(Debug, Clone)]
pub struct IfaceCandidate {
    /// Interface name, e.g. `wlan0`
    pub name: String,
    /// Whether the carried address is a loopback address
    pub is_loopback: bool,
}

/// Default wireless naming predicate for Linux predictable device names
/// (`wlan0`, `wlp3s0`, `wlx0013ef...`)
pub fn wireless_name(candidate: &IfaceCandidate) -> bool {
    candidate.name.starts_with('w')
}

/// Enumerate host interfaces that carry an IPv4 or IPv6 address
pub fn candidates() -> Result<Vec<IfaceCandidate>> {
    let interfaces = if_addrs::get_if_addrs().context("Failed to get interface addresses")?;

    Ok(interfaces
        .into_iter()
        .map(|iface| IfaceCandidate {
            is_loopback: iface.is_loopback(),
            name: iface.name,
        })
        .collect())
}

/// Select the first non-loopback candidate satisfying the naming predicate.
///
/// Enumeration order is platform-defined. Failure is fatal to the caller:
/// interface topology does not change within a process run, so there is
/// no retry.
pub fn locate_with<I, F>(candidates: I, predicate: F) -> Result<WirelessInterface>
where
    I: IntoIterator<Item = IfaceCandidate>,
    F: Fn(&IfaceCandidate) -> bool,
{
    for candidate in candidates {
        if candidate.is_loopback {
            log::debug!("Skipping loopback interface: {}", candidate.name);
            continue;
        }

        if predicate(&candidate) {
            log::info!("Selected wireless interface: {}", candidate.name);
            return Ok(WirelessInterface::new(candidate.name));
        }

        log::debug!("Skipping non-wireless interface: {}", candidate.name);
    }

    anyhow::bail!("No wireless interface found")
}

/// Locate the host's wireless interface using the default naming predicate
pub fn locate() -> Result<WirelessInterface> {
    locate_with(candidates()?, wireless_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str) -> IfaceCandidate {
        IfaceCandidate {
            name: name.to_string(),
            is_loopback: name == "lo",
        }
    }

    #[test]
    fn test_selects_wireless_interface() {
        let list = vec![candidate("lo"), candidate("eth0"), candidate("wlan0")];
        let iface = locate_with(list, wireless_name).unwrap();
        assert_eq!(iface.name(), "wlan0");
    }

    #[test]
    fn test_no_wireless_interface_fails() {
        let list = vec![candidate("lo"), candidate("eth0")];
        assert!(locate_with(list, wireless_name).is_err());
    }

    #[test]
    fn test_empty_candidate_list_fails() {
        assert!(locate_with(Vec::new(), wireless_name).is_err());
    }

    #[test]
    fn test_first_match_wins() {
        let list = vec![candidate("wlp3s0"), candidate("wlan0")];
        let iface = locate_with(list, wireless_name).unwrap();
        assert_eq!(iface.name(), "wlp3s0");
    }

    #[test]
    fn test_loopback_skipped_even_if_predicate_matches() {
        // A predicate that would accept anything still never picks loopback
        let list = vec![candidate("lo"), candidate("eth0")];
        let iface = locate_with(list, |_| true).unwrap();
        assert_eq!(iface.name(), "eth0");
    }

    #[test]
    fn test_custom_predicate() {
        // USB wireless adapters on some platforms are named wlx<mac>
        let list = vec![candidate("wlan0"), candidate("wlx0013ef5a0b10")];
        let iface = locate_with(list, |c| c.name.starts_with("wlx")).unwrap();
        assert_eq!(iface.name(), "wlx0013ef5a0b10");
    }

    #[test]
    fn test_duplicate_names_single_selection() {
        // get_if_addrs returns one entry per address; the same interface
        // can appear twice (IPv4 and IPv6)
        let list = vec![candidate("wlan0"), candidate("wlan0")];
        let iface = locate_with(list, wireless_name).unwrap();
        assert_eq!(iface.name(), "wlan0");
    }
}
