// Shared types between detection components

//! Shared data structures
//!
//! This module defines data structures shared between components:
//! the resolved wireless interface, the target SSID pattern, the
//! detection cycle states, and configuration structures.

use serde::Deserialize;
use std::path::PathBuf;

/// Name of the host's wireless network adapter.
///
/// Resolved once at startup by the interface locator and immutable for
/// the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirelessInterface {
    name: String,
}

impl WirelessInterface {
    /// Wrap a resolved interface name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The interface name, e.g. `wlan0`
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// SSID pattern broadcast by the target device.
///
/// The phone artifact runs in hotspot mode and broadcasts an SSID of the
/// form `<prefix><NN>` where `NN` is a two-digit randomized number. The
/// suffix is extracted verbatim and not validated as numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPattern {
    /// Fixed SSID prefix, e.g. `PhoneArtifact`
    pub prefix: String,
    /// Number of suffix bytes appended by the broadcasting device
    pub suffix_len: usize,
}

impl TargetPattern {
    /// Create a pattern with the default two-digit suffix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix_len: 2,
        }
    }

    /// Total length of a matched SSID: prefix plus suffix
    pub fn full_len(&self) -> usize {
        self.prefix.len() + self.suffix_len
    }
}

/// Detection cycle states
///
/// Transitions are linear and not reentrant: a new cycle does not begin
/// until the previous one's scan, match, and publish steps complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleState {
    /// Between cycles, waiting for the next tick
    Idle,
    /// Cycle in progress (scan, match, publish)
    Scanning,
}

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// General daemon options
    pub general: GeneralConfig,
}

/// General configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct GeneralConfig {
    /// SSID prefix broadcast by the target device
    pub ssid_prefix: String,
    /// Suffix length appended to the prefix (two randomized digits)
    #[serde(default = "default_suffix_len")]
    pub suffix_len: usize,
    /// Wireless interface to scan on (auto-located when absent)
    #[serde(default)]
    pub interface: Option<String>,
    /// File the filtered scan output is written to each cycle
    #[serde(default = "default_scan_file")]
    pub scan_file: PathBuf,
    /// Cycle wake-up period in milliseconds
    #[serde(default = "default_period_millis")]
    pub period_millis: u64,
    /// Log filter level (env_logger syntax)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default values for configuration
fn default_suffix_len() -> usize {
    2
}

fn default_scan_file() -> PathBuf {
    PathBuf::from("/run/ssid-scout/ssid_list.txt")
}

fn default_period_millis() -> u64 {
    50 // 20 Hz wake-up tick; actual cadence is dominated by scan latency
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_full_len() {
        let pattern = TargetPattern::new("PhoneArtifact");
        assert_eq!(pattern.suffix_len, 2);
        assert_eq!(pattern.full_len(), "PhoneArtifact".len() + 2);
    }

    #[test]
    fn test_pattern_custom_suffix() {
        let pattern = TargetPattern {
            prefix: "Net".to_string(),
            suffix_len: 4,
        };
        assert_eq!(pattern.full_len(), 7);
    }

    #[test]
    fn test_wireless_interface_name() {
        let iface = WirelessInterface::new("wlan0");
        assert_eq!(iface.name(), "wlan0");
    }

    #[test]
    fn test_cycle_state_distinct() {
        assert_ne!(CycleState::Idle, CycleState::Scanning);
        let state = CycleState::Idle;
        let copied = state;
        assert_eq!(state, copied);
    }
}
