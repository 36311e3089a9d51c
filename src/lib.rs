// Phone-artifact SSID detection library
// Shared modules for daemon and tests

#![warn(missing_docs)]

//! Phone-artifact SSID detection library
//!
//! This library provides the core functionality for periodically detecting
//! a rescue-target phone hotspot whose SSID follows a known
//! prefix-plus-two-digit-suffix pattern, and publishing the discovered
//! network name to downstream consumers.
//!
//! # Main Components
//!
//! - [`config`]: Configuration file parsing and validation
//! - [`iface`]: Wireless interface discovery
//! - [`scanner`]: Wireless network scanning and sink capture
//! - [`matcher`]: Target SSID matching against captured scan output
//! - [`detector`]: Scan-match-publish cycle driver
//! - [`types`]: Shared data structures

pub mod config;
pub mod detector;
pub mod iface;
pub mod matcher;
pub mod scanner;
pub mod types;
