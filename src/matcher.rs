// Scan sink SSID matcher

//! Target SSID matching
//!
//! This module searches one cycle's captured scan output for the target
//! SSID pattern and extracts the full network name (prefix plus
//! fixed-width suffix).
//!
//! Only the first occurrence of the prefix is considered: field platforms
//! assume at most one artifact network is in range per cycle, and handling
//! multiple simultaneous artifacts is a documented limitation. The suffix
//! is taken verbatim and not validated as numeric, matching the target's
//! broadcast format.

use crate::types::TargetPattern;
use std::fs;
use std::path::Path;

/// Search text for the first occurrence of the pattern prefix and extract
/// the full network name.
///
/// Returns `None` when the prefix is absent, or when fewer than
/// `suffix_len` bytes follow it (a match is always exactly
/// `prefix + suffix` long). Extraction is byte-based; a multi-byte
/// character boundary at the cut point degrades to `None` rather than
/// panicking.
pub fn search_text(text: &str, pattern: &TargetPattern) -> Option<String> {
    let start = text.find(&pattern.prefix)?;
    text.get(start..start + pattern.full_len())
        .map(|name| name.to_string())
}

/// Search the scan sink for the target pattern.
///
/// An unreadable or missing sink degrades to `None`: a scan file that
/// cannot be read is operationally equivalent to an empty scan, so I/O
/// failure and "prefix not found" are treated identically.
pub fn search_scan_file(sink: &Path, pattern: &TargetPattern) -> Option<String> {
    let contents = match fs::read_to_string(sink) {
        Ok(contents) => contents,
        Err(err) => {
            log::debug!("Scan sink {} unreadable: {}", sink.display(), err);
            return None;
        }
    };

    search_text(&contents, pattern)
}
