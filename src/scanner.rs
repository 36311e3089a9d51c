// Wireless scan executor

//! Wireless network scanning
//!
//! This module invokes the platform's wireless scan facility (`iwlist`)
//! for a given interface, filters the output to SSID-bearing lines, and
//! writes the result to the scan sink file.
//!
//! Scanning is modeled as the [`Scanner`] capability so tests can
//! substitute a fake without invoking real OS facilities. The external
//! scan is synchronous from the cycle's point of view and typically takes
//! a few seconds; no timeout is imposed on it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use tokio::process::Command;

/// Validates that an interface name is safe to pass to external commands.
/// Only allows alphanumeric characters, hyphens, and underscores.
pub fn validate_interface_name(name: &str) -> Result<()> {
    if name.is_empty() {
        anyhow::bail!("Interface name cannot be empty");
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        anyhow::bail!(
            "Interface name contains invalid characters: '{}'. Only alphanumeric, hyphens, and underscores are allowed",
            name
        );
    }

    Ok(())
}

/// Capability for producing a scan sink: a text artifact listing visible
/// network names for the given interface
#[async_trait]
pub trait Scanner {
    /// Scan on `iface` and write SSID-bearing output lines to `sink`
    async fn scan(&self, iface: &str, sink: &Path) -> Result<()>;
}

/// Keep only the network-name-bearing lines of raw scan output
pub fn filter_ssid_lines(raw: &str) -> String {
    let mut filtered = String::new();
    for line in raw.lines() {
        if line.contains("SSID") {
            filtered.push_str(line);
            filtered.push('\n');
        }
    }
    filtered
}

/// Write the sink with atomic replace-on-write semantics.
///
/// The sink is a shared resource a concurrent external reader may open;
/// temp-file-plus-rename ensures it never observes a partial write.
pub fn write_sink(sink: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = sink.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).context("Failed to create scan sink directory")?;
        }
    }

    let tmp = sink.with_extension("tmp");
    fs::write(&tmp, contents).context("Failed to write scan sink temp file")?;
    fs::rename(&tmp, sink).context("Failed to replace scan sink")?;

    Ok(())
}

/// Scanner backed by the `iwlist` wireless tool.
///
/// Requires permission to trigger scans; on most systems this means the
/// daemon runs as root or `iwlist` returns cached results.
pub struct IwlistScanner;

#[async_trait]
impl Scanner for IwlistScanner {
    async fn scan(&self, iface: &str, sink: &Path) -> Result<()> {
        let output = Command::new("iwlist")
            .args([iface, "scan"])
            .output()
            .await
            .context("Failed to execute iwlist scan")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("iwlist scan failed: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let filtered = filter_ssid_lines(&stdout);

        log::debug!(
            "Scan on {} produced {} SSID line(s)",
            iface,
            filtered.lines().count()
        );

        write_sink(sink, &filtered)
    }
}
