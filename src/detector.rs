// Detection cycle driver

//! Detection cycle driver
//!
//! This module composes the scanner and matcher on a fixed cadence and
//! forwards each cycle's result to the publish channel. Cycles execute
//! strictly sequentially: scan, match, publish, then wait for the next
//! tick. Downstream consumers receive exactly one message per cycle, an
//! empty payload when no artifact network was found.
//!
//! Shutdown is cooperative and honored only at cycle boundaries, never
//! mid-scan.

use crate::matcher;
use crate::scanner::Scanner;
use crate::types::{CycleState, TargetPattern, WirelessInterface};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{interval, MissedTickBehavior};

/// Drives repeated scan-match-publish cycles for one wireless interface
pub struct DetectionCycle {
    scanner: Box<dyn Scanner + Send + Sync>,
    iface: WirelessInterface,
    sink: PathBuf,
    pattern: TargetPattern,
    period: Duration,
    publish_tx: mpsc::Sender<String>,
    state: CycleState,
}

impl DetectionCycle {
    /// Create a cycle driver over a resolved interface
    pub fn new(
        scanner: Box<dyn Scanner + Send + Sync>,
        iface: WirelessInterface,
        sink: PathBuf,
        pattern: TargetPattern,
        period: Duration,
        publish_tx: mpsc::Sender<String>,
    ) -> Self {
        Self {
            scanner,
            iface,
            sink,
            pattern,
            period,
            publish_tx,
            state: CycleState::Idle,
        }
    }

    /// Current cycle state
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Run one complete cycle: scan, match, publish.
    ///
    /// Scan and sink failures are absorbed and surfaced as an empty
    /// publish payload; the matcher still runs against whatever the sink
    /// holds (possibly stale output from a previous cycle). The only hard
    /// error is a closed publish channel, which means the consumer died
    /// and the daemon must stop.
    pub async fn run_cycle(&mut self) -> Result<()> {
        self.state = CycleState::Scanning;

        if let Err(err) = self.scanner.scan(self.iface.name(), &self.sink).await {
            log::warn!("Scan on {} failed: {}", self.iface.name(), err);
        }

        let payload = match matcher::search_scan_file(&self.sink, &self.pattern) {
            Some(name) => {
                log::info!("Found artifact network: {}", name);
                name
            }
            None => {
                log::debug!("Artifact network {} not found", self.pattern.prefix);
                String::new()
            }
        };

        self.publish_tx
            .send(payload)
            .await
            .context("Publish channel closed")?;

        self.state = CycleState::Idle;
        Ok(())
    }

    /// Run cycles at the configured period until shutdown is signaled.
    ///
    /// The shutdown signal is checked only between cycles; a cycle in
    /// progress always completes its scan, match, and publish steps.
    pub async fn run(mut self, mut shutdown: watch::Receiver<bool>) -> Result<()> {
        let mut timer = interval(self.period);
        // A slow scan overruns the tick; resume the cadence instead of
        // bursting catch-up cycles
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        log::info!(
            "Detection loop started on {} (period {:?}, target prefix '{}')",
            self.iface.name(),
            self.period,
            self.pattern.prefix
        );

        loop {
            tokio::select! {
                biased;

                // A changed value or a dropped sender both mean stop
                _ = shutdown.changed() => {
                    log::info!("Shutdown signaled, stopping detection loop");
                    break;
                }
                _ = timer.tick() => {
                    self.run_cycle().await?;
                }
            }
        }

        Ok(())
    }
}
