// Phone-artifact SSID detection daemon

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal;
use tokio::sync::{mpsc, watch};
use ssid_scout::{
    config::load_config,
    detector::DetectionCycle,
    iface,
    scanner::IwlistScanner,
    types::{TargetPattern, WirelessInterface},
};

/// Size of the publish channel buffer (one message per cycle)
const PUBLISH_CHANNEL_SIZE: usize = 32;

#[derive(Parser)]
#[command(name = "ssid-scout")]
#[command(about = "Phone-artifact hotspot SSID detection daemon", long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "/etc/ssid-scout/config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    // Build custom Tokio runtime with limited thread pool
    // 2 threads is sufficient: 1 for the cycle loop, 1 for process spawns
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("ssid-scout")
        .thread_stack_size(2 * 1024 * 1024) // 2MB stack (vs 8MB default)
        .enable_time()
        .enable_io()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration
    let config = load_config(&args.config)
        .with_context(|| format!("Failed to load config from {:?}", args.config))?;

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.general.log_level),
    )
    .init();

    log::info!("Starting ssid-scout daemon");
    log::info!(
        "Target pattern: '{}' + {}-character suffix",
        config.general.ssid_prefix,
        config.general.suffix_len
    );
    log::info!("Scan sink: {}", config.general.scan_file.display());
    log::info!("Cycle period: {}ms", config.general.period_millis);

    // Resolve the wireless interface once; failure here is fatal since
    // interface topology does not change within a process run
    let iface = match config.general.interface.clone() {
        Some(name) => {
            log::info!("Using configured interface: {}", name);
            WirelessInterface::new(name)
        }
        None => iface::locate().context("No usable wireless interface, terminating")?,
    };

    let pattern = TargetPattern {
        prefix: config.general.ssid_prefix.clone(),
        suffix_len: config.general.suffix_len,
    };

    // Channels: publish egress and shutdown signal
    let (publish_tx, mut publish_rx) = mpsc::channel::<String>(PUBLISH_CHANNEL_SIZE);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Publish egress: one stdout line per cycle, empty when no match
    let egress_handle = tokio::spawn(async move {
        while let Some(payload) = publish_rx.recv().await {
            println!("{}", payload);
        }
    });

    let cycle = DetectionCycle::new(
        Box::new(IwlistScanner),
        iface,
        config.general.scan_file.clone(),
        pattern,
        Duration::from_millis(config.general.period_millis),
        publish_tx,
    );

    let mut detector_handle = tokio::spawn(cycle.run(shutdown_rx));

    // Set up signal handlers for graceful shutdown
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("Failed to set up SIGTERM handler")?;
    let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
        .context("Failed to set up SIGINT handler")?;

    log::info!("Daemon started successfully");

    tokio::select! {
        _ = sigterm.recv() => {
            log::info!("Received SIGTERM");
        }
        _ = sigint.recv() => {
            log::info!("Received SIGINT");
        }

        // The loop only returns on its own if the publish channel closed
        result = &mut detector_handle => {
            match result {
                Ok(Ok(())) => log::error!("Detection loop exited unexpectedly"),
                Ok(Err(e)) => log::error!("Detection loop failed: {}", e),
                Err(e) => log::error!("Detection task panicked: {}", e),
            }
            anyhow::bail!("Detection loop terminated, aborting daemon");
        }
    }

    // Cooperative shutdown: honored at the next cycle boundary
    let _ = shutdown_tx.send(true);
    detector_handle
        .await
        .context("Detection task panicked")??;

    // Dropping the cycle closed the publish side; let the egress drain
    let _ = egress_handle.await;

    log::info!("Shutdown complete");
    Ok(())
}
