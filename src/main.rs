//! Gearshift host simulation.
//!
//! ```text
//!  SimSpeedometer ──▶ ┌──────────────────┐ ──▶ SimGearbox
//!                     │ EngineController │
//!     SystemClock ──▶ └──────────────────┘ ──▶ WriterLogger(stdout)
//! ```
//!
//! Usage: `gearshift [CONFIG.json]`.  Replays the configured speed
//! profile, adjusting gear once per control interval until the profile
//! runs out.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use log::info;

use gearshift::adapters::gearbox::SimGearbox;
use gearshift::adapters::log_sink::WriterLogger;
use gearshift::adapters::speedometer::SimSpeedometer;
use gearshift::adapters::time::SystemClock;
use gearshift::config::SystemConfig;
use gearshift::error::{Error, SensorError};
use gearshift::EngineController;

fn load_config() -> Result<SystemConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let config = SystemConfig::from_json(&text).with_context(|| format!("loading {path}"))?;
            info!("Config loaded from {}", path);
            Ok(config)
        }
        None => {
            info!("No config given, using defaults");
            Ok(SystemConfig::default())
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    info!("Gearshift v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    config.validate().context("invalid configuration")?;

    let mut controller = EngineController::with_config(
        &config,
        SimSpeedometer::new(config.speed_profile_kmh.clone()),
        SimGearbox::new(config.initial_gear),
        SystemClock::new(),
        WriterLogger::new(io::stdout()),
    )?;
    let interval = Duration::from_millis(u64::from(config.control_interval_ms));

    loop {
        match controller.adjust_gear() {
            Ok(_) => {}
            Err(Error::Sensor(SensorError::NoReading)) => break,
            Err(e) => return Err(e).context("gear adjustment failed"),
        }
        thread::sleep(interval);
    }

    let gearbox = controller.actuator();
    info!(
        "Speed profile exhausted: {} shifts, final gear {}",
        gearbox.shift_count(),
        controller.current_gear()
    );
    info!(
        "Recent gears: {}",
        gearbox.recent().map(|g| g.name()).collect::<Vec<_>>().join(" -> ")
    );
    Ok(())
}
