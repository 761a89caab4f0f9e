//! End-to-end runs through the shipped adapters.

use gearshift::EngineController;
use gearshift::GearValue;
use gearshift::adapters::gearbox::SimGearbox;
use gearshift::adapters::log_sink::{LogFacadeLogger, WriterLogger};
use gearshift::adapters::speedometer::SimSpeedometer;
use gearshift::adapters::time::{FixedClock, SystemClock};
use gearshift::config::SystemConfig;
use gearshift::error::{Error, SensorError};

use super::mock_hw::fixed_ts;

#[test]
fn default_profile_runs_to_completion() {
    let config = SystemConfig::default();
    let mut c = EngineController::with_config(
        &config,
        SimSpeedometer::new(config.speed_profile_kmh.clone()),
        SimGearbox::new(config.initial_gear),
        FixedClock::new(fixed_ts()),
        WriterLogger::new(Vec::new()),
    )
    .unwrap();

    let adjustments = config.speed_profile_kmh.len() / 3;
    let mut shifts = 0;
    for _ in 0..adjustments {
        if c.adjust_gear().unwrap().is_some() {
            shifts += 1;
        }
    }
    assert_eq!(c.adjust_gear(), Err(Error::Sensor(SensorError::NoReading)));

    let (speed, gearbox, _clock, logger) = c.into_parts();
    assert_eq!(speed.remaining(), Some(0));
    assert_eq!(gearbox.shift_count(), shifts);
    assert_eq!(gearbox.engaged(), GearValue::First, "profile ends at a standstill");

    let out = String::from_utf8(logger.into_inner()).unwrap();
    assert_eq!(out.lines().count() as u32, shifts);
    for line in out.lines() {
        assert!(line.starts_with("2024-11-05 08:30:15 Gear changed to "), "{line}");
    }
}

#[test]
fn system_clock_and_facade_logger_drive_a_shift() {
    let mut c = EngineController::new(
        SimSpeedometer::new(vec![35.0, 35.0, 35.0]),
        SimGearbox::default(),
        SystemClock::new(),
        LogFacadeLogger::new(),
    );
    let change = c.adjust_gear().unwrap().unwrap();
    assert_eq!(change.to, GearValue::Third);
    assert_eq!(c.actuator().engaged(), GearValue::Third);
}

#[test]
fn implausible_reading_aborts_adjustment() {
    let mut c = EngineController::new(
        SimSpeedometer::new(vec![35.0, -4.0, 35.0]),
        SimGearbox::default(),
        FixedClock::new(fixed_ts()),
        WriterLogger::new(Vec::new()),
    );
    assert_eq!(c.adjust_gear(), Err(Error::Sensor(SensorError::OutOfRange)));
    assert_eq!(c.actuator().shift_count(), 0);
    assert!(c.logger().get_ref().is_empty());
}
