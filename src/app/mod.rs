//! Application core — gear decision logic, zero I/O.
//!
//! The [`controller::EngineController`] samples speed, picks a gear and
//! records gear changes.  All interaction with devices happens through
//! the **port traits** in [`ports`], keeping this layer fully testable
//! with mock adapters.

pub mod controller;
pub mod ports;
