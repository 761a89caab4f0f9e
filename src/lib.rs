//! Gearshift controller library.
//!
//! Samples vehicle speed, picks a gear from a fixed shift table, and
//! logs every gear change with a timestamp.  The decision core in
//! [`app`] only talks to the outside world through port traits; the
//! [`adapters`] provide host-side implementations.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod control;
pub mod error;
pub mod gear;
pub mod timestamp;

pub use app::controller::{EngineController, GearChange};
pub use error::{Error, Result};
pub use gear::GearValue;
pub use timestamp::Timestamp;
