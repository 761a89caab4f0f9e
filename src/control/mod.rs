//! Control policies — pure functions of measured values, no I/O.

pub mod shift;
