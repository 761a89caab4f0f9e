//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises the controller against
//! mock ports.  All tests run on the host with no real devices.

mod adapter_tests;
mod mock_hw;
