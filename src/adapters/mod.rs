//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements    | Connects to                  |
//! |----------------|---------------|------------------------------|
//! | `gearbox`      | GearActuator  | Simulated gearbox            |
//! | `log_sink`     | Logger        | `log` facade / any io::Write |
//! | `speedometer`  | SpeedSource   | Scripted speed readings      |
//! | `time`         | Clock         | Host wall clock / fixed time |

pub mod gearbox;
pub mod log_sink;
pub mod speedometer;
pub mod time;
