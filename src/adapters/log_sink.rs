//! Log line sinks.
//!
//! [`LogFacadeLogger`] forwards gear-change lines to the `log` facade
//! (whatever backend the binary installed).  [`WriterLogger`] writes them
//! verbatim, one per line, to any `io::Write`.

use std::io::Write;

use log::{info, warn};

use crate::app::ports::Logger;
use crate::error::LogError;

/// Adapter that emits every line at `info` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacadeLogger;

impl LogFacadeLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for LogFacadeLogger {
    fn log(&mut self, line: &str) -> Result<(), LogError> {
        info!("GEAR | {}", line);
        Ok(())
    }
}

/// Adapter that writes `line\n` to the wrapped writer and flushes.
pub struct WriterLogger<W: Write> {
    out: W,
}

impl<W: Write> WriterLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Logger for WriterLogger<W> {
    fn log(&mut self, line: &str) -> Result<(), LogError> {
        writeln!(self.out, "{}", line)
            .and_then(|()| self.out.flush())
            .map_err(|e| {
                warn!("Log line write failed: {}", e);
                LogError::WriteFailed
            })
    }
}
