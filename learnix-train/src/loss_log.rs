// learnix-train/src/loss_log.rs

use crate::error::TrainError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Per-epoch loss trace, written as headerless `epoch, loss` CSV rows.
///
/// The file is truncated on creation. `finish` flushes and surfaces any write
/// error; dropping the log without calling it still flushes through
/// `BufWriter`, but silently.
#[derive(Debug)]
pub struct LossLog {
    writer: BufWriter<File>,
}

impl LossLog {
    /// Creates (or truncates) the CSV at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, TrainError> {
        let file = File::create(path)?;
        Ok(LossLog {
            writer: BufWriter::new(file),
        })
    }

    /// Appends one `epoch, loss` row.
    pub fn record(&mut self, epoch: usize, loss: f32) -> Result<(), TrainError> {
        writeln!(self.writer, "{}, {}", epoch, loss)?;
        Ok(())
    }

    /// Flushes buffered rows, reporting any write error.
    pub fn finish(mut self) -> Result<(), TrainError> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "loss_log_test.rs"]
mod tests;
