//! The `OutputWriter` trait.

use crate::{MovementRow, OutputResult, PositionRow};

pub trait OutputWriter {
    /// Append sampled positions to the trace.
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()>;

    /// Append movements to the detail-schedule export.
    fn write_movements(&mut self, rows: &[MovementRow]) -> OutputResult<()>;

    /// Flush all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
