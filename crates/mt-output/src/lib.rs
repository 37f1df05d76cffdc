//! `mt-output` — writers for generated traces.
//!
//! | File                  | Format                                           |
//! |-----------------------|--------------------------------------------------|
//! | `trace.tsv`           | `id<TAB>YYYY-MM-DDTHH:MM:SS<TAB>lat<TAB>lon`, no header |
//! | `detail_schedule.csv` | one row per movement, with header                |
//!
//! `trace.tsv` is exactly what `mt-poi` reads, so a generated day can be fed
//! straight into the scorer as the original side.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mt_output::{export_person, CsvWriter, OutputWriter, SampleWindow};
//!
//! let mut writer = CsvWriter::new(Path::new("./out"))?;
//! let window = SampleWindow::whole_day(date, 300)?;
//! export_person(&mut writer, &person, &map, &window)?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod trace;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use row::{MovementRow, PositionRow};
pub use trace::{export_person, sample_positions, SampleWindow};
pub use writer::OutputWriter;
