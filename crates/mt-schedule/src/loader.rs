//! CSV candidate-schedule loader.
//!
//! # CSV format
//!
//! One row per movement, in execution order:
//!
//! ```csv
//! start_time,start_waypoint,end_waypoint
//! 08:00,home,park
//! 10:00:30,park,healthcare
//! 12:00,healthcare,home
//! ```
//!
//! Rows are returned as unvalidated [`CandidateEntry`]s; times and waypoint
//! names are checked later by [`ScheduleBuilder`](crate::ScheduleBuilder).
//! Only structural problems (missing columns, bad CSV) are errors here.

use std::io::Read;
use std::path::Path;

use crate::{CandidateEntry, ScheduleError, ScheduleResult};

/// Load candidate movements from a CSV file.
pub fn load_candidates_csv(path: &Path) -> ScheduleResult<Vec<CandidateEntry>> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_candidates_reader(file)
}

/// Like [`load_candidates_csv`] but accepts any `Read` source.
pub fn load_candidates_reader<R: Read>(reader: R) -> ScheduleResult<Vec<CandidateEntry>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CandidateEntry>()
        .map(|row| row.map_err(|e| ScheduleError::Parse(e.to_string())))
        .collect()
}
