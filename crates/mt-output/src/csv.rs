//! CSV output backend.
//!
//! Creates two files in the output directory:
//! - `trace.tsv` (tab-separated, headerless)
//! - `detail_schedule.csv`

use std::fs::File;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::row::TIMESTAMP_FORMAT;
use crate::{MovementRow, OutputResult, OutputWriter, PositionRow};

pub const TRACE_FILE: &str = "trace.tsv";
pub const DETAIL_FILE: &str = "detail_schedule.csv";

pub struct CsvWriter {
    trace:    Writer<File>,
    detail:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create both files in `dir` (truncating existing ones) and write the
    /// detail-schedule header.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trace = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_path(dir.join(TRACE_FILE))?;

        let mut detail = Writer::from_path(dir.join(DETAIL_FILE))?;
        detail.write_record([
            "person_id",
            "start_waypoint",
            "end_waypoint",
            "start_time",
            "arrival_time",
            "distance_m",
            "travel_time_s",
            "route",
        ])?;

        Ok(Self { trace, detail, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_positions(&mut self, rows: &[PositionRow]) -> OutputResult<()> {
        for row in rows {
            self.trace.write_record(&[
                row.person_id.to_string(),
                row.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                row.lat.to_string(),
                row.lon.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_movements(&mut self, rows: &[MovementRow]) -> OutputResult<()> {
        for row in rows {
            self.detail.write_record(&[
                row.person_id.to_string(),
                row.start_waypoint.clone(),
                row.end_waypoint.clone(),
                row.start_time.to_string(),
                row.arrival_time.to_string(),
                row.distance_m.to_string(),
                row.travel_time_s.to_string(),
                row.route.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.detail.flush()?;
        Ok(())
    }
}
