//! One trace row and the grid cell its coordinate falls in.
//!
//! Rows are `id, timestamp, lat, lon[, ...]`.  Only the first 19 characters
//! of the timestamp are read, so fractional seconds and UTC offsets are
//! ignored: `2024-03-04T08:15:00.250+07:00` is `2024-03-04 08:15:00`.

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::{PoiError, PoiResult};

const TIMESTAMP_LEN: usize = 19;

/// A parsed row.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceRow {
    pub id:        String,
    pub timestamp: NaiveDateTime,
    pub lat:       f64,
    pub lon:       f64,
}

impl TraceRow {
    /// Parse `record`; `line` (1-based) is only used in error messages.
    pub fn parse(record: &StringRecord, line: u64) -> PoiResult<Self> {
        let field = |i: usize, name: &str| {
            record.get(i).map(str::trim).ok_or_else(|| PoiError::Row {
                line,
                reason: format!("missing {name} column"),
            })
        };
        let number = |i: usize, name: &str| -> PoiResult<f64> {
            let s = field(i, name)?;
            s.parse().map_err(|_| PoiError::Row { line, reason: format!("invalid {name} {s:?}") })
        };

        let id = field(0, "id")?.to_owned();
        let raw = field(1, "timestamp")?;
        let timestamp = parse_timestamp(raw)
            .ok_or_else(|| PoiError::Row { line, reason: format!("invalid timestamp {raw:?}") })?;
        Ok(Self { id, timestamp, lat: number(2, "latitude")?, lon: number(3, "longitude")? })
    }

    pub fn cell(&self, size: i32) -> GridCell {
        GridCell::round(self.lat, self.lon, size)
    }
}

/// ISO-8601 date-time prefix, `T` or space separated; a bare date is
/// midnight.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = match raw.char_indices().nth(TIMESTAMP_LEN) {
        Some((i, _)) => &raw[..i],
        None => raw,
    };
    const FORMATS: [&str; 4] =
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(|d| d.and_time(chrono::NaiveTime::MIN)))
}

// ── GridCell ──────────────────────────────────────────────────────────────────

/// A coordinate rounded to `size` decimal places, held as integer multiples
/// of `10^-size` so it hashes and orders exactly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    pub lat: i64,
    pub lon: i64,
}

impl GridCell {
    /// Round half to even, like the scorer has always done.
    pub fn round(lat: f64, lon: f64, size: i32) -> Self {
        let cell = |x: f64| shift(x, size).round_ties_even() as i64;
        Self { lat: cell(lat), lon: cell(lon) }
    }

    /// Cell centre as `(lat, lon)` degrees.
    pub fn to_degrees(self, size: i32) -> (f64, f64) {
        (shift(self.lat as f64, -size), shift(self.lon as f64, -size))
    }
}

/// `x · 10^exp`, dividing for negative exponents so whole powers of ten stay
/// exact.
fn shift(x: f64, exp: i32) -> f64 {
    if exp >= 0 {
        x * 10f64.powi(exp)
    } else {
        x / 10f64.powi(-exp)
    }
}
