//! Scorer parameters.
//!
//! Deserializes from the same flat object the scorer has always accepted,
//! e.g. `{"size": 2, "nbPOI": 3, "night_start": 22}`.  Missing keys take
//! their defaults.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::{PoiError, PoiResult};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoiConfig {
    /// Decimal places coordinates are rounded to before bucketing.
    /// 4 ≈ metre, 3 ≈ street, 2 ≈ neighbourhood, 1 ≈ city, 0 ≈ region,
    /// -1 ≈ country.
    pub size: i32,
    /// Top cells kept per id and window.
    #[serde(alias = "nbPOI")]
    pub nb_poi: usize,
    pub night_start: u32,
    pub night_end: u32,
    pub work_start: u32,
    pub work_end: u32,
    pub weekend_start: u32,
    pub weekend_end: u32,
    /// Hours excluded from the work window.
    pub lunch_hours: Vec<u32>,
    /// Count Saturday/Sunday rows toward the `weekend` window.
    pub weekend_enabled: bool,
    /// Field separator for both input files.
    pub delimiter: char,
    /// Column-0 marker for deleted anonymized rows.
    pub deletion_sentinel: String,
}

impl Default for PoiConfig {
    fn default() -> Self {
        Self {
            size: 2,
            nb_poi: 1,
            night_start: 22,
            night_end: 6,
            work_start: 9,
            work_end: 16,
            weekend_start: 10,
            weekend_end: 18,
            lunch_hours: vec![12, 13],
            weekend_enabled: false,
            delimiter: '\t',
            deletion_sentinel: "DEL".to_owned(),
        }
    }
}

impl PoiConfig {
    pub fn from_json(json: &str) -> PoiResult<Self> {
        let cfg: PoiConfig =
            serde_json::from_str(json).map_err(|e| PoiError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every hour is a valid clock hour and the delimiter is one byte.
    pub fn validate(&self) -> PoiResult<()> {
        for (name, h) in [
            ("night_start", self.night_start),
            ("night_end", self.night_end),
            ("work_start", self.work_start),
            ("work_end", self.work_end),
            ("weekend_start", self.weekend_start),
            ("weekend_end", self.weekend_end),
        ] {
            if h >= 24 {
                return Err(PoiError::Config(format!("{name} must be in 0..24, got {h}")));
            }
        }
        if !self.delimiter.is_ascii() {
            return Err(PoiError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    pub(crate) fn delimiter_byte(&self) -> u8 {
        // Checked by validate(), which PoiExtractor::new runs.
        self.delimiter as u8
    }

    /// `hour:00:00` as a clock time.  Hours are validated to be < 24.
    pub(crate) fn at_hour(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
    }
}
