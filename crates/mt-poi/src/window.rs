//! Time-window classification.
//!
//! | Window    | Days     | Clock time                                        |
//! |-----------|----------|---------------------------------------------------|
//! | `night`   | Mon–Fri  | `> night_start:00` or `< night_end:00`            |
//! | `work`    | Mon–Fri  | `> work_start:00` and `< work_end:00`, hour not in `lunch_hours` |
//! | `weekend` | Sat–Sun  | `> weekend_start:00` and `< weekend_end:00` (only if `weekend_enabled`) |
//!
//! Night takes precedence.  Anything else is unclassified and contributes no
//! dwell time.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::PoiConfig;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PoiWindow {
    Night,
    Work,
    Weekend,
}

impl PoiWindow {
    pub fn as_str(self) -> &'static str {
        match self {
            PoiWindow::Night => "night",
            PoiWindow::Work => "work",
            PoiWindow::Weekend => "weekend",
        }
    }
}

impl fmt::Display for PoiWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(cfg: &PoiConfig, at: NaiveDateTime) -> Option<PoiWindow> {
    let t = at.time();
    let hour = PoiConfig::at_hour;

    if at.weekday().num_days_from_monday() < 5 {
        if t > hour(cfg.night_start) || t < hour(cfg.night_end) {
            Some(PoiWindow::Night)
        } else if t > hour(cfg.work_start)
            && t < hour(cfg.work_end)
            && !cfg.lunch_hours.contains(&t.hour())
        {
            Some(PoiWindow::Work)
        } else {
            None
        }
    } else if cfg.weekend_enabled && t > hour(cfg.weekend_start) && t < hour(cfg.weekend_end) {
        Some(PoiWindow::Weekend)
    } else {
        None
    }
}
