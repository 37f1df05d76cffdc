//! Wall-clock time-of-day and movement speed.
//!
//! # Design
//!
//! A schedule describes one generic day, so time is a `TimeOfDay` counted in
//! whole seconds since midnight with no date attached.  Integer seconds keep
//! comparisons exact and make the `"HH:MM:SS"` persisted form lossless:
//!
//!   arrival = (start + floor(travel_secs)) mod 86_400
//!
//! Adding a duration wraps silently at midnight; there is no day rollover.
//! Parsing goes through `chrono` so the accepted formats match the usual
//! `strptime`-style patterns.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::{MtError, MtResult};

/// Seconds in one day.
pub const SECS_PER_DAY: u32 = 86_400;

// ── TimeOfDay ─────────────────────────────────────────────────────────────────

/// Whole-second time of day in `[00:00:00, 23:59:59]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from hour/minute/second; `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(TimeOfDay(hour * 3_600 + minute * 60 + second))
        } else {
            None
        }
    }

    /// Build from seconds since midnight, wrapping at one day.
    #[inline]
    pub const fn from_secs_wrapping(secs: u32) -> Self {
        TimeOfDay(secs % SECS_PER_DAY)
    }

    /// Convert a `chrono` time, dropping sub-second precision.
    pub fn from_naive(t: NaiveTime) -> Self {
        TimeOfDay(t.num_seconds_from_midnight())
    }

    /// Strict `"HH:MM:SS"` parse (the persisted form and query format).
    pub fn parse_hms(s: &str) -> MtResult<Self> {
        NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
            .map(Self::from_naive)
            .map_err(|e| MtError::Parse(format!("invalid time {s:?} (expected HH:MM:SS): {e}")))
    }

    /// Accept `"HH:MM"` or `"HH:MM:SS"`; seconds, if present, are truncated.
    pub fn parse_hm_lenient(s: &str) -> MtResult<Self> {
        let s = s.trim();
        let parts: Vec<&str> = s.split(':').collect();
        let hm = if parts.len() == 3 { parts[..2].join(":") } else { s.to_owned() };
        NaiveTime::parse_from_str(&hm, "%H:%M")
            .map(Self::from_naive)
            .map_err(|e| MtError::Parse(format!("invalid time {s:?} (expected HH:MM): {e}")))
    }

    /// Seconds since midnight.
    #[inline]
    pub fn secs(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 3_600
    }

    pub fn minute(self) -> u32 {
        (self.0 % 3_600) / 60
    }

    pub fn second(self) -> u32 {
        self.0 % 60
    }

    /// Add a (possibly fractional) number of seconds.  The fraction is
    /// truncated and the result wraps at midnight.
    pub fn add_secs_wrapping(self, secs: f64) -> Self {
        let whole = secs.trunc() as i64;
        let total = (self.0 as i64 + whole).rem_euclid(SECS_PER_DAY as i64);
        TimeOfDay(total as u32)
    }

    /// Signed seconds from `earlier` to `self` within the same day.
    #[inline]
    pub fn secs_since(self, earlier: TimeOfDay) -> i64 {
        self.0 as i64 - earlier.0 as i64
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl FromStr for TimeOfDay {
    type Err = MtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hms(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeOfDay {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeOfDay {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        TimeOfDay::parse_hms(&s).map_err(serde::de::Error::custom)
    }
}

// ── Speed ─────────────────────────────────────────────────────────────────────

/// Movement speed in metres per second.  Always finite and strictly positive,
/// so `distance / speed` is a well-defined travel time.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
pub struct Speed(f64);

impl Speed {
    /// `None` for zero, negative, NaN, or infinite values.
    pub fn new(mps: f64) -> Option<Self> {
        (mps.is_finite() && mps > 0.0).then_some(Speed(mps))
    }

    #[inline]
    pub fn mps(self) -> f64 {
        self.0
    }

    /// Seconds needed to cover `distance_m`.
    #[inline]
    pub fn travel_secs(self, distance_m: f64) -> f64 {
        distance_m / self.0
    }
}

impl TryFrom<f64> for Speed {
    type Error = MtError;

    fn try_from(mps: f64) -> Result<Self, Self::Error> {
        Speed::new(mps).ok_or_else(|| MtError::Config(format!("speed must be finite and > 0, got {mps}")))
    }
}

impl From<Speed> for f64 {
    fn from(s: Speed) -> f64 {
        s.0
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m/s", self.0)
    }
}
