//! Sampling a person's day into position rows.

use chrono::{NaiveDate, NaiveTime, TimeDelta};
use log::debug;
use mt_agent::Person;
use mt_core::TimeOfDay;
use mt_spatial::NetworkProvider;

use crate::{MovementRow, OutputError, OutputResult, OutputWriter, PositionRow};

/// Sample instants `start, start + step, …` up to and including `end`, all
/// on `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    pub date:      NaiveDate,
    pub start:     TimeOfDay,
    pub end:       TimeOfDay,
    pub step_secs: u32,
}

impl SampleWindow {
    pub fn new(date: NaiveDate, start: TimeOfDay, end: TimeOfDay, step_secs: u32) -> OutputResult<Self> {
        if step_secs == 0 {
            return Err(OutputError::InvalidWindow("step must be at least one second".into()));
        }
        if end < start {
            return Err(OutputError::InvalidWindow(format!("end {end} is before start {start}")));
        }
        Ok(Self { date, start, end, step_secs })
    }

    /// `00:00:00` through `23:59:59`.
    pub fn whole_day(date: NaiveDate, step_secs: u32) -> OutputResult<Self> {
        Self::new(date, TimeOfDay::MIDNIGHT, TimeOfDay::from_secs_wrapping(86_399), step_secs)
    }

    pub fn times(&self) -> impl Iterator<Item = TimeOfDay> {
        (self.start.secs()..=self.end.secs())
            .step_by(self.step_secs as usize)
            .map(TimeOfDay::from_secs_wrapping)
    }
}

/// Query `person`'s position at every instant of `window`.
pub fn sample_positions<P: NetworkProvider + ?Sized>(
    person: &Person,
    provider: &P,
    window: &SampleWindow,
) -> OutputResult<Vec<PositionRow>> {
    let midnight = window.date.and_time(NaiveTime::MIN);
    window
        .times()
        .map(|t| -> OutputResult<PositionRow> {
            let (pos, _) = person.position_at(provider, t)?;
            Ok(PositionRow {
                person_id: person.id().0,
                timestamp: midnight + TimeDelta::seconds(i64::from(t.secs())),
                lat: pos.lat,
                lon: pos.lon,
            })
        })
        .collect()
}

/// Write `person`'s sampled trace and movements; returns the number of
/// position rows written.
pub fn export_person<W, P>(
    writer: &mut W,
    person: &Person,
    provider: &P,
    window: &SampleWindow,
) -> OutputResult<usize>
where
    W: OutputWriter + ?Sized,
    P: NetworkProvider + ?Sized,
{
    let positions = sample_positions(person, provider, window)?;
    writer.write_positions(&positions)?;

    let movements: Vec<MovementRow> = person
        .detail_schedule()
        .iter()
        .map(|e| MovementRow::from_entry(person.id().0, e))
        .collect();
    writer.write_movements(&movements)?;

    debug!(
        "exported person {}: {} positions, {} movements",
        person.id().0,
        positions.len(),
        movements.len()
    );
    Ok(positions.len())
}
