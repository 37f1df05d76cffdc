//! The simulated person and its builder.

use std::collections::BTreeMap;
use std::fmt;

use log::info;

use mt_core::{GeoPoint, PersonCategory, PersonId, SimRng, Speed, TimeOfDay};
use mt_mobility::{
    build_detail_schedule, parse_query_time, position_at, DetailSchedule, PositionLog,
    TrajectoryConfig, TrajectoryEngine,
};
use mt_schedule::{CandidateEntry, CategoryProfile, ProfileProvider, Schedule, ScheduleBuilder};
use mt_spatial::NetworkProvider;

use crate::{AgentError, AgentResult, AssignConfig, AutoAssigner, ManualAssigner, Waypoints};

// ── AssignMode ────────────────────────────────────────────────────────────────

/// How the person's waypoints are chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum AssignMode {
    /// Placed from map features.
    #[default]
    #[serde(rename = "automatic")]
    Automatic,
    /// Supplied by the caller and validated.
    #[serde(rename = "self_chosen", alias = "manual")]
    Manual,
}

impl fmt::Display for AssignMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AssignMode::Automatic => "automatic",
            AssignMode::Manual => "self_chosen",
        })
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// A fully constructed person.  Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    id:        PersonId,
    category:  PersonCategory,
    speed:     Speed,
    mode:      AssignMode,
    waypoints: Waypoints,
    schedule:  Schedule,
    detail:    DetailSchedule,
}

impl Person {
    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn category(&self) -> PersonCategory {
        self.category
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn mode(&self) -> AssignMode {
        self.mode
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn detail_schedule(&self) -> &DetailSchedule {
        &self.detail
    }

    /// Where this person is at `time`, with the scan log.
    pub fn position_at<P: NetworkProvider + ?Sized>(
        &self,
        provider: &P,
        time: TimeOfDay,
    ) -> AgentResult<(GeoPoint, PositionLog)> {
        Ok(position_at(&self.detail, &self.waypoints, provider, time)?)
    }

    /// [`position_at`](Self::position_at) for a textual query time
    /// (`"YYYY-MM-DD HH:MM:SS"` or `"HH:MM:SS"`).
    pub fn position_at_str<P: NetworkProvider + ?Sized>(
        &self,
        provider: &P,
        query: &str,
    ) -> AgentResult<(GeoPoint, PositionLog)> {
        let time = parse_query_time(query).map_err(mt_mobility::MobilityError::from)?;
        self.position_at(provider, time)
    }

    pub(crate) fn from_parts(
        id: PersonId,
        category: PersonCategory,
        speed: Speed,
        mode: AssignMode,
        waypoints: Waypoints,
        schedule: Schedule,
        detail: DetailSchedule,
    ) -> Self {
        Self { id, category, speed, mode, waypoints, schedule, detail }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Person {} ({}, {}, {})", self.id.0, self.category, self.speed, self.mode)?;
        writeln!(f, "Waypoints:")?;
        write!(f, "{}", self.waypoints)?;
        writeln!(f, "Schedule:")?;
        for e in &self.schedule {
            writeln!(f, "  {e}")?;
        }
        writeln!(f, "Detail schedule:")?;
        for d in &self.detail {
            writeln!(f, "  {d}")?;
        }
        Ok(())
    }
}

// ── PersonBuilder ─────────────────────────────────────────────────────────────

/// Builds a [`Person`] through the waypoint → schedule → detail pipeline.
///
/// # Usage
///
/// ```rust,ignore
/// let mut rng = SimRng::for_person(42, PersonId(0));
/// let person = PersonBuilder::new(PersonId(0), PersonCategory::Adult)
///     .random_speed(&mut rng)
///     .build(&provider, &mut rng)?;
/// ```
pub struct PersonBuilder<'a> {
    id:          PersonId,
    category:    PersonCategory,
    speed:       Option<f64>,
    mode:        AssignMode,
    profiles:    Option<&'a dyn ProfileProvider>,
    waypoints:   Vec<(String, Option<GeoPoint>)>,
    candidates:  Vec<CandidateEntry>,
    schedule:    Option<Schedule>,
    detail:      Option<DetailSchedule>,
    assign:      AssignConfig,
    trajectory:  TrajectoryConfig,
}

impl<'a> PersonBuilder<'a> {
    pub fn new(id: PersonId, category: PersonCategory) -> Self {
        Self {
            id,
            category,
            speed: None,
            mode: AssignMode::Automatic,
            profiles: None,
            waypoints: Vec::new(),
            candidates: Vec::new(),
            schedule: None,
            detail: None,
            assign: AssignConfig::default(),
            trajectory: TrajectoryConfig::default(),
        }
    }

    /// Fixed speed in m/s.  Validated in [`build`](Self::build).
    pub fn speed(mut self, mps: f64) -> Self {
        self.speed = Some(mps);
        self
    }

    /// Draw the speed uniformly from the built-in range for the category.
    pub fn random_speed(mut self, rng: &mut SimRng) -> Self {
        let range = match self.profiles.and_then(|p| p.profile(self.category)) {
            Some(profile) => profile.speed_range,
            None => CategoryProfile::builtin(self.category).speed_range,
        };
        self.speed = Some(range.sample(rng));
        self
    }

    pub fn mode(mut self, mode: AssignMode) -> Self {
        self.mode = mode;
        self
    }

    /// Use `profiles` instead of the built-in category table.
    pub fn profiles(mut self, profiles: &'a dyn ProfileProvider) -> Self {
        self.profiles = Some(profiles);
        self
    }

    /// Predefined waypoints.  In manual mode they are validated; in
    /// automatic mode a non-empty set replaces assignment entirely.
    pub fn waypoints<I, S>(mut self, waypoints: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<GeoPoint>)>,
        S: Into<String>,
    {
        self.waypoints = waypoints.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }

    /// Candidate movements to validate instead of using the template.
    pub fn candidates(mut self, candidates: Vec<CandidateEntry>) -> Self {
        self.candidates = candidates;
        self
    }

    /// An already-built schedule, used verbatim.
    pub fn schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// An already-built detail schedule, used verbatim if non-empty.
    pub fn detail_schedule(mut self, detail: DetailSchedule) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn assign_config(mut self, config: AssignConfig) -> Self {
        self.assign = config;
        self
    }

    pub fn trajectory_config(mut self, config: TrajectoryConfig) -> Self {
        self.trajectory = config;
        self
    }

    pub fn build<P: NetworkProvider + ?Sized>(
        self,
        provider: &P,
        rng: &mut SimRng,
    ) -> AgentResult<Person> {
        let profile = match self.profiles {
            Some(p) => p.profile(self.category).cloned().ok_or(AgentError::NoProfile(self.category))?,
            None => CategoryProfile::builtin(self.category),
        };

        let mps = match self.speed {
            Some(v) => v,
            None => profile.speed_range.sample(rng),
        };
        let speed = Speed::new(mps).ok_or(AgentError::InvalidSpeed(mps))?;

        let waypoints = match self.mode {
            AssignMode::Manual => ManualAssigner.assign(&profile, self.waypoints),
            AssignMode::Automatic if !self.waypoints.is_empty() => {
                Waypoints::from(self.waypoints.into_iter().collect::<BTreeMap<_, _>>())
            }
            AssignMode::Automatic => {
                AutoAssigner::new(self.assign).assign(&profile, provider, rng)?
            }
        };

        let schedule = match self.schedule {
            Some(s) => s,
            None => ScheduleBuilder::new(&profile).build(&self.candidates, &waypoints),
        };

        let detail = match self.detail {
            Some(d) if !d.is_empty() => d,
            _ => {
                let engine = TrajectoryEngine::with_config(provider, self.trajectory);
                build_detail_schedule(&schedule, &waypoints, &engine, speed)
            }
        };

        info!(
            "built person {} ({}): {}/{} waypoints assigned, {} movements",
            self.id.0,
            self.category,
            waypoints.assigned_count(),
            waypoints.len(),
            detail.len()
        );
        Ok(Person::from_parts(self.id, self.category, speed, self.mode, waypoints, schedule, detail))
    }
}
