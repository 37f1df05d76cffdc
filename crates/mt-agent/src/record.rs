//! Plain (JSON) form of a [`Person`].
//!
//! ```json
//! {
//!   "unique_id": 1,
//!   "type": "adult",
//!   "speed": 9.7,
//!   "mode": "automatic",
//!   "waypoints": { "home": [10.80, 106.60], "gym": null },
//!   "schedule": [
//!     { "start_time": "07:00:00", "start_waypoint": "home", "end_waypoint": "workplace" }
//!   ],
//!   "detail_schedule": [
//!     { "start_waypoint": "home", "end_waypoint": "workplace",
//!       "start_time": "07:00:00", "route_nodes": [0, 1, 2],
//!       "distance_m": 2184.5, "travel_time_s": 225.2, "arrival_time": "07:03:46" }
//!   ]
//! }
//! ```
//!
//! `route_nodes` holds node ids, or `[lat, lon]` pairs for a straight-line
//! fallback.  Every field is required.

use mt_core::{PersonCategory, PersonId, SimRng};
use mt_mobility::{DetailEntry, DetailSchedule};
use mt_schedule::{ProfileProvider, Schedule, ScheduleEntry};
use mt_spatial::NetworkProvider;
use serde::{Deserialize, Serialize};

use crate::{AgentError, AgentResult, AssignMode, Person, PersonBuilder, Waypoints};

/// Serializable snapshot of a [`Person`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub unique_id:       u32,
    #[serde(rename = "type")]
    pub category:        PersonCategory,
    pub speed:           f64,
    pub mode:            AssignMode,
    pub waypoints:       Waypoints,
    pub schedule:        Vec<ScheduleEntry>,
    pub detail_schedule: Vec<DetailEntry>,
}

impl Person {
    pub fn to_plain_form(&self) -> PersonRecord {
        PersonRecord {
            unique_id:       self.id().0,
            category:        self.category(),
            speed:           self.speed().mps(),
            mode:            self.mode(),
            waypoints:       self.waypoints().clone(),
            schedule:        self.schedule().entries().to_vec(),
            detail_schedule: self.detail_schedule().entries().to_vec(),
        }
    }

    /// Rebuild a person through the normal construction path, handing it the
    /// recorded waypoints, schedule and detail schedule so nothing is
    /// reassigned or rerouted.
    ///
    /// Manual waypoints are checked against the built-in category profiles.
    /// A person built with other profiles needs [`Person::from_plain_form_with`].
    pub fn from_plain_form<P: NetworkProvider + ?Sized>(
        record: PersonRecord,
        provider: &P,
    ) -> AgentResult<Person> {
        Self::rebuild(record, provider, None)
    }

    /// [`Person::from_plain_form`] resolving the category through `profiles`.
    pub fn from_plain_form_with<P: NetworkProvider + ?Sized>(
        record: PersonRecord,
        provider: &P,
        profiles: &dyn ProfileProvider,
    ) -> AgentResult<Person> {
        Self::rebuild(record, provider, Some(profiles))
    }

    fn rebuild<P: NetworkProvider + ?Sized>(
        record: PersonRecord,
        provider: &P,
        profiles: Option<&dyn ProfileProvider>,
    ) -> AgentResult<Person> {
        let id = PersonId(record.unique_id);
        // Only consumed if the record carries no waypoints at all.
        let mut rng = SimRng::for_person(0, id);
        let mut builder = PersonBuilder::new(id, record.category)
            .speed(record.speed)
            .mode(record.mode)
            .waypoints(record.waypoints.into_map())
            .schedule(Schedule::new(record.schedule))
            .detail_schedule(DetailSchedule::new(record.detail_schedule));
        if let Some(profiles) = profiles {
            builder = builder.profiles(profiles);
        }
        builder.build(provider, &mut rng)
    }

    pub fn to_json(&self) -> AgentResult<String> {
        serde_json::to_string_pretty(&self.to_plain_form())
            .map_err(|e| AgentError::Format(e.to_string()))
    }

    pub fn from_json<P: NetworkProvider + ?Sized>(json: &str, provider: &P) -> AgentResult<Person> {
        let record: PersonRecord =
            serde_json::from_str(json).map_err(|e| AgentError::Format(e.to_string()))?;
        Person::from_plain_form(record, provider)
    }

    pub fn from_json_with<P: NetworkProvider + ?Sized>(
        json: &str,
        provider: &P,
        profiles: &dyn ProfileProvider,
    ) -> AgentResult<Person> {
        let record: PersonRecord =
            serde_json::from_str(json).map_err(|e| AgentError::Format(e.to_string()))?;
        Person::from_plain_form_with(record, provider, profiles)
    }
}
