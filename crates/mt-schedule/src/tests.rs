//! Unit tests for mt-schedule.

use std::collections::BTreeMap;

use mt_core::{GeoPoint, PersonCategory, TimeOfDay};

use crate::{CandidateEntry, CategoryProfile};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn hm(h: u32, m: u32) -> TimeOfDay {
    TimeOfDay::from_hms(h, m, 0).unwrap()
}

/// Every waypoint of the adult profile assigned.
fn adult_waypoints() -> BTreeMap<String, Option<GeoPoint>> {
    [
        ("home", Some(GeoPoint::new(10.80, 106.60))),
        ("workplace", Some(GeoPoint::new(10.85, 106.65))),
        ("gym", Some(GeoPoint::new(10.81, 106.61))),
        ("market", Some(GeoPoint::new(10.80, 106.62))),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v))
    .collect()
}

// ── Profiles ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod profiles {
    use mt_core::{FeatureCategory, SimRng};

    use super::*;
    use crate::{BuiltinProfiles, ProfileProvider, SpeedRange};

    #[test]
    fn adult_template_matches_daily_plan() {
        let p = CategoryProfile::adult();
        let plan: Vec<(TimeOfDay, &str, &str)> = p
            .template
            .iter()
            .map(|e| (e.start_time, e.start_waypoint.as_str(), e.end_waypoint.as_str()))
            .collect();
        assert_eq!(
            plan,
            vec![
                (hm(7, 0), "home", "workplace"),
                (hm(12, 0), "workplace", "market"),
                (hm(13, 0), "market", "workplace"),
                (hm(18, 0), "workplace", "gym"),
                (hm(20, 0), "gym", "home"),
            ]
        );
    }

    #[test]
    fn child_and_older_templates() {
        assert_eq!(CategoryProfile::child().template.len(), 4);
        assert_eq!(CategoryProfile::child().template[0].end_waypoint, "school");
        let older = CategoryProfile::older();
        assert_eq!(older.template.len(), 5);
        assert_eq!(older.template[0].start_time, hm(8, 0));
        assert_eq!(older.template[4].start_time, hm(19, 0));
    }

    #[test]
    fn nearest_to_references_earlier_waypoints() {
        for cat in PersonCategory::ALL {
            let p = CategoryProfile::builtin(cat);
            for (i, spec) in p.waypoints.iter().enumerate() {
                if let Some(r) = &spec.nearest_to {
                    assert!(
                        p.waypoints[..i].iter().any(|w| &w.name == r),
                        "{cat}: {} refers to {r} before it is placed",
                        spec.name
                    );
                }
            }
        }
    }

    #[test]
    fn template_only_uses_own_waypoints() {
        for cat in PersonCategory::ALL {
            let p = CategoryProfile::builtin(cat);
            for e in &p.template {
                assert!(p.has_waypoint(&e.start_waypoint));
                assert!(p.has_waypoint(&e.end_waypoint));
            }
        }
    }

    #[test]
    fn waypoint_sets() {
        let older = CategoryProfile::older();
        let names: Vec<&str> = older.waypoint_names().collect();
        assert_eq!(names, vec!["home", "healthcare", "park"]);
        let adult = CategoryProfile::adult();
        assert_eq!(adult.waypoints[1].category, FeatureCategory::Workplaces);
        assert_eq!(adult.waypoints[3].nearest_to.as_deref(), Some("home"));
    }

    #[test]
    fn speed_sample_in_range() {
        let range = CategoryProfile::adult().speed_range;
        assert_eq!(range, SpeedRange::new(8.3, 11.1));
        let mut rng = SimRng::new(3);
        for _ in 0..200 {
            let s = range.sample(&mut rng);
            assert!((8.3..=11.1).contains(&s));
        }
    }

    #[test]
    fn provider_override() {
        let custom = CategoryProfile { template: vec![], ..CategoryProfile::child() };
        let provider = BuiltinProfiles::new().with_profile(PersonCategory::Child, custom);
        assert!(provider.profile(PersonCategory::Child).unwrap().template.is_empty());
        assert_eq!(provider.profile(PersonCategory::Adult).unwrap().template.len(), 5);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;
    use crate::ScheduleBuilder;

    #[test]
    fn no_candidates_uses_template() {
        let profile = CategoryProfile::adult();
        let s = ScheduleBuilder::new(&profile).build(&[], &adult_waypoints());
        assert_eq!(s.len(), 5);
        assert_eq!(s.entries()[0].start_time, hm(7, 0));
    }

    #[test]
    fn template_drops_unset_waypoint() {
        let profile = CategoryProfile::adult();
        let mut wp = adult_waypoints();
        wp.insert("gym".into(), None);
        let s = ScheduleBuilder::new(&profile).template(&wp);
        // 18:00 workplace→gym and 20:00 gym→home are gone.
        assert_eq!(s.len(), 3);
        assert!(s.iter().all(|e| e.start_waypoint != "gym" && e.end_waypoint != "gym"));
    }

    #[test]
    fn validated_truncates_seconds() {
        let c = [CandidateEntry::new("08:15:59", "home", "market")];
        let s = ScheduleBuilder::validated(&c, &adult_waypoints());
        assert_eq!(s.len(), 1);
        assert_eq!(s.entries()[0].start_time, hm(8, 15));
    }

    #[test]
    fn validated_skips_bad_entries_and_keeps_order() {
        let c = [
            CandidateEntry::new("09:00", "home", "gym"),
            CandidateEntry::new("10:00", "home", "moon"),     // unknown end
            CandidateEntry::new("11:00", "school", "home"),   // unknown start
            CandidateEntry::new("25:00", "gym", "market"),    // bad time
            CandidateEntry::new("noon", "gym", "market"),     // bad time
            CandidateEntry::new("06:30", "market", "home"),   // earlier time, kept in place
        ];
        let s = ScheduleBuilder::validated(&c, &adult_waypoints());
        let got: Vec<(TimeOfDay, &str)> =
            s.iter().map(|e| (e.start_time, e.end_waypoint.as_str())).collect();
        assert_eq!(got, vec![(hm(9, 0), "gym"), (hm(6, 30), "home")]);
    }

    #[test]
    fn validated_rejects_unset_waypoint() {
        let mut wp = adult_waypoints();
        wp.insert("market".into(), None);
        let c = [CandidateEntry::new("09:00", "home", "market")];
        assert!(ScheduleBuilder::validated(&c, &wp).is_empty());
    }

    #[test]
    fn candidates_round_trip_through_schedule() {
        let profile = CategoryProfile::adult();
        let wp = adult_waypoints();
        let first = ScheduleBuilder::new(&profile).build(&[], &wp);
        let again = ScheduleBuilder::new(&profile).build(&first.to_candidates(), &wp);
        assert_eq!(first, again);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_candidates_reader, CandidateEntry, ScheduleError};

    #[test]
    fn loads_rows_in_order() {
        let csv = "start_time,start_waypoint,end_waypoint\n\
                   08:00,home,park\n\
                   10:00:30, park ,healthcare\n";
        let rows = load_candidates_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            rows,
            vec![
                CandidateEntry::new("08:00", "home", "park"),
                CandidateEntry::new("10:00:30", "park", "healthcare"),
            ]
        );
    }

    #[test]
    fn bad_time_is_not_a_load_error() {
        let csv = "start_time,start_waypoint,end_waypoint\nlater,home,park\n";
        let rows = load_candidates_reader(Cursor::new(csv)).unwrap();
        assert_eq!(rows[0].start_time, "later");
    }

    #[test]
    fn missing_column_is_parse_error() {
        let csv = "start_time,start_waypoint\n08:00,home\n";
        let result = load_candidates_reader(Cursor::new(csv));
        assert!(matches!(result, Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn empty_file_gives_no_rows() {
        let csv = "start_time,start_waypoint,end_waypoint\n";
        assert!(load_candidates_reader(Cursor::new(csv)).unwrap().is_empty());
    }
}
