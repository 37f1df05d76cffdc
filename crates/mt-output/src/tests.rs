//! Integration tests for mt-output.

#[cfg(test)]
mod helpers {
    use mt_agent::{AssignMode, Person, PersonBuilder};
    use mt_core::{GeoPoint, PersonCategory, PersonId, SimRng};
    use mt_schedule::CandidateEntry;
    use mt_spatial::{FeatureSet, RoadMap, RoadNetworkBuilder};

    pub const HOME: GeoPoint = GeoPoint { lat: 10.80, lon: 106.60 };
    pub const WORK: GeoPoint = GeoPoint { lat: 10.80, lon: 106.61 };

    /// Two nodes joined by one straight road.
    pub fn map() -> RoadMap {
        let mut b = RoadNetworkBuilder::new();
        let h = b.add_node(HOME);
        let w = b.add_node(WORK);
        b.add_straight_road(h, w);
        RoadMap::new(b.build(), FeatureSet::new())
    }

    /// Commutes at 08:00 and back at 17:00, 10 m/s.
    pub fn commuter(map: &RoadMap) -> Person {
        PersonBuilder::new(PersonId(7), PersonCategory::Adult)
            .speed(10.0)
            .mode(AssignMode::Manual)
            .waypoints([("home", Some(HOME)), ("workplace", Some(WORK))])
            .candidates(vec![
                CandidateEntry::new("08:00", "home", "workplace"),
                CandidateEntry::new("17:00", "workplace", "home"),
            ])
            .build(map, &mut SimRng::new(1))
            .unwrap()
    }
}

#[cfg(test)]
mod window_tests {
    use chrono::NaiveDate;
    use mt_core::TimeOfDay;

    use crate::{OutputError, SampleWindow};

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn times_include_end() {
        let w = SampleWindow::new(
            monday(),
            TimeOfDay::from_hms(7, 0, 0).unwrap(),
            TimeOfDay::from_hms(9, 0, 0).unwrap(),
            3_600,
        )
        .unwrap();
        let times: Vec<String> = w.times().map(|t| t.to_string()).collect();
        assert_eq!(times, ["07:00:00", "08:00:00", "09:00:00"]);
    }

    #[test]
    fn whole_day_count() {
        assert_eq!(SampleWindow::whole_day(monday(), 300).unwrap().times().count(), 288);
    }

    #[test]
    fn bad_windows_rejected() {
        let t = |h| TimeOfDay::from_hms(h, 0, 0).unwrap();
        assert!(matches!(SampleWindow::new(monday(), t(9), t(8), 60), Err(OutputError::InvalidWindow(_))));
        assert!(matches!(SampleWindow::new(monday(), t(8), t(9), 0), Err(OutputError::InvalidWindow(_))));
    }
}

#[cfg(test)]
mod sample_tests {
    use chrono::NaiveDate;
    use mt_core::TimeOfDay;

    use super::helpers::{commuter, map, HOME, WORK};
    use crate::{sample_positions, SampleWindow};

    #[test]
    fn morning_positions() {
        let map = map();
        let p = commuter(&map);
        let w = SampleWindow::new(
            NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            TimeOfDay::from_hms(7, 0, 0).unwrap(),
            TimeOfDay::from_hms(9, 0, 0).unwrap(),
            3_600,
        )
        .unwrap();
        let rows = sample_positions(&p, &map, &w).unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.person_id == 7));
        assert_eq!(rows[1].timestamp.to_string(), "2024-03-04 08:00:00");
        assert!((rows[0].lon - HOME.lon).abs() < 1e-9);
        assert!((rows[1].lon - HOME.lon).abs() < 1e-9);
        assert!((rows[2].lon - WORK.lon).abs() < 1e-9);
    }
}

#[cfg(test)]
mod csv_tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use super::helpers::{commuter, map};
    use crate::csv::{CsvWriter, DETAIL_FILE, TRACE_FILE};
    use crate::{export_person, OutputWriter, SampleWindow};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(TRACE_FILE).exists());
        assert!(dir.path().join(DETAIL_FILE).exists());
    }

    #[test]
    fn trace_rows_are_tab_separated_iso() {
        let dir = tmp();
        let map = map();
        let p = commuter(&map);
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let n = export_person(&mut w, &p, &map, &SampleWindow::whole_day(monday(), 3_600).unwrap()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
        assert_eq!(n, 24);

        let text = std::fs::read_to_string(dir.path().join(TRACE_FILE)).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 24);
        assert_eq!(lines[0], "7\t2024-03-04T00:00:00\t10.8\t106.6");
        assert_eq!(lines[12], "7\t2024-03-04T12:00:00\t10.8\t106.61");
    }

    #[test]
    fn detail_schedule_rows() {
        let dir = tmp();
        let map = map();
        let p = commuter(&map);
        let mut w = CsvWriter::new(dir.path()).unwrap();
        export_person(&mut w, &p, &map, &SampleWindow::whole_day(monday(), 3_600).unwrap()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(DETAIL_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers[..4], ["person_id", "start_waypoint", "end_waypoint", "start_time"]);

        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "home");
        assert_eq!(&rows[0][2], "workplace");
        assert_eq!(&rows[0][3], "08:00:00");
        assert_eq!(&rows[0][7], "0;1");
        assert_eq!(&rows[1][7], "1;0");
    }

    #[test]
    fn generated_trace_scores_one_against_itself() {
        let dir = tmp();
        let map = map();
        let p = commuter(&map);
        let mut w = CsvWriter::new(dir.path()).unwrap();
        export_person(&mut w, &p, &map, &SampleWindow::whole_day(monday(), 1_800).unwrap()).unwrap();
        w.finish().unwrap();

        let trace = dir.path().join(TRACE_FILE);
        let score = mt_poi::score_files(&trace, &trace, &mt_poi::PoiConfig::default()).unwrap();
        assert_eq!(score, 1.0);
    }
}
