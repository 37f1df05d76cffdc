//! Unit tests for mt-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_is_default() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
        assert_eq!(PersonId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(10.8231, 106.6297);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(10.0, 106.0);
        let b = GeoPoint::new(11.0, 106.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn validity_bounds() {
        assert!(GeoPoint::new(90.0, -180.0).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(2.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(1.0, 2.0));
    }
}

#[cfg(test)]
mod time {
    use crate::{Speed, TimeOfDay};

    #[test]
    fn parse_and_format_hms() {
        let t = TimeOfDay::parse_hms("07:05:09").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 5, 9));
        assert_eq!(t.to_string(), "07:05:09");
    }

    #[test]
    fn parse_hms_rejects_garbage() {
        assert!(TimeOfDay::parse_hms("7 o'clock").is_err());
        assert!(TimeOfDay::parse_hms("25:00:00").is_err());
        assert!(TimeOfDay::parse_hms("07:00").is_err());
    }

    #[test]
    fn lenient_truncates_seconds() {
        let t = TimeOfDay::parse_hm_lenient("08:30:59").unwrap();
        assert_eq!(t, TimeOfDay::from_hms(8, 30, 0).unwrap());
        let t = TimeOfDay::parse_hm_lenient("08:30").unwrap();
        assert_eq!(t.to_string(), "08:30:00");
        assert!(TimeOfDay::parse_hm_lenient("noon").is_err());
    }

    #[test]
    fn add_secs_truncates_and_wraps() {
        let t = TimeOfDay::from_hms(23, 59, 0).unwrap();
        assert_eq!(t.add_secs_wrapping(59.9), TimeOfDay::from_hms(23, 59, 59).unwrap());
        assert_eq!(t.add_secs_wrapping(120.0), TimeOfDay::from_hms(0, 1, 0).unwrap());
    }

    #[test]
    fn secs_since_is_signed() {
        let a = TimeOfDay::from_hms(7, 0, 0).unwrap();
        let b = TimeOfDay::from_hms(7, 30, 0).unwrap();
        assert_eq!(b.secs_since(a), 1_800);
        assert_eq!(a.secs_since(b), -1_800);
    }

    #[test]
    fn from_hms_range() {
        assert!(TimeOfDay::from_hms(24, 0, 0).is_none());
        assert!(TimeOfDay::from_hms(0, 60, 0).is_none());
        assert_eq!(TimeOfDay::from_secs_wrapping(86_401).secs(), 1);
    }

    #[test]
    fn speed_rejects_degenerate() {
        assert!(Speed::new(0.0).is_none());
        assert!(Speed::new(-1.4).is_none());
        assert!(Speed::new(f64::NAN).is_none());
        assert!(Speed::new(f64::INFINITY).is_none());
        let s = Speed::new(2.0).unwrap();
        assert_eq!(s.travel_secs(100.0), 50.0);
    }
}

#[cfg(test)]
mod category {
    use crate::{FeatureCategory, PersonCategory};

    #[test]
    fn person_category_parse() {
        assert_eq!("Adult".parse::<PersonCategory>().unwrap(), PersonCategory::Adult);
        assert!("teen".parse::<PersonCategory>().is_err());
        for c in PersonCategory::ALL {
            assert_eq!(c.as_str().parse::<PersonCategory>().unwrap(), c);
        }
    }

    #[test]
    fn feature_category_labels() {
        assert_eq!(FeatureCategory::PlayAreas.to_string(), "play_areas");
        assert_eq!(FeatureCategory::ALL.len(), 8);
    }
}

#[cfg(test)]
mod rng {
    use crate::{PersonId, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::for_person(12345, PersonId(0));
        let mut r2 = SimRng::for_person(12345, PersonId(0));
        for _ in 0..100 {
            let a = r1.uniform(0.0, 1.0);
            let b = r2.uniform(0.0, 1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_persons_differ() {
        let mut r0 = SimRng::for_person(1, PersonId(0));
        let mut r1 = SimRng::for_person(1, PersonId(1));
        let a = r0.uniform(0.0, 1.0);
        let b = r1.uniform(0.0, 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_bounds_and_degenerate() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(0.8, 1.4);
            assert!((0.8..=1.4).contains(&v));
        }
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
        assert_eq!(rng.uniform(5.0, 1.0), 5.0);
    }

    #[test]
    fn choose_empty_is_none() {
        let mut rng = SimRng::new(0);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.choose(&[9]), Some(&9));
    }
}
