//! Unit tests for rad-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BarrierId, ParticleId};

    #[test]
    fn next_is_monotonic() {
        let id = ParticleId(41);
        assert_eq!(id.next(), ParticleId(42));
        assert!(id < id.next());
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(ParticleId::INVALID.0, u64::MAX);
        assert_eq!(BarrierId::INVALID.0, u32::MAX);
        assert_eq!(BarrierId::default(), BarrierId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(BarrierId(3).to_string(), "BarrierId(3)");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Aabb, Axis, Vec3};

    #[test]
    fn corners_are_normalised() {
        let b = Aabb::new(Vec3::new(1.0, -1.0, 2.0), Vec3::new(-1.0, 1.0, -2.0));
        assert_eq!(b.min, Vec3::new(-1.0, -1.0, -2.0));
        assert_eq!(b.max, Vec3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Aabb::from_center(Vec3::ZERO, Vec3::new(0.1, 1.25, 0.5));
        assert!(b.contains(Vec3::new(0.1, 0.0, 0.0)));
        assert!(b.contains(Vec3::new(-0.1, -1.25, 0.5)));
        assert!(!b.contains(Vec3::new(0.1001, 0.0, 0.0)));
    }

    #[test]
    fn degenerate_box_never_matches() {
        let flat = Aabb::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(0.0, 1.0, 1.0));
        assert!(flat.is_degenerate());
        assert!(!flat.contains(Vec3::ZERO));
    }

    #[test]
    fn planar_box_holds_z_zero() {
        let b = Aabb::planar(370.0, 50.0, 10.0, 200.0);
        assert!(!b.is_degenerate());
        assert!(b.contains(Vec3::new(375.0, 100.0, 0.0)));
        assert_eq!(b.low(Axis::X), 370.0);
        assert_eq!(b.high(Axis::Y), 250.0);
    }

    #[test]
    fn axis_unit_matches_index() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(axis.unit()[axis.index()], 1.0);
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::{RandomSource, ReplayRng, SimRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn draws_are_half_open_unit_interval() {
        let mut rng = SimRng::new(1);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn child_streams_differ() {
        let mut root = SimRng::new(9);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        assert_ne!(c0.next_f64().to_bits(), c1.next_f64().to_bits());
    }

    #[test]
    fn replay_cycles_and_clamps() {
        let mut rng = ReplayRng::new(vec![0.25, 2.0]);
        assert_eq!(rng.next_f64(), 0.25);
        assert!(rng.next_f64() < 1.0);
        assert_eq!(rng.next_f64(), 0.25);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn spread_is_centred() {
        let mut rng = ReplayRng::new(vec![0.0, 0.5]);
        assert_eq!(rng.spread(10.0), -5.0);
        assert_eq!(rng.spread(10.0), 0.0);
    }

    #[test]
    fn pick_weighted_skips_zero_weights() {
        let mut rng = ReplayRng::new(vec![0.0, 0.6, 0.99]);
        let w = [0.0, 1.0, 0.0, 1.0];
        assert_eq!(rng.pick_weighted(&w), Some(1));
        assert_eq!(rng.pick_weighted(&w), Some(3));
        assert_eq!(rng.pick_weighted(&w), Some(3));
        assert_eq!(rng.pick_weighted(&[0.0, 0.0]), None);
    }
}

#[cfg(test)]
mod time {
    use crate::{ClockConfig, SimTime};

    #[test]
    fn sim_time_arithmetic() {
        let t = SimTime(10.0) + 5.0;
        assert_eq!(t, SimTime(15.0));
        assert_eq!(t.since(SimTime(10.0)), 5.0);
        assert_eq!(SimTime(1500.0).secs(), 1.5);
    }

    #[test]
    fn clock_config_defaults() {
        let c = ClockConfig::default();
        assert!(c.validate().is_ok());
        assert_eq!(c.max_frame_ms, 100.0);
        assert_eq!(c.fixed_step_secs(), c.fixed_step_ms * 0.001);
    }

    #[test]
    fn clock_config_rejects_zero_step() {
        let c = ClockConfig { fixed_step_ms: 0.0, ..ClockConfig::default() };
        assert!(c.validate().is_err());
    }
}

#[cfg(test)]
mod config {
    use crate::{ConfigError, SimulationConfig, Species, SpeciesWeight};

    #[test]
    fn default_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn non_positive_interval_rejected() {
        let cfg = SimulationConfig { emission_interval_ms: 0.0, ..Default::default() };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NonPositive { field: "emission_interval_ms", value: 0.0 })
        );
    }

    #[test]
    fn zero_cap_rejected() {
        let cfg = SimulationConfig { max_particles: 0, ..Default::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCount { field: "max_particles" }));
    }

    #[test]
    fn negative_spread_rejected() {
        let cfg = SimulationConfig { angular_spread_deg: -1.0, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::Negative { .. })));
    }

    #[test]
    fn nan_speed_rejected() {
        let cfg = SimulationConfig { base_speed: f64::NAN, ..Default::default() };
        assert!(matches!(cfg.validate(), Err(ConfigError::NonFinite { .. })));
    }

    #[test]
    fn all_zero_mix_rejected() {
        let cfg = SimulationConfig {
            species_mix: vec![SpeciesWeight::new(Species::Alpha, 0.0)],
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptySpeciesMix));
    }
}

#[cfg(test)]
mod validate {
    use crate::validate;

    #[test]
    fn probability_bounds() {
        assert!(validate::probability("p", 0.0).is_ok());
        assert!(validate::probability("p", 1.0).is_ok());
        assert!(validate::probability("p", -0.01).is_err());
        assert!(validate::probability("p", 1.01).is_err());
        assert!(validate::probability("p", f64::NAN).is_err());
    }

    #[test]
    fn fraction_excludes_one() {
        assert_eq!(validate::fraction("f", 0.0), Ok(0.0));
        assert_eq!(validate::fraction("f", 0.5), Ok(0.5));
        assert!(validate::fraction("f", 1.0).is_err());
        assert!(validate::fraction("f", -0.1).is_err());
        assert!(validate::fraction("f", f64::INFINITY).is_err());
    }
}
