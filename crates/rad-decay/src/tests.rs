//! Unit tests for rad-decay.

#[cfg(test)]
mod model_tests {
    use crate::{DecayError, DecayModel, activity, decay_activity};

    const EPS: f64 = 1e-9;

    #[test]
    fn one_half_life_is_fifty_percent() {
        for h in [0.5, 6.0, 8.0, 74.0, 1.0e6] {
            let a = activity(h, h).unwrap();
            assert!((a - 50.0).abs() < EPS, "half_life {h}: got {a}");
        }
    }

    #[test]
    fn time_zero_is_full_activity() {
        for h in [0.01, 6.6, 13.0] {
            assert_eq!(activity(0.0, h).unwrap(), 100.0);
        }
    }

    #[test]
    fn activity_stays_in_percent_range() {
        let m = DecayModel::new(2.0).unwrap();
        for t in [0.0, 1.0, 10.0, 1.0e4] {
            let a = m.activity(t).unwrap();
            assert!((0.0..=100.0).contains(&a));
        }
    }

    #[test]
    fn non_positive_half_life_rejected() {
        assert!(matches!(DecayModel::new(0.0), Err(DecayError::Config(_))));
        assert!(matches!(DecayModel::new(-3.0), Err(DecayError::Config(_))));
        assert!(matches!(DecayModel::new(f64::INFINITY), Err(DecayError::Config(_))));
    }

    #[test]
    fn negative_time_rejected() {
        let m = DecayModel::new(8.0).unwrap();
        assert_eq!(m.activity(-1.0), Err(DecayError::NegativeTime(-1.0)));
    }

    #[test]
    fn decay_activity_rejects_whole_query_on_one_bad_time() {
        let result = decay_activity(8.0, [0.0, 4.0, f64::NAN]);
        assert!(matches!(result, Err(DecayError::NegativeTime(_))));
    }

    #[test]
    fn decay_activity_preserves_caller_order() {
        let pts = decay_activity(6.0, [12.0, 0.0, 6.0]).unwrap();
        let times: Vec<f64> = pts.iter().map(|p| p.time).collect();
        assert_eq!(times, [12.0, 0.0, 6.0]);
        assert!((pts[0].activity - 25.0).abs() < EPS);
        assert!((pts[2].activity - 50.0).abs() < EPS);
    }

    #[test]
    fn decay_constant_matches_definition() {
        let m = DecayModel::new(8.0).unwrap();
        assert!((m.decay_constant() - std::f64::consts::LN_2 / 8.0).abs() < 1e-15);
    }
}

#[cfg(test)]
mod series_tests {
    use crate::model::MAX_SAMPLES;
    use crate::{DecayError, DecayModel};

    #[test]
    fn series_includes_both_ends() {
        let m = DecayModel::new(8.0).unwrap();
        let pts: Vec<_> = m.series(99.0, 1.0).unwrap().collect();
        assert_eq!(pts.len(), 100);
        assert_eq!(pts[0].time, 0.0);
        assert_eq!(pts[99].time, 99.0);
    }

    #[test]
    fn series_is_monotonically_decreasing() {
        let m = DecayModel::new(6.0).unwrap();
        let pts: Vec<_> = m.series(47.0, 1.0).unwrap().collect();
        assert!(pts.windows(2).all(|w| w[1].activity < w[0].activity));
    }

    #[test]
    fn fractional_resolution_hits_horizon() {
        let m = DecayModel::new(1.0).unwrap();
        let series = m.series(0.3, 0.1).unwrap();
        assert_eq!(series.len(), 4);
    }

    #[test]
    fn series_is_restartable() {
        let m = DecayModel::new(13.0).unwrap();
        let mut s = m.series(10.0, 2.5).unwrap();
        let first: Vec<_> = s.by_ref().collect();
        assert!(s.next().is_none());
        s.rewind();
        let second: Vec<_> = s.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn zero_horizon_yields_single_sample() {
        let m = DecayModel::new(5.0).unwrap();
        let pts: Vec<_> = m.series(0.0, 1.0).unwrap().collect();
        assert_eq!(pts.len(), 1);
        assert_eq!(pts[0].activity, 100.0);
    }

    #[test]
    fn invalid_resolution_rejected() {
        let m = DecayModel::new(5.0).unwrap();
        assert!(m.series(10.0, 0.0).is_err());
        assert!(m.series(-1.0, 1.0).is_err());
    }

    #[test]
    fn huge_horizon_is_an_error_not_a_panic() {
        let m = DecayModel::new(1.0).unwrap();
        assert!(matches!(
            m.series(1e20, 1.0),
            Err(DecayError::TooManySamples { max: MAX_SAMPLES, .. })
        ));
        assert!(matches!(m.series(1.0, 1e-300), Err(DecayError::TooManySamples { .. })));
    }

    #[test]
    fn sample_cap_is_inclusive_of_the_last_allowed_length() {
        let m = DecayModel::new(1.0).unwrap();
        let steps = (MAX_SAMPLES - 1) as f64;
        assert_eq!(m.series(steps, 1.0).unwrap().len(), MAX_SAMPLES);
        assert!(m.series(steps + 1.0, 1.0).is_err());
    }
}

#[cfg(test)]
mod isotope_tests {
    use crate::{DecayError, DecayTable, Isotope, TimeUnit};

    #[test]
    fn presets_have_expected_half_lives() {
        assert_eq!(Isotope::IR_192.half_life, 74.0);
        assert_eq!(Isotope::TC_99M.unit, TimeUnit::Hours);
        assert!(Isotope::THERAPY.iter().all(|i| i.unit == TimeUnit::Days));
    }

    #[test]
    fn preset_lookup_is_case_insensitive() {
        assert_eq!(Isotope::preset("tc-99m"), Some(Isotope::TC_99M));
        assert_eq!(Isotope::preset("Cs-137"), None);
    }

    #[test]
    fn therapy_table_shape() {
        let table = DecayTable::build(&Isotope::THERAPY, 99.0, 1.0).unwrap();
        assert_eq!(table.len(), 100);
        assert_eq!(table.columns.len(), 3);
        assert!(table.columns.iter().all(|(_, col)| col.len() == 100));
        // I-131 at 8 days is half its initial activity.
        let i131 = &table.columns[1].1;
        assert!((i131[8] - 50.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_units_rejected() {
        let result = DecayTable::build(&[Isotope::I_131, Isotope::TC_99M], 10.0, 1.0);
        assert!(matches!(result, Err(DecayError::MixedUnits { isotope: "Tc-99m", .. })));
    }

    #[test]
    fn oversized_table_rejected() {
        let result = DecayTable::build(&Isotope::THERAPY, 1e20, 1.0);
        assert!(matches!(result, Err(DecayError::TooManySamples { .. })));
    }

    #[test]
    fn custom_isotope_validates_half_life() {
        let spectrum = Isotope::I_131.spectrum;
        assert!(Isotope::new("X-1", 0.0, TimeUnit::Days, spectrum).is_err());
        assert!(Isotope::new("X-1", 2.0, TimeUnit::Days, spectrum).is_ok());
    }
}

#[cfg(test)]
mod spectrum_tests {
    use rad_core::{ReplayRng, SimRng};

    use crate::Isotope;
    use crate::spectrum::{DEFAULT_CHANNELS, DEFAULT_NOISE};

    #[test]
    fn line_channel_reports_line_height() {
        let p = Isotope::TC_99M.spectrum;
        assert_eq!(p.baseline(140), 1000.0);
        assert!(p.baseline(141) < 100.0);
    }

    #[test]
    fn noise_free_sample_equals_baseline() {
        let p = Isotope::IR_192.spectrum;
        let mut rng = ReplayRng::constant(0.0);
        let s = p.sample(DEFAULT_CHANNELS, DEFAULT_NOISE, &mut rng);
        assert_eq!(s.len(), 800);
        assert_eq!(s[316].counts, 1000.0);
        assert_eq!(s[468].counts, 900.0);
        assert_eq!(rng.draws(), 800);
    }

    #[test]
    fn noise_bounded_by_amplitude() {
        let p = Isotope::LU_177.spectrum;
        let mut rng = SimRng::new(3);
        for s in p.sample(DEFAULT_CHANNELS, DEFAULT_NOISE, &mut rng) {
            let base = p.baseline(s.energy_kev as usize);
            assert!(s.counts >= base && s.counts <= base + DEFAULT_NOISE);
        }
    }

    #[test]
    fn diagnostic_line_channels_stay_exact() {
        let p = Isotope::TC_99M.spectrum;
        let mut rng = ReplayRng::constant(0.5);
        let s = p.sample(DEFAULT_CHANNELS, DEFAULT_NOISE, &mut rng);
        assert_eq!(s[140].counts, 1000.0);
        assert_eq!(s[139].counts, p.baseline(139) + 10.0);
        assert_eq!(rng.draws(), DEFAULT_CHANNELS - 1);
    }

    #[test]
    fn iridium_line_channels_carry_noise() {
        let p = Isotope::IR_192.spectrum;
        let mut rng = ReplayRng::constant(0.5);
        let s = p.sample(DEFAULT_CHANNELS, DEFAULT_NOISE, &mut rng);
        assert_eq!(s[316].counts, 1010.0);
        assert_eq!(rng.draws(), DEFAULT_CHANNELS);
    }

    #[test]
    fn dominant_line() {
        let line = Isotope::IR_192.spectrum.dominant_line().unwrap();
        assert_eq!(line.energy_kev, 316.0);
    }
}
