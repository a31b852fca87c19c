//! Unit tests for rad-region.

#[cfg(test)]
mod fixtures {
    use rad_core::{Aabb, Axis, ParticleId, SimTime, Species, Vec3};
    use rad_particle::Particle;

    use crate::{Barrier, InteractionProbabilities};

    /// A 0.2-thick slab centred on the origin, normal along X.
    pub fn slab(probabilities: InteractionProbabilities) -> Barrier {
        Barrier::new(
            "slab",
            Aabb::from_center(Vec3::ZERO, Vec3::new(0.1, 1.25, 1.25)),
            Axis::X,
            probabilities,
        )
    }

    pub fn particle_at(x: f64, vx: f64, species: Species) -> Particle {
        Particle::new(
            ParticleId(0),
            species,
            Vec3::new(x, 0.0, 0.0),
            Vec3::new(vx, 0.3, 0.0),
            SimTime::ZERO,
            0,
        )
    }
}

#[cfg(test)]
mod probability_tests {
    use rad_core::ConfigError;

    use crate::{Interaction, InteractionProbabilities};

    #[test]
    fn triple_sums_to_one() {
        for (r, t) in [(0.8, 0.15), (0.0, 1.0), (1.0, 0.0), (0.3, 0.3), (0.0, 0.0)] {
            let p = InteractionProbabilities::new(r, t).unwrap();
            assert!((p.reflect() + p.transmit() + p.absorb() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn oversubscribed_rejected() {
        assert_eq!(
            InteractionProbabilities::new(0.7, 0.4),
            Err(ConfigError::ProbabilitiesExceedOne { reflect: 0.7, transmit: 0.4 })
        );
    }

    #[test]
    fn out_of_range_rejected() {
        assert!(InteractionProbabilities::new(-0.1, 0.5).is_err());
        assert!(InteractionProbabilities::new(0.1, 1.5).is_err());
        assert!(InteractionProbabilities::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn classify_uses_strict_less_than_in_fixed_order() {
        let p = InteractionProbabilities::new(0.8, 0.15).unwrap();
        assert_eq!(p.classify(0.0), Interaction::Reflected);
        assert_eq!(p.classify(0.79), Interaction::Reflected);
        assert_eq!(p.classify(0.8), Interaction::Transmitted);
        assert_eq!(p.classify(0.96), Interaction::Absorbed);
    }

    #[test]
    fn absorb_all_never_reflects() {
        let p = InteractionProbabilities::ABSORB_ALL;
        assert_eq!(p.classify(0.0), Interaction::Absorbed);
        assert_eq!(p.absorb(), 1.0);
    }
}

#[cfg(test)]
mod barrier_tests {
    use rad_core::{ConfigError, ReplayRng, Species};

    use super::fixtures::{particle_at, slab};
    use crate::{DEFAULT_SURFACE_EPSILON, Interaction, InteractionProbabilities};

    #[test]
    fn outside_particle_draws_nothing() {
        let b = slab(InteractionProbabilities::REFLECT_ALL);
        let mut p = particle_at(-0.5, 1.0, Species::Generic);
        let mut rng = ReplayRng::constant(0.0);
        let before = p.position;
        assert_eq!(b.interact(&mut p, before, &mut rng), None);
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn pass_through_exits_far_side_with_same_sign() {
        let b = slab(InteractionProbabilities::PASS_THROUGH);
        let mut p = particle_at(-0.05, 2.0, Species::Generic);
        let before = p.position - p.velocity * 0.1;
        let mut rng = ReplayRng::constant(0.5);

        assert_eq!(b.interact(&mut p, before, &mut rng), Some(Interaction::Transmitted));
        assert!((p.position.x - (0.1 + DEFAULT_SURFACE_EPSILON)).abs() < 1e-12);
        assert_eq!(p.velocity.x, 2.0);
        assert!(!b.contains(p.position));
    }

    #[test]
    fn transmit_from_high_side_exits_low_side() {
        let b = slab(InteractionProbabilities::PASS_THROUGH);
        let mut p = particle_at(0.05, -2.0, Species::Generic);
        let before = p.position - p.velocity * 0.1;
        b.interact(&mut p, before, &mut ReplayRng::constant(0.5));
        assert!((p.position.x + 0.1 + DEFAULT_SURFACE_EPSILON).abs() < 1e-12);
        assert_eq!(p.velocity.x, -2.0);
    }

    #[test]
    fn reflect_flips_normal_exactly_once() {
        let b = slab(InteractionProbabilities::REFLECT_ALL);
        let mut p = particle_at(-0.09, 2.0, Species::Generic);
        let mut rng = ReplayRng::constant(0.5);

        let before = p.position - p.velocity * 0.1;
        assert_eq!(b.interact(&mut p, before, &mut rng), Some(Interaction::Reflected));
        assert_eq!(p.velocity.x, -2.0);
        assert_eq!(p.velocity.y, 0.3);
        assert!((p.position.x + 0.1 + DEFAULT_SURFACE_EPSILON).abs() < 1e-12);

        // Next sub-step moves it further away; no second trigger.
        let before = p.position;
        p.advance(1.0 / 60.0);
        assert_eq!(b.interact(&mut p, before, &mut rng), None);
        assert_eq!(p.velocity.x, -2.0);
    }

    #[test]
    fn absorb_retires() {
        let b = slab(InteractionProbabilities::ABSORB_ALL);
        let mut p = particle_at(0.0, 1.0, Species::Generic);
        let before = p.position;
        assert_eq!(b.interact(&mut p, before, &mut ReplayRng::constant(0.1)), Some(Interaction::Absorbed));
        assert!(!p.active);
    }

    #[test]
    fn species_override_takes_precedence() {
        let paper = slab(InteractionProbabilities::PASS_THROUGH)
            .with_override(Species::Alpha, InteractionProbabilities::REFLECT_ALL);
        let mut rng = ReplayRng::constant(0.5);

        let mut alpha = particle_at(0.0, 1.0, Species::Alpha);
        let mut gamma = particle_at(0.0, 1.0, Species::Gamma);
        let before = alpha.position - alpha.velocity;
        assert_eq!(paper.interact(&mut alpha, before, &mut rng), Some(Interaction::Reflected));
        assert_eq!(paper.interact(&mut gamma, before, &mut rng), Some(Interaction::Transmitted));
    }

    #[test]
    fn non_positive_epsilon_rejected() {
        assert!(slab(InteractionProbabilities::PASS_THROUGH).with_surface_epsilon(0.0).is_err());
    }

    #[test]
    fn energy_loss_defaults_to_zero() {
        let b = slab(InteractionProbabilities::PASS_THROUGH);
        assert_eq!(b.energy_loss, 0.0);
        assert!(b.validate().is_ok());
    }

    #[test]
    fn energy_loss_slows_reflected_and_transmitted() {
        let mut rng = ReplayRng::constant(0.5);

        let lead = slab(InteractionProbabilities::REFLECT_ALL).with_energy_loss(0.5).unwrap();
        let mut p = particle_at(-0.09, 2.0, Species::Generic);
        let before = p.position - p.velocity * 0.1;
        assert_eq!(lead.interact(&mut p, before, &mut rng), Some(Interaction::Reflected));
        assert_eq!(p.velocity.x, -1.0);
        assert_eq!(p.velocity.y, 0.15);

        let wood = slab(InteractionProbabilities::PASS_THROUGH).with_energy_loss(0.25).unwrap();
        let mut p = particle_at(-0.05, 2.0, Species::Generic);
        let before = p.position - p.velocity * 0.1;
        assert_eq!(wood.interact(&mut p, before, &mut rng), Some(Interaction::Transmitted));
        assert_eq!(p.velocity.x, 1.5);
        assert!((p.position.x - (0.1 + DEFAULT_SURFACE_EPSILON)).abs() < 1e-12);
    }

    #[test]
    fn energy_loss_leaves_absorption_unchanged() {
        let b = slab(InteractionProbabilities::ABSORB_ALL).with_energy_loss(0.9).unwrap();
        let mut p = particle_at(0.0, 1.0, Species::Generic);
        let before = p.position;
        assert_eq!(b.interact(&mut p, before, &mut ReplayRng::constant(0.1)), Some(Interaction::Absorbed));
        assert!(!p.active);
        assert_eq!(p.velocity.x, 1.0);
    }

    #[test]
    fn energy_loss_outside_unit_interval_rejected() {
        let b = || slab(InteractionProbabilities::PASS_THROUGH);
        assert!(matches!(
            b().with_energy_loss(1.0),
            Err(ConfigError::FractionOutOfRange { field: "energy_loss", .. })
        ));
        assert!(b().with_energy_loss(-0.1).is_err());
        assert!(b().with_energy_loss(f64::NAN).is_err());

        let mut hand_built = b();
        hand_built.energy_loss = 1.5;
        assert!(hand_built.validate().is_err());
    }
}

#[cfg(test)]
mod field_tests {
    use rad_core::{Aabb, Axis, Species, Vec3};

    use super::fixtures::particle_at;
    use crate::{FieldRegion, SpeedPolicy};

    fn plates() -> FieldRegion {
        FieldRegion::new("plates", Aabb::from_center(Vec3::ZERO, Vec3::splat(1.0)), Axis::Y)
            .with_coefficient(Species::Alpha, 0.25)
            .unwrap()
            .with_coefficient(Species::Beta, -0.5)
            .unwrap()
    }

    #[test]
    fn charged_species_deflect_in_opposite_directions() {
        let f = plates();
        let mut a = particle_at(0.0, 1.0, Species::Alpha);
        let mut b = particle_at(0.0, 1.0, Species::Beta);
        assert!(f.apply(&mut a));
        assert!(f.apply(&mut b));
        assert!((a.velocity.y - 0.55).abs() < 1e-12);
        assert!((b.velocity.y + 0.2).abs() < 1e-12);
    }

    #[test]
    fn neutral_species_pass_undeflected() {
        let f = plates();
        let mut g = particle_at(0.0, 1.0, Species::Gamma);
        let v = g.velocity;
        assert!(!f.apply(&mut g));
        assert_eq!(g.velocity, v);
    }

    #[test]
    fn outside_field_untouched() {
        let mut a = particle_at(3.0, 1.0, Species::Alpha);
        assert!(!plates().apply(&mut a));
    }

    #[test]
    fn renormalize_preserves_speed() {
        let f = plates().with_speed_policy(SpeedPolicy::Renormalize);
        let mut a = particle_at(0.0, 1.0, Species::Alpha);
        let speed = a.speed();
        for _ in 0..10 {
            f.apply(&mut a);
        }
        assert!((a.speed() - speed).abs() < 1e-12);
        assert!(a.velocity.y > 0.3);
    }

    #[test]
    fn accumulate_grows_speed() {
        let f = plates();
        let mut a = particle_at(0.0, 1.0, Species::Alpha);
        let speed = a.speed();
        f.apply(&mut a);
        assert!(a.speed() > speed);
    }

    #[test]
    fn non_finite_coefficient_rejected() {
        let f = FieldRegion::new("f", Aabb::from_center(Vec3::ZERO, Vec3::ONE), Axis::Y);
        assert!(f.with_coefficient(Species::Beta, f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod scene_tests {
    use rad_core::{BarrierId, ReplayRng, Species};

    use super::fixtures::{particle_at, slab};
    use crate::{Interaction, InteractionProbabilities, Scene};

    #[test]
    fn overlapping_barriers_interact_once_in_insertion_order() {
        let scene = Scene::new()
            .with_barrier(slab(InteractionProbabilities::ABSORB_ALL))
            .with_barrier(slab(InteractionProbabilities::REFLECT_ALL));
        let mut p = particle_at(0.0, 1.0, Species::Generic);
        let mut rng = ReplayRng::constant(0.5);
        let before = p.position;

        assert_eq!(
            scene.resolve(&mut p, before, &mut rng),
            Some((BarrierId(0), Interaction::Absorbed))
        );
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn empty_scene_does_nothing() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        let mut p = particle_at(0.0, 1.0, Species::Generic);
        let before = p.position;
        assert_eq!(scene.resolve(&mut p, before, &mut ReplayRng::constant(0.0)), None);
        assert_eq!(scene.deflect(&mut p), 0);
    }
}

#[cfg(test)]
mod experiment_tests {
    use rad_core::{Aabb, Axis, Species, Vec3};

    use super::fixtures::slab;
    use crate::{Barrier, Interaction, InteractionProbabilities, measure_attenuation};

    #[test]
    fn absorb_fraction_converges() {
        let lead = slab(InteractionProbabilities::new(0.8, 0.15).unwrap());
        let tally = measure_attenuation(&lead, Species::Generic, 100_000, 2024).unwrap();

        assert_eq!(tally.trials, 100_000);
        assert_eq!(tally.reflected + tally.transmitted + tally.absorbed, 100_000);
        assert!((tally.fraction(Interaction::Absorbed) - 0.05).abs() < 0.01);
        assert!((tally.fraction(Interaction::Reflected) - 0.8).abs() < 0.01);
    }

    #[test]
    fn same_seed_same_tally() {
        let b = slab(InteractionProbabilities::new(0.3, 0.3).unwrap());
        let a = measure_attenuation(&b, Species::Beta, 9_000, 11).unwrap();
        let c = measure_attenuation(&b, Species::Beta, 9_000, 11).unwrap();
        assert_eq!(a, c);
    }

    #[test]
    fn zero_trials_rejected() {
        let b = slab(InteractionProbabilities::PASS_THROUGH);
        assert!(measure_attenuation(&b, Species::Generic, 0, 1).is_err());
    }

    #[test]
    fn degenerate_barrier_is_always_missed() {
        let flat = Barrier::new(
            "flat",
            Aabb::new(Vec3::new(0.0, -1.0, -1.0), Vec3::new(0.0, 1.0, 1.0)),
            Axis::X,
            InteractionProbabilities::ABSORB_ALL,
        );
        let tally = measure_attenuation(&flat, Species::Generic, 100, 1).unwrap();
        assert_eq!(tally.missed, 100);
        assert_eq!(tally.absorbed, 0);
    }
}
