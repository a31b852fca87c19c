//! shielding — paper vs. lead, and α/β/γ in a magnetic field.
//!
//! Runs the scenarios in `SCENARIOS_JSON` for a few simulated seconds each,
//! measures the single-crossing attenuation of every barrier, and exports the
//! decay-curve and gamma-spectrum tables used by the chart views.
//!
//! Output lands in `./output/<scenario>/` and `./output/charts/`.  Set
//! `RUST_LOG=debug` to see per-frame logging.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use rad_core::{SimRng, SimulationConfig, Species};
use rad_decay::Isotope;
use rad_decay::spectrum::{DEFAULT_CHANNELS, DEFAULT_NOISE};
use rad_output::{CsvWriter, SimOutputObserver, export_decay_table, write_spectrum};
use rad_region::{Interaction, Scene, measure_attenuation};
use rad_sim::{NoopObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const RUN_MS:             f64   = 5_000.0;
const DEFLECTION_MS:      f64   = 1_500.0;
const FRAME_MS:           f64   = 1_000.0 / 60.0; // one display refresh
const SNAPSHOT_EVERY:     usize = 30;             // twice per simulated second
const ATTENUATION_TRIALS: usize = 200_000;
const SPECTRUM_SEED:      u64   = 7;

// ── Scenario table ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct Scenario {
    name:   String,
    config: SimulationConfig,
    #[serde(default)]
    scene:  Scene,
}

// Vectors are `[x, y, z]`.  Missing config keys take their defaults.
const SCENARIOS_JSON: &str = r#"[
  {
    "name": "paper",
    "config": { "emission_interval_ms": 50.0, "emission_batch": 2, "max_particles": 150,
                "base_speed": 4.0, "angular_spread_deg": 30.0, "boundary_radius": 12.0,
                "species_mix": [ { "species": "alpha", "weight": 1.0 } ], "seed": 11 },
    "scene": {
      "barriers": [ {
        "name": "paper",
        "region": { "min": [-0.1, -3.0, -3.0], "max": [0.1, 3.0, 3.0] },
        "normal_axis": "X",
        "probabilities": { "reflect": 0.1, "transmit": 0.1 },
        "overrides": {
          "beta":  { "reflect": 0.05, "transmit": 0.9 },
          "gamma": { "reflect": 0.0,  "transmit": 0.99 }
        }
      } ]
    }
  },
  {
    "name": "lead",
    "config": { "emission_interval_ms": 50.0, "emission_batch": 2, "max_particles": 150,
                "base_speed": 4.0, "angular_spread_deg": 30.0, "boundary_radius": 12.0,
                "species_mix": [ { "species": "gamma", "weight": 1.0 } ], "seed": 12 },
    "scene": {
      "barriers": [ {
        "name": "lead",
        "region": { "min": [-0.3, -3.0, -3.0], "max": [0.3, 3.0, 3.0] },
        "normal_axis": "X",
        "probabilities": { "reflect": 0.8, "transmit": 0.15 },
        "energy_loss": 0.5
      } ]
    }
  },
  {
    "name": "magnetic",
    "config": { "emission_interval_ms": 40.0, "max_particles": 200, "base_speed": 5.0,
                "angular_spread_deg": 4.0, "boundary_radius": 15.0, "dimensions": "planar",
                "species_mix": [ { "species": "alpha", "weight": 1.0 },
                                 { "species": "beta",  "weight": 1.0 },
                                 { "species": "gamma", "weight": 1.0 } ], "seed": 13 },
    "scene": {
      "fields": [ {
        "name": "magnet",
        "region": { "min": [-2.0, -4.0, -0.5], "max": [2.0, 4.0, 0.5] },
        "transverse_axis": "Y",
        "coefficients": { "alpha": 0.02, "beta": -0.12 }
      } ]
    }
  }
]"#;

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let scenarios: Vec<Scenario> =
        serde_json::from_str(SCENARIOS_JSON).context("parsing scenario table")?;
    let out_root = Path::new("output");

    for scenario in &scenarios {
        attenuation(scenario)?;
        run_scenario(scenario, out_root)?;
    }

    export_charts(&out_root.join("charts"))?;
    Ok(())
}

// ── Attenuation ───────────────────────────────────────────────────────────────

fn attenuation(scenario: &Scenario) -> Result<()> {
    for barrier in &scenario.scene.barriers {
        println!("\n{} barrier, {} trials per species", barrier.name, ATTENUATION_TRIALS);
        println!("  {:<8} {:>10} {:>12} {:>10}", "species", "reflected", "transmitted", "absorbed");

        for species in [Species::Alpha, Species::Beta, Species::Gamma] {
            let tally = measure_attenuation(barrier, species, ATTENUATION_TRIALS, scenario.config.seed)
                .with_context(|| format!("attenuation experiment on {}", barrier.name))?;
            println!(
                "  {:<8} {:>9.1}% {:>11.1}% {:>9.1}%",
                species.as_str(),
                100.0 * tally.fraction(Interaction::Reflected),
                100.0 * tally.fraction(Interaction::Transmitted),
                100.0 * tally.fraction(Interaction::Absorbed),
            );
        }
    }
    Ok(())
}

// ── Frame-loop run ────────────────────────────────────────────────────────────

fn run_scenario(scenario: &Scenario, out_root: &Path) -> Result<()> {
    let mut sim = Simulation::builder(scenario.config.clone())
        .scene(scenario.scene.clone())
        .build()
        .with_context(|| format!("building scenario {}", scenario.name))?;

    let dir = out_root.join(&scenario.name);
    let writer = CsvWriter::new(&dir).with_context(|| format!("opening {}", dir.display()))?;
    let mut obs = SimOutputObserver::new(writer).with_snapshot_interval(SNAPSHOT_EVERY);

    let t0 = Instant::now();
    let report = {
        let mut guard = sim.run_guard();
        guard.run_for(RUN_MS, FRAME_MS, &mut obs)?
    };
    info!(scenario = %scenario.name, elapsed = ?t0.elapsed(), "run finished");

    if let Some(e) = obs.take_error() {
        warn!(scenario = %scenario.name, error = %e, "output error");
    }

    println!(
        "\n{}: {} emitted, {} evicted, {} reflected, {} transmitted, {} absorbed, {} escaped",
        scenario.name,
        report.emitted,
        report.evicted,
        report.reflected,
        report.transmitted,
        report.absorbed,
        report.escaped,
    );

    if !scenario.scene.fields.is_empty() {
        deflection_summary(&scenario.name, &mut sim)?;
    }
    println!("  output → {}", dir.display());
    Ok(())
}

/// Mean transverse velocity per species after a fresh run long enough for
/// the first particles to cross the field.
fn deflection_summary(name: &str, sim: &mut Simulation) -> Result<()> {
    sim.start();
    sim.run_for(DEFLECTION_MS, FRAME_MS, &mut NoopObserver)?;

    println!("  {name}: mean vy by species");
    for species in [Species::Alpha, Species::Beta, Species::Gamma] {
        let (sum, n) = sim
            .active_particles()
            .filter(|p| p.species == species)
            .fold((0.0, 0usize), |(s, n), p| (s + p.velocity.y, n + 1));
        if n > 0 {
            println!("    {:<6} {:+.3} ({n} particles)", species.as_str(), sum / n as f64);
        }
    }
    sim.stop();
    Ok(())
}

// ── Charts ────────────────────────────────────────────────────────────────────

fn export_charts(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)?;

    let therapy = export_decay_table(&dir.join("decay_therapy.csv"), &Isotope::THERAPY, 100.0, 1.0)?;
    let diagnostic =
        export_decay_table(&dir.join("decay_diagnostic.csv"), &Isotope::DIAGNOSTIC, 48.0, 0.5)?;
    info!(therapy_rows = therapy.len(), diagnostic_rows = diagnostic.len(), "decay tables written");

    let mut rng = SimRng::new(SPECTRUM_SEED);
    for isotope in Isotope::DIAGNOSTIC {
        let samples = isotope.spectrum.sample(DEFAULT_CHANNELS, DEFAULT_NOISE, &mut rng);
        let path = dir.join(format!("spectrum_{}.csv", isotope.name.to_lowercase()));
        write_spectrum(&path, &samples)?;
    }

    println!("\ncharts → {}", dir.display());
    Ok(())
}
