//! Synthetic gamma energy spectra.
//!
//! A spectrum is a Gaussian continuum bump plus a handful of sharp
//! photopeak lines, with uniform counting noise on the continuum.  Line
//! channels stay exact unless the profile sets `noisy_lines`.  Channels are
//! 1 keV wide starting at 0 keV.

use rad_core::RandomSource;

/// Default channel count (0–799 keV).
pub const DEFAULT_CHANNELS: usize = 800;

/// Default noise amplitude added to noisy channels.
pub const DEFAULT_NOISE: f64 = 20.0;

/// Peak height of the Gaussian continuum.
const CONTINUUM_HEIGHT: f64 = 100.0;

/// A single photopeak: all its counts land in one channel.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectralLine {
    pub energy_kev: f64,
    pub counts:     f64,
}

/// One channel of a generated spectrum.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumSample {
    pub energy_kev: f64,
    pub counts:     f64,
}

/// Shape parameters of an isotope's spectrum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpectrumProfile {
    pub lines:             &'static [SpectralLine],
    /// Centre of the continuum bump, keV.
    pub continuum_center:  f64,
    /// Divisor in `exp(-(E - centre)² / width)`.
    pub continuum_width:   f64,
    /// Add noise to line channels too (Ir-192 chart).
    pub noisy_lines:       bool,
}

impl SpectrumProfile {
    /// Noise-free count level at integer channel `channel`.
    ///
    /// A channel that carries a line reports the line height instead of the
    /// continuum.
    pub fn baseline(&self, channel: usize) -> f64 {
        let e = channel as f64;
        if let Some(line) = self.lines.iter().find(|l| l.energy_kev.round() as usize == channel) {
            return line.counts;
        }
        let d = e - self.continuum_center;
        CONTINUUM_HEIGHT * (-(d * d) / self.continuum_width).exp()
    }

    fn is_line(&self, channel: usize) -> bool {
        self.lines.iter().any(|l| l.energy_kev.round() as usize == channel)
    }

    /// Generate `channels` samples, adding uniform noise in `[0, noise)` to
    /// each noisy channel.  Draws one value per noisy channel and none for
    /// exact line channels.
    pub fn sample<R: RandomSource + ?Sized>(
        &self,
        channels: usize,
        noise:    f64,
        rng:      &mut R,
    ) -> Vec<SpectrumSample> {
        (0..channels)
            .map(|ch| {
                let mut counts = self.baseline(ch);
                if self.noisy_lines || !self.is_line(ch) {
                    counts += noise * rng.next_f64();
                }
                SpectrumSample { energy_kev: ch as f64, counts }
            })
            .collect()
    }

    /// The line with the most counts, if any.
    pub fn dominant_line(&self) -> Option<SpectralLine> {
        self.lines
            .iter()
            .copied()
            .max_by(|a, b| a.counts.total_cmp(&b.counts))
    }
}
