use rand::Rng;

use super::Medium;

/// Converts `MeV cm²/g * g/cm³ * m` to GeV: ×100 cm/m, ×0.001 GeV/MeV.
pub const UNIT_FACTOR: f64 = 0.1;

/// Defines how much energy a muon loses over one step.
pub trait EnergyLossModel {
    /// Energy lost over `step` metres in `medium`. Never negative.
    fn loss<R: Rng + ?Sized>(&self, energy: f64, medium: &Medium, step: f64, rng: &mut R) -> f64;

    /// Returns `(new_energy, loss)` with the new energy clamped at 0.
    fn apply<R: Rng + ?Sized>(
        &self,
        energy: f64,
        medium: &Medium,
        step: f64,
        rng: &mut R,
    ) -> (f64, f64) {
        let loss = self.loss(energy, medium, step, rng).max(0.);
        ((energy - loss).max(0.), loss)
    }
}

/// Stochastic ionisation loss with an optional radiative term.
///
/// Ionisation: `rate * U(density) * U(thickness) * step * 0.1`, drawn fresh
/// every step and independent of the current energy.
///
/// Radiative (only when `radiation_length` is set):
/// `E * (1 - exp(-step / (X0 / mean_density)))`.
#[derive(Debug, Clone, Copy)]
pub struct StochasticLoss {
    /// Loss rate in MeV cm²/g.
    pub rate: f64,
    pub thickness_range: [f64; 2],
    pub radiation_length: Option<f64>,
}

impl StochasticLoss {
    pub fn new(rate: f64, thickness_range: [f64; 2], radiation_length: Option<f64>) -> Self {
        Self {
            rate,
            thickness_range,
            radiation_length,
        }
    }
}

impl EnergyLossModel for StochasticLoss {
    fn loss<R: Rng + ?Sized>(&self, energy: f64, medium: &Medium, step: f64, rng: &mut R) -> f64 {
        let density = uniform(medium.density_range, rng);
        let thickness = uniform(self.thickness_range, rng);
        let mut loss = self.rate * density * thickness * step * UNIT_FACTOR;

        if let Some(x0) = self.radiation_length {
            let mean_density = 0.5 * (medium.density_range[0] + medium.density_range[1]);
            if mean_density > 0. {
                loss += energy * (1. - (-step * mean_density / x0).exp());
            }
        }
        loss
    }
}

/// Draws from `U(lo, hi)`, returning `lo` for an empty range.
fn uniform<R: Rng + ?Sized>([lo, hi]: [f64; 2], rng: &mut R) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}
