//! Physics models applied by the transport integrator at every step.

pub mod absorption;
pub mod energy_loss;
pub mod propagation;
pub mod scattering;

pub use absorption::{AbsorptionModel, ExponentialAbsorption};
pub use energy_loss::{EnergyLossModel, StochasticLoss};
pub use propagation::{PropagationModel, StraightLine};
pub use scattering::{ScatteringModel, UniformKick};

/// Material properties of a region crossed by muons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Medium {
    /// Density range in g/cm³; a fresh value is drawn every step.
    pub density_range: [f64; 2],
    pub scattering_strength: f64,
}

impl Medium {
    pub fn new(density_range: [f64; 2], scattering_strength: f64) -> Self {
        Self {
            density_range,
            scattering_strength,
        }
    }
}
