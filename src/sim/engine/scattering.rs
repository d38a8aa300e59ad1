use rand::Rng;

use crate::Vector;

/// Defines how a muon's direction is perturbed by the material it crosses.
pub trait ScatteringModel {
    /// Returns the new unit direction after one step in a medium with the
    /// given scattering strength.
    fn scatter<R: Rng + ?Sized>(&self, direction: Vector, strength: f64, rng: &mut R) -> Vector;
}

/// Uniform per-component kick `U(-s, s)` followed by renormalisation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformKick;

impl ScatteringModel for UniformKick {
    fn scatter<R: Rng + ?Sized>(&self, direction: Vector, strength: f64, rng: &mut R) -> Vector {
        if strength <= 0. {
            return direction;
        }
        let kick = Vector::new(
            rng.gen_range(-strength..strength),
            rng.gen_range(-strength..strength),
            rng.gen_range(-strength..strength),
        );
        match (direction + kick).normalize() {
            Ok(dir) => dir,
            Err(_) => {
                log::warn!("Scattering produced a zero direction, keeping {direction:?}");
                direction
            }
        }
    }
}
