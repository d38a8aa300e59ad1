use rand::Rng;

/// Defines how muons are absorbed while crossing material.
pub trait AbsorptionModel {
    /// Probability of absorption over the given exposure length.
    fn probability(&self, length: f64) -> f64;

    /// Bernoulli draw with [`probability`](Self::probability).
    fn sample<R: Rng + ?Sized>(&self, length: f64, rng: &mut R) -> bool {
        let p = self.probability(length);
        p > 0. && rng.r#gen::<f64>() < p
    }
}

/// Exponential attenuation: `p = 1 - exp(-length / mean_free_path)`.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialAbsorption {
    pub mean_free_path: f64,
}

impl ExponentialAbsorption {
    pub fn new(mean_free_path: f64) -> Self {
        Self { mean_free_path }
    }
}

impl AbsorptionModel for ExponentialAbsorption {
    fn probability(&self, length: f64) -> f64 {
        if length <= 0. {
            return 0.;
        }
        1. - (-length / self.mean_free_path).exp()
    }
}
