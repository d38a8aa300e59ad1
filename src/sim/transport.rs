//! Stepwise stochastic transport of a single muon.
//!
//! Each step advances the muon by a fixed length, then applies absorption,
//! energy loss and scattering according to the region it landed in. A run
//! ends when the muon is absorbed, runs out of energy, leaves the host solid
//! or hits the step cap.

use anyhow::{Result, bail};
use rand::Rng;

use crate::Point;
use crate::geom::solid::Solid;
use crate::sim::config::Settings;
use crate::sim::detector::{DetectionLog, Detector};
use crate::sim::engine::{
    AbsorptionModel, EnergyLossModel, ExponentialAbsorption, Medium, PropagationModel,
    ScatteringModel, StochasticLoss, StraightLine, UniformKick,
};
use crate::sim::muon::{Muon, MuonTrack, Termination, TrajectoryStep};

/// Allowed deviation of an initial direction from unit length.
const UNIT_TOLERANCE: f64 = 1e-6;

/// Step integrator, generic over the physics models it applies.
///
/// [`Transport::new`] builds the default models from the settings; the
/// `with_*` methods swap a single model.
pub struct Transport<
    'a,
    A = ExponentialAbsorption,
    L = StochasticLoss,
    S = UniformKick,
    P = StraightLine,
> {
    /// Bulk material the muon travels through.
    pub host: &'a (dyn Solid + Sync),
    /// Low-density region embedded in the host.
    pub inclusion: &'a (dyn Solid + Sync),
    pub bulk: Medium,
    pub void: Medium,
    pub step_size: f64,
    pub max_steps: usize,
    pub absorption: A,
    pub energy_loss: L,
    pub scattering: S,
    pub propagation: P,
}

impl<'a> Transport<'a> {
    pub fn new(
        host: &'a (dyn Solid + Sync),
        inclusion: &'a (dyn Solid + Sync),
        settings: &Settings,
    ) -> Self {
        Self {
            host,
            inclusion,
            bulk: Medium::new(
                settings.pyramid_material_density,
                settings.muon_scattering_strength_in_other_material,
            ),
            void: Medium::new(
                settings.cavity_material_density,
                settings.muon_scattering_strength_in_cavity,
            ),
            step_size: settings.muon_step_size,
            max_steps: settings.max_steps,
            absorption: ExponentialAbsorption::new(settings.muon_mean_free_path),
            energy_loss: StochasticLoss::new(
                settings.muon_energy_loss_per_g_cm2,
                settings.pyramid_material_thickness_range,
                settings.radiation_length(),
            ),
            scattering: UniformKick,
            propagation: StraightLine,
        }
    }
}

impl<'a, A, L, S, P> Transport<'a, A, L, S, P>
where
    A: AbsorptionModel,
    L: EnergyLossModel,
    S: ScatteringModel,
    P: PropagationModel,
{
    pub fn with_absorption<A2: AbsorptionModel>(
        self,
        absorption: A2,
    ) -> Transport<'a, A2, L, S, P> {
        Transport {
            host: self.host,
            inclusion: self.inclusion,
            bulk: self.bulk,
            void: self.void,
            step_size: self.step_size,
            max_steps: self.max_steps,
            absorption,
            energy_loss: self.energy_loss,
            scattering: self.scattering,
            propagation: self.propagation,
        }
    }

    pub fn with_scattering<S2: ScatteringModel>(
        self,
        scattering: S2,
    ) -> Transport<'a, A, L, S2, P> {
        Transport {
            host: self.host,
            inclusion: self.inclusion,
            bulk: self.bulk,
            void: self.void,
            step_size: self.step_size,
            max_steps: self.max_steps,
            absorption: self.absorption,
            energy_loss: self.energy_loss,
            scattering,
            propagation: self.propagation,
        }
    }

    /// Medium at a position: the inclusion's inside it, the bulk elsewhere.
    pub fn medium_at(&self, position: Point) -> &Medium {
        if self.inclusion.contains(position) {
            &self.void
        } else {
            &self.bulk
        }
    }

    /// Runs one muon to termination.
    ///
    /// `detectors` and `logs` are index-aligned. Each detector records a muon
    /// at most once. Fails for a muon with a non-finite position, a negative
    /// or non-finite energy, or a direction that is not a unit vector.
    pub fn run<R: Rng + ?Sized>(
        &self,
        muon: &Muon,
        detectors: &[Detector],
        logs: &mut [DetectionLog],
        rng: &mut R,
    ) -> Result<MuonTrack> {
        check_initial_state(muon)?;

        let mut state = *muon;
        let mut steps = Vec::new();

        if !self.host.contains(state.position) {
            return Ok(MuonTrack {
                muon_id: muon.id,
                steps,
                termination: Termination::Rejected,
            });
        }

        steps.push(TrajectoryStep {
            position: state.position,
            direction: state.direction,
            energy: state.energy,
            energy_loss: 0.,
            absorbed: false,
        });
        let mut detected = vec![false; detectors.len()];

        let termination = loop {
            if !self.host.contains(state.position) {
                break Termination::Exited;
            }
            if steps.len() >= self.max_steps {
                break Termination::StepLimitReached;
            }

            let previous = state.position;
            state.position =
                self.propagation
                    .advance(state.position, state.direction, self.step_size);

            let exposure = self.host.segment_length(previous, state.position);
            if self.absorption.sample(exposure, rng) {
                steps.push(TrajectoryStep {
                    position: state.position,
                    direction: state.direction,
                    energy: state.energy,
                    energy_loss: 0.,
                    absorbed: true,
                });
                break Termination::Absorbed;
            }

            let medium = *self.medium_at(state.position);
            let (energy, loss) =
                self.energy_loss
                    .apply(state.energy, &medium, self.step_size, rng);
            state.energy = energy;
            if energy <= 0. {
                steps.push(TrajectoryStep {
                    position: state.position,
                    direction: state.direction,
                    energy: 0.,
                    energy_loss: loss,
                    absorbed: false,
                });
                break Termination::Depleted;
            }

            state.direction =
                self.scattering
                    .scatter(state.direction, medium.scattering_strength, rng);

            steps.push(TrajectoryStep {
                position: state.position,
                direction: state.direction,
                energy: state.energy,
                energy_loss: loss,
                absorbed: false,
            });

            for ((detector, log), seen) in detectors.iter().zip(logs.iter_mut()).zip(&mut detected)
            {
                if !*seen && detector.detect(state.position, rng) {
                    *seen = true;
                    log.record(state);
                }
            }
        };

        Ok(MuonTrack {
            muon_id: muon.id,
            steps,
            termination,
        })
    }
}

fn check_initial_state(muon: &Muon) -> Result<()> {
    let p = muon.position;
    if !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()) {
        bail!("Muon {} has a non-finite position {p}", muon.id);
    }
    if !(muon.energy.is_finite() && muon.energy >= 0.) {
        bail!("Muon {} has an invalid energy {}", muon.id, muon.energy);
    }
    let len = muon.direction.length();
    if !len.is_finite() || (len - 1.).abs() > UNIT_TOLERANCE {
        bail!("Muon {} direction is not a unit vector (length {len})", muon.id);
    }
    Ok(())
}
