use std::fmt;

use crate::{Point, Vector};

/// State of one simulated muon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muon {
    pub id: usize,
    pub position: Point,
    /// Unit direction of travel.
    pub direction: Vector,
    /// Energy in GeV, never negative.
    pub energy: f64,
}

impl Muon {
    pub fn new(id: usize, position: Point, direction: Vector, energy: f64) -> Self {
        Self {
            id,
            position,
            direction,
            energy,
        }
    }
}

/// One recorded state along a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryStep {
    pub position: Point,
    pub direction: Vector,
    pub energy: f64,
    /// Energy lost during this step (0 for the entry state).
    pub energy_loss: f64,
    pub absorbed: bool,
}

/// How a muon run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Termination {
    /// Initial position outside the host solid; nothing recorded.
    Rejected,
    Absorbed,
    /// Energy reached zero.
    Depleted,
    /// Left the host solid.
    Exited,
    StepLimitReached,
}

impl Termination {
    pub const ALL: [Termination; 5] = [
        Termination::Rejected,
        Termination::Absorbed,
        Termination::Depleted,
        Termination::Exited,
        Termination::StepLimitReached,
    ];
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Termination::Rejected => "rejected",
            Termination::Absorbed => "absorbed",
            Termination::Depleted => "depleted",
            Termination::Exited => "exited",
            Termination::StepLimitReached => "step_limit",
        };
        write!(f, "{s}")
    }
}

/// Recorded trajectory of one muon and its final state.
#[derive(Debug, Clone, PartialEq)]
pub struct MuonTrack {
    pub muon_id: usize,
    pub steps: Vec<TrajectoryStep>,
    pub termination: Termination,
}

impl MuonTrack {
    /// Sum of the per-step energy losses.
    pub fn total_energy_loss(&self) -> f64 {
        self.steps.iter().map(|s| s.energy_loss).sum()
    }

    pub fn last(&self) -> Option<&TrajectoryStep> {
        self.steps.last()
    }
}
