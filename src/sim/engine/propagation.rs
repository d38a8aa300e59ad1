use crate::{Point, Vector};

/// Defines how muons move between recorded steps.
pub trait PropagationModel {
    /// Advance a muon position along its direction by one step.
    /// Returns the new position.
    fn advance(&self, position: Point, direction: Vector, step: f64) -> Point;
}

/// Straight-line stepping: position += direction * step.
#[derive(Debug, Clone, Copy, Default)]
pub struct StraightLine;

impl PropagationModel for StraightLine {
    fn advance(&self, position: Point, direction: Vector, step: f64) -> Point {
        position + direction * step
    }
}
