use crate::Point;
use crate::geom::ray::Ray;
use crate::geom::solid::{QuadPyramid, Solid};

/// Acceptance region of a sensor.
///
/// An oblique pyramid from four arbitrary base corners up (or down) to an
/// apex at the sensor position.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorVolume {
    solid: QuadPyramid,
}

impl DetectorVolume {
    /// `base_corners` must be given in perimeter order.
    pub fn new(position: Point, base_corners: [Point; 4]) -> Self {
        Self {
            solid: QuadPyramid::new(position, base_corners),
        }
    }

    pub fn position(&self) -> Point {
        self.solid.apex()
    }

    pub fn base_corners(&self) -> &[Point; 4] {
        self.solid.base()
    }

    pub fn volume(&self) -> f64 {
        self.solid.volume()
    }
}

impl Solid for DetectorVolume {
    fn contains(&self, pt: Point) -> bool {
        self.solid.contains(pt)
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        self.solid.crossings(ray)
    }
}
