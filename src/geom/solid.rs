//! Solids the muons travel through.
//!
//! Every shape implements the [`Solid`] capability: point containment plus
//! the forward boundary crossings of a ray. Path lengths through the solid are
//! derived from those two primitives. [`Shape`] tags the concrete variants so
//! heterogeneous solids can be stored side by side.

use crate::geom::ray::Ray;
use crate::{Point, Vector};

pub mod cavity;
pub mod chamber;
pub mod containment;
pub mod detector_volume;
pub mod gallery;
pub mod pyramid;

pub use cavity::Cavity;
pub use chamber::AxisAlignedChamber;
pub use containment::QuadPyramid;
pub use detector_volume::DetectorVolume;
pub use gallery::InclinedGallery;
pub use pyramid::Pyramid;

pub trait Solid {
    /// Returns true if the point is inside the solid or on its boundary.
    fn contains(&self, pt: Point) -> bool;

    /// Ray parameters `t >= 0` at which the forward half-line crosses the
    /// solid's boundary, in no particular order.
    fn crossings(&self, ray: &Ray) -> Vec<f64>;

    /// Length of the ray between its first and last boundary crossing.
    ///
    /// Returns 0 when fewer than two crossings are found (miss, graze, or a
    /// ray starting inside that only crosses on its way out). A zero-length
    /// direction also gives 0.
    fn path_length(&self, origin: Point, direction: Vector) -> f64 {
        match Ray::new(origin, direction) {
            Some(ray) => span(&self.crossings(&ray)),
            None => 0.,
        }
    }

    /// Length of the straight segment `from -> to` lying inside the solid.
    ///
    /// Exact for convex solids.
    fn segment_length(&self, from: Point, to: Point) -> f64 {
        let Some(ray) = Ray::from_points(from, to) else {
            return 0.;
        };
        let len = from.distance(&to);

        let mut ts: Vec<f64> = self
            .crossings(&ray)
            .into_iter()
            .filter(|t| *t <= len)
            .collect();
        if self.contains(from) {
            ts.push(0.);
        }
        if self.contains(to) {
            ts.push(len);
        }
        span(&ts)
    }
}

/// Distance between the smallest and largest value, 0 for fewer than 2 values.
fn span(ts: &[f64]) -> f64 {
    if ts.len() < 2 {
        return 0.;
    }
    let min = ts.iter().copied().fold(f64::INFINITY, f64::min);
    let max = ts.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    max - min
}

/// Tagged union of all solid variants.
#[derive(Debug, Clone)]
pub enum Shape {
    Pyramid(Pyramid),
    Cavity(Cavity),
    Detector(DetectorVolume),
    Chamber(AxisAlignedChamber),
    Gallery(InclinedGallery),
}

impl Shape {
    fn as_solid(&self) -> &dyn Solid {
        match self {
            Shape::Pyramid(s) => s,
            Shape::Cavity(s) => s,
            Shape::Detector(s) => s,
            Shape::Chamber(s) => s,
            Shape::Gallery(s) => s,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Pyramid(_) => "pyramid",
            Shape::Cavity(_) => "cavity",
            Shape::Detector(_) => "detector",
            Shape::Chamber(_) => "chamber",
            Shape::Gallery(_) => "gallery",
        }
    }
}

impl Solid for Shape {
    fn contains(&self, pt: Point) -> bool {
        self.as_solid().contains(pt)
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        self.as_solid().crossings(ray)
    }
}

impl From<Pyramid> for Shape {
    fn from(s: Pyramid) -> Self {
        Shape::Pyramid(s)
    }
}

impl From<Cavity> for Shape {
    fn from(s: Cavity) -> Self {
        Shape::Cavity(s)
    }
}

impl From<DetectorVolume> for Shape {
    fn from(s: DetectorVolume) -> Self {
        Shape::Detector(s)
    }
}

impl From<AxisAlignedChamber> for Shape {
    fn from(s: AxisAlignedChamber) -> Self {
        Shape::Chamber(s)
    }
}

impl From<InclinedGallery> for Shape {
    fn from(s: InclinedGallery) -> Self {
        Shape::Gallery(s)
    }
}
