use crate::Point;
use crate::geom::ray::Ray;
use crate::geom::solid::{QuadPyramid, Solid};
use crate::geom::triangles::Triangle;

/// Square-based pyramid standing on the ground plane.
///
/// The base is `[0, L] x [0, L] x {0}` and the apex is `(L/2, L/2, H)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    pub base_length: f64,
    pub height: f64,
    solid: QuadPyramid,
}

impl Pyramid {
    pub fn new(base_length: f64, height: f64) -> Self {
        let l = base_length;
        let apex = Point::new(l / 2., l / 2., height);
        let base = [
            Point::new(0., 0., 0.),
            Point::new(l, 0., 0.),
            Point::new(l, l, 0.),
            Point::new(0., l, 0.),
        ];
        Self {
            base_length,
            height,
            solid: QuadPyramid::new(apex, base),
        }
    }

    pub fn apex(&self) -> Point {
        self.solid.apex()
    }

    pub fn volume(&self) -> f64 {
        self.solid.volume()
    }

    /// Point on the vertical axis at half the height.
    ///
    /// Incoming muons are aimed at this point.
    pub fn center(&self) -> Point {
        Point::new(self.base_length / 2., self.base_length / 2., self.height / 2.)
    }

    /// The four sloped faces, each as `(corner_i, corner_i+1, apex)`.
    pub fn lateral_faces(&self) -> [Triangle; 4] {
        self.solid.lateral_faces()
    }
}

impl Solid for Pyramid {
    fn contains(&self, pt: Point) -> bool {
        self.solid.contains(pt)
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        self.solid.crossings(ray)
    }
}
