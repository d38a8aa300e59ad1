//! Point-in-solid containment by volume decomposition.
//!
//! A solid spanned by an apex and a planar quadrilateral base is split into
//! tetrahedra around the test point: four apex tetrahedra over the base edges
//! and two tetrahedra over the base triangles. For a point inside the solid
//! these six pieces partition it exactly, so their volumes sum to the solid
//! volume. Any point outside produces a strictly larger sum.

use crate::Point;
use crate::geom::VOLUME_TOLERANCE;
use crate::geom::ray::Ray;
use crate::geom::solid::Solid;
use crate::geom::tetrahedron::tetrahedron_volume;
use crate::geom::triangles::Triangle;

/// Solid with an apex over an ordered quadrilateral base.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadPyramid {
    apex: Point,
    base: [Point; 4],
    volume: f64,
}

impl QuadPyramid {
    /// Creates the solid. Base corners must be given in perimeter order.
    pub fn new(apex: Point, base: [Point; 4]) -> Self {
        let volume = tetrahedron_volume(apex, base[0], base[1], base[2])
            + tetrahedron_volume(apex, base[2], base[3], base[0]);
        Self { apex, base, volume }
    }

    pub fn apex(&self) -> Point {
        self.apex
    }

    pub fn base(&self) -> &[Point; 4] {
        &self.base
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// The two triangles tiling the base.
    pub fn base_triangles(&self) -> [Triangle; 2] {
        let b = &self.base;
        [Triangle(b[0], b[1], b[2]), Triangle(b[2], b[3], b[0])]
    }

    /// The four lateral faces `(base[i], base[i + 1], apex)`.
    pub fn lateral_faces(&self) -> [Triangle; 4] {
        let b = &self.base;
        [
            Triangle(b[0], b[1], self.apex),
            Triangle(b[1], b[2], self.apex),
            Triangle(b[2], b[3], self.apex),
            Triangle(b[3], b[0], self.apex),
        ]
    }

    /// Sum of the six tetrahedra the point cuts the solid into.
    fn decomposed_volume(&self, ptest: Point) -> f64 {
        let mut total = 0.;
        for i in 0..4 {
            total += tetrahedron_volume(ptest, self.base[i], self.base[(i + 1) % 4], self.apex);
        }
        for tri in self.base_triangles() {
            total += tetrahedron_volume(ptest, tri.0, tri.1, tri.2);
        }
        total
    }
}

impl Solid for QuadPyramid {
    /// Boundary points are inside.
    fn contains(&self, pt: Point) -> bool {
        (self.decomposed_volume(pt) - self.volume).abs() <= VOLUME_TOLERANCE
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        self.lateral_faces()
            .iter()
            .chain(self.base_triangles().iter())
            .filter_map(|face| ray.intersect_triangle(face))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;

    fn unit_pyramid() -> QuadPyramid {
        QuadPyramid::new(
            Point::new(0.5, 0.5, 1.0),
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_volume() {
        let solid = unit_pyramid();
        assert!((solid.volume() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_inside() {
        let solid = unit_pyramid();
        assert!(solid.contains(Point::new(0.5, 0.5, 0.5)));
        assert!(solid.contains(Point::new(0.2, 0.2, 0.1)));
    }

    #[test]
    fn test_point_outside() {
        let solid = unit_pyramid();
        assert!(!solid.contains(Point::new(0.5, 0.5, 1.1)));
        assert!(!solid.contains(Point::new(0.1, 0.1, 0.5)));
        assert!(!solid.contains(Point::new(0.5, 0.5, -0.01)));
        assert!(!solid.contains(Point::new(3.0, 3.0, 3.0)));
    }

    #[test]
    fn test_boundary_is_inside() {
        let solid = unit_pyramid();
        // Apex, base corner, base centre and a point on a lateral face
        assert!(solid.contains(Point::new(0.5, 0.5, 1.0)));
        assert!(solid.contains(Point::new(1.0, 1.0, 0.0)));
        assert!(solid.contains(Point::new(0.5, 0.5, 0.0)));
        assert!(solid.contains(Point::new(0.5, 0.25, 0.5)));
    }

    #[test]
    fn test_oblique_apex() {
        // Apex not above the base centre
        let solid = QuadPyramid::new(
            Point::new(3.0, 0.0, 2.0),
            [
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 1.0, 0.0),
                Point::new(0.0, 1.0, 0.0),
            ],
        );
        assert!((solid.volume() - 2.0 / 3.0).abs() < 1e-12);
        assert!(solid.contains(Point::new(2.0, 0.2, 1.3)));
        assert!(!solid.contains(Point::new(0.5, 0.5, 1.0)));
    }

    #[test]
    fn test_crossings_vertical_ray() {
        let solid = unit_pyramid();
        let ray = Ray::new(Point::new(0.5, 0.3, 2.0), Vector::new(0.0, 0.0, -1.0)).unwrap();
        let ts = solid.crossings(&ray);
        let len = solid.path_length(ray.origin, ray.direction);
        // Enters through the lateral face y = 0 side at z = 0.6, leaves at z = 0
        assert!(ts.len() >= 2);
        assert!((len - 0.6).abs() < 1e-9);
    }
}
