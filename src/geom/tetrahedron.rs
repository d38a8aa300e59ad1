use crate::Point;

/// Calculates tetrahedron volume from the scalar triple product.
///
/// The result is non-negative for any vertex order and zero for
/// coplanar points.
pub fn tetrahedron_volume(pt0: Point, pt1: Point, pt2: Point, pt3: Point) -> f64 {
    let a = pt1 - pt0;
    let b = pt2 - pt0;
    let c = pt3 - pt0;
    a.cross(&b).dot(&c).abs() / 6.
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_corner_tetrahedron() {
        let vol = tetrahedron_volume(
            Point::new(0., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(0., 1., 0.),
            Point::new(0., 0., 1.),
        );
        assert!((vol - 1. / 6.).abs() < 1e-12);
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let p0 = Point::new(0., 0., 0.);
        let p1 = Point::new(3., 0., 0.);
        let p2 = Point::new(0., 2., 0.);
        let p3 = Point::new(1., 1., 5.);
        let v1 = tetrahedron_volume(p0, p1, p2, p3);
        let v2 = tetrahedron_volume(p3, p2, p1, p0);
        assert!((v1 - v2).abs() < 1e-12);
        assert!((v1 - 5.).abs() < 1e-12);
    }

    #[test]
    fn test_coplanar_points_have_zero_volume() {
        let vol = tetrahedron_volume(
            Point::new(0., 0., 0.),
            Point::new(1., 0., 0.),
            Point::new(0., 1., 0.),
            Point::new(1., 1., 0.),
        );
        assert!(vol.abs() < 1e-15);
    }
}
