use crate::Point;
use crate::Vector;
use anyhow::Result;

/// Orientation values within this distance of zero count as collinear.
const ORIENTATION_EPS: f64 = 1e-9;

/// Triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle(pub Point, pub Point, pub Point);

impl Triangle {
    /// Unit normal following the right-hand rule over (p0, p1, p2).
    pub fn normal(&self) -> Result<Vector> {
        Vector::normal(self.0, self.1, self.2)
    }
}

/// Drops one coordinate of a point.
///
/// `axis` is the dropped coordinate (0 = x, 1 = y, 2 = z).
fn project(pt: Point, axis: usize) -> (f64, f64) {
    match axis {
        0 => (pt.y, pt.z),
        1 => (pt.x, pt.z),
        _ => (pt.x, pt.y),
    }
}

/// Signed doubled area of the 2-D triangle (p1, p2, p3).
fn orientation(p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> f64 {
    (p1.0 - p3.0) * (p2.1 - p3.1) - (p2.0 - p3.0) * (p1.1 - p3.1)
}

/// Tests if point `ptest` lying in the plane of `tri` is inside the triangle.
///
/// Uses the 2-D sign technique on the projection that drops the dominant
/// axis of `normal`. The point is inside unless the three edge orientations
/// contain both a negative and a positive value, so points on edges and
/// vertices are inside.
pub fn is_point_inside_triangle(ptest: Point, tri: &Triangle, normal: &Vector) -> bool {
    let axis = normal.dominant_axis();
    let p = project(ptest, axis);
    let v1 = project(tri.0, axis);
    let v2 = project(tri.1, axis);
    let v3 = project(tri.2, axis);

    let d1 = orientation(p, v1, v2);
    let d2 = orientation(p, v2, v3);
    let d3 = orientation(p, v3, v1);

    let has_neg = d1 < -ORIENTATION_EPS || d2 < -ORIENTATION_EPS || d3 < -ORIENTATION_EPS;
    let has_pos = d1 > ORIENTATION_EPS || d2 > ORIENTATION_EPS || d3 > ORIENTATION_EPS;

    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle(
            Point::new(0., 0., 0.),
            Point::new(2., 0., 0.),
            Point::new(0., 2., 0.),
        )
    }

    #[test]
    fn test_point_inside() {
        let tri = xy_triangle();
        let vn = tri.normal().unwrap();
        assert!(is_point_inside_triangle(Point::new(0.5, 0.5, 0.), &tri, &vn));
    }

    #[test]
    fn test_point_outside() {
        let tri = xy_triangle();
        let vn = tri.normal().unwrap();
        assert!(!is_point_inside_triangle(Point::new(1.5, 1.5, 0.), &tri, &vn));
        assert!(!is_point_inside_triangle(Point::new(-0.1, 0.5, 0.), &tri, &vn));
    }

    #[test]
    fn test_edges_and_vertices_are_inside() {
        let tri = xy_triangle();
        let vn = tri.normal().unwrap();
        assert!(is_point_inside_triangle(Point::new(1., 0., 0.), &tri, &vn));
        assert!(is_point_inside_triangle(Point::new(1., 1., 0.), &tri, &vn));
        assert!(is_point_inside_triangle(Point::new(0., 2., 0.), &tri, &vn));
    }

    #[test]
    fn test_vertical_triangle() {
        // Triangle in the xz plane would collapse under an xy projection
        let tri = Triangle(
            Point::new(0., 0., 0.),
            Point::new(2., 0., 0.),
            Point::new(1., 0., 2.),
        );
        let vn = tri.normal().unwrap();
        assert!(is_point_inside_triangle(Point::new(1., 0., 1.), &tri, &vn));
        assert!(!is_point_inside_triangle(Point::new(1., 0., 2.5), &tri, &vn));
    }
}
