//! Ray casting infrastructure.
//!
//! This module provides a Ray struct and the ray-geometry intersection tests
//! used by the solids: triangle faces, spheres and axis-aligned slabs.

use crate::geom::PARALLEL_TOLERANCE;
use crate::geom::triangles::{Triangle, is_point_inside_triangle};
use crate::{Point, Vector};

/// A ray defined by an origin point and a unit direction vector.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    pub origin: Point,
    /// Unit direction vector
    pub direction: Vector,
}

impl Ray {
    /// Creates a new ray from origin point and direction vector.
    ///
    /// The direction vector is automatically normalized.
    /// Returns `None` for a zero-length direction.
    pub fn new(origin: Point, direction: Vector) -> Option<Self> {
        let normalized = direction.normalize().ok()?;
        Some(Self {
            origin,
            direction: normalized,
        })
    }

    /// Creates a ray from two points (origin to target).
    pub fn from_points(origin: Point, target: Point) -> Option<Self> {
        Self::new(origin, target - origin)
    }

    /// Returns the point along the ray at parameter t.
    ///
    /// point = origin + t * direction
    pub fn point_at(&self, t: f64) -> Point {
        self.origin + self.direction * t
    }

    /// Calculates the intersection of this ray with a triangle face.
    ///
    /// Returns the ray parameter `t >= 0` of the hit, or `None` if the face is
    /// degenerate, parallel to the ray, behind the origin, or missed.
    pub fn intersect_triangle(&self, tri: &Triangle) -> Option<f64> {
        let normal = tri.normal().ok()?;

        let denom = normal.dot(&self.direction);
        if denom.abs() < PARALLEL_TOLERANCE {
            return None; // Ray parallel to plane
        }

        // Plane through tri.0 with normal n:
        // n . (origin + t * d - p0) = 0  =>  t = n . (p0 - origin) / (n . d)
        let t = normal.dot(&(tri.0 - self.origin)) / denom;
        if t < 0. {
            return None;
        }

        if is_point_inside_triangle(self.point_at(t), tri, &normal) {
            Some(t)
        } else {
            None
        }
    }

    /// Calculates the ray parameters where the ray's line meets a sphere.
    ///
    /// Returns `(t_near, t_far)` (possibly negative) or `None` if the line
    /// misses the sphere.
    pub fn intersect_sphere(&self, center: Point, radius: f64) -> Option<(f64, f64)> {
        sphere_roots(self.origin, self.direction, center, radius)
    }

    /// Slab test against the axis-aligned box `[min, max]`.
    ///
    /// Returns `(t_enter, t_exit)` of the ray's line, or `None` if the
    /// forward half-line does not meet the box. `t_enter` is negative when the
    /// origin is inside the box.
    pub fn intersect_aabb(&self, min: Point, max: Point) -> Option<(f64, f64)> {
        let origin = [self.origin.x, self.origin.y, self.origin.z];
        let dir = [self.direction.dx, self.direction.dy, self.direction.dz];
        let lo = [min.x, min.y, min.z];
        let hi = [max.x, max.y, max.z];

        let mut t_enter = f64::NEG_INFINITY;
        let mut t_exit = f64::INFINITY;

        for axis in 0..3 {
            if dir[axis].abs() < PARALLEL_TOLERANCE {
                // Parallel to this slab: must already be between the planes
                if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                    return None;
                }
                continue;
            }
            let t0 = (lo[axis] - origin[axis]) / dir[axis];
            let t1 = (hi[axis] - origin[axis]) / dir[axis];
            let (t_near, t_far) = if t0 < t1 { (t0, t1) } else { (t1, t0) };
            t_enter = t_enter.max(t_near);
            t_exit = t_exit.min(t_far);
            if t_enter > t_exit {
                return None;
            }
        }

        if t_exit < 0. {
            return None;
        }
        Some((t_enter, t_exit))
    }
}

/// Solves `A t^2 + B t + C = 0` for the line `origin + t * direction` and the
/// sphere `|p - center| = radius`.
///
/// The direction does not need to be normalized. A zero-length direction or a
/// negative discriminant gives `None`.
pub fn sphere_roots(
    origin: Point,
    direction: Vector,
    center: Point,
    radius: f64,
) -> Option<(f64, f64)> {
    let oc = origin - center;
    let a = direction.dot(&direction);
    if a < f64::EPSILON {
        return None;
    }
    let b = 2. * direction.dot(&oc);
    let c = oc.dot(&oc) - radius * radius;

    let discriminant = b * b - 4. * a * c;
    if discriminant < 0. {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t1 = (-b - sqrt_d) / (2. * a);
    let t2 = (-b + sqrt_d) / (2. * a);
    Some((t1, t2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy_triangle() -> Triangle {
        Triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn test_ray_creation() {
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(3.0, 0.0, 0.0));
        assert!(ray.is_some());
        assert!((ray.unwrap().direction.length() - 1.0).abs() < 1e-12);

        // Zero direction should fail
        let ray = Ray::new(Point::new(0.0, 0.0, 0.0), Vector::new(0.0, 0.0, 0.0));
        assert!(ray.is_none());
    }

    #[test]
    fn test_ray_point_at() {
        let ray = Ray::from_points(Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0)).unwrap();
        let p = ray.point_at(5.0);
        assert!(p.is_close(&Point::new(5.0, 0.0, 0.0)));
    }

    #[test]
    fn test_ray_triangle_intersection() {
        let tri = xy_triangle();
        let ray = Ray::new(Point::new(0.5, 0.5, -5.0), Vector::new(0.0, 0.0, 1.0)).unwrap();
        let t = ray.intersect_triangle(&tri).unwrap();
        assert!((t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_ray_behind_origin() {
        let tri = xy_triangle();
        let ray = Ray::new(Point::new(0.5, 0.5, -5.0), Vector::new(0.0, 0.0, -1.0)).unwrap();
        assert!(ray.intersect_triangle(&tri).is_none());
    }

    #[test]
    fn test_ray_parallel_to_triangle() {
        let tri = xy_triangle();
        let ray = Ray::new(Point::new(0.5, 0.5, 1.0), Vector::new(1.0, 0.0, 0.0)).unwrap();
        assert!(ray.intersect_triangle(&tri).is_none());
    }

    #[test]
    fn test_ray_misses_triangle() {
        let tri = xy_triangle();
        let ray = Ray::new(Point::new(1.5, 1.5, -5.0), Vector::new(0.0, 0.0, 1.0)).unwrap();
        assert!(ray.intersect_triangle(&tri).is_none());
    }

    #[test]
    fn test_degenerate_triangle_is_skipped() {
        let tri = Triangle(
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
        );
        let ray = Ray::new(Point::new(1.0, 0.0, -1.0), Vector::new(0.0, 0.0, 1.0)).unwrap();
        assert!(ray.intersect_triangle(&tri).is_none());
    }

    #[test]
    fn test_sphere_roots() {
        let (t1, t2) = sphere_roots(
            Point::new(-10.0, 0.0, 0.0),
            Vector::new(1.0, 0.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            2.0,
        )
        .unwrap();
        assert!((t1 - 8.0).abs() < 1e-12);
        assert!((t2 - 12.0).abs() < 1e-12);

        // Zero-length direction resolves to no intersection
        assert!(
            sphere_roots(
                Point::new(0.0, 0.0, 0.0),
                Vector::new(0.0, 0.0, 0.0),
                Point::new(0.0, 0.0, 0.0),
                1.0
            )
            .is_none()
        );
    }

    #[test]
    fn test_aabb_slab() {
        let min = Point::new(0.0, 0.0, 0.0);
        let max = Point::new(2.0, 2.0, 2.0);

        let ray = Ray::new(Point::new(-1.0, 1.0, 1.0), Vector::new(1.0, 0.0, 0.0)).unwrap();
        let (t0, t1) = ray.intersect_aabb(min, max).unwrap();
        assert!((t0 - 1.0).abs() < 1e-12);
        assert!((t1 - 3.0).abs() < 1e-12);

        // From inside the entry lies behind the origin
        let ray = Ray::new(Point::new(1.0, 1.0, 1.0), Vector::new(0.0, 0.0, 1.0)).unwrap();
        let (t0, t1) = ray.intersect_aabb(min, max).unwrap();
        assert!((t0 + 1.0).abs() < 1e-12);
        assert!((t1 - 1.0).abs() < 1e-12);

        // Parallel and outside
        let ray = Ray::new(Point::new(-1.0, 5.0, 1.0), Vector::new(1.0, 0.0, 0.0)).unwrap();
        assert!(ray.intersect_aabb(min, max).is_none());

        // Pointing away
        let ray = Ray::new(Point::new(-1.0, 1.0, 1.0), Vector::new(-1.0, 0.0, 0.0)).unwrap();
        assert!(ray.intersect_aabb(min, max).is_none());
    }
}
