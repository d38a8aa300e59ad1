use crate::geom::ray::{Ray, sphere_roots};
use crate::geom::solid::Solid;
use crate::{Point, Vector};

/// Spherical void embedded in the host solid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cavity {
    pub center: Point,
    pub radius: f64,
}

impl Cavity {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Checks whether the forward half-line `origin + t * direction, t >= 0`
    /// passes through the sphere.
    ///
    /// This is a hit test along a ray, not point membership: a ray starting
    /// inside the sphere always hits. A zero-length direction never hits.
    pub fn intersects_ray(&self, origin: Point, direction: Vector) -> bool {
        match sphere_roots(origin, direction, self.center, self.radius) {
            Some((t1, t2)) => !(t1 < 0. && t2 < 0.),
            None => false,
        }
    }
}

impl Solid for Cavity {
    fn contains(&self, pt: Point) -> bool {
        let d = pt - self.center;
        d.dot(&d) <= self.radius * self.radius
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        match ray.intersect_sphere(self.center, self.radius) {
            Some((t1, t2)) => [t1, t2].into_iter().filter(|t| *t >= 0.).collect(),
            None => Vec::new(),
        }
    }
}
