use crate::geom::ray::Ray;
use crate::geom::solid::Solid;
use crate::{Point, Vector};

/// Sloped corridor with a rectangular cross-section.
///
/// The floor is an inclined plane rising from `start` along the corridor
/// axis; the ceiling is parallel to it at distance `height`. In the gallery
/// frame a point is inside when
/// `0 <= along <= length`, `|across| <= width / 2` and `0 <= up <= height`.
#[derive(Debug, Clone, PartialEq)]
pub struct InclinedGallery {
    pub start: Point,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Unit vector along the corridor axis (rising).
    along: Vector,
    /// Horizontal unit vector across the corridor.
    across: Vector,
    /// Unit normal of the floor, pointing into the corridor.
    up: Vector,
}

impl InclinedGallery {
    /// Creates a gallery.
    ///
    /// - `azimuth_deg`: heading of the axis in the horizontal plane, from +x
    ///   towards +y
    /// - `inclination_deg`: slope of the axis above the horizontal
    pub fn new(
        start: Point,
        azimuth_deg: f64,
        inclination_deg: f64,
        length: f64,
        width: f64,
        height: f64,
    ) -> Self {
        let (sin_a, cos_a) = azimuth_deg.to_radians().sin_cos();
        let (sin_i, cos_i) = inclination_deg.to_radians().sin_cos();
        let along = Vector::new(cos_i * cos_a, cos_i * sin_a, sin_i);
        let across = Vector::new(-sin_a, cos_a, 0.);
        let up = along.cross(&across);
        Self {
            start,
            length,
            width,
            height,
            along,
            across,
            up,
        }
    }

    /// Coordinates of a point in the gallery frame `(along, across, up)`.
    fn to_local(&self, pt: Point) -> Point {
        let d = pt - self.start;
        Point::new(d.dot(&self.along), d.dot(&self.across), d.dot(&self.up))
    }

    fn local_bounds(&self) -> (Point, Point) {
        (
            Point::new(0., -self.width / 2., 0.),
            Point::new(self.length, self.width / 2., self.height),
        )
    }
}

impl Solid for InclinedGallery {
    fn contains(&self, pt: Point) -> bool {
        let local = self.to_local(pt);
        let (min, max) = self.local_bounds();
        local.x >= min.x
            && local.x <= max.x
            && local.y >= min.y
            && local.y <= max.y
            && local.z >= min.z
            && local.z <= max.z
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        // The frame is orthonormal, so ray parameters carry over unchanged
        let local_ray = Ray {
            origin: self.to_local(ray.origin),
            direction: Vector::new(
                ray.direction.dot(&self.along),
                ray.direction.dot(&self.across),
                ray.direction.dot(&self.up),
            ),
        };
        let (min, max) = self.local_bounds();
        match local_ray.intersect_aabb(min, max) {
            Some((t_enter, t_exit)) => [t_enter, t_exit]
                .into_iter()
                .filter(|t| *t >= 0.)
                .collect(),
            None => Vec::new(),
        }
    }
}
