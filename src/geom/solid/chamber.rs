use crate::Point;
use crate::geom::ray::Ray;
use crate::geom::solid::Solid;

/// Rectangular room aligned with the coordinate axes.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignedChamber {
    pub min: Point,
    pub max: Point,
}

impl AxisAlignedChamber {
    /// Creates a chamber from two opposite corners in any order.
    pub fn new(corner_a: Point, corner_b: Point) -> Self {
        Self {
            min: Point::new(
                corner_a.x.min(corner_b.x),
                corner_a.y.min(corner_b.y),
                corner_a.z.min(corner_b.z),
            ),
            max: Point::new(
                corner_a.x.max(corner_b.x),
                corner_a.y.max(corner_b.y),
                corner_a.z.max(corner_b.z),
            ),
        }
    }

    pub fn volume(&self) -> f64 {
        (self.max.x - self.min.x) * (self.max.y - self.min.y) * (self.max.z - self.min.z)
    }
}

impl Solid for AxisAlignedChamber {
    fn contains(&self, pt: Point) -> bool {
        pt.x >= self.min.x
            && pt.x <= self.max.x
            && pt.y >= self.min.y
            && pt.y <= self.max.y
            && pt.z >= self.min.z
            && pt.z <= self.max.z
    }

    fn crossings(&self, ray: &Ray) -> Vec<f64> {
        match ray.intersect_aabb(self.min, self.max) {
            Some((t_enter, t_exit)) => [t_enter, t_exit]
                .into_iter()
                .filter(|t| *t >= 0.)
                .collect(),
            None => Vec::new(),
        }
    }
}
