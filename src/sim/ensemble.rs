use rand::Rng;

use crate::geom::solid::Pyramid;
use crate::geom::triangles::Triangle;
use crate::sim::muon::Muon;
use crate::{Point, Vector};

/// Samples initial muon states on the lateral faces of a pyramid.
#[derive(Debug, Clone)]
pub struct EnsembleGenerator {
    faces: [Triangle; 4],
    aim: Point,
    energy_range: [f64; 2],
}

impl EnsembleGenerator {
    pub fn new(pyramid: &Pyramid, energy_range: [f64; 2]) -> Self {
        Self {
            faces: pyramid.lateral_faces(),
            aim: pyramid.center(),
            energy_range,
        }
    }

    /// Uniform point on a uniformly chosen lateral face.
    pub fn sample_entry<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let face = &self.faces[rng.gen_range(0..self.faces.len())];
        let mut r1: f64 = rng.r#gen();
        let mut r2: f64 = rng.r#gen();
        if r1 + r2 > 1. {
            r1 = 1. - r1;
            r2 = 1. - r2;
        }
        Point::from_barycentric(face.0, face.1, face.2, r1, r2)
    }

    /// Direction towards the aim point with a uniform `U(-1, 1)` jitter on
    /// each component.
    pub fn sample_direction<R: Rng + ?Sized>(&self, entry: Point, rng: &mut R) -> Vector {
        let base = self.aim - entry;
        loop {
            let jitter = Vector::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            );
            if let Ok(dir) = (base + jitter).normalize() {
                return dir;
            }
        }
    }

    pub fn sample_energy<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let [lo, hi] = self.energy_range;
        if hi > lo { rng.gen_range(lo..hi) } else { lo }
    }

    /// Generates `n` muons with ids `0..n` in generation order.
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Muon> {
        (0..n)
            .map(|id| {
                let entry = self.sample_entry(rng);
                let direction = self.sample_direction(entry, rng);
                let energy = self.sample_energy(rng);
                Muon::new(id, entry, direction, energy)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::solid::Solid;
    use crate::geom::tetrahedron::tetrahedron_volume;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator() -> (Pyramid, EnsembleGenerator) {
        let pyramid = Pyramid::new(200., 140.);
        let generator = EnsembleGenerator::new(&pyramid, [1., 10.]);
        (pyramid, generator)
    }

    #[test]
    fn test_ids_and_energies() {
        let (_, generator) = generator();
        let mut rng = StdRng::seed_from_u64(21);
        let muons = generator.generate(1000, &mut rng);
        assert_eq!(muons.len(), 1000);
        for (i, m) in muons.iter().enumerate() {
            assert_eq!(m.id, i);
            assert!(m.energy >= 1. && m.energy < 10.);
            assert!((m.direction.length() - 1.).abs() < 1e-9);
        }
    }

    #[test]
    fn test_entries_lie_on_lateral_faces() {
        let (pyramid, generator) = generator();
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..500 {
            let p = generator.sample_entry(&mut rng);
            let on_face = pyramid.lateral_faces().iter().any(|f| {
                // Coplanar points span no volume with the face
                tetrahedron_volume(f.0, f.1, f.2, p) < 1e-6
                    && p.z >= -1e-9
                    && p.z <= pyramid.height + 1e-9
            });
            assert!(on_face, "{p} is not on a lateral face");
            assert!(pyramid.contains(p));
        }
    }

    #[test]
    fn test_directions_point_inwards() {
        let (pyramid, generator) = generator();
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let entry = generator.sample_entry(&mut rng);
            let dir = generator.sample_direction(entry, &mut rng);
            let to_center = pyramid.center() - entry;
            // The jitter is small compared to the distance to the centre
            if to_center.length() > 10. {
                assert!(dir.dot(&to_center) > 0.);
            }
        }
    }

    #[test]
    fn test_same_seed_same_ensemble() {
        let (_, generator) = generator();
        let a = generator.generate(50, &mut StdRng::seed_from_u64(5));
        let b = generator.generate(50, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
