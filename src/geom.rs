pub mod point;
pub mod ray;
pub mod solid;
pub mod tetrahedron;
pub mod triangles;
pub mod vector;

/// Geometric precision
const EPS: f64 = 1e-13;

/// Absolute tolerance of the volume-decomposition containment test.
pub const VOLUME_TOLERANCE: f64 = 1e-5;

/// Rays with |normal . direction| below this value are parallel to a face.
pub const PARALLEL_TOLERANCE: f64 = 1e-6;
