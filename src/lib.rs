pub mod geom;
pub mod io;
pub mod sim;

// Prelude
pub use geom::point::Point;
pub use geom::solid::{Shape, Solid};
pub use geom::vector::Vector;
pub use sim::config::Settings;
pub use sim::simulation::{Simulation, SimulationResult};
