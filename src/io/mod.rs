//! File I/O for settings and simulation results.

pub mod csv;
pub mod settings;

pub use csv::{write_detections, write_trajectories};
pub use settings::{read_settings, settings_from_str};
