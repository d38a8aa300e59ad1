//! Muon transport simulation.
//!
//! [`simulation::Simulation`] ties the pieces together: it samples an
//! ensemble with [`ensemble::EnsembleGenerator`], runs each muon through
//! [`transport::Transport`] on a worker pool and collects the tracks and
//! detector logs.

pub mod config;
pub mod detector;
pub mod engine;
pub mod ensemble;
pub mod muon;
pub mod simulation;
pub mod summary;
pub mod transport;
