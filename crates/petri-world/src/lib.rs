//! Arena world engine.
//!
//! This crate implements the bounded 2-D arena where organisms wander,
//! collide, accumulate encounters, and reproduce.

pub mod organism;
pub mod sink;
pub mod world;

pub use organism::Organism;
pub use sink::{NullSink, RenderSink};
pub use world::World;
