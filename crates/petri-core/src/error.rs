//! Error types for the simulation.
//!
//! The simulation surface itself is infallible: cap-exceeded mating,
//! empty worlds, and position clamping are silent steady-state
//! behavior. Errors exist only around it, for configuration loading
//! and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
