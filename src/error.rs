//! Error types for the simulation core
//!
//! Every variant is a configuration error: something rejected when a body,
//! parameter set or controller is built, or when a setter is called.
//! Steady-state ticking never fails.

use thiserror::Error;

/// Errors raised while constructing or reconfiguring a simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f64 },

    #[error("body `{name}` has a non-finite {field}")]
    NonFiniteState { name: String, field: &'static str },

    #[error("time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("speed multiplier must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("trail capacity must be at least 1")]
    ZeroTrailCapacity,

    #[error("trail sample interval must be at least 1")]
    ZeroTrailInterval,

    #[error("a simulation needs at least one body")]
    NoBodies,

    #[error("invalid view setting: {0}")]
    InvalidView(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
