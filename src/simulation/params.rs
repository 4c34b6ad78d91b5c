//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings:
//! - gravitational constant `g` and pair-skip threshold `epsilon`,
//! - nominal step `dt` and the initial `speed` multiplier,
//! - trail buffer capacity and sample interval

use crate::error::{Result, SimError};

/// Newtonian gravitational constant, m^3 kg^-1 s^-2
pub const G: f64 = 6.674e-11;

/// One simulated day
pub const DAY_SECONDS: f64 = 86_400.0;

pub const DEFAULT_EPSILON: f64 = 1.0;
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;
pub const DEFAULT_TRAIL_INTERVAL: u64 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64,                // gravitational constant
    pub dt: f64,               // nominal step, seconds
    pub speed: f64,            // initial speed multiplier
    pub epsilon: f64,          // pairs closer than this are skipped, meters
    pub trail_capacity: usize, // samples kept per body
    pub trail_interval: u64,   // sample every n-th tick
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: G,
            dt: DAY_SECONDS,
            speed: 1.0,
            epsilon: DEFAULT_EPSILON,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            trail_interval: DEFAULT_TRAIL_INTERVAL,
        }
    }
}

impl Parameters {
    /// Reject anything that would make a tick meaningless. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if !(self.g > 0.0) || !self.g.is_finite() {
            return Err(SimError::InvalidGravitationalConstant(self.g));
        }
        if !(self.dt > 0.0) || !self.dt.is_finite() {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        validate_speed(self.speed)?;
        if !(self.epsilon >= 0.0) || !self.epsilon.is_finite() {
            return Err(SimError::InvalidEpsilon(self.epsilon));
        }
        if self.trail_capacity == 0 {
            return Err(SimError::ZeroTrailCapacity);
        }
        if self.trail_interval == 0 {
            return Err(SimError::ZeroTrailInterval);
        }
        Ok(())
    }
}

pub(crate) fn validate_speed(speed: f64) -> Result<()> {
    if speed > 0.0 && speed.is_finite() {
        Ok(())
    } else {
        Err(SimError::InvalidSpeed(speed))
    }
}
