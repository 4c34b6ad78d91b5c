//! Core state types for the simulation.
//!
//! - `BodySpec` is the initial-condition record a body is built from
//! - `Body` is the live physical state the controller advances
//!
//! Positions are meters, velocities meters/second, masses kilograms, all in
//! one inertial frame. Nothing here knows about rendering.

use nalgebra::{Rotation3, Vector3};

use crate::error::{Result, SimError};

pub type NVec3 = Vector3<f64>;

/// Initial conditions for one body, consumed once by [`Body::new`]
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub name: Option<String>,
    pub mass: f64,            // kg
    pub radius: f64,          // km, presentation only
    pub position: NVec3,      // m
    pub velocity: NVec3,      // m/s
    pub inclination: f64,     // degrees, rotation about +X applied once
    pub rotation_period: f64, // s, negative = retrograde spin
    pub fixed: bool,          // force source only, never integrated
}

impl BodySpec {
    /// A free body with no inclination or spin
    pub fn new(mass: f64, radius: f64, position: NVec3, velocity: NVec3) -> Self {
        Self {
            name: None,
            mass,
            radius,
            position,
            velocity,
            inclination: 0.0,
            rotation_period: 0.0,
            fixed: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn inclined(mut self, degrees: f64) -> Self {
        self.inclination = degrees;
        self
    }

    pub fn spinning(mut self, period: f64) -> Self {
        self.rotation_period = period;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }
}

/// One simulated massive body
///
/// Fields are crate-private so that only the integrator can move a body;
/// the presentation layer gets read-only accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) name: Option<String>,
    pub(crate) mass: f64,
    pub(crate) radius: f64,
    pub(crate) position: NVec3,
    pub(crate) velocity: NVec3,
    pub(crate) rotation_period: f64,
    pub(crate) fixed: bool,
}

impl Body {
    /// Validate a spec and build the body.
    ///
    /// The inclination tilts both the initial position and velocity about the
    /// +X axis and is then dropped; it is never reapplied.
    pub fn new(spec: BodySpec) -> Result<Self> {
        let label = spec.name.clone().unwrap_or_else(|| "<unnamed>".to_string());

        if !(spec.mass > 0.0) || !spec.mass.is_finite() {
            return Err(SimError::NonPositiveMass { name: label, mass: spec.mass });
        }
        if !(spec.radius > 0.0) || !spec.radius.is_finite() {
            return Err(SimError::NonPositiveRadius { name: label, radius: spec.radius });
        }
        if !spec.position.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteState { name: label, field: "position" });
        }
        if !spec.velocity.iter().all(|c| c.is_finite()) {
            return Err(SimError::NonFiniteState { name: label, field: "velocity" });
        }
        if !spec.inclination.is_finite() {
            return Err(SimError::NonFiniteState { name: label, field: "inclination" });
        }
        if !spec.rotation_period.is_finite() {
            return Err(SimError::NonFiniteState { name: label, field: "rotation period" });
        }

        let (position, velocity) = if spec.inclination != 0.0 {
            let tilt = Rotation3::from_axis_angle(&NVec3::x_axis(), spec.inclination.to_radians());
            (tilt * spec.position, tilt * spec.velocity)
        } else {
            (spec.position, spec.velocity)
        };

        Ok(Self {
            name: spec.name,
            mass: spec.mass,
            radius: spec.radius,
            position,
            velocity,
            rotation_period: spec.rotation_period,
            fixed: spec.fixed,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Radius in kilometers
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> NVec3 {
        self.position
    }

    pub fn velocity(&self) -> NVec3 {
        self.velocity
    }

    /// Axial rotation period in seconds; the sign carries the spin direction
    pub fn rotation_period(&self) -> f64 {
        self.rotation_period
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    pub fn momentum(&self) -> NVec3 {
        self.mass * self.velocity
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }
}
