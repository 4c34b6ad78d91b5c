//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ViewConfig`]       – presentation-side scaling, never fed back into physics
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   G: 6.674e-11            # gravitational constant
//!   dt: 86400.0             # nominal step, seconds (one day)
//!   speed: 1.0              # initial speed multiplier
//!   epsilon: 1.0            # pairs closer than this (m) are skipped
//!   trail_capacity: 1000    # samples per trail
//!   trail_interval: 5       # sample every n-th tick
//!
//! view:
//!   meters_per_unit: 1.496e10
//!   radius_scale: 5.0e-5
//!   min_radius: 0.15
//!   max_radius: 2.5
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.989e30
//!     radius: 696340.0
//!     fixed: true
//!   - name: Earth
//!     mass: 5.972e24
//!     radius: 6371.0
//!     position: [1.496e11, 0.0, 0.0]
//!     velocity: [0.0, 29780.0, 0.0]
//!     rotation_period: 86164.0
//! ```
//!
//! Every parameter has a default, so `parameters` and `view` may be omitted.

use serde::Deserialize;

use crate::error::{Result, SimError};
use crate::simulation::params::{Parameters, DAY_SECONDS, DEFAULT_EPSILON, DEFAULT_TRAIL_CAPACITY, DEFAULT_TRAIL_INTERVAL, G};
use crate::simulation::states::{BodySpec, NVec3};

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64,                // gravitational constant
    pub dt: f64,               // nominal step, seconds
    pub speed: f64,            // initial speed multiplier
    pub epsilon: f64,          // pair-skip distance, meters
    pub trail_capacity: usize, // samples kept per body
    pub trail_interval: u64,   // sample every n-th tick
}

impl Default for ParametersConfig {
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

impl From<&ParametersConfig> for Parameters {
    fn from(p: &ParametersConfig) -> Self {
        Parameters {
            g: p.g,
            dt: p.dt,
            speed: p.speed,
            epsilon: p.epsilon,
            trail_capacity: p.trail_capacity,
            trail_interval: p.trail_interval,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub mass: f64,   // kg
    pub radius: f64, // km
    #[serde(default)]
    pub position: [f64; 3], // m
    #[serde(default)]
    pub velocity: [f64; 3], // m/s
    #[serde(default)]
    pub inclination: f64, // degrees
    #[serde(default)]
    pub rotation_period: f64, // s, negative = retrograde
    #[serde(default)]
    pub fixed: bool,
}

impl From<&BodyConfig> for BodySpec {
    fn from(bc: &BodyConfig) -> Self {
        BodySpec {
            name: bc.name.clone(),
            mass: bc.mass,
            radius: bc.radius,
            position: NVec3::from(bc.position),
            velocity: NVec3::from(bc.velocity),
            inclination: bc.inclination,
            rotation_period: bc.rotation_period,
            fixed: bc.fixed,
        }
    }
}

/// Presentation-side scaling from physical units to render units
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ViewConfig {
    pub meters_per_unit: f64, // physical meters per render unit
    pub radius_scale: f64,    // render units per km of body radius
    pub min_radius: f64,      // smallest drawn radius, render units
    pub max_radius: f64,      // largest drawn radius, render units
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            meters_per_unit: 1.496e10, // 10 units per AU
            radius_scale: 5.0e-5,
            min_radius: 0.15,
            max_radius: 2.5,
        }
    }
}

impl ViewConfig {
    /// Scales must be positive and finite, and `min_radius <= max_radius`
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("meters_per_unit", self.meters_per_unit),
            ("radius_scale", self.radius_scale),
            ("min_radius", self.min_radius),
            ("max_radius", self.max_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SimError::InvalidView(format!("{field} must be positive and finite, got {value}")));
            }
        }
        if self.min_radius > self.max_radius {
            return Err(SimError::InvalidView(format!(
                "min_radius {} exceeds max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        Ok(())
    }

    /// Physical position (z up) to render space (y up), in render units
    pub fn render_position(&self, p: &NVec3) -> [f32; 3] {
        let s = self.meters_per_unit;
        [(p.x / s) as f32, (p.z / s) as f32, (-p.y / s) as f32]
    }

    /// Body radius in km to a drawn radius, clamped to the configured range
    pub fn render_radius(&self, radius_km: f64) -> f32 {
        (radius_km * self.radius_scale).clamp(self.min_radius, self.max_radius) as f32
    }
}

/// Axial spin angle in radians after `elapsed` simulated seconds
/// A zero period means no spin; a negative one spins the other way.
pub fn spin_angle(rotation_period: f64, elapsed: f64) -> f32 {
    if rotation_period == 0.0 {
        return 0.0;
    }
    let turns = (elapsed / rotation_period).fract();
    (turns * std::f64::consts::TAU) as f32
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    pub fn from_reader<R: std::io::Read>(reader: R) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_reader(reader)
    }
}
