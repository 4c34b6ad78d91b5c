//! Built-in scenarios
//!
//! Mean orbital distance and mean orbital speed per planet, placed on the +X
//! axis moving along +Y, then tilted by the orbital inclination. The Sun is
//! held fixed at the origin.

use super::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};

// name, mass (kg), radius (km), distance (m), speed (m/s), inclination (deg), rotation period (s)
const PLANETS: [(&str, f64, f64, f64, f64, f64, f64); 8] = [
    ("Mercury", 3.301e23, 2_439.7, 5.791e10, 47_360.0, 7.00, 5_067_014.0),
    ("Venus", 4.867e24, 6_051.8, 1.082e11, 35_020.0, 3.39, -20_996_755.0),
    ("Earth", 5.972e24, 6_371.0, 1.496e11, 29_780.0, 0.00, 86_164.0),
    ("Mars", 6.417e23, 3_389.5, 2.279e11, 24_070.0, 1.85, 88_643.0),
    ("Jupiter", 1.898e27, 69_911.0, 7.785e11, 13_070.0, 1.30, 35_730.0),
    ("Saturn", 5.683e26, 58_232.0, 1.434e12, 9_680.0, 2.49, 38_362.0),
    ("Uranus", 8.681e25, 25_362.0, 2.871e12, 6_800.0, 0.77, -62_064.0),
    ("Neptune", 1.024e26, 24_622.0, 4.495e12, 5_430.0, 1.77, 57_996.0),
];

/// Sun plus the eight planets
pub fn solar_system() -> ScenarioConfig {
    let mut bodies = vec![BodyConfig {
        name: Some("Sun".to_string()),
        mass: 1.989e30,
        radius: 696_340.0,
        position: [0.0; 3],
        velocity: [0.0; 3],
        inclination: 0.0,
        rotation_period: 2_192_832.0,
        fixed: true,
    }];

    bodies.extend(PLANETS.iter().map(|&(name, mass, radius, distance, speed, inclination, rotation_period)| BodyConfig {
        name: Some(name.to_string()),
        mass,
        radius,
        position: [distance, 0.0, 0.0],
        velocity: [0.0, speed, 0.0],
        inclination,
        rotation_period,
        fixed: false,
    }));

    ScenarioConfig {
        parameters: ParametersConfig::default(),
        view: ViewConfig::default(),
        bodies,
    }
}

/// The Sun and the Earth only
pub fn sun_earth() -> ScenarioConfig {
    let mut cfg = solar_system();
    cfg.bodies.retain(|b| matches!(b.name.as_deref(), Some("Sun") | Some("Earth")));
    cfg
}
