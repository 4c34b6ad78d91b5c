use std::fs::File;
use std::path::PathBuf;

use orbsim::configuration::config::spin_angle;
use orbsim::{solar_system, sun_earth, NVec3, Parameters, Scenario, ScenarioConfig, SimError, ViewConfig, DAY_SECONDS};

fn scenario_file(name: &str) -> ScenarioConfig {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(name);
    ScenarioConfig::from_reader(File::open(path).unwrap()).unwrap()
}

// ==================================================================================
// YAML tests
// ==================================================================================

#[test]
fn yaml_fills_in_defaults() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
bodies:
  - name: Star
    mass: 2.0e30
    radius: 700000.0
    fixed: true
  - mass: 1.0e24
    radius: 5000.0
    position: [1.0e11, 0.0, 0.0]
    velocity: [0.0, 3.0e4, 0.0]
"#,
    )
    .unwrap();

    assert_eq!(Parameters::from(&cfg.parameters), Parameters::default());
    assert_eq!(cfg.view, ViewConfig::default());
    assert_eq!(cfg.bodies.len(), 2);
    assert!(cfg.bodies[0].fixed);
    assert_eq!(cfg.bodies[0].position, [0.0; 3]);
    assert_eq!(cfg.bodies[1].name, None);
    assert_eq!(cfg.bodies[1].inclination, 0.0);
}

#[test]
fn yaml_overrides_parameters() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
parameters:
  G: 1.0
  dt: 0.5
  speed: 3.0
  epsilon: 0.1
  trail_capacity: 20
  trail_interval: 2
bodies:
  - mass: 1.0
    radius: 1.0
"#,
    )
    .unwrap();

    let p = Parameters::from(&cfg.parameters);
    assert_eq!(p.g, 1.0);
    assert_eq!(p.dt, 0.5);
    assert_eq!(p.speed, 3.0);
    assert_eq!(p.epsilon, 0.1);
    assert_eq!(p.trail_capacity, 20);
    assert_eq!(p.trail_interval, 2);

    let scenario = Scenario::build(cfg).unwrap();
    assert_eq!(scenario.controller.speed(), 3.0);
    assert_eq!(scenario.controller.path(0).unwrap().capacity(), 20);
}

#[test]
fn yaml_without_mass_is_rejected() {
    let res = ScenarioConfig::from_yaml_str("bodies:\n  - radius: 1.0\n");
    assert!(res.is_err());
}

#[test]
fn invalid_values_fail_at_build_time() {
    let mut cfg = sun_earth();
    cfg.bodies[1].mass = 0.0;
    assert!(matches!(Scenario::build(cfg).err(), Some(SimError::NonPositiveMass { .. })));

    let mut cfg = sun_earth();
    cfg.parameters.dt = -DAY_SECONDS;
    assert!(matches!(Scenario::build(cfg).err(), Some(SimError::InvalidTimeStep(_))));

    let mut cfg = sun_earth();
    cfg.bodies.clear();
    assert!(matches!(Scenario::build(cfg).err(), Some(SimError::NoBodies)));
}

#[test]
fn bad_view_ranges_fail_at_build_time() {
    let cfg = ScenarioConfig::from_yaml_str(
        r#"
view:
  max_radius: 0.1
bodies:
  - mass: 1.0
    radius: 1.0
"#,
    )
    .unwrap();
    assert!(matches!(Scenario::build(cfg).err(), Some(SimError::InvalidView(_))));

    let cases: [fn(&mut ViewConfig); 5] = [
        |v| v.meters_per_unit = 0.0,
        |v| v.meters_per_unit = f64::INFINITY,
        |v| v.radius_scale = -1.0,
        |v| v.min_radius = 0.0,
        |v| v.max_radius = f64::NAN,
    ];
    for tweak in cases {
        let mut cfg = sun_earth();
        tweak(&mut cfg.view);
        let err = Scenario::build(cfg).err();
        assert!(matches!(err, Some(SimError::InvalidView(_))), "{err:?}");
    }

    // Equal bounds are a valid, fixed drawn radius
    let mut cfg = sun_earth();
    cfg.view.min_radius = 1.0;
    cfg.view.max_radius = 1.0;
    let scenario = Scenario::build(cfg).unwrap();
    assert_eq!(scenario.view.render_radius(6_371.0), 1.0);
}

// ==================================================================================
// Preset tests
// ==================================================================================

#[test]
fn solar_system_preset_builds() {
    let scenario = Scenario::build(solar_system()).unwrap();
    let sim = &scenario.controller;

    assert_eq!(sim.len(), 9);
    let sun = sim.body_by_name("Sun").unwrap();
    assert!(sun.is_fixed());
    assert_eq!(sun.position(), NVec3::zeros());
    assert_eq!(sim.bodies().iter().filter(|b| b.is_fixed()).count(), 1);

    // Retrograde spinners carry a negative period
    assert!(sim.body_by_name("Venus").unwrap().rotation_period() < 0.0);
    assert!(sim.body_by_name("Earth").unwrap().rotation_period() > 0.0);

    // Mercury's 7 degree inclination lifts its velocity out of the plane
    assert!(sim.body_by_name("Mercury").unwrap().velocity().z > 0.0);
    assert_eq!(sim.body_by_name("Earth").unwrap().velocity().z, 0.0);
}

#[test]
fn solar_system_runs_a_year() {
    let mut scenario = Scenario::build(solar_system()).unwrap();
    scenario.controller.run(365);

    let earth = scenario.controller.body_by_name("Earth").unwrap();
    let r = earth.position().norm();
    assert!(r > 1.3e11 && r < 1.7e11, "earth at {r:e}");
    assert_eq!(scenario.controller.body(0).unwrap().position(), NVec3::zeros());
    assert_eq!(scenario.controller.path(3).unwrap().len(), 73);
}

#[test]
fn sun_earth_preset_keeps_two_bodies() {
    let cfg = sun_earth();
    let names: Vec<_> = cfg.bodies.iter().filter_map(|b| b.name.as_deref()).collect();
    assert_eq!(names, ["Sun", "Earth"]);
}

#[test]
fn shipped_solar_system_file_matches_preset() {
    assert_eq!(scenario_file("solar_system.yaml"), solar_system());
}

#[test]
fn shipped_scenarios_build() {
    for name in ["solar_system.yaml", "sun_earth.yaml", "binary.yaml"] {
        let scenario = Scenario::build(scenario_file(name));
        assert!(scenario.is_ok(), "{name}: {:?}", scenario.err());
    }
}

// ==================================================================================
// View mapping tests
// ==================================================================================

#[test]
fn view_maps_physical_to_render_space() {
    let view = ViewConfig {
        meters_per_unit: 1.0e10,
        radius_scale: 1.0e-3,
        min_radius: 0.5,
        max_radius: 10.0,
    };

    // z-up physics frame to y-up render frame
    assert_eq!(view.render_position(&NVec3::new(1.0e11, 2.0e10, 3.0e10)), [10.0, 3.0, -2.0]);

    assert_eq!(view.render_radius(6_000.0), 6.0);
    assert_eq!(view.render_radius(10.0), 0.5);
    assert_eq!(view.render_radius(700_000.0), 10.0);
}

#[test]
fn view_mapping_leaves_physics_alone() {
    let mut scenario = Scenario::build(sun_earth()).unwrap();
    let before = scenario.controller.body(1).unwrap().clone();

    let _ = scenario.view.render_position(&before.position());
    let _ = scenario.view.render_radius(before.radius());
    assert_eq!(scenario.controller.body(1).unwrap(), &before);

    scenario.controller.tick();
    assert_ne!(scenario.controller.body(1).unwrap().position(), before.position());
}

#[test]
fn spin_follows_period_sign() {
    assert_eq!(spin_angle(0.0, 1.0e6), 0.0);

    let quarter = spin_angle(400.0, 100.0);
    assert!((quarter - std::f32::consts::FRAC_PI_2).abs() < 1e-6);

    let retro = spin_angle(-400.0, 100.0);
    assert!((retro + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
}
