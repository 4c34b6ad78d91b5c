pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{Result, SimError};

pub use simulation::states::{Body, BodySpec, NVec3};
pub use simulation::params::{Parameters, DAY_SECONDS, G};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::{integrate_all, semi_implicit_euler};
pub use simulation::history::OrbitPathHistory;
pub use simulation::controller::SimulationController;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig, ViewConfig};
pub use configuration::presets::{solar_system, sun_earth};

pub use visualization::orbsim_vis3d::run_3d;

pub use benchmark::benchmark::bench_tick;
