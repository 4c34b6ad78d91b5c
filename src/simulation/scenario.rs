//! Build a fully-initialized simulation from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - a validated `SimulationController` with its bodies at t = 0
//! - the view scaling the presentation layer should use

use log::info;

use crate::configuration::config::{ScenarioConfig, ViewConfig};
use crate::error::Result;
use crate::simulation::controller::SimulationController;
use crate::simulation::params::Parameters;
use crate::simulation::states::BodySpec;

/// Runtime bundle constructed from a [`ScenarioConfig`]
pub struct Scenario {
    pub controller: SimulationController,
    pub view: ViewConfig,
}

impl Scenario {
    pub fn build(cfg: ScenarioConfig) -> Result<Self> {
        // Presentation scaling is checked up front so the viewer never sees a bad range
        cfg.view.validate()?;

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters::from(&cfg.parameters);

        // Bodies: map `BodyConfig` -> `BodySpec`, validated by the controller
        let specs: Vec<BodySpec> = cfg.bodies.iter().map(BodySpec::from).collect();

        let controller = SimulationController::from_specs(specs, parameters)?;

        info!(
            "scenario built: {}",
            controller
                .bodies()
                .iter()
                .map(|b| b.name().unwrap_or("?"))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            controller,
            view: cfg.view,
        })
    }
}
