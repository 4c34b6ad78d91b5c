use std::time::Instant;

use crate::simulation::controller::SimulationController;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodySpec, NVec3};

/// Helper to build a controller with `n` deterministic bodies around a fixed star
fn make_controller(n: usize) -> SimulationController {
    let mut specs = Vec::with_capacity(n + 1);
    specs.push(BodySpec::new(1.989e30, 696_340.0, NVec3::zeros(), NVec3::zeros()).fixed());

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let position = NVec3::new(
            (i_f * 0.37).sin() * 5.0e11,
            (i_f * 0.13).cos() * 5.0e11,
            (i_f * 0.07).sin() * 5.0e10,
        );
        specs.push(BodySpec::new(1.0e24, 1_000.0, position, NVec3::zeros()));
    }

    // Benchmark bodies are always valid, so construction cannot fail
    match SimulationController::from_specs(specs, Parameters::default()) {
        Ok(controller) => controller,
        Err(e) => unreachable!("benchmark setup rejected: {e}"),
    }
}

/// Time controller ticks for a range of body counts
/// Paste output directly into excel to graph
pub fn bench_tick() {
    println!("N,ms_per_tick");

    for n in [2, 8, 32, 128, 512, 1024] {
        // Small n: average over many ticks to smooth noise
        let steps: u32 = if n <= 128 { 200 } else { 10 };

        let mut controller = make_controller(n);

        // Warm-up
        controller.tick();

        let t0 = Instant::now();
        for _ in 0..steps {
            controller.tick();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
