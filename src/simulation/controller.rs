//! The simulation controller: owns the bodies, their trails, the speed
//! multiplier and the pause flag, and drives one tick at a time.

use log::{debug, info, trace};

use crate::error::{Result, SimError};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::history::OrbitPathHistory;
use crate::simulation::integrator::integrate_all;
use crate::simulation::params::{validate_speed, Parameters};
use crate::simulation::states::{Body, BodySpec, NVec3};

pub struct SimulationController {
    bodies: Vec<Body>,
    paths: Vec<OrbitPathHistory>,
    forces: AccelSet,
    parameters: Parameters,
    accels: Vec<NVec3>, // scratch, one slot per body
    speed: f64,
    paused: bool,
    tick_count: u64,
    elapsed: f64, // simulated seconds
}

impl SimulationController {
    /// Build a controller with Newtonian gravity as its only force term
    pub fn new(bodies: Vec<Body>, parameters: Parameters) -> Result<Self> {
        if bodies.is_empty() {
            return Err(SimError::NoBodies);
        }
        parameters.validate()?;

        // The diagnostics below assume exactly this force law
        let forces = AccelSet::new().with(NewtonianGravity::new(parameters.g, parameters.epsilon));

        let paths = bodies
            .iter()
            .map(|_| OrbitPathHistory::new(parameters.trail_capacity, parameters.trail_interval))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "controller: {} bodies ({} fixed), dt = {} s, speed = {}",
            bodies.len(),
            bodies.iter().filter(|b| b.fixed).count(),
            parameters.dt,
            parameters.speed,
        );

        Ok(Self {
            accels: vec![NVec3::zeros(); bodies.len()],
            speed: parameters.speed,
            bodies,
            paths,
            forces,
            parameters,
            paused: false,
            tick_count: 0,
            elapsed: 0.0,
        })
    }

    /// Build from initial-condition records, validating each one
    pub fn from_specs(specs: Vec<BodySpec>, parameters: Parameters) -> Result<Self> {
        let bodies = specs.into_iter().map(Body::new).collect::<Result<Vec<_>>>()?;
        Self::new(bodies, parameters)
    }

    /// Advance the simulation by one step, unless paused
    ///
    /// Accelerations for the whole set are computed from the positions at the
    /// start of the tick before any body is moved.
    pub fn tick(&mut self) {
        if self.paused {
            return;
        }

        // Force phase: bodies borrowed immutably
        self.forces.accumulate_accels(&self.bodies, &mut self.accels);

        // Integration phase
        integrate_all(&mut self.bodies, &self.accels, self.parameters.dt, self.speed);

        // Trail phase
        for (b, path) in self.bodies.iter().zip(self.paths.iter_mut()) {
            path.record(b.position, self.tick_count);
        }

        self.tick_count += 1;
        self.elapsed += self.parameters.dt * self.speed;
        trace!("tick {} -> t = {:.0} s", self.tick_count, self.elapsed);
    }

    /// Run `n` ticks back to back
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Change the speed multiplier for subsequent ticks
    pub fn set_speed(&mut self, value: f64) -> Result<()> {
        validate_speed(value)?;
        debug!("speed {} -> {}", self.speed, value);
        self.speed = value;
        Ok(())
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.paused {
            debug!("{}", if paused { "paused" } else { "resumed" });
        }
        self.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Number of ticks actually advanced (paused calls do not count)
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Simulated seconds elapsed since construction
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Index of the first body carrying `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name() == Some(name))
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.index_of(name).map(|i| &self.bodies[i])
    }

    pub fn path(&self, index: usize) -> Option<&OrbitPathHistory> {
        self.paths.get(index)
    }

    pub fn paths(&self) -> &[OrbitPathHistory] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    // =====================================================================
    // Diagnostics
    // =====================================================================

    pub fn total_momentum(&self) -> NVec3 {
        self.bodies.iter().map(Body::momentum).fold(NVec3::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Pairwise -G m_i m_j / r, honouring the same epsilon skip as the force
    pub fn potential_energy(&self) -> f64 {
        let mut u = 0.0;
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                let r = (bi.position - bj.position).norm();
                if r > self.parameters.epsilon {
                    u -= self.parameters.g * bi.mass * bj.mass / r;
                }
            }
        }
        u
    }

    pub fn total_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    pub fn center_of_mass(&self) -> NVec3 {
        let total: f64 = self.bodies.iter().map(|b| b.mass).sum();
        let weighted = self
            .bodies
            .iter()
            .fold(NVec3::zeros(), |acc, b| acc + b.mass * b.position);
        weighted / total
    }
}
