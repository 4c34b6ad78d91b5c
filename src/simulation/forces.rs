//! Force / acceleration contributors for the body set
//!
//! `AccelSet` is the force accumulator: it zeroes a per-body buffer and lets
//! every registered [`Acceleration`] term add into it. Newtonian gravity is the
//! only term the simulation ships with.

use std::sync::atomic::{AtomicBool, Ordering};

use log::{trace, warn};

use crate::simulation::states::{Body, NVec3};

/// Collection of acceleration terms
/// Their contributions are summed into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new(),
        }
    }

    /// Add an acceleration term
    pub fn with(mut self, term: impl Acceleration + Send + Sync + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations for all `bodies`
    /// - `out[i]` is overwritten with the sum of contributions from all terms
    /// - `bodies` is only read, so every term sees the same positions
    pub fn accumulate_accels(&self, bodies: &[Body], out: &mut [NVec3]) {
        debug_assert_eq!(bodies.len(), out.len());

        for a in out.iter_mut() {
            *a = NVec3::zeros();
        }
        for term in &self.terms {
            term.acceleration(bodies, out);
        }
    }
}

/// An acceleration source. Implementations add their contribution into
/// `out[i]` for each body and must not touch any other state.
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]);
}

/// Direct-sum Newtonian gravity
///
/// Pairs closer than `epsilon` are dropped instead of softened: the force is
/// simply not applied for that step. The first such skip is reported with
/// `warn!`, later ones only at `trace!`.
#[derive(Debug)]
pub struct NewtonianGravity {
    pub g: f64,
    pub epsilon: f64,
    warned: AtomicBool,
}

impl NewtonianGravity {
    pub fn new(g: f64, epsilon: f64) -> Self {
        Self {
            g,
            epsilon,
            warned: AtomicBool::new(false),
        }
    }

    /// Whether any pair has been skipped by the epsilon guard so far
    pub fn has_skipped(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [NVec3]) {
        let mut skipped = 0usize;
        let mut closest = f64::INFINITY;

        for (i, target) in bodies.iter().enumerate() {
            // Fixed bodies are never integrated, leave their slot at zero
            if target.fixed {
                continue;
            }

            for (j, source) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // d points from the source to the target, so -d is the pull
                let d = target.position - source.position;
                let r = d.norm();

                if r <= self.epsilon {
                    skipped += 1;
                    closest = closest.min(r);
                    continue;
                }

                // a_i += -G m_j d / r^3
                let coef = -self.g * source.mass / (r * r * r);
                out[i] += coef * d;
            }
        }

        if skipped > 0 {
            if self.warned.swap(true, Ordering::Relaxed) {
                trace!("skipped {skipped} pair term(s) within epsilon {} (closest {closest:e} m)", self.epsilon);
            } else {
                warn!(
                    "skipped {skipped} pair term(s) within epsilon {} (closest {closest:e} m); further skips are logged at trace",
                    self.epsilon,
                );
            }
        }
    }
}
