//! Fixed-step time integration
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked first and the
//! *updated* velocity drifts the position, both scaled by `dt * speed`.

use super::states::{Body, NVec3};

/// Advance a single body by one step
///
/// v_n+1 = v_n + a_n * dt * speed
/// x_n+1 = x_n + v_n+1 * dt * speed
///
/// A fixed body is returned untouched.
pub fn semi_implicit_euler(body: &mut Body, accel: &NVec3, dt: f64, speed: f64) {
    if body.fixed {
        return;
    }

    let h = dt * speed;
    body.velocity += *accel * h;
    body.position += body.velocity * h;
}

/// Apply precomputed accelerations to every body, `accels[i]` to `bodies[i]`
pub fn integrate_all(bodies: &mut [Body], accels: &[NVec3], dt: f64, speed: f64) {
    debug_assert_eq!(bodies.len(), accels.len());

    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        semi_implicit_euler(b, a, dt, speed);
    }
}
