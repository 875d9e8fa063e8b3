//! Fixed-step explicit integrator
//!
//! One update rule for every body, with constant acceleration over the step:
//! x_n+1 = x_n + v_n dt + a_n dt^2 / 2
//! v_n+1 = v_n + a_n dt
//!
//! No sub-stepping and no step-size control, so close fast encounters are
//! integrated coarsely.

use super::states::{Body, NVec2};

/// Position `body` would reach after one step of `dt` under `a`
/// Pure: used for the collision look-ahead without touching the body
pub fn predict_position(body: &Body, a: &NVec2, dt: f64) -> NVec2 {
    body.x + a * (0.5 * dt * dt) + body.v * dt
}

/// Advance one body in place
pub fn advance(body: &mut Body, a: &NVec2, dt: f64) {
    body.x = predict_position(body, a, dt);
    body.v += a * dt;
}

/// Advance every body with its own entry of `accels` (same order as `bodies`)
pub fn drift_kick(bodies: &mut [Body], accels: &[NVec2], dt: f64) {
    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        advance(b, a, dt);
    }
}
