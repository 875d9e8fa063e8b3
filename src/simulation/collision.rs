//! Reflection of bodies off boundaries and off each other.
//!
//! Both responses only turn the velocity: it is mirrored across a line by
//! rotating it through twice its angle to that line. Speeds, masses and
//! positions are left alone, so there is no momentum exchange and no
//! overlap correction.

use super::boundary::Boundary;
use super::geometry::Planar;
use super::integrator::predict_position;
use super::states::{Body, BodyId, NVec2};
use crate::error::{Result, SimError};

/// Mirror `v` across the line running along `axis`
fn mirror(v: &mut NVec2, axis: &NVec2) {
    let angle = axis.angle_between(v);
    v.rotate(-2.0 * angle);
}

/// Reflect `body` off `boundary` if it is crossing the boundary line this step
/// Returns whether the velocity was changed
pub fn reflect_off_boundary(body: &mut Body, boundary: &Boundary, dt: f64) -> bool {
    let origin = boundary.origin();
    let span = boundary.span();
    let radius_vector = boundary.normal() * body.radius;

    // Far edge now vs. near edge half a step ahead, both seen from the origin
    let present_angle = span.angle_between(&(body.x - origin + radius_vector));
    let future_angle = span.angle_between(&(body.x + body.v * (dt / 2.0) - origin - radius_vector));

    let sign_p = if present_angle != 0.0 { present_angle.signum() } else { 1.0 };
    let sign_f = if future_angle != 0.0 { future_angle.signum() } else { -sign_p };

    if sign_p == sign_f && present_angle != 0.0 {
        return false;
    }
    if !boundary.spans(&body.x) {
        return false;
    }
    mirror(&mut body.v, &span);
    true
}

/// Run every body against every boundary, in order
/// Later boundaries see the velocity already turned by earlier ones
pub fn reflect_off_boundaries(bodies: &mut [Body], boundaries: &[Boundary], dt: f64) -> usize {
    let mut hits = 0;
    for body in bodies.iter_mut() {
        for boundary in boundaries {
            if reflect_off_boundary(body, boundary, dt) {
                hits += 1;
            }
        }
    }
    hits
}

/// Look-ahead collision pass over all unordered pairs
///
/// Predicted positions come from [`predict_position`] with this step's
/// accelerations. A pair whose predicted discs touch or overlap has both
/// velocities mirrored across the line perpendicular to the one joining the
/// predictions. Returns the colliding pairs in processing order.
/// `accels` must hold one entry per body.
pub fn resolve_body_collisions(
    bodies: &mut [Body],
    accels: &[NVec2],
    dt: f64,
) -> Result<Vec<(BodyId, BodyId)>> {
    let n = bodies.len();
    if accels.len() != n {
        return Err(SimError::InvalidParameter(format!(
            "{} accelerations for {n} bodies",
            accels.len()
        )));
    }
    let mut hits = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            let pi = predict_position(&bodies[i], &accels[i], dt);
            let pj = predict_position(&bodies[j], &accels[j], dt);
            let apart = pj - pi;

            if apart.length() - bodies[i].radius - bodies[j].radius > 0.0 {
                continue;
            }

            let horizontal = apart.perpendicular_normal().map_err(|_| {
                SimError::DegenerateGeometry(format!(
                    "bodies {:?} and {:?} are predicted at the same position ({}, {})",
                    BodyId(i), BodyId(j), pi.x, pi.y
                ))
            })?;

            mirror(&mut bodies[i].v, &horizontal);
            mirror(&mut bodies[j].v, &horizontal);
            hits.push((BodyId(i), BodyId(j)));
        }
    }
    Ok(hits)
}
