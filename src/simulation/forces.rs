//! Force / acceleration contributors for the engine
//!
//! Defines the acceleration trait, the set that sums the terms into one
//! dense buffer, and direct Newtonian gravity

use super::geometry::Planar;
use super::states::{Body, BodyId, NVec2, System};
use crate::error::{Result, SimError};

/// Scaled gravitational constant: 6.67384e-11 blown up by 1e10 so that
/// bodies of a few hundred mass units visibly attract
pub const DEFAULT_G: f64 = 6.67384e-11 * 1.0e10;

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
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
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    /// - the first failing term aborts the accumulation
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<()> {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        for term in &self.terms {
            term.acceleration(t, sys, out)?;
        }
        Ok(())
    }
}

/// Acceleration source operating on a [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) -> Result<()>;
}

/// Inverse-square Newtonian gravity, summed directly over all pairs
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: DEFAULT_G }
    }
}

impl NewtonianGravity {
    /// Accelerations the pair exert on each other: `(on a from b, on b from a)`
    ///
    /// `m_a * first == -(m_b * second)`, i.e. the forces are equal and opposite.
    /// Coincident positions have no defined direction and are reported as
    /// `DegenerateGeometry`.
    pub fn pair_accelerations(&self, a: &Body, b: &Body) -> Result<(NVec2, NVec2)> {
        // r points from a to b, so a is pulled along +r and b along -r
        let r = b.x - a.x;
        let dist = r.length();
        let dir = r.normalized()?;

        // |F| = G m_a m_b / |r|^2
        let f = self.g * a.m * b.m / (dist * dist);
        let force = dir * f;

        Ok((force / a.m, -force / b.m))
    }
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) -> Result<()> {
        let n = sys.bodies.len();

        // Each unordered pair (i, j) with i < j, never a body with itself
        for i in 0..n {
            let bi = &sys.bodies[i];
            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let (ai, aj) = self.pair_accelerations(bi, bj).map_err(|_| {
                    SimError::DegenerateGeometry(format!(
                        "bodies {:?} and {:?} share position ({}, {})",
                        BodyId(i), BodyId(j), bi.x.x, bi.x.y
                    ))
                })?;
                out[i] += ai;
                out[j] += aj;
            }
        }
        Ok(())
    }
}
