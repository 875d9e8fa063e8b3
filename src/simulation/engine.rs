//! The simulation engine: owns the bodies and advances them one fixed step
//! at a time.
//!
//! A step runs four passes over the arena:
//! 1. gravity into a dense per-body acceleration buffer,
//! 2. reflection of every body off every boundary,
//! 3. integration with the buffered accelerations,
//! 4. look-ahead body-body collisions.
//!
//! The passes work on a staging copy of the bodies which replaces the live
//! arena only once the whole step has succeeded, so a `DegenerateGeometry`
//! failure leaves the engine exactly as it was before the call.

use super::boundary::Boundary;
use super::collision::{reflect_off_boundaries, resolve_body_collisions};
use super::forces::{AccelSet, NewtonianGravity, DEFAULT_G};
use super::integrator::drift_kick;
use super::params::Parameters;
use super::states::{Body, BodyId, NVec2, System};
use crate::error::Result;

pub struct Engine {
    system: System, // bodies + elapsed time
    boundaries: Vec<Boundary>, // static walls
    forces: AccelSet, // active acceleration terms
    gravity: NewtonianGravity, // the gravity term registered in `forces`
    h0: f64, // fixed step size
    collisions: bool, // body-body collision pass on/off
    accels: Vec<NVec2>, // net accelerations of the last completed step
}

impl Engine {
    /// Engine with the default (scaled) gravitational constant
    pub fn new(bodies: Vec<Body>, boundaries: Vec<Boundary>, step_size: f64) -> Result<Self> {
        Self::with_gravity(bodies, boundaries, step_size, DEFAULT_G)
    }

    pub fn with_gravity(
        bodies: Vec<Body>,
        boundaries: Vec<Boundary>,
        step_size: f64,
        g: f64,
    ) -> Result<Self> {
        Parameters { t_end: 0.0, h0: step_size, g }.validate()?;

        let gravity = NewtonianGravity { g };
        let forces = AccelSet::new().with(gravity);
        let accels = vec![NVec2::zeros(); bodies.len()];

        Ok(Self {
            system: System { bodies, t: 0.0 },
            boundaries,
            forces,
            gravity,
            h0: step_size,
            collisions: true,
            accels,
        })
    }

    /// Turn the body-body collision pass on or off
    pub fn set_collisions(&mut self, enabled: bool) {
        self.collisions = enabled;
    }

    pub fn collisions(&self) -> bool {
        self.collisions
    }

    /// Advance the simulation by one step of `step_size()`
    pub fn step(&mut self) -> Result<()> {
        let dt = self.h0;
        let n = self.system.bodies.len();

        let mut accels = vec![NVec2::zeros(); n];
        self.forces.accumulate_accels(self.system.t, &self.system, &mut accels)?;

        let mut bodies = self.system.bodies.clone();
        reflect_off_boundaries(&mut bodies, &self.boundaries, dt);
        drift_kick(&mut bodies, &accels, dt);
        if self.collisions {
            resolve_body_collisions(&mut bodies, &accels, dt)?;
        }

        self.system.bodies = bodies;
        self.accels = accels;
        self.system.t += dt;
        Ok(())
    }

    /// Step until the elapsed time reaches `t_end`, calling `on_frame` after
    /// every step. Returns the number of steps taken.
    pub fn run_until<F>(&mut self, t_end: f64, mut on_frame: F) -> Result<usize>
    where
        F: FnMut(&Engine),
    {
        let mut steps = 0;
        // half a step of slack so accumulated rounding cannot add a step
        while self.system.t + 0.5 * self.h0 < t_end {
            self.step()?;
            steps += 1;
            on_frame(&*self);
        }
        Ok(steps)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.system.bodies.get(id.index())
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> {
        (0..self.system.bodies.len()).map(BodyId)
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Simulated time elapsed since construction
    pub fn elapsed(&self) -> f64 {
        self.system.t
    }

    pub fn step_size(&self) -> f64 {
        self.h0
    }

    pub fn gravity(&self) -> &NewtonianGravity {
        &self.gravity
    }

    /// Net accelerations used by the last completed step (zeros before the first)
    pub fn accelerations(&self) -> &[NVec2] {
        &self.accels
    }

    /// Vector sum of `m v` over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.system.bodies.iter().map(Body::momentum).sum()
    }

    /// Scalar sum of `m |v|` over all bodies
    pub fn total_impulse(&self) -> f64 {
        self.system.bodies.iter().map(|b| b.m * b.v.norm()).sum()
    }

    /// Mass-weighted mean position, `None` without bodies
    pub fn center_of_mass(&self) -> Option<NVec2> {
        if self.system.bodies.is_empty() {
            return None;
        }
        let total: f64 = self.system.bodies.iter().map(|b| b.m).sum();
        let weighted: NVec2 = self.system.bodies.iter().map(|b| b.m * b.x).sum();
        Some(weighted / total)
    }
}
