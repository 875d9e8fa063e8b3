//! Core state types for the simulation.
//!
//! - `Body`   – one simulated disc: radius, mass, position, velocity
//! - `BodyId` – integer handle of a body inside the engine arena
//! - `System` – the ordered arena of bodies plus the elapsed time `t`

use nalgebra::Vector2;

use crate::error::{Result, SimError};

pub type NVec2 = Vector2<f64>;

/// Handle of a body in the engine arena (its index in `System::bodies`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub usize);

impl BodyId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) x: NVec2, // position
    pub(crate) v: NVec2, // velocity
    pub(crate) m: f64, // mass
    pub(crate) radius: f64, // collision radius
}

impl Body {
    /// Build a body, rejecting non-positive or non-finite mass and radius
    /// and non-finite kinematic state
    pub fn new(radius: f64, m: f64, x: NVec2, v: NVec2) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::InvalidBodyParameters(format!(
                "radius must be positive and finite, got {radius}"
            )));
        }
        if !(m.is_finite() && m > 0.0) {
            return Err(SimError::InvalidBodyParameters(format!(
                "mass must be positive and finite, got {m}"
            )));
        }
        if !(x.iter().all(|c| c.is_finite()) && v.iter().all(|c| c.is_finite())) {
            return Err(SimError::InvalidBodyParameters(format!(
                "position {x:?} and velocity {v:?} must be finite"
            )));
        }
        Ok(Self { x, v, m, radius })
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Linear momentum `m v`
    pub fn momentum(&self) -> NVec2 {
        self.m * self.v
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // ordered arena, indexed by `BodyId`
    pub t: f64, // elapsed simulated time
}
