//! Numerical and physical parameters for a run
//!
//! `Parameters` holds:
//! - the fixed step size and the end time of a run,
//! - the gravitational constant `g`

use super::forces::DEFAULT_G;
use crate::error::{Result, SimError};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    pub g: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            t_end: 10.0,
            h0: 0.01,
            g: DEFAULT_G,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.h0.is_finite() && self.h0 > 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "step size must be positive and finite, got {}",
                self.h0
            )));
        }
        if !(self.g.is_finite() && self.g >= 0.0) {
            return Err(SimError::InvalidParameter(format!(
                "gravitational constant must be finite and non-negative, got {}",
                self.g
            )));
        }
        if !self.t_end.is_finite() {
            return Err(SimError::InvalidParameter(format!(
                "end time must be finite, got {}",
                self.t_end
            )));
        }
        Ok(())
    }

    /// Number of steps `Engine::run_until(t_end)` takes from t = 0: it keeps
    /// stepping while more than half a step remains
    pub fn steps(&self) -> usize {
        let n = (self.t_end / self.h0 - 0.5).ceil();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }
}
