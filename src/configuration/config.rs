//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine switches (collisions on/off)
//! - [`ParametersConfig`] – step size, run length and gravitational constant
//! - [`BodyConfig`]       – initial state for each body
//! - [`BoundaryConfig`]   – reflective wall segments
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   collisions: true        # optional, default true
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.01                # fixed step size
//!   G: 0.667384             # optional gravitational constant
//!
//! bodies:
//!   - name: heavy           # optional
//!     x: [-50.0, 0.0]
//!     v: [ 40.0, 0.0]
//!     m: 100.0
//!     radius: 10.0
//!   - x: [ 20.0, 19.0]
//!     v: [-40.0, 0.0]
//!     m: 1.0
//!     radius: 10.0
//!
//! boundaries:               # optional
//!   - origin: [0.0, 0.0]
//!     span: [300.0, 0.0]
//! ```
//!
//! [`Scenario::build_scenario`](crate::simulation::scenario::Scenario::build_scenario)
//! turns this into a validated runtime engine.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::LoadError;
use crate::simulation::forces::DEFAULT_G;

fn default_true() -> bool {
    true
}

fn default_g() -> f64 {
    DEFAULT_G
}

/// Engine switches
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub collisions: bool, // `false` skips the body-body collision pass
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { collisions: true }
    }
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64, // step size
    #[serde(rename = "G", default = "default_g")]
    pub g: f64, // gravitational constant
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub x: [f64; 2], // initial position
    pub v: [f64; 2], // initial velocity
    pub m: f64, // mass
    pub radius: f64, // collision radius
}

/// A wall segment from `origin` to `origin + span`
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BoundaryConfig {
    pub origin: [f64; 2],
    pub span: [f64; 2],
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub boundaries: Vec<BoundaryConfig>,
}

impl ScenarioConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(text)?)
    }
}

/// Read a scenario from a YAML file
pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig, LoadError> {
    let file = File::open(path)?;
    ScenarioConfig::from_reader(BufReader::new(file))
}
