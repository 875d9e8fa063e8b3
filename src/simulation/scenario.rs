//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) or a list of named bodies from a
//! world file and produces a runtime `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - the engine with its bodies at t = 0, boundaries and gravity
//! - the display name of every body, indexed like the engine arena

use std::path::Path;

use crate::configuration::config::{load_scenario_config, BodyConfig, BoundaryConfig, ScenarioConfig};
use crate::configuration::world::NamedBody;
use crate::error::{LoadError, Result};
use crate::simulation::boundary::Boundary;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2};

/// Runtime bundle constructed from a [`ScenarioConfig`] or a world file
pub struct Scenario {
    pub parameters: Parameters,
    pub engine: Engine,
    pub names: Vec<String>,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self> {
        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
            g: cfg.parameters.g,
        };
        parameters.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`, unnamed ones get "body<i>"
        let mut names = Vec::with_capacity(cfg.bodies.len());
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for (i, bc) in cfg.bodies.iter().enumerate() {
            let BodyConfig { name, x, v, m, radius } = bc;
            bodies.push(Body::new(*radius, *m, NVec2::new(x[0], x[1]), NVec2::new(v[0], v[1]))?);
            names.push(name.clone().unwrap_or_else(|| format!("body{i}")));
        }

        let boundaries = cfg
            .boundaries
            .iter()
            .map(|BoundaryConfig { origin, span }| {
                Boundary::new(NVec2::new(origin[0], origin[1]), NVec2::new(span[0], span[1]))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut engine = Engine::with_gravity(bodies, boundaries, parameters.h0, parameters.g)?;
        engine.set_collisions(cfg.engine.collisions);

        Ok(Self {
            parameters,
            engine,
            names,
        })
    }

    /// Read and build a YAML scenario in one go
    pub fn load(path: &Path) -> std::result::Result<Self, LoadError> {
        let cfg = load_scenario_config(path)?;
        Ok(Self::build_scenario(cfg)?)
    }

    /// Scenario from world-file bodies; world files carry no walls
    pub fn from_world(world: Vec<NamedBody>, parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        let (names, bodies): (Vec<String>, Vec<Body>) =
            world.into_iter().map(|nb| (nb.name, nb.body)).unzip();
        let engine = Engine::with_gravity(bodies, Vec::new(), parameters.h0, parameters.g)?;
        Ok(Self {
            parameters,
            engine,
            names,
        })
    }

    /// Step the engine until `parameters.t_end`
    pub fn run<F>(&mut self, on_frame: F) -> Result<usize>
    where
        F: FnMut(&Engine),
    {
        self.engine.run_until(self.parameters.t_end, on_frame)
    }
}
