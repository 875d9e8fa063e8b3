pub mod error;
pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use error::{LoadError, SimError};
pub use simulation::states::{Body, BodyId, System, NVec2};
pub use simulation::geometry::Planar;
pub use simulation::boundary::Boundary;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, DEFAULT_G};
pub use simulation::integrator::predict_position;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, BoundaryConfig, ScenarioConfig, load_scenario_config};
pub use configuration::world::{NamedBody, load_world, read_world};

pub use visualization::console::{ConsoleSink, FrameSink, run_console};

pub use benchmark::benchmark::bench_step;
