pub mod states;
pub mod geometry;
pub mod params;
pub mod boundary;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod engine;
pub mod scenario;
