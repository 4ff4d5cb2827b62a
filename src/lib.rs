//! Simulation of circular bodies bouncing around a rectangular arena.
//! Collisions between the bodies are found either by comparing all
//! pairs or by searching a quadtree around each body.

pub mod body;
pub mod collisions;
pub mod command_line_options;
pub mod extent;
pub mod initial_conditions;
pub mod logging;
pub mod output;
pub mod parameters;
pub mod performance_data;
pub mod quadtree;
pub mod rand;
pub mod simulation;
pub mod simulation_builder;

#[cfg(test)]
pub(crate) mod test_utils;

pub mod prelude {
    pub use super::body::Body;
    pub use super::collisions::CollisionStrategy;
    pub use super::extent::Extent;
    pub use super::simulation::Simulation;
    pub use super::simulation_builder::SimulationBuilder;

    pub type Float = f64;
    pub type MVec = glam::DVec2;
}
