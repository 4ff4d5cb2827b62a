use derive_custom::collisim_parameters;

use super::actions::ScheduledAction;
use crate::collisions::CollisionParameters;
use crate::extent::Extent;
use crate::parameters::ParameterError;
use crate::parameters::ParameterFileContents;
use crate::prelude::Float;
use crate::prelude::MVec;
use crate::quadtree::QuadTreeConfig;

/// The size of the rectangular area the bodies move in. The top left
/// corner is at the origin.
#[derive(Debug)]
#[collisim_parameters("arena")]
#[serde(default)]
pub struct ArenaParameters {
    pub width: Float,
    pub height: Float,
}

impl Default for ArenaParameters {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
        }
    }
}

impl ArenaParameters {
    pub fn size(&self) -> MVec {
        MVec::new(self.width, self.height)
    }

    pub fn extent(&self) -> Extent {
        Extent::from_size(self.size())
    }

    fn validate(&self) -> Result<(), ParameterError> {
        let is_valid = |length: Float| length > 0.0 && length.is_finite();
        if !(is_valid(self.width) && is_valid(self.height)) {
            return Err(ParameterError::InvalidValue(
                "arena",
                format!(
                    "size must be positive and finite, got {} x {}",
                    self.width, self.height
                ),
            ));
        }
        Ok(())
    }
}

/// Controls how bodies are created.
#[derive(Debug)]
#[collisim_parameters("population")]
#[serde(default)]
pub struct PopulationParameters {
    /// The number of bodies at the start of the simulation.
    pub initial: usize,
    /// The number of bodies added or removed by an action that does
    /// not specify a count.
    pub step_size: usize,
    pub radius: Float,
    /// Both velocity components are drawn uniformly from
    /// `[-max_speed, max_speed]`.
    pub max_speed: Float,
    /// The minimum distance between the top left corner of a newly
    /// spawned body and the arena walls.
    pub spawn_margin: Float,
}

impl Default for PopulationParameters {
    fn default() -> Self {
        Self {
            initial: 50,
            step_size: 10,
            radius: 15.0,
            max_speed: 200.0,
            spawn_margin: 50.0,
        }
    }
}

impl PopulationParameters {
    /// The region in which the top left corners of new bodies are
    /// placed.
    pub fn spawn_region(&self, arena: &ArenaParameters) -> Extent {
        Extent::from_min_max(
            MVec::splat(self.spawn_margin),
            arena.size() - MVec::splat(self.spawn_margin),
        )
    }

    fn validate(&self, arena: &ArenaParameters) -> Result<(), ParameterError> {
        let invalid = |reason: String| Err(ParameterError::InvalidValue("population", reason));
        if !(self.radius > 0.0 && self.radius.is_finite()) {
            return invalid(format!(
                "radius must be positive and finite, got {}",
                self.radius
            ));
        }
        // Velocities are drawn from a range of width 2 * max_speed.
        if !(self.max_speed >= 0.0 && (2.0 * self.max_speed).is_finite()) {
            return invalid(format!(
                "max_speed must be non-negative and finite, got {}",
                self.max_speed
            ));
        }
        let region = self.spawn_region(arena);
        if !(self.spawn_margin >= 0.0
            && self.spawn_margin.is_finite()
            && region.min.x <= region.max.x
            && region.min.y <= region.max.y)
        {
            return invalid(format!(
                "spawn_margin {} leaves no room to spawn bodies in a {} x {} arena",
                self.spawn_margin, arena.width, arena.height
            ));
        }
        Ok(())
    }
}

#[derive(Debug)]
#[collisim_parameters("simulation")]
#[serde(default)]
pub struct SimulationParameters {
    /// The number of steps performed by a run.
    pub num_steps: usize,
    /// The time in seconds that passes in a single step.
    pub timestep: Float,
    /// The number of steps between two status reports. Zero disables
    /// status reports.
    pub report_interval: usize,
    /// Seed of the random number generator used to spawn bodies. If
    /// absent, the generator is seeded from system entropy.
    pub seed: Option<u64>,
    /// Actions performed at given steps of the run.
    pub actions: Vec<ScheduledAction>,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            num_steps: 600,
            timestep: 1.0 / 60.0,
            report_interval: 60,
            seed: None,
            actions: vec![],
        }
    }
}

impl SimulationParameters {
    fn validate(&self) -> Result<(), ParameterError> {
        if !(self.timestep > 0.0 && self.timestep.is_finite()) {
            return Err(ParameterError::InvalidValue(
                "simulation",
                format!("timestep must be positive, got {}", self.timestep),
            ));
        }
        Ok(())
    }
}

/// All parameter sections that determine the behavior of a
/// [Simulation](super::Simulation).
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    pub arena: ArenaParameters,
    pub population: PopulationParameters,
    pub collisions: CollisionParameters,
    pub quadtree: QuadTreeConfig,
    pub simulation: SimulationParameters,
}

impl Parameters {
    pub fn from_parameter_file_contents(
        contents: &mut ParameterFileContents,
    ) -> Result<Self, ParameterError> {
        let parameters = Self {
            arena: contents.extract_parameter_struct()?,
            population: contents.extract_parameter_struct()?,
            collisions: contents.extract_parameter_struct()?,
            quadtree: contents.extract_parameter_struct()?,
            simulation: contents.extract_parameter_struct()?,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.arena.validate()?;
        self.population.validate(&self.arena)?;
        self.simulation.validate()?;
        let neighborhood_factor = self.collisions.neighborhood_factor;
        if !(neighborhood_factor > 0.0 && neighborhood_factor.is_finite()) {
            return Err(ParameterError::InvalidValue(
                "collisions",
                format!(
                    "neighborhood_factor must be positive and finite, got {}",
                    neighborhood_factor
                ),
            ));
        }
        if self.quadtree.node_capacity == 0 {
            return Err(ParameterError::InvalidValue(
                "quadtree",
                "node_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Parameters;
    use crate::collisions::CollisionStrategy;
    use crate::parameters::ParameterError;
    use crate::parameters::ParameterFileContents;
    use crate::simulation::Action;

    fn read(contents: &str) -> Result<Parameters, ParameterError> {
        let mut contents = ParameterFileContents::new(contents).unwrap();
        Parameters::from_parameter_file_contents(&mut contents)
    }

    #[test]
    fn empty_file_gives_defaults() {
        let parameters = read("").unwrap();
        assert_eq!(parameters.arena.width, 1200.0);
        assert_eq!(parameters.arena.height, 800.0);
        assert_eq!(parameters.population.initial, 50);
        assert_eq!(parameters.population.step_size, 10);
        assert_eq!(parameters.population.radius, 15.0);
        assert_eq!(parameters.collisions.strategy, CollisionStrategy::QuadTree);
        assert_eq!(parameters.collisions.neighborhood_factor, 4.0);
        assert_eq!(parameters.quadtree.node_capacity, 4);
        assert_eq!(parameters.simulation.seed, None);
        assert!(parameters.simulation.actions.is_empty());
    }

    #[test]
    fn read_sections() {
        let parameters = read(
            "
arena:
  width: 400
collisions:
  strategy: brute_force
simulation:
  seed: 3
  actions:
    - step: 10
      action: toggle_strategy
    - step: 20
      action: add_bodies
      count: 5
",
        )
        .unwrap();
        assert_eq!(parameters.arena.width, 400.0);
        assert_eq!(parameters.arena.height, 800.0);
        assert_eq!(parameters.collisions.strategy, CollisionStrategy::BruteForce);
        assert_eq!(parameters.simulation.seed, Some(3));
        let actions = &parameters.simulation.actions;
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[0].action, Action::ToggleStrategy);
        assert_eq!(actions[0].count, None);
        assert_eq!(actions[1].step, 20);
        assert_eq!(actions[1].action, Action::AddBodies);
        assert_eq!(actions[1].count, Some(5));
    }

    #[test]
    fn invalid_values_are_rejected() {
        for contents in [
            "arena:\n  width: 0",
            "arena:\n  width: .inf",
            "arena:\n  height: .nan",
            "population:\n  radius: -1",
            "population:\n  radius: .inf",
            "population:\n  max_speed: -1",
            "population:\n  max_speed: 1.0e308",
            "population:\n  max_speed: .inf",
            "population:\n  spawn_margin: 700",
            "population:\n  spawn_margin: .nan",
            "simulation:\n  timestep: 0",
            "collisions:\n  neighborhood_factor: 0",
            "collisions:\n  neighborhood_factor: .inf",
            "quadtree:\n  node_capacity: 0",
        ] {
            assert!(
                matches!(read(contents), Err(ParameterError::InvalidValue(..))),
                "{}",
                contents
            );
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            read("arena:\n  depth: 3"),
            Err(ParameterError::InvalidSection(..))
        ));
        assert!(matches!(
            read("collisions:\n  strategy: octree"),
            Err(ParameterError::InvalidSection(..))
        ));
    }
}
