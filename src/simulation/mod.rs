mod actions;
mod parameters;

use std::time::Duration;
use std::time::Instant;

use log::debug;
use log::info;
use log::trace;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub use self::actions::Action;
pub use self::actions::ScheduledAction;
pub use self::parameters::ArenaParameters;
pub use self::parameters::Parameters;
pub use self::parameters::PopulationParameters;
pub use self::parameters::SimulationParameters;
use crate::body::Body;
use crate::collisions::resolve_collisions;
use crate::collisions::CollisionStrategy;
use crate::extent::Extent;
use crate::initial_conditions::spawn_bodies;
use crate::parameters::ParameterError;
use crate::performance_data::Timers;
use crate::prelude::Float;
use crate::prelude::MVec;

/// What happened during a single step.
#[derive(Debug, Clone)]
pub struct StepReport {
    pub step: usize,
    pub strategy: CollisionStrategy,
    pub num_bodies: usize,
    pub num_comparisons: usize,
    pub num_resolved: usize,
    /// Wall clock time spent detecting and resolving collisions.
    pub collision_time: Duration,
}

/// Owns the bodies and advances them step by step.
pub struct Simulation {
    bodies: Vec<Body>,
    arena_extent: Extent,
    strategy: CollisionStrategy,
    parameters: Parameters,
    rng: StdRng,
    timers: Timers,
    step_num: usize,
}

impl Simulation {
    pub fn new(parameters: Parameters) -> Result<Self, ParameterError> {
        parameters.validate()?;
        let rng = match parameters.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sim = Self {
            bodies: vec![],
            arena_extent: parameters.arena.extent(),
            strategy: parameters.collisions.strategy,
            parameters,
            rng,
            timers: Timers::default(),
            step_num: 0,
        };
        sim.add_bodies(sim.parameters.population.initial);
        Ok(sim)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut Vec<Body> {
        &mut self.bodies
    }

    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    pub fn strategy(&self) -> CollisionStrategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: CollisionStrategy) {
        self.strategy = strategy;
    }

    /// The number of steps performed so far.
    pub fn step_num(&self) -> usize {
        self.step_num
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn arena_size(&self) -> MVec {
        self.parameters.arena.size()
    }

    pub fn toggle_strategy(&mut self) {
        self.strategy = self.strategy.toggled();
        info!("Switched collision detection to {}", self.strategy);
    }

    /// Appends `num` randomly placed bodies.
    pub fn add_bodies(&mut self, num: usize) {
        let new_bodies = spawn_bodies(
            &mut self.rng,
            num,
            &self.parameters.arena,
            &self.parameters.population,
        );
        self.bodies.extend(new_bodies);
        debug!("Added {} bodies, now {}", num, self.bodies.len());
    }

    /// Removes the last `num` bodies, or all of them if there are
    /// fewer than `num`.
    pub fn remove_bodies(&mut self, num: usize) {
        let remaining = self.bodies.len().saturating_sub(num);
        self.bodies.truncate(remaining);
        debug!("Removed bodies, now {}", self.bodies.len());
    }

    pub fn apply(&mut self, action: &ScheduledAction) {
        let count = action
            .count
            .unwrap_or(self.parameters.population.step_size);
        match action.action {
            Action::ToggleStrategy => self.toggle_strategy(),
            Action::AddBodies => self.add_bodies(count),
            Action::RemoveBodies => self.remove_bodies(count),
        }
    }

    fn apply_scheduled_actions(&mut self) {
        let actions: Vec<_> = self
            .parameters
            .simulation
            .actions
            .iter()
            .filter(|action| action.step == self.step_num)
            .cloned()
            .collect();
        for action in actions.iter() {
            self.apply(action);
        }
    }

    /// Performs the actions scheduled for this step, moves all bodies
    /// by `elapsed_time` and resolves the resulting collisions.
    pub fn step(&mut self, elapsed_time: Float) -> StepReport {
        self.apply_scheduled_actions();
        let arena_size = self.arena_size();
        for body in self.bodies.iter_mut() {
            body.update(elapsed_time, arena_size);
        }
        let identifier = self.strategy.identifier();
        let timer_name = format!("collisions_{}", identifier);
        self.timers.start(timer_name.clone());
        let statistics = resolve_collisions(
            self.strategy,
            &mut self.bodies,
            &self.arena_extent,
            &self.parameters.collisions,
            &self.parameters.quadtree,
        );
        let collision_time = self.timers.stop(timer_name).unwrap_or_default();
        self.timers.record_count(
            format!("comparisons_{}", identifier),
            statistics.num_comparisons,
        );
        let report = StepReport {
            step: self.step_num,
            strategy: self.strategy,
            num_bodies: self.bodies.len(),
            num_comparisons: statistics.num_comparisons,
            num_resolved: statistics.resolved.len(),
            collision_time,
        };
        trace!("{:?}", report);
        self.step_num += 1;
        report
    }

    /// Runs the configured number of steps with the configured
    /// timestep, logging a status report every `report_interval`
    /// steps.
    pub fn run(&mut self) {
        let num_steps = self.parameters.simulation.num_steps;
        let timestep = self.parameters.simulation.timestep;
        let report_interval = self.parameters.simulation.report_interval;
        info!(
            "Running {} steps with {} bodies using {}",
            num_steps,
            self.bodies.len(),
            self.strategy
        );
        let mut interval_start = Instant::now();
        let mut steps_in_interval = 0;
        for _ in 0..num_steps {
            let report = self.step(timestep);
            steps_in_interval += 1;
            if report_interval > 0 && steps_in_interval == report_interval {
                let steps_per_second =
                    steps_in_interval as f64 / interval_start.elapsed().as_secs_f64();
                log_status(&report, steps_per_second);
                interval_start = Instant::now();
                steps_in_interval = 0;
            }
        }
        self.timers.record_number("num_steps", self.step_num);
        self.timers.record_number("num_bodies", self.bodies.len());
    }
}

fn log_status(report: &StepReport, steps_per_second: f64) {
    info!(
        "Step {:>6} | Mode: {:<11} | Bodies: {:>5} | Steps/s: {:>8.1} | Collision checks: {:>8} | Collision time: {:.3} ms",
        report.step,
        report.strategy.to_string(),
        report.num_bodies,
        steps_per_second,
        report.num_comparisons,
        report.collision_time.as_secs_f64() * 1000.0,
    );
}
