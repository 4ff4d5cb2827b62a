use derive_custom::collisim_parameters;

/// Changes to a running simulation that happen between two steps.
#[derive(Debug, Copy, PartialEq, Eq)]
#[collisim_parameters]
pub enum Action {
    /// Switch between the brute force and quadtree strategies.
    ToggleStrategy,
    /// Spawn randomly placed bodies.
    AddBodies,
    /// Remove the most recently added bodies.
    RemoveBodies,
}

/// An action performed right before the given step.
#[derive(Debug, PartialEq, Eq)]
#[collisim_parameters]
pub struct ScheduledAction {
    pub step: usize,
    pub action: Action,
    /// The number of bodies to add or remove. Defaults to the step
    /// size of the population.
    #[serde(default)]
    pub count: Option<usize>,
}

impl ScheduledAction {
    pub fn new(step: usize, action: Action) -> Self {
        Self {
            step,
            action,
            count: None,
        }
    }

    pub fn with_count(step: usize, action: Action, count: usize) -> Self {
        Self {
            step,
            action,
            count: Some(count),
        }
    }
}
