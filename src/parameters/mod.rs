mod parameter_file_contents;

use std::error::Error;
use std::io;
use std::path::PathBuf;

use derive_more::Display;
pub use parameter_file_contents::Override;
pub use parameter_file_contents::ParameterFileContents;

pub use crate::collisions::CollisionParameters;
pub use crate::collisions::CollisionStrategy;
pub use crate::output::HandleExistingOutput;
pub use crate::output::OutputParameters;
pub use crate::quadtree::QuadTreeConfig;
pub use crate::simulation::ArenaParameters;
pub use crate::simulation::PopulationParameters;
pub use crate::simulation::SimulationParameters;

#[derive(Debug, Display)]
pub enum ParameterError {
    #[display(fmt = "Failed to read parameter file at {:?}: {}", _0, _1)]
    ReadFile(PathBuf, io::Error),
    #[display(fmt = "Failed to parse parameter file: {}", _0)]
    Parse(serde_yaml::Error),
    #[display(fmt = "Parameter file is not a mapping from section names to sections")]
    NotAMapping,
    #[display(fmt = "Required section {} not present in parameter file", _0)]
    MissingSection(String),
    #[display(fmt = "Failed to read parameter file section \"{}\": {}", _0, _1)]
    InvalidSection(String, serde_yaml::Error),
    #[display(fmt = "Invalid parameter override \"{}\": {}", _0, _1)]
    InvalidOverride(String, String),
    #[display(fmt = "Invalid value in section \"{}\": {}", _0, _1)]
    InvalidValue(&'static str, String),
    #[display(fmt = "Unused parameter sections: {}", _0)]
    UnusedSections(String),
    #[display(fmt = "{} cannot be read as a parameter section", _0)]
    NotASection(&'static str),
}

impl Error for ParameterError {}
