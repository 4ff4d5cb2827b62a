mod build_information;
mod parameters;

use std::error::Error;
use std::fs;
use std::io;
use std::path::PathBuf;

use derive_more::Display;
use derive_more::From;
use log::info;
use log::warn;

pub use self::build_information::emit_build_information;
pub use self::parameters::HandleExistingOutput;
pub use self::parameters::OutputParameters;
use crate::performance_data::Timers;

#[derive(Debug, Display, From)]
pub enum OutputError {
    #[display(fmt = "Output IO error: {}", _0)]
    Io(io::Error),
    #[display(fmt = "Failed to serialize output: {}", _0)]
    Yaml(serde_yaml::Error),
    #[display(
        fmt = "Output directory {:?} already exists. Set output.handle_existing_output to overwrite or delete it",
        _0
    )]
    #[from(ignore)]
    ExistingOutput(PathBuf),
}

impl Error for OutputError {}

/// Creates the output directory, dealing with a previous run in the
/// same place according to `handle_existing_output`.
pub fn make_output_dir(parameters: &OutputParameters) -> Result<(), OutputError> {
    let output_dir = &parameters.output_dir;
    if output_dir.exists() {
        match parameters.handle_existing_output {
            HandleExistingOutput::Abort => {
                return Err(OutputError::ExistingOutput(output_dir.clone()))
            }
            HandleExistingOutput::Overwrite => {
                warn!("Output directory {:?} exists, overwriting files", output_dir);
            }
            HandleExistingOutput::Delete => {
                info!("Deleting existing output directory {:?}", output_dir);
                fs::remove_dir_all(output_dir)?;
            }
        }
    }
    fs::create_dir_all(output_dir)?;
    Ok(())
}

pub fn write_used_parameters(
    parameters: &OutputParameters,
    contents: &str,
) -> Result<(), OutputError> {
    fs::write(parameters.used_parameters_path(), contents)?;
    Ok(())
}

pub fn write_performance_data(
    parameters: &OutputParameters,
    timers: &Timers,
) -> Result<(), OutputError> {
    fs::write(
        parameters.performance_data_path(),
        serde_yaml::to_string(&timers.as_output()?)?,
    )?;
    Ok(())
}
