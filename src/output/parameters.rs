use std::path::PathBuf;

use derive_custom::collisim_parameters;

/// How to handle the case of an already existing output directory.
#[derive(Debug, Default, Copy, PartialEq, Eq)]
#[collisim_parameters]
pub enum HandleExistingOutput {
    /// Stop before the simulation starts.
    #[default]
    Abort,
    /// Overwrite already existing files if the names match.
    Overwrite,
    /// Delete the existing output folder. This will erase all
    /// data of the previous run.
    Delete,
}

/// Parameters for the output of the simulation. Only used if output
/// is enabled in the [SimulationBuilder](crate::simulation_builder::SimulationBuilder).
#[derive(Debug)]
#[collisim_parameters("output")]
pub struct OutputParameters {
    /// The directory to which the output is written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// The name of the file containing the timings and counts
    /// collected during the run.
    #[serde(default = "default_performance_data_filename")]
    pub performance_data_filename: String,
    /// The name of the file which contains a copy of parameters used
    /// in the simulation.
    #[serde(default = "default_used_parameters_filename")]
    pub used_parameters_filename: String,
    /// The name of the log file.
    #[serde(default = "default_log_filename")]
    pub log_filename: String,
    /// What to do when the output folder already exists.
    #[serde(default)]
    pub handle_existing_output: HandleExistingOutput,
}

impl Default for OutputParameters {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            performance_data_filename: default_performance_data_filename(),
            used_parameters_filename: default_used_parameters_filename(),
            log_filename: default_log_filename(),
            handle_existing_output: HandleExistingOutput::default(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    "output".into()
}

fn default_performance_data_filename() -> String {
    "performance.yml".into()
}

fn default_used_parameters_filename() -> String {
    "parameters.yml".into()
}

fn default_log_filename() -> String {
    "log".into()
}

impl OutputParameters {
    pub fn performance_data_path(&self) -> PathBuf {
        self.output_dir.join(&self.performance_data_filename)
    }

    pub fn used_parameters_path(&self) -> PathBuf {
        self.output_dir.join(&self.used_parameters_filename)
    }

    pub fn log_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_filename)
    }

    pub fn build_info_path(&self) -> PathBuf {
        self.output_dir.join("build_info.yml")
    }
}
