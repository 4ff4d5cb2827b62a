use std::error::Error;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use clap::Parser;
use derive_more::Display;
use derive_more::From;
use log::info;
use log::SetLoggerError;

use crate::command_line_options::CommandLineOptions;
use crate::logging::initialize_logging;
use crate::output::emit_build_information;
use crate::output::make_output_dir;
use crate::output::write_performance_data;
use crate::output::write_used_parameters;
use crate::output::OutputError;
use crate::output::OutputParameters;
use crate::parameters::Override;
use crate::parameters::ParameterError;
use crate::parameters::ParameterFileContents;
use crate::simulation::Parameters;
use crate::simulation::Simulation;

#[derive(Debug, Display, From)]
pub enum BuildError {
    Parameters(ParameterError),
    Output(OutputError),
    #[display(fmt = "Failed to open log file: {}", _0)]
    LogFile(io::Error),
    #[display(fmt = "Failed to initialize logging: {}", _0)]
    Logger(SetLoggerError),
}

impl Error for BuildError {}

pub fn main() -> Result<(), Box<dyn Error>> {
    let opts = CommandLineOptions::parse();
    let mut run = SimulationBuilder::default()
        .with_command_line_options(&opts)
        .initialize_logging(true)
        .build()?;
    run.run()?;
    Ok(())
}

/// A simulation together with the place its output goes to.
pub struct SimulationRun {
    pub simulation: Simulation,
    pub output: Option<OutputParameters>,
}

impl SimulationRun {
    pub fn run(&mut self) -> Result<(), OutputError> {
        self.simulation.run();
        if let Some(ref output) = self.output {
            write_performance_data(output, self.simulation.timers())?;
            info!("Wrote output to {:?}", output.output_dir);
        }
        Ok(())
    }
}

pub struct SimulationBuilder {
    pub parameter_file_path: Option<PathBuf>,
    pub parameter_file_contents: Option<String>,
    pub verbosity: usize,
    pub write_output: bool,
    pub overrides: Vec<Override>,
    pub initialize_logging: bool,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self {
            parameter_file_path: None,
            parameter_file_contents: None,
            verbosity: 0,
            write_output: true,
            overrides: vec![],
            initialize_logging: false,
        }
    }
}

impl SimulationBuilder {
    pub fn with_command_line_options(&mut self, opts: &CommandLineOptions) -> &mut Self {
        if let Some(ref path) = opts.parameter_file_path {
            self.parameter_file_path(path);
        }
        self.verbosity(opts.verbosity)
            .write_output(!opts.no_output)
            .overrides(opts.overrides.clone())
    }

    pub fn parameter_file_path(&mut self, parameter_file_path: &Path) -> &mut Self {
        self.parameter_file_path = Some(parameter_file_path.to_owned());
        self
    }

    /// Use the given YAML document instead of reading a parameter file.
    pub fn parameter_file_contents(&mut self, contents: &str) -> &mut Self {
        self.parameter_file_contents = Some(contents.to_owned());
        self
    }

    pub fn verbosity(&mut self, verbosity: usize) -> &mut Self {
        self.verbosity = verbosity;
        self
    }

    pub fn write_output(&mut self, write_output: bool) -> &mut Self {
        self.write_output = write_output;
        self
    }

    pub fn overrides(&mut self, overrides: Vec<Override>) -> &mut Self {
        self.overrides = overrides;
        self
    }

    /// Whether to install the global logger. Can only succeed once
    /// per process.
    pub fn initialize_logging(&mut self, initialize_logging: bool) -> &mut Self {
        self.initialize_logging = initialize_logging;
        self
    }

    fn read_parameter_file_contents(&self) -> Result<ParameterFileContents, ParameterError> {
        let contents = match (&self.parameter_file_contents, &self.parameter_file_path) {
            (Some(contents), _) => contents.clone(),
            (None, Some(path)) => fs::read_to_string(path)
                .map_err(|e| ParameterError::ReadFile(path.clone(), e))?,
            (None, None) => String::new(),
        };
        let mut contents = ParameterFileContents::new(&contents)?;
        contents.with_overrides(self.overrides.clone());
        Ok(contents)
    }

    pub fn build(&self) -> Result<SimulationRun, BuildError> {
        let mut contents = self.read_parameter_file_contents()?;
        let parameters = Parameters::from_parameter_file_contents(&mut contents)?;
        let output_parameters: OutputParameters = contents.extract_parameter_struct()?;
        let unused = contents.unused_section_names();
        if !unused.is_empty() {
            return Err(ParameterError::UnusedSections(unused.join(", ")).into());
        }
        let output = if self.write_output {
            make_output_dir(&output_parameters)?;
            Some(output_parameters)
        } else {
            None
        };
        if self.initialize_logging {
            initialize_logging(
                self.verbosity,
                output.as_ref().map(|output| output.log_path()).as_deref(),
            )?;
        }
        if let Some(ref output) = output {
            let used_parameters = contents
                .contents()
                .map_err(|e| BuildError::Output(e.into()))?;
            write_used_parameters(output, &used_parameters)?;
            emit_build_information(output)?;
        }
        let simulation = Simulation::new(parameters)?;
        Ok(SimulationRun { simulation, output })
    }
}
