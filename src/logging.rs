use std::fs::File;
use std::path::Path;

use simplelog::ColorChoice;
use simplelog::CombinedLogger;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::SharedLogger;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use simplelog::WriteLogger;

use crate::simulation_builder::BuildError;

pub fn log_level(verbosity: usize) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs to the terminal at a level given by `verbosity` and, if
/// `log_file` is given, to that file at the same level.
pub fn initialize_logging(verbosity: usize, log_file: Option<&Path>) -> Result<(), BuildError> {
    let level = log_level(verbosity);
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(log_file) = log_file {
        loggers.push(WriteLogger::new(
            level,
            Config::default(),
            File::create(log_file)?,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}
