use std::path::PathBuf;

use clap::Parser;

use crate::parameters::Override;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CommandLineOptions {
    /// YAML file containing the parameter sections. All sections use
    /// their defaults if omitted.
    pub parameter_file_path: Option<PathBuf>,
    #[clap(short, parse(from_occurrences))]
    pub verbosity: usize,
    /// Do not write anything to the output directory.
    #[clap(long)]
    pub no_output: bool,
    /// Override a single parameter, e.g. `--set arena.width=1500`.
    #[clap(long = "set")]
    pub overrides: Vec<Override>,
}
