// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// URL of the git repository to benchmark (or the literal "help")
    pub url: String,

    /// Engines to run, comma separated (libgit2, git-cli); default: all
    #[arg(short, long, value_delimiter = ',')]
    pub engines: Option<Vec<String>>,

    /// Directory for the reports and the per-engine clones
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}
