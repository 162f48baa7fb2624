//! Command-line arguments.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TracingFormat {
    Pretty,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "worklist", about = "Conflict-free timetable generation API")]
pub struct Args {
    /// Log output format.
    #[arg(long, value_enum, default_value = "pretty")]
    pub tracing: TracingFormat,

    /// Override the configured listen port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Override the configured catalog snapshot path.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
