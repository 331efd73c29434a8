//! CLI argument parsing for taskspark.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Taskspark: task launch request source.
///
/// Reads an operator-supplied payload config (artifact uri plus raw
/// argument/property strings), parses the loosely-quoted strings, and emits
/// a composed launch request as JSON. A scheduler drives `emit` on its own
/// cadence; delivery of the emitted JSON is the transport's job.
#[derive(Parser, Debug)]
#[command(name = "taskspark")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for taskspark.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Emit one task launch request as JSON on stdout.
    ///
    /// Loads the payload config, parses the argument and property strings,
    /// and prints the composed launch request. One invocation emits exactly
    /// one request.
    Emit(EmitArgs),

    /// Preview how the payload config parses, without emitting.
    ///
    /// Prints a human-readable breakdown of the parsed arguments and
    /// property maps.
    Check(CheckArgs),
}

/// Arguments for the `emit` command.
#[derive(Parser, Debug)]
pub struct EmitArgs {
    /// Path to the payload config file.
    #[arg(short, long, default_value = "taskspark.yaml")]
    pub config: PathBuf,

    /// Override the artifact uri from the config file.
    #[arg(long)]
    pub uri: Option<String>,

    /// Override the command-line argument string from the config file.
    #[arg(long)]
    pub args: Option<String>,

    /// Override the environment property string from the config file.
    #[arg(long)]
    pub env_properties: Option<String>,

    /// Override the deployment property string from the config file.
    #[arg(long)]
    pub deploy_properties: Option<String>,

    /// Pretty-print the emitted JSON.
    #[arg(long)]
    pub pretty: bool,

    /// Append an emit event to this NDJSON audit log.
    #[arg(long)]
    pub log: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Path to the payload config file.
    #[arg(short, long, default_value = "taskspark.yaml")]
    pub config: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
