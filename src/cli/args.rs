//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pose-doctor - readiness checks for the pose tracking client.
///
/// Checks the ML runtime, the trained-model artifact, and the camera, then
/// prints one line per check.
#[derive(Debug, Parser)]
#[command(name = "pose-doctor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .pose-doctor.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Check options used when no subcommand is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run every readiness check (default if no command specified)
    Check(CheckArgs),
}

impl Cli {
    /// Check options for this invocation, from `check` or the top level.
    pub fn check_args(&self) -> &CheckArgs {
        match &self.command {
            Some(Commands::Check(args)) => args,
            None => &self.check,
        }
    }
}

/// Arguments for the diagnostics run.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Model artifact to check
    #[arg(short, long, env = "POSE_DOCTOR_MODEL", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Camera index to open
    #[arg(long, env = "POSE_DOCTOR_CAMERA", value_name = "INDEX")]
    pub camera: Option<usize>,

    /// Maximum wait for the first camera frame, in milliseconds
    #[arg(long, env = "POSE_DOCTOR_CAPTURE_TIMEOUT_MS", value_name = "MS")]
    pub capture_timeout: Option<u64>,

    /// Print an overall verdict and exit non-zero unless every check passed
    #[arg(long)]
    pub strict: bool,
}
