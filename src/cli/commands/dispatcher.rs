//! Command dispatching.
//!
//! [`CommandDispatcher`] turns a parsed [`Cli`] into the command it names and
//! runs it. A bare invocation runs `check` with the top-level options.

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::check::CheckCommand;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning the exit status to report.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit code.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Routes parsed arguments to a command rooted at one project directory.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Directory that relative config and model paths resolve against.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Build the command selected by `cli`.
    pub fn command_for(&self, cli: &Cli) -> Box<dyn Command> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                tracing::debug!("Dispatching check subcommand");
                Box::new(CheckCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    args.clone(),
                ))
            }
            None => {
                tracing::debug!("No subcommand given, running check");
                Box::new(CheckCommand::new(
                    &self.project_root,
                    cli.config.clone(),
                    cli.check.clone(),
                ))
            }
        }
    }

    /// Build and execute the selected command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.command_for(cli).execute(ui)
    }
}
