use super::{Command, CommandError};
use crate::core::state::SessionState;
use crate::path::PathExpander;
use std::env;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<(), CommandError> {
        let target = match args.first() {
            Some(arg) => self
                .path_expander
                .expand(arg)
                .map_err(|e| CommandError::ExecutionError(format!("cd: {}", e)))?,
            None => state.default_dir().to_path_buf(),
        };

        env::set_current_dir(&target).map_err(|e| {
            CommandError::ExecutionError(format!("cd: {}: {}", target.display(), e))
        })?;

        // The stored path comes from getcwd, not from the argument, so
        // relative components and symlinks end up resolved.
        state.refresh_current_dir()?;
        Ok(())
    }
}
