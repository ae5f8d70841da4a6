use super::{Command, CommandError};
use crate::core::state::SessionState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Requests termination via the session flag; the loop exits on its next
    /// check. Trailing arguments are ignored.
    fn execute(&self, _args: &[String], state: &mut SessionState) -> Result<(), CommandError> {
        state.request_exit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::tests::lock_current_dir;
    use std::env;

    #[test]
    fn test_exit_sets_flag() {
        let _guard = lock_current_dir();
        let mut state = SessionState::new(env::temp_dir()).expect("state");
        let cmd = ExitCommand::new();
        assert!(cmd.execute(&[], &mut state).is_ok());
        assert!(!state.is_running());
    }

    #[test]
    fn test_trailing_arguments_are_ignored() {
        let _guard = lock_current_dir();
        let mut state = SessionState::new(env::temp_dir()).expect("state");
        let cmd = ExitCommand::new();
        let args = vec!["0".to_string(), "extra".to_string()];
        assert!(cmd.execute(&args, &mut state).is_ok());
        assert!(!state.is_running());
    }
}
