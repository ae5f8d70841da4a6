use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Per-session state. Owned by the shell loop and handed to whichever
/// component needs to read or update it, never stored globally.
#[derive(Debug, Clone)]
pub struct SessionState {
    current_dir: PathBuf,
    default_dir: PathBuf,
    running: bool,
}

impl SessionState {
    /// Enters `default_dir` and captures the resulting working directory.
    /// Failing to enter the default directory is fatal for the session.
    pub fn new(default_dir: PathBuf) -> io::Result<Self> {
        env::set_current_dir(&default_dir)?;
        let current_dir = env::current_dir()?;
        Ok(Self {
            current_dir,
            default_dir,
            running: true,
        })
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn default_dir(&self) -> &Path {
        &self.default_dir
    }

    /// Re-reads the working directory from the OS. The stored path always
    /// reflects what `getcwd` reports, so `..` and symlinks come back
    /// resolved rather than as typed.
    pub fn refresh_current_dir(&mut self) -> io::Result<()> {
        self.current_dir = env::current_dir()?;
        Ok(())
    }

    pub fn request_exit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::tests::lock_current_dir;

    #[test]
    fn test_new_enters_default_dir() -> io::Result<()> {
        let _guard = lock_current_dir();
        let temp = env::temp_dir();
        let state = SessionState::new(temp.clone())?;
        assert_eq!(state.current_dir(), env::current_dir()?.as_path());
        assert_eq!(state.default_dir(), temp.as_path());
        assert!(state.is_running());
        Ok(())
    }

    #[test]
    fn test_new_fails_for_missing_default_dir() {
        let _guard = lock_current_dir();
        let result = SessionState::new(PathBuf::from("/no/such/dir/msh_state_test"));
        assert!(result.is_err());
    }

    #[test]
    fn test_request_exit_flips_running() -> io::Result<()> {
        let _guard = lock_current_dir();
        let mut state = SessionState::new(env::temp_dir())?;
        assert!(state.is_running());
        state.request_exit();
        assert!(!state.is_running());
        Ok(())
    }
}
