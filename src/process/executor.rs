use std::io::ErrorKind;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;
use crate::flags::Flags;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Exited(i32),
    Signaled(i32),
}

impl From<ExitStatus> for Termination {
    fn from(status: ExitStatus) -> Self {
        match status.signal() {
            Some(signo) => Termination::Signaled(signo),
            None => Termination::Exited(status.code().unwrap_or(0)),
        }
    }
}

#[derive(Clone)]
pub struct ProcessExecutor {
    quiet_mode: bool,
}

impl ProcessExecutor {
    pub fn new(flags: &Flags) -> Result<Self, ProcessError> {
        Ok(ProcessExecutor {
            quiet_mode: flags.is_set("quiet"),
        })
    }

    /// Spawns `argv[0]` with the remaining tokens as its argument vector and
    /// blocks until it ends. The child inherits the working directory and
    /// all three standard streams; PATH resolution is the OS's.
    pub fn spawn_and_wait(&self, argv: &[String]) -> Result<Termination, ProcessError> {
        let (program, args) = match argv.split_first() {
            Some(parts) => parts,
            None => return Err(ProcessError::Other("empty argument list".to_string())),
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProcessError::CommandNotFound(program.clone()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(ProcessError::PermissionDenied(program.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        // May block indefinitely; interactive semantics, no timeout.
        let status = child.wait()?;
        let termination = Termination::from(status);

        if let Termination::Signaled(signo) = termination {
            if !self.quiet_mode {
                eprintln!("msh: terminated by signal {}", signo);
            }
        }

        Ok(termination)
    }
}
