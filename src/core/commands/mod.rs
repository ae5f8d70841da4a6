use std::collections::BTreeMap;

mod cd;
mod exit;

pub use cd::CdCommand;
pub use exit::ExitCommand;

use crate::core::state::SessionState;
use crate::process::executor::ProcessExecutor;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    ExecutionError(String),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "command not found: {}", cmd),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::NotFound(cmd),
            other => CommandError::ProcessError(other),
        }
    }
}

/// A command executed in-process, with direct access to the session state.
pub trait Command {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], state: &mut SessionState) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, state),
            CommandType::Exit(cmd) => cmd.execute(args, state),
        }
    }
}

/// Dispatches a parsed argument list: built-ins run in-process, everything
/// else goes to the process launcher.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(flags: &crate::flags::Flags) -> Result<Self, CommandError> {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("exit".to_string(), CommandType::Exit(ExitCommand::new()));
        commands.insert("quit".to_string(), CommandType::Exit(ExitCommand::new()));

        Ok(Self {
            commands,
            process_executor: ProcessExecutor::new(flags)?,
        })
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        state: &mut SessionState,
    ) -> Result<(), CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            cmd.execute(args, state)
        } else {
            let mut argv = Vec::with_capacity(args.len() + 1);
            argv.push(command.to_string());
            argv.extend(args.iter().cloned());
            self.process_executor.spawn_and_wait(&argv)?;
            Ok(())
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }
}
