use std::path::PathBuf;

mod executor;

use crate::{
    core::{commands::CommandExecutor, state::SessionState},
    error::ShellError,
    flags::Flags,
    highlight::OutputHighlighter,
    input::{LineReader, ReadOutcome},
};

use executor::CommandHandler;

pub struct Shell {
    pub(crate) reader: LineReader,
    pub(crate) state: SessionState,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: OutputHighlighter,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let default_dir = match flags.get_value("dir") {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?,
        };

        // Refusing to start in an unknown directory beats running in one.
        let state = SessionState::new(default_dir)?;

        let executor = CommandExecutor::new(&flags)?;
        let reader = LineReader::for_stdin()?;
        let highlighter = OutputHighlighter::new();

        Ok(Shell {
            reader,
            state,
            executor,
            highlighter,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        self.install_interrupt_reminder()?;

        while self.state.is_running() {
            let prompt = format!("{} > ", self.state.current_dir().display());
            match self.reader.read_line(&prompt) {
                Ok(ReadOutcome::Line(line)) => {
                    if let Err(e) = self.execute_line(&line) {
                        eprintln!("{}", self.highlighter.error_line(&e.to_string()));
                    }
                }
                Ok(ReadOutcome::Interrupted) => {
                    if !self.flags.is_set("quiet") {
                        println!("^C");
                    }
                }
                // End of input ends the session instead of spinning on
                // empty reads.
                Ok(ReadOutcome::Eof) => self.state.request_exit(),
                Err(e) => {
                    eprintln!("{}", self.highlighter.error_line(&e.to_string()));
                }
            }
        }
        Ok(())
    }

    fn install_interrupt_reminder(&self) -> Result<(), ShellError> {
        let quiet = self.flags.is_set("quiet");
        let notice = self.highlighter.notice("use 'exit' or 'quit' to leave msh");
        ctrlc::set_handler(move || {
            if !quiet {
                println!("\n{}", notice);
            }
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::tests::lock_current_dir;
    use std::env;

    fn test_shell() -> Shell {
        let mut flags = Flags::new();
        let dir = env::temp_dir().to_string_lossy().to_string();
        flags
            .parse(&["--dir".to_string(), dir])
            .expect("parse flags");
        Shell::new(flags).expect("shell")
    }

    #[test]
    fn test_empty_and_blank_lines_dispatch_nothing() {
        let _guard = lock_current_dir();
        let mut shell = test_shell();
        assert!(shell.execute_line("").is_ok());
        assert!(shell.execute_line("    ").is_ok());
        assert!(shell.state.is_running());
    }

    #[test]
    fn test_exit_line_requests_termination() {
        let _guard = lock_current_dir();
        let mut shell = test_shell();
        assert!(shell.execute_line("exit").is_ok());
        assert!(!shell.state.is_running());
    }

    #[test]
    fn test_quit_with_arguments_requests_termination() {
        let _guard = lock_current_dir();
        let mut shell = test_shell();
        assert!(shell.execute_line("quit now").is_ok());
        assert!(!shell.state.is_running());
    }

    #[test]
    fn test_unknown_command_keeps_the_session_running() {
        let _guard = lock_current_dir();
        let mut shell = test_shell();
        assert!(shell.execute_line("msh_no_such_program_xyz").is_err());
        assert!(shell.state.is_running());
    }

    #[test]
    fn test_cd_line_moves_the_session() {
        let _guard = lock_current_dir();
        let mut shell = test_shell();
        let target = env::temp_dir();
        let line = format!("cd {}", target.to_string_lossy());
        assert!(shell.execute_line(&line).is_ok());
        assert_eq!(
            shell.state.current_dir(),
            env::current_dir().expect("cwd").as_path()
        );
    }
}
