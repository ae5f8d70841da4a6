use crate::core::tokenizer::tokenize;
use crate::error::ShellError;

pub(crate) trait CommandHandler {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError>;
}

impl CommandHandler for super::Shell {
    fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let argv = tokenize(line);

        // An empty argument list is a no-op cycle, not an error.
        let (command, args) = match argv.split_first() {
            Some(parts) => parts,
            None => return Ok(()),
        };

        self.executor
            .execute(command, args, &mut self.state)
            .map_err(ShellError::from)
    }
}
