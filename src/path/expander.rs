use crate::error::ShellError;
use std::path::{Path, PathBuf};

/// Expands a leading `~` to the home directory. Anything else passes
/// through untouched; there is no globbing and no variable expansion.
#[derive(Clone)]
pub struct PathExpander;

impl Default for PathExpander {
    fn default() -> Self {
        Self::new()
    }
}

impl PathExpander {
    pub fn new() -> Self {
        Self
    }

    pub fn expand(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.starts_with('~') {
            self.expand_tilde(path)
        } else {
            Ok(Path::new(path).to_path_buf())
        }
    }

    fn expand_tilde(&self, path: &str) -> Result<PathBuf, ShellError> {
        if path.len() == 1 {
            return dirs::home_dir().ok_or(ShellError::HomeDirNotFound);
        }

        match path[1..].strip_prefix('/') {
            Some(rest) => {
                let mut home = dirs::home_dir().ok_or(ShellError::HomeDirNotFound)?;
                for part in rest.split('/') {
                    if !part.is_empty() {
                        home.push(part);
                    }
                }
                Ok(home)
            }
            // "~user" forms are not supported; treat them literally.
            None => Ok(Path::new(path).to_path_buf()),
        }
    }
}
