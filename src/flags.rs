use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag {
                short: "-h".to_string(),
                long: "--help".to_string(),
                description: "Print this help message".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "version".to_string(),
            Flag {
                short: "-v".to_string(),
                long: "--version".to_string(),
                description: "Show version information".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "quiet".to_string(),
            Flag {
                short: "-q".to_string(),
                long: "--quiet".to_string(),
                description: "Suppress informational output".to_string(),
                takes_value: false,
                value: None,
            },
        );

        flags.insert(
            "dir".to_string(),
            Flag {
                short: "-C".to_string(),
                long: "--dir".to_string(),
                description: "Default working directory (also the cd target when none is given)"
                    .to_string(),
                takes_value: true,
                value: None,
            },
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            let mut matched = false;

            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    matched = true;
                    if flag.takes_value {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(ShellError::FlagError(format!(
                                "flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                    break;
                }
            }

            if !matched {
                return Err(ShellError::FlagError(format!("unknown flag: {}", arg)));
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: msh [OPTIONS]");
        println!("\nOptions:");
        for flag in self.flags.values() {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_boolean_flags() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--version"])).expect("parse");
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("version"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_parse_dir_flag_with_value() {
        let mut flags = Flags::new();
        flags.parse(&args(&["--dir", "/tmp"])).expect("parse");
        assert_eq!(flags.get_value("dir").map(String::as_str), Some("/tmp"));
    }

    #[test]
    fn test_dir_flag_missing_value_is_an_error() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["-C"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_unknown_flag_is_an_error() {
        let mut flags = Flags::new();
        let result = flags.parse(&args(&["--frobnicate"]));
        assert!(matches!(result, Err(ShellError::FlagError(_))));
    }
}
