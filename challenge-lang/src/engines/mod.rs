use crate::Engine;

pub(crate) mod haskell;
pub(crate) mod javascript;
pub(crate) mod python;
pub(crate) mod shell;

/// The command to use for an engine, read from the environment.
///
/// `var` overrides the program, `{var}_FLAGS` adds extra arguments before the entry file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CommandConfiguration {
    pub command: String,
    pub flags: Vec<String>,
}

impl CommandConfiguration {
    /// Get the configuration of the command from the environment variables.
    pub fn from_env(var: &str, default: &str) -> CommandConfiguration {
        let command = std::env::var(var).unwrap_or_else(|_| default.into());
        let flags_var = format!("{}_FLAGS", var);
        let flags = std::env::var(&flags_var).unwrap_or_default();
        let flags = match shell_words::split(&flags) {
            Ok(flags) => flags,
            Err(e) => {
                warn!("Ignoring invalid ${}: {}", flags_var, e);
                vec![]
            }
        };
        CommandConfiguration { command, flags }
    }

    /// Add an argument after the flags, right before the entry file.
    pub fn arg<S: Into<String>>(mut self, arg: S) -> CommandConfiguration {
        self.flags.push(arg.into());
        self
    }

    /// Build the engine that runs `entry_file` with this command.
    pub fn engine(self, name: &'static str, entry_file: &'static str) -> Engine {
        Engine::external(name, entry_file, self.command, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn test_from_env_default() {
        let config = CommandConfiguration::from_env("CHALLENGE_TEST_SURELY_UNSET", "prog");
        assert_that!(config.command).is_equal_to("prog".to_string());
        assert_that!(config.flags).is_empty();
    }

    #[test]
    fn test_from_env_override() {
        std::env::set_var("CHALLENGE_TEST_OVERRIDE", "/opt/prog");
        std::env::set_var("CHALLENGE_TEST_OVERRIDE_FLAGS", "-x 'a b'");
        let config = CommandConfiguration::from_env("CHALLENGE_TEST_OVERRIDE", "prog");
        assert_that!(config.command).is_equal_to("/opt/prog".to_string());
        assert_that!(config.flags).is_equal_to(vec!["-x".to_string(), "a b".to_string()]);
    }
}
