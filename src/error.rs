use crate::{config::ConfigError, slack::error::SlackError};
use std::fmt;

/// Sum type representing every possible unexceptional fail state.
#[derive(Debug)]
pub enum Failure {
    /// Nothing was sent; the process can't do anything useful.
    Config(ConfigError),
    /// A send was attempted and didn't go through.
    Slack(SlackError),
}

impl Failure {
    /// Whether the process should exit unsuccessfully. Failed sends are
    /// reported but don't fail the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Failure::Config(_))
    }
}

impl From<ConfigError> for Failure {
    fn from(e: ConfigError) -> Self {
        Failure::Config(e)
    }
}

impl From<SlackError> for Failure {
    fn from(e: SlackError) -> Self {
        Failure::Slack(e)
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::Config(e) => write!(f, "Invalid configuration: {}", e),
            Failure::Slack(e) => write!(f, "Error sending message: {}", e),
        }
    }
}
