//! Process configuration, read from the environment.
//!
//! - `SLACK_API_TOKEN` (required): the bot's access token.
//!
//! The API base is always [API_BASE]; only tests point a [Config] elsewhere.

use crate::slack::{api::API_BASE, auth::SlackAccessToken};
use std::{env, fmt};

pub struct Config {
    pub token: SlackAccessToken,
    pub api_base: String,
}

/// Why the environment couldn't be turned into a [Config].
#[derive(Debug)]
pub enum ConfigError {
    MissingToken,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingToken => {
                write!(f, "No $SLACK_API_TOKEN environment variable found")
            }
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build a config from any key-value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("SLACK_API_TOKEN")
            .map(|x| x.trim().to_owned())
            .filter(|x| !x.is_empty())
            .map(SlackAccessToken)
            .ok_or(ConfigError::MissingToken)?;

        Ok(Config {
            token,
            api_base: API_BASE.to_owned(),
        })
    }
}
