//! Says hello in Slack.
//!
//! Reads `$SLACK_API_TOKEN` (optionally from a `.env` file), posts a fixed
//! greeting to `#bot-test`, and logs what Slack echoed back.

use config::Config;
use dotenvy::dotenv;
use error::Failure;
use notifier::Notifier;
use slack::message::PostedMessage;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[cfg(test)]
#[macro_use]
extern crate quickcheck;

mod config;
mod de;
mod error;
mod notifier;
mod slack;

/// Application entrypoint. Initialises tracing, checks for environment
/// variables, and sends the message.
#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let res = match Config::from_env() {
        Ok(config) => run(&config).await,
        Err(e) => Err(e.into()),
    };

    if report(&res) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Construct the client and send the message, once.
async fn run(config: &Config) -> Result<PostedMessage, Failure> {
    let notifier = Notifier::new(config)?;

    Ok(notifier.send_message().await?)
}

/// Log the outcome, returning whether the process should exit successfully.
/// Only configuration problems fail the process.
fn report(res: &Result<PostedMessage, Failure>) -> bool {
    match res {
        Ok(msg) => {
            info!("Message sent successfully: {}", msg.text);
            true
        }
        Err(e) => {
            error!("{}", e);
            !e.is_fatal()
        }
    }
}
