//! Posts the bot's greeting to Slack.

use crate::{
    config::Config,
    slack::{
        api::SlackClient,
        auth::SlackAccessToken,
        error::SlackError,
        message::{OutboundMessage, PostedMessage},
    },
};
use tracing::debug;

/// A Slack client bound to a token and the one message it sends.
pub struct Notifier {
    client: SlackClient,
    token: SlackAccessToken,
    message: OutboundMessage,
}

impl Notifier {
    pub fn new(config: &Config) -> Result<Self, SlackError> {
        Ok(Notifier {
            client: SlackClient::new(config.api_base.clone())?,
            token: config.token.clone(),
            message: OutboundMessage::default(),
        })
    }

    /// Post the message once. Failures are returned rather than retried.
    pub async fn send_message(&self) -> Result<PostedMessage, SlackError> {
        debug!("Posting to #{}", self.message.channel.normalised());

        self.client.post_message(&self.message, &self.token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn config(api_base: String) -> Config {
        Config {
            token: SlackAccessToken("xoxb-foo".into()),
            api_base,
        }
    }

    #[tokio::test]
    async fn test_sends_exactly_once() {
        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-foo")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({
                "channel": "bot-test",
                "text": "Hello from SLACK BOT!"
            })))
            .with_body(r#"{"ok": true, "message": {"text": "Hello from SLACK BOT!"}}"#)
            .expect(1)
            .create_async()
            .await;

        let notifier = Notifier::new(&config(srv.url())).unwrap();
        let posted = notifier.send_message().await.unwrap();

        mock.assert_async().await;
        assert_eq!(posted.text, "Hello from SLACK BOT!");
    }

    #[tokio::test]
    async fn test_reports_echoed_text() {
        let mut srv = mockito::Server::new_async().await;

        // Slack may rewrite text, e.g. escaping, so we report what it echoes.
        let mock = srv
            .mock("POST", "/chat.postMessage")
            .with_body(r#"{"ok": true, "message": {"text": "Hello from SLACK BOT! &amp;"}}"#)
            .create_async()
            .await;

        let notifier = Notifier::new(&config(srv.url())).unwrap();
        let posted = notifier.send_message().await.unwrap();

        mock.assert_async().await;
        assert_eq!(posted.text, "Hello from SLACK BOT! &amp;");
    }

    #[tokio::test]
    async fn test_bad_auth() {
        let mut srv = mockito::Server::new_async().await;

        let mock = srv
            .mock("POST", "/chat.postMessage")
            .with_body(r#"{"ok": false, "error": "invalid_auth"}"#)
            .expect(1)
            .create_async()
            .await;

        let notifier = Notifier::new(&config(srv.url())).unwrap();
        let err = notifier.send_message().await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.to_string(), "Slack API returned error: invalid_auth");
    }

    #[tokio::test]
    async fn test_unreachable() {
        // Bind then drop to find a port nothing is listening on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();

        let notifier = Notifier::new(&config(format!("http://{}", addr))).unwrap();
        let err = notifier.send_message().await.unwrap_err();

        assert!(matches!(err, SlackError::APIRequestFailed(_)));
    }
}
