//! Send plaintext messages to a Slack channel.

use super::{api::*, auth::SlackAccessToken, channel::ChannelName, error::SlackError};
use serde::{Deserialize, Serialize};

/// The channel every message is posted to.
pub const CHANNEL: &str = "bot-test";

/// The text of every message.
pub const TEXT: &str = "Hello from SLACK BOT!";

/// A single message bound for Slack. It lives only for the duration of the
/// call that posts it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundMessage {
    pub channel: ChannelName,
    pub text: String,
}

impl Default for OutboundMessage {
    fn default() -> Self {
        OutboundMessage {
            channel: ChannelName(CHANNEL.into()),
            text: TEXT.into(),
        }
    }
}

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelName,
    text: &'a str,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_true")]
    ok: bool,
    message: PostedMessage,
}

/// The message as Slack recorded it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PostedMessage {
    pub text: String,
}

impl SlackClient {
    /// Post a message in a channel. Makes exactly one request.
    pub async fn post_message(
        &self,
        msg: &OutboundMessage,
        token: &SlackAccessToken,
    ) -> Result<PostedMessage, SlackError> {
        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage", token)
            .json(&MessageRequest {
                channel: &msg.channel,
                text: &msg.text,
            })
            .send()
            .await?
            .json()
            .await?;

        res.into_result().map(|res| res.message)
    }
}
