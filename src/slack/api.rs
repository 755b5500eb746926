//! Type definitions and helpers for the Slack API.

use super::{auth::*, error::SlackError};
use serde::Deserialize;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// Identifies us to Slack alongside the access token.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A client bound to one API base URL, holding a connection pool internally
/// as per [reqwest::Client].
///
/// Each `SlackClient` owns its own [reqwest::Client]. Certificate
/// verification is left at reqwest's default, which is on.
pub struct SlackClient {
    base: String,
    http: reqwest::Client,
}

impl SlackClient {
    /// Build a client for `base`, which should not have a trailing slash.
    pub fn new(base: String) -> Result<Self, SlackError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(SlackError::ClientBuildFailed)?;

        Ok(SlackClient { base, http })
    }

    /// Create a POST request to any Slack API endpoint, handling authentication.
    pub fn post<T: ToString>(&self, path: T, token: &SlackAccessToken) -> reqwest::RequestBuilder {
        self.http
            .post(self.base.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "message": { "text": "Hello" }
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

impl<T> APIResult<T> {
    pub fn into_result(self) -> Result<T, SlackError> {
        match self {
            APIResult::Ok(x) => Ok(x),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}

/// The universal response in case of an unsuccessful request.
// `ok` is pinned on both sides so that an error body can never be mistaken
// for a success, and vice versa.
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "crate::de::only_false")]
    ok: bool,
    pub error: String,
}
