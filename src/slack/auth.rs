//! Helpers around Slack's use of OAuth Bearer Authentication.

/// A newtype wrapper around Slack access tokens.
// Not `Debug`: the token must never reach logs.
#[derive(PartialEq, Eq, Clone)]
pub struct SlackAccessToken(pub String);

/// Convert a Slack access token to a `Bearer` `Authorization` header value.
///
/// ```
/// let token = SlackAccessToken("xoxb-foo".into());
/// assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
/// ```
pub fn to_auth_header_val(t: &SlackAccessToken) -> String {
    format!("Bearer {}", t.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_auth_header_val() {
        let token = SlackAccessToken("xoxb-foo".into());
        assert_eq!(to_auth_header_val(&token), "Bearer xoxb-foo");
    }

    quickcheck! {
        fn test_auth_header_val_wraps_token(x: String) -> bool {
            to_auth_header_val(&SlackAccessToken(x.clone())).strip_prefix("Bearer ") == Some(x.as_str())
        }
    }
}
