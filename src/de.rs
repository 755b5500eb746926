//! Deserialisation helpers for Slack's `ok` flag.
//!
//! Slack responses share a shape whichever way a call went, so pinning `ok`
//! is what lets [crate::slack::api::APIResult] pick the right variant.

use serde::de::{Deserialize, Deserializer, Error};

fn only<'a, D>(deserializer: D, expected: bool) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    let b = bool::deserialize(deserializer)?;

    if b == expected {
        Ok(b)
    } else {
        Err(Error::custom(format!("invalid bool: {}", b)))
    }
}

pub fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    only(deserializer, true)
}

pub fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    only(deserializer, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Accepted {
        #[allow(dead_code)]
        #[serde(deserialize_with = "only_true")]
        ok: bool,
    }

    #[derive(Debug, serde::Deserialize)]
    struct Rejected {
        #[allow(dead_code)]
        #[serde(deserialize_with = "only_false")]
        ok: bool,
        error: String,
    }

    #[test]
    fn test_only_true() {
        assert!(serde_json::from_str::<Accepted>(r#"{"ok": true, "ts": "1.2"}"#).is_ok());
        assert!(serde_json::from_str::<Accepted>(r#"{"ok": false}"#).is_err());
        assert!(serde_json::from_str::<Accepted>(r#"{"ok": "true"}"#).is_err());
    }

    #[test]
    fn test_only_false() {
        let res = serde_json::from_str::<Rejected>(r#"{"ok": false, "error": "invalid_auth"}"#);
        assert_eq!(res.unwrap().error, "invalid_auth");

        assert!(serde_json::from_str::<Rejected>(r#"{"ok": true, "error": "x"}"#).is_err());
    }
}
