//! Slack channel naming.

use serde::{Serialize, Serializer};

/// Channel names as are visible in the Slack UI, with or without the leading
/// hash.
///
/// `chat.postMessage` accepts a bare name in place of a channel ID, so no
/// lookup is needed before posting.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChannelName(pub String);

impl ChannelName {
    /// Channel names can't contain hashes, so stripping them lets callers
    /// supply (or not) a leading hash.
    pub fn normalised(&self) -> &str {
        self.0.trim_start_matches('#')
    }
}

impl Serialize for ChannelName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.normalised())
    }
}
