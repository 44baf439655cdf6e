use std::fmt;

use serde::{Deserialize, Serialize};

pub const LINK_SCHEME: &str = "lucid";

/// A shareable reference to a file in the filespace.
///
/// Treated as opaque: v3 links come straight from the daemon and are
/// never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DirectLink(String);

impl DirectLink {
    /// Builds the v2 form `lucid://{filespace}/file/{entry_id}`
    pub fn from_entry_id(filespace: &str, entry_id: &str) -> Self {
        Self(format!("{}://{}/file/{}", LINK_SCHEME, filespace, entry_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for DirectLink {
    fn from(link: String) -> Self {
        Self(link)
    }
}

impl AsRef<str> for DirectLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_entry_id() {
        let link = DirectLink::from_entry_id("myfilespace", "abc123");
        assert_eq!(link.as_str(), "lucid://myfilespace/file/abc123");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let link = DirectLink::from("lucid://x/y/z".to_string());
        assert_eq!(serde_json::to_string(&link).unwrap(), "\"lucid://x/y/z\"");
    }
}
