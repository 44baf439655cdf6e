use serde::{Deserialize, Serialize};
use url::Url;

use super::endpoint_url;
use crate::client::ApiRequest;

pub const FS_ENTRY_ENDPOINT: &str = "/fsEntry";

/// v2 lookup of the file-system-entry behind a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntryRequest {
    /// Path relative to the filespace root
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsEntryResponse {
    #[serde(default)]
    pub id: Option<String>,
}

impl ApiRequest for FsEntryRequest {
    type Response = FsEntryResponse;

    fn build_url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        endpoint_url(base_url, FS_ENTRY_ENDPOINT, &self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let request = FsEntryRequest {
            path: "path/to/file2[v1].pdf".to_string(),
        };
        let url = request.build_url("http://127.0.0.1:8280").unwrap();
        assert_eq!(url.path(), "/fsEntry");
        assert_eq!(url.query(), Some("path=path/to/file2[v1].pdf"));
    }

    #[test]
    fn test_response_tolerates_extra_fields() {
        let body = r#"{"id": "abc123", "type": "file", "size": 42}"#;
        let response: FsEntryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.id.as_deref(), Some("abc123"));

        let response: FsEntryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.id.is_none());
    }
}
