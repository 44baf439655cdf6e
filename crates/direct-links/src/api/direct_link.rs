use serde::{Deserialize, Serialize};
use url::Url;

use super::endpoint_url;
use crate::client::ApiRequest;

pub const DIRECT_LINK_ENDPOINT: &str = "/fsEntry/direct-link";

/// v3 request for a ready-made direct link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectLinkRequest {
    /// Path relative to the filespace root
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectLinkResponse {
    #[serde(default)]
    pub result: Option<String>,
}

impl ApiRequest for DirectLinkRequest {
    type Response = DirectLinkResponse;

    fn build_url(&self, base_url: &str) -> Result<Url, url::ParseError> {
        endpoint_url(base_url, DIRECT_LINK_ENDPOINT, &self.path)
    }
}
