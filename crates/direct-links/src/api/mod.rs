//! Endpoints of the daemon's local API, one module per dialect.

pub mod direct_link;
pub mod fs_entry;

pub use direct_link::{DirectLinkRequest, DirectLinkResponse};
pub use fs_entry::{FsEntryRequest, FsEntryResponse};

use url::Url;

use crate::path::encode_path;

/// `{base}{endpoint}?path={encoded}` with the path encoded by our own rules
pub(crate) fn endpoint_url(
    base_url: &str,
    endpoint: &str,
    relative_path: &str,
) -> Result<Url, url::ParseError> {
    Url::parse(&format!(
        "{}{}?path={}",
        base_url.trim_end_matches('/'),
        endpoint,
        encode_path(relative_path)
    ))
}
