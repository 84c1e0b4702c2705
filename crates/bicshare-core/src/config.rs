//! Runtime configuration

use url::Url;

use crate::error::{UploadError, UploadResult};
use crate::tooltip::TooltipConfig;

/// Default submission endpoint: the character site's root.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080/";

#[derive(Debug, Clone, PartialEq)]
pub struct UploadConfig {
    /// Where the multipart form is posted
    pub endpoint: Url,
    pub tooltip: TooltipConfig,
}

impl UploadConfig {
    pub fn new(endpoint: &str) -> UploadResult<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| UploadError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(UploadError::InvalidEndpoint(format!(
                "{endpoint}: unsupported scheme {}",
                endpoint.scheme()
            )));
        }
        Ok(Self {
            endpoint,
            tooltip: TooltipConfig::default(),
        })
    }
}
