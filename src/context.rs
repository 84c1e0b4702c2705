//! Shared state for the upload page.
//!
//! ## Usage
//!
//! ```ignore
//! // In the page component
//! let wizard = use_signal(UploadWizard::new);
//! use_context_provider(|| wizard);
//!
//! // In step components
//! let mut wizard = use_wizard();
//! wizard.write().next();
//! ```

use bicshare_core::{HttpSubmitter, UploadConfig, UploadWizard};
use dioxus::prelude::*;

/// Hook to access the launch configuration (endpoint, tooltip settings).
///
/// Provided once at launch from the command line arguments.
pub fn use_upload_config() -> UploadConfig {
    use_context::<UploadConfig>()
}

/// Hook to access the shared submitter. Built once at launch; clones share
/// one connection pool.
pub fn use_submitter() -> HttpSubmitter {
    use_context::<HttpSubmitter>()
}

/// Hook to access the wizard owned by the upload page.
pub fn use_wizard() -> Signal<UploadWizard> {
    use_context::<Signal<UploadWizard>>()
}

/// Outcome message shown after a submission attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    /// Upload accepted; carries the page the endpoint redirected to
    Uploaded(String),
    /// Upload failed; carries the error text
    Failed(String),
}
