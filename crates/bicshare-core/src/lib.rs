//! bicshare Core Library
//!
//! State for the character upload wizard, independent of any UI framework.
//!
//! ## Overview
//!
//! A user drops a `.bic` character file, the wizard opens, and they pick a
//! server, exposure, expiration and optional build tags, then optionally a
//! `.tga` portrait. Finishing posts everything as one multipart form.
//!
//! ## Quick Start
//!
//! ```ignore
//! use bicshare_core::{FileBlob, HttpSubmitter, Server, Submitter, TagCategory, UploadWizard};
//!
//! let mut wizard = UploadWizard::new();
//! wizard.open_with_file(FileBlob::new("hero.bic", bytes));
//! wizard.selection_mut().set_server(Server::Sinfar);
//! wizard.toggle_tag(TagCategory::Type, "Tank");
//! wizard.next();
//!
//! let form = wizard.finish()?;
//! match HttpSubmitter::new(endpoint)?.submit(form).await {
//!     Ok(_) => wizard.complete(),
//!     Err(_) => wizard.submit_failed(),
//! };
//! ```

pub mod catalog;
pub mod config;
pub mod dropzone;
pub mod error;
pub mod modal;
pub mod selection;
pub mod submission;
pub mod tags;
pub mod tooltip;
pub mod wizard;

// Re-exports
pub use catalog::{Expiration, Exposure, Server, TagCatalog, TagCategory};
pub use config::{UploadConfig, DEFAULT_ENDPOINT};
pub use dropzone::{AcceptFilter, DropzoneKind};
pub use error::{UploadError, UploadResult};
pub use modal::{ModalState, Opacity, CLOSE_FADE_DELAY, OPEN_FADE_DELAY};
pub use selection::{FileBlob, SelectionState};
pub use submission::{FieldValue, FormField, HttpSubmitter, SubmissionForm, SubmitReceipt, Submitter};
pub use tags::TagSet;
pub use tooltip::{TooltipConfig, TooltipState};
pub use wizard::{StepController, UploadWizard, WizardStep};
