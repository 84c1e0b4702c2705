//! bicshare UI Components
//!
//! Dioxus primitives the upload wizard is composed from:
//! - **Dropzone**: drag-and-drop or click-to-browse file input with an
//!   extension filter
//! - **Modal**: faded overlay dialog with background-click and Escape
//!   cancellation
//! - **Tooltip**: one page-wide tooltip provider and hover anchors
//! - **Button**, **LabeledSelect**, **TagCheckboxes**: form controls

pub mod components;

pub use components::*;
