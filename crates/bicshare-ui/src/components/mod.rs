//! Reusable UI components
//!
//! Class names follow the global stylesheet in the desktop app
//! (`dropzone`, `upload-modal`, `tooltip`, `btn-*`).

mod button;
mod dropzone;
mod modal;
mod select;
mod tag_checkboxes;
mod tooltip;

pub use button::*;
pub use dropzone::*;
pub use modal::*;
pub use select::*;
pub use tag_checkboxes::*;
pub use tooltip::*;
