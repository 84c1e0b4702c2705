//! Wizard step components for bicshare.

mod metadata_step;
mod portrait_step;

pub use metadata_step::MetadataStep;
pub use portrait_step::PortraitStep;
