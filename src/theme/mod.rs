//! Visual theme for bicshare.

mod styles;

pub use styles::GLOBAL_STYLES;
