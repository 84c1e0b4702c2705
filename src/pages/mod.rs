//! Page components for bicshare.

mod upload;

pub use upload::UploadPage;
