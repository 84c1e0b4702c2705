use bicshare_ui::TooltipProvider;
use dioxus::prelude::*;

use crate::context::use_upload_config;
use crate::pages::UploadPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the page-wide tooltip, then the upload page.
#[component]
pub fn App() -> Element {
    let config = use_upload_config();

    rsx! {
        style { {GLOBAL_STYLES} }
        TooltipProvider { config: config.tooltip.clone(),
            UploadPage {}
        }
    }
}
