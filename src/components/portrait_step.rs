//! Portrait step
//!
//! Optional `.tga` portrait dropzone, then Previous / Finish.

use bicshare_core::DropzoneKind;
use bicshare_ui::{Button, ButtonVariant, Dropzone};
use dioxus::prelude::*;

use crate::context::use_wizard;

#[component]
pub fn PortraitStep(
    on_finish: EventHandler<()>,
    /// Disables Finish while a post is in flight
    submitting: bool,
    /// Last failed submission, if any
    #[props(default)]
    error: Option<String>,
) -> Element {
    let mut wizard = use_wizard();
    let portrait = wizard.read().selection().portrait().map(|p| p.name.clone());

    rsx! {
        div { id: "modal-step-1",
            p { strong { "Portrait (Optional)" } }
            p { "If you wish to upload a portrait, you must choose a 256x512 pixel TGA file." }

            Dropzone {
                kind: DropzoneKind::Portrait,
                idle_label: "Upload portrait here!".to_string(),
                active_label: "Drop portrait here!".to_string(),
                chosen: portrait,
                on_drop: move |blob| wizard.write().set_portrait(blob),
            }

            if let Some(err) = error {
                p { class: "upload-notice upload-notice--error", "⚠ {err}" }
            }

            hr {}
            div { class: "modal-step-buttons level",
                div { class: "level-left",
                    Button {
                        variant: ButtonVariant::Info,
                        disabled: submitting,
                        onclick: move |_| wizard.write().previous(),
                        "Previous"
                    }
                }
                div { class: "level-right",
                    Button {
                        variant: ButtonVariant::Success,
                        disabled: submitting,
                        onclick: move |_| on_finish.call(()),
                        if submitting { "Uploading..." } else { "Finish" }
                    }
                }
            }
        }
    }
}
