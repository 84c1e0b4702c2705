//! Upload page
//!
//! Character dropzone plus the wizard modal. The page owns the wizard
//! signal and drives the fade timers and the submission task.

use bicshare_core::{
    DropzoneKind, FileBlob, Submitter, UploadWizard, WizardStep, CLOSE_FADE_DELAY, OPEN_FADE_DELAY,
};
use bicshare_ui::{Dropzone, Modal};
use dioxus::prelude::*;

use crate::components::{MetadataStep, PortraitStep};
use crate::context::{use_submitter, Notice};

#[component]
pub fn UploadPage() -> Element {
    let submitter = use_submitter();
    let mut wizard = use_signal(UploadWizard::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    use_context_provider(|| wizard);

    let schedule_reveal = move |epoch: u64| {
        spawn(async move {
            tokio::time::sleep(OPEN_FADE_DELAY).await;
            wizard.write().reveal(epoch);
        });
    };

    let schedule_close = move |epoch: Option<u64>| {
        if let Some(epoch) = epoch {
            spawn(async move {
                tokio::time::sleep(CLOSE_FADE_DELAY).await;
                wizard.write().finish_close(epoch);
            });
        }
    };

    let on_character = move |blob: FileBlob| {
        notice.set(None);
        let epoch = wizard.write().open_with_file(blob);
        schedule_reveal(epoch);
    };

    let on_cancel = move |_: ()| {
        let epoch = wizard.write().cancel();
        schedule_close(epoch);
    };

    let on_finish = move |_: ()| {
        let result = wizard.write().finish();
        let form = match result {
            Ok(form) => form,
            Err(e) => {
                tracing::warn!("Cannot submit upload: {}", e);
                return;
            }
        };

        notice.set(None);
        let submitter = submitter.clone();
        spawn(async move {
            match submitter.submit(form).await {
                Ok(receipt) => {
                    tracing::info!(status = receipt.status, url = %receipt.final_url, "character uploaded");
                    notice.set(Some(Notice::Uploaded(receipt.final_url.to_string())));
                    let epoch = wizard.write().complete();
                    schedule_close(epoch);
                }
                Err(e) => {
                    tracing::error!("Upload failed: {}", e);
                    notice.set(Some(Notice::Failed(e.to_string())));
                    wizard.write().submit_failed();
                }
            }
        });
    };

    let state = wizard.read();
    let modal = state.modal().clone();
    let step = state.step();
    let submitting = state.is_submitting();
    let title = state
        .selection()
        .file()
        .map(|f| f.name.clone())
        .unwrap_or_default();
    drop(state);

    let failure = match notice() {
        Some(Notice::Failed(message)) => Some(message),
        _ => None,
    };

    rsx! {
        div { class: "upload-page",
            form { id: "upload-form", onsubmit: move |e| e.prevent_default(),
                Dropzone {
                    kind: DropzoneKind::Character,
                    idle_label: "Upload character here!".to_string(),
                    active_label: "Drop character here!".to_string(),
                    on_drop: on_character,
                }

                if let Some(Notice::Uploaded(url)) = notice() {
                    p { class: "upload-notice upload-notice--success",
                        "Character uploaded: "
                        span { class: "upload-notice__url", "{url}" }
                    }
                }

                Modal {
                    open: modal.is_open(),
                    opacity: modal.opacity(),
                    title: title,
                    on_cancel: on_cancel,

                    {match step {
                        WizardStep::SelectMetadata => rsx! {
                            MetadataStep { on_cancel: on_cancel }
                        },
                        WizardStep::SelectPortrait => rsx! {
                            PortraitStep {
                                on_finish: on_finish,
                                submitting: submitting,
                                error: failure,
                            }
                        },
                    }}
                }
            }
        }
    }
}
