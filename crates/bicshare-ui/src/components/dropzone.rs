//! Dropzone Component
//!
//! A label wrapping a hidden file input: clicking browses, dragging files
//! over highlights the zone, dropping reads the first accepted file.

use std::path::Path;
use std::sync::Arc;

use bicshare_core::{DropzoneKind, FileBlob};
use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;

/// Drag-and-drop / click-to-browse file zone.
///
/// Only files matching the kind's accept filter are reported; others are
/// ignored without feedback.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Dropzone {
///         kind: DropzoneKind::Character,
///         idle_label: "Upload character here!".to_string(),
///         active_label: "Drop character here!".to_string(),
///         on_drop: move |blob| wizard.write().open_with_file(blob),
///     }
/// }
/// ```
#[component]
pub fn Dropzone(
    /// Which file type this zone accepts
    kind: DropzoneKind,
    /// Prompt shown while idle
    idle_label: String,
    /// Prompt shown while files hover the zone
    active_label: String,
    /// Name of the file already chosen, shown instead of the idle prompt
    #[props(default)]
    chosen: Option<String>,
    /// Called with the first accepted file
    on_drop: EventHandler<FileBlob>,
) -> Element {
    let mut drag_active = use_signal(|| false);
    let accept = kind.accept();
    let accept_attr = accept.as_attr().to_string();

    let deliver = move |files: Arc<dyn FileEngine>| {
        spawn(async move {
            if let Some(blob) = first_accepted(kind, files).await {
                on_drop.call(blob);
            }
        });
    };

    let label = if drag_active() {
        active_label.clone()
    } else {
        chosen.clone().unwrap_or_else(|| idle_label.clone())
    };

    rsx! {
        label {
            class: if drag_active() { "dropzone dropzone--active" } else { "dropzone" },
            ondragenter: move |e: DragEvent| {
                e.prevent_default();
                drag_active.set(true);
            },
            ondragover: move |e: DragEvent| {
                e.prevent_default();
                drag_active.set(true);
            },
            ondragleave: move |_| drag_active.set(false),
            ondrop: move |e: DragEvent| {
                e.prevent_default();
                drag_active.set(false);
                if let Some(files) = e.files() {
                    deliver(files);
                }
            },

            input {
                class: "dropzone__input",
                r#type: "file",
                name: kind.field_name(),
                accept: "{accept_attr}",
                multiple: false,
                onchange: move |e: FormEvent| {
                    if let Some(files) = e.files() {
                        deliver(files);
                    }
                },
            }

            p { class: "dropzone__prompt",
                span { class: "dropzone__icon", "⇪" }
                " {label}"
            }
        }
    }
}

/// Read the first file that passes the kind's accept filter.
async fn first_accepted(kind: DropzoneKind, files: Arc<dyn FileEngine>) -> Option<FileBlob> {
    let path = kind.accept().filter(files.files()).into_iter().next()?;
    match files.read_file(&path).await {
        Some(bytes) => Some(FileBlob::new(file_name_of(&path), bytes)),
        None => {
            tracing::warn!(file = %path, "could not read dropped file");
            None
        }
    }
}

/// Desktop file engines report full paths; the form only carries the name.
pub fn file_name_of(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_directories() {
        assert_eq!(file_name_of("/home/player/nwn/localvault/hero.bic"), "hero.bic");
        assert_eq!(file_name_of("hero.tga"), "hero.tga");
    }
}
