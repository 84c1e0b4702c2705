//! Modal Component
//!
//! Faded overlay dialog. The caller owns the open/opacity state (see
//! `bicshare_core::ModalState`); this component only renders it and reports
//! cancellation.

use bicshare_core::Opacity;
use dioxus::prelude::*;

/// Overlay dialog with a card body.
///
/// Clicking the backdrop or pressing Escape calls `on_cancel`. Clicks inside
/// the card do not reach the backdrop.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Modal {
///         open: modal.is_open(),
///         opacity: modal.opacity(),
///         title: file_name,
///         on_cancel: move |_| cancel(),
///         MetadataStep { }
///     }
/// }
/// ```
#[component]
pub fn Modal(
    /// Whether the modal is mounted
    open: bool,
    /// Current fade state of modal and backdrop
    opacity: Opacity,
    /// Card header text
    #[props(default)]
    title: String,
    /// Background click / Escape handler
    on_cancel: EventHandler<()>,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }

    let style = fade_style(opacity);

    rsx! {
        div {
            class: "modal-backdrop",
            style: "{style}",
            tabindex: "0",
            onmounted: move |e| async move {
                let _ = e.set_focus(true).await;
            },
            onclick: move |_| on_cancel.call(()),
            onkeydown: move |e: KeyboardEvent| {
                if e.key() == Key::Escape {
                    on_cancel.call(());
                }
            },

            div {
                class: "upload-modal card",
                style: "{style}",
                onclick: move |e| e.stop_propagation(),

                header { class: "card-header",
                    p { class: "card-header-title", "{title}" }
                }
                div { class: "card-content",
                    {children}
                }
            }
        }
    }
}

fn fade_style(opacity: Opacity) -> String {
    format!("opacity: {}; transition: all 0.3s ease-in-out;", opacity.css())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_style_tracks_opacity() {
        assert_eq!(fade_style(Opacity::Hidden), "opacity: 0; transition: all 0.3s ease-in-out;");
        assert!(fade_style(Opacity::Visible).starts_with("opacity: 1;"));
    }
}
