//! Tooltip Components
//!
//! `TooltipProvider` is mounted once near the page root; every `Tooltip`
//! anchor below it shares its configuration and the single active-tooltip
//! slot, so at most one tooltip shows at a time.

use bicshare_core::{TooltipConfig, TooltipState};
use dioxus::prelude::*;

/// Shared tooltip context
#[derive(Clone, Copy)]
pub struct TooltipContext {
    config: Signal<TooltipConfig>,
    state: Signal<TooltipState>,
}

/// Mount the page-wide tooltip provider.
#[component]
pub fn TooltipProvider(
    #[props(default)] config: TooltipConfig,
    children: Element,
) -> Element {
    let config = use_signal(move || config);
    let state = use_signal(TooltipState::default);
    use_context_provider(|| TooltipContext { config, state });

    rsx! {
        div { id: "main-tooltip", class: "tooltip-root",
            {children}
        }
    }
}

/// Hook to access the tooltip context.
///
/// Panics if no `TooltipProvider` is mounted above the caller.
pub fn use_tooltip() -> TooltipContext {
    use_context::<TooltipContext>()
}

/// Wrap `children` so hovering shows `tip`.
///
/// `tip` is rendered as HTML when the provider's config enables it.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Tooltip {
///         id: "exposure",
///         tip: "Unlisted characters are only reachable by link.",
///         span { "Character Exposure:" }
///     }
/// }
/// ```
#[component]
pub fn Tooltip(
    /// Anchor id, unique on the page
    id: String,
    tip: String,
    children: Element,
) -> Element {
    let TooltipContext { config, mut state } = use_tooltip();
    let config = config.read().clone();
    let active = state.read().is_active(&id);

    let enter_id = id.clone();
    let leave_id = id.clone();
    let class = format!("tooltip {}", config.placement_class());
    let style = config.style();

    rsx! {
        span {
            class: "tooltip-anchor",
            "data-tip": "{tip}",
            onmouseenter: move |_| state.write().show(&enter_id),
            onmouseleave: move |_| state.write().hide(&leave_id),
            {children}
            if active {
                if config.html {
                    div { class: "{class}", style: "{style}", dangerous_inner_html: "{tip}" }
                } else {
                    div { class: "{class}", style: "{style}", "{tip}" }
                }
            }
        }
    }
}
