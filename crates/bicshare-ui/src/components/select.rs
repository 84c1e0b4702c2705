//! Labeled select box

use dioxus::prelude::*;

use super::tooltip::Tooltip;

/// A `(wire value, label)` option
pub type SelectOption = (&'static str, &'static str);

/// Build options from `(as_str, label)` pairs of an enum's `ALL` list.
pub fn select_options<T: Copy>(
    all: &[T],
    wire: impl Fn(&T) -> &'static str,
    label: impl Fn(&T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter().map(|item| (wire(item), label(item))).collect()
}

/// Inline label followed by a small select.
///
/// `on_change` receives the wire value of the chosen option. When `tip` is
/// set, hovering the label shows it through the page tooltip.
#[component]
pub fn LabeledSelect(
    /// Anchor id for the label tooltip
    id: String,
    label: String,
    #[props(default)]
    tip: Option<String>,
    /// Wire value of the selected option
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "level-item",
            if let Some(tip) = tip.as_ref() {
                Tooltip { id: id.clone(), tip: tip.clone(),
                    span { class: "modal-select-label", "{label}" }
                }
            } else {
                span { class: "modal-select-label", "{label}" }
            }
            div { class: "select is-small",
                select {
                    id: "{id}",
                    class: "modal-select",
                    value: "{value}",
                    onchange: move |e: FormEvent| on_change.call(e.value()),
                    for (wire, text) in options.iter().copied() {
                        option {
                            key: "{wire}",
                            value: wire,
                            selected: wire == value,
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bicshare_core::{Expiration, Server};

    #[test]
    fn options_follow_declared_order() {
        let options = select_options(&Server::ALL, |s| s.as_str(), |s| s.label());
        assert_eq!(options, vec![("nwn", "NWN Diamond"), ("sinfar", "Sinfar")]);

        let expirations = select_options(&Expiration::ALL, |e| e.as_str(), |e| e.label());
        assert_eq!(expirations.len(), 8);
        assert_eq!(expirations[1], ("10-minutes", "10 Minutes"));
    }
}
