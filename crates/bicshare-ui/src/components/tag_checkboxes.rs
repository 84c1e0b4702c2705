//! Tag Checkboxes Component
//!
//! One category's tags as a grid of checkboxes, in catalog order.

use bicshare_core::{Server, TagCatalog, TagCategory, TagSet};
use dioxus::prelude::*;

/// Properties for the TagCheckboxes component
#[derive(Clone, PartialEq, Props)]
pub struct TagCheckboxesProps {
    /// Server whose vocabulary is shown
    pub server: Server,
    pub category: TagCategory,
    /// Currently selected tags for this category
    pub selected: TagSet,
    /// Called with the tag name whenever a box is clicked
    pub on_toggle: EventHandler<String>,
}

/// Heading plus a multi-column checkbox grid.
///
/// Rendering order is the catalog's, never the selection order.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TagCheckboxes {
///         server: selection.server(),
///         category: TagCategory::Purpose,
///         selected: selection.tags(TagCategory::Purpose).clone(),
///         on_toggle: move |tag: String| wizard.write().toggle_tag(TagCategory::Purpose, &tag),
///     }
/// }
/// ```
#[component]
pub fn TagCheckboxes(props: TagCheckboxesProps) -> Element {
    let category = props.category;

    rsx! {
        hr {}
        p { class: "modal-subheader",
            strong { "{category.heading()}" }
        }
        div {
            class: "columns is-multiline modal-columns",
            role: "group",
            "aria-label": "{category.as_str()} tags",
            for tag in TagCatalog::tags(props.server, category).iter().copied() {
                {
                    let checked = props.selected.contains(tag);
                    let on_toggle = props.on_toggle;
                    rsx! {
                        div {
                            key: "{checkbox_key(category, tag)}",
                            class: "column is-one-quarter",
                            label { class: "checkbox",
                                input {
                                    r#type: "checkbox",
                                    name: tag,
                                    checked: checked,
                                    onchange: move |_| on_toggle.call(tag.to_string()),
                                }
                                span { class: "checkbox-text", "{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn checkbox_key(category: TagCategory, tag: &str) -> String {
    format!("modal-{}-{}", category.as_str(), tag)
}
