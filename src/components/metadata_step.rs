//! Metadata step
//!
//! Server, exposure and expiration selects followed by the three tag grids.

use bicshare_core::{Expiration, Exposure, Server, TagCategory};
use bicshare_ui::{select_options, Button, ButtonVariant, LabeledSelect, TagCheckboxes};
use dioxus::prelude::*;

use crate::context::use_wizard;

const SERVER_TIP: &str = "Changing the server clears any selected tags.";
const EXPOSURE_TIP: &str = "<strong>Unlisted</strong> characters are only reachable by their link.";
const EXPIRATION_TIP: &str = "The character is deleted once this time has passed.";

#[component]
pub fn MetadataStep(on_cancel: EventHandler<()>) -> Element {
    let mut wizard = use_wizard();
    let selection = wizard.read().selection().clone();
    let server = selection.server();

    rsx! {
        div { id: "modal-step-0",
            div { class: "modal-select-container level",
                div { class: "level-left",
                    LabeledSelect {
                        id: "server".to_string(),
                        label: "Game / Server:".to_string(),
                        tip: SERVER_TIP.to_string(),
                        value: server.as_str().to_string(),
                        options: select_options(&Server::ALL, |s| s.as_str(), |s| s.label()),
                        on_change: move |value: String| {
                            if let Some(server) = Server::from_wire(&value) {
                                wizard.write().selection_mut().set_server(server);
                            }
                        },
                    }
                    LabeledSelect {
                        id: "exposure".to_string(),
                        label: "Character Exposure:".to_string(),
                        tip: EXPOSURE_TIP.to_string(),
                        value: selection.exposure().as_str().to_string(),
                        options: select_options(&Exposure::ALL, |e| e.as_str(), |e| e.label()),
                        on_change: move |value: String| {
                            if let Some(exposure) = Exposure::from_wire(&value) {
                                wizard.write().selection_mut().set_exposure(exposure);
                            }
                        },
                    }
                    LabeledSelect {
                        id: "expiration".to_string(),
                        label: "Character Expiration:".to_string(),
                        tip: EXPIRATION_TIP.to_string(),
                        value: selection.expiration().as_str().to_string(),
                        options: select_options(&Expiration::ALL, |e| e.as_str(), |e| e.label()),
                        on_change: move |value: String| {
                            if let Some(expiration) = Expiration::from_wire(&value) {
                                wizard.write().selection_mut().set_expiration(expiration);
                            }
                        },
                    }
                }
            }

            for category in TagCategory::ALL {
                TagCheckboxes {
                    key: "{category.as_str()}",
                    server: server,
                    category: category,
                    selected: selection.tags(category).clone(),
                    on_toggle: move |tag: String| wizard.write().toggle_tag(category, &tag),
                }
            }

            hr {}
            div { class: "modal-step-buttons level",
                div { class: "level-left",
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
                div { class: "level-right",
                    Button {
                        variant: ButtonVariant::Info,
                        onclick: move |_| wizard.write().next(),
                        "Continue"
                    }
                }
            }
        }
    }
}
