//! Page-wide tooltip configuration and hover tracking.

/// Static tooltip settings shared by every anchor on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Render tooltip content as HTML
    pub html: bool,
    pub border: bool,
    pub border_color: &'static str,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            html: true,
            border: true,
            border_color: "transparent",
        }
    }
}

impl TooltipConfig {
    /// Tooltips always open below their anchor.
    pub fn placement_class(&self) -> &'static str {
        "tooltip--bottom"
    }

    /// Inline style for the tooltip bubble
    pub fn style(&self) -> String {
        if self.border {
            format!("border: 1px solid {};", self.border_color)
        } else {
            "border: none;".to_string()
        }
    }
}

/// Which anchor, if any, currently shows its tooltip. Only one is active
/// across the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TooltipState {
    active: Option<String>,
}

impl TooltipState {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, anchor: &str) -> bool {
        self.active.as_deref() == Some(anchor)
    }

    pub fn show(&mut self, anchor: &str) {
        self.active = Some(anchor.to_string());
    }

    /// Hide only if `anchor` is the one showing.
    pub fn hide(&mut self, anchor: &str) {
        if self.is_active(anchor) {
            self.active = None;
        }
    }
}
