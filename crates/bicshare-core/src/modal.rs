//! Modal open/close lifecycle with an opacity fade.
//!
//! The UI drives the timers: after [`ModalState::open`] it waits
//! [`OPEN_FADE_DELAY`] and calls [`ModalState::reveal`]; after
//! [`ModalState::begin_close`] it waits [`CLOSE_FADE_DELAY`] and calls
//! [`ModalState::finish_close`]. Each call carries the epoch returned when the
//! cycle started, so a stale timer cannot touch a newer cycle.

use std::time::Duration;

/// Delay between opening the modal and fading it in
pub const OPEN_FADE_DELAY: Duration = Duration::from_millis(100);

/// Fade-out time before a close is considered complete
pub const CLOSE_FADE_DELAY: Duration = Duration::from_millis(300);

/// Rendered opacity of the modal and its backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Opacity {
    #[default]
    Hidden,
    Visible,
}

impl Opacity {
    /// CSS `opacity` value
    pub fn css(&self) -> &'static str {
        match self {
            Opacity::Hidden => "0",
            Opacity::Visible => "1",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    closing: bool,
    opacity: Opacity,
    epoch: u64,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the modal is mounted (including while fading out)
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_closing(&self) -> bool {
        self.closing
    }

    pub fn opacity(&self) -> Opacity {
        self.opacity
    }

    /// Mount the modal transparent and start a new cycle.
    pub fn open(&mut self) -> u64 {
        self.epoch += 1;
        self.open = true;
        self.closing = false;
        self.opacity = Opacity::Hidden;
        self.epoch
    }

    /// Fade in, unless the cycle that scheduled this has ended.
    ///
    /// Returns whether the opacity changed.
    pub fn reveal(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.open || self.closing {
            return false;
        }
        self.opacity = Opacity::Visible;
        true
    }

    /// Start fading out. Returns `None` when the modal is already closed.
    pub fn begin_close(&mut self) -> Option<u64> {
        if !self.open {
            return None;
        }
        self.closing = true;
        self.opacity = Opacity::Hidden;
        Some(self.epoch)
    }

    /// Unmount once the fade-out has elapsed.
    ///
    /// Returns whether the modal was closed by this call.
    pub fn finish_close(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.closing {
            return false;
        }
        self.open = false;
        self.closing = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_reveal_close_cycle() {
        let mut modal = ModalState::new();
        let epoch = modal.open();
        assert!(modal.is_open());
        assert_eq!(modal.opacity(), Opacity::Hidden);

        assert!(modal.reveal(epoch));
        assert_eq!(modal.opacity(), Opacity::Visible);

        let closing = modal.begin_close().unwrap();
        assert_eq!(modal.opacity(), Opacity::Hidden);
        assert!(modal.is_open(), "still mounted while fading out");

        assert!(modal.finish_close(closing));
        assert!(!modal.is_open());
    }

    #[test]
    fn reveal_after_close_started_is_ignored() {
        let mut modal = ModalState::new();
        let epoch = modal.open();
        modal.begin_close();
        assert!(!modal.reveal(epoch));
        assert_eq!(modal.opacity(), Opacity::Hidden);
    }

    #[test]
    fn stale_close_does_not_close_reopened_modal() {
        let mut modal = ModalState::new();
        modal.open();
        let old = modal.begin_close().unwrap();
        let new = modal.open();
        assert!(!modal.finish_close(old));
        assert!(modal.is_open());
        assert!(modal.reveal(new));
    }

    #[test]
    fn closing_a_closed_modal_is_noop() {
        let mut modal = ModalState::new();
        assert_eq!(modal.begin_close(), None);
    }

    #[test]
    fn opacity_css() {
        assert_eq!(Opacity::Hidden.css(), "0");
        assert_eq!(Opacity::Visible.css(), "1");
    }
}
