//! Upload wizard state machine
//!
//! [`UploadWizard`] owns one modal session: the selection, the current step
//! and the modal fade lifecycle. Everything is reset explicitly on cancel and
//! after a successful submission.

use crate::catalog::TagCategory;
use crate::error::{UploadError, UploadResult};
use crate::modal::ModalState;
use crate::selection::{FileBlob, SelectionState};
use crate::submission::SubmissionForm;

/// Wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    /// Server, exposure, expiration and tags
    #[default]
    SelectMetadata,
    /// Optional portrait, then finish
    SelectPortrait,
}

impl WizardStep {
    const ALL: [Self; 2] = [Self::SelectMetadata, Self::SelectPortrait];

    pub const fn index(self) -> usize {
        match self {
            Self::SelectMetadata => 0,
            Self::SelectPortrait => 1,
        }
    }

    fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub const fn is_first(self) -> bool {
        self.index() == 0
    }

    pub const fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }
}

/// Forward/back navigation between the two steps.
///
/// Moving past either end leaves the step unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepController {
    step: WizardStep,
}

impl StepController {
    pub fn current(&self) -> WizardStep {
        self.step
    }

    pub fn next(&mut self) {
        self.step = WizardStep::from_index(self.step.index() + 1);
    }

    pub fn previous(&mut self) {
        if !self.step.is_first() {
            self.step = WizardStep::from_index(self.step.index() - 1);
        }
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::default();
    }
}

/// One upload wizard instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadWizard {
    selection: SelectionState,
    steps: StepController,
    modal: ModalState,
    /// Set between `finish` and `complete`/`submit_failed`
    submitting: bool,
}

impl UploadWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn step(&self) -> WizardStep {
        self.steps.current()
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Whether a form handed out by [`finish`](Self::finish) is still being posted.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a session for a dropped character file. Always starts at the
    /// metadata step with default choices.
    ///
    /// Returns the modal epoch for the delayed [`reveal`](Self::reveal).
    pub fn open_with_file(&mut self, file: FileBlob) -> u64 {
        tracing::info!(file = %file.name, size = file.len(), "opening upload wizard");
        self.selection.reset();
        self.steps.reset();
        self.selection.set_file(file);
        self.modal.open()
    }

    pub fn set_portrait(&mut self, portrait: FileBlob) {
        tracing::debug!(file = %portrait.name, "portrait selected");
        self.selection.set_portrait(portrait);
    }

    pub fn toggle_tag(&mut self, category: TagCategory, name: &str) {
        self.selection.toggle_tag(category, name);
        tracing::debug!(
            category = category.as_str(),
            name,
            selected = self.selection.has_tag(category, name),
            "tag toggled"
        );
    }

    pub fn next(&mut self) {
        self.steps.next();
        tracing::debug!(step = ?self.steps.current(), "wizard step");
    }

    pub fn previous(&mut self) {
        self.steps.previous();
        tracing::debug!(step = ?self.steps.current(), "wizard step");
    }

    /// Discard the session and start closing the modal.
    ///
    /// Returns the epoch for the delayed [`finish_close`](Self::finish_close),
    /// or `None` if the modal was not open. Ignored while a post is in
    /// flight, so its outcome always applies to the session that sent it.
    pub fn cancel(&mut self) -> Option<u64> {
        if self.submitting {
            tracing::debug!("cancel ignored while an upload is in flight");
            return None;
        }
        tracing::debug!("upload wizard cancelled");
        self.reset_session();
        self.modal.begin_close()
    }

    /// Build the form for submission and mark the session as submitting.
    /// Only available on the last step, and only once per attempt.
    pub fn finish(&mut self) -> UploadResult<SubmissionForm> {
        if self.submitting {
            return Err(UploadError::SubmissionInFlight);
        }
        if !self.steps.current().is_last() {
            return Err(UploadError::NotAtFinalStep);
        }
        let form = SubmissionForm::assemble(&self.selection)?;
        self.submitting = true;
        Ok(form)
    }

    /// Reset after the endpoint accepted the upload and start closing.
    pub fn complete(&mut self) -> Option<u64> {
        self.submitting = false;
        self.reset_session();
        self.modal.begin_close()
    }

    /// The post failed; keep the selection and step so the user can retry.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    pub fn reveal(&mut self, epoch: u64) -> bool {
        self.modal.reveal(epoch)
    }

    pub fn finish_close(&mut self, epoch: u64) -> bool {
        self.modal.finish_close(epoch)
    }

    fn reset_session(&mut self) {
        self.selection.reset();
        self.steps.reset();
    }
}
