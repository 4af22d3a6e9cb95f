//! Application state owned by the controller.
//!
//! `UiState` is created empty at startup, mutated only through [`crate::update`], and dropped with
//! the process. Its [`View`] is the declarative picture a renderer applies.

use crate::constants::{DEFAULT_MIN_AGE, NUM_STEPS};
use std::fmt;

/// The three stages of the demo, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Issue,
    Verify,
    Stats,
}

impl Step {
    pub const ALL: [Step; NUM_STEPS] = [Step::Issue, Step::Verify, Step::Stats];

    pub fn index(self) -> usize {
        match self {
            Step::Issue => 0,
            Step::Verify => 1,
            Step::Stats => 2,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Issue => "Issue credential",
            Step::Verify => "Verify age",
            Step::Stats => "Statistics",
        }
    }
}

/// Visual flags of one step. They are independent and only ever get set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepFlags {
    pub active: bool,
    pub completed: bool,
}

/// A button together with its loading indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Control {
    pub enabled: bool,
    pub loading: bool,
}

impl Control {
    fn idle(enabled: bool) -> Self {
        Self {
            enabled,
            loading: false,
        }
    }

    /// Disable and show the loading indicator while a request is outstanding.
    pub(crate) fn acquire(&mut self) {
        self.enabled = false;
        self.loading = true;
    }

    /// Runs on every completion, success or not.
    pub(crate) fn release(&mut self) {
        self.enabled = true;
        self.loading = false;
    }

    pub fn in_flight(&self) -> bool {
        self.loading
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS class of the result box.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which result panel a message goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTarget {
    Issue,
    Verify,
    Stats,
}

impl ResultTarget {
    pub const ALL: [ResultTarget; 3] = [ResultTarget::Issue, ResultTarget::Verify, ResultTarget::Stats];

    pub fn id(self) -> &'static str {
        match self {
            ResultTarget::Issue => "issueResult",
            ResultTarget::Verify => "verifyResult",
            ResultTarget::Stats => "statsResult",
        }
    }
}

/// Displayed content of a result panel. The message may embed simple markup (`<br>`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Panel {
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Panels {
    pub issue: Option<Panel>,
    pub verify: Option<Panel>,
    pub stats: Option<Panel>,
}

impl Panels {
    pub fn get(&self, target: ResultTarget) -> Option<&Panel> {
        match target {
            ResultTarget::Issue => self.issue.as_ref(),
            ResultTarget::Verify => self.verify.as_ref(),
            ResultTarget::Stats => self.stats.as_ref(),
        }
    }

    fn slot(&mut self, target: ResultTarget) -> &mut Option<Panel> {
        match target {
            ResultTarget::Issue => &mut self.issue,
            ResultTarget::Verify => &mut self.verify,
            ResultTarget::Stats => &mut self.stats,
        }
    }
}

/// Everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub steps: [StepFlags; NUM_STEPS],
    pub issue_control: Control,
    pub verify_control: Control,
    pub panels: Panels,
}

impl Default for View {
    fn default() -> Self {
        Self {
            steps: [StepFlags::default(); NUM_STEPS],
            issue_control: Control::idle(true),
            // Enabled by the first successful issuance.
            verify_control: Control::idle(false),
            panels: Panels::default(),
        }
    }
}

impl View {
    pub fn step(&self, step: Step) -> StepFlags {
        self.steps[step.index()]
    }
}

/// In-memory session data. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub credential_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub session: Session,
    pub view: View,

    /// Threshold sent with verification requests.
    pub min_age: u8,

    initialized: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_AGE)
    }
}

impl UiState {
    pub fn new(min_age: u8) -> Self {
        Self {
            session: Session::default(),
            view: View::default(),
            min_age,
            initialized: false,
        }
    }

    pub fn credential_id(&self) -> Option<&str> {
        self.session.credential_id.as_deref()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    /// Replace the content of a result panel.
    ///
    /// The message is stored verbatim; escaping is the caller's business.
    pub fn show_result(&mut self, target: ResultTarget, message: impl Into<String>, severity: Severity) {
        *self.view.panels.slot(target) = Some(Panel {
            message: message.into(),
            severity,
        });
    }

    pub(crate) fn clear_result(&mut self, target: ResultTarget) {
        *self.view.panels.slot(target) = None;
    }

    pub(crate) fn mark_active(&mut self, step: Step) {
        self.view.steps[step.index()].active = true;
    }

    pub(crate) fn mark_completed(&mut self, step: Step) {
        self.view.steps[step.index()].completed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_empty() {
        let state = UiState::default();
        assert_eq!(state.credential_id(), None);
        assert_eq!(state.min_age, DEFAULT_MIN_AGE);
        assert!(state.view.issue_control.enabled);
        assert!(!state.view.verify_control.enabled);
        for step in Step::ALL {
            assert_eq!(state.view.step(step), StepFlags::default());
        }
        for target in ResultTarget::ALL {
            assert!(state.view.panels.get(target).is_none());
        }
    }

    #[test]
    fn show_result_replaces_previous_content() {
        let mut state = UiState::default();
        state.show_result(ResultTarget::Stats, "first", Severity::Info);
        state.show_result(ResultTarget::Stats, "second", Severity::Error);

        let panel = state.view.panels.get(ResultTarget::Stats).unwrap();
        assert_eq!(panel.message, "second");
        assert_eq!(panel.severity, Severity::Error);
        assert!(state.view.panels.get(ResultTarget::Issue).is_none());
    }

    #[test]
    fn control_release_always_restores() {
        let mut c = Control::idle(false);
        c.acquire();
        assert!(c.in_flight());
        assert!(!c.enabled);
        c.release();
        assert!(!c.in_flight());
        assert!(c.enabled);
    }
}
