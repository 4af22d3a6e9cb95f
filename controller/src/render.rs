//! HTML rendering of the view, for embedding in a page.
//!
//! Messages are inserted verbatim. They are built by the controller from backend data and may
//! carry `<br>` markup.

use crate::state::{Panel, ResultTarget, Step, View};

/// `<div class="result {severity}">{message}</div>`
pub fn html_panel(panel: &Panel) -> String {
    format!(r#"<div class="result {}">{}</div>"#, panel.severity, panel.message)
}

/// Class list of a step container, e.g. `step active completed`.
pub fn step_classes(view: &View, step: Step) -> String {
    let flags = view.step(step);
    let mut classes = String::from("step");
    if flags.active {
        classes.push_str(" active");
    }
    if flags.completed {
        classes.push_str(" completed");
    }
    classes
}

/// Inner HTML of every result container, keyed by element id. Empty panels render as `""`.
pub fn html_panels(view: &View) -> Vec<(&'static str, String)> {
    ResultTarget::ALL
        .iter()
        .map(|t| (t.id(), view.panels.get(*t).map(html_panel).unwrap_or_default()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Severity, UiState};

    #[test]
    fn panel_markup_matches_result_box() {
        let panel = Panel {
            message: "✅ ok<br>Credential ID: abc...".to_string(),
            severity: Severity::Success,
        };
        assert_eq!(
            html_panel(&panel),
            r#"<div class="result success">✅ ok<br>Credential ID: abc...</div>"#
        );
    }

    #[test]
    fn step_classes_follow_flags() {
        let mut state = UiState::default();
        assert_eq!(step_classes(&state.view, Step::Issue), "step");

        state.mark_active(Step::Issue);
        state.mark_completed(Step::Issue);
        assert_eq!(step_classes(&state.view, Step::Issue), "step active completed");
        assert_eq!(step_classes(&state.view, Step::Verify), "step");
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut state = UiState::default();
        state.show_result(ResultTarget::Verify, "Please issue a credential first", Severity::Error);

        let first = html_panels(&state.view);
        assert_eq!(first, html_panels(&state.view));
        assert_eq!(first[0], ("issueResult", String::new()));
        assert_eq!(
            first[1].1,
            r#"<div class="result error">Please issue a credential first</div>"#
        );
    }
}
