//! Applies the controller's `View` to a terminal.

use clap::ValueEnum;
use controller::render::{html_panel, step_classes};
use controller::state::{Control, Panel, ResultTarget, Step, View};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain text, markup turned into line breaks.
    #[default]
    Text,
    /// Raw `<div class="result ...">` fragments.
    Html,
}

fn label(target: ResultTarget) -> &'static str {
    match target {
        ResultTarget::Issue => "issue",
        ResultTarget::Verify => "verify",
        ResultTarget::Stats => "stats",
    }
}

/// `<br>` becomes a newline; runs of whitespace left by the message templates collapse.
fn markup_to_text(message: &str) -> String {
    message
        .replace("<br/>", "<br>")
        .split("<br>")
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn panel(target: ResultTarget, panel: &Panel, format: Format) -> String {
    match format {
        Format::Html => format!("{}: {}", target.id(), html_panel(panel)),
        Format::Text => {
            let body = markup_to_text(&panel.message);
            format!("[{} {}]\n{}", label(target), panel.severity, body)
        }
    }
}

fn step_marker(view: &View, step: Step) -> &'static str {
    let flags = view.step(step);
    match (flags.active, flags.completed) {
        (_, true) => "[x]",
        (true, false) => "[>]",
        (false, false) => "[ ]",
    }
}

fn control(name: &str, c: Control) -> String {
    let state = match (c.enabled, c.loading) {
        (_, true) => "loading...",
        (true, false) => "ready",
        (false, false) => "disabled",
    };
    format!("{name}: {state}")
}

pub fn steps(view: &View, format: Format) -> String {
    Step::ALL
        .iter()
        .enumerate()
        .map(|(i, step)| match format {
            Format::Text => format!("{} {}. {}", step_marker(view, *step), i + 1, step.title()),
            Format::Html => format!("step{}: {}", i + 1, step_classes(view, *step)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Full rendering of the view. Same view, same output.
pub fn full(view: &View, format: Format) -> String {
    let mut out = vec![
        steps(view, format),
        control("issue", view.issue_control),
        control("verify", view.verify_control),
    ];
    for target in ResultTarget::ALL {
        if let Some(p) = view.panels.get(target) {
            out.push(panel(target, p, format));
        }
    }
    out.join("\n")
}

/// Only what changed between two views: step list, controls and panels that were replaced.
pub fn changes(prev: &View, next: &View, format: Format) -> Vec<String> {
    let mut out = Vec::new();

    if prev.steps != next.steps {
        out.push(steps(next, format));
    }
    if prev.issue_control != next.issue_control {
        out.push(control("issue", next.issue_control));
    }
    if prev.verify_control != next.verify_control {
        out.push(control("verify", next.verify_control));
    }
    for target in ResultTarget::ALL {
        let (before, after) = (prev.panels.get(target), next.panels.get(target));
        if before != after {
            if let Some(p) = after {
                out.push(panel(target, p, format));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use controller::state::Severity;
    use controller::UiState;

    #[test]
    fn text_panel_splits_markup_into_lines() {
        let p = Panel {
            message: "📊 System Statistics:<br>Total Credentials Issued: 1<br>\n  Current Merkle Root: 0...".to_string(),
            severity: Severity::Info,
        };
        assert_eq!(
            panel(ResultTarget::Stats, &p, Format::Text),
            "[stats info]\n📊 System Statistics:\nTotal Credentials Issued: 1\nCurrent Merkle Root: 0..."
        );
    }

    #[test]
    fn html_panel_keeps_markup() {
        let p = Panel {
            message: "a<br>b".to_string(),
            severity: Severity::Error,
        };
        assert_eq!(
            panel(ResultTarget::Verify, &p, Format::Html),
            r#"verifyResult: <div class="result error">a<br>b</div>"#
        );
    }

    #[test]
    fn changes_only_report_replaced_panels() {
        let before = UiState::default();
        let mut after = before.clone();
        after.show_result(ResultTarget::Issue, "Please select a passport file", Severity::Error);

        let diff = changes(&before.view, &after.view, Format::Text);
        assert_eq!(diff, vec!["[issue error]\nPlease select a passport file".to_string()]);
        assert!(changes(&after.view, &after.view, Format::Text).is_empty());
    }

    #[test]
    fn full_render_is_stable() {
        let state = UiState::default();
        let a = full(&state.view, Format::Text);
        assert_eq!(a, full(&state.view, Format::Text));
        assert!(a.contains("[ ] 1. Issue credential"));
        assert!(a.contains("verify: disabled"));
    }
}
