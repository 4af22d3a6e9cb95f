//! The dispatch function: one handler per action, each returning the next state plus effects.

use crate::action::{Action, Effect, TransportFailure};
use crate::constants::ID_PREVIEW_LEN;
use crate::errors::Precondition;
use crate::state::{ResultTarget, Severity, Step, UiState};
use crate::types::{FileUpload, IssueResponse, StatsResponse, VerifyRequest, VerifyResponse};

/// Apply `action` to `state`.
///
/// Pure: the same inputs always produce the same output, and nothing is executed. The caller runs
/// the returned effects and dispatches their completion actions.
pub fn update(state: &UiState, action: Action) -> (UiState, Vec<Effect>) {
    let mut next = state.clone();
    let effects = match action {
        Action::Init => init(&mut next),
        Action::IssueRequested { file } => request_issue(&mut next, file),
        Action::IssueFinished(result) => finish_issue(&mut next, result),
        Action::VerifyRequested => request_verify(&mut next),
        Action::VerifyFinished(result) => finish_verify(&mut next, result),
        Action::StatsRequested => vec![Effect::FetchStats],
        Action::StatsFinished(result) => finish_stats(&mut next, result),
    };
    (next, effects)
}

/// First 16 characters followed by an ellipsis.
pub fn preview(id: &str) -> String {
    let head: String = id.chars().take(ID_PREVIEW_LEN).collect();
    format!("{head}...")
}

fn init(state: &mut UiState) -> Vec<Effect> {
    if state.is_initialized() {
        return Vec::new();
    }
    state.mark_initialized();
    state.mark_active(Step::Issue);
    vec![Effect::FetchStats]
}

fn request_issue(state: &mut UiState, file: Option<FileUpload>) -> Vec<Effect> {
    // A disabled button cannot be clicked, with or without a file.
    if state.view.issue_control.in_flight() {
        return Vec::new();
    }

    let Some(file) = file else {
        state.show_result(ResultTarget::Issue, Precondition::MissingFile.to_string(), Severity::Error);
        return Vec::new();
    };

    state.view.issue_control.acquire();
    state.clear_result(ResultTarget::Issue);
    vec![Effect::IssueCredential(file)]
}

fn finish_issue(state: &mut UiState, result: Result<IssueResponse, TransportFailure>) -> Vec<Effect> {
    state.view.issue_control.release();

    match result {
        Ok(resp) if resp.success => match resp.credential_id {
            Some(credential_id) => {
                let mut msg = format!(
                    "✅ {}<br>Credential ID: {}",
                    resp.message.as_deref().unwrap_or("Credential issued"),
                    preview(&credential_id)
                );
                if let Some(index) = resp.stats.and_then(|s| s.merkle_index) {
                    msg.push_str(&format!("<br>Merkle index: {index}"));
                }

                state.session.credential_id = Some(credential_id);
                state.show_result(ResultTarget::Issue, msg, Severity::Success);

                state.view.verify_control.enabled = true;
                state.mark_completed(Step::Issue);
                state.mark_active(Step::Verify);
            }
            None => {
                state.show_result(
                    ResultTarget::Issue,
                    "❌ Error: response is missing credential_id",
                    Severity::Error,
                );
            }
        },
        Ok(_) => {
            state.show_result(ResultTarget::Issue, "❌ Failed to issue credential", Severity::Error);
        }
        Err(e) => {
            state.show_result(ResultTarget::Issue, format!("❌ Error: {e}"), Severity::Error);
        }
    }

    Vec::new()
}

fn request_verify(state: &mut UiState) -> Vec<Effect> {
    if state.view.verify_control.in_flight() {
        return Vec::new();
    }

    let Some(credential_id) = state.session.credential_id.clone() else {
        state.show_result(ResultTarget::Verify, Precondition::MissingCredential.to_string(), Severity::Error);
        return Vec::new();
    };

    state.view.verify_control.acquire();
    state.clear_result(ResultTarget::Verify);
    vec![Effect::VerifyAge(VerifyRequest {
        credential_id,
        min_age: state.min_age,
    })]
}

fn finish_verify(state: &mut UiState, result: Result<VerifyResponse, TransportFailure>) -> Vec<Effect> {
    state.view.verify_control.release();

    let min_age = state.min_age;
    match result {
        Ok(resp) if resp.success && resp.proof_valid => {
            let (status, message, severity) = if resp.is_old_enough {
                (
                    "✅ VERIFIED",
                    format!("You have successfully proven you are over {min_age}!"),
                    Severity::Success,
                )
            } else {
                (
                    "❌ FAILED",
                    format!("Age verification failed - you are under {min_age}."),
                    Severity::Error,
                )
            };

            state.show_result(
                ResultTarget::Verify,
                format!("{status} {message}<br><br>🔐 Zero-knowledge proof generated and verified!"),
                severity,
            );

            if resp.is_old_enough {
                state.mark_completed(Step::Verify);
                state.mark_active(Step::Stats);
            }
        }
        Ok(_) => {
            state.show_result(ResultTarget::Verify, "❌ Verification failed: Invalid proof", Severity::Error);
        }
        Err(e) => {
            state.show_result(ResultTarget::Verify, format!("❌ Error: {e}"), Severity::Error);
        }
    }

    Vec::new()
}

fn finish_stats(state: &mut UiState, result: Result<StatsResponse, TransportFailure>) -> Vec<Effect> {
    match result {
        Ok(stats) => {
            let msg = format!(
                "📊 System Statistics:<br>\
                 Total Credentials Issued: {}<br>\
                 Current Merkle Root: {}<br>\
                 <br>All credentials are publicly auditable in the Merkle tree!",
                stats.total_credentials,
                preview(&stats.merkle_root)
            );
            state.show_result(ResultTarget::Stats, msg, Severity::Info);
        }
        Err(e) => {
            state.show_result(ResultTarget::Stats, format!("❌ Error fetching stats: {e}"), Severity::Error);
        }
    }
    Vec::new()
}
