//! User commands, completion events and the side effects they request.

use crate::types::{FileUpload, IssueResponse, StatsResponse, VerifyRequest, VerifyResponse};
use std::fmt;

/// Error text of a failed network call (connection error, non-2xx status, unparsable body).
///
/// Kept as plain text so the controller does not depend on any HTTP library.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportFailure(pub String);

impl TransportFailure {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<E: std::error::Error> From<E> for TransportFailure {
    fn from(e: E) -> Self {
        Self(e.to_string())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// Page ready.
    Init,

    IssueRequested { file: Option<FileUpload> },
    IssueFinished(Result<IssueResponse, TransportFailure>),

    VerifyRequested,
    VerifyFinished(Result<VerifyResponse, TransportFailure>),

    StatsRequested,
    StatsFinished(Result<StatsResponse, TransportFailure>),
}

/// Work the caller must perform on behalf of the controller.
///
/// Each effect resolves to exactly one completion action.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    IssueCredential(FileUpload),
    VerifyAge(VerifyRequest),
    FetchStats,
}

impl Effect {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::IssueCredential(_) => "issue-credential",
            Effect::VerifyAge(_) => "verify-age",
            Effect::FetchStats => "stats",
        }
    }

    /// The completion to dispatch when this effect could not produce one of its own.
    pub fn failed(&self, failure: TransportFailure) -> Action {
        match self {
            Effect::IssueCredential(_) => Action::IssueFinished(Err(failure)),
            Effect::VerifyAge(_) => Action::VerifyFinished(Err(failure)),
            Effect::FetchStats => Action::StatsFinished(Err(failure)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_maps_each_effect_to_its_completion() {
        let failure = TransportFailure::new("aborted");
        assert_eq!(
            Effect::FetchStats.failed(failure.clone()),
            Action::StatsFinished(Err(failure.clone()))
        );
        assert_eq!(
            Effect::IssueCredential(FileUpload::new("p.json", Vec::<u8>::new())).failed(failure.clone()),
            Action::IssueFinished(Err(failure.clone()))
        );
        let req = VerifyRequest {
            credential_id: "c".to_string(),
            min_age: 18,
        };
        assert_eq!(
            Effect::VerifyAge(req).failed(failure.clone()),
            Action::VerifyFinished(Err(failure))
        );
    }
}
