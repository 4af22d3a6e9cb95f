use thiserror::Error;

/// Local validation failures, reported before any network call is attempted.
///
/// The `Display` text is what the user sees in the result panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Precondition {
    #[error("Please select a passport file")]
    MissingFile,

    #[error("Please issue a credential first")]
    MissingCredential,
}
