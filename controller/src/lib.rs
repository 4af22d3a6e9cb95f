//! Client-side controller for the zk-creds demo flow.
//!
//! This crate contains:
//! - The explicit application state (session credential, step tracker, controls, result panels).
//! - The action/effect dispatch function driving issuance, age verification and statistics.
//! - Wire types for the backend's JSON payloads.
//! - An HTML fragment renderer for result panels.
//!
//! Nothing here performs I/O. Effects are returned to the caller, which executes them and feeds
//! the outcome back as a completion action.

pub mod action;
pub mod constants;
pub mod errors;
pub mod render;
pub mod state;
pub mod types;
pub mod update;

pub use action::{Action, Effect, TransportFailure};
pub use state::{ResultTarget, Severity, Step, UiState, View};
pub use update::update;
