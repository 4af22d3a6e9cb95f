use crate::api::Backend;
use crate::errors::ClientError;
use controller::{Action, Effect, TransportFailure, UiState, update};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Single-owner event loop around the controller.
///
/// `dispatch` applies an action synchronously and spawns one task per effect. Each task posts its
/// completion action back on the channel, so outstanding requests interleave freely while the
/// state itself is only touched from the loop.
pub struct EventLoop<B> {
    state: UiState,
    backend: Arc<B>,
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Action>,
    in_flight: usize,
}

impl<B: Backend + 'static> EventLoop<B> {
    pub fn new(backend: B, min_age: u8) -> Self {
        Self::with_backend(Arc::new(backend), min_age)
    }

    pub fn with_backend(backend: Arc<B>, min_age: u8) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: UiState::new(min_age),
            backend,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Requests spawned but not yet folded back into the state.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn dispatch(&mut self, action: Action) {
        let (next, effects) = update(&self.state, action);
        self.state = next;

        for effect in effects {
            debug!(effect = effect.name(), "spawning request");
            self.in_flight += 1;

            let backend = self.backend.clone();
            let tx = self.tx.clone();
            let name = effect.name();
            let aborted = effect.failed(TransportFailure::new(format!("{name} request aborted")));
            tokio::spawn(async move {
                // A panicking backend must still release its control.
                let completion = match tokio::spawn(async move { run_effect(backend.as_ref(), effect).await }).await {
                    Ok(completion) => completion,
                    Err(e) => {
                        warn!(call = name, error = %e, "request task died");
                        aborted
                    }
                };
                // Receiver gone means the loop was dropped; nobody is left to render.
                let _ = tx.send(completion);
            });
        }
    }

    /// Wait for the next request to finish and apply it. Returns `false` when nothing is pending.
    pub async fn next_completion(&mut self) -> bool {
        if self.in_flight == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(action) => {
                self.in_flight -= 1;
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Apply completions until no request is outstanding.
    pub async fn settle(&mut self) {
        while self.next_completion().await {}
    }
}

async fn run_effect<B: Backend + ?Sized>(backend: &B, effect: Effect) -> Action {
    match effect {
        Effect::IssueCredential(file) => {
            Action::IssueFinished(backend.issue_credential(file).await.map_err(failure("issue-credential")))
        }
        Effect::VerifyAge(req) => {
            Action::VerifyFinished(backend.verify_age(req).await.map_err(failure("verify-age")))
        }
        Effect::FetchStats => Action::StatsFinished(backend.stats().await.map_err(failure("stats"))),
    }
}

fn failure(call: &'static str) -> impl Fn(ClientError) -> TransportFailure {
    move |e| {
        warn!(call, error = %e, "request failed");
        TransportFailure::from(e)
    }
}
