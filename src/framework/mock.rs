//! # Mock Framework
//!
//! Utilities for testing clients and dependent actors without spawning the real actor.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] returns a client plus the raw receiver. The test pulls requests
//!   off the receiver with [`expect_action`] / [`expect_snapshot`], inspects them and
//!   answers through the responder.
//! - [`MockClient`] answers requests from a queue of canned expectations. Use it when the
//!   code under test is itself an actor (e.g. the session actor appending to a ledger).
//!
//! ```rust,ignore
//! let mut ledger = MockClient::<OrderLedger>::new();
//! ledger.expect_action().return_ok(LedgerActionResult::Append(1));
//!
//! let client = LedgerClient::new(ledger.client());
//! // ... drive the code under test ...
//! ledger.verify();
//! ```

use crate::framework::client::StateClient;
use crate::framework::entity::ActorState;
use crate::framework::error::FrameworkError;
use crate::framework::message::{Response, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

enum Expectation<T: ActorState> {
    Snapshot {
        response: Result<T::Snapshot, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in FIFO order. A request whose kind does not
/// match the next expectation (or arrives when none is left) makes the mock task panic,
/// which closes the channel and surfaces as an error in the caller.
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Expectations<T>,
    received: Arc<Mutex<Vec<T::Action>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> Default for MockClient<T>
where
    T::Action: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorState> MockClient<T>
where
    T::Action: Clone,
{
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Action { action, respond_to }, Some(Expectation::Action { response })) => {
                        received_clone.lock().unwrap().push(action);
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a `snapshot` request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` request.
    pub fn expect_action(&mut self) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Actions received so far, in arrival order.
    pub fn received_actions(&self) -> Vec<T::Action> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Expectations<T>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    pub fn return_ok(self, snapshot: T::Snapshot) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(snapshot) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Err(error) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorState> {
    expectations: Expectations<T>,
}

impl<T: ActorState> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action { response: Err(error) });
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Snapshot request
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<Response<T::Snapshot>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(StateRequest::Action { action, respond_to }) => Some((action, respond_to)),
        _ => None,
    }
}
