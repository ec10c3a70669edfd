//! # Mock Store & Testing Guide
//!
//! [`MockStore`] implements the same wire protocol as a real
//! [`StoreActor`](crate::StoreActor) but answers from a queue of scripted
//! expectations instead of real state. It exists for fast, deterministic
//! unit tests of client-side logic.
//!
//! ## When to mock, when to spawn
//!
//! | Need | Use |
//! |------|-----|
//! | Test orchestration in a client wrapper | `MockStore` |
//! | Inject a failure (closed actor, entity error) | `MockStore` |
//! | Test the entity's own hooks | real actor, spawned |
//! | End-to-end flows and concurrency | the full system |
//!
//! ## Patterns
//!
//! **Scripted expectations** - set up responses in call order, run the code
//! under test, then `verify()`:
//!
//! ```rust,ignore
//! let mut mock = MockStore::<Order>::new();
//! mock.expect_get(id.clone()).return_ok(Some(order));
//! let client = OrderClient::new(mock.client());
//! // ... exercise the client ...
//! mock.verify();
//! ```
//!
//! **Manual channel** - for asserting on the request payload itself, use
//! [`create_mock_client`] to get the raw receiver and answer by hand with
//! the `expect_*` helpers. See the client wrapper tests in the domain crate.
//!
//! Error injection is the main payoff: a `StoreError::ActorClosed` or a
//! boxed entity error is one `return_err` away, where provoking the same
//! failure through a real actor would need elaborate setup.

use crate::client::StoreClient;
use crate::entity::StoreEntity;
use crate::error::StoreError;
use crate::message::StoreRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted response for one expected request.
enum Expectation<T: StoreEntity> {
    Get {
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Action {
        response: Result<T::ActionResult, StoreError>,
    },
    Query {
        response: Result<Vec<T>, StoreError>,
    },
    Command {
        response: Result<T::CommandResult, StoreError>,
    },
}

/// A mock store with expectation tracking.
///
/// Expectations are consumed in FIFO order; a request that arrives with no
/// matching expectation queued panics the mock task, which surfaces as a
/// dropped-response error in the code under test.
pub struct MockStore<T: StoreEntity> {
    client: StoreClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: StoreEntity> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> MockStore<T> {
    /// Create a mock with no expectations queued.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_task = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_task
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StoreRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Query { respond_to, .. },
                        Some(Expectation::Query { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Command { respond_to, .. },
                        Some(Expectation::Command { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client handle to hand to the code under test.
    pub fn client(&self) -> StoreClient<T> {
        self.client.clone()
    }

    /// Queue an expectation for a `get`.
    pub fn expect_get(&mut self, _id: T::Id) -> ResponseBuilder<'_, T, Option<T>> {
        ResponseBuilder {
            expectations: &self.expectations,
            wrap: |response| Expectation::Get { response },
        }
    }

    /// Queue an expectation for a `create`.
    pub fn expect_create(&mut self) -> ResponseBuilder<'_, T, T::Id> {
        ResponseBuilder {
            expectations: &self.expectations,
            wrap: |response| Expectation::Create { response },
        }
    }

    /// Queue an expectation for a `perform_action`.
    pub fn expect_action(&mut self, _id: T::Id) -> ResponseBuilder<'_, T, T::ActionResult> {
        ResponseBuilder {
            expectations: &self.expectations,
            wrap: |response| Expectation::Action { response },
        }
    }

    /// Queue an expectation for a `find`.
    pub fn expect_query(&mut self) -> ResponseBuilder<'_, T, Vec<T>> {
        ResponseBuilder {
            expectations: &self.expectations,
            wrap: |response| Expectation::Query { response },
        }
    }

    /// Queue an expectation for a `command`.
    pub fn expect_command(&mut self) -> ResponseBuilder<'_, T, T::CommandResult> {
        ResponseBuilder {
            expectations: &self.expectations,
            wrap: |response| Expectation::Command { response },
        }
    }

    /// Panic unless every queued expectation was consumed.
    pub fn verify(&self) {
        let exps = self.expectations.lock().expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("not all expectations were met, {} remaining", exps.len());
        }
    }
}

/// Fluent builder: pick `return_ok` or `return_err` for the queued request.
pub struct ResponseBuilder<'a, T: StoreEntity, R> {
    expectations: &'a Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: fn(Result<R, StoreError>) -> Expectation<T>,
}

impl<T: StoreEntity, R> ResponseBuilder<'_, T, R> {
    pub fn return_ok(self, value: R) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(Ok(value)));
    }

    pub fn return_err(self, error: StoreError) {
        self.expectations
            .lock()
            .expect("mock expectations poisoned")
            .push_back((self.wrap)(Err(error)));
    }
}

// ---------------------------------------------------------------------------
// Low-level helpers: drive the channel by hand when the test needs to assert
// on the request payload, not just script the response.
// ---------------------------------------------------------------------------

/// A client plus the raw receiver its requests arrive on.
pub fn create_mock_client<T: StoreEntity>(
    buffer_size: usize,
) -> (StoreClient<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Receive the next request, asserting it is a `Create`.
pub async fn expect_create<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receive the next request, asserting it is a `Get`.
pub async fn expect_get<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receive the next request, asserting it is an `Action`.
pub async fn expect_action<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Receive the next request, asserting it is a `Command`.
pub async fn expect_command<T: StoreEntity>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    T::Command,
    tokio::sync::oneshot::Sender<Result<T::CommandResult, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Command {
            command,
            respond_to,
        }) => Some((command, respond_to)),
        _ => None,
    }
}
