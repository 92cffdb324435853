//! Callback-to-future bridging
//!
//! Converts one-shot callback APIs into values an async caller can await.

use tokio::sync::oneshot;

use crate::error::{Error, Result};

/// One-shot resumption cell handed to a callback registrar.
///
/// Every `resume*` method consumes the continuation, so resuming twice is
/// rejected at compile time. Dropping the continuation without resuming it
/// surfaces [`Error::ContinuationDropped`] to the awaiting caller.
pub struct Continuation<T> {
    tx: oneshot::Sender<Result<T>>,
}

impl<T> Continuation<T> {
    /// Resume the awaiting caller with a value.
    pub fn resume(self, value: T) {
        // Send only fails if the awaiting side is gone; nothing to do then
        let _ = self.tx.send(Ok(value));
    }

    /// Resume the awaiting caller with an error.
    pub fn resume_err(self, error: Error) {
        let _ = self.tx.send(Err(error));
    }

    /// Resume the awaiting caller with a ready-made result.
    pub fn resume_with(self, result: Result<T>) {
        let _ = self.tx.send(result);
    }
}

/// Bridge a one-shot callback API into an awaitable call.
///
/// `register` receives a [`Continuation`] and is expected to hand it to some
/// callback that eventually resumes it; the returned future suspends until
/// that happens.
///
/// # Example
/// ```
/// use fanmap::with_continuation;
///
/// # tokio_test::block_on(async {
/// let value = with_continuation(|continuation| {
///     std::thread::spawn(move || continuation.resume(42));
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(value, 42);
/// # });
/// ```
pub async fn with_continuation<T, F>(register: F) -> Result<T>
where
    F: FnOnce(Continuation<T>),
{
    let (tx, rx) = oneshot::channel();
    register(Continuation { tx });
    rx.await.map_err(|_| Error::ContinuationDropped)?
}

/// Assemble a `Result` from the `(value, error)` pair shape used by legacy
/// completion callbacks.
///
/// An explicit error wins over a value; both absent yields
/// [`Error::EmptyResult`].
pub fn result_from_parts<T>(value: Option<T>, error: Option<Error>) -> Result<T> {
    match (value, error) {
        (_, Some(error)) => Err(error),
        (Some(value), None) => Ok(value),
        (None, None) => Err(Error::EmptyResult),
    }
}
