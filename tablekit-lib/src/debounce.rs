//! Trailing-edge debouncing on the Tokio timer.
//!
//! A [`Debouncer`] wraps a callback. Each [`call`](Debouncer::call) aborts the
//! previously scheduled invocation and schedules a new one after the delay,
//! so a burst of calls collapses into a single call carrying the last
//! argument. At most one timer task is alive at any time, and dropping the
//! debouncer aborts it.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::trace;
use tokio::task::JoinHandle;

/// Collapses bursts of calls into one delayed, trailing call.
///
/// Must be used from within a Tokio runtime.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tablekit_lib::Debouncer;
/// use tokio::sync::mpsc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (tx, mut rx) = mpsc::unbounded_channel();
/// let mut search = Debouncer::new(Duration::from_millis(10), move |query: String| {
///     let _ = tx.send(query);
/// });
///
/// search.call("a".to_string());
/// search.call("al".to_string());
/// search.call("ali".to_string());
///
/// assert_eq!(rx.recv().await.as_deref(), Some("ali"));
/// # }
/// ```
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Option<JoinHandle<()>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Wrap `callback` so it only fires once `delay` has passed without another call.
    pub fn new<F>(delay: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: None,
        }
    }

    /// Schedule `arg` for delivery, superseding any call still waiting.
    pub fn call(&mut self, arg: A) {
        if let Some(handle) = self.pending.take() {
            if !handle.is_finished() {
                trace!("Debounce: superseding pending call");
            }
            handle.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(arg);
        }));
    }
}

impl<A> Debouncer<A> {
    /// Whether a call is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// The configured quiet period.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<A> fmt::Debug for Debouncer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.is_pending())
            .finish()
    }
}
