//! Asynchronous wrapper around a synchronous [`Handler`].
//!
//! Every call to [`AsyncHandler::handle`] runs on its own unit of Tokio's
//! blocking pool, because the wrapped handler may block the thread it runs
//! on. The unit reports exactly one [`Outcome`] on the result channel.

use super::Handler;
use crate::clock::{Sleeper, ThreadSleeper};
use crate::config::Config;
use crate::error::HandlerError;
use crate::outcome::{Outcome, OutcomeSender};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Default delay before a background unit starts handling its message.
pub const DEFAULT_SCHEDULING_DELAY: Duration = Duration::from_millis(500);

/// Runs a handler in the background and reports outcomes on a channel.
///
/// Calls are independent: outcomes arrive in the order the background
/// units finish, which need not match the order of the calls.
#[derive(Clone)]
pub struct AsyncHandler {
    handler: Arc<dyn Handler>,
    results: OutcomeSender,
    sleeper: Arc<dyn Sleeper>,
    scheduling_delay: Duration,
    runtime: Handle,
}

impl AsyncHandler {
    /// Wrap `handler`, delivering outcomes on `results`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime. Use [`AsyncHandler::with_runtime`]
    /// to construct one from a plain thread.
    pub fn new(handler: Arc<dyn Handler>, results: OutcomeSender) -> Self {
        Self::with_runtime(handler, results, Handle::current())
    }

    /// Wrap `handler`, spawning background units on the given runtime.
    pub fn with_runtime(handler: Arc<dyn Handler>, results: OutcomeSender, runtime: Handle) -> Self {
        Self {
            handler,
            results,
            sleeper: Arc::new(ThreadSleeper),
            scheduling_delay: DEFAULT_SCHEDULING_DELAY,
            runtime,
        }
    }

    /// Wrap `handler` with the scheduling delay from configuration.
    ///
    /// # Panics
    ///
    /// Panics when called outside a Tokio runtime.
    pub fn from_config(config: &Config, handler: Arc<dyn Handler>, results: OutcomeSender) -> Self {
        Self::new(handler, results).with_scheduling_delay(config.scheduling_delay())
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_scheduling_delay(mut self, delay: Duration) -> Self {
        self.scheduling_delay = delay;
        self
    }

    pub fn scheduling_delay(&self) -> Duration {
        self.scheduling_delay
    }

    /// Handle `input` in the background. Returns immediately.
    pub fn handle(&self, input: &str) {
        let handler = Arc::clone(&self.handler);
        let sleeper = Arc::clone(&self.sleeper);
        let results = self.results.clone();
        let delay = self.scheduling_delay;
        let input = input.to_string();

        tracing::debug!(input = %input, "Scheduling background handler");

        // The JoinHandle is dropped; the outcome travels over the channel instead.
        self.runtime.spawn_blocking(move || {
            let outcome = run_unit(handler.as_ref(), sleeper.as_ref(), delay, &input);
            if results.send(outcome).is_err() {
                tracing::warn!(input = %input, "Result channel closed, outcome discarded");
            }
        });
    }
}

/// Body of one background unit. Never unwinds.
fn run_unit(handler: &dyn Handler, sleeper: &dyn Sleeper, delay: Duration, input: &str) -> Outcome {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        sleeper.sleep(delay);
        handler.handle(input)
    }));

    match result {
        Ok(result) => Outcome::from(result),
        Err(payload) => {
            let reason = panic_reason(payload.as_ref());
            tracing::error!(input = %input, reason = %reason, "Handler panicked in background unit");
            Outcome::Failure(HandlerError::TaskPanicked(reason))
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
