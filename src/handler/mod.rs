//! Request handling.
//!
//! [`RequestHandler`] does the work synchronously on the calling thread.
//! [`AsyncHandler`] runs any [`Handler`] on a background unit and reports
//! each call as an [`Outcome`](crate::Outcome) on a result channel.

mod async_handler;
pub use async_handler::AsyncHandler;

use crate::clock::{Sleeper, ThreadSleeper};
use crate::config::Config;
use crate::error::{HandlerError, HandlerResult};
use crate::metrics::{HandleTimer, Metrics};
use crate::sender::Sender;
use std::sync::Arc;
use std::time::Duration;

/// Default blocking delay for messages ending in `?`.
pub const DEFAULT_SLOW_PATH_DELAY: Duration = Duration::from_secs(3);

/// Handles one message at a time.
pub trait Handler: Send + Sync {
    fn handle(&self, input: &str) -> HandlerResult<()>;
}

/// Validates a message and forwards `"<input> handled by <name>"` to a sender.
///
/// Messages ending in `?` are treated as expensive: the calling thread is
/// blocked for the slow path delay before anything is forwarded.
///
/// # Example
///
/// ```
/// use handler_talk::clock::VirtualSleeper;
/// use handler_talk::{Handler, RequestHandler, Sender};
/// use std::sync::{Arc, Mutex};
///
/// #[derive(Default)]
/// struct Collect(Mutex<Vec<String>>);
///
/// impl Sender for Collect {
///     fn send(&self, text: &str) {
///         self.0.lock().unwrap().push(text.to_string());
///     }
/// }
///
/// let sender = Arc::new(Collect::default());
/// let handler = RequestHandler::new("Scotty", sender.clone())
///     .with_sleeper(Arc::new(VirtualSleeper::new()));
///
/// handler.handle("Hello").unwrap();
/// assert!(handler.handle("").is_err());
/// assert_eq!(*sender.0.lock().unwrap(), vec!["Hello handled by Scotty"]);
/// ```
#[derive(Clone)]
pub struct RequestHandler {
    name: String,
    sender: Arc<dyn Sender>,
    sleeper: Arc<dyn Sleeper>,
    slow_path_delay: Duration,
    metrics: Metrics,
}

impl RequestHandler {
    /// Create a handler with a wall-clock sleeper and the default slow path delay.
    pub fn new(name: impl Into<String>, sender: Arc<dyn Sender>) -> Self {
        Self {
            name: name.into(),
            sender,
            sleeper: Arc::new(ThreadSleeper),
            slow_path_delay: DEFAULT_SLOW_PATH_DELAY,
            metrics: Metrics::new(),
        }
    }

    /// Create a handler named and timed from configuration.
    pub fn from_config(config: &Config, sender: Arc<dyn Sender>) -> Self {
        Self::new(config.handler_name.clone(), sender)
            .with_slow_path_delay(config.slow_path_delay())
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn with_slow_path_delay(mut self, delay: Duration) -> Self {
        self.slow_path_delay = delay;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slow_path_delay(&self) -> Duration {
        self.slow_path_delay
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    fn derive_message(&self, input: &str) -> String {
        format!("{} handled by {}", input, self.name)
    }
}

impl Handler for RequestHandler {
    fn handle(&self, input: &str) -> HandlerResult<()> {
        if input.is_empty() {
            tracing::warn!(handler = %self.name, "Rejected empty input");
            self.metrics.record_rejected();
            return Err(HandlerError::EmptyInput);
        }

        let timer = HandleTimer::new(self.metrics.clone());

        if input.ends_with('?') {
            tracing::info!(
                handler = %self.name,
                delay_ms = self.slow_path_delay.as_millis() as u64,
                "Question received, taking the slow path"
            );
            self.metrics.record_slow_path();
            self.sleeper.sleep(self.slow_path_delay);
        }

        let message = self.derive_message(input);
        tracing::debug!(handler = %self.name, message = %message, "Forwarding message");
        self.sender.send(&message);

        timer.complete();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::VirtualSleeper;
    use std::sync::Mutex;
    use std::time::Instant;

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingSender {
        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Sender for RecordingSender {
        fn send(&self, text: &str) {
            self.sent.lock().unwrap().push(text.to_string());
        }
    }

    fn setup() -> (RequestHandler, Arc<RecordingSender>, VirtualSleeper) {
        let sender = Arc::new(RecordingSender::default());
        let sleeper = VirtualSleeper::new();
        let handler = RequestHandler::new("Scotty", sender.clone())
            .with_sleeper(Arc::new(sleeper.clone()));
        (handler, sender, sleeper)
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let (handler, sender, sleeper) = setup();

        assert_eq!(handler.handle(""), Err(HandlerError::EmptyInput));
        assert!(sender.sent().is_empty());
        assert_eq!(sleeper.sleep_count(), 0);
        assert_eq!(handler.metrics().rejected_total(), 1);
    }

    #[test]
    fn test_message_is_forwarded_once() {
        let (handler, sender, sleeper) = setup();

        handler.handle("Hello").unwrap();

        assert_eq!(sender.sent(), vec!["Hello handled by Scotty"]);
        assert_eq!(sleeper.sleep_count(), 0);
        assert_eq!(handler.metrics().handled_total(), 1);
    }

    #[test]
    fn test_question_takes_slow_path() {
        let (handler, sender, sleeper) = setup();

        handler.handle("Hello?").unwrap();

        assert_eq!(sleeper.requests(), vec![DEFAULT_SLOW_PATH_DELAY]);
        assert_eq!(sender.sent(), vec!["Hello? handled by Scotty"]);
        assert_eq!(handler.metrics().slow_path_total(), 1);
    }

    #[test]
    fn test_only_trailing_question_mark_is_slow() {
        let (handler, _sender, sleeper) = setup();

        handler.handle("?Hello").unwrap();
        handler.handle("Hel?lo").unwrap();
        assert_eq!(sleeper.sleep_count(), 0);

        handler.handle("?").unwrap();
        assert_eq!(sleeper.sleep_count(), 1);
    }

    #[test]
    fn test_slow_path_blocks_with_thread_sleeper() {
        let sender = Arc::new(RecordingSender::default());
        let handler = RequestHandler::new("Scotty", sender.clone())
            .with_slow_path_delay(Duration::from_millis(50));

        let start = Instant::now();
        handler.handle("Hello?").unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
        assert_eq!(sender.sent().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            handler_name: "Uhura".to_string(),
            slow_path_delay_ms: 25,
            ..Default::default()
        };
        let handler = RequestHandler::from_config(&config, Arc::new(RecordingSender::default()));

        assert_eq!(handler.name(), "Uhura");
        assert_eq!(handler.slow_path_delay(), Duration::from_millis(25));
    }
}
