//! Handler Talk - a request handler and its asynchronous wrapper.
//!
//! The crate exists to give behaviour-driven tests something to exercise:
//! a handler that validates a message, sometimes takes its time, and
//! forwards the result to a collaborator, plus a wrapper that does the same
//! work in the background and reports back over a channel.
//!
//! # Architecture
//!
//! - **handler**: `RequestHandler` (synchronous) and `AsyncHandler` (background units)
//! - **sender**: the `Sender` capability handlers forward to
//! - **outcome**: `Outcome` values and the result channel that carries them
//! - **clock**: injectable delays, with a virtual sleeper for tests
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables
//! - **metrics**: counters for handled, rejected, and slow messages

pub mod clock;
pub mod config;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod outcome;
pub mod sender;

pub use clock::{Sleeper, ThreadSleeper, VirtualSleeper};
pub use config::Config;
pub use error::{ConfigError, HandlerError, HandlerResult, ReceiveError};
pub use handler::{AsyncHandler, Handler, RequestHandler};
pub use metrics::{Metrics, MetricsSummary};
pub use outcome::{recv_outcome, result_channel, Outcome, OutcomeReceiver, OutcomeSender};
pub use sender::{LogSender, Sender};
