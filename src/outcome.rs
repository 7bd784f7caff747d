//! Outcomes and the channel that carries them back to the caller.
//!
//! An [`AsyncHandler`](crate::AsyncHandler) reports every call as exactly
//! one [`Outcome`]. The caller owns the receiving end of the channel and
//! reads outcomes in the order the background units finish.

use crate::error::{HandlerError, HandlerResult, ReceiveError};
use std::time::Duration;
use tokio::sync::mpsc;

/// Sending end of a result channel, held by the async handler.
pub type OutcomeSender = mpsc::UnboundedSender<Outcome>;

/// Receiving end of a result channel, held by the caller.
pub type OutcomeReceiver = mpsc::UnboundedReceiver<Outcome>;

/// The result of one handled message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(HandlerError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Human-readable failure reason, `None` on success.
    pub fn reason(&self) -> Option<String> {
        match self {
            Outcome::Success => None,
            Outcome::Failure(err) => Some(err.to_string()),
        }
    }

    pub fn into_result(self) -> HandlerResult<()> {
        match self {
            Outcome::Success => Ok(()),
            Outcome::Failure(err) => Err(err),
        }
    }
}

impl From<HandlerResult<()>> for Outcome {
    fn from(result: HandlerResult<()>) -> Self {
        match result {
            Ok(()) => Outcome::Success,
            Err(err) => Outcome::Failure(err),
        }
    }
}

/// Create a result channel.
///
/// The channel is unbounded so a background unit never blocks while
/// delivering, even if nobody ever reads its outcome.
pub fn result_channel() -> (OutcomeSender, OutcomeReceiver) {
    mpsc::unbounded_channel()
}

/// Wait at most `within` for the next outcome.
///
/// # Errors
///
/// Returns `ReceiveError::Timeout` if nothing arrives in time and
/// `ReceiveError::Closed` once every sender is gone and the channel is empty.
pub async fn recv_outcome(
    receiver: &mut OutcomeReceiver,
    within: Duration,
) -> Result<Outcome, ReceiveError> {
    match tokio::time::timeout(within, receiver.recv()).await {
        Ok(Some(outcome)) => Ok(outcome),
        Ok(None) => Err(ReceiveError::Closed),
        Err(_) => Err(ReceiveError::Timeout(within)),
    }
}
