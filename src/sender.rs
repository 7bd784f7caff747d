//! The sender capability a handler forwards messages to.

/// Forwards a derived message somewhere else.
///
/// Implementations are shared by every call on a handler, including calls
/// running concurrently on background units, so they must be safe to
/// invoke from several threads at once.
pub trait Sender: Send + Sync {
    fn send(&self, text: &str);
}

/// Sender that reports each message to the log instead of a remote system.
#[derive(Debug, Clone)]
pub struct LogSender {
    url: String,
}

impl LogSender {
    /// Create a new LogSender reporting to the given destination.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Sender for LogSender {
    fn send(&self, text: &str) {
        tracing::info!(url = %self.url, "sending '{}' to {}", text, self.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_log_sender_keeps_url() {
        let sender = LogSender::new("http://localhost:8080");
        assert_eq!(sender.url(), "http://localhost:8080");
    }

    #[test]
    fn test_log_sender_usable_as_trait_object() {
        let sender: Arc<dyn Sender> = Arc::new(LogSender::new("http://localhost:8080"));
        sender.send("Hello handled by Scotty");
    }
}
