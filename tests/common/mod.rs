//! Shared helpers for handler integration tests.

use std::time::Duration;
use tokio::time::Instant;

/// Poll `condition` until it holds or `within` has passed.
#[allow(dead_code)]
pub async fn eventually<F>(within: Duration, mut condition: F) -> bool
where
    F: FnMut() -> bool,
{
    let deadline = Instant::now() + within;
    loop {
        if condition() {
            return true;
        }
        if Instant::now() >= deadline {
            return false;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

/// Assert that a forwarded message carries the input and ends with the handler's name.
#[allow(dead_code)]
pub fn assert_handled_by(message: &str, input: &str, name: &str) {
    assert!(
        message.contains(input),
        "'{}' should contain the input '{}'",
        message,
        input
    );
    assert!(
        message.ends_with(name),
        "'{}' should end with the handler name '{}'",
        message,
        name
    );
}
