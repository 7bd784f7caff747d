use handler_talk::Sender;
use std::sync::{Arc, Mutex};

/// Fake sender that records every call for later inspection.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeSender {
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl FakeSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Argument of the `index`-th call. Panics if there was no such call.
    pub fn send_args_for_call(&self, index: usize) -> String {
        let calls = self.calls.lock().unwrap();
        match calls.get(index) {
            Some(text) => text.clone(),
            None => panic!(
                "send was called {} time(s), requested call {}",
                calls.len(),
                index
            ),
        }
    }

    pub fn sent(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Sender for FakeSender {
    fn send(&self, text: &str) {
        self.calls.lock().unwrap().push(text.to_string());
    }
}
