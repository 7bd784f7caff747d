mod fake_sender;

pub use fake_sender::FakeSender;
