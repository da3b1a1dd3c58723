//! Observability subsystem
//!
//! Structured JSON logging for advisor runs. One log line = one event,
//! deterministic key ordering, synchronous writes.

mod logger;

pub use logger::{Logger, Severity};
