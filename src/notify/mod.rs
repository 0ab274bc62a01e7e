//! Execution bridge
//!
//! Translates the engine's execution events into legacy notifications,
//! growing the tree for tests registered at execution time.

mod bridge;
mod events;
mod notifier;

pub use bridge::RunBridge;
pub use events::{ExecutionEvent, Outcome};
pub use notifier::{LegacyNotifier, Notification, RecordingNotifier};
