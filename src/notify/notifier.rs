//! LegacyNotifier trait and an in-memory recorder

use crate::tree::LegacyNode;

/// Receives execution notifications in legacy terms
///
/// Only test nodes are started and finished. Suites may receive failures
/// and assumption failures (a container that failed or aborted as a whole)
/// and are expanded into their tests when skipped.
pub trait LegacyNotifier {
    fn test_started(&mut self, node: &LegacyNode);

    fn test_finished(&mut self, node: &LegacyNode);

    fn test_ignored(&mut self, node: &LegacyNode, reason: &str);

    fn test_failure(&mut self, node: &LegacyNode, message: &str);

    fn test_assumption_failure(&mut self, node: &LegacyNode, message: &str);
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Started(String),
    Finished(String),
    Ignored { name: String, reason: String },
    Failure { name: String, message: String },
    AssumptionFailure { name: String, message: String },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Started(name) => write!(f, "started {}", name),
            Self::Finished(name) => write!(f, "finished {}", name),
            Self::Ignored { name, .. } => write!(f, "ignored {}", name),
            Self::Failure { name, .. } => write!(f, "failed {}", name),
            Self::AssumptionFailure { name, .. } => write!(f, "aborted {}", name),
        }
    }
}

/// Records notifications in call order
///
/// Each fixture owns its own recorder, so call sequences never leak between
/// tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    log: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.log
    }

    /// The call sequence as `"<verb> <display name>"` lines
    pub fn calls(&self) -> Vec<String> {
        self.log.iter().map(ToString::to_string).collect()
    }

    pub fn count(&self, predicate: impl Fn(&Notification) -> bool) -> usize {
        self.log.iter().filter(|n| predicate(*n)).count()
    }

    pub fn clear(&mut self) {
        self.log.clear();
    }
}

impl LegacyNotifier for RecordingNotifier {
    fn test_started(&mut self, node: &LegacyNode) {
        self.log.push(Notification::Started(node.display_name()));
    }

    fn test_finished(&mut self, node: &LegacyNode) {
        self.log.push(Notification::Finished(node.display_name()));
    }

    fn test_ignored(&mut self, node: &LegacyNode, reason: &str) {
        self.log.push(Notification::Ignored {
            name: node.display_name(),
            reason: reason.to_string(),
        });
    }

    fn test_failure(&mut self, node: &LegacyNode, message: &str) {
        self.log.push(Notification::Failure {
            name: node.display_name(),
            message: message.to_string(),
        });
    }

    fn test_assumption_failure(&mut self, node: &LegacyNode, message: &str) {
        self.log.push(Notification::AssumptionFailure {
            name: node.display_name(),
            message: message.to_string(),
        });
    }
}
