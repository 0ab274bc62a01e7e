//! Execution events raised by the engine while a plan runs

use crate::plan::{TestId, TestIdentifier};

/// How an executed node ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Successful,
    /// An assumption did not hold; the node neither passed nor failed
    Aborted(String),
    Failed(String),
}

/// An event the execution engine reports for a plan node
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionEvent {
    /// A node was generated at execution time under its declared parent
    DynamicTestRegistered(TestIdentifier),
    /// A node started executing
    Started(TestId),
    /// A node was skipped without executing
    Skipped { id: TestId, reason: String },
    /// A node finished executing
    Finished { id: TestId, outcome: Outcome },
}

impl ExecutionEvent {
    pub fn started(id: impl Into<TestId>) -> Self {
        Self::Started(id.into())
    }

    pub fn skipped(id: impl Into<TestId>, reason: impl Into<String>) -> Self {
        Self::Skipped {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn finished(id: impl Into<TestId>, outcome: Outcome) -> Self {
        Self::Finished {
            id: id.into(),
            outcome,
        }
    }

    /// The plan node this event is about
    pub fn id(&self) -> &TestId {
        match self {
            Self::DynamicTestRegistered(identifier) => &identifier.id,
            Self::Started(id) | Self::Skipped { id, .. } | Self::Finished { id, .. } => id,
        }
    }
}
