//! Error types shared by the plan and the legacy tree

use crate::plan::TestId;
use thiserror::Error;

/// A caller violated the structural contract of the plan or the tree
///
/// Always fatal to the offending call; the plan and tree are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    #[error("duplicate id: {0}")]
    DuplicateId(TestId),

    #[error("no such parent: {0}")]
    NoSuchParent(TestId),

    #[error("unmapped parent: {0}")]
    UnmappedParent(TestId),

    #[error("dynamic identifier {0} declares no parent")]
    MissingParent(TestId),

    #[error("identifier {id} declares parent {declared:?} but was inserted under {requested}")]
    ParentMismatch {
        id: TestId,
        declared: Option<TestId>,
        requested: TestId,
    },
}

/// Errors that can occur when loading plans or driving the tree
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for planbridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
