//! Test identifiers: the immutable records a test plan is made of

use serde::{Deserialize, Serialize};

/// Unique identifier for a node in a test plan
///
/// Serializes as a plain string (e.g. "[engine:x]/[class:Outer]")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestId(String);

impl TestId {
    /// Create a TestId from a string token
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TestId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Whether a plan node groups other nodes or is itself executable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestKind {
    Container,
    Test,
}

/// Source location a plan node was declared at
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Location {
    /// Declared by a whole class
    Class { class_name: String },
    /// Declared by a method; parameter types are fully qualified, in declared order
    Method {
        class_name: String,
        method_name: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        parameter_types: Vec<String>,
    },
}

impl Location {
    pub fn class(class_name: impl Into<String>) -> Self {
        Self::Class {
            class_name: class_name.into(),
        }
    }

    /// A method location without parameters
    pub fn method(class_name: impl Into<String>, method_name: impl Into<String>) -> Self {
        Self::Method {
            class_name: class_name.into(),
            method_name: method_name.into(),
            parameter_types: Vec::new(),
        }
    }

    pub fn method_with_params<I, S>(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        parameter_types: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Method {
            class_name: class_name.into(),
            method_name: method_name.into(),
            parameter_types: parameter_types.into_iter().map(Into::into).collect(),
        }
    }

    /// The class this location belongs to
    pub fn class_name(&self) -> &str {
        match self {
            Self::Class { class_name } | Self::Method { class_name, .. } => class_name,
        }
    }
}

/// An immutable record of a single test plan node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestIdentifier {
    /// Unique identifier, stable for the plan's lifetime
    pub id: TestId,
    /// Human-readable name
    pub display_name: String,
    /// Container or test
    pub kind: TestKind,
    /// Where the node was declared, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Parent node; absent only for roots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<TestId>,
}

impl TestIdentifier {
    /// Create a container identifier with no location and no parent
    pub fn container(id: impl Into<TestId>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, TestKind::Container)
    }

    /// Create a test identifier with no location and no parent
    pub fn test(id: impl Into<TestId>, display_name: impl Into<String>) -> Self {
        Self::new(id, display_name, TestKind::Test)
    }

    pub fn new(id: impl Into<TestId>, display_name: impl Into<String>, kind: TestKind) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            kind,
            location: None,
            parent_id: None,
        }
    }

    /// Set the source location
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the parent node
    pub fn with_parent(mut self, parent_id: impl Into<TestId>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_test(&self) -> bool {
        self.kind == TestKind::Test
    }

    pub fn is_container(&self) -> bool {
        self.kind == TestKind::Container
    }
}
