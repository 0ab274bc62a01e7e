//! Legacy tree nodes: the two-level mirror of plan identifiers

use super::config::TreeConfig;
use crate::naming;
use crate::plan::{TestId, TestIdentifier, TestPlan};

/// Position of a node in the tree's arena
///
/// Stable for the lifetime of the tree; nodes are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(pub(super) usize);

impl std::fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node in the legacy class→method tree
///
/// Suites (the synthetic root and every container) carry only a group name.
/// Tests additionally carry a case name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyNode {
    /// Arena position
    pub index: NodeIndex,
    /// Class-like scope, or the suite label for containers
    pub group_name: String,
    /// Method-like label; present only for tests
    pub case_name: Option<String>,
    /// Id of the originating identifier; absent only for the synthetic root
    pub stable_id: Option<TestId>,
    pub(super) children: Vec<NodeIndex>,
}

impl LegacyNode {
    pub(super) fn root(index: NodeIndex, label: impl Into<String>) -> Self {
        Self {
            index,
            group_name: label.into(),
            case_name: None,
            stable_id: None,
            children: Vec::new(),
        }
    }

    /// Convert a plan identifier, resolving test names against the plan
    pub(super) fn from_identifier(
        index: NodeIndex,
        identifier: &TestIdentifier,
        plan: &TestPlan,
        config: &TreeConfig,
    ) -> Self {
        let (group_name, case_name) = if identifier.is_test() {
            let name = naming::resolve_with(identifier, plan, &config.unrooted_label);
            (name.group_name, Some(name.case_name))
        } else {
            (identifier.display_name.clone(), None)
        };

        Self {
            index,
            group_name,
            case_name,
            stable_id: Some(identifier.id.clone()),
            children: Vec::new(),
        }
    }

    pub fn is_test(&self) -> bool {
        self.case_name.is_some()
    }

    pub fn is_suite(&self) -> bool {
        self.case_name.is_none()
    }

    /// Child positions in insertion order
    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    /// Legacy display name: `case(group)` for tests, the group for suites
    pub fn display_name(&self) -> String {
        match &self.case_name {
            Some(case_name) => format!("{}({})", case_name, self.group_name),
            None => self.group_name.clone(),
        }
    }
}
