//! Legacy node filters
//!
//! A filter is a side-effect-free predicate over [`LegacyNode`]s. Plain
//! closures qualify; the structs here cover the common legacy cases.

use super::node::LegacyNode;
use crate::plan::TestId;
use std::collections::HashSet;

/// A predicate the legacy consumer evaluates against tree nodes
pub trait NodeFilter {
    /// Whether the node should run
    fn should_run(&self, node: &LegacyNode) -> bool;

    /// Human-readable description of the filter
    fn describe(&self) -> String {
        "custom filter".to_string()
    }
}

impl<F> NodeFilter for F
where
    F: Fn(&LegacyNode) -> bool,
{
    fn should_run(&self, node: &LegacyNode) -> bool {
        self(node)
    }
}

/// Matches nodes whose stable id is in a fixed set
#[derive(Debug, Clone, Default)]
pub struct MatchIds {
    ids: HashSet<TestId>,
}

impl MatchIds {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TestId>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl NodeFilter for MatchIds {
    fn should_run(&self, node: &LegacyNode) -> bool {
        node.stable_id
            .as_ref()
            .map(|id| self.ids.contains(id))
            .unwrap_or(false)
    }

    fn describe(&self) -> String {
        let mut ids: Vec<&str> = self.ids.iter().map(TestId::as_str).collect();
        ids.sort_unstable();
        format!("ids in [{}]", ids.join(", "))
    }
}

/// Matches nodes with the given group name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup(pub String);

impl MatchGroup {
    pub fn new(group_name: impl Into<String>) -> Self {
        Self(group_name.into())
    }
}

impl NodeFilter for MatchGroup {
    fn should_run(&self, node: &LegacyNode) -> bool {
        node.group_name == self.0
    }

    fn describe(&self) -> String {
        format!("group {}", self.0)
    }
}

/// Matches nodes accepted by both filters
#[derive(Debug, Clone)]
pub struct Intersect<A, B>(pub A, pub B);

impl<A: NodeFilter, B: NodeFilter> NodeFilter for Intersect<A, B> {
    fn should_run(&self, node: &LegacyNode) -> bool {
        self.0.should_run(node) && self.1.should_run(node)
    }

    fn describe(&self) -> String {
        format!("{} and {}", self.0.describe(), self.1.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeIndex;

    fn test_node(id: &str, group: &str, case: &str) -> LegacyNode {
        LegacyNode {
            index: NodeIndex(1),
            group_name: group.to_string(),
            case_name: Some(case.to_string()),
            stable_id: Some(TestId::from(id)),
            children: Vec::new(),
        }
    }

    #[test]
    fn closures_are_filters() {
        let filter = |node: &LegacyNode| node.case_name.as_deref() == Some("testInner");
        assert!(filter.should_run(&test_node("a", "Inner", "testInner")));
        assert!(!filter.should_run(&test_node("b", "Outer", "testOuter")));
        assert_eq!(filter.describe(), "custom filter");
    }

    #[test]
    fn match_ids_ignores_root() {
        let filter = MatchIds::new(["a"]);
        let root = LegacyNode::root(NodeIndex(0), "plan");

        assert!(filter.should_run(&test_node("a", "G", "c")));
        assert!(!filter.should_run(&root));
    }

    #[test]
    fn intersect_requires_both() {
        let filter = Intersect(MatchIds::new(["a", "b"]), MatchGroup::new("Outer"));

        assert!(filter.should_run(&test_node("a", "Outer", "x")));
        assert!(!filter.should_run(&test_node("b", "Inner", "y")));
        assert_eq!(filter.describe(), "ids in [a, b] and group Outer");
    }
}
