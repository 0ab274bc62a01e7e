//! TestPlan: the forest of identifiers produced by discovery

use super::identifier::{TestId, TestIdentifier};
use crate::error::StructuralError;
use std::collections::{HashMap, HashSet};

/// The full forest of test identifiers
///
/// Grows by insertion only. Roots and children keep discovery order.
#[derive(Debug, Clone, Default)]
pub struct TestPlan {
    identifiers: HashMap<TestId, TestIdentifier>,
    roots: Vec<TestId>,
    children: HashMap<TestId, Vec<TestId>>,
}

impl TestPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan by adding identifiers in discovery order
    pub fn from_identifiers<I>(identifiers: I) -> Result<Self, StructuralError>
    where
        I: IntoIterator<Item = TestIdentifier>,
    {
        let mut plan = Self::new();
        for identifier in identifiers {
            plan.add(identifier)?;
        }
        Ok(plan)
    }

    /// Register a new identifier under its declared parent
    ///
    /// Fails without touching the plan if the id is already present or the
    /// declared parent is unknown.
    pub fn add(&mut self, identifier: TestIdentifier) -> Result<(), StructuralError> {
        if self.identifiers.contains_key(&identifier.id) {
            return Err(StructuralError::DuplicateId(identifier.id));
        }

        match &identifier.parent_id {
            Some(parent_id) => {
                if !self.identifiers.contains_key(parent_id) {
                    return Err(StructuralError::NoSuchParent(parent_id.clone()));
                }
                self.children
                    .entry(parent_id.clone())
                    .or_default()
                    .push(identifier.id.clone());
            }
            None => self.roots.push(identifier.id.clone()),
        }

        self.identifiers.insert(identifier.id.clone(), identifier);
        Ok(())
    }

    /// Top-level identifiers in discovery order
    pub fn roots(&self) -> Vec<&TestIdentifier> {
        self.resolve(&self.roots)
    }

    /// Direct children in order; empty for leaves and unknown ids
    pub fn children(&self, id: &TestId) -> Vec<&TestIdentifier> {
        self.children
            .get(id)
            .map(|ids| self.resolve(ids))
            .unwrap_or_default()
    }

    /// All transitive children in depth-first pre-order, excluding `id` itself
    pub fn descendants(&self, id: &TestId) -> Vec<&TestIdentifier> {
        let mut result = Vec::new();
        let mut stack: Vec<&TestId> = match self.children.get(id) {
            Some(ids) => ids.iter().rev().collect(),
            None => return result,
        };

        while let Some(next) = stack.pop() {
            if let Some(identifier) = self.identifiers.get(next) {
                result.push(identifier);
            }
            if let Some(ids) = self.children.get(next) {
                stack.extend(ids.iter().rev());
            }
        }

        result
    }

    /// Ids of all transitive children, for membership checks
    pub fn descendant_ids(&self, id: &TestId) -> HashSet<&TestId> {
        self.descendants(id).into_iter().map(|d| &d.id).collect()
    }

    /// The parent identifier, if `id` is known and not a root
    pub fn parent(&self, id: &TestId) -> Option<&TestIdentifier> {
        self.identifiers
            .get(id)
            .and_then(|identifier| identifier.parent_id.as_ref())
            .and_then(|parent_id| self.identifiers.get(parent_id))
    }

    /// Get an identifier by id
    pub fn get(&self, id: &TestId) -> Option<&TestIdentifier> {
        self.identifiers.get(id)
    }

    pub fn contains(&self, id: &TestId) -> bool {
        self.identifiers.contains_key(id)
    }

    /// Number of identifiers in the plan
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Number of test-kind identifiers in the plan
    pub fn test_count(&self) -> usize {
        self.identifiers.values().filter(|i| i.is_test()).count()
    }

    /// All identifiers in depth-first pre-order from the roots
    pub fn iter_preorder(&self) -> Vec<&TestIdentifier> {
        let mut result = Vec::with_capacity(self.identifiers.len());
        for root in self.roots() {
            result.push(root);
            result.extend(self.descendants(&root.id));
        }
        result
    }

    fn resolve(&self, ids: &[TestId]) -> Vec<&TestIdentifier> {
        ids.iter().filter_map(|id| self.identifiers.get(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(identifiers: Vec<&TestIdentifier>) -> Vec<&str> {
        identifiers.into_iter().map(|i| i.id.as_str()).collect()
    }

    fn sample_plan() -> TestPlan {
        // a -> b -> d
        //   -> c
        // e
        TestPlan::from_identifiers([
            TestIdentifier::container("a", "A"),
            TestIdentifier::container("b", "B").with_parent("a"),
            TestIdentifier::test("c", "C").with_parent("a"),
            TestIdentifier::test("d", "D").with_parent("b"),
            TestIdentifier::container("e", "E"),
        ])
        .unwrap()
    }

    #[test]
    fn test_roots_keep_discovery_order() {
        let plan = sample_plan();
        assert_eq!(ids(plan.roots()), vec!["a", "e"]);
    }

    #[test]
    fn test_children_of_leaf_and_unknown_are_empty() {
        let plan = sample_plan();
        assert_eq!(ids(plan.children(&"a".into())), vec!["b", "c"]);
        assert!(plan.children(&"d".into()).is_empty());
        assert!(plan.children(&"missing".into()).is_empty());
    }

    #[test]
    fn test_descendants_are_preorder_and_exclude_self() {
        let plan = sample_plan();
        assert_eq!(ids(plan.descendants(&"a".into())), vec!["b", "d", "c"]);
        assert!(plan.descendants(&"e".into()).is_empty());
        assert!(plan.descendants(&"missing".into()).is_empty());
    }

    #[test]
    fn test_parent_lookup() {
        let plan = sample_plan();
        assert_eq!(plan.parent(&"d".into()).map(|p| p.id.as_str()), Some("b"));
        assert!(plan.parent(&"a".into()).is_none());
        assert!(plan.parent(&"missing".into()).is_none());
    }

    #[test]
    fn test_add_rejects_unknown_parent() {
        let mut plan = sample_plan();
        let err = plan
            .add(TestIdentifier::test("x", "X").with_parent("nope"))
            .unwrap_err();
        assert_eq!(err, StructuralError::NoSuchParent("nope".into()));
        assert!(!plan.contains(&"x".into()));
    }

    #[test]
    fn test_add_rejects_duplicate_without_mutation() {
        let mut plan = sample_plan();
        let before = plan.len();

        // Same id, different parent: must not be re-linked under "e"
        let err = plan
            .add(TestIdentifier::test("d", "Other").with_parent("e"))
            .unwrap_err();

        assert_eq!(err, StructuralError::DuplicateId("d".into()));
        assert_eq!(plan.len(), before);
        assert!(plan.children(&"e".into()).is_empty());
        assert_eq!(plan.get(&"d".into()).unwrap().display_name, "D");
    }

    #[test]
    fn test_late_add_appends_child() {
        let mut plan = sample_plan();
        plan.add(TestIdentifier::test("f", "F").with_parent("a")).unwrap();
        assert_eq!(ids(plan.children(&"a".into())), vec!["b", "c", "f"]);
        assert_eq!(ids(plan.descendants(&"a".into())), vec!["b", "d", "c", "f"]);
    }

    #[test]
    fn test_counts_and_preorder() {
        let plan = sample_plan();
        assert_eq!(plan.len(), 5);
        assert_eq!(plan.test_count(), 2);
        assert_eq!(ids(plan.iter_preorder()), vec!["a", "b", "d", "c", "e"]);
    }
}
