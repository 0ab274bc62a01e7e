//! TestTree: the legacy mirror of a test plan

use super::config::TreeConfig;
use super::filter::NodeFilter;
use super::node::{LegacyNode, NodeIndex};
use crate::error::StructuralError;
use crate::plan::{TestId, TestIdentifier, TestPlan};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

const ROOT: NodeIndex = NodeIndex(0);

/// Owns a test plan and its legacy class→method mirror
///
/// Every plan identifier maps to exactly one [`LegacyNode`]; the mapping and
/// the node arena only grow. Dynamic insertion takes `&mut self` and queries
/// take `&self`, so queries never race an insertion.
#[derive(Debug, Clone)]
pub struct TestTree {
    plan: TestPlan,
    config: TreeConfig,
    nodes: Vec<LegacyNode>,
    mapping: HashMap<TestId, NodeIndex>,
}

impl TestTree {
    /// Build the full mirror of `plan` under a root suite labelled `root_label`
    pub fn build(plan: TestPlan, root_label: impl Into<String>) -> Self {
        Self::with_config(plan, TreeConfig::default().with_root_label(root_label))
    }

    /// Build the full mirror of `plan` with explicit labels
    pub fn with_config(plan: TestPlan, config: TreeConfig) -> Self {
        let root = LegacyNode::root(ROOT, config.root_label.clone());
        let mut tree = Self {
            nodes: Vec::with_capacity(plan.len() + 1),
            mapping: HashMap::with_capacity(plan.len()),
            plan,
            config,
        };
        tree.nodes.push(root);

        let roots: Vec<(TestId, NodeIndex)> = tree
            .plan
            .roots()
            .into_iter()
            .map(|root| (root.id.clone(), ROOT))
            .collect();
        tree.attach_all(roots);

        debug!(
            root = %tree.config.root_label,
            mapped = tree.mapping.len(),
            "built legacy tree"
        );
        tree
    }

    /// Add an identifier discovered during execution
    ///
    /// The parent must already be mapped. The new node becomes the parent's
    /// last child and is visible to every later query.
    pub fn insert_dynamic(
        &mut self,
        identifier: TestIdentifier,
        parent_id: &TestId,
    ) -> Result<&LegacyNode, StructuralError> {
        let Some(&parent) = self.mapping.get(parent_id) else {
            return Err(StructuralError::UnmappedParent(parent_id.clone()));
        };

        if identifier.parent_id.as_ref() != Some(parent_id) {
            return Err(StructuralError::ParentMismatch {
                id: identifier.id,
                declared: identifier.parent_id,
                requested: parent_id.clone(),
            });
        }

        let id = identifier.id.clone();
        let node = LegacyNode::from_identifier(self.next_index(), &identifier, &self.plan, &self.config);
        self.plan.add(identifier)?;
        let index = self.attach(node, parent);
        self.attach_children(&id, index);

        debug!(id = %id, parent = %parent_id, node = %index, "inserted dynamic node");
        Ok(&self.nodes[index.0])
    }

    /// The synthetic root suite
    pub fn root_node(&self) -> &LegacyNode {
        &self.nodes[ROOT.0]
    }

    /// The node mapped to `id`, if any
    pub fn node_for(&self, id: &TestId) -> Option<&LegacyNode> {
        self.mapping.get(id).map(|index| &self.nodes[index.0])
    }

    /// Get a node by arena position
    pub fn node(&self, index: NodeIndex) -> Option<&LegacyNode> {
        self.nodes.get(index.0)
    }

    /// Direct children of a node, in insertion order
    pub fn children_of<'a>(&'a self, node: &'a LegacyNode) -> impl Iterator<Item = &'a LegacyNode> + 'a {
        node.children.iter().filter_map(move |index| self.node(*index))
    }

    /// The plan identifier a node was built from; `None` for the root
    pub fn identifier_for(&self, node: &LegacyNode) -> Option<&TestIdentifier> {
        node.stable_id.as_ref().and_then(|id| self.plan.get(id))
    }

    pub fn plan(&self) -> &TestPlan {
        &self.plan
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Number of mapped identifiers (the root is not mapped)
    pub fn mapped_count(&self) -> usize {
        self.mapping.len()
    }

    /// Number of mapped test nodes
    pub fn test_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_test()).count()
    }

    /// Test-kind descendants of `ancestor_id` in depth-first order
    pub fn tests_in_subtree(&self, ancestor_id: &TestId) -> Vec<&TestIdentifier> {
        let mut seen = HashSet::new();
        self.plan
            .descendants(ancestor_id)
            .into_iter()
            .filter(|identifier| identifier.is_test())
            .filter(|&identifier| seen.insert(&identifier.id))
            .collect()
    }

    /// Identifiers whose node matches `filter` and that have no matching descendant
    ///
    /// A matching container is kept unless one of its descendants also
    /// matches. Results follow node creation order.
    pub fn filtered_leaves<F>(&self, filter: &F) -> Vec<&TestIdentifier>
    where
        F: NodeFilter + ?Sized,
    {
        let candidates: HashSet<&TestId> = self
            .nodes
            .iter()
            .filter_map(|node| node.stable_id.as_ref().filter(|_| filter.should_run(node)))
            .collect();

        // Every ancestor of a candidate has a matching descendant. Stop a walk
        // at the first ancestor already recorded: the rest of its chain is too.
        let mut subsumed: HashSet<&TestId> = HashSet::new();
        for id in &candidates {
            let mut cursor = self.plan.parent(id);
            while let Some(ancestor) = cursor {
                if !subsumed.insert(&ancestor.id) {
                    break;
                }
                cursor = self.plan.parent(&ancestor.id);
            }
        }

        trace!(
            filter = %filter.describe(),
            candidates = candidates.len(),
            subsumed = subsumed.len(),
            "projected filter onto leaves"
        );

        self.nodes
            .iter()
            .filter_map(|node| node.stable_id.as_ref())
            .filter(|id| candidates.contains(id) && !subsumed.contains(id))
            .filter_map(|id| self.plan.get(id))
            .collect()
    }

    /// Convert the already-declared descendants of `id`, attaching under `index`
    fn attach_children(&mut self, id: &TestId, index: NodeIndex) {
        let children: Vec<(TestId, NodeIndex)> = self
            .plan
            .children(id)
            .into_iter()
            .map(|child| (child.id.clone(), index))
            .collect();
        self.attach_all(children);
    }

    /// Convert each `(id, parent)` pair and its subtree in pre-order
    ///
    /// Plans may nest arbitrarily deep, so the walk keeps its own stack.
    /// Siblings are pushed in reverse so the first one is converted first.
    fn attach_all(&mut self, mut pending: Vec<(TestId, NodeIndex)>) {
        pending.reverse();
        while let Some((id, parent)) = pending.pop() {
            let Some(identifier) = self.plan.get(&id) else {
                continue;
            };
            let node = LegacyNode::from_identifier(self.next_index(), identifier, &self.plan, &self.config);
            let index = self.attach(node, parent);

            let children = self.plan.children(&id);
            pending.extend(children.into_iter().rev().map(|child| (child.id.clone(), index)));
        }
    }

    /// Push `node` as the last child of `parent` and record its mapping
    fn attach(&mut self, node: LegacyNode, parent: NodeIndex) -> NodeIndex {
        let index = node.index;
        trace!(node = %index, parent = %parent, name = %node.display_name(), "attached node");

        if let Some(id) = &node.stable_id {
            self.mapping.insert(id.clone(), index);
        }
        self.nodes.push(node);
        self.nodes[parent.0].children.push(index);
        index
    }

    fn next_index(&self) -> NodeIndex {
        NodeIndex(self.nodes.len())
    }
}
