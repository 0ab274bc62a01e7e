//! RunBridge: drives a legacy tree and notifier from execution events

use super::events::{ExecutionEvent, Outcome};
use super::notifier::LegacyNotifier;
use crate::error::StructuralError;
use crate::plan::{TestId, TestIdentifier};
use crate::tree::{LegacyNode, TestTree};
use tracing::{debug, warn};

/// Translates engine events into legacy notifications
///
/// Dynamic registrations grow the tree before any later event can refer to
/// them. Events about ids the tree never mapped are ignored.
#[derive(Debug)]
pub struct RunBridge<N> {
    tree: TestTree,
    notifier: N,
}

impl<N: LegacyNotifier> RunBridge<N> {
    pub fn new(tree: TestTree, notifier: N) -> Self {
        Self { tree, notifier }
    }

    pub fn tree(&self) -> &TestTree {
        &self.tree
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (TestTree, N) {
        (self.tree, self.notifier)
    }

    /// Handle one event
    ///
    /// Only a rejected dynamic registration fails; the error is the tree's.
    pub fn handle(&mut self, event: ExecutionEvent) -> Result<(), StructuralError> {
        if let ExecutionEvent::DynamicTestRegistered(identifier) = event {
            return self.register(identifier);
        }

        let Some(node) = self.tree.node_for(event.id()) else {
            debug!(id = %event.id(), "ignoring event for unmapped node");
            return Ok(());
        };

        match &event {
            ExecutionEvent::Started(_) => {
                if node.is_test() {
                    self.notifier.test_started(node);
                }
            }
            ExecutionEvent::Skipped { id, reason } => {
                Self::skipped(&self.tree, &mut self.notifier, node, id, reason)
            }
            ExecutionEvent::Finished { outcome, .. } => Self::finished(&mut self.notifier, node, outcome),
            ExecutionEvent::DynamicTestRegistered(_) => {}
        }
        Ok(())
    }

    /// Handle events in order, stopping at the first failure
    pub fn handle_all<I>(&mut self, events: I) -> Result<(), StructuralError>
    where
        I: IntoIterator<Item = ExecutionEvent>,
    {
        events.into_iter().try_for_each(|event| self.handle(event))
    }

    fn register(&mut self, identifier: TestIdentifier) -> Result<(), StructuralError> {
        let Some(parent_id) = identifier.parent_id.clone() else {
            return Err(StructuralError::MissingParent(identifier.id));
        };

        self.tree
            .insert_dynamic(identifier, &parent_id)
            .map(|_| ())
            .map_err(|err| {
                warn!(error = %err, parent = %parent_id, "rejected dynamic registration");
                err
            })
    }

    /// A skipped container is reported as each of its tests being ignored
    fn skipped(tree: &TestTree, notifier: &mut N, node: &LegacyNode, id: &TestId, reason: &str) {
        if node.is_test() {
            notifier.test_ignored(node, reason);
            return;
        }

        for test in tree.tests_in_subtree(id) {
            if let Some(test_node) = tree.node_for(&test.id) {
                notifier.test_ignored(test_node, reason);
            }
        }
    }

    /// Failures and assumption failures reach containers too; only tests finish
    fn finished(notifier: &mut N, node: &LegacyNode, outcome: &Outcome) {
        match outcome {
            Outcome::Successful => {}
            Outcome::Aborted(message) => notifier.test_assumption_failure(node, message),
            Outcome::Failed(message) => notifier.test_failure(node, message),
        }

        if node.is_test() {
            notifier.test_finished(node);
        }
    }
}
