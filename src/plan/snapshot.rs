//! JSON snapshots of a discovered plan

use super::forest::TestPlan;
use super::identifier::TestIdentifier;
use crate::error::BridgeResult;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Serialized form of a plan: identifiers in discovery order
///
/// Parents always precede their children, so replaying the list through
/// [`TestPlan::add`] reconstructs the same forest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanSnapshot {
    pub identifiers: Vec<TestIdentifier>,
}

impl PlanSnapshot {
    /// Rebuild the plan, surfacing structural errors from `add`
    pub fn into_plan(self) -> BridgeResult<TestPlan> {
        Ok(TestPlan::from_identifiers(self.identifiers)?)
    }
}

impl TestPlan {
    /// Load a plan from a JSON snapshot
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        let snapshot: PlanSnapshot = serde_json::from_str(json)?;
        snapshot.into_plan()
    }

    /// Load a plan from a reader producing a JSON snapshot
    pub fn from_reader(reader: impl Read) -> BridgeResult<Self> {
        let snapshot: PlanSnapshot = serde_json::from_reader(reader)?;
        snapshot.into_plan()
    }

    /// Capture the plan in depth-first order
    pub fn to_snapshot(&self) -> PlanSnapshot {
        PlanSnapshot {
            identifiers: self.iter_preorder().into_iter().cloned().collect(),
        }
    }

    pub fn to_json(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_snapshot())?)
    }
}
