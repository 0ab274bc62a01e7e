//! Source test plan: identifiers and the forest they form

mod forest;
mod identifier;
mod snapshot;

pub use forest::TestPlan;
pub use identifier::{Location, TestId, TestIdentifier, TestKind};
pub use snapshot::PlanSnapshot;
