//! Planbridge: hierarchical test plans on a two-level legacy test model
//!
//! Projects an arbitrary-depth forest of test containers and tests onto the
//! class→method tree a legacy runner understands, keeps both in step as tests
//! are generated during execution, and reduces legacy filter matches to the
//! leaf identifiers the runner can act on.
//!
//! # Core Concepts
//!
//! - **Plan**: the forest of [`TestIdentifier`]s produced by discovery
//! - **Legacy tree**: one [`LegacyNode`] per identifier, named by [`naming`]
//! - **Leaf projection**: filter matches minus those with a matching descendant
//!
//! # Example
//!
//! ```
//! use planbridge::{Location, MatchIds, TestIdentifier, TestPlan, TestTree};
//!
//! let plan = TestPlan::from_identifiers([
//!     TestIdentifier::container("outer", "Outer"),
//!     TestIdentifier::test("outer-test", "testOuter()")
//!         .with_parent("outer")
//!         .with_location(Location::method("com.example.Outer", "testOuter")),
//! ])
//! .unwrap();
//!
//! let tree = TestTree::build(plan, "com.example.AllTests");
//! let leaves = tree.filtered_leaves(&MatchIds::new(["outer", "outer-test"]));
//! assert_eq!(leaves.len(), 1);
//! assert_eq!(leaves[0].id.as_str(), "outer-test");
//! ```

mod error;
pub mod naming;
pub mod notify;
mod plan;
pub mod tree;

pub use error::{BridgeError, BridgeResult, StructuralError};
pub use naming::{LegacyName, UNROOTED};
pub use notify::{ExecutionEvent, LegacyNotifier, Notification, Outcome, RecordingNotifier, RunBridge};
pub use plan::{Location, PlanSnapshot, TestId, TestIdentifier, TestKind, TestPlan};
pub use tree::{Intersect, LegacyNode, MatchGroup, MatchIds, NodeFilter, NodeIndex, TestTree, TreeConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
