//! Legacy two-level tree built from a test plan

mod adapter;
mod config;
mod filter;
mod node;


pub use adapter::TestTree;
pub use config::TreeConfig;
pub use filter::{Intersect, MatchGroup, MatchIds, NodeFilter};
pub use node::{LegacyNode, NodeIndex};
