//! Two-level legacy naming for plan identifiers
//!
//! The legacy model knows exactly two naming levels: a group (class-like
//! scope) and a case (method-like label). Plan identifiers may sit at any
//! depth and carry heterogeneous location metadata, so names are resolved with
//! a fixed fallback chain:
//!
//! - **case**: class location → class name; method location → method name,
//!   with `(p1,p2,...)` appended when it has parameters; no location →
//!   display name.
//! - **group**: any location → its class name; otherwise the display name of
//!   the immediate parent, or the unrooted sentinel for roots. The parent
//!   fallback looks exactly one level up.

use crate::plan::{Location, TestIdentifier, TestPlan};

/// Group name used for identifiers with neither a location nor a parent
pub const UNROOTED: &str = "<unrooted>";

/// A resolved legacy (group, case) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyName {
    pub group_name: String,
    pub case_name: String,
}

/// Resolve both names using the default unrooted sentinel
pub fn resolve(identifier: &TestIdentifier, plan: &TestPlan) -> LegacyName {
    resolve_with(identifier, plan, UNROOTED)
}

/// Resolve both names with a caller-chosen unrooted sentinel
pub fn resolve_with(identifier: &TestIdentifier, plan: &TestPlan, unrooted: &str) -> LegacyName {
    LegacyName {
        group_name: group_name(identifier, plan, unrooted),
        case_name: case_name(identifier),
    }
}

/// The method-like label of a test identifier
pub fn case_name(identifier: &TestIdentifier) -> String {
    match &identifier.location {
        Some(Location::Class { class_name }) => class_name.clone(),
        Some(Location::Method {
            method_name,
            parameter_types,
            ..
        }) => {
            if parameter_types.is_empty() {
                method_name.clone()
            } else {
                format!("{}({})", method_name, parameter_types.join(","))
            }
        }
        None => identifier.display_name.clone(),
    }
}

/// The class-like scope of an identifier
///
/// Reads the parent through `parent_id`, so it also works for an identifier
/// that is about to be added under an existing parent.
pub fn group_name(identifier: &TestIdentifier, plan: &TestPlan, unrooted: &str) -> String {
    match &identifier.location {
        Some(location) => location.class_name().to_string(),
        None => identifier
            .parent_id
            .as_ref()
            .and_then(|parent_id| plan.get(parent_id))
            .map(|parent| parent.display_name.clone())
            .unwrap_or_else(|| unrooted.to_string()),
    }
}
