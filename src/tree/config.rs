//! Configuration for building a legacy tree

use crate::naming::UNROOTED;
use serde::{Deserialize, Serialize};

/// Labels used when projecting a plan into the legacy tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Label of the synthetic root suite
    pub root_label: String,
    /// Group name for tests with neither a location nor a parent
    pub unrooted_label: String,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root_label: "plan".to_string(),
            unrooted_label: UNROOTED.to_string(),
        }
    }
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root_label(mut self, label: impl Into<String>) -> Self {
        self.root_label = label.into();
        self
    }

    pub fn with_unrooted_label(mut self, label: impl Into<String>) -> Self {
        self.unrooted_label = label.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: TreeConfig = serde_json::from_str(r#"{ "root_label": "com.example.AllTests" }"#).unwrap();
        assert_eq!(config.root_label, "com.example.AllTests");
        assert_eq!(config.unrooted_label, UNROOTED);
    }
}
