//! Schema builder configuration.
//!
//! Loaded from a JSON file by the CLI; every key is optional and falls back to [`SchemaConfig::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaResult;
use crate::helpers::{AutoNameStrategy, Directives};
use crate::model::DirectiveType;

/// Schema builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaConfig {
    /// How type names are derived when no name override is annotated
    pub auto_name_strategy: AutoNameStrategy,
    /// Whether directive instances are built at all
    pub include_directives: bool,
    /// Whether the built-in `deprecated` directive is registered
    pub deprecation_directive: bool,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            auto_name_strategy: AutoNameStrategy::Default,
            include_directives: true,
            deprecation_directive: true,
        }
    }
}

impl SchemaConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a config from a JSON file
    pub fn load(path: &Path) -> SchemaResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Set the auto-name strategy
    pub fn with_auto_name_strategy(mut self, strategy: AutoNameStrategy) -> Self {
        self.auto_name_strategy = strategy;
        self
    }

    /// Enable or disable directives
    pub fn with_include_directives(mut self, include: bool) -> Self {
        self.include_directives = include;
        self
    }

    /// Enable or disable the built-in deprecation directive
    pub fn with_deprecation_directive(mut self, enabled: bool) -> Self {
        self.deprecation_directive = enabled;
        self
    }

    /// Build the directive registry for `types` according to this config.
    ///
    /// Returns `None` when directives are disabled, which leaves creators without a registry.
    pub fn directives(&self, types: impl IntoIterator<Item = DirectiveType>) -> Option<Directives> {
        if !self.include_directives {
            return None;
        }
        if self.deprecation_directive {
            Some(Directives::with_builtins(types))
        } else {
            Some(Directives::new(types))
        }
    }
}
