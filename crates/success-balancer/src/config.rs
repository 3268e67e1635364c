//! balancer.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::BalancerResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BalancerConfig {
    pub range: RangeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RangeConfig {
    pub filter: RangeFilter,
}

/// How agents are narrowed to the active score range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeFilter {
    /// Walk agents in ascending order, keep those at or above the lowest
    /// customer score, and stop right after the first agent at or above
    /// the highest customer score.
    #[default]
    FirstAtOrAboveHighest,
    /// Keep every agent at or above the lowest customer score.
    ///
    /// Agents past the first one covering the highest score show up in the
    /// tally with zero claims; the winner is unchanged.
    AllFromLowest,
}

impl BalancerConfig {
    pub fn from_toml_str(content: &str) -> BalancerResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn with_range_filter(mut self, filter: RangeFilter) -> Self {
        self.range.filter = filter;
        self
    }
}
