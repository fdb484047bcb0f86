//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{Order, Strategy};

/// Top-level configuration read from `graphwalk.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default traversal and path-search behavior
    #[serde(default)]
    pub traversal: TraversalConfig,

    /// Social network simulation parameters
    #[serde(default)]
    pub social: SocialConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    /// Visitation order for `traverse` (default bft)
    #[serde(default)]
    pub order: Order,

    /// Frontier discipline for `path` (default bfs)
    #[serde(default)]
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialConfig {
    /// Number of users to create (default 10)
    #[serde(default = "default_users")]
    pub users: usize,

    /// Average friendships per user (default 2)
    #[serde(default = "default_avg_friendships")]
    pub avg_friendships: usize,

    /// Seed for reproducible populations; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SocialConfig {
    fn default() -> Self {
        SocialConfig {
            users: default_users(),
            avg_friendships: default_avg_friendships(),
            seed: None,
        }
    }
}

fn default_users() -> usize {
    10
}

fn default_avg_friendships() -> usize {
    2
}
