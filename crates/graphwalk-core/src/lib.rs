//! Graphwalk Core Library
//!
//! Directed graph storage, breadth-first and depth-first traversal,
//! shortest-path reconstruction, earliest-ancestor search and a small
//! social network simulator built on the same graph.

pub mod ancestor;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod social;
