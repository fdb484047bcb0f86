//! Directed graph storage, traversal and path-finding
//!
//! - `store`: adjacency storage with checked vertex/edge insertion
//! - `traversal`: lazy breadth-first and depth-first walks
//! - `search`: BFS/DFS path search and parent-pointer path reconstruction

pub mod search;
pub mod store;
pub mod traversal;
pub mod types;

pub use search::reconstruct_path;
pub use store::Graph;
pub use traversal::{Bft, Dft, Frontier, Walk};
pub use types::{GraphSpec, Order, PathResult, Strategy, TraversalResult, VertexId};
