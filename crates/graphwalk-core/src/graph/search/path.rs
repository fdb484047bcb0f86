//! Path reconstruction from parent pointers

use std::collections::BTreeMap;

use crate::error::{GraphError, Result};
use crate::graph::types::VertexId;

/// Walk parent links from `to` back to `from` and return the path in
/// forward order.
///
/// `from` has no parent entry; every other vertex on the path must have
/// one, otherwise `to` is reported as unreachable.
pub fn reconstruct_path<V: VertexId>(
    from: &V,
    to: &V,
    parents: &BTreeMap<V, V>,
) -> Result<Vec<V>> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        // A well-formed parent map never needs more steps than it has entries
        if path.len() > parents.len() {
            return Err(GraphError::unreachable(from, to));
        }
        match parents.get(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => return Err(GraphError::unreachable(from, to)),
        }
    }

    path.reverse();
    Ok(path)
}
