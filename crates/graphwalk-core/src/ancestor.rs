//! Earliest-ancestor search over a child -> parents relation
//!
//! The earliest ancestor of a vertex is the final vertex of its longest
//! ancestry chain. When several chains tie on length, the one ending in the
//! smallest identifier wins.

use std::collections::BTreeMap;

use crate::graph::VertexId;

/// Returned by [`earliest_ancestor`] when the start has no recorded parents
pub const NO_ANCESTOR: i64 = -1;

/// Child -> parents mapping built once from `(parent, child)` pairs.
///
/// Parents keep insertion order and duplicates.
#[derive(Debug, Clone)]
pub struct AncestorMap<V> {
    parents: BTreeMap<V, Vec<V>>,
}

impl<V: VertexId> AncestorMap<V> {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut parents: BTreeMap<V, Vec<V>> = BTreeMap::new();
        for (parent, child) in pairs {
            parents.entry(child).or_default().push(parent);
        }
        AncestorMap { parents }
    }

    /// Recorded parents of `child`, empty if it has none
    pub fn parents_of(&self, child: &V) -> &[V] {
        self.parents.get(child).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of children with at least one recorded parent
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Longest ancestry chain starting at `start`, or `None` when `start`
    /// has no parents.
    ///
    /// Exhaustive depth-first search where every frontier entry owns its
    /// full path. A parent already on the path is not followed again, so
    /// cyclic input still terminates.
    pub fn longest_ancestry(&self, start: &V) -> Option<Vec<V>> {
        if self.parents_of(start).is_empty() {
            return None;
        }

        let mut best: Vec<V> = vec![start.clone()];
        let mut stack: Vec<Vec<V>> = vec![best.clone()];

        while let Some(ancestry) = stack.pop() {
            let Some(last) = ancestry.last() else {
                continue;
            };

            let mut extended = false;
            for parent in self.parents_of(last) {
                if ancestry.contains(parent) {
                    continue;
                }
                let mut next = ancestry.clone();
                next.push(parent.clone());
                stack.push(next);
                extended = true;
            }

            if !extended && is_better(&ancestry, &best) {
                best = ancestry;
            }
        }

        tracing::trace!(start = %start, depth = best.len() - 1, "longest ancestry");
        Some(best)
    }

    /// Oldest ancestor of `start`, or `None` when it has no parents
    pub fn earliest_ancestor(&self, start: &V) -> Option<V> {
        self.longest_ancestry(start)
            .and_then(|ancestry| ancestry.last().cloned())
    }
}

/// Longer wins; equal length goes to the smaller final vertex
fn is_better<V: Ord>(candidate: &[V], best: &[V]) -> bool {
    match candidate.len().cmp(&best.len()) {
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Equal => candidate.last() < best.last(),
    }
}

/// Earliest ancestor of `start` given `(parent, child)` pairs, or
/// [`NO_ANCESTOR`] if `start` has no parents
pub fn earliest_ancestor(pairs: &[(i64, i64)], start: i64) -> i64 {
    AncestorMap::from_pairs(pairs.iter().copied())
        .earliest_ancestor(&start)
        .unwrap_or(NO_ANCESTOR)
}
