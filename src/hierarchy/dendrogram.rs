//! Merge history of an agglomeration run.
//!
//! Nodes use SciPy/MATLAB-style labels:
//! - leaves (the initial clusters): `0..n_items`
//! - merge `m` creates node `n_items + m`
//!
//! Node labels stay fixed for the whole run, unlike positions in the cluster
//! array, which shift on every removal.

use crate::error::{Error, Result};

/// A dendrogram representing the sequence of cluster merges.
#[derive(Debug, Clone)]
pub struct Dendrogram {
    merges: Vec<Merge>,
    /// Number of leaves.
    n_items: usize,
}

/// A single merge operation in the dendrogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Merge {
    /// Node that absorbed the other.
    pub node_a: usize,
    /// Node that was absorbed.
    pub node_b: usize,
    /// Average-linkage distance at which the merge occurred.
    pub distance: f64,
    /// Number of objects in the resulting cluster.
    pub size: usize,
}

impl Dendrogram {
    /// Create an empty dendrogram over `n_items` leaves.
    pub fn new(n_items: usize) -> Self {
        Self {
            merges: Vec::with_capacity(n_items.saturating_sub(1)),
            n_items,
        }
    }

    /// Record a merge. Returns the label of the new node.
    pub fn add_merge(&mut self, node_a: usize, node_b: usize, distance: f64, size: usize) -> usize {
        self.merges.push(Merge {
            node_a,
            node_b,
            distance,
            size,
        });
        self.n_items + self.merges.len() - 1
    }

    /// Leaf labels after replaying merges until `k` clusters remain.
    ///
    /// Labels are consecutive from 0, numbered by first appearance in leaf
    /// order.
    pub fn cut_to_k(&self, k: usize) -> Result<Vec<usize>> {
        if k == 0 || k > self.n_items {
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: self.n_items,
            });
        }

        let n_merges = self.n_items - k;
        if n_merges > self.merges.len() {
            // Not enough history recorded to get down to k.
            return Err(Error::InvalidClusterCount {
                requested: k,
                n_items: self.n_items,
            });
        }

        let n_nodes = self.n_items + n_merges;
        let mut parent: Vec<usize> = (0..n_nodes).collect();
        for (step, merge) in self.merges.iter().take(n_merges).enumerate() {
            let node = self.n_items + step;
            for child in [merge.node_a, merge.node_b] {
                if child >= node {
                    return Err(Error::IndexOutOfRange {
                        index: child,
                        len: node,
                    });
                }
                parent[child] = node;
            }
        }

        let mut root_label: Vec<Option<usize>> = vec![None; n_nodes];
        let mut next = 0;
        let mut labels = Vec::with_capacity(self.n_items);
        for leaf in 0..self.n_items {
            let mut root = leaf;
            while parent[root] != root {
                root = parent[root];
            }
            let label = *root_label[root].get_or_insert_with(|| {
                next += 1;
                next - 1
            });
            labels.push(label);
        }

        Ok(labels)
    }

    /// Number of leaves.
    pub fn n_items(&self) -> usize {
        self.n_items
    }

    /// Number of merges recorded.
    pub fn n_merges(&self) -> usize {
        self.merges.len()
    }

    /// Iterate over merges in the order they happened.
    pub fn merges(&self) -> impl Iterator<Item = &Merge> {
        self.merges.iter()
    }

    /// Merge distances in order.
    pub fn distances(&self) -> Vec<f64> {
        self.merges.iter().map(|m| m.distance).collect()
    }
}
