//! Agglomerative (nearest-neighbour) clustering driver.
//!
//! Bottom-up: every cluster in the array is merged with its nearest
//! neighbour, one pair per step, until the requested number of clusters
//! remains.
//!
//! ```text
//! while len > k:
//!     (i, j) = nearest pair
//!     merge j into i, sort by id
//!     remove j (swap-with-last)
//! ```
//!
//! Each step rescans every pair, so a run over n clusters costs
//! O(n³) distance evaluations in the worst case. Objects are conserved and
//! the array shrinks by exactly one per step.

use super::compact::{merge_pair, remove_cluster};
use super::container::{singletons, total_objects, Cluster};
use super::object::Object;
use super::search::nearest_pair;
use super::traits::Clustering;
use crate::error::{Error, Result};
use crate::hierarchy::Dendrogram;
use tracing::{debug, info};

/// Average-linkage agglomerative clustering down to a fixed cluster count.
#[derive(Debug, Clone)]
pub struct Agglomerative {
    /// Number of clusters to stop at.
    n_clusters: usize,
}

impl Agglomerative {
    /// Create a driver that stops once `n_clusters` clusters remain.
    pub fn new(n_clusters: usize) -> Self {
        Self { n_clusters }
    }

    /// Merge clusters in place until `n_clusters` remain.
    ///
    /// Returns the merge history, with the clusters present on entry as
    /// leaves. Any failure aborts the run; `clusters` is then left in the
    /// state of the last completed step.
    pub fn run(&self, clusters: &mut Vec<Cluster>) -> Result<Dendrogram> {
        let n = clusters.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.n_clusters == 0 || self.n_clusters > n {
            return Err(Error::InvalidClusterCount {
                requested: self.n_clusters,
                n_items: n,
            });
        }

        info!(
            clusters = n,
            objects = total_objects(clusters),
            target = self.n_clusters,
            "starting agglomeration"
        );

        let mut dendro = Dendrogram::new(n);
        // nodes[p] is the dendrogram label of the cluster at position p.
        let mut nodes: Vec<usize> = (0..n).collect();

        while clusters.len() > self.n_clusters {
            let nb = nearest_pair(clusters)?;
            let (i, j) = (nb.first, nb.second);

            merge_pair(clusters, i, j)?;
            let node = dendro.add_merge(nodes[i], nodes[j], nb.distance, clusters[i].size());
            debug!(
                i,
                j,
                distance = nb.distance,
                size = clusters[i].size(),
                node,
                "merged clusters"
            );

            nodes[i] = node;
            remove_cluster(clusters, j)?;
            nodes.swap_remove(j);
        }

        info!(clusters = clusters.len(), merges = dendro.n_merges(), "agglomeration done");
        Ok(dendro)
    }
}

impl Clustering for Agglomerative {
    /// Cluster 2-D rows. Row `r` becomes object `r`; the label is the index
    /// of the cluster holding it after the run.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }
        if let Some(p) = data.iter().find(|p| p.len() != 2) {
            return Err(Error::DimensionMismatch {
                expected: 2,
                found: p.len(),
            });
        }
        if data.iter().flatten().any(|v| !v.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "coordinates must be finite",
            });
        }

        let objects = data
            .iter()
            .enumerate()
            .map(|(row, p)| {
                let id = i32::try_from(row).map_err(|_| Error::InvalidParameter {
                    name: "data",
                    message: "too many rows to label with i32 ids",
                })?;
                Ok(Object::new(id, p[0], p[1]))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut clusters = singletons(objects)?;
        self.run(&mut clusters)?;

        let mut labels = vec![0usize; data.len()];
        for (label, cluster) in clusters.iter().enumerate() {
            for obj in cluster {
                // Ids were assigned from row indices above.
                labels[obj.id as usize] = label;
            }
        }
        Ok(labels)
    }

    fn n_clusters(&self) -> usize {
        self.n_clusters
    }
}
