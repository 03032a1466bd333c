//! Nearest-pair search over a cluster array.
//!
//! Exhaustive O(n²) scan. Pairs are visited in increasing `(i, j)` order and a
//! candidate replaces the current best only when it is strictly closer, so on
//! ties the earliest pair wins.

use super::container::Cluster;
use super::distance::cluster_distance;
use crate::error::{Error, Result};

/// The closest pair found by [`nearest_pair`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbours {
    /// Lower index of the pair.
    pub first: usize,
    /// Higher index of the pair.
    pub second: usize,
    /// Average-linkage distance between them.
    pub distance: f64,
}

/// Find the pair of clusters with the smallest average-linkage distance.
///
/// Needs at least two clusters; every cluster must be non-empty and every
/// pair distance finite.
pub fn nearest_pair(clusters: &[Cluster]) -> Result<Neighbours> {
    let n = clusters.len();
    if n < 2 {
        return Err(Error::NotEnoughClusters { found: n });
    }

    let mut best = Neighbours {
        first: 0,
        second: 1,
        distance: f64::INFINITY,
    };

    for i in 0..(n - 1) {
        for j in (i + 1)..n {
            let d = cluster_distance(&clusters[i], &clusters[j])?;
            // NaN never compares less, so it would be skipped silently.
            if !d.is_finite() {
                return Err(Error::NonFiniteDistance {
                    first: i,
                    second: j,
                });
            }
            if d < best.distance {
                best = Neighbours {
                    first: i,
                    second: j,
                    distance: d,
                };
            }
        }
    }

    Ok(best)
}

/// Indices `(i, j)` with `i < j` of the two closest clusters.
pub fn find_neighbours(clusters: &[Cluster]) -> Result<(usize, usize)> {
    nearest_pair(clusters).map(|nb| (nb.first, nb.second))
}
