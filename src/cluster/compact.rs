//! Merging clusters and compacting the cluster array.
//!
//! Removal is **not stable**: the removed slot is filled by the last cluster
//! (swap-with-last), so any index held across a [`remove_cluster`] call may
//! now name a different cluster.

use super::container::Cluster;
use crate::error::{Error, Result};

/// Copy every object of `c2` into `c1`, then sort `c1` by id.
///
/// `c2` is left untouched; callers decide whether to remove it.
pub fn merge_clusters(c1: &mut Cluster, c2: &Cluster) -> Result<()> {
    for obj in c2 {
        c1.append(*obj)?;
    }
    sort_cluster(c1);
    Ok(())
}

/// Sort a cluster's objects by ascending id.
pub fn sort_cluster(c: &mut Cluster) {
    c.sort();
}

/// Merge `clusters[src]` into `clusters[dst]` in place.
///
/// `clusters[src]` is left untouched.
pub fn merge_pair(clusters: &mut [Cluster], dst: usize, src: usize) -> Result<()> {
    let len = clusters.len();
    for index in [dst, src] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }
    if dst == src {
        return Err(Error::InvalidParameter {
            name: "src",
            message: "cannot merge a cluster into itself",
        });
    }

    if dst < src {
        let (head, tail) = clusters.split_at_mut(src);
        merge_clusters(&mut head[dst], &tail[0])
    } else {
        let (head, tail) = clusters.split_at_mut(dst);
        merge_clusters(&mut tail[0], &head[src])
    }
}

/// Remove the cluster at `idx`, moving the last cluster into its slot.
///
/// Returns the new number of clusters.
pub fn remove_cluster(clusters: &mut Vec<Cluster>, idx: usize) -> Result<usize> {
    let len = clusters.len();
    if idx >= len {
        return Err(Error::IndexOutOfRange { index: idx, len });
    }

    clusters[idx].clear();
    clusters.swap_remove(idx);
    Ok(len - 1)
}
