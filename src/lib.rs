//! # agglo
//!
//! Average-linkage agglomerative clustering of labelled 2-D points.
//!
//! Every point starts as its own cluster; the two clusters with the smallest
//! mean pairwise distance are merged, one pair per step, until the requested
//! number of clusters remains.
//!
//! - [`cluster`]: objects, the cluster container, distances, nearest-pair
//!   search, merge/compact and the [`Agglomerative`] driver
//! - [`hierarchy`]: the merge history ([`Dendrogram`])
//! - [`io`]: loading objects from text and printing clusters

pub mod cluster;
/// Error types used across `agglo`.
pub mod error;
pub mod hierarchy;
pub mod io;


pub use cluster::{
    cluster_distance, find_neighbours, merge_clusters, object_distance, remove_cluster,
    sort_cluster, Agglomerative, Cluster, Clustering, Object, CLUSTER_CHUNK,
};
pub use error::{Error, Result};
pub use hierarchy::{Dendrogram, Merge};
pub use io::{load_clusters, read_clusters, write_clusters};
