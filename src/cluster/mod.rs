//! Average-linkage agglomerative clustering of labelled 2-D points.
//!
//! ## Building Blocks
//!
//! | Piece | Role |
//! |-------|------|
//! | [`Object`] | A labelled point `{id, x, y}` |
//! | [`Cluster`] | Owned, growable run of objects with chunked growth |
//! | [`cluster_distance`] | Mean pairwise distance between two clusters |
//! | [`find_neighbours`] | Closest pair of clusters, earliest pair on ties |
//! | [`merge_clusters`] / [`remove_cluster`] | One agglomeration step |
//! | [`Agglomerative`] | Runs steps until `k` clusters remain |
//!
//! ## Average Linkage
//!
//! The distance between clusters A and B is the mean of all cross-pair
//! point distances:
//!
//! ```text
//! d(A, B) = 1/(|A|·|B|) × Σ_{a∈A} Σ_{b∈B} ||a - b||
//! ```
//!
//! It sits between single linkage (min, prone to chaining) and complete
//! linkage (max, favours compact clusters).
//!
//! ## Index Stability
//!
//! Removing a cluster moves the last cluster into the freed slot. Positions
//! in the array are only meaningful until the next removal; the merge
//! history in [`Dendrogram`](crate::hierarchy::Dendrogram) uses stable node
//! labels instead.
//!
//! ## Thread Safety
//!
//! Everything here is single-threaded and synchronous. A `Cluster` is plain
//! owned data; mutating one from several threads needs external
//! synchronisation.
//!
//! ## Usage
//!
//! ```rust
//! use agglo::cluster::{singletons, Agglomerative, Object};
//!
//! let mut clusters = singletons([
//!     Object::new(1, 0.0, 0.0),
//!     Object::new(2, 0.0, 1.0),
//!     Object::new(3, 5.0, 5.0),
//!     Object::new(4, 5.0, 6.0),
//! ])
//! .unwrap();
//!
//! Agglomerative::new(2).run(&mut clusters).unwrap();
//!
//! assert_eq!(clusters.len(), 2);
//! let ids: Vec<i32> = clusters[0].iter().map(|o| o.id).collect();
//! assert_eq!(ids, vec![1, 2]);
//! ```

mod agglomerative;
mod compact;
mod container;
mod distance;
mod object;
mod search;
mod traits;

pub use agglomerative::Agglomerative;
pub use compact::{merge_clusters, merge_pair, remove_cluster, sort_cluster};
pub use container::{singletons, total_objects, Cluster, CLUSTER_CHUNK};
pub use distance::{cluster_distance, object_distance};
pub use object::Object;
pub use search::{find_neighbours, nearest_pair, Neighbours};
pub use traits::Clustering;
