//! Merge history for agglomerative clustering.
//!
//! An agglomeration run over n clusters performs up to n - 1 merges. The
//! [`Dendrogram`] records them in order with stable node labels, so the
//! partition at any intermediate cluster count can be recovered afterwards
//! with [`Dendrogram::cut_to_k`].

mod dendrogram;

pub use dendrogram::{Dendrogram, Merge};
