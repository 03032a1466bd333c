use thiserror::Error;

/// Result alias for `agglo`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the cluster container, the agglomeration driver and the loader.
#[derive(Debug, Error)]
pub enum Error {
    /// Input was empty.
    #[error("empty input provided")]
    EmptyInput,

    /// A distance was requested against a cluster with no objects.
    #[error("cluster has no objects")]
    EmptyCluster,

    /// Nearest-pair search needs at least two clusters.
    #[error("need at least 2 clusters to find a pair, found {found}")]
    NotEnoughClusters {
        /// Number of clusters present.
        found: usize,
    },

    /// Two clusters have a NaN or infinite distance (non-finite coordinates).
    #[error("distance between clusters {first} and {second} is not finite")]
    NonFiniteDistance {
        /// Lower cluster index.
        first: usize,
        /// Higher cluster index.
        second: usize,
    },

    /// Invalid number of clusters requested.
    #[error("cannot create {requested} clusters from {n_items} items")]
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// Index outside the cluster array.
    #[error("index {index} out of range for {len} clusters")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Array length.
        len: usize,
    },

    /// Row dimension mismatch (only 2-D points are supported).
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Found dimension.
        found: usize,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Growing a cluster's storage failed.
    #[error("failed to allocate storage for {requested} objects")]
    AllocationFailed {
        /// Capacity that could not be reserved.
        requested: usize,
    },

    /// Malformed input text.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// The same object id appeared twice in the input.
    #[error("duplicate object id {id}")]
    DuplicateId {
        /// Repeated id.
        id: i32,
    },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
