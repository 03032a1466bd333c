//! Growable cluster storage with chunked growth.
//!
//! A [`Cluster`] tracks its capacity explicitly instead of leaving it to
//! `Vec`'s doubling strategy: when an append finds the cluster full, the
//! capacity grows by exactly [`CLUSTER_CHUNK`] objects. Capacity never
//! shrinks except through [`Cluster::clear`].
//!
//! ```text
//! append #  │ 1  2 .. 10 │ 11 .. 20 │ 21
//! capacity  │ 10 10   10 │ 20    20 │ 30
//! ```

use super::object::Object;
use crate::error::{Error, Result};
use core::fmt;
use tracing::trace;

/// Number of objects added to a full cluster's capacity on append.
pub const CLUSTER_CHUNK: usize = 10;

/// An owned, ordered collection of objects.
///
/// Equality compares the contained objects only, not capacity.
#[derive(Debug, Default)]
pub struct Cluster {
    objects: Vec<Object>,
    /// Logical capacity; storage for at least this many objects is reserved.
    capacity: usize,
}

impl Cluster {
    /// Create an empty cluster with no storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cluster with storage for `capacity` objects.
    ///
    /// A capacity of 0 reserves nothing.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut cluster = Self::new();
        cluster.resize(capacity)?;
        Ok(cluster)
    }

    /// Create a cluster holding exactly one object, with capacity 1.
    pub fn singleton(obj: Object) -> Result<Self> {
        let mut cluster = Self::with_capacity(1)?;
        cluster.objects.push(obj);
        Ok(cluster)
    }

    /// Release storage and reset to `{size: 0, capacity: 0}`.
    ///
    /// Calling this on an already cleared cluster is a no-op.
    pub fn clear(&mut self) {
        self.objects = Vec::new();
        self.capacity = 0;
    }

    /// Grow storage to hold at least `new_capacity` objects.
    ///
    /// Does nothing when `new_capacity <= self.capacity()`. Existing objects
    /// keep their order.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity <= self.capacity {
            return Ok(());
        }

        let additional = new_capacity - self.objects.len();
        self.objects
            .try_reserve_exact(additional)
            .map_err(|_| Error::AllocationFailed {
                requested: new_capacity,
            })?;

        trace!(from = self.capacity, to = new_capacity, "cluster resized");
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append an object, growing by [`CLUSTER_CHUNK`] first if full.
    pub fn append(&mut self, obj: Object) -> Result<()> {
        if self.objects.len() == self.capacity {
            self.resize(self.capacity + CLUSTER_CHUNK)?;
        }
        self.objects.push(obj);
        Ok(())
    }

    /// Sort objects by ascending id. Order among equal ids is unspecified.
    pub fn sort(&mut self) {
        self.objects.sort_unstable_by_key(|o| o.id);
    }

    /// Number of objects in the cluster.
    pub fn size(&self) -> usize {
        self.objects.len()
    }

    /// Alias for [`Cluster::size`].
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the cluster holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects the cluster can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Objects in storage order.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Iterate over objects in storage order.
    pub fn iter(&self) -> core::slice::Iter<'_, Object> {
        self.objects.iter()
    }
}

/// Keeps the logical capacity. Unlike [`Cluster::resize`], allocation
/// failure here aborts the process as `Vec` cloning does.
impl Clone for Cluster {
    fn clone(&self) -> Self {
        let mut objects = Vec::with_capacity(self.capacity);
        objects.extend_from_slice(&self.objects);
        Self {
            objects,
            capacity: self.capacity,
        }
    }
}

impl PartialEq for Cluster {
    fn eq(&self, other: &Self) -> bool {
        self.objects == other.objects
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Object;
    type IntoIter = core::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders objects separated by single spaces.
impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, obj) in self.objects.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{obj}")?;
        }
        Ok(())
    }
}

/// Build one singleton cluster per object, in input order.
pub fn singletons<I>(objects: I) -> Result<Vec<Cluster>>
where
    I: IntoIterator<Item = Object>,
{
    objects.into_iter().map(Cluster::singleton).collect()
}

/// Total number of objects across all clusters.
pub fn total_objects(clusters: &[Cluster]) -> usize {
    clusters.iter().map(Cluster::size).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(id: i32) -> Object {
        Object::new(id, id as f32, 0.0)
    }

    #[test]
    fn test_with_capacity() {
        let c = Cluster::with_capacity(5).unwrap();
        assert_eq!(c.size(), 0);
        assert_eq!(c.capacity(), 5);

        let c = Cluster::with_capacity(0).unwrap();
        assert_eq!(c.capacity(), 0);
        assert!(c.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut c = Cluster::singleton(obj(1)).unwrap();
        c.clear();
        assert_eq!((c.size(), c.capacity()), (0, 0));
        c.clear();
        assert_eq!((c.size(), c.capacity()), (0, 0));
    }

    #[test]
    fn test_resize_never_shrinks() {
        let mut c = Cluster::with_capacity(8).unwrap();
        c.append(obj(1)).unwrap();

        c.resize(3).unwrap();
        assert_eq!(c.capacity(), 8);
        c.resize(8).unwrap();
        assert_eq!(c.capacity(), 8);

        c.resize(12).unwrap();
        assert_eq!(c.capacity(), 12);
        assert_eq!(c.objects(), &[obj(1)]);
    }

    #[test]
    fn test_append_grows_in_fixed_chunks() {
        let mut c = Cluster::new();
        let mut seen = Vec::new();

        for i in 0..25 {
            c.append(obj(i)).unwrap();
            seen.push(c.capacity());
        }

        assert_eq!(seen[0], CLUSTER_CHUNK);
        assert_eq!(seen[9], CLUSTER_CHUNK);
        assert_eq!(seen[10], 2 * CLUSTER_CHUNK);
        assert_eq!(seen[24], 3 * CLUSTER_CHUNK);
        assert_eq!(c.size(), 25);
    }

    #[test]
    fn test_append_to_singleton_adds_one_chunk() {
        let mut c = Cluster::singleton(obj(1)).unwrap();
        assert_eq!(c.capacity(), 1);
        c.append(obj(2)).unwrap();
        assert_eq!(c.capacity(), 1 + CLUSTER_CHUNK);
    }

    #[test]
    fn test_append_preserves_order() {
        let mut c = Cluster::new();
        for id in [5, 3, 9, 1] {
            c.append(obj(id)).unwrap();
        }
        let ids: Vec<i32> = c.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![5, 3, 9, 1]);
    }

    #[test]
    fn test_sort_by_id() {
        let mut c = Cluster::new();
        for id in [5, 3, 9, 3, 1] {
            c.append(obj(id)).unwrap();
        }
        c.sort();
        let ids: Vec<i32> = c.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3, 3, 5, 9]);
    }

    #[test]
    fn test_clone_keeps_capacity() {
        let mut c = Cluster::with_capacity(7).unwrap();
        c.append(obj(1)).unwrap();
        let d = c.clone();
        assert_eq!(d.capacity(), 7);
        assert_eq!(c, d);
    }

    #[test]
    fn test_display() {
        let mut c = Cluster::new();
        c.append(Object::new(1, 0.0, 0.0)).unwrap();
        c.append(Object::new(2, 0.0, 1.5)).unwrap();
        assert_eq!(c.to_string(), "1[0,0] 2[0,1.5]");
        assert_eq!(Cluster::new().to_string(), "");
    }

    #[test]
    fn test_singletons_and_total() {
        let clusters = singletons((0..4).map(obj)).unwrap();
        assert_eq!(clusters.len(), 4);
        assert!(clusters.iter().all(|c| c.size() == 1 && c.capacity() == 1));
        assert_eq!(total_objects(&clusters), 4);
    }
}
