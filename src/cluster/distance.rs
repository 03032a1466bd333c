//! Point and cluster distances.
//!
//! Cluster distance is **average linkage** (UPGMA):
//!
//! ```text
//! d(A, B) = 1/(|A|·|B|) × Σ_{a∈A} Σ_{b∈B} ||a - b||
//! ```
//!
//! Coordinates are stored as `f32`; all arithmetic is done in `f64`.

use super::container::Cluster;
use super::object::Object;
use crate::error::{Error, Result};

/// Euclidean distance between two objects.
#[inline]
pub fn object_distance(a: &Object, b: &Object) -> f64 {
    let dx = a.x as f64 - b.x as f64;
    let dy = a.y as f64 - b.y as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Mean of [`object_distance`] over every cross pair of the two clusters.
///
/// Returns [`Error::EmptyCluster`] if either cluster has no objects.
pub fn cluster_distance(c1: &Cluster, c2: &Cluster) -> Result<f64> {
    if c1.is_empty() || c2.is_empty() {
        return Err(Error::EmptyCluster);
    }

    let sum: f64 = c1
        .iter()
        .flat_map(|a| c2.iter().map(move |b| object_distance(a, b)))
        .sum();

    Ok(sum / (c1.size() * c2.size()) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster(points: &[(i32, f32, f32)]) -> Cluster {
        let mut c = Cluster::new();
        for &(id, x, y) in points {
            c.append(Object::new(id, x, y)).unwrap();
        }
        c
    }

    #[test]
    fn test_object_distance() {
        let a = Object::new(1, 0.0, 0.0);
        let b = Object::new(2, 3.0, 4.0);
        assert_eq!(object_distance(&a, &b), 5.0);
        assert_eq!(object_distance(&b, &a), 5.0);
        assert_eq!(object_distance(&a, &a), 0.0);
    }

    #[test]
    fn test_cluster_distance_singletons() {
        let a = cluster(&[(1, 0.0, 0.0)]);
        let b = cluster(&[(2, 0.0, 1.0)]);
        assert_eq!(cluster_distance(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_cluster_distance_is_mean() {
        // Cross distances: 1, 3, 0, 2 -> mean 1.5
        let a = cluster(&[(1, 0.0, 0.0), (2, 1.0, 0.0)]);
        let b = cluster(&[(3, 1.0, 0.0), (4, 3.0, 0.0)]);
        assert!((cluster_distance(&a, &b).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_cluster_distance_empty() {
        let a = cluster(&[(1, 0.0, 0.0)]);
        let empty = Cluster::new();
        assert!(matches!(
            cluster_distance(&a, &empty),
            Err(Error::EmptyCluster)
        ));
        assert!(matches!(
            cluster_distance(&empty, &a),
            Err(Error::EmptyCluster)
        ));
    }
}
