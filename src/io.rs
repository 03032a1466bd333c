//! Loading objects from text and printing clusters.
//!
//! # Input Format
//!
//! ```text
//! count=4
//! 1 0 0
//! 2 0 1
//! 3 5 5
//! 4 5 6
//! ```
//!
//! The `count=N` header is optional. When present, exactly the first `N`
//! object lines are read and anything after them is ignored. Each object line
//! is `ID X Y` separated by whitespace. Blank lines are skipped.
//!
//! # Output Format
//!
//! ```text
//! Clusters:
//! cluster 0: 1[0,0] 2[0,1]
//! cluster 1: 3[5,5] 4[5,6]
//! ```

use crate::cluster::{Cluster, Object};
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, warn};

const COUNT_PREFIX: &str = "count=";

/// Load one singleton cluster per object from the file at `path`.
pub fn load_clusters<P: AsRef<Path>>(path: P) -> Result<Vec<Cluster>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let clusters = read_clusters(BufReader::new(file))?;
    debug!(path = %path.display(), objects = clusters.len(), "loaded clusters");
    Ok(clusters)
}

/// Read one singleton cluster per object line from `reader`.
pub fn read_clusters<R: BufRead>(reader: R) -> Result<Vec<Cluster>> {
    let mut limit: Option<usize> = None;
    let mut seen_content = false;
    let mut last_line = 0;
    let mut ids = HashSet::new();
    let mut clusters = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        if limit.is_some_and(|n| clusters.len() >= n) {
            break;
        }

        let line = line?;
        let line_no = idx + 1;
        last_line = line_no;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if !seen_content {
            seen_content = true;
            if let Some(count) = text.strip_prefix(COUNT_PREFIX) {
                let n = count.trim().parse::<usize>().map_err(|e| Error::Parse {
                    line: line_no,
                    message: format!("invalid object count {count:?}: {e}"),
                })?;
                limit = Some(n);
                continue;
            }
        }

        let obj = parse_object(text, line_no)?;
        if !ids.insert(obj.id) {
            return Err(Error::DuplicateId { id: obj.id });
        }
        clusters.push(Cluster::singleton(obj)?);
    }

    if let Some(n) = limit {
        if clusters.len() < n {
            return Err(Error::Parse {
                line: last_line,
                message: format!("expected {n} objects, found {}", clusters.len()),
            });
        }
    }
    if clusters.is_empty() {
        warn!("input contains no objects");
    }

    Ok(clusters)
}

fn parse_object(text: &str, line: usize) -> Result<Object> {
    let parse_err = |message: String| Error::Parse { line, message };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[id, x, y] = fields.as_slice() else {
        return Err(parse_err(format!(
            "expected `ID X Y`, found {} fields",
            fields.len()
        )));
    };

    let id = id
        .parse::<i32>()
        .map_err(|e| parse_err(format!("invalid id {id:?}: {e}")))?;
    let coord = |s: &str| -> Result<f32> {
        let v = s
            .parse::<f32>()
            .map_err(|e| parse_err(format!("invalid coordinate {s:?}: {e}")))?;
        if !v.is_finite() {
            return Err(parse_err(format!("coordinate {s:?} is not finite")));
        }
        Ok(v)
    };

    Ok(Object::new(id, coord(x)?, coord(y)?))
}

/// Write a single cluster's objects on one line.
pub fn write_cluster<W: Write>(mut w: W, cluster: &Cluster) -> std::io::Result<()> {
    writeln!(w, "{cluster}")
}

/// Write every cluster, one `cluster I: ...` line each.
pub fn write_clusters<W: Write>(mut w: W, clusters: &[Cluster]) -> std::io::Result<()> {
    writeln!(w, "Clusters:")?;
    for (i, cluster) in clusters.iter().enumerate() {
        write!(w, "cluster {i}: ")?;
        write_cluster(&mut w, cluster)?;
    }
    Ok(())
}
