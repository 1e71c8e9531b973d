use std::collections::HashMap;

use crate::{
    foundation::error::{UvError, UvResult},
    mesh::UvMesh,
    topology::steps::LoopStep,
};

/// Unordered UV index pair, stored as `(min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    pub lo: usize,
    pub hi: usize,
}

impl EdgeKey {
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub key: EdgeKey,
    /// Endpoints in UV space, in the direction of the first traversal.
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    /// Number of times the edge was traversed, i.e. the faces sharing it.
    pub connectivity: u32,
}

impl Edge {
    pub fn is_border(&self) -> bool {
        self.connectivity == 1
    }
}

/// Deduplicated edges in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct EdgeMap {
    edges: Vec<Edge>,
    index: HashMap<EdgeKey, usize>,
}

impl EdgeMap {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn get(&self, a: usize, b: usize) -> Option<&Edge> {
        self.index.get(&EdgeKey::new(a, b)).map(|&i| &self.edges[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge> {
        self.edges.iter()
    }

    pub fn border_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_border()).count()
    }

    pub fn interior_count(&self) -> usize {
        self.edges.len() - self.border_count()
    }

    fn record(&mut self, mesh: &UvMesh, a: usize, b: usize) -> UvResult<()> {
        let key = EdgeKey::new(a, b);
        if let Some(&i) = self.index.get(&key) {
            self.edges[i].connectivity += 1;
            return Ok(());
        }
        let (x0, y0) = mesh.uv(a)?;
        let (x1, y1) = mesh.uv(b)?;
        self.index.insert(key, self.edges.len());
        self.edges.push(Edge {
            key,
            x0,
            y0,
            x1,
            y1,
            connectivity: 1,
        });
        Ok(())
    }
}

impl<'a> IntoIterator for &'a EdgeMap {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collect every polygon edge in a single pass over the loop steps.
///
/// A step connects to the next step of the same loop; the last step of a face connects back
/// to the face's first step. A trailing run without an end-of-face marker is a decode error,
/// since its final edge has no successor to connect to.
#[tracing::instrument(skip_all, fields(steps = steps.len()))]
pub fn build_edges(mesh: &UvMesh, steps: &[LoopStep]) -> UvResult<EdgeMap> {
    let mut map = EdgeMap::default();
    let mut face_start = 0usize;

    for (i, step) in steps.iter().enumerate() {
        let (a, b) = if step.is_last_of_face {
            let first = steps[face_start].uv_index;
            face_start = i + 1;
            (first, step.uv_index)
        } else {
            let next = steps.get(i + 1).ok_or_else(|| {
                UvError::decode(format!(
                    "polygon starting at loop position {face_start} is never closed"
                ))
            })?;
            (step.uv_index, next.uv_index)
        };
        map.record(mesh, a, b)?;
    }

    tracing::debug!(
        edges = map.len(),
        border = map.border_count(),
        "built edge map"
    );
    Ok(map)
}

#[cfg(test)]
#[path = "../../tests/unit/topology/edges.rs"]
mod tests;
