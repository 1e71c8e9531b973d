use crate::topology::steps::LoopStep;

/// A polygon as its loop of UV indices, in file order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Face {
    pub uv_indices: Vec<usize>,
}

impl Face {
    pub fn len(&self) -> usize {
        self.uv_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uv_indices.is_empty()
    }
}

/// Iterator over faces in input order. See [`decode_faces`].
#[derive(Clone, Debug)]
pub struct Faces<'a> {
    steps: &'a [LoopStep],
    start: usize,
}

impl Iterator for Faces<'_> {
    type Item = Face;

    fn next(&mut self) -> Option<Face> {
        let rest = self.steps.get(self.start..)?;
        let Some(end) = rest.iter().position(|s| s.is_last_of_face) else {
            // An unterminated trailing run never becomes a face.
            self.start = self.steps.len();
            return None;
        };
        let face = Face {
            uv_indices: rest[..=end].iter().map(|s| s.uv_index).collect(),
        };
        self.start += end + 1;
        Some(face)
    }
}

/// Split loop steps into faces at each end-of-face marker.
pub fn decode_faces(steps: &[LoopStep]) -> Faces<'_> {
    Faces { steps, start: 0 }
}

#[cfg(test)]
#[path = "../../tests/unit/topology/faces.rs"]
mod tests;
