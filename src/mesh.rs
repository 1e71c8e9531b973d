use crate::{
    fbx::Document,
    foundation::error::{UvError, UvResult},
    topology::steps::{LoopStep, decode_loop_steps},
};

pub const UV_PATH: [&str; 4] = ["Objects", "Geometry", "LayerElementUV", "UV"];
pub const UV_INDEX_PATH: [&str; 4] = ["Objects", "Geometry", "LayerElementUV", "UVIndex"];
pub const POLYGON_VERTEX_INDEX_PATH: [&str; 3] = ["Objects", "Geometry", "PolygonVertexIndex"];

/// The three flat arrays of the first geometry's UV layout, exactly as stored in the file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UvMesh {
    /// `(u, v)` pairs; UV index `i` lives at `[2i, 2i + 1]`.
    pub uvs: Vec<f64>,
    /// One entry per polygon-loop vertex, indexing `uvs` by pair.
    pub uv_indices: Vec<i64>,
    /// One entry per polygon-loop vertex; a negative value closes the current polygon.
    pub polygon_vertex_indices: Vec<i64>,
}

impl UvMesh {
    #[tracing::instrument(skip(doc))]
    pub fn from_document(doc: &Document) -> UvResult<Self> {
        let uvs = required(doc, &UV_PATH)?.to_f64_vec()?;
        let uv_indices = required(doc, &UV_INDEX_PATH)?.to_i64_vec()?;
        let polygon_vertex_indices = required(doc, &POLYGON_VERTEX_INDEX_PATH)?.to_i64_vec()?;
        tracing::debug!(
            uvs = uvs.len() / 2,
            loop_vertices = polygon_vertex_indices.len(),
            "extracted uv arrays"
        );
        Ok(Self {
            uvs,
            uv_indices,
            polygon_vertex_indices,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.uvs.len() / 2
    }

    /// Bounds-checked `(u, v)` lookup.
    pub fn uv(&self, index: usize) -> UvResult<(f64, f64)> {
        let pair = index
            .checked_mul(2)
            .and_then(|i| Some((*self.uvs.get(i)?, *self.uvs.get(i + 1)?)));
        match pair {
            Some(uv) => Ok(uv),
            None => Err(UvError::decode(format!(
                "uv index {index} out of range for {} uv coordinates",
                self.vertex_count()
            ))),
        }
    }

    pub fn loop_steps(&self) -> UvResult<Vec<LoopStep>> {
        decode_loop_steps(&self.uv_indices, &self.polygon_vertex_indices)
    }
}

fn required<'a>(doc: &'a Document, path: &[&str]) -> UvResult<&'a crate::fbx::Property> {
    doc.resolve(path)?
        .ok_or_else(|| UvError::decode(format!("missing property `{}`", path.join("/"))))
}

#[cfg(test)]
#[path = "../tests/unit/mesh.rs"]
mod tests;
