use crate::foundation::error::{UvError, UvResult};

/// One polygon-loop vertex with the end-of-face marker lifted out of the sign bit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopStep {
    pub uv_index: usize,
    /// Mesh vertex index with the one's-complement encoding removed.
    pub vertex_index: usize,
    pub is_last_of_face: bool,
}

/// Zip the UV index array with the sign-encoded polygon vertex index array.
pub fn decode_loop_steps(
    uv_indices: &[i64],
    polygon_vertex_indices: &[i64],
) -> UvResult<Vec<LoopStep>> {
    if uv_indices.len() != polygon_vertex_indices.len() {
        return Err(UvError::decode(format!(
            "UVIndex has {} entries but PolygonVertexIndex has {}",
            uv_indices.len(),
            polygon_vertex_indices.len()
        )));
    }

    uv_indices
        .iter()
        .zip(polygon_vertex_indices)
        .enumerate()
        .map(|(i, (&uv, &pv))| {
            let uv_index = usize::try_from(uv).map_err(|_| {
                UvError::decode(format!("negative uv index {uv} at loop position {i}"))
            })?;
            let is_last_of_face = pv < 0;
            // `!pv == -pv - 1` without overflowing on i64::MIN.
            let vertex = if is_last_of_face { !pv } else { pv };
            Ok(LoopStep {
                uv_index,
                vertex_index: vertex as usize,
                is_last_of_face,
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/topology/steps.rs"]
mod tests;
