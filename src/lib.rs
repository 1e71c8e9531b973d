//! uvtopo renders the UV layout of an FBX mesh to a square PNG.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `bytes -> Document` (binary FBX, falling back once to ASCII FBX)
//! 2. **Extract**: `Document -> UvMesh` (UV coordinates, UV indices, polygon vertex indices)
//! 3. **Decode**: `UvMesh -> LoopStep`s, then faces and a deduplicated edge map
//! 4. **Rasterize**: faces tinted by winding, then border and interior edges, into a
//!    [`FrameRGBA`] (CPU, `vello_cpu`)
//!
//! Decoding is strict: out-of-range indices and unterminated polygons are errors, and no
//! output file is written unless the whole render succeeds.
#![forbid(unsafe_code)]

mod fbx;
mod foundation;
mod mesh;
mod render;
mod topology;

pub use fbx::{Document, Node, Property, load_document, resolve};
pub use foundation::color::ColorDef;
pub use foundation::error::{UvError, UvResult};
pub use foundation::settings::{RenderSettings, Settings};
pub use mesh::{POLYGON_VERTEX_INDEX_PATH, UV_INDEX_PATH, UV_PATH, UvMesh};
pub use render::composite::{
    PremulRgba8, fill_in_place, multiply_alpha_in_place, over, over_in_place,
    unpremultiply_in_place,
};
pub use render::mapper::UvMapper;
pub use render::pipeline::{FrameRGBA, RenderStats, render_file, render_uv_layout, write_png};
pub use topology::edges::{Edge, EdgeKey, EdgeMap, build_edges};
pub use topology::faces::{Face, Faces, decode_faces};
pub use topology::steps::{LoopStep, decode_loop_steps};
pub use topology::winding::{Winding, signed_area};
