use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::foundation::{
    color::ColorDef,
    error::{UvError, UvResult},
};

/// User-facing options for one render.
///
/// Every field is optional in a settings file; missing fields take the defaults below.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Side length of the square output image, in pixels.
    pub size: u32,
    /// FBX file to read.
    pub file: PathBuf,
    /// PNG path to write; missing parent directories are created.
    pub output: PathBuf,
    /// Canvas fill drawn under the faces.
    pub background_color: ColorDef,
    /// Stroke colour for edges shared by two or more faces.
    pub edge_color: ColorDef,
    /// Stroke colour for edges that belong to exactly one face.
    pub border_color: ColorDef,
    /// Fill colour for vertex markers.
    pub vertex_color: ColorDef,
    /// Fill for faces with positive signed area in UV space.
    pub front_face_color: ColorDef,
    /// Fill for faces with zero or negative signed area.
    pub back_face_color: ColorDef,
    /// Stroke colour for each face's outline.
    pub face_outline_color: ColorDef,
    /// Alpha multiplier applied once to the background and faces, before edges are drawn.
    pub face_opacity: f32,
    /// Stroke width of border edges, in pixels.
    pub border_width: f64,
    /// Stroke width of shared edges, in pixels.
    pub edge_width: f64,
    /// Stroke width of face outlines, in pixels.
    pub face_outline_width: f64,
    /// Draw a dot at every UV coordinate, on top of everything else.
    pub draw_vertices: bool,
    /// Radius of vertex markers, in pixels.
    pub vertex_radius: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            size: 2048,
            file: PathBuf::from("./model.fbx"),
            output: PathBuf::from("uvs.png"),
            background_color: ColorDef::rgb8(0x2e, 0x2e, 0x2e),
            edge_color: ColorDef::rgb8(0x00, 0xf9, 0xc7),
            border_color: ColorDef::rgb8(255, 255, 255),
            vertex_color: ColorDef::rgb8(0, 128, 0),
            front_face_color: ColorDef::rgb8(0, 0, 255),
            back_face_color: ColorDef::rgb8(255, 0, 0),
            face_outline_color: ColorDef::rgb8(0, 0, 0),
            face_opacity: 0.4,
            border_width: 1.5,
            edge_width: 0.75,
            face_outline_width: 1.0,
            draw_vertices: false,
            vertex_radius: 1.0,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file. Missing fields keep their defaults.
    pub fn from_json_path(path: &Path) -> UvResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(std::io::BufReader::new(f))
            .with_context(|| format!("parse settings JSON '{}'", path.display()))?;
        Ok(settings)
    }

    /// Check ranges that the rasterizer relies on.
    pub fn validate(&self) -> UvResult<()> {
        if self.size == 0 || self.size > u32::from(u16::MAX) {
            return Err(UvError::validation(format!(
                "size must be in 1..={}, got {}",
                u16::MAX,
                self.size
            )));
        }
        if !(0.0..=1.0).contains(&self.face_opacity) {
            return Err(UvError::validation(format!(
                "face_opacity must be in [0, 1], got {}",
                self.face_opacity
            )));
        }
        for (name, w) in [
            ("border_width", self.border_width),
            ("edge_width", self.edge_width),
            ("face_outline_width", self.face_outline_width),
            ("vertex_radius", self.vertex_radius),
        ] {
            if !w.is_finite() || w <= 0.0 {
                return Err(UvError::validation(format!(
                    "{name} must be finite and > 0, got {w}"
                )));
            }
        }
        Ok(())
    }

    /// Resolve colours and geometry into the read-only bundle the rasterizer consumes.
    pub fn render_settings(&self) -> UvResult<RenderSettings> {
        self.validate()?;
        Ok(RenderSettings {
            size: self.size as u16,
            background_premul: self.background_color.to_rgba8_premul(),
            edge_rgba: self.edge_color.to_rgba8(),
            border_rgba: self.border_color.to_rgba8(),
            vertex_rgba: self.vertex_color.to_rgba8(),
            front_face_rgba: self.front_face_color.to_rgba8(),
            back_face_rgba: self.back_face_color.to_rgba8(),
            face_outline_rgba: self.face_outline_color.to_rgba8(),
            face_opacity: self.face_opacity,
            border_width: self.border_width,
            edge_width: self.edge_width,
            face_outline_width: self.face_outline_width,
            draw_vertices: self.draw_vertices,
            vertex_radius: self.vertex_radius,
        })
    }
}

/// Validated render inputs. Paint colours are straight RGBA8; the background is premultiplied.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Side length of the square surface, in pixels.
    pub size: u16,
    /// Premultiplied background fill.
    pub background_premul: [u8; 4],
    /// Shared-edge stroke colour.
    pub edge_rgba: [u8; 4],
    /// Border-edge stroke colour.
    pub border_rgba: [u8; 4],
    /// Vertex marker colour.
    pub vertex_rgba: [u8; 4],
    /// Front-facing fill.
    pub front_face_rgba: [u8; 4],
    /// Back-facing fill.
    pub back_face_rgba: [u8; 4],
    /// Face outline stroke colour.
    pub face_outline_rgba: [u8; 4],
    /// Alpha multiplier for the background and faces, in `[0, 1]`.
    pub face_opacity: f32,
    /// Border-edge stroke width.
    pub border_width: f64,
    /// Shared-edge stroke width.
    pub edge_width: f64,
    /// Face outline stroke width.
    pub face_outline_width: f64,
    /// Whether vertex markers are drawn.
    pub draw_vertices: bool,
    /// Vertex marker radius.
    pub vertex_radius: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
