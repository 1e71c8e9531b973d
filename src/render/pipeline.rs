use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::{
    fbx::load_document,
    foundation::{
        error::{UvError, UvResult},
        settings::{RenderSettings, Settings},
    },
    mesh::UvMesh,
    render::{
        composite::{fill_in_place, multiply_alpha_in_place, over_in_place, unpremultiply_in_place},
        cpu::{draw_edges, draw_faces, draw_vertices},
        mapper::UvMapper,
    },
    topology::{edges::build_edges, faces::decode_faces},
};

#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    pub fn to_straight_rgba8(&self) -> UvResult<Vec<u8>> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_in_place(&mut data)?;
        }
        Ok(data)
    }

    pub fn encode_png(&self) -> UvResult<Vec<u8>> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.to_straight_rgba8()?)
            .ok_or_else(|| UvError::render("frame buffer does not match its dimensions"))?;
        let mut buf = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .context("encode png")?;
        Ok(buf)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub faces: usize,
    pub front_faces: usize,
    pub back_faces: usize,
    pub edges: usize,
    pub border_edges: usize,
}

/// Decode the mesh topology and rasterize it.
///
/// Layers stack bottom to top: background and faces, one opacity pass over everything drawn
/// so far, then edges and vertex markers (when enabled) at full strength. Returns
/// premultiplied pixels.
#[tracing::instrument(skip_all, fields(size = settings.size))]
pub fn render_uv_layout(
    mesh: &UvMesh,
    settings: &RenderSettings,
) -> UvResult<(FrameRGBA, RenderStats)> {
    let steps = mesh.loop_steps()?;
    let edges = build_edges(mesh, &steps)?;
    let mapper = UvMapper::new(settings.size);

    let side = u32::from(settings.size);
    let mut data = vec![0u8; side as usize * side as usize * 4];
    fill_in_place(&mut data, settings.background_premul)?;

    let (faces_layer, counts) = draw_faces(mesh, decode_faces(&steps), mapper, settings)?;
    over_in_place(&mut data, faces_layer.data_as_u8_slice())?;
    multiply_alpha_in_place(&mut data, settings.face_opacity)?;

    let edges_layer = draw_edges(&edges, mapper, settings);
    over_in_place(&mut data, edges_layer.data_as_u8_slice())?;

    if settings.draw_vertices {
        let vertices_layer = draw_vertices(mesh, mapper, settings)?;
        over_in_place(&mut data, vertices_layer.data_as_u8_slice())?;
    }

    let stats = RenderStats {
        faces: counts.front + counts.back,
        front_faces: counts.front,
        back_faces: counts.back,
        edges: edges.len(),
        border_edges: edges.border_count(),
    };
    tracing::debug!(?stats, "rendered uv layout");

    Ok((
        FrameRGBA {
            width: side,
            height: side,
            data,
            premultiplied: true,
        },
        stats,
    ))
}

/// Encode `frame` as PNG and write it, creating parent directories as needed.
///
/// Encoding finishes in memory before the file is touched.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> UvResult<()> {
    let png = frame.encode_png()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Read `settings.file`, render it, and write `settings.output`.
#[tracing::instrument(skip_all, fields(file = %settings.file.display()))]
pub fn render_file(settings: &Settings) -> UvResult<RenderStats> {
    let render_settings = settings.render_settings()?;
    let bytes = std::fs::read(&settings.file)
        .with_context(|| format!("read fbx '{}'", settings.file.display()))?;
    let doc = load_document(&bytes)?;
    let mesh = UvMesh::from_document(&doc)?;
    let (frame, stats) = render_uv_layout(&mesh, &render_settings)?;
    write_png(&frame, &settings.output)?;
    tracing::info!(output = %settings.output.display(), faces = stats.faces, edges = stats.edges, "wrote uv layout");
    Ok(stats)
}
