use vello_cpu::kurbo::{BezPath, Cap, Circle, Join, Shape as _, Stroke};

use crate::{
    foundation::{error::UvResult, settings::RenderSettings},
    mesh::UvMesh,
    render::mapper::UvMapper,
    topology::{
        edges::EdgeMap,
        faces::Face,
        winding::{Winding, signed_area},
    },
};

/// Curve flattening tolerance for vertex markers, in pixels.
const MARKER_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FaceCounts {
    pub(crate) front: usize,
    pub(crate) back: usize,
}

/// Fill and outline every face on a fresh transparent layer.
///
/// Fill colour follows the face's winding in UV space. Opacity is not applied here.
pub(crate) fn draw_faces(
    mesh: &UvMesh,
    faces: impl IntoIterator<Item = Face>,
    mapper: UvMapper,
    settings: &RenderSettings,
) -> UvResult<(vello_cpu::Pixmap, FaceCounts)> {
    let mut ctx = vello_cpu::RenderContext::new(settings.size, settings.size);
    let outline = line_stroke(settings.face_outline_width);
    let mut counts = FaceCounts::default();

    for face in faces {
        let uv_points = face
            .uv_indices
            .iter()
            .map(|&i| mesh.uv(i).map(|(u, v)| kurbo::Point::new(u, v)))
            .collect::<UvResult<Vec<_>>>()?;

        let fill = match Winding::from_signed_area(signed_area(&uv_points)) {
            Winding::Front => {
                counts.front += 1;
                settings.front_face_rgba
            }
            Winding::Back => {
                counts.back += 1;
                settings.back_face_rgba
            }
        };

        let path = closed_path(uv_points.iter().map(|p| mapper.to_pixel(p.x, p.y)));
        ctx.set_paint(paint(fill));
        ctx.fill_path(&path);
        ctx.set_stroke(outline.clone());
        ctx.set_paint(paint(settings.face_outline_rgba));
        ctx.stroke_path(&path);
    }

    Ok((finish(ctx, settings.size), counts))
}

/// Stroke every edge once; border edges are wider and use the border colour.
pub(crate) fn draw_edges(
    edges: &EdgeMap,
    mapper: UvMapper,
    settings: &RenderSettings,
) -> vello_cpu::Pixmap {
    let mut ctx = vello_cpu::RenderContext::new(settings.size, settings.size);

    for edge in edges {
        let (width, rgba) = if edge.is_border() {
            (settings.border_width, settings.border_rgba)
        } else {
            (settings.edge_width, settings.edge_rgba)
        };

        let mut line = BezPath::new();
        line.move_to(point_to_cpu(mapper.to_pixel(edge.x0, edge.y0)));
        line.line_to(point_to_cpu(mapper.to_pixel(edge.x1, edge.y1)));

        ctx.set_stroke(line_stroke(width));
        ctx.set_paint(paint(rgba));
        ctx.stroke_path(&line);
    }

    finish(ctx, settings.size)
}

/// One filled dot per UV coordinate pair.
pub(crate) fn draw_vertices(
    mesh: &UvMesh,
    mapper: UvMapper,
    settings: &RenderSettings,
) -> UvResult<vello_cpu::Pixmap> {
    let mut ctx = vello_cpu::RenderContext::new(settings.size, settings.size);
    ctx.set_paint(paint(settings.vertex_rgba));

    for i in 0..mesh.vertex_count() {
        let (u, v) = mesh.uv(i)?;
        let center = point_to_cpu(mapper.to_pixel(u, v));
        let dot = Circle::new(center, settings.vertex_radius).to_path(MARKER_TOLERANCE);
        ctx.fill_path(&dot);
    }

    Ok(finish(ctx, settings.size))
}

fn finish(mut ctx: vello_cpu::RenderContext, size: u16) -> vello_cpu::Pixmap {
    let mut pixmap = vello_cpu::Pixmap::new(size, size);
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);
    pixmap
}

/// Butt caps, miter joins (limit 10).
fn line_stroke(width: f64) -> Stroke {
    Stroke::new(width)
        .with_caps(Cap::Butt)
        .with_join(Join::Miter)
        .with_miter_limit(10.0)
}

fn paint([r, g, b, a]: [u8; 4]) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn closed_path(points: impl IntoIterator<Item = kurbo::Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(point_to_cpu(p));
        } else {
            path.line_to(point_to_cpu(p));
        }
    }
    path.close_path();
    path
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}
