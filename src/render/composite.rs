//! Premultiplied RGBA8 buffer operations used to stack the render layers.

use crate::foundation::error::{UvError, UvResult};

pub type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> UvResult<()> {
    check_rgba8(dst)?;
    if dst.len() != src.len() {
        return Err(UvError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale every channel of a premultiplied buffer by `factor`, i.e. multiply its alpha.
pub fn multiply_alpha_in_place(buf: &mut [u8], factor: f32) -> UvResult<()> {
    check_rgba8(buf)?;
    let f = ((factor.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u16;
    if f == 255 {
        return Ok(());
    }
    for c in buf.iter_mut() {
        *c = mul_div255(u16::from(*c), f);
    }
    Ok(())
}

pub fn fill_in_place(buf: &mut [u8], px: PremulRgba8) -> UvResult<()> {
    check_rgba8(buf)?;
    for d in buf.chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
    Ok(())
}

/// Convert premultiplied pixels to straight alpha for encoders.
pub fn unpremultiply_in_place(buf: &mut [u8]) -> UvResult<()> {
    check_rgba8(buf)?;
    for px in buf.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
    Ok(())
}

fn check_rgba8(buf: &[u8]) -> UvResult<()> {
    if !buf.len().is_multiple_of(4) {
        return Err(UvError::render(format!(
            "rgba8 buffer length {} is not a multiple of 4",
            buf.len()
        )));
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
