use kurbo::Point;

/// Maps UV space (origin bottom-left, unit square) onto a square raster (origin top-left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UvMapper {
    size: f64,
}

impl UvMapper {
    pub fn new(size: u16) -> Self {
        Self {
            size: f64::from(size),
        }
    }

    pub fn to_pixel(self, u: f64, v: f64) -> Point {
        Point::new(u * self.size, (1.0 - v) * self.size)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mapper.rs"]
mod tests;
