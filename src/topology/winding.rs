use kurbo::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise in UV space (positive signed area).
    Front,
    Back,
}

impl Winding {
    /// Zero and NaN areas count as back-facing.
    pub fn from_signed_area(area: f64) -> Self {
        if area > 0.0 { Self::Front } else { Self::Back }
    }
}

/// Shoelace signed area of a closed loop; the last point connects back to the first.
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - p.y * q.x
        })
        .sum();
    twice * 0.5
}

#[cfg(test)]
#[path = "../../tests/unit/topology/winding.rs"]
mod tests;
