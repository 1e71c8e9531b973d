use super::*;

#[test]
fn corners_flip_vertically() {
    let m = UvMapper::new(2048);
    assert_eq!(m.to_pixel(0.0, 0.0), Point::new(0.0, 2048.0));
    assert_eq!(m.to_pixel(1.0, 1.0), Point::new(2048.0, 0.0));
    assert_eq!(m.to_pixel(0.5, 0.25), Point::new(1024.0, 1536.0));
}

#[test]
fn values_outside_the_unit_square_are_not_clamped() {
    let m = UvMapper::new(100);
    assert_eq!(m.to_pixel(1.5, -0.5), Point::new(150.0, 150.0));
    assert_eq!(m.to_pixel(-1.0, 2.0), Point::new(-100.0, -100.0));
}
