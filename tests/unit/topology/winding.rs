use super::*;

fn pts(v: &[(f64, f64)]) -> Vec<Point> {
    v.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn unit_right_triangle_has_half_area_and_is_front() {
    let area = signed_area(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]));
    assert!((area - 0.5).abs() < 1e-12);
    assert_eq!(Winding::from_signed_area(area), Winding::Front);
}

#[test]
fn rotation_preserves_sign_and_reversal_flips_it() {
    let quad = [(0.1, 0.2), (0.8, 0.1), (0.9, 0.7), (0.3, 0.9)];
    let base = signed_area(&pts(&quad));
    assert!(base > 0.0);

    for r in 0..quad.len() {
        let mut rotated = quad.to_vec();
        rotated.rotate_left(r);
        let area = signed_area(&pts(&rotated));
        assert!((area - base).abs() < 1e-12, "rotation {r}");

        rotated.reverse();
        let flipped = signed_area(&pts(&rotated));
        assert!((flipped + base).abs() < 1e-12, "reversed rotation {r}");
    }
}

#[test]
fn clockwise_loop_is_back() {
    let area = signed_area(&pts(&[(0.0, 0.0), (1.0, 1.0), (1.0, 0.0)]));
    assert_eq!(Winding::from_signed_area(area), Winding::Back);
}

#[test]
fn zero_area_ties_to_back() {
    let collinear = signed_area(&pts(&[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]));
    assert_eq!(collinear, 0.0);
    assert_eq!(Winding::from_signed_area(collinear), Winding::Back);
    assert_eq!(Winding::from_signed_area(f64::NAN), Winding::Back);
    assert_eq!(signed_area(&[]), 0.0);
}
