use super::*;
use crate::topology::steps::decode_loop_steps;

fn faces_of(uv: &[i64], pvi: &[i64]) -> Vec<Vec<usize>> {
    let steps = decode_loop_steps(uv, pvi).unwrap();
    decode_faces(&steps).map(|f| f.uv_indices).collect()
}

#[test]
fn single_triangle_is_one_face() {
    assert_eq!(faces_of(&[0, 1, 2], &[5, 7, -9]), vec![vec![0, 1, 2]]);
}

#[test]
fn mixed_polygons_keep_loop_order() {
    let uv = [4, 5, 6, 7, 0, 1, 2];
    let pvi = [0, 1, 2, -4, 4, 5, -7];
    assert_eq!(faces_of(&uv, &pvi), vec![vec![4, 5, 6, 7], vec![0, 1, 2]]);
}

#[test]
fn face_sizes_sum_to_loop_length_and_count_matches_markers() {
    let uv: Vec<i64> = (0..12).collect();
    let pvi = [0, 1, -3, 3, 4, 5, -7, 7, -9, 9, 10, -12];
    let steps = decode_loop_steps(&uv, &pvi).unwrap();
    let faces: Vec<Face> = decode_faces(&steps).collect();

    let markers = pvi.iter().filter(|&&v| v < 0).count();
    assert_eq!(faces.len(), markers);
    assert_eq!(faces.iter().map(Face::len).sum::<usize>(), uv.len());
}

#[test]
fn unterminated_trailing_run_is_dropped() {
    assert_eq!(faces_of(&[0, 1, 2, 3, 4], &[0, 1, -3, 3, 4]), vec![vec![0, 1, 2]]);
    assert!(faces_of(&[0, 1], &[0, 1]).is_empty());
}

#[test]
fn degenerate_faces_pass_through() {
    assert_eq!(faces_of(&[0, 1, 2], &[-1, 1, -3]), vec![vec![0], vec![1, 2]]);
}

#[test]
fn iterator_is_exhausted_after_last_face() {
    let steps = decode_loop_steps(&[0, 1, 2], &[0, 1, -3]).unwrap();
    let mut it = decode_faces(&steps);
    assert!(it.next().is_some());
    assert!(it.next().is_none());
    assert!(it.next().is_none());
}
