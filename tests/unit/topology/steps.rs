use super::*;

#[test]
fn sign_marks_face_end_and_magnitude_decodes() {
    let steps = decode_loop_steps(&[0, 1, 2], &[5, 7, -9]).unwrap();
    assert_eq!(
        steps,
        vec![
            LoopStep {
                uv_index: 0,
                vertex_index: 5,
                is_last_of_face: false
            },
            LoopStep {
                uv_index: 1,
                vertex_index: 7,
                is_last_of_face: false
            },
            LoopStep {
                uv_index: 2,
                vertex_index: 8,
                is_last_of_face: true
            },
        ]
    );
}

#[test]
fn minus_one_encodes_vertex_zero() {
    let steps = decode_loop_steps(&[3], &[-1]).unwrap();
    assert_eq!(steps[0].vertex_index, 0);
    assert!(steps[0].is_last_of_face);
}

#[test]
fn extreme_negative_does_not_overflow() {
    let steps = decode_loop_steps(&[0], &[i64::MIN]).unwrap();
    assert_eq!(steps[0].vertex_index, i64::MAX as usize);
}

#[test]
fn length_mismatch_is_a_decode_error() {
    let err = decode_loop_steps(&[0, 1], &[-1]).unwrap_err();
    assert!(matches!(err, UvError::Decode(_)));
    assert!(err.to_string().contains("UVIndex has 2 entries"));
}

#[test]
fn negative_uv_index_is_a_decode_error() {
    let err = decode_loop_steps(&[0, -4, 1], &[0, 1, -3]).unwrap_err();
    assert!(err.to_string().contains("negative uv index -4 at loop position 1"));
}
