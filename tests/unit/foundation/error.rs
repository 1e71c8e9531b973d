use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        UvError::container("x")
            .to_string()
            .contains("container error:")
    );
    assert!(UvError::decode("x").to_string().contains("decode error:"));
    assert!(
        UvError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(UvError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = UvError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
