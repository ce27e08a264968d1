use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KinemaError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(
        KinemaError::animation_target("x")
            .to_string()
            .contains("animation target error:")
    );
    assert!(KinemaError::sink("x").to_string().contains("sink error:"));
    assert!(
        KinemaError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KinemaError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KinemaError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
