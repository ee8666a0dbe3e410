use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RippleError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(RippleError::encode("x").to_string().contains("encode error:"));
    assert!(
        RippleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn render_failure_reports_image_and_step() {
    let err = RippleError::render(3, 15, "canvas allocation failed");
    let msg = err.to_string();
    assert!(msg.contains("image 3"));
    assert!(msg.contains("step 15"));
    assert!(msg.contains("canvas allocation failed"));
    assert!(!err.is_config());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RippleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
