use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FrescoError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(FrescoError::encode("x").to_string().contains("encode error:"));
    assert!(FrescoError::decode("x").to_string().contains("decode error:"));
    assert!(
        FrescoError::transcode("x")
            .to_string()
            .contains("transcode error:")
    );
    assert!(
        FrescoError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FrescoError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
