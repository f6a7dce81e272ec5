use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlassError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(GlassError::ingest("x").to_string().contains("ingest error:"));
    assert!(
        GlassError::capture("x")
            .to_string()
            .contains("capture error:")
    );
    assert!(
        GlassError::archive("x")
            .to_string()
            .contains("archive error:")
    );
    assert!(GlassError::busy("x").to_string().contains("busy"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlassError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
