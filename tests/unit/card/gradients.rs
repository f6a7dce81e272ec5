use super::*;

#[test]
fn table_is_populated() {
    assert!(GRADIENTS.len() >= 30);
    for gradient in GRADIENTS {
        assert!(!gradient.name.is_empty());
        assert!(gradient.stops.len() >= 2, "{} needs stops", gradient.name);
    }
}

#[test]
fn lookup_clamps_to_last_preset() {
    assert_eq!(gradient_at(0).name, GRADIENTS[0].name);
    assert_eq!(
        gradient_at(usize::MAX).name,
        GRADIENTS[GRADIENTS.len() - 1].name
    );
}
