use super::*;

#[test]
fn every_built_in_icon_parses() {
    let mut set = IconSet::new();
    for name in ICON_NAMES {
        let tree = set.get(name).unwrap();
        assert!(tree.is_some(), "icon '{name}' failed to parse");
    }
}

#[test]
fn unknown_names_yield_none() {
    let mut set = IconSet::new();
    assert!(set.get("NotAnIcon").unwrap().is_none());
}

#[test]
fn parsed_icons_are_cached_and_shared() {
    let mut set = IconSet::new();
    let a = set.get("Star").unwrap().unwrap();
    let b = set.get("Star").unwrap().unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}
