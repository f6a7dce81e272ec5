use super::*;

#[test]
fn resolution_multipliers() {
    assert_eq!(Resolution::X1.multiplier(), 1);
    assert_eq!(Resolution::X4.multiplier(), 4);
    assert_eq!(Resolution::from_multiplier(3).unwrap(), Resolution::X3);
    assert!(Resolution::from_multiplier(0).is_err());
    assert!(Resolution::from_multiplier(5).is_err());
}

#[test]
fn default_range_spans_all_items() {
    assert_eq!(BatchRange::default_for(7), BatchRange { start: 1, end: 7 });
    assert_eq!(BatchRange::default_for(0), BatchRange { start: 1, end: 1 });
}

#[test]
fn resolve_clamps_both_bounds() {
    let r = BatchRange::new(0, 99).resolve(5).unwrap();
    assert_eq!((r.start, r.end), (1, 5));

    let r = BatchRange::new(2, 4).resolve(10).unwrap();
    assert_eq!((r.start, r.end), (2, 4));
}

#[test]
fn inverted_range_collapses_to_end() {
    // start > end after clamping pulls start down to end.
    let r = BatchRange::new(5, 2).resolve(3).unwrap();
    assert_eq!((r.start, r.end), (2, 2));
    assert_eq!(r.count(), 1);

    let r = BatchRange::new(9, 0).resolve(4).unwrap();
    assert_eq!((r.start, r.end), (1, 1));
}

#[test]
fn resolve_is_none_when_nothing_loaded() {
    assert!(BatchRange::new(1, 1).resolve(0).is_none());
}

#[test]
fn indices_are_zero_based_over_the_inclusive_span() {
    let r = BatchRange::new(2, 4).resolve(10).unwrap();
    assert_eq!(r.indices().collect::<Vec<_>>(), vec![1, 2, 3]);
}
