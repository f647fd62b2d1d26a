use super::*;

#[test]
fn explicit_aspect_ratio_wins() {
    let item = Item::from_input(
        0,
        ItemInput::new("a.jpg")
            .with_size(100.0, 100.0)
            .with_aspect_ratio(1.5),
    );
    assert_eq!(item.aspect_ratio(), 1.5);
}

#[test]
fn aspect_ratio_derived_from_size() {
    let item = Item::from_input(3, ItemInput::new("b.jpg").with_size(1600.0, 900.0));
    assert_eq!(item.index(), 3);
    assert!((item.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
    assert_eq!(item.width(), Some(1600.0));
    assert_eq!(item.height(), Some(900.0));
}

#[test]
fn missing_shape_defaults_to_square() {
    let item = Item::from_input(0, ItemInput::new("c.jpg"));
    assert_eq!(item.aspect_ratio(), DEFAULT_ASPECT_RATIO);

    let only_width = ItemInput {
        width: Some(300.0),
        ..ItemInput::new("d.jpg")
    };
    assert_eq!(Item::from_input(0, only_width).aspect_ratio(), 1.0);
}

#[test]
fn degenerate_values_never_leak_into_items() {
    let cases = [
        ItemInput::new("x").with_aspect_ratio(0.0),
        ItemInput::new("x").with_aspect_ratio(-2.0),
        ItemInput::new("x").with_aspect_ratio(f64::NAN),
        ItemInput::new("x").with_size(0.0, 100.0),
        ItemInput::new("x").with_size(100.0, 0.0),
        ItemInput::new("x").with_size(f64::INFINITY, 10.0),
        ItemInput::new("x").with_size(1e-320, 1e300),
    ];
    for input in cases {
        let ar = Item::from_input(0, input).aspect_ratio();
        assert_eq!(ar, 1.0);
    }
}

#[test]
fn bad_explicit_ratio_falls_back_to_size() {
    let item = Item::from_input(
        0,
        ItemInput::new("e.jpg")
            .with_size(200.0, 100.0)
            .with_aspect_ratio(-1.0),
    );
    assert_eq!(item.aspect_ratio(), 2.0);
}

#[test]
fn store_is_append_only() {
    let mut store = ItemStore::new();
    assert!(store.is_empty());

    let first = store.add_items(vec![ItemInput::new("a"), ItemInput::new("b")]);
    assert_eq!(first, 0..2);
    let second = store.add_items(vec![ItemInput::new("c")]);
    assert_eq!(second, 2..3);

    assert_eq!(store.len(), 3);
    assert_eq!(store.get(0).map(Item::source), Some("a"));
    assert_eq!(store.get(2).map(Item::index), Some(2));
    assert!(store.get(3).is_none());

    let empty = store.add_items(Vec::new());
    assert_eq!(empty, 3..3);
}

#[test]
fn input_deserializes_from_camel_case_json() {
    let input: ItemInput =
        serde_json::from_str(r#"{"source":"a.jpg","aspectRatio":0.75}"#).unwrap();
    assert_eq!(input.aspect_ratio, Some(0.75));
    assert_eq!(input.width, None);
}
