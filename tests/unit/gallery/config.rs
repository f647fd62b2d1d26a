use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = GalleryConfig::default();
    assert_eq!(cfg.layout(), LayoutKind::Justified);
    assert_eq!(cfg.gap(), 8.0);
    assert_eq!(cfg.target_row_height(), 200.0);
    assert_eq!(cfg.last_row_behavior(), LastRowBehavior::Left);
    assert_eq!(cfg.columns(), Columns::Auto);
    assert!(cfg.virtualize());
    assert_eq!(GalleryConfig::builder().build().unwrap(), cfg);
}

#[test]
fn builder_rejects_non_positive_sizes() {
    assert!(matches!(
        GalleryConfig::builder().target_row_height(0.0).build(),
        Err(MosaicError::Config(_))
    ));
    assert!(matches!(
        GalleryConfig::builder().column_width(-5.0).build(),
        Err(MosaicError::Config(_))
    ));
    assert!(matches!(
        GalleryConfig::builder().columns(Columns::Fixed(0)).build(),
        Err(MosaicError::Config(_))
    ));
    assert!(GalleryConfig::builder().gap(-1.0).build().is_err());
    assert!(GalleryConfig::builder().buffer(f64::NAN).build().is_err());
    assert!(
        GalleryConfig::builder()
            .target_row_height(f64::INFINITY)
            .build()
            .is_err()
    );
}

#[test]
fn zero_gap_and_buffer_are_allowed() {
    let cfg = GalleryConfig::builder().gap(0.0).buffer(0.0).build().unwrap();
    assert_eq!(cfg.gap(), 0.0);
    assert_eq!(cfg.buffer(), 0.0);
}

#[test]
fn json_options_table_is_parsed() {
    let cfg = GalleryConfig::from_json(
        r##"{
            "layout": "masonry",
            "gap": 12,
            "columns": 3,
            "lastRowBehavior": "center",
            "virtualize": false,
            "placeholderColor": "#000"
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.layout(), LayoutKind::Masonry);
    assert_eq!(cfg.gap(), 12.0);
    assert_eq!(cfg.columns(), Columns::Fixed(3));
    assert_eq!(cfg.last_row_behavior(), LastRowBehavior::Center);
    assert!(!cfg.virtualize());
    assert_eq!(cfg.placeholder_color(), "#000");
    assert_eq!(cfg.target_row_height(), 200.0);
}

#[test]
fn json_columns_keyword_and_errors() {
    let cfg = GalleryConfig::from_json(r#"{"columns":"auto"}"#).unwrap();
    assert_eq!(cfg.columns(), Columns::Auto);

    let cfg = GalleryConfig::from_json(r#"{"columns":" AUTO "}"#).unwrap();
    assert_eq!(cfg.columns(), Columns::Auto);

    for bad in [
        r#"{"columns":0}"#,
        r#"{"columns":-2}"#,
        r#"{"columns":"many"}"#,
        r#"{"columns":5000000000}"#,
    ] {
        assert!(
            matches!(GalleryConfig::from_json(bad), Err(MosaicError::Config(_))),
            "{bad}"
        );
    }
    // A value of the wrong JSON type never reaches validation.
    assert!(matches!(
        GalleryConfig::from_json(r#"{"columns":true}"#),
        Err(MosaicError::Serde(_))
    ));
}

#[test]
fn json_rejects_unknown_and_invalid_options() {
    assert!(GalleryConfig::from_json(r#"{"rowHeight":100}"#).is_err());
    assert!(GalleryConfig::from_json(r#"{"layout":"carousel"}"#).is_err());
    assert!(GalleryConfig::from_json(r#"{"targetRowHeight":-10}"#).is_err());
}

#[test]
fn serde_roundtrip_preserves_config() {
    let cfg = GalleryConfig::builder()
        .layout(LayoutKind::Grid)
        .columns(Columns::Fixed(4))
        .gap(2.5)
        .build()
        .unwrap();
    let s = serde_json::to_string(&cfg).unwrap();
    assert!(s.contains("\"columns\":4"));
    let de: GalleryConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(de, cfg);

    let auto = GalleryConfig::from_json(r#"{"columns":"Auto"}"#).unwrap();
    assert_eq!(auto, GalleryConfig::default());
}
