use super::*;
use crate::gallery::config::{Columns, LastRowBehavior};
use crate::gallery::item::ItemInput;

fn items(aspects: &[f64]) -> Vec<Item> {
    aspects
        .iter()
        .enumerate()
        .map(|(i, &ar)| Item::from_input(i, ItemInput::new(format!("{i}.jpg")).with_aspect_ratio(ar)))
        .collect()
}

#[test]
fn selects_engine_by_layout_kind() {
    let items = items(&[1.0; 4]);

    let masonry = GalleryConfig::builder()
        .layout(LayoutKind::Masonry)
        .columns(Columns::Fixed(2))
        .gap(20.0)
        .build()
        .unwrap();
    let r = compute_layout(&items, 620.0, &masonry).unwrap();
    assert_eq!(r.container_height, 620.0);

    let grid = GalleryConfig::builder()
        .layout(LayoutKind::Grid)
        .columns(Columns::Fixed(4))
        .gap(0.0)
        .build()
        .unwrap();
    let r = compute_layout(&items, 400.0, &grid).unwrap();
    assert_eq!(r.container_height, 100.0);

    let justified = GalleryConfig::builder()
        .gap(0.0)
        .target_row_height(100.0)
        .last_row_behavior(LastRowBehavior::Fill)
        .build()
        .unwrap();
    let r = compute_layout(&items, 400.0, &justified).unwrap();
    assert!(r.boxes.iter().all(|b| b.top == 0.0 && b.height == 100.0));
}

#[test]
fn zero_items_is_not_an_error() {
    for kind in [LayoutKind::Justified, LayoutKind::Masonry, LayoutKind::Grid] {
        let cfg = GalleryConfig::builder().layout(kind).build().unwrap();
        let r = compute_layout(&[], 800.0, &cfg).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.container_height, 0.0);
    }
}

#[test]
fn non_finite_width_is_rejected() {
    let cfg = GalleryConfig::default();
    let err = compute_layout(&items(&[1.0]), f64::NAN, &cfg).unwrap_err();
    assert!(matches!(err, MosaicError::Validation(_)));
    assert!(compute_layout(&items(&[1.0]), f64::INFINITY, &cfg).is_err());
}

#[test]
fn negative_width_is_clamped_to_zero() {
    let cfg = GalleryConfig::builder()
        .layout(LayoutKind::Grid)
        .build()
        .unwrap();
    let r = compute_layout(&items(&[1.0, 1.0]), -50.0, &cfg).unwrap();
    assert!(r.boxes.iter().all(|b| b.width == 0.0 && b.height == 0.0));
}

#[derive(Clone, Default)]
struct SharedBuf(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn negative_width_clamp_emits_a_debug_event() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let cfg = GalleryConfig::default();
    tracing::subscriber::with_default(subscriber, || {
        compute_layout(&items(&[1.0]), -50.0, &cfg).unwrap();
    });

    let logs = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("negative container width"), "{logs}");
}
