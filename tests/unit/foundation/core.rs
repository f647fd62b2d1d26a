use super::*;

fn bx(index: usize, top: f64) -> LayoutBox {
    LayoutBox {
        index,
        left: 10.0,
        top,
        width: 100.0,
        height: 50.0,
    }
}

#[test]
fn edges_and_rect_agree() {
    let b = bx(0, 20.0);
    assert_eq!(b.right(), 110.0);
    assert_eq!(b.bottom(), 70.0);
    assert_eq!(b.rect(), Rect::new(10.0, 20.0, 110.0, 70.0));
}

#[test]
fn hit_test_is_half_open() {
    let b = bx(0, 0.0);
    assert!(b.contains(Point::new(10.0, 0.0)));
    assert!(b.contains(Point::new(109.9, 49.9)));
    assert!(!b.contains(Point::new(110.0, 10.0)));
    assert!(!b.contains(Point::new(50.0, 50.0)));
}

#[test]
fn box_for_skips_missing_indices() {
    let result = LayoutResult {
        boxes: vec![bx(0, 0.0), bx(1, 60.0), bx(3, 120.0)],
        container_height: 170.0,
    };
    assert_eq!(result.box_for(1).map(|b| b.top), Some(60.0));
    assert_eq!(result.box_for(3).map(|b| b.top), Some(120.0));
    assert!(result.box_for(2).is_none());
    assert_eq!(result.indices().collect::<Vec<_>>(), vec![0, 1, 3]);
}

#[test]
fn empty_layout_has_zero_height() {
    let r = LayoutResult::empty();
    assert!(r.is_empty());
    assert_eq!(r.len(), 0);
    assert_eq!(r.container_height, 0.0);
}
