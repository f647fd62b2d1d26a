use super::*;
use crate::gallery::config::Columns;

fn params(width: f64, gap: f64, columns: Columns) -> ColumnParams {
    ColumnParams {
        container_width: width,
        gap,
        column_width: 100.0,
        columns,
    }
}

#[test]
fn five_items_on_three_columns() {
    let r = layout_grid(5, &params(320.0, 10.0, Columns::Fixed(3)));
    assert_eq!(r.len(), 5);
    let b3 = r.boxes[3];
    assert_eq!((b3.left, b3.top), (0.0, 110.0));
    assert_eq!((b3.width, b3.height), (100.0, 100.0));
    let b4 = r.boxes[4];
    assert_eq!((b4.left, b4.top), (110.0, 110.0));
    assert_eq!(r.container_height, 210.0);
}

#[test]
fn trailing_gap_is_trimmed() {
    let r = layout_grid(3, &params(320.0, 10.0, Columns::Fixed(3)));
    assert_eq!(r.container_height, 100.0);
}

#[test]
fn auto_columns_use_nominal_width() {
    // (450 + 10) / (100 + 10) = 4.18 -> 4 columns of 105px
    let r = layout_grid(6, &params(450.0, 10.0, Columns::Auto));
    assert_eq!(r.boxes[3].left, 345.0);
    assert_eq!(r.boxes[4].left, 0.0);
    assert_eq!(r.boxes[4].top, 115.0);
    assert_eq!(r.container_height, 220.0);
}

#[test]
fn zero_items_is_empty_layout() {
    let r = layout_grid(0, &params(320.0, 10.0, Columns::Fixed(3)));
    assert!(r.is_empty());
    assert_eq!(r.container_height, 0.0);
}
