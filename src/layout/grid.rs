use crate::{
    foundation::core::{LayoutBox, LayoutResult},
    layout::masonry::ColumnParams,
};

/// Square cells filled row by row. Aspect ratios are ignored, only the count matters.
pub(crate) fn layout_grid(count: usize, p: &ColumnParams) -> LayoutResult {
    if count == 0 {
        return LayoutResult::empty();
    }

    let grid = p.grid();
    let cell = grid.width;
    let boxes = (0..count)
        .map(|index| {
            let col = index % grid.count;
            let row = index / grid.count;
            LayoutBox {
                index,
                left: grid.left(col, p.gap),
                top: row as f64 * (cell + p.gap),
                width: cell,
                height: cell,
            }
        })
        .collect();

    let rows = count.div_ceil(grid.count) as f64;
    LayoutResult {
        boxes,
        container_height: (rows * (cell + p.gap) - p.gap).max(0.0),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
