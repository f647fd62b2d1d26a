use crate::{
    foundation::core::{LayoutBox, LayoutResult},
    gallery::config::Columns,
    layout::ColumnGrid,
};

#[derive(Clone, Copy, Debug)]
pub(crate) struct ColumnParams {
    pub(crate) container_width: f64,
    pub(crate) gap: f64,
    pub(crate) column_width: f64,
    pub(crate) columns: Columns,
}

impl ColumnParams {
    pub(crate) fn grid(&self) -> ColumnGrid {
        ColumnGrid::resolve(self.container_width, self.gap, self.column_width, self.columns)
    }
}

/// Greedy shortest-column placement in input order.
///
/// `container_height` deliberately drops the gap below the tallest column, like grid.
pub(crate) fn layout_masonry(aspects: &[f64], p: &ColumnParams) -> LayoutResult {
    if aspects.is_empty() {
        return LayoutResult::empty();
    }

    let grid = p.grid();
    let mut heights = vec![0.0f64; grid.count];
    let mut boxes = Vec::with_capacity(aspects.len());

    for (index, &ar) in aspects.iter().enumerate() {
        let col = shortest_column(&heights);
        let height = grid.width / ar;
        boxes.push(LayoutBox {
            index,
            left: grid.left(col, p.gap),
            top: heights[col],
            width: grid.width,
            height,
        });
        heights[col] += height + p.gap;
    }

    let tallest = heights.iter().copied().fold(0.0, f64::max);
    LayoutResult {
        boxes,
        container_height: (tallest - p.gap).max(0.0),
    }
}

/// Ties go to the lowest column index.
fn shortest_column(heights: &[f64]) -> usize {
    let mut best = 0;
    for (col, &h) in heights.iter().enumerate().skip(1) {
        if h < heights[best] {
            best = col;
        }
    }
    best
}

#[cfg(test)]
#[path = "../../tests/unit/layout/masonry.rs"]
mod tests;
