use crate::{
    foundation::core::LayoutResult,
    foundation::error::{MosaicError, MosaicResult},
    gallery::config::{GalleryConfig, LayoutKind},
    gallery::item::Item,
    layout::{
        grid::layout_grid,
        justified::{JustifiedParams, layout_justified},
        masonry::{ColumnParams, layout_masonry},
    },
};

/// Lays out `items` inside a container `container_width` pixels wide.
///
/// Pure: identical inputs always produce an identical [`LayoutResult`]. Boxes come back in
/// ascending item order. A negative width is treated as zero (with a debug event); a non-finite one is rejected.
#[tracing::instrument(
    skip(items, config),
    fields(item_count = items.len(), layout = ?config.layout())
)]
pub fn compute_layout(
    items: &[Item],
    container_width: f64,
    config: &GalleryConfig,
) -> MosaicResult<LayoutResult> {
    if !container_width.is_finite() {
        return Err(MosaicError::validation(format!(
            "container width must be finite (got {container_width})"
        )));
    }
    let container_width = if container_width < 0.0 {
        tracing::debug!(container_width, "negative container width, clamping to 0");
        0.0
    } else {
        container_width
    };

    let result = match config.layout() {
        LayoutKind::Justified => {
            let aspects: Vec<f64> = items.iter().map(Item::aspect_ratio).collect();
            layout_justified(
                &aspects,
                &JustifiedParams {
                    container_width,
                    gap: config.gap(),
                    target_row_height: config.target_row_height(),
                    last_row: config.last_row_behavior(),
                },
            )
        }
        LayoutKind::Masonry => {
            let aspects: Vec<f64> = items.iter().map(Item::aspect_ratio).collect();
            layout_masonry(&aspects, &column_params(container_width, config))
        }
        LayoutKind::Grid => layout_grid(items.len(), &column_params(container_width, config)),
    };

    tracing::debug!(
        boxes = result.boxes.len(),
        container_height = result.container_height,
        "layout computed"
    );
    Ok(result)
}

fn column_params(container_width: f64, config: &GalleryConfig) -> ColumnParams {
    ColumnParams {
        container_width,
        gap: config.gap(),
        column_width: config.column_width(),
        columns: config.columns(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/dispatch.rs"]
mod tests;
