use std::collections::BTreeSet;

use crate::{
    foundation::core::LayoutBox,
    foundation::error::{MosaicError, MosaicResult},
};

/// Scroll state supplied by the host on every scroll or resize tick.
///
/// All values share one vertical coordinate space (typically the page).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Current vertical scroll position.
    pub scroll_offset: f64,
    /// Visible height of the scrolling viewport.
    pub viewport_height: f64,
    /// Position of the gallery container's top edge.
    #[serde(default)]
    pub container_top: f64,
}

impl Viewport {
    /// Viewport scrolled to `scroll_offset`, `viewport_height` tall, container at `container_top`.
    pub fn new(scroll_offset: f64, viewport_height: f64, container_top: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            container_top,
        }
    }

    /// Rejects non-finite values and negative heights.
    pub fn validate(&self) -> MosaicResult<()> {
        if !self.scroll_offset.is_finite() || !self.container_top.is_finite() {
            return Err(MosaicError::validation(
                "scroll offset and container top must be finite",
            ));
        }
        if !self.viewport_height.is_finite() || self.viewport_height < 0.0 {
            return Err(MosaicError::validation(
                "viewport height must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

/// Vertical band, in container coordinates, inside which boxes count as visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleBand {
    /// Upper edge (never negative).
    pub start: f64,
    /// Lower edge.
    pub end: f64,
}

impl VisibleBand {
    /// Band covering the viewport plus `buffer` pixels above and below.
    pub fn new(viewport: &Viewport, buffer: f64) -> Self {
        let local = viewport.scroll_offset - viewport.container_top;
        Self {
            start: (local - buffer).max(0.0),
            end: local + viewport.viewport_height + buffer,
        }
    }

    /// Strict overlap: a box touching the band only at an edge is outside.
    pub fn intersects(&self, b: &LayoutBox) -> bool {
        b.bottom() > self.start && b.top < self.end
    }
}

/// Indices of the boxes that intersect the buffered viewport band.
pub fn resolve_visible(boxes: &[LayoutBox], viewport: &Viewport, buffer: f64) -> BTreeSet<usize> {
    let band = VisibleBand::new(viewport, buffer);
    boxes
        .iter()
        .filter(|b| band.intersects(b))
        .map(|b| b.index)
        .collect()
}

/// Every placed index; used when virtualization is off.
pub fn all_indices(boxes: &[LayoutBox]) -> BTreeSet<usize> {
    boxes.iter().map(|b| b.index).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/view/visibility.rs"]
mod tests;
