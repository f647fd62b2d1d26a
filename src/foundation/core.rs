pub use kurbo::{Point, Rect};

/// One placed item: position and size inside the gallery container, in pixels.
///
/// Coordinates are relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutBox {
    /// Index of the originating item in the gallery's item list.
    pub index: usize,
    /// Distance from the container's left edge.
    pub left: f64,
    /// Distance from the container's top edge.
    pub top: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
}

impl LayoutBox {
    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The box as a kurbo rectangle.
    pub fn rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right(), self.bottom())
    }

    /// Half-open hit test: the left/top edges are inside, the right/bottom edges are not.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }
}

/// Output of one layout pass.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    /// Placed boxes, ascending by item index.
    pub boxes: Vec<LayoutBox>,
    /// Total height the container must have to hold every box.
    pub container_height: f64,
}

impl LayoutResult {
    /// Empty layout (no boxes, zero height).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of placed boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// `true` when nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Looks up the box placed for `index`, if that item was placed at all.
    pub fn box_for(&self, index: usize) -> Option<&LayoutBox> {
        self.boxes
            .binary_search_by_key(&index, |b| b.index)
            .ok()
            .map(|pos| &self.boxes[pos])
    }

    /// All placed item indices, in box order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.boxes.iter().map(|b| b.index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
