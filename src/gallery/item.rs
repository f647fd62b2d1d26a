use std::ops::Range;

/// Aspect ratio used when an item carries no usable shape information.
pub const DEFAULT_ASPECT_RATIO: f64 = 1.0;

/// Caller-supplied description of one media item.
///
/// Any combination of the optional fields may be missing; ingestion never fails.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    /// Opaque source reference (URL, path, key) passed through to the renderer.
    #[serde(default)]
    pub source: String,
    /// Intrinsic width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Intrinsic height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Explicit width/height ratio; wins over `width`/`height` when usable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<f64>,
}

impl ItemInput {
    /// Input with only a source reference.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            ..Self::default()
        }
    }

    /// Sets intrinsic pixel dimensions.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Sets an explicit aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }
}

/// A normalized gallery item. The aspect ratio is always finite and positive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    index: usize,
    source: String,
    width: Option<f64>,
    height: Option<f64>,
    aspect_ratio: f64,
}

impl Item {
    /// Normalizes `input` into the item stored at `index`.
    pub fn from_input(index: usize, input: ItemInput) -> Self {
        let aspect_ratio = resolve_aspect_ratio(&input);
        Self {
            index,
            source: input.source,
            width: input.width,
            height: input.height,
            aspect_ratio,
        }
    }

    /// Position in the gallery's item list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source reference as supplied by the caller.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Intrinsic width, if supplied.
    pub fn width(&self) -> Option<f64> {
        self.width
    }

    /// Intrinsic height, if supplied.
    pub fn height(&self) -> Option<f64> {
        self.height
    }

    /// Normalized width/height ratio.
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }
}

fn usable(v: Option<f64>) -> Option<f64> {
    v.filter(|v| v.is_finite() && *v > 0.0)
}

fn resolve_aspect_ratio(input: &ItemInput) -> f64 {
    if let Some(ar) = usable(input.aspect_ratio) {
        return ar;
    }
    if let (Some(w), Some(h)) = (usable(input.width), usable(input.height)) {
        let ar = w / h;
        if ar.is_finite() && ar > 0.0 {
            return ar;
        }
    }
    tracing::debug!(
        source = %input.source,
        "item has no usable shape, defaulting aspect ratio to {DEFAULT_ASPECT_RATIO}"
    );
    DEFAULT_ASPECT_RATIO
}

/// Append-only list of normalized items.
#[derive(Clone, Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and appends `inputs`, returning the indices assigned to them.
    pub fn add_items<I>(&mut self, inputs: I) -> Range<usize>
    where
        I: IntoIterator<Item = ItemInput>,
    {
        let start = self.items.len();
        for input in inputs {
            let index = self.items.len();
            self.items.push(Item::from_input(index, input));
        }
        start..self.items.len()
    }

    /// Item at `index`.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// All items in insertion order.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` when no items were added yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/item.rs"]
mod tests;
