use crate::foundation::error::{MosaicError, MosaicResult};

/// Which layout engine arranges the gallery.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Rows scaled to a common height that span the container width.
    #[default]
    Justified,
    /// Shortest-column-first placement.
    Masonry,
    /// Square cells on a fixed column grid.
    Grid,
}

/// How the final row of a justified layout is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LastRowBehavior {
    /// Target height, packed to the left edge.
    #[default]
    Left,
    /// Target height, centered.
    Center,
    /// Target height, packed to the right edge.
    Right,
    /// Stretched to the full container width like every other row.
    Fill,
    /// Dropped entirely; its items receive no box.
    Hide,
}

/// Column count for masonry and grid layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ColumnsRepr", into = "ColumnsRepr")]
pub enum Columns {
    /// As many columns of roughly `column_width` as fit.
    #[default]
    Auto,
    /// Exactly this many columns.
    Fixed(u32),
}

/// Raw `columns` value as written in JSON. Range checks happen in `resolve`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ColumnsRepr {
    Count(i64),
    Keyword(String),
}

impl ColumnsRepr {
    fn resolve(&self) -> MosaicResult<Columns> {
        match self {
            ColumnsRepr::Count(n) if *n <= 0 => Err(MosaicError::config(format!(
                "columns must be > 0 (got {n})"
            ))),
            ColumnsRepr::Count(n) => u32::try_from(*n)
                .map(Columns::Fixed)
                .map_err(|_| MosaicError::config(format!("columns out of range (got {n})"))),
            ColumnsRepr::Keyword(s) if s.trim().eq_ignore_ascii_case("auto") => Ok(Columns::Auto),
            ColumnsRepr::Keyword(s) => Err(MosaicError::config(format!(
                "columns must be \"auto\" or a positive integer (got \"{s}\")"
            ))),
        }
    }
}

impl Default for ColumnsRepr {
    fn default() -> Self {
        Columns::Auto.into()
    }
}

impl TryFrom<ColumnsRepr> for Columns {
    type Error = MosaicError;

    fn try_from(value: ColumnsRepr) -> Result<Self, Self::Error> {
        value.resolve()
    }
}

impl From<Columns> for ColumnsRepr {
    fn from(value: Columns) -> Self {
        match value {
            Columns::Auto => ColumnsRepr::Keyword("auto".to_string()),
            Columns::Fixed(n) => ColumnsRepr::Count(i64::from(n)),
        }
    }
}

/// The recognized-options table, as it appears in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
struct ConfigOptions {
    layout: LayoutKind,
    gap: f64,
    target_row_height: f64,
    last_row_behavior: LastRowBehavior,
    column_width: f64,
    columns: ColumnsRepr,
    virtualize: bool,
    buffer: f64,
    placeholder_color: String,
}

impl Default for ConfigOptions {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Justified,
            gap: 8.0,
            target_row_height: 200.0,
            last_row_behavior: LastRowBehavior::Left,
            column_width: 250.0,
            columns: ColumnsRepr::default(),
            virtualize: true,
            buffer: 400.0,
            placeholder_color: "#e5e7eb".to_string(),
        }
    }
}

impl ConfigOptions {
    /// Checks every option and returns the resolved column policy.
    fn validate(&self) -> MosaicResult<Columns> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(MosaicError::config("gap must be finite and >= 0"));
        }
        if !self.target_row_height.is_finite() || self.target_row_height <= 0.0 {
            return Err(MosaicError::config("targetRowHeight must be finite and > 0"));
        }
        if !self.column_width.is_finite() || self.column_width <= 0.0 {
            return Err(MosaicError::config("columnWidth must be finite and > 0"));
        }
        if !self.buffer.is_finite() || self.buffer < 0.0 {
            return Err(MosaicError::config("buffer must be finite and >= 0"));
        }
        self.columns.resolve()
    }
}

/// Validated, immutable gallery configuration.
///
/// Build one with [`GalleryConfig::builder`], [`GalleryConfig::from_json`], or serde.
/// To change settings, construct a new value and hand it to
/// [`Gallery::set_config`](crate::Gallery::set_config).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "ConfigOptions", into = "ConfigOptions")]
pub struct GalleryConfig {
    opts: ConfigOptions,
    columns: Columns,
}

impl TryFrom<ConfigOptions> for GalleryConfig {
    type Error = MosaicError;

    fn try_from(mut opts: ConfigOptions) -> Result<Self, Self::Error> {
        let columns = opts.validate()?;
        opts.columns = columns.into();
        Ok(Self { opts, columns })
    }
}

impl From<GalleryConfig> for ConfigOptions {
    fn from(value: GalleryConfig) -> Self {
        value.opts
    }
}

impl GalleryConfig {
    /// Starts a builder seeded with the defaults.
    pub fn builder() -> GalleryConfigBuilder {
        GalleryConfigBuilder::default()
    }

    /// Parses and validates a JSON options table. Missing keys take their defaults.
    pub fn from_json(s: &str) -> MosaicResult<Self> {
        let opts: ConfigOptions = serde_json::from_str(s)?;
        Self::try_from(opts)
    }

    /// Active layout engine.
    pub fn layout(&self) -> LayoutKind {
        self.opts.layout
    }

    /// Spacing between boxes, both axes.
    pub fn gap(&self) -> f64 {
        self.opts.gap
    }

    /// Preferred justified row height.
    pub fn target_row_height(&self) -> f64 {
        self.opts.target_row_height
    }

    /// Treatment of the last justified row.
    pub fn last_row_behavior(&self) -> LastRowBehavior {
        self.opts.last_row_behavior
    }

    /// Nominal column width for `Columns::Auto`.
    pub fn column_width(&self) -> f64 {
        self.opts.column_width
    }

    /// Column count policy.
    pub fn columns(&self) -> Columns {
        self.columns
    }

    /// Whether only the buffered viewport band is materialized.
    pub fn virtualize(&self) -> bool {
        self.opts.virtualize
    }

    /// Extra margin above and below the viewport.
    pub fn buffer(&self) -> f64 {
        self.opts.buffer
    }

    /// Colour shown by renderers before an item's media is ready.
    pub fn placeholder_color(&self) -> &str {
        &self.opts.placeholder_color
    }
}

/// Builder for [`GalleryConfig`]. Validation happens in [`GalleryConfigBuilder::build`].
#[derive(Clone, Debug, Default)]
pub struct GalleryConfigBuilder {
    opts: ConfigOptions,
}

impl GalleryConfigBuilder {
    /// Layout engine.
    pub fn layout(mut self, layout: LayoutKind) -> Self {
        self.opts.layout = layout;
        self
    }

    /// Gap in pixels.
    pub fn gap(mut self, gap: f64) -> Self {
        self.opts.gap = gap;
        self
    }

    /// Justified target row height in pixels.
    pub fn target_row_height(mut self, h: f64) -> Self {
        self.opts.target_row_height = h;
        self
    }

    /// Justified last-row treatment.
    pub fn last_row_behavior(mut self, behavior: LastRowBehavior) -> Self {
        self.opts.last_row_behavior = behavior;
        self
    }

    /// Nominal column width in pixels.
    pub fn column_width(mut self, w: f64) -> Self {
        self.opts.column_width = w;
        self
    }

    /// Column count policy.
    pub fn columns(mut self, columns: Columns) -> Self {
        self.opts.columns = columns.into();
        self
    }

    /// Enables or disables virtualization.
    pub fn virtualize(mut self, on: bool) -> Self {
        self.opts.virtualize = on;
        self
    }

    /// Viewport buffer in pixels.
    pub fn buffer(mut self, buffer: f64) -> Self {
        self.opts.buffer = buffer;
        self
    }

    /// Placeholder colour passed through to renderers.
    pub fn placeholder_color(mut self, color: impl Into<String>) -> Self {
        self.opts.placeholder_color = color.into();
        self
    }

    /// Validates and freezes the configuration.
    pub fn build(self) -> MosaicResult<GalleryConfig> {
        GalleryConfig::try_from(self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/config.rs"]
mod tests;
