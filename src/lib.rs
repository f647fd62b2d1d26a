//! Mosaic lays out media galleries and keeps only the visible part of them materialized.
//!
//! Mosaic v0.1.0 is a pure, host-agnostic engine: it never touches a display, never loads
//! an image, and never reads ambient state such as the window size. The host feeds it numbers
//! and applies the mount/unmount instructions it returns.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: `ItemInput -> Item` (aspect ratio normalized once, never fails)
//! 2. **Lay out**: `[Item] + width + GalleryConfig -> LayoutResult` (justified, masonry or grid)
//! 3. **Resolve**: `LayoutResult + Viewport + buffer -> visible indices`
//! 4. **Diff**: `visible indices + RenderSet -> RenderDiff` (mounts and unmounts)
//!
//! [`Gallery`] wires the four steps together for one gallery instance and drives a
//! host-provided [`Renderer`].
//!
//! # Getting started
//!
//! For a standalone walkthrough of the API and the layout algorithms, see [`crate::guide`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod gallery;
mod layout;
mod view;

/// High-level, standalone documentation for Mosaic's layout engines and virtualization.
pub mod guide;

pub use foundation::core::{LayoutBox, LayoutResult, Point, Rect};
pub use foundation::error::{MosaicError, MosaicResult};
pub use gallery::config::{
    Columns, GalleryConfig, GalleryConfigBuilder, LastRowBehavior, LayoutKind,
};
pub use gallery::controller::{
    ClickEvent, Gallery, MountRequest, RecordingRenderer, RenderOp, Renderer,
};
pub use gallery::item::{DEFAULT_ASPECT_RATIO, Item, ItemInput, ItemStore};
pub use layout::dispatch::compute_layout;
pub use view::diff::{RenderDiff, RenderSet, diff_render_set};
pub use view::visibility::{Viewport, VisibleBand, all_indices, resolve_visible};
