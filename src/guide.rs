//! # Mosaic guide (v0.1.0)
//!
//! A standalone walkthrough of how Mosaic turns a list of media items into positioned boxes,
//! and how it keeps a host's element count bounded while the page scrolls.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`ItemInput`](crate::ItemInput) / [`Item`](crate::Item): what the host supplies, and its
//!   normalized form. Only the aspect ratio matters for layout.
//! - [`GalleryConfig`](crate::GalleryConfig): immutable, validated options table.
//! - [`compute_layout`](crate::compute_layout): pure function producing a
//!   [`LayoutResult`](crate::LayoutResult).
//! - [`resolve_visible`](crate::resolve_visible): which boxes overlap the buffered viewport.
//! - [`RenderSet`](crate::RenderSet) / [`diff_render_set`](crate::diff_render_set): what to
//!   mount and unmount.
//! - [`Gallery`](crate::Gallery): all of the above for one instance, driving a
//!   [`Renderer`](crate::Renderer).
//!
//! ---
//!
//! ## Aspect ratios
//!
//! An item's aspect ratio is taken from `aspectRatio` when it is finite and positive, otherwise
//! from `width / height`, otherwise it is `1.0`. Degenerate shapes therefore degrade layout
//! quality but never fail ingestion, and the engines never see a zero or negative ratio.
//!
//! ---
//!
//! ## Justified rows
//!
//! Rows are filled left to right. For the row starting at item `i`, the engine tries
//! `i..=j` for growing `j` and computes the height that would make those items span the
//! container exactly:
//!
//! ```text
//! height(j) = (W - (j - i) * gap) / sum(aspect[i..=j])
//! ```
//!
//! It keeps the `j` whose height is closest to `targetRowHeight` and stops looking once the
//! height drops below half the target. This is a bounded local search with no backtracking
//! across rows; it is deterministic but not a global (Knuth-Plass style) optimum.
//!
//! The last row of the sequence always goes through `lastRowBehavior`, even when it happens
//! to fill the width:
//!
//! | `lastRowBehavior` | effect on the last row                                    |
//! |-------------------|-----------------------------------------------------------|
//! | `left`            | target height, packed left (may run past the right edge)  |
//! | `center`          | target height, centered (offset never below zero)         |
//! | `right`           | target height, packed right (offset never below zero)     |
//! | `fill`            | stretched to full width like any other row                |
//! | `hide`            | dropped; its items get no box                             |
//!
//! `containerHeight` includes the gap after the final row.
//!
//! ---
//!
//! ## Masonry and grid
//!
//! Both resolve a column count first: `columns` when it is a number, otherwise
//! `max(1, floor((W + gap) / (columnWidth + gap)))`. Columns are then widened so that they
//! fill the container exactly.
//!
//! - Masonry puts each item, in input order, into the currently shortest column (lowest index
//!   on ties). Heights follow aspect ratios.
//! - Grid uses square cells in row-major order.
//!
//! Neither counts a trailing gap in `containerHeight`.
//!
//! ---
//!
//! ## Virtualization
//!
//! Given a [`Viewport`](crate::Viewport) (scroll offset, viewport height, container top) and a
//! `buffer`, the visible band in container coordinates is
//!
//! ```text
//! [max(0, scroll - containerTop - buffer), scroll - containerTop + viewportHeight + buffer]
//! ```
//!
//! and a box is visible iff `top + height > start && top < end`. Only vertical clipping is
//! considered. With `virtualize = false` every placed box is visible.
//!
//! [`Gallery::update_viewport`](crate::Gallery::update_viewport) diffs the new visible set
//! against what is rendered and calls the renderer. [`Gallery::relayout`](crate::Gallery::relayout)
//! throws away the old geometry, unmounts everything, and mounts the new visible set, so no
//! element ever keeps coordinates from a previous layout.
//!
//! ```
//! use mosaic::{Gallery, GalleryConfig, ItemInput, RecordingRenderer, Viewport};
//!
//! let mut gallery = Gallery::new(GalleryConfig::default());
//! gallery.add_items((0..50).map(|i| ItemInput::new(format!("{i}.jpg")).with_size(1600.0, 1200.0)));
//!
//! let mut renderer = RecordingRenderer::new();
//! gallery.relayout(1200.0, &mut renderer)?;
//! let diff = gallery.update_viewport(Viewport::new(0.0, 800.0, 0.0), &mut renderer)?;
//!
//! assert!(!diff.mount.is_empty());
//! assert!(renderer.mounted().len() < 50);
//! # Ok::<(), mosaic::MosaicError>(())
//! ```
//!
//! ---
//!
//! ## Threading model
//!
//! Everything is synchronous. A `Gallery` must not be called from several threads at once;
//! hosts typically call it once per animation frame. Debouncing resize notifications and
//! throttling scroll notifications is the host's job. Redundant calls are harmless: the same
//! inputs give the same layout and an empty diff.
