use std::{collections::BTreeMap, collections::BTreeSet, fmt, ops::Range};

use crate::{
    foundation::core::{LayoutBox, LayoutResult, Point},
    foundation::error::MosaicResult,
    gallery::config::GalleryConfig,
    gallery::item::{Item, ItemInput, ItemStore},
    layout::dispatch::compute_layout,
    view::diff::{RenderDiff, RenderSet},
    view::visibility::{Viewport, all_indices, resolve_visible},
};

/// Everything a renderer needs to materialize one item.
#[derive(Clone, Copy, Debug)]
pub struct MountRequest<'a> {
    /// Item index.
    pub index: usize,
    /// Where the element goes, in container coordinates.
    pub bx: LayoutBox,
    /// The item being shown.
    pub item: &'a Item,
    /// Configured placeholder colour.
    pub placeholder_color: &'a str,
}

/// Host-side element lifecycle. Implementations own the actual display elements.
pub trait Renderer {
    /// Create (or reuse) an element for `req.index` positioned at `req.bx`.
    fn mount(&mut self, req: &MountRequest<'_>);

    /// Remove the element for `index`. Unknown indices must be ignored.
    fn unmount(&mut self, index: usize);
}

/// One call observed by [`RecordingRenderer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOp {
    /// `mount` for an index and box.
    Mount {
        /// Item index.
        index: usize,
        /// Box it was mounted at.
        bx: LayoutBox,
    },
    /// `unmount` for an index that was mounted.
    Unmount(usize),
}

/// Headless renderer that tracks mounted boxes and logs every effective call.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    mounted: BTreeMap<usize, LayoutBox>,
    ops: Vec<RenderOp>,
}

impl RecordingRenderer {
    /// Empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently mounted boxes by index.
    pub fn mounted(&self) -> &BTreeMap<usize, LayoutBox> {
        &self.mounted
    }

    /// Drains the call log.
    pub fn take_ops(&mut self) -> Vec<RenderOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Renderer for RecordingRenderer {
    fn mount(&mut self, req: &MountRequest<'_>) {
        self.mounted.insert(req.index, req.bx);
        self.ops.push(RenderOp::Mount {
            index: req.index,
            bx: req.bx,
        });
    }

    fn unmount(&mut self, index: usize) {
        if self.mounted.remove(&index).is_none() {
            tracing::trace!(index, "unmount for unknown index ignored");
            return;
        }
        self.ops.push(RenderOp::Unmount(index));
    }
}

/// Pointer event forwarded to the click callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickEvent {
    /// Click position in container coordinates.
    pub point: Point,
}

type ClickHandler = Box<dyn FnMut(usize, &Item, &ClickEvent)>;

/// One gallery instance: items, configuration, current geometry and rendered set.
///
/// Not thread-safe by contract; the host serializes calls (one per frame tick is typical).
/// The host debounces resize notifications into [`Gallery::relayout`] and throttles scroll
/// notifications into [`Gallery::update_viewport`].
pub struct Gallery {
    config: GalleryConfig,
    items: ItemStore,
    container_width: Option<f64>,
    layout: LayoutResult,
    stale: bool,
    viewport: Option<Viewport>,
    rendered: RenderSet,
    on_click: Option<ClickHandler>,
}

impl fmt::Debug for Gallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gallery")
            .field("config", &self.config)
            .field("items", &self.items.len())
            .field("container_width", &self.container_width)
            .field("boxes", &self.layout.len())
            .field("stale", &self.stale)
            .field("viewport", &self.viewport)
            .field("rendered", &self.rendered.len())
            .finish_non_exhaustive()
    }
}

impl Gallery {
    /// Empty gallery. Nothing is laid out until the first [`Gallery::relayout`].
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            items: ItemStore::new(),
            container_width: None,
            layout: LayoutResult::empty(),
            stale: true,
            viewport: None,
            rendered: RenderSet::new(),
            on_click: None,
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// All ingested items.
    pub fn items(&self) -> &[Item] {
        self.items.as_slice()
    }

    /// Geometry from the last relayout.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// Indices currently materialized.
    pub fn rendered(&self) -> &RenderSet {
        &self.rendered
    }

    /// Appends items; they are placed by the next relayout.
    pub fn add_items<I>(&mut self, inputs: I) -> Range<usize>
    where
        I: IntoIterator<Item = ItemInput>,
    {
        let added = self.items.add_items(inputs);
        if !added.is_empty() {
            self.stale = true;
        }
        added
    }

    /// Swaps in a new configuration; takes effect on the next relayout.
    pub fn set_config(&mut self, config: GalleryConfig) {
        if config != self.config {
            self.config = config;
            self.stale = true;
        }
    }

    /// Installs the click callback used by [`Gallery::handle_click`].
    pub fn set_on_click<F>(&mut self, f: F)
    where
        F: FnMut(usize, &Item, &ClickEvent) + 'static,
    {
        self.on_click = Some(Box::new(f));
    }

    /// Recomputes geometry for `container_width` and remounts the visible set from scratch.
    ///
    /// A call with the same width and no pending item/config change is a no-op.
    #[tracing::instrument(skip(self, renderer), fields(item_count = self.items.len()))]
    pub fn relayout(
        &mut self,
        container_width: f64,
        renderer: &mut dyn Renderer,
    ) -> MosaicResult<RenderDiff> {
        if !self.stale && self.container_width == Some(container_width) {
            return Ok(RenderDiff::default());
        }

        let layout = compute_layout(self.items.as_slice(), container_width, &self.config)?;
        self.layout = layout;
        self.container_width = Some(container_width);
        self.stale = false;

        let unmount = self.rendered.clear();
        for &index in &unmount {
            renderer.unmount(index);
        }
        let mut diff = self.refresh(renderer);
        diff.unmount = unmount;

        tracing::debug!(
            boxes = self.layout.len(),
            mounted = diff.mount.len(),
            unmounted = diff.unmount.len(),
            "relayout applied"
        );
        Ok(diff)
    }

    /// Records the new scroll state and mounts/unmounts whatever crossed the band.
    #[tracing::instrument(skip(self, renderer))]
    pub fn update_viewport(
        &mut self,
        viewport: Viewport,
        renderer: &mut dyn Renderer,
    ) -> MosaicResult<RenderDiff> {
        viewport.validate()?;
        self.viewport = Some(viewport);
        Ok(self.refresh(renderer))
    }

    /// Index of the box under `point`, in container coordinates.
    pub fn item_at(&self, point: Point) -> Option<usize> {
        self.layout
            .boxes
            .iter()
            .find(|b| b.contains(point))
            .map(|b| b.index)
    }

    /// Hit-tests `point` and forwards a hit to the click callback.
    pub fn handle_click(&mut self, point: Point) -> Option<usize> {
        let index = self.item_at(point)?;
        let item = self.items.get(index)?;
        if let Some(cb) = self.on_click.as_mut() {
            cb(index, item, &ClickEvent { point });
        }
        Some(index)
    }

    fn visible_set(&self) -> BTreeSet<usize> {
        if !self.config.virtualize() {
            return all_indices(&self.layout.boxes);
        }
        match &self.viewport {
            Some(vp) => resolve_visible(&self.layout.boxes, vp, self.config.buffer()),
            None => BTreeSet::new(),
        }
    }

    fn refresh(&mut self, renderer: &mut dyn Renderer) -> RenderDiff {
        let visible = self.visible_set();
        let diff = self.rendered.reconcile(&visible);

        for &index in &diff.unmount {
            renderer.unmount(index);
        }
        for &index in &diff.mount {
            let (Some(bx), Some(item)) = (self.layout.box_for(index), self.items.get(index))
            else {
                tracing::debug!(index, "visible index has no box or item");
                continue;
            };
            renderer.mount(&MountRequest {
                index,
                bx: *bx,
                item,
                placeholder_color: self.config.placeholder_color(),
            });
        }
        diff
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gallery/controller.rs"]
mod tests;
