use std::collections::BTreeSet;

/// Mount/unmount instructions produced by one reconciliation.
///
/// Each entry is independent; callers may apply them in any order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct RenderDiff {
    /// Indices that became visible and need an element.
    pub mount: Vec<usize>,
    /// Indices that left the visible set and whose element should go.
    pub unmount: Vec<usize>,
}

impl RenderDiff {
    /// `true` when nothing needs to change.
    pub fn is_empty(&self) -> bool {
        self.mount.is_empty() && self.unmount.is_empty()
    }
}

/// Diffs `rendered` against `visible` and updates `rendered` to equal `visible`.
pub fn diff_render_set(rendered: &mut BTreeSet<usize>, visible: &BTreeSet<usize>) -> RenderDiff {
    let mount: Vec<usize> = visible.difference(rendered).copied().collect();
    let unmount: Vec<usize> = rendered.difference(visible).copied().collect();

    for idx in &unmount {
        rendered.remove(idx);
    }
    rendered.extend(mount.iter().copied());

    RenderDiff { mount, unmount }
}

/// The set of item indices currently materialized by the renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderSet {
    rendered: BTreeSet<usize>,
}

impl RenderSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Brings the set in line with `visible`, returning what changed.
    pub fn reconcile(&mut self, visible: &BTreeSet<usize>) -> RenderDiff {
        let diff = diff_render_set(&mut self.rendered, visible);
        tracing::trace!(
            mount = diff.mount.len(),
            unmount = diff.unmount.len(),
            rendered = self.rendered.len(),
            "render set reconciled"
        );
        diff
    }

    /// Empties the set, returning every index that was rendered.
    pub fn clear(&mut self) -> Vec<usize> {
        std::mem::take(&mut self.rendered).into_iter().collect()
    }

    /// Whether `index` is currently rendered.
    pub fn contains(&self, index: usize) -> bool {
        self.rendered.contains(&index)
    }

    /// Number of rendered indices.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    /// `true` when nothing is rendered.
    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Rendered indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.rendered.iter().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/diff.rs"]
mod tests;
