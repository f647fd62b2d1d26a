//! Viewport visibility and render-set reconciliation.

pub(crate) mod diff;
pub(crate) mod visibility;
