//! Layout engines and the dispatcher that selects between them.
//!
//! Every engine is a pure function of item aspect ratios, container width and configuration.

pub(crate) mod dispatch;
pub(crate) mod grid;
pub(crate) mod justified;
pub(crate) mod masonry;

use crate::gallery::config::Columns;

/// Resolved column geometry shared by masonry and grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ColumnGrid {
    pub(crate) count: usize,
    pub(crate) width: f64,
}

impl ColumnGrid {
    /// Columns always fill `container_width` exactly; `column_width` is only the nominal
    /// size used to pick the count in `Columns::Auto` mode.
    pub(crate) fn resolve(
        container_width: f64,
        gap: f64,
        column_width: f64,
        columns: Columns,
    ) -> Self {
        let count = match columns {
            Columns::Auto => {
                let fit = ((container_width + gap) / (column_width + gap)).floor();
                if fit.is_finite() && fit >= 1.0 {
                    fit as usize
                } else {
                    1
                }
            }
            Columns::Fixed(n) => usize::try_from(n.max(1)).unwrap_or(1),
        };
        let width = ((container_width - (count as f64 - 1.0) * gap) / count as f64).max(0.0);
        Self { count, width }
    }

    /// Left edge of column `col`.
    pub(crate) fn left(&self, col: usize, gap: f64) -> f64 {
        col as f64 * (self.width + gap)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/columns.rs"]
mod tests;
