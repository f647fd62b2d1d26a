//! Justified rows.
//!
//! Row breaking is a bounded local search: each row looks ahead only within itself and picks
//! the break whose height lands closest to the target. Rows are never revisited, so the result
//! is deterministic but not globally optimal.

use crate::{
    foundation::core::{LayoutBox, LayoutResult},
    gallery::config::LastRowBehavior,
};

/// Rows shorter than this fraction of the target end the look-ahead.
const EARLY_STOP_RATIO: f64 = 0.5;

#[derive(Clone, Copy, Debug)]
pub(crate) struct JustifiedParams {
    pub(crate) container_width: f64,
    pub(crate) gap: f64,
    pub(crate) target_row_height: f64,
    pub(crate) last_row: LastRowBehavior,
}

pub(crate) fn layout_justified(aspects: &[f64], p: &JustifiedParams) -> LayoutResult {
    let n = aspects.len();
    let mut boxes = Vec::with_capacity(n);
    let mut top = 0.0;
    let mut start = 0;

    while start < n {
        let Some(end) = best_break(aspects, start, p) else {
            let ar = sanitize(aspects[start]);
            tracing::debug!(index = start, "no usable row break, forcing single-item row");
            boxes.push(LayoutBox {
                index: start,
                left: 0.0,
                top,
                width: p.target_row_height * ar,
                height: p.target_row_height,
            });
            top += p.target_row_height + p.gap;
            start += 1;
            continue;
        };

        let row = &aspects[start..=end];
        let sum: f64 = row.iter().sum();
        let total_gap = (row.len() - 1) as f64 * p.gap;
        let mut height = (p.container_width - total_gap) / sum;
        let mut left = 0.0;

        // The final row always goes through `last_row`, whether or not it fills the width.
        if end + 1 == n {
            match p.last_row {
                LastRowBehavior::Fill => {}
                LastRowBehavior::Hide => break,
                align @ (LastRowBehavior::Left
                | LastRowBehavior::Center
                | LastRowBehavior::Right) => {
                    height = p.target_row_height;
                    let remaining = p.container_width - (sum * height + total_gap);
                    left = match align {
                        LastRowBehavior::Center => (remaining / 2.0).max(0.0),
                        LastRowBehavior::Right => remaining.max(0.0),
                        _ => 0.0,
                    };
                }
            }
        }

        for (offset, ar) in row.iter().enumerate() {
            let width = height * ar;
            boxes.push(LayoutBox {
                index: start + offset,
                left,
                top,
                width,
                height,
            });
            left += width + p.gap;
        }

        top += height + p.gap;
        start = end + 1;
    }

    LayoutResult {
        boxes,
        container_height: top,
    }
}

/// Returns the inclusive end index of the row starting at `start`, or `None` when no
/// candidate produced a usable height.
fn best_break(aspects: &[f64], start: usize, p: &JustifiedParams) -> Option<usize> {
    let mut sum = 0.0;
    let mut best: Option<(usize, f64)> = None;

    for (j, ar) in aspects.iter().enumerate().skip(start) {
        sum += ar;
        let count = (j - start + 1) as f64;
        let height = (p.container_width - (count - 1.0) * p.gap) / sum;
        if !height.is_finite() {
            continue;
        }
        if height < 0.0 {
            break;
        }

        let cost = (height - p.target_row_height).abs();
        if best.is_none_or(|(_, c)| cost < c) {
            best = Some((j, cost));
        }
        if height < EARLY_STOP_RATIO * p.target_row_height {
            break;
        }
    }

    best.map(|(j, _)| j)
}

fn sanitize(ar: f64) -> f64 {
    if ar.is_finite() && ar > 0.0 { ar } else { 1.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/justified.rs"]
mod tests;
