//! Camera: maps the sprite registry into a bounded glyph grid.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The camera ranks sprites by the sum of Euclidean distances from their
//! viewport-local position to the four viewport corners. The sum is smallest
//! near the viewport center and grows monotonically outward, so one metric
//! serves as both the paint-order key and the culling cutoff: sprites are
//! painted in ascending metric order, and the pass stops at the first sprite
//! whose metric exceeds the metric of the viewport's own corner.

use tracing::warn;

use tui_sprites_core::Registry;
use tui_sprites_types::Position;

use crate::grid::Grid;

/// Receives rendered cells one at a time, row-major.
pub trait PixelSink {
    fn set_pixel(&mut self, column: u16, row: u16, glyph: char);
}

/// A fixed-size, anchored viewport over the registry's world space.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Viewport size in cells (width, height).
    size: (u16, u16),
    /// World position of the viewport's top-left cell.
    anchor: Position,
    /// Glyph for cells no sprite covers.
    fill: char,
    /// Diagnostic label, used in warnings.
    label: String,
}

impl Camera {
    pub fn new(label: impl Into<String>, size: (u16, u16), anchor: Position, fill: char) -> Self {
        let label = label.into();
        if size.0 == 0 || size.1 == 0 {
            warn!(
                "camera \"{label}\" has a zero-area viewport ({}x{}) and will render nothing",
                size.0, size.1
            );
        }
        Self {
            size,
            anchor,
            fill,
            label,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// Move the viewport's top-left cell to a new world position.
    pub fn set_anchor(&mut self, anchor: Position) {
        self.anchor = anchor;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sum of Euclidean distances from a viewport-local position to the four
    /// viewport corners.
    pub fn corner_distance_sum(&self, local: Position) -> f64 {
        let w = self.size.0 as i32 - 1;
        let h = self.size.1 as i32 - 1;

        local.distance_to(Position::new(0, 0))
            + local.distance_to(Position::new(w, 0))
            + local.distance_to(Position::new(w, h))
            + local.distance_to(Position::new(0, h))
    }

    /// The culling cutoff: the metric of the viewport's own top-left corner.
    ///
    /// By convexity the corners maximize the metric over the viewport, so
    /// every in-view cell scores at or below this value.
    pub fn reference_metric(&self) -> f64 {
        self.corner_distance_sum(Position::new(0, 0))
    }

    /// Whether a sprite with the given metric would be painted.
    pub fn visible(&self, metric: f64) -> bool {
        metric <= self.reference_metric()
    }

    /// Render every visible sprite into a fresh grid.
    ///
    /// Sprites are painted in ascending metric order, ties broken by
    /// registration order, so when two sprites land on the same cell the one
    /// painted later wins: larger metric beats smaller, and at equal metric
    /// the later registration beats the earlier one.
    ///
    /// The ascending order also gives the cull its early exit: once one
    /// sprite scores past the cutoff, every remaining sprite does too and the
    /// pass stops. The cutoff tracks the viewport's bounding extent rather
    /// than exact containment, so each placement still goes through the
    /// grid's range-checked write.
    pub fn render(&self, registry: &Registry) -> Grid {
        let mut grid = Grid::new(self.size.0, self.size.1, self.fill);
        let cutoff = self.reference_metric();

        // (metric, registration index) pairs; the index is the tie-break.
        let mut ranked: Vec<(f64, usize, Position, char)> = registry
            .iter()
            .enumerate()
            .map(|(index, (_, sprite))| {
                let local = sprite.position() - self.anchor;
                (self.corner_distance_sum(local), index, local, sprite.glyph())
            })
            .collect();
        ranked.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for (metric, _, local, glyph) in ranked {
            if metric > cutoff {
                break;
            }
            grid.set(local.x, local.y, glyph);
        }

        grid
    }

    /// Render, then emit every cell row-major to `sink`.
    pub fn push(&self, registry: &Registry, sink: &mut impl PixelSink) {
        let grid = self.render(registry);
        for row in 0..grid.height() {
            for column in 0..grid.width() {
                // Cells inside the grid's own bounds always exist.
                if let Some(glyph) = grid.get(column as i32, row as i32) {
                    sink.set_pixel(column, row, glyph);
                }
            }
        }
    }
}
