//! Logical-to-physical pixel mapping for a [`PanelGrid`].
//!
//! The hardware layer addresses chained panels as one wide canvas per parallel
//! chain: panel `order` of a chain occupies columns
//! `order * panel_width .. (order + 1) * panel_width`, and chain `parallel`
//! occupies rows `parallel * panel_height .. (parallel + 1) * panel_height`.
//!
//! [`GridTransformer::map`] takes a pixel of the logical canvas, finds the
//! panel under it, rotates the offset inside that panel, and places the result
//! in the panel's slot on the physical canvas.
//!
//! ```text
//! Logical 64x32 (two panels)      Physical 64x32 (chain of two)
//!   +--------+--------+             +--------+--------+
//!   | order 1| order 0|   ----->    | order 0| order 1|
//!   |  (A)   |  (B)   |             |  (B)   |  (A)   |
//!   +--------+--------+             +--------+--------+
//! ```

use embedded_graphics::prelude::Point;

use crate::panel_grid::{GridDimensions, Panel, PanelGrid};
use crate::error::to_i64;
use crate::{Error, Result};

/// Where a logical pixel lands on the physical canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhysicalPixel {
    /// Physical column.
    pub x: usize,
    /// Physical row.
    pub y: usize,
    /// Parallel chain that drives this pixel.
    pub lane: usize,
}

/// Immutable coordinate transformer built from a validated [`PanelGrid`].
///
/// Mapping is a pure function of the grid, so one transformer can be shared by
/// any number of readers without locking.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridTransformer {
    grid: PanelGrid,
}

impl GridTransformer {
    /// Build the transformer for `grid`.
    #[must_use]
    pub const fn new(grid: PanelGrid) -> Self {
        Self { grid }
    }

    /// The grid this transformer maps.
    #[must_use]
    pub const fn grid(&self) -> &PanelGrid {
        &self.grid
    }

    const fn dimensions(&self) -> &GridDimensions {
        self.grid.dimensions()
    }

    /// Size `(width, height)` of the canvas producers draw on.
    #[must_use]
    pub const fn logical_size(&self) -> (usize, usize) {
        self.dimensions().logical_size()
    }

    /// Size `(width, height)` the physical canvas must have.
    #[must_use]
    pub const fn physical_size(&self) -> (usize, usize) {
        self.dimensions().physical_size()
    }

    /// Grid cell `(row, column)` and panel under a logical pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is outside the logical canvas.
    pub fn panel_at(&self, x: usize, y: usize) -> Result<((usize, usize), &Panel)> {
        let (width, height) = self.logical_size();
        let out_of_range = Error::OutOfRange {
            x: to_i64(x),
            y: to_i64(y),
            width,
            height,
        };
        if x >= width || y >= height {
            return Err(out_of_range);
        }
        let (panel_width, panel_height) = self.dimensions().panel_size();
        let (row, column) = (y / panel_height, x / panel_width);
        let panel = self.grid.panel(row, column).ok_or(out_of_range)?;
        Ok(((row, column), panel))
    }

    /// Top-left logical pixel `(x, y)` of a grid cell.
    #[must_use]
    pub const fn panel_origin(&self, row: usize, column: usize) -> (usize, usize) {
        let (panel_width, panel_height) = self.dimensions().panel_size();
        (column * panel_width, row * panel_height)
    }

    /// Map a logical pixel to its physical pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is outside the logical canvas.
    ///
    /// # Example
    ///
    /// ```rust
    /// use panel_grid::panel_grid::{GridDimensions, Panel, PanelGrid};
    /// use panel_grid::transform::PhysicalPixel;
    ///
    /// let dimensions = GridDimensions {
    ///     display_width: 64,
    ///     display_height: 32,
    ///     panel_width: 32,
    ///     panel_height: 32,
    ///     chain_length: 2,
    ///     parallel_count: 1,
    /// };
    /// let transformer =
    ///     PanelGrid::new(dimensions, [Panel::chained(1), Panel::chained(0)])?.into_transformer();
    ///
    /// assert_eq!(transformer.map(0, 0)?, PhysicalPixel { x: 32, y: 0, lane: 0 });
    /// assert_eq!(transformer.map(32, 0)?, PhysicalPixel { x: 0, y: 0, lane: 0 });
    /// assert!(transformer.map(64, 0).is_err());
    /// # Ok::<(), panel_grid::Error>(())
    /// ```
    #[inline]
    pub fn map(&self, x: usize, y: usize) -> Result<PhysicalPixel> {
        let (_, panel) = self.panel_at(x, y)?;
        let panel_size = self.dimensions().panel_size();
        let (panel_width, panel_height) = panel_size;
        let local = (x % panel_width, y % panel_height);
        let (rotated_x, rotated_y) = panel.rotation.apply(local, panel_size);
        Ok(PhysicalPixel {
            x: panel.order * panel_width + rotated_x,
            y: panel.parallel * panel_height + rotated_y,
            lane: panel.parallel,
        })
    }

    /// Map an `embedded-graphics` point, returning `None` outside the logical canvas.
    #[must_use]
    pub fn map_point(&self, point: Point) -> Option<Point> {
        let x = usize::try_from(point.x).ok()?;
        let y = usize::try_from(point.y).ok()?;
        let physical = self.map(x, y).ok()?;
        Some(Point::new(
            i32::try_from(physical.x).ok()?,
            i32::try_from(physical.y).ok()?,
        ))
    }
}

impl From<PanelGrid> for GridTransformer {
    fn from(grid: PanelGrid) -> Self {
        Self::new(grid)
    }
}
