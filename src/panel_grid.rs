//! Validated description of a wall of LED panels.
//!
//! A [`PanelGrid`] says how big the logical display is, how big each panel is,
//! how the panels are chained, and, for every cell of the grid, which chain
//! position, rotation, and parallel chain that cell's panel has.
//!
//! Build one from raw settings with [`PanelGridSettings::load`] or directly
//! with [`PanelGrid::new`]. Both run the same checks; neither lets an
//! inconsistent grid through.
//!
//! # Example
//!
//! Two 32×32 panels side by side, wired right-to-left:
//!
//! ```rust
//! use panel_grid::panel_grid::{GridDimensions, Panel, PanelGrid};
//!
//! let dimensions = GridDimensions {
//!     display_width: 64,
//!     display_height: 32,
//!     panel_width: 32,
//!     panel_height: 32,
//!     chain_length: 2,
//!     parallel_count: 1,
//! };
//! let grid = PanelGrid::new(dimensions, [Panel::chained(1), Panel::chained(0)])?;
//! assert_eq!((grid.rows(), grid.columns()), (1, 2));
//! assert_eq!(dimensions.physical_size(), (64, 32));
//! # Ok::<(), panel_grid::Error>(())
//! ```

pub mod panel;
pub mod settings;

pub use panel::{Panel, Rotation};
pub use settings::{MAX_CROP_ORIGIN_VALUES, PanelGridSettings, PanelRowSettings, PanelSettings};

use heapless::Vec;

use crate::error::to_i64;
use crate::logging::log_info;
use crate::transform::GridTransformer;
use crate::{Error, Result};

/// Most panel rows, and most panel columns, a grid may have.
pub const MAX_GRID_DIMENSION: usize = 16;

/// Most panels a grid may have.
pub const MAX_PANELS: usize = MAX_GRID_DIMENSION * MAX_GRID_DIMENSION;

/// Sizes and chain counts of a panel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridDimensions {
    /// Logical canvas width in pixels.
    pub display_width: usize,
    /// Logical canvas height in pixels.
    pub display_height: usize,
    /// Width of one panel in pixels.
    pub panel_width: usize,
    /// Height of one panel in pixels.
    pub panel_height: usize,
    /// Panels wired in series on each chain.
    pub chain_length: usize,
    /// Chains driven side by side (1 to 3).
    pub parallel_count: usize,
}

impl GridDimensions {
    /// Size `(width, height)` of the canvas the hardware layer addresses:
    /// one band per parallel chain, each band one chain of panels wide.
    ///
    /// Grids only accept dimensions whose physical size fits `usize`; for
    /// unchecked dimensions the result saturates.
    #[must_use]
    pub const fn physical_size(&self) -> (usize, usize) {
        (
            self.panel_width.saturating_mul(self.chain_length),
            self.panel_height.saturating_mul(self.parallel_count),
        )
    }

    /// Size `(width, height)` of the logical canvas.
    #[must_use]
    pub const fn logical_size(&self) -> (usize, usize) {
        (self.display_width, self.display_height)
    }

    /// Size `(width, height)` of one panel.
    #[must_use]
    pub const fn panel_size(&self) -> (usize, usize) {
        (self.panel_width, self.panel_height)
    }

    /// True when panels are as wide as they are tall.
    #[must_use]
    pub const fn is_square_panel(&self) -> bool {
        self.panel_width == self.panel_height
    }

    // Dimension checks, in the order they are reported.
    fn validate(&self) -> Result<()> {
        check_positive("display_width", self.display_width)?;
        check_positive("display_height", self.display_height)?;
        check_positive("panel_width", self.panel_width)?;
        check_positive("panel_height", self.panel_height)?;
        check_positive("chain_length", self.chain_length)?;
        check_multiple(
            (self.display_width, self.display_height),
            (self.panel_width, self.panel_height),
        )?;
        check_parallel_count(to_i64(self.parallel_count))?;
        check_capacity(self)?;
        check_physical_size(self)
    }

    // Only meaningful after `validate`.
    const fn rows(&self) -> usize {
        self.display_height / self.panel_height
    }

    const fn columns(&self) -> usize {
        self.display_width / self.panel_width
    }
}

/// Top-left corner of the window a framebuffer mirror reads from a larger source image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CropOrigin {
    /// Left edge in source pixels.
    pub x: usize,
    /// Top edge in source pixels.
    pub y: usize,
}

impl CropOrigin {
    pub(crate) fn from_values(values: &[i32]) -> Result<Self> {
        let [x, y] = values else {
            return Err(Error::CropOrigin { len: values.len() });
        };
        let coordinate = |value: i32| {
            usize::try_from(value).map_err(|_| Error::InvalidValue {
                setting: "crop_origin",
                value: i64::from(value),
            })
        };
        Ok(Self {
            x: coordinate(*x)?,
            y: coordinate(*y)?,
        })
    }
}

/// Validated, immutable description of a panel grid.
///
/// Panels are stored row-major in one flat array, so finding the panel under a
/// pixel is one index computation.
///
/// Besides the per-setting checks, construction guarantees that every panel's
/// chain position fits its chain, every panel's parallel chain is driven, and no
/// two panels share a chain position. Together these mean every logical pixel
/// lands on its own pixel of the physical canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelGrid {
    dimensions: GridDimensions,
    rows: usize,
    columns: usize,
    panels: Vec<Panel, MAX_PANELS>,
    crop_origin: Option<CropOrigin>,
}

impl PanelGrid {
    /// Build a grid from dimensions and panels listed row-major.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found, checking dimensions, then each
    /// panel's rotation and parallel value, then the panel count, then chain positions.
    pub fn new(
        dimensions: GridDimensions,
        panels: impl IntoIterator<Item = Panel>,
    ) -> Result<Self> {
        dimensions.validate()?;
        let columns = dimensions.columns();
        let expected = dimensions.rows() * columns;
        let square = dimensions.is_square_panel();

        let mut stored = Vec::new();
        let mut found = 0_usize;
        for (index, panel) in panels.into_iter().enumerate() {
            panel.check(square, index / columns, index % columns)?;
            found += 1;
            if found <= expected {
                stored.push(panel).map_err(|_| Error::TooManyPanels {
                    capacity: MAX_PANELS,
                })?;
            }
        }
        if found != expected {
            return Err(Error::PanelCount { expected, found });
        }
        Self::assemble(dimensions, stored, None)
    }

    /// Attach the crop window a framebuffer mirror should read from.
    #[must_use]
    pub fn with_crop_origin(mut self, crop_origin: CropOrigin) -> Self {
        self.crop_origin = Some(crop_origin);
        self
    }

    // Final wiring checks shared by `new` and settings loading. Panel count is
    // already known to equal rows * columns.
    pub(crate) fn assemble(
        dimensions: GridDimensions,
        panels: Vec<Panel, MAX_PANELS>,
        crop_origin: Option<CropOrigin>,
    ) -> Result<Self> {
        let rows = dimensions.rows();
        let columns = dimensions.columns();
        for (index, panel) in panels.iter().enumerate() {
            let (row, column) = (index / columns, index % columns);
            if panel.order >= dimensions.chain_length {
                return Err(Error::OrderOutOfRange {
                    row,
                    column,
                    order: panel.order,
                    chain_length: dimensions.chain_length,
                });
            }
            if panel.parallel >= dimensions.parallel_count {
                return Err(Error::LaneOutOfRange {
                    row,
                    column,
                    parallel: panel.parallel,
                    parallel_count: dimensions.parallel_count,
                });
            }
            if panels
                .iter()
                .take(index)
                .any(|other| other.order == panel.order && other.parallel == panel.parallel)
            {
                return Err(Error::DuplicateSlot {
                    row,
                    column,
                    order: panel.order,
                    parallel: panel.parallel,
                });
            }
        }

        let (physical_width, physical_height) = dimensions.physical_size();
        log_info!(
            "panel grid: {}x{} panels, physical canvas {}x{}",
            rows,
            columns,
            physical_width,
            physical_height
        );
        Ok(Self {
            dimensions,
            rows,
            columns,
            panels,
            crop_origin,
        })
    }

    /// Sizes and chain counts.
    #[must_use]
    pub const fn dimensions(&self) -> &GridDimensions {
        &self.dimensions
    }

    /// Number of panel rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of panel columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// The panel at a grid cell, if the cell exists.
    #[must_use]
    pub fn panel(&self, row: usize, column: usize) -> Option<&Panel> {
        if column >= self.columns {
            return None;
        }
        self.panels.get(row * self.columns + column)
    }

    /// All panels, row-major.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    /// Crop window origin, if one was configured.
    #[must_use]
    pub const fn crop_origin(&self) -> Option<CropOrigin> {
        self.crop_origin
    }

    /// Turn this grid into the coordinate transformer for it.
    #[must_use]
    pub fn into_transformer(self) -> GridTransformer {
        GridTransformer::new(self)
    }
}

pub(crate) const fn check_positive(setting: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::InvalidValue { setting, value: 0 });
    }
    Ok(())
}

pub(crate) const fn check_multiple(
    display_size: (usize, usize),
    panel_size: (usize, usize),
) -> Result<()> {
    if display_size.0 % panel_size.0 != 0 {
        return Err(Error::NotMultiple {
            display_setting: "display_width",
            panel_setting: "panel_width",
        });
    }
    if display_size.1 % panel_size.1 != 0 {
        return Err(Error::NotMultiple {
            display_setting: "display_height",
            panel_setting: "panel_height",
        });
    }
    Ok(())
}

pub(crate) const fn check_parallel_count(parallel_count: i64) -> Result<usize> {
    if parallel_count < 1 || parallel_count > 3 {
        return Err(Error::ParallelCount { parallel_count });
    }
    Ok(parallel_count as usize)
}

pub(crate) const fn check_capacity(dimensions: &GridDimensions) -> Result<()> {
    if dimensions.rows() > MAX_GRID_DIMENSION || dimensions.columns() > MAX_GRID_DIMENSION {
        return Err(Error::TooManyPanels {
            capacity: MAX_PANELS,
        });
    }
    Ok(())
}

pub(crate) fn check_physical_size(dimensions: &GridDimensions) -> Result<()> {
    if dimensions.panel_width.checked_mul(dimensions.chain_length).is_none() {
        return Err(Error::InvalidValue {
            setting: "chain_length",
            value: to_i64(dimensions.chain_length),
        });
    }
    if dimensions.panel_height.checked_mul(dimensions.parallel_count).is_none() {
        return Err(Error::InvalidValue {
            setting: "parallel_count",
            value: to_i64(dimensions.parallel_count),
        });
    }
    Ok(())
}
