//! Raw panel grid settings and their validation into a [`PanelGrid`].
//!
//! Settings arrive as whatever a configuration file held: every value optional,
//! every number signed. [`PanelGridSettings::load`] checks them in a fixed order
//! and reports the first problem with the setting or panel it concerns.
//!
//! The text format of a configuration file is up to the caller; anything `serde`
//! can deserialize works. [`PanelGridSettings::from_postcard`] reads settings
//! stored as a `postcard` blob, as a microcontroller would keep them in flash.
//!
//! ```rust
//! use panel_grid::panel_grid::{PanelGridSettings, PanelSettings};
//!
//! let mut row = heapless::Vec::new();
//! row.push(PanelSettings::with_order(1)).unwrap();
//! row.push(PanelSettings::with_order(0)).unwrap();
//! let mut panels = heapless::Vec::new();
//! panels.push(row).unwrap();
//!
//! let settings = PanelGridSettings {
//!     display_width: Some(64),
//!     display_height: Some(32),
//!     panel_width: Some(32),
//!     panel_height: Some(32),
//!     chain_length: Some(2),
//!     parallel_count: Some(1),
//!     crop_origin: None,
//!     panels: Some(panels),
//! };
//! let grid = settings.load()?;
//! assert_eq!(grid.columns(), 2);
//! # Ok::<(), panel_grid::Error>(())
//! ```

use heapless::Vec;
use serde::{Deserialize, Serialize};

use super::{
    CropOrigin, GridDimensions, MAX_GRID_DIMENSION, MAX_PANELS, Panel, PanelGrid, Rotation,
    check_capacity, check_multiple, check_parallel_count, check_physical_size,
};
use crate::{Error, Result};

/// Most values accepted in a `crop_origin` list. Only two are valid; extra room
/// lets a wrong count be reported instead of failing to decode.
pub const MAX_CROP_ORIGIN_VALUES: usize = 4;

/// One row of panel settings, left to right.
pub type PanelRowSettings = Vec<PanelSettings, MAX_GRID_DIMENSION>;

/// Raw settings for one panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    /// Position along the chain. Required.
    pub order: Option<i32>,
    /// Rotation in degrees. Defaults to 0.
    pub rotate: Option<i32>,
    /// Parallel chain. Defaults to 0.
    pub parallel: Option<i32>,
}

impl PanelSettings {
    /// Settings for an upright panel on the first chain.
    #[must_use]
    pub const fn with_order(order: i32) -> Self {
        Self {
            order: Some(order),
            rotate: None,
            parallel: None,
        }
    }

    /// Same settings with a rotation.
    #[must_use]
    pub const fn rotated(mut self, rotate: i32) -> Self {
        self.rotate = Some(rotate);
        self
    }

    /// Same settings on another parallel chain.
    #[must_use]
    pub const fn on_parallel(mut self, parallel: i32) -> Self {
        self.parallel = Some(parallel);
        self
    }

    fn to_panel(self, square: bool, row: usize, column: usize) -> Result<Panel> {
        let order = self.order.ok_or(Error::MissingPanelSetting {
            row,
            column,
            setting: "order",
        })?;
        let rotation =
            Rotation::from_setting(i64::from(self.rotate.unwrap_or(0)), square, row, column)?;
        let parallel_setting = self.parallel.unwrap_or(0);
        let parallel = match usize::try_from(parallel_setting) {
            Ok(parallel) if parallel <= 2 => parallel,
            _ => {
                return Err(Error::ParallelOutOfRange {
                    row,
                    column,
                    parallel: i64::from(parallel_setting),
                });
            }
        };
        let order = usize::try_from(order).map_err(|_| Error::InvalidPanelValue {
            row,
            column,
            setting: "order",
            value: i64::from(order),
        })?;
        Ok(Panel::new(order, rotation, parallel))
    }
}

/// Raw settings for a whole panel grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelGridSettings {
    /// Logical canvas width in pixels.
    pub display_width: Option<i32>,
    /// Logical canvas height in pixels.
    pub display_height: Option<i32>,
    /// Panel width in pixels.
    pub panel_width: Option<i32>,
    /// Panel height in pixels.
    pub panel_height: Option<i32>,
    /// Panels per chain.
    pub chain_length: Option<i32>,
    /// Parallel chains, 1 to 3.
    pub parallel_count: Option<i32>,
    /// Optional `[x, y]` origin of the mirrored window in the source image.
    pub crop_origin: Option<Vec<i32, MAX_CROP_ORIGIN_VALUES>>,
    /// Panels, one list per grid row, top to bottom.
    pub panels: Option<Vec<PanelRowSettings, MAX_GRID_DIMENSION>>,
}

impl PanelGridSettings {
    /// Decode settings stored with `postcard`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingsDecode`] if the bytes are not valid settings.
    pub fn from_postcard(bytes: &[u8]) -> Result<Self> {
        postcard::from_bytes(bytes).map_err(|_| Error::SettingsDecode)
    }

    /// Validate these settings and build the panel grid.
    ///
    /// Checks run in this order, stopping at the first failure:
    /// 1. every required setting is present and positive;
    /// 2. `crop_origin`, if present, is two non-negative values;
    /// 3. display width and height are multiples of the panel width and height;
    /// 4. `parallel_count` is 1 to 3;
    /// 5. for each panel, row by row: `order` is present, rotation is legal for
    ///    the panel shape, `parallel` is 0 to 2;
    /// 6. the panel count equals grid rows times grid columns;
    /// 7. every panel fits its chain and no two panels share a chain position.
    ///
    /// # Errors
    ///
    /// Returns the configuration error for the first failed check.
    pub fn load(&self) -> Result<PanelGrid> {
        let display_width = positive(self.display_width, "display_width")?;
        let display_height = positive(self.display_height, "display_height")?;
        let panel_width = positive(self.panel_width, "panel_width")?;
        let panel_height = positive(self.panel_height, "panel_height")?;
        let chain_length = positive(self.chain_length, "chain_length")?;
        let parallel_count = self.parallel_count.ok_or(Error::MissingSetting {
            setting: "parallel_count",
        })?;
        let crop_origin = self
            .crop_origin
            .as_ref()
            .map(|values| CropOrigin::from_values(values))
            .transpose()?;

        check_multiple((display_width, display_height), (panel_width, panel_height))?;
        let dimensions = GridDimensions {
            display_width,
            display_height,
            panel_width,
            panel_height,
            chain_length,
            parallel_count: check_parallel_count(i64::from(parallel_count))?,
        };
        check_capacity(&dimensions)?;
        check_physical_size(&dimensions)?;
        let panel_rows = self.panels.as_ref().ok_or(Error::MissingSetting {
            setting: "panels",
        })?;

        let square = dimensions.is_square_panel();
        let mut panels: Vec<Panel, MAX_PANELS> = Vec::new();
        let mut found = 0_usize;
        for (row, row_settings) in panel_rows.iter().enumerate() {
            for (column, panel_settings) in row_settings.iter().enumerate() {
                let panel = panel_settings.to_panel(square, row, column)?;
                found += 1;
                panels.push(panel).map_err(|_| Error::TooManyPanels {
                    capacity: MAX_PANELS,
                })?;
            }
        }
        let expected = dimensions.rows() * dimensions.columns();
        if found != expected {
            return Err(Error::PanelCount { expected, found });
        }
        PanelGrid::assemble(dimensions, panels, crop_origin)
    }
}

fn positive(value: Option<i32>, setting: &'static str) -> Result<usize> {
    let value = value.ok_or(Error::MissingSetting { setting })?;
    match usize::try_from(value) {
        Ok(positive) if positive > 0 => Ok(positive),
        _ => Err(Error::InvalidValue {
            setting,
            value: i64::from(value),
        }),
    }
}
