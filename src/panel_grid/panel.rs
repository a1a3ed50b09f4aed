//! One physical panel tile: where it sits on its chain and how it is mounted.

use crate::error::to_i64;
use crate::{Error, Result};

/// Mounting rotation of a panel, applied to every pixel that lands on it.
///
/// Square panels accept any quarter turn. Rectangular panels accept only
/// [`Deg0`](Self::Deg0) and [`Deg180`](Self::Deg180); turning them sideways
/// would change their footprint in the grid.
///
/// ```rust
/// use panel_grid::panel_grid::Rotation;
///
/// assert_eq!(Rotation::from_degrees(-90), Some(Rotation::Deg270));
/// assert_eq!(Rotation::from_degrees(450), Some(Rotation::Deg90));
/// assert_eq!(Rotation::from_degrees(45), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rotation {
    /// Mounted upright.
    #[default]
    Deg0,
    /// Mounted a quarter turn clockwise.
    Deg90,
    /// Mounted upside down.
    Deg180,
    /// Mounted a quarter turn counter-clockwise.
    Deg270,
}

impl Rotation {
    /// Parse a rotation in degrees. Any multiple of 90 is accepted, including
    /// negative values and values past a full turn.
    #[must_use]
    pub const fn from_degrees(degrees: i64) -> Option<Self> {
        if degrees % 90 != 0 {
            return None;
        }
        match degrees.rem_euclid(360) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Rotation in degrees, `0..360`.
    #[must_use]
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// True for 90 and 270 degrees, which swap a tile's width and height.
    #[must_use]
    pub const fn is_quarter_turn(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// The rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg0,
            Self::Deg90 => Self::Deg270,
            Self::Deg180 => Self::Deg180,
            Self::Deg270 => Self::Deg90,
        }
    }

    /// Size `(width, height)` of a `tile_size` tile after this rotation.
    #[must_use]
    pub const fn rotated_size(self, tile_size: (usize, usize)) -> (usize, usize) {
        let (width, height) = tile_size;
        if self.is_quarter_turn() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Rotate an offset `(x, y)` inside a tile of `tile_size` `(width, height)`.
    ///
    /// The result is an offset inside a tile of [`rotated_size`](Self::rotated_size).
    /// `local` must lie inside the tile.
    ///
    /// ```rust
    /// use panel_grid::panel_grid::Rotation;
    ///
    /// // Top-left of an upside-down 32x16 tile is its bottom-right corner.
    /// assert_eq!(Rotation::Deg180.apply((0, 0), (32, 16)), (31, 15));
    /// // A quarter turn moves the top-left corner to the top-right.
    /// assert_eq!(Rotation::Deg90.apply((0, 0), (32, 32)), (31, 0));
    /// ```
    #[must_use]
    #[inline]
    pub const fn apply(self, local: (usize, usize), tile_size: (usize, usize)) -> (usize, usize) {
        let (x, y) = local;
        let (width, height) = tile_size;
        match self {
            Self::Deg0 => (x, y),
            Self::Deg90 => (height - 1 - y, x),
            Self::Deg180 => (width - 1 - x, height - 1 - y),
            Self::Deg270 => (y, width - 1 - x),
        }
    }

    // Rotation legality for a `rotate` setting given in degrees.
    pub(crate) const fn from_setting(
        rotate: i64,
        square: bool,
        row: usize,
        column: usize,
    ) -> Result<Self> {
        if square && rotate % 90 != 0 {
            return Err(Error::RotationNotRightAngle {
                row,
                column,
                rotate,
            });
        }
        if !square && rotate % 180 != 0 {
            return Err(Error::RotationNotHalfTurn {
                row,
                column,
                rotate,
            });
        }
        match Self::from_degrees(rotate) {
            Some(rotation) => Ok(rotation),
            None => Err(Error::RotationNotRightAngle {
                row,
                column,
                rotate,
            }),
        }
    }
}

/// One panel of the grid, stored at its logical row and column.
///
/// `order` and `parallel` pick where the panel's pixels go on the physical
/// canvas; they are independent of where the panel sits in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Panel {
    /// Zero-based position along its chain.
    pub order: usize,
    /// How the panel is mounted.
    pub rotation: Rotation,
    /// Which parallel chain drives the panel (0, 1, or 2).
    pub parallel: usize,
}

impl Panel {
    /// Create a panel.
    #[must_use]
    pub const fn new(order: usize, rotation: Rotation, parallel: usize) -> Self {
        Self {
            order,
            rotation,
            parallel,
        }
    }

    /// Upright panel on the first chain at `order`.
    #[must_use]
    pub const fn chained(order: usize) -> Self {
        Self::new(order, Rotation::Deg0, 0)
    }

    // Rotation and chain checks that need only the panel and its tile shape.
    pub(crate) fn check(&self, square: bool, row: usize, column: usize) -> Result<()> {
        if !square && self.rotation.is_quarter_turn() {
            return Err(Error::RotationNotHalfTurn {
                row,
                column,
                rotate: i64::from(self.rotation.degrees()),
            });
        }
        if self.parallel > 2 {
            return Err(Error::ParallelOutOfRange {
                row,
                column,
                parallel: to_i64(self.parallel),
            });
        }
        Ok(())
    }
}
