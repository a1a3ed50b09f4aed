//! Error type and [`Result`] alias shared by every module.

use derive_more::{Display, Error};

/// Result type used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

// Values reported as `i64`, saturating at `i64::MAX`.
pub(crate) fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Errors from building a panel grid or from writing pixels through it.
///
/// Configuration errors come from [`PanelGridSettings::load`](crate::panel_grid::PanelGridSettings::load)
/// and [`PanelGrid::new`](crate::panel_grid::PanelGrid::new). They name the offending
/// setting or panel so a program can print one line and stop before touching hardware.
///
/// Range errors come from per-pixel writes. A logical coordinate outside the canvas is
/// treated as a bug in the producer and is never clamped.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A required setting was not supplied.
    #[display("expected to find setting: {setting}")]
    MissingSetting {
        /// Name of the missing setting.
        setting: &'static str,
    },

    /// A setting that must be positive (or non-negative) had another value.
    #[display("{setting} has invalid value {value}")]
    InvalidValue {
        /// Name of the setting.
        setting: &'static str,
        /// Value supplied.
        value: i64,
    },

    /// A panel entry lacks a required setting.
    #[display("panel row {row}, column {column}: expected to find setting: {setting}")]
    MissingPanelSetting {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Name of the missing setting.
        setting: &'static str,
    },

    /// A panel entry has a negative value where a position is required.
    #[display("panel row {row}, column {column}: {setting} has invalid value {value}")]
    InvalidPanelValue {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Name of the setting.
        setting: &'static str,
        /// Value supplied.
        value: i64,
    },

    /// A display dimension is not a whole number of panels.
    #[display("{display_setting} must be a multiple of {panel_setting}")]
    NotMultiple {
        /// `display_width` or `display_height`.
        display_setting: &'static str,
        /// `panel_width` or `panel_height`.
        panel_setting: &'static str,
    },

    /// `parallel_count` is outside `1..=3`.
    #[display("parallel_count must be between 1 and 3, found {parallel_count}")]
    ParallelCount {
        /// Value supplied.
        parallel_count: i64,
    },

    /// A square panel's rotation is not a multiple of 90 degrees.
    #[display("panel row {row}, column {column}: rotation must be a multiple of 90 degrees, found {rotate}")]
    RotationNotRightAngle {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Rotation supplied, in degrees.
        rotate: i64,
    },

    /// A rectangular panel's rotation is not a multiple of 180 degrees.
    #[display("panel row {row}, column {column}: rectangular panels can only be rotated 180 degrees, found {rotate}")]
    RotationNotHalfTurn {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Rotation supplied, in degrees.
        rotate: i64,
    },

    /// A panel's `parallel` value is not 0, 1, or 2.
    #[display("panel row {row}, column {column}: parallel value must be 0, 1, or 2, found {parallel}")]
    ParallelOutOfRange {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Value supplied.
        parallel: i64,
    },

    /// The number of panels does not fill the grid.
    #[display("expected {expected} panels in configuration but found {found}")]
    PanelCount {
        /// Grid rows times grid columns.
        expected: usize,
        /// Panels supplied.
        found: usize,
    },

    /// A panel's wiring position is past the end of its chain.
    #[display("panel row {row}, column {column}: order {order} must be less than chain_length {chain_length}")]
    OrderOutOfRange {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Wiring position supplied.
        order: usize,
        /// Panels per chain.
        chain_length: usize,
    },

    /// A panel is assigned to a parallel chain that is not driven.
    #[display("panel row {row}, column {column}: parallel {parallel} must be less than parallel_count {parallel_count}")]
    LaneOutOfRange {
        /// Grid row of the panel.
        row: usize,
        /// Grid column of the panel.
        column: usize,
        /// Chain supplied.
        parallel: usize,
        /// Chains driven.
        parallel_count: usize,
    },

    /// Two panels claim the same position on the same chain.
    #[display("panel row {row}, column {column}: order {order} on parallel chain {parallel} is already used by another panel")]
    DuplicateSlot {
        /// Grid row of the second panel.
        row: usize,
        /// Grid column of the second panel.
        column: usize,
        /// Wiring position.
        order: usize,
        /// Chain.
        parallel: usize,
    },

    /// `crop_origin` is not a list of two non-negative values.
    #[display("crop_origin must be a list with two values, the X and Y coordinates of the crop box origin, found {len} values")]
    CropOrigin {
        /// Number of values supplied.
        len: usize,
    },

    /// The grid has more rows, columns, or panels than this crate stores.
    #[display("panel grid exceeds capacity of {capacity}")]
    TooManyPanels {
        /// Maximum supported.
        capacity: usize,
    },

    /// Stored settings could not be decoded.
    #[display("panel grid settings could not be decoded")]
    SettingsDecode,

    /// A frame source failed to capture a frame.
    #[display("frame capture failed")]
    CaptureFailed,

    /// A logical or physical pixel coordinate lies outside its canvas.
    #[display("pixel ({x}, {y}) is outside the {width}x{height} canvas")]
    OutOfRange {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Canvas width.
        width: usize,
        /// Canvas height.
        height: usize,
    },

    /// A physical canvas does not have the size the panel grid needs.
    #[display("physical canvas is {actual_width}x{actual_height} but the panel grid needs {expected_width}x{expected_height}")]
    CanvasSizeMismatch {
        /// Width the panel grid needs.
        expected_width: usize,
        /// Height the panel grid needs.
        expected_height: usize,
        /// Width of the supplied canvas.
        actual_width: usize,
        /// Height of the supplied canvas.
        actual_height: usize,
    },

    /// A capture window reaches past the edge of the captured frame.
    #[display("capture window {window_width}x{window_height} at ({x_offset}, {y_offset}) does not fit a {source_width}x{source_height} frame")]
    SourceTooSmall {
        /// Window left edge.
        x_offset: usize,
        /// Window top edge.
        y_offset: usize,
        /// Window width.
        window_width: usize,
        /// Window height.
        window_height: usize,
        /// Captured frame width.
        source_width: usize,
        /// Captured frame height.
        source_height: usize,
    },
}
