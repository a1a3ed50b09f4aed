//! Test pattern for checking panel wiring.
//!
//! Each panel shows its grid position as `"column,row"` in its top-left corner,
//! optionally inside a one-pixel border. Drawn through a
//! [`TransformedCanvas`](crate::canvas::TransformedCanvas), a panel that shows
//! the wrong label, or a label upside down or sideways, has wrong `order`,
//! `parallel`, or `rotate` settings.
//!
//! Every function here draws onto any `embedded-graphics` [`DrawTarget`], so the
//! same pattern can also be drawn onto a plain logical [`Frame2d`](crate::canvas::Frame2d)
//! for comparison.

use core::fmt::Write;

use embedded_graphics::{
    Drawable,
    draw_target::{DrawTarget, DrawTargetExt},
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_5X8},
    pixelcolor::Rgb888,
    prelude::{Point, Primitive, RgbColor, Size},
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;
use itertools::iproduct;

use crate::Result;
use crate::logging::log_info;
use crate::panel_grid::PanelGrid;

// 5x8 glyphs with one blank column between characters.
const LABEL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: 1,
    ..FONT_5X8
};

// "15,15" is the longest label a grid can need.
const LABEL_CAPACITY: usize = 8;

/// Logical area covered by the panel at `(row, column)`.
#[must_use]
pub fn panel_area(grid: &PanelGrid, row: usize, column: usize) -> Rectangle {
    let (panel_width, panel_height) = grid.dimensions().panel_size();
    Rectangle::new(
        Point::new(
            to_i32(column.saturating_mul(panel_width)),
            to_i32(row.saturating_mul(panel_height)),
        ),
        Size::new(to_u32(panel_width), to_u32(panel_height)),
    )
}

/// Write `"column,row"` on every panel, starting one pixel right of its
/// top-left corner. Text that does not fit a panel is clipped to that panel.
///
/// # Errors
///
/// Propagates errors from `target`.
pub fn draw_panel_labels<D>(
    target: &mut D,
    grid: &PanelGrid,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = MonoTextStyle::new(&LABEL_FONT, color);
    for (row, column) in iproduct!(0..grid.rows(), 0..grid.columns()) {
        let area = panel_area(grid, row, column);
        let mut label: String<LABEL_CAPACITY> = String::new();
        // Rows and columns are at most two digits each.
        let _ = write!(label, "{column},{row}");
        let mut clipped = target.clipped(&area);
        let origin = area.top_left + Point::new(1, 0);
        Text::with_baseline(&label, origin, style, Baseline::Top).draw(&mut clipped)?;
    }
    log_info!("diagnostic labels drawn on {} panels", grid.panels().len());
    Ok(())
}

/// Draw a one-pixel border around every panel.
///
/// # Errors
///
/// Propagates errors from `target`.
pub fn draw_panel_outlines<D>(
    target: &mut D,
    grid: &PanelGrid,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = PrimitiveStyle::with_stroke(color, 1);
    for (row, column) in iproduct!(0..grid.rows(), 0..grid.columns()) {
        panel_area(grid, row, column).into_styled(style).draw(target)?;
    }
    Ok(())
}

/// Clear `target`, then draw gray panel outlines and white labels.
///
/// # Errors
///
/// Propagates errors from `target`.
pub fn draw_test_pattern<D>(target: &mut D, grid: &PanelGrid) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(Rgb888::BLACK)?;
    draw_panel_outlines(target, grid, Rgb888::new(64, 64, 64))?;
    draw_panel_labels(target, grid, Rgb888::WHITE)
}

fn to_i32(value: usize) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
