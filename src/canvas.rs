//! Drawable surfaces, and the view that draws a logical canvas onto chained panels.
//!
//! [`Canvas`] is the contract between pixel producers and whatever shows the
//! pixels: the panel driver, an in-memory [`Frame2d`], or a [`TransformedCanvas`]
//! that forwards every write through a [`GridTransformer`].
//!
//! # Example
//!
//! ```rust
//! use panel_grid::canvas::{Canvas, Frame2d, TransformedCanvas};
//! use panel_grid::color::colors;
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
//! let transformer =
//!     PanelGrid::new(dimensions, [Panel::chained(1), Panel::chained(0)])?.into_transformer();
//!
//! let mut physical = Frame2d::<64, 32>::new();
//! let mut canvas = TransformedCanvas::new(&transformer, &mut physical)?;
//! canvas.set_pixel(0, 0, colors::RED)?;
//!
//! // The leftmost logical panel is second on the chain.
//! assert_eq!(physical[(32, 0)], colors::RED);
//! # Ok::<(), panel_grid::Error>(())
//! ```

mod frame;

pub use frame::Frame2d;

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::{DrawTarget, OriginDimensions, Pixel, Size},
};
use itertools::iproduct;

use crate::color::{BLACK, RGB8, from_rgb888};
use crate::logging::log_debug;
use crate::transform::GridTransformer;
use crate::{Error, Result};

/// A rectangular surface pixels can be written to.
pub trait Canvas {
    /// Width in pixels.
    fn width(&self) -> usize;

    /// Height in pixels.
    fn height(&self) -> usize;

    /// Write one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is outside the canvas.
    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) -> Result<()>;

    /// Set every pixel to `color`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying surface.
    fn fill(&mut self, color: RGB8) -> Result<()>;

    /// Set every pixel to black.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying surface.
    fn clear(&mut self) -> Result<()> {
        self.fill(BLACK)
    }
}

/// A canvas whose pixels can be read back.
pub trait ReadCanvas: Canvas {
    /// Read one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is outside the canvas.
    fn pixel(&self, x: usize, y: usize) -> Result<RGB8>;
}

/// Logical canvas drawn onto a physical canvas through a [`GridTransformer`].
///
/// Reports the logical display size. Every write is mapped on its own; nothing
/// is cached, so producers may write in any order and update part of a frame.
/// Writes outside the logical canvas fail with [`Error::OutOfRange`].
pub struct TransformedCanvas<'a, C: Canvas> {
    transformer: &'a GridTransformer,
    physical: &'a mut C,
}

impl<'a, C: Canvas> TransformedCanvas<'a, C> {
    /// Bind `transformer` to the physical canvas it draws on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CanvasSizeMismatch`] unless `physical` is exactly
    /// [`GridTransformer::physical_size`].
    pub fn new(transformer: &'a GridTransformer, physical: &'a mut C) -> Result<Self> {
        let (expected_width, expected_height) = transformer.physical_size();
        let (actual_width, actual_height) = (physical.width(), physical.height());
        if (actual_width, actual_height) != (expected_width, expected_height) {
            return Err(Error::CanvasSizeMismatch {
                expected_width,
                expected_height,
                actual_width,
                actual_height,
            });
        }
        log_debug!(
            "transformed canvas bound to {}x{} physical canvas",
            actual_width,
            actual_height
        );
        Ok(Self {
            transformer,
            physical,
        })
    }

    /// The transformer writes go through.
    #[must_use]
    pub const fn transformer(&self) -> &GridTransformer {
        self.transformer
    }

    /// The physical canvas writes land on.
    #[must_use]
    pub fn physical(&self) -> &C {
        &*self.physical
    }
}

impl<C: Canvas> Canvas for TransformedCanvas<'_, C> {
    fn width(&self) -> usize {
        self.transformer.logical_size().0
    }

    fn height(&self) -> usize {
        self.transformer.logical_size().1
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) -> Result<()> {
        let physical = self.transformer.map(x, y)?;
        self.physical.set_pixel(physical.x, physical.y, color)
    }

    fn fill(&mut self, color: RGB8) -> Result<()> {
        let (width, height) = self.transformer.logical_size();
        for (y, x) in iproduct!(0..height, 0..width) {
            self.set_pixel(x, y, color)?;
        }
        Ok(())
    }
}

impl<C: ReadCanvas> ReadCanvas for TransformedCanvas<'_, C> {
    fn pixel(&self, x: usize, y: usize) -> Result<RGB8> {
        let physical = self.transformer.map(x, y)?;
        self.physical.pixel(physical.x, physical.y)
    }
}

impl<C: Canvas> OriginDimensions for TransformedCanvas<'_, C> {
    fn size(&self) -> Size {
        let (width, height) = self.transformer.logical_size();
        Size::new(
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
        )
    }
}

impl<C: Canvas> DrawTarget for TransformedCanvas<'_, C> {
    type Color = Rgb888;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<()>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.transformer.logical_size();
        for Pixel(coord, color) in pixels {
            let out_of_range = Error::OutOfRange {
                x: i64::from(coord.x),
                y: i64::from(coord.y),
                width,
                height,
            };
            let x = usize::try_from(coord.x).map_err(|_| out_of_range)?;
            let y = usize::try_from(coord.y).map_err(|_| out_of_range)?;
            self.set_pixel(x, y, from_rgb888(color))?;
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<()> {
        Canvas::fill(self, from_rgb888(color))
    }
}
