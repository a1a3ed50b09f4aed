//! In-memory canvas, used as a stand-in for the panel driver and for previews.

use core::convert::Infallible;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use embedded_graphics::{pixelcolor::Rgb888, prelude::*};

use super::{Canvas, ReadCanvas};
use crate::color::{BLACK, RGB8, from_rgb888};
use crate::error::to_i64;
use crate::{Error, Result};

/// Fixed-size pixel buffer, `W` columns by `H` rows, indexed `(x, y)`.
///
/// Implements [`Canvas`] (rejecting writes outside the buffer) and
/// `embedded-graphics` [`DrawTarget`] (clipping them, as drawing onto a plain
/// buffer usually does).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Width in pixels.
    pub const WIDTH: usize = W;
    /// Height in pixels.
    pub const HEIGHT: usize = H;
    /// Size for `embedded-graphics`.
    pub const SIZE: Size = Size::new(W as u32, H as u32);

    /// All-black frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[BLACK; W]; H])
    }

    /// Frame filled with one color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([[color; W]; H])
    }

    /// Number of pixels that are not black.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0
            .iter()
            .flatten()
            .filter(|pixel| **pixel != BLACK)
            .count()
    }

    fn out_of_range(x: usize, y: usize) -> Error {
        Error::OutOfRange {
            x: to_i64(x),
            y: to_i64(y),
            width: W,
            height: H,
        }
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Canvas for Frame2d<W, H> {
    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    fn set_pixel(&mut self, x: usize, y: usize, color: RGB8) -> Result<()> {
        let pixel = self
            .0
            .get_mut(y)
            .and_then(|row| row.get_mut(x))
            .ok_or_else(|| Self::out_of_range(x, y))?;
        *pixel = color;
        Ok(())
    }

    fn fill(&mut self, color: RGB8) -> Result<()> {
        self.0 = [[color; W]; H];
        Ok(())
    }
}

impl<const W: usize, const H: usize> ReadCanvas for Frame2d<W, H> {
    fn pixel(&self, x: usize, y: usize) -> Result<RGB8> {
        self.0
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .ok_or_else(|| Self::out_of_range(x, y))
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Frame2d<W, H> {
    fn size(&self) -> Size {
        Self::SIZE
    }
}

impl<const W: usize, const H: usize> DrawTarget for Frame2d<W, H> {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> core::result::Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let (Ok(x_index), Ok(y_index)) = (usize::try_from(coord.x), usize::try_from(coord.y))
            {
                if let Some(pixel) = self.0.get_mut(y_index).and_then(|row| row.get_mut(x_index)) {
                    *pixel = from_rgb888(color);
                }
            }
        }
        Ok(())
    }
}
