//! Pixel colors for canvases.
//!
//! Canvases store `smart_leds` [`RGB8`]. Producers drawing with
//! `embedded-graphics` use [`Rgb888`], which draw targets convert with
//! [`from_rgb888`].

use embedded_graphics::prelude::RgbColor;

/// Predefined RGB color constants from the `smart_leds` crate.
#[doc(inline)]
pub use smart_leds::colors;

#[doc(inline)]
pub use embedded_graphics::pixelcolor::Rgb888;

pub use smart_leds::RGB8;

/// All channels off.
pub const BLACK: RGB8 = RGB8::new(0, 0, 0);

/// The canvas color for an `embedded-graphics` color.
#[must_use]
#[inline]
pub fn from_rgb888(color: Rgb888) -> RGB8 {
    RGB8::new(color.r(), color.g(), color.b())
}
