//! Copy a captured screen onto the panel wall, frame after frame.
//!
//! Without a crop origin the whole screen is captured scaled down to the
//! display size and copied pixel for pixel. With a crop origin the screen is
//! captured at native resolution and a display-sized window starting at the
//! origin is copied.
//!
//! Capturing is the job of a [`FrameSource`]; this module only decides what to
//! ask it for and where each captured pixel goes.

use itertools::iproduct;
use portable_atomic::{AtomicBool, Ordering};

use crate::canvas::Canvas;
use crate::color::RGB8;
use crate::logging::{log_debug, log_info};
use crate::panel_grid::PanelGrid;
use crate::{Error, Result};

/// How a [`FrameSource`] should capture the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureRequest {
    /// Capture the whole screen scaled to `width` by `height`.
    Scaled {
        /// Captured frame width, the display width.
        width: usize,
        /// Captured frame height, the display height.
        height: usize,
    },
    /// Capture at native resolution and read a window starting at the offset.
    FullResolution {
        /// Window left edge.
        x_offset: usize,
        /// Window top edge.
        y_offset: usize,
    },
}

/// Something that captures frames, typically a screen grabber.
pub trait FrameSource {
    /// Width of the last captured frame.
    fn width(&self) -> usize;

    /// Height of the last captured frame.
    fn height(&self) -> usize;

    /// Capture a new frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CaptureFailed`] if no frame could be captured.
    fn capture(&mut self) -> Result<()>;

    /// A pixel of the last captured frame.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `(x, y)` is outside the frame.
    fn pixel(&self, x: usize, y: usize) -> Result<RGB8>;
}

/// Set from anywhere, such as an interrupt or signal handler, to stop [`Mirror::run`].
#[derive(Debug, Default)]
pub struct CancelFlag(AtomicBool);

impl CancelFlag {
    /// A flag that is not yet set.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// Ask the mirror loop to stop after its current frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Copies captured frames onto a canvas of the display's logical size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mirror {
    width: usize,
    height: usize,
    request: CaptureRequest,
}

impl Mirror {
    /// Mirror for `grid`, cropping if the grid has a crop origin.
    #[must_use]
    pub fn new(grid: &PanelGrid) -> Self {
        let (width, height) = grid.dimensions().logical_size();
        let request = match grid.crop_origin() {
            Some(origin) => CaptureRequest::FullResolution {
                x_offset: origin.x,
                y_offset: origin.y,
            },
            None => CaptureRequest::Scaled { width, height },
        };
        Self {
            width,
            height,
            request,
        }
    }

    /// What to ask the frame source for.
    #[must_use]
    pub const fn capture_request(&self) -> CaptureRequest {
        self.request
    }

    const fn offset(&self) -> (usize, usize) {
        match self.request {
            CaptureRequest::Scaled { .. } => (0, 0),
            CaptureRequest::FullResolution { x_offset, y_offset } => (x_offset, y_offset),
        }
    }

    /// Capture one frame and copy the display window of it onto `canvas`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SourceTooSmall`] if the captured frame does not cover
    /// the window, or any error from `source` or `canvas`.
    pub fn copy_frame<S, C>(&self, source: &mut S, canvas: &mut C) -> Result<()>
    where
        S: FrameSource + ?Sized,
        C: Canvas + ?Sized,
    {
        source.capture()?;
        let (x_offset, y_offset) = self.offset();
        let (source_width, source_height) = (source.width(), source.height());
        if x_offset.saturating_add(self.width) > source_width
            || y_offset.saturating_add(self.height) > source_height
        {
            return Err(Error::SourceTooSmall {
                x_offset,
                y_offset,
                window_width: self.width,
                window_height: self.height,
                source_width,
                source_height,
            });
        }
        for (y, x) in iproduct!(0..self.height, 0..self.width) {
            let color = source.pixel(x + x_offset, y + y_offset)?;
            canvas.set_pixel(x, y, color)?;
        }
        Ok(())
    }

    /// Copy frames until `cancel` is set, calling `between` after each frame.
    ///
    /// The flag is checked before every frame, so a frame in progress always
    /// finishes. The canvas is cleared before returning, also on error.
    /// Returns the number of frames copied.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`copy_frame`](Self::copy_frame), or from
    /// clearing the canvas.
    pub fn run<S, C>(
        &self,
        source: &mut S,
        canvas: &mut C,
        cancel: &CancelFlag,
        mut between: impl FnMut(),
    ) -> Result<usize>
    where
        S: FrameSource + ?Sized,
        C: Canvas + ?Sized,
    {
        log_info!("mirroring {}x{} display", self.width, self.height);
        let mut frames = 0_usize;
        let copied = loop {
            if cancel.is_cancelled() {
                break Ok(frames);
            }
            if let Err(error) = self.copy_frame(source, canvas) {
                break Err(error);
            }
            frames += 1;
            between();
        };
        log_debug!("mirror stopped after {} frames", frames);
        let cleared = canvas.clear();
        let frames = copied?;
        cleared?;
        Ok(frames)
    }
}
