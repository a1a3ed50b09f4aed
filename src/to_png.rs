//! PNG previews of a canvas, for looking at a frame without the hardware.
#![cfg(feature = "host")]

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use png::{BitDepth, ColorType, Encoder};

use crate::canvas::ReadCanvas;
use crate::color::RGB8;

const SEAM_COLOR: RGB8 = RGB8::new(48, 48, 48);

// Below this cell size a dot would be a single blurry pixel, so cells are filled.
const MIN_DOT_CELL: u32 = 4;

/// Render `canvas` as a PNG of round LED dots, `cell_size` image pixels per LED.
///
/// Panel seams are drawn as one-pixel gray lines every `tile.0` LEDs across
/// and every `tile.1` LEDs down. Pass the panel size to see panel boundaries,
/// or the canvas size to draw none.
///
/// # Errors
///
/// Returns an error if a pixel cannot be read or the file cannot be written.
///
/// # Panics
///
/// Panics if `cell_size` or either tile dimension is zero.
pub fn write_canvas_png<C: ReadCanvas + ?Sized>(
    canvas: &C,
    output_path: impl AsRef<Path>,
    cell_size: u32,
    tile: (usize, usize),
) -> Result<(), Box<dyn Error>> {
    assert!(cell_size > 0, "cell_size must be positive");
    assert!(tile.0 > 0 && tile.1 > 0, "tile must be non-empty");
    let output_path = output_path.as_ref();
    let (width, height, bytes) = preview_pixels(canvas, cell_size, tile)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&bytes)?;
    writer.finish()?;
    Ok(())
}

fn preview_pixels<C: ReadCanvas + ?Sized>(
    canvas: &C,
    cell_size: u32,
    (tile_width, tile_height): (usize, usize),
) -> Result<(u32, u32, Vec<u8>), Box<dyn Error>> {
    let columns = u32::try_from(canvas.width())?;
    let rows = u32::try_from(canvas.height())?;
    let width = columns * cell_size;
    let height = rows * cell_size;
    let mut bytes = vec![0_u8; (width as usize) * (height as usize) * 3];

    let mut put = |x: u32, y: u32, color: RGB8| {
        let index = ((y as usize) * (width as usize) + (x as usize)) * 3;
        bytes[index..index + 3].copy_from_slice(&[color.r, color.g, color.b]);
    };

    for y_index in 0..canvas.height() {
        for x_index in 0..canvas.width() {
            let color = canvas.pixel(x_index, y_index)?;
            let origin_x = u32::try_from(x_index)? * cell_size;
            let origin_y = u32::try_from(y_index)? * cell_size;
            for local_y in 0..cell_size {
                for local_x in 0..cell_size {
                    if in_dot(local_x, local_y, cell_size) {
                        put(origin_x + local_x, origin_y + local_y, color);
                    }
                }
            }
            // Seams sit on the first image row/column of a panel's first LED.
            if x_index > 0 && x_index % tile_width == 0 {
                for local_y in 0..cell_size {
                    put(origin_x, origin_y + local_y, SEAM_COLOR);
                }
            }
            if y_index > 0 && y_index % tile_height == 0 {
                for local_x in 0..cell_size {
                    put(origin_x + local_x, origin_y, SEAM_COLOR);
                }
            }
        }
    }
    Ok((width, height, bytes))
}

fn in_dot(local_x: u32, local_y: u32, cell_size: u32) -> bool {
    if cell_size < MIN_DOT_CELL {
        return true;
    }
    let center = (cell_size as f32 - 1.0) / 2.0;
    let radius = cell_size as f32 / 2.0 - (cell_size / 8).max(1) as f32;
    let delta_x = local_x as f32 - center;
    let delta_y = local_y as f32 - center;
    delta_x * delta_x + delta_y * delta_y <= radius * radius
}
