//! Mirror a moving gradient onto a 64x32 wall through a crop window.
//!
//! The source stands in for a screen grabber: a 128x64 frame whose colors
//! shift on every capture. The mirror reads the 64x32 window at (16, 8),
//! about 40 frames a second, and stops after two seconds.
//!
//! Run with `cargo run --bin demo_mirror_gradient -- [output-directory]`.

use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use panel_grid::canvas::{Frame2d, TransformedCanvas};
use panel_grid::color::RGB8;
use panel_grid::mirror::{CancelFlag, FrameSource, Mirror};
use panel_grid::panel_grid::{CropOrigin, GridDimensions, Panel, PanelGrid, Rotation};
use panel_grid::to_png::write_canvas_png;
use panel_grid::{Error as GridError, Result as GridResult};

const FRAME_DELAY: Duration = Duration::from_millis(25);
const FRAME_LIMIT: usize = 80;

struct MovingGradient {
    phase: u8,
}

impl FrameSource for MovingGradient {
    fn width(&self) -> usize {
        128
    }

    fn height(&self) -> usize {
        64
    }

    fn capture(&mut self) -> GridResult<()> {
        self.phase = self.phase.wrapping_add(3);
        Ok(())
    }

    fn pixel(&self, x: usize, y: usize) -> GridResult<RGB8> {
        let (Ok(x_byte), Ok(y_byte)) = (u8::try_from(x), u8::try_from(y)) else {
            return Err(GridError::OutOfRange {
                x: x as i64,
                y: y as i64,
                width: self.width(),
                height: self.height(),
            });
        };
        Ok(RGB8::new(
            x_byte.wrapping_mul(2).wrapping_add(self.phase),
            y_byte.wrapping_mul(4),
            self.phase,
        ))
    }
}

fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn inner_main() -> Result<(), Box<dyn Error>> {
    let output_directory = std::env::args_os()
        .nth(1)
        .map_or_else(std::env::temp_dir, PathBuf::from);

    let dimensions = GridDimensions {
        display_width: 64,
        display_height: 32,
        panel_width: 32,
        panel_height: 32,
        chain_length: 2,
        parallel_count: 1,
    };
    let grid = PanelGrid::new(
        dimensions,
        [Panel::chained(1), Panel::new(0, Rotation::Deg180, 0)],
    )?
    .with_crop_origin(CropOrigin { x: 16, y: 8 });
    let mirror = Mirror::new(&grid);
    println!("capture request: {:?}", mirror.capture_request());

    let transformer = grid.into_transformer();
    let mut physical = Frame2d::<64, 32>::new();
    let mut source = MovingGradient { phase: 0 };

    {
        let mut view = TransformedCanvas::new(&transformer, &mut physical)?;
        mirror.copy_frame(&mut source, &mut view)?;
    }
    let preview_path = output_directory.join("mirror_gradient_physical.png");
    write_canvas_png(&physical, &preview_path, 8, (32, 32))?;
    println!("wrote {}", preview_path.display());

    let cancel = CancelFlag::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical)?;
    let mut paced = 0;
    let frames = mirror.run(&mut source, &mut view, &cancel, || {
        thread::sleep(FRAME_DELAY);
        paced += 1;
        if paced == FRAME_LIMIT {
            cancel.cancel();
        }
    })?;
    println!("mirrored {frames} frames");
    Ok(())
}
