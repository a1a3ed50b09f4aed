//! Draw each panel's grid position on a 2x2 wall and save previews of the
//! logical and physical canvases.
//!
//! A panel whose label is wrong, sideways, or upside down in the logical
//! preview has wrong wiring settings.
//!
//! Run with `cargo run --bin demo_panel_labels -- [output-directory]`.

use std::error::Error;
use std::path::PathBuf;

use heapless::Vec;
use panel_grid::canvas::{Frame2d, TransformedCanvas};
use panel_grid::diagnostic::draw_test_pattern;
use panel_grid::panel_grid::{PanelGridSettings, PanelSettings};
use panel_grid::to_png::write_canvas_png;

type Physical = Frame2d<64, 64>;

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

    // Two chains of two 32x32 panels. The top row runs right to left, the
    // bottom row is on the second chain and mounted upside down.
    let top = Vec::from_slice(&[
        PanelSettings::with_order(1),
        PanelSettings::with_order(0).rotated(90),
    ])
    .map_err(|()| "top row does not fit")?;
    let bottom = Vec::from_slice(&[
        PanelSettings::with_order(0).rotated(180).on_parallel(1),
        PanelSettings::with_order(1).rotated(180).on_parallel(1),
    ])
    .map_err(|()| "bottom row does not fit")?;
    let settings = PanelGridSettings {
        display_width: Some(64),
        display_height: Some(64),
        panel_width: Some(32),
        panel_height: Some(32),
        chain_length: Some(2),
        parallel_count: Some(2),
        crop_origin: None,
        panels: Some(Vec::from_slice(&[top, bottom]).map_err(|()| "rows do not fit")?),
    };

    let grid = settings.load()?;
    let (physical_width, physical_height) = grid.dimensions().physical_size();
    println!(
        "{}x{} panels, physical canvas {physical_width}x{physical_height}",
        grid.rows(),
        grid.columns()
    );

    let mut logical = Physical::new();
    draw_test_pattern(&mut logical, &grid)?;

    let transformer = grid.clone().into_transformer();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical)?;
    draw_test_pattern(&mut view, &grid)?;

    let logical_path = output_directory.join("panel_labels_logical.png");
    let physical_path = output_directory.join("panel_labels_physical.png");
    write_canvas_png(&logical, &logical_path, 8, (32, 32))?;
    write_canvas_png(&physical, &physical_path, 8, (32, 32))?;
    println!("wrote {}", logical_path.display());
    println!("wrote {}", physical_path.display());
    Ok(())
}
