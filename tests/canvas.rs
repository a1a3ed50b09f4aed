#![allow(missing_docs)]
//! Host-level tests for in-memory frames and the transformed canvas view.

use embedded_graphics::{
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use panel_grid::Error;
use panel_grid::canvas::{Canvas, Frame2d, ReadCanvas, TransformedCanvas};
use panel_grid::color::{BLACK, RGB8, colors, from_rgb888};
use panel_grid::panel_grid::{GridDimensions, Panel, PanelGrid, Rotation};
use panel_grid::transform::GridTransformer;

type Physical = Frame2d<64, 32>;

fn reversed_upside_down() -> GridTransformer {
    let dimensions = GridDimensions {
        display_width: 64,
        display_height: 32,
        panel_width: 32,
        panel_height: 32,
        chain_length: 2,
        parallel_count: 1,
    };
    PanelGrid::new(
        dimensions,
        [Panel::chained(1), Panel::new(0, Rotation::Deg180, 0)],
    )
    .expect("grid must be valid")
    .into_transformer()
}

#[test]
fn frame_rejects_writes_outside() {
    let mut frame = Frame2d::<4, 3>::new();
    assert_eq!(
        Canvas::set_pixel(&mut frame, 4, 0, colors::RED),
        Err(Error::OutOfRange {
            x: 4,
            y: 0,
            width: 4,
            height: 3
        })
    );
    assert!(frame.pixel(0, 3).is_err());
    assert_eq!(frame.lit_count(), 0);
}

#[test]
fn frame_index_is_x_then_y() {
    let mut frame = Frame2d::<4, 3>::new();
    Canvas::set_pixel(&mut frame, 3, 1, colors::BLUE).expect("pixel must be in range");
    assert_eq!(frame[(3, 1)], colors::BLUE);
    assert_eq!(frame.0[1][3], colors::BLUE);
    assert_eq!(frame.pixel(3, 1), Ok(colors::BLUE));
}

#[test]
#[should_panic(expected = "x_index must be within width")]
fn frame_index_panics_outside() {
    let frame = Frame2d::<4, 3>::new();
    let _ = frame[(4, 0)];
}

#[test]
fn frame_draw_target_clips() {
    let mut frame = Frame2d::<4, 3>::new();
    Rectangle::new(Point::new(-2, -2), Size::new(10, 10))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::GREEN))
        .draw(&mut frame)
        .expect("drawing on a frame cannot fail");
    assert_eq!(frame, Frame2d::filled(colors::LIME));
}

#[test]
fn view_reports_logical_size() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    assert_eq!((view.width(), view.height()), (64, 32));
    assert_eq!(OriginDimensions::size(&view), Size::new(64, 32));
}

#[test]
fn view_rejects_wrong_physical_size() {
    let transformer = reversed_upside_down();
    let mut physical = Frame2d::<32, 64>::new();
    let error = TransformedCanvas::new(&transformer, &mut physical)
        .err()
        .expect("sizes must not match");
    assert_eq!(
        error,
        Error::CanvasSizeMismatch {
            expected_width: 64,
            expected_height: 32,
            actual_width: 32,
            actual_height: 64
        }
    );
}

#[test]
fn view_writes_through_mapping() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    view.set_pixel(0, 0, colors::RED).expect("pixel must be in range");
    view.set_pixel(32, 0, colors::BLUE).expect("pixel must be in range");
    assert_eq!(view.pixel(32, 0), Ok(colors::BLUE));

    assert_eq!(physical[(32, 0)], colors::RED);
    // Upside-down panel: logical top-left is its physical bottom-right.
    assert_eq!(physical[(31, 31)], colors::BLUE);
    assert_eq!(physical.lit_count(), 2);
}

#[test]
fn view_rejects_out_of_range_writes_without_touching_physical() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    assert!(matches!(
        view.set_pixel(64, 0, colors::RED),
        Err(Error::OutOfRange { x: 64, y: 0, .. })
    ));
    assert!(view.set_pixel(0, 32, colors::RED).is_err());
    assert_eq!(physical, Physical::new());
}

#[test]
fn view_fill_and_clear_cover_every_pixel() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    view.fill(colors::ORANGE).expect("fill must succeed");
    assert_eq!(*view.physical(), Physical::filled(colors::ORANGE));
    Canvas::clear(&mut view).expect("clear must succeed");
    assert_eq!(physical.lit_count(), 0);
}

#[test]
fn view_draws_embedded_graphics_through_mapping() {
    let transformer = reversed_upside_down();

    let mut logical = Physical::new();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    for target_index in 0..2 {
        let rectangle = Rectangle::new(Point::new(28, 4), Size::new(8, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::CYAN));
        if target_index == 0 {
            rectangle.draw(&mut logical).expect("drawing on a frame cannot fail");
        } else {
            rectangle.draw(&mut view).expect("rectangle is inside the canvas");
        }
    }

    for y in 0..32 {
        for x in 0..64 {
            let mapped = transformer.map(x, y).expect("in-range pixel must map");
            assert_eq!(logical[(x, y)], physical[(mapped.x, mapped.y)]);
        }
    }
    assert_eq!(physical.lit_count(), 24);
}

#[test]
fn view_draw_target_rejects_pixels_outside() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    let result = Rectangle::new(Point::new(-1, 0), Size::new(2, 1))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
        .draw(&mut view);
    assert!(matches!(result, Err(Error::OutOfRange { x: -1, y: 0, .. })));
}

#[test]
fn view_clipped_draw_target_stays_inside() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    let area = view.bounding_box();
    Rectangle::new(Point::new(-4, -4), Size::new(100, 100))
        .into_styled(PrimitiveStyle::with_fill(Rgb888::WHITE))
        .draw(&mut view.clipped(&area))
        .expect("clipped drawing stays in range");
    assert_eq!(physical, Physical::filled(RGB8::new(255, 255, 255)));
    assert_ne!(physical[(0, 0)], BLACK);
}

#[test]
fn drawn_colors_keep_their_channels() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    Pixel(Point::new(1, 2), Rgb888::new(16, 32, 48))
        .draw(&mut view)
        .expect("pixel is inside the canvas");
    assert_eq!(view.pixel(1, 2), Ok(RGB8::new(16, 32, 48)));
    assert_eq!(physical[(33, 2)], from_rgb888(Rgb888::new(16, 32, 48)));

    let mut frame = Frame2d::<2, 2>::new();
    DrawTarget::clear(&mut frame, Rgb888::new(1, 2, 3)).expect("drawing on a frame cannot fail");
    assert_eq!(frame, Frame2d::filled(RGB8::new(1, 2, 3)));
}

#[test]
fn view_draw_target_clear_fills_through_mapping() {
    let transformer = reversed_upside_down();
    let mut physical = Physical::new();
    let mut view = TransformedCanvas::new(&transformer, &mut physical).expect("sizes must match");
    DrawTarget::clear(&mut view, Rgb888::new(200, 100, 50)).expect("clear stays in range");
    assert_eq!(physical, Physical::filled(RGB8::new(200, 100, 50)));
}
