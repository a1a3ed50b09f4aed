#![allow(missing_docs)]
//! Host-level tests for loading panel grids from raw settings.

use heapless::Vec;
use panel_grid::Error;
use panel_grid::panel_grid::{
    CropOrigin, Panel, PanelGridSettings, PanelRowSettings, PanelSettings, Rotation,
};

fn row(panels: &[PanelSettings]) -> PanelRowSettings {
    Vec::from_slice(panels).expect("row must fit")
}

fn settings(
    display: (i32, i32),
    panel: (i32, i32),
    chain_length: i32,
    parallel_count: i32,
    rows: &[PanelRowSettings],
) -> PanelGridSettings {
    PanelGridSettings {
        display_width: Some(display.0),
        display_height: Some(display.1),
        panel_width: Some(panel.0),
        panel_height: Some(panel.1),
        chain_length: Some(chain_length),
        parallel_count: Some(parallel_count),
        crop_origin: None,
        panels: Some(Vec::from_slice(rows).expect("rows must fit")),
    }
}

fn two_by_two() -> PanelGridSettings {
    settings(
        (64, 64),
        (32, 32),
        4,
        1,
        &[
            row(&[PanelSettings::with_order(3), PanelSettings::with_order(2)]),
            row(&[PanelSettings::with_order(0), PanelSettings::with_order(1)]),
        ],
    )
}

#[test]
fn loads_valid_settings() {
    let grid = two_by_two().load().expect("settings must load");
    assert_eq!((grid.rows(), grid.columns()), (2, 2));
    assert_eq!(grid.panel(0, 0), Some(&Panel::chained(3)));
    assert_eq!(grid.panel(1, 1), Some(&Panel::chained(1)));
    assert_eq!(grid.dimensions().physical_size(), (128, 32));
}

#[test]
fn rotate_and_parallel_default_to_zero() {
    let grid = settings(
        (32, 32),
        (32, 32),
        1,
        1,
        &[row(&[PanelSettings::with_order(0)])],
    )
    .load()
    .expect("settings must load");
    assert_eq!(grid.panels(), &[Panel::new(0, Rotation::Deg0, 0)]);
}

#[test]
fn rotate_and_parallel_are_read() {
    let grid = settings(
        (32, 64),
        (32, 32),
        1,
        2,
        &[
            row(&[PanelSettings::with_order(0).rotated(270)]),
            row(&[PanelSettings::with_order(0).rotated(-90).on_parallel(1)]),
        ],
    )
    .load()
    .expect("settings must load");
    assert_eq!(grid.panel(0, 0), Some(&Panel::new(0, Rotation::Deg270, 0)));
    assert_eq!(grid.panel(1, 0), Some(&Panel::new(0, Rotation::Deg270, 1)));
}

#[test]
fn missing_setting_is_named() {
    let mut incomplete = two_by_two();
    incomplete.chain_length = None;
    let error = incomplete.load().unwrap_err();
    assert_eq!(error, Error::MissingSetting { setting: "chain_length" });
    assert_eq!(error.to_string(), "expected to find setting: chain_length");

    let mut incomplete = two_by_two();
    incomplete.panels = None;
    assert_eq!(
        incomplete.load().unwrap_err(),
        Error::MissingSetting { setting: "panels" }
    );
}

#[test]
fn non_positive_setting_is_rejected() {
    let mut invalid = two_by_two();
    invalid.display_height = Some(-64);
    assert_eq!(
        invalid.load().unwrap_err(),
        Error::InvalidValue {
            setting: "display_height",
            value: -64
        }
    );
}

#[test]
fn width_not_multiple_of_panel_is_rejected() {
    let error = settings((100, 30), (30, 30), 3, 1, &[]).load().unwrap_err();
    assert_eq!(error.to_string(), "display_width must be a multiple of panel_width");
}

#[test]
fn parallel_count_of_four_is_rejected() {
    let mut invalid = two_by_two();
    invalid.parallel_count = Some(4);
    let error = invalid.load().unwrap_err();
    assert_eq!(error, Error::ParallelCount { parallel_count: 4 });
    assert_eq!(
        error.to_string(),
        "parallel_count must be between 1 and 3, found 4"
    );
}

#[test]
fn three_panels_for_four_cells_is_rejected() {
    let error = settings(
        (64, 64),
        (32, 32),
        4,
        1,
        &[
            row(&[PanelSettings::with_order(0), PanelSettings::with_order(1)]),
            row(&[PanelSettings::with_order(2)]),
        ],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error.to_string(),
        "expected 4 panels in configuration but found 3"
    );
}

#[test]
fn square_panel_at_45_degrees_is_rejected() {
    let error = settings(
        (32, 32),
        (32, 32),
        1,
        1,
        &[row(&[PanelSettings::with_order(0).rotated(45)])],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error,
        Error::RotationNotRightAngle {
            row: 0,
            column: 0,
            rotate: 45
        }
    );
}

#[test]
fn rectangular_panel_at_90_degrees_is_rejected() {
    let error = settings(
        (128, 32),
        (64, 32),
        2,
        1,
        &[row(&[
            PanelSettings::with_order(0),
            PanelSettings::with_order(1).rotated(90),
        ])],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error,
        Error::RotationNotHalfTurn {
            row: 0,
            column: 1,
            rotate: 90
        }
    );
    assert!(error.to_string().starts_with("panel row 0, column 1:"));
}

#[test]
fn panel_without_order_is_rejected() {
    let error = settings(
        (64, 32),
        (32, 32),
        2,
        1,
        &[row(&[PanelSettings::with_order(0), PanelSettings::default()])],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error,
        Error::MissingPanelSetting {
            row: 0,
            column: 1,
            setting: "order"
        }
    );
}

#[test]
fn negative_order_and_parallel_are_rejected() {
    let error = settings(
        (32, 32),
        (32, 32),
        1,
        1,
        &[row(&[PanelSettings::with_order(-1)])],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error,
        Error::InvalidPanelValue {
            row: 0,
            column: 0,
            setting: "order",
            value: -1
        }
    );

    let error = settings(
        (32, 32),
        (32, 32),
        1,
        1,
        &[row(&[PanelSettings::with_order(0).on_parallel(-1)])],
    )
    .load()
    .unwrap_err();
    assert_eq!(
        error,
        Error::ParallelOutOfRange {
            row: 0,
            column: 0,
            parallel: -1
        }
    );
}

#[test]
fn crop_origin_is_loaded() {
    let mut cropped = two_by_two();
    cropped.crop_origin = Some(Vec::from_slice(&[100, 50]).expect("origin must fit"));
    let grid = cropped.load().expect("settings must load");
    assert_eq!(grid.crop_origin(), Some(CropOrigin { x: 100, y: 50 }));
}

#[test]
fn crop_origin_needs_two_values() {
    let mut cropped = two_by_two();
    cropped.crop_origin = Some(Vec::from_slice(&[100, 50, 25]).expect("origin must fit"));
    let error = cropped.load().unwrap_err();
    assert_eq!(error, Error::CropOrigin { len: 3 });
    assert!(error.to_string().starts_with("crop_origin must be a list with two values"));

    cropped.crop_origin = Some(Vec::from_slice(&[-1, 0]).expect("origin must fit"));
    assert_eq!(
        cropped.load().unwrap_err(),
        Error::InvalidValue {
            setting: "crop_origin",
            value: -1
        }
    );
}

#[test]
fn settings_survive_postcard_storage() {
    let mut stored = two_by_two();
    stored.crop_origin = Some(Vec::from_slice(&[8, 4]).expect("origin must fit"));
    let mut buffer = [0_u8; 128];
    let bytes = postcard::to_slice(&stored, &mut buffer).expect("settings must encode");

    let loaded = PanelGridSettings::from_postcard(bytes).expect("settings must decode");
    assert_eq!(loaded, stored);
    assert_eq!(
        loaded.load().expect("settings must load").crop_origin(),
        Some(CropOrigin { x: 8, y: 4 })
    );
}

#[test]
fn truncated_postcard_is_rejected() {
    let mut buffer = [0_u8; 128];
    let bytes = postcard::to_slice(&two_by_two(), &mut buffer).expect("settings must encode");
    let truncated = &bytes[..bytes.len() / 2];
    assert_eq!(
        PanelGridSettings::from_postcard(truncated),
        Err(Error::SettingsDecode)
    );
}
