//! Drive a wall of chained LED panels as one logical display.
//!
//! Big LED displays are built from small matrix panels wired in series along a
//! few parallel chains. The hardware layer sees each chain as one long strip of
//! panels; people want to draw on the wall as it hangs. This crate maps between
//! the two.
//!
//! - [`panel_grid`]: the grid description and its validation, built directly or
//!   loaded from raw settings.
//! - [`transform`]: the pure logical-to-physical pixel mapping.
//! - [`canvas`]: the [`Canvas`](canvas::Canvas) contract, an in-memory
//!   [`Frame2d`](canvas::Frame2d), and the
//!   [`TransformedCanvas`](canvas::TransformedCanvas) view that draws through a
//!   transformer.
//! - [`diagnostic`] and [`mirror`]: the two pixel producers, a wiring test
//!   pattern and a framebuffer mirror.
//!
//! # Glossary
//!
//! - **Chain:** panels wired in series on one data path. Every panel of a chain
//!   has a position, its `order`, counted from the driver.
//! - **Parallel chain (lane):** one of up to three chains driven side by side.
//! - **Logical canvas:** the display as a viewer sees it, `display_width` by
//!   `display_height` pixels.
//! - **Physical canvas:** what the hardware layer addresses, one band per
//!   parallel chain, each band `chain_length` panels wide.
#![cfg_attr(not(feature = "host"), no_std)]

mod error;
pub(crate) mod logging;

pub mod canvas;
pub mod color;
pub mod diagnostic;
pub mod mirror;
pub mod panel_grid;
#[cfg(feature = "host")]
pub mod to_png;
pub mod transform;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
