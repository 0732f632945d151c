//! buildstats
//!
//! Ranked, color-coded bar charts of per-chroot build counts for package-build dashboards.
//! Pairs with the `buildstats` CLI and the `buildstats-gui` viewer.
//!
//! ### Features
//! - Classify chroot labels into distribution families with an ordered, first-match palette
//! - Rank a dataset (stable, descending) and cut it to the top N
//! - Build a typed bar chart configuration and render it through a charting backend
//!   (SVG files via Plotters, or an in-memory backend for GUIs)
//! - A toggle controller that swaps between the top-N and the full chart, keeping exactly
//!   one chart alive per container
//!
//! ### Example
//! ```no_run
//! use buildstats::control::Button;
//! use buildstats::controller::{MountOptions, ToggleController};
//! use buildstats::viz::{BarChartRenderer, svg::SvgBackend};
//!
//! let data = buildstats::storage::load_dataset("chroots.json")?;
//! let mut chart = ToggleController::mount(
//!     SvgBackend::new("charts"),
//!     BarChartRenderer::default(),
//!     data,
//!     "chroots",
//!     Some(Button::default()),
//!     MountOptions::default(),
//! )?;
//! chart.activate()?; // expand to the full chart
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod control;
pub mod controller;
pub mod error;
pub mod models;
pub mod ranking;
pub mod storage;
pub mod style;
pub mod viz;

pub use controller::{MountOptions, ToggleController, ToggleMode};
pub use error::{RenderError, RenderResult};
pub use models::DataPoint;
pub use ranking::{RankedView, select};
pub use style::{CategoryPalette, Rgba, classify};
