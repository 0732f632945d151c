//! Ranked bar chart rendering.
//!
//! - [`BarChartRenderer`] turns a [`RankedView`] into a typed [`ChartConfig`]
//! - Bars are horizontal, one color per category via the [`CategoryPalette`]
//! - Legend, tooltip and value axis are off; each bar carries its value as a label
//! - Charting backends implement [`ChartBackend`]: [`svg::SvgBackend`] writes SVG files with
//!   Plotters, [`retained::RetainedBackend`] keeps live configs in memory for GUIs and tests

pub mod retained;
pub mod svg;
pub mod text;
pub mod types;
pub mod util;

pub use types::{AxisConfig, ChartConfig, ChartKind, ChartSize, ContainerId, DataColumn};

use crate::error::RenderResult;
use crate::ranking::RankedView;
use crate::style::CategoryPalette;

/// Pixels per bar row.
pub const ROW_HEIGHT_PX: u32 = 25;
/// Space reserved above and below the bars.
pub const CHROME_HEIGHT_PX: u32 = 50;
/// Charts never get shorter than this.
pub const MIN_HEIGHT_PX: u32 = 100;

/// Default width of the ranked chart, matching the dashboard side column.
pub const DEFAULT_WIDTH_PX: u32 = 400;

/// Height of a chart showing `entries` bars: `max(entries * 25 + 50, 100)`.
pub fn chart_height(entries: usize) -> u32 {
    let entries = u32::try_from(entries).unwrap_or(u32::MAX);
    entries
        .saturating_mul(ROW_HEIGHT_PX)
        .saturating_add(CHROME_HEIGHT_PX)
        .max(MIN_HEIGHT_PX)
}

/// A rendered chart instance. Owned by whoever rendered it.
pub trait ChartHandle {
    fn container(&self) -> &ContainerId;

    /// Remove the chart from its container and release the binding.
    ///
    /// On error the handle stays usable and `destroy` may be called again.
    fn destroy(&mut self) -> RenderResult<()>;
}

/// The charting collaborator: renders a configuration into its bound container.
///
/// Backends decide what a container is and whether it exists; callers never check.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn generate(&mut self, config: &ChartConfig) -> RenderResult<Self::Handle>;
}

impl<B: ChartBackend + ?Sized> ChartBackend for &mut B {
    type Handle = B::Handle;

    fn generate(&mut self, config: &ChartConfig) -> RenderResult<Self::Handle> {
        (**self).generate(config)
    }
}

/// Builds ranked bar chart configurations and hands them to a backend.
#[derive(Debug, Clone)]
pub struct BarChartRenderer {
    palette: CategoryPalette,
    series_name: String,
    width: Option<u32>,
}

impl Default for BarChartRenderer {
    fn default() -> Self {
        Self::new(CategoryPalette::default())
    }
}

impl BarChartRenderer {
    pub fn new(palette: CategoryPalette) -> Self {
        Self {
            palette,
            series_name: "builds".to_string(),
            width: Some(DEFAULT_WIDTH_PX),
        }
    }

    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = name.into();
        self
    }

    /// Fixed chart width; `None` leaves it to the backend.
    pub fn with_width(mut self, width: Option<u32>) -> Self {
        self.width = width;
        self
    }

    pub fn palette(&self) -> &CategoryPalette {
        &self.palette
    }

    /// Configuration for `view` bound to `container`. Pure; nothing is rendered.
    pub fn config(
        &self,
        view: &RankedView,
        container: &ContainerId,
        padding_left: Option<u32>,
    ) -> ChartConfig {
        let categories: Vec<String> = view.labels().map(str::to_string).collect();
        let bar_colors = categories
            .iter()
            .map(|label| self.palette.classify(Some(label)))
            .collect();
        ChartConfig {
            bind_to: container.clone(),
            kind: ChartKind::Bar,
            size: ChartSize {
                height: chart_height(view.len()),
                width: self.width,
            },
            padding_left,
            axis: AxisConfig {
                rotated: true,
                categories,
                value_axis_shown: false,
            },
            data: DataColumn {
                name: self.series_name.clone(),
                values: view.values().collect(),
            },
            bar_colors,
            legend_shown: false,
            tooltip_shown: false,
            data_labels: true,
        }
    }

    /// Render `view` into `container`, creating exactly one chart instance.
    ///
    /// Any chart already bound to the container is left alone; releasing it first is
    /// the caller's job. Backend errors propagate as-is.
    pub fn render<B: ChartBackend>(
        &self,
        backend: &mut B,
        view: &RankedView,
        container: &ContainerId,
        padding_left: Option<u32>,
    ) -> RenderResult<B::Handle> {
        let config = self.config(view, container, padding_left);
        log::debug!(
            "rendering {} bars into {} (height {}px)",
            config.bar_count(),
            container,
            config.size.height
        );
        backend.generate(&config)
    }
}
