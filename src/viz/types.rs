//! Public types for the chart configuration consumed by charting backends.

use crate::style::Rgba;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of the container a chart is bound to (a DOM id, an output file stem, a GUI slot).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ContainerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Chart kinds a configuration can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSize {
    pub height: u32,
    /// `None` leaves the width to the backend.
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Bars run horizontally, categories are listed top to bottom.
    pub rotated: bool,
    pub categories: Vec<String>,
    pub value_axis_shown: bool,
}

/// A single named data column; `values[i]` belongs to `AxisConfig::categories[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Declarative configuration of a ranked bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub bind_to: ContainerId,
    pub kind: ChartKind,
    pub size: ChartSize,
    /// Left padding override; `None` uses the backend default.
    pub padding_left: Option<u32>,
    pub axis: AxisConfig,
    pub data: DataColumn,
    /// Per-bar color, resolved from each bar's category label.
    pub bar_colors: Vec<Rgba>,
    pub legend_shown: bool,
    pub tooltip_shown: bool,
    /// Draw each value next to its bar.
    pub data_labels: bool,
}

impl ChartConfig {
    pub fn bar_count(&self) -> usize {
        self.data.values.len()
    }

    /// Color of the bar at `index`.
    pub fn color_of(&self, index: usize) -> Option<Rgba> {
        self.bar_colors.get(index).copied()
    }

    /// `(label, value, color)` triples in display order.
    pub fn bars(&self) -> impl Iterator<Item = (&str, f64, Rgba)> + '_ {
        self.axis
            .categories
            .iter()
            .zip(&self.data.values)
            .zip(&self.bar_colors)
            .map(|((label, value), color)| (label.as_str(), *value, *color))
    }
}
