//! Dashboard configuration loaded from a JSON file.
//!
//! Every field is optional; missing fields take the defaults below, unknown fields are
//! rejected so typos surface instead of being ignored.
//!
//! ```json
//! {
//!   "limit": 10,
//!   "padding_left": 140,
//!   "width": 400,
//!   "locale": "en",
//!   "series_name": "builds",
//!   "labels": { "show_all": "Show full chart", "show_top": "Show top {n}" },
//!   "palette": [ { "pattern": "fedora", "color": "#51A2DA" } ],
//!   "fallback_color": "#8B8D8F"
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::controller::{DEFAULT_LIMIT, MountOptions, ToggleLabels};
use crate::style::{CategoryPalette, FALLBACK_COLOR, PaletteEntry, Rgba};
use crate::viz::{BarChartRenderer, DEFAULT_WIDTH_PX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub limit: i64,
    pub padding_left: Option<u32>,
    pub width: u32,
    pub locale: String,
    pub series_name: String,
    pub labels: ToggleLabels,
    /// Replaces the built-in family table when present. Order is priority order.
    pub palette: Option<Vec<PaletteEntry>>,
    pub fallback_color: Option<Rgba>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            padding_left: None,
            width: DEFAULT_WIDTH_PX,
            locale: "en".to_string(),
            series_name: "builds".to_string(),
            labels: ToggleLabels::default(),
            palette: None,
            fallback_color: None,
        }
    }
}

impl DashboardConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(cfg)
    }

    pub fn palette(&self) -> CategoryPalette {
        let fallback = self.fallback_color.unwrap_or(FALLBACK_COLOR);
        match &self.palette {
            Some(entries) => CategoryPalette::new(entries.iter().cloned(), fallback),
            None => {
                let builtin = CategoryPalette::default();
                CategoryPalette::new(builtin.entries().iter().cloned(), fallback)
            }
        }
    }

    pub fn renderer(&self) -> BarChartRenderer {
        BarChartRenderer::new(self.palette())
            .with_series_name(self.series_name.clone())
            .with_width(Some(self.width))
    }

    pub fn mount_options(&self) -> MountOptions {
        MountOptions {
            limit: self.limit,
            padding_left: self.padding_left,
            labels: self.labels.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg: DashboardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.palette(), CategoryPalette::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let r: Result<DashboardConfig, _> = serde_json::from_str(r#"{"limt": 3}"#);
        assert!(r.is_err());
    }
}
