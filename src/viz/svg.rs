//! SVG charting backend built on Plotters.
//!
//! A container is a file stem inside the output directory: rendering into `chroots`
//! writes `<out_dir>/chroots.svg`, destroying the handle removes that file again.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_svg::SVGBackend;

use super::text::truncate_to_width;
use super::types::{ChartConfig, ContainerId};
use super::util::{default_label_area_px, format_value, plotters_color};
use super::{CHROME_HEIGHT_PX, ChartBackend, ChartHandle, DEFAULT_WIDTH_PX, ROW_HEIGHT_PX};
use crate::error::{RenderError, RenderResult};

const FONT_PX: u32 = 12;
const BAR_THICKNESS_PX: i32 = 18;
/// Room to the right of the longest bar for its value label.
const VALUE_LABEL_AREA_PX: u32 = 56;
const LABEL_GAP_PX: i32 = 6;

type LiveSet = Rc<RefCell<BTreeSet<ContainerId>>>;

/// Writes one SVG file per container. Clones share the set of live containers.
#[derive(Debug, Clone)]
pub struct SvgBackend {
    out_dir: PathBuf,
    locale: String,
    live: LiveSet,
}

impl SvgBackend {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            locale: "en".to_string(),
            live: LiveSet::default(),
        }
    }

    /// Locale tag for value labels (e.g. "en" or "de").
    pub fn with_locale(mut self, tag: impl Into<String>) -> Self {
        self.locale = tag.into();
        self
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    pub fn path_for(&self, container: &ContainerId) -> PathBuf {
        self.out_dir.join(format!("{container}.svg"))
    }

    pub fn is_live(&self, container: &ContainerId) -> bool {
        self.live.borrow().contains(container)
    }

    pub fn live_count(&self) -> usize {
        self.live.borrow().len()
    }
}

/// Container ids become file names, so only a conservative character set is accepted.
fn validate_container(container: &ContainerId) -> RenderResult<()> {
    let id = container.as_str();
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(RenderError::InvalidContainer(id.to_string()))
    }
}

impl ChartBackend for SvgBackend {
    type Handle = SvgChartHandle;

    fn generate(&mut self, config: &ChartConfig) -> RenderResult<SvgChartHandle> {
        let container = &config.bind_to;
        validate_container(container)?;
        if self.is_live(container) {
            return Err(RenderError::ContainerBusy(container.clone()));
        }
        fs::create_dir_all(&self.out_dir)?;
        let path = self.path_for(container);
        draw_bar_chart(&path, config, &self.locale)?;
        self.live.borrow_mut().insert(container.clone());
        log::info!("wrote {} bars to {}", config.bar_count(), path.display());
        Ok(SvgChartHandle {
            container: container.clone(),
            path,
            live: Rc::clone(&self.live),
        })
    }
}

/// A live SVG chart file.
#[derive(Debug)]
pub struct SvgChartHandle {
    container: ContainerId,
    path: PathBuf,
    live: LiveSet,
}

impl SvgChartHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChartHandle for SvgChartHandle {
    fn container(&self) -> &ContainerId {
        &self.container
    }

    fn destroy(&mut self) -> RenderResult<()> {
        self.live.borrow_mut().remove(&self.container);
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn draw_err<E: std::fmt::Debug>(e: E) -> RenderError {
    RenderError::Draw(format!("{e:?}"))
}

/// Draw horizontal bars with category labels on the left and values at the bar ends.
/// Only primitives are used, so no font has to be loaded.
fn draw_bar_chart(path: &Path, config: &ChartConfig, locale_tag: &str) -> RenderResult<()> {
    let width = config.size.width.unwrap_or(DEFAULT_WIDTH_PX);
    let root = SVGBackend::new(path, (width, config.size.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let label_area = config.padding_left.unwrap_or_else(|| {
        default_label_area_px(config.axis.categories.iter().map(String::as_str), FONT_PX)
    });
    let plot_width = width
        .saturating_sub(label_area.saturating_add(VALUE_LABEL_AREA_PX))
        .max(1);
    let max_value = config
        .data
        .values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);

    let font = FontDesc::new(FontFamily::SansSerif, FONT_PX as f64, FontStyle::Normal);
    let label_style = font.color(&BLACK).pos(Pos::new(HPos::Right, VPos::Center));
    let value_style = font.color(&BLACK).pos(Pos::new(HPos::Left, VPos::Center));

    let x0 = label_area as i32;
    let top = (CHROME_HEIGHT_PX / 2) as i32;
    for (i, (label, value, color)) in config.bars().enumerate() {
        let center = top + i as i32 * ROW_HEIGHT_PX as i32 + ROW_HEIGHT_PX as i32 / 2;
        let len = if max_value > 0.0 && value.is_finite() {
            (value.max(0.0) / max_value * plot_width as f64).round() as i32
        } else {
            0
        };
        let y0 = center - BAR_THICKNESS_PX / 2;
        root.draw(&Rectangle::new(
            [(x0, y0), (x0 + len, y0 + BAR_THICKNESS_PX)],
            plotters_color(color).filled(),
        ))
        .map_err(draw_err)?;

        let shown = truncate_to_width(label, FONT_PX, label_area.saturating_sub(LABEL_GAP_PX as u32));
        root.draw(&Text::new(shown, (x0 - LABEL_GAP_PX, center), label_style.clone()))
            .map_err(draw_err)?;

        if config.data_labels {
            root.draw(&Text::new(
                format_value(value, locale_tag),
                (x0 + len + 4, center),
                value_style.clone(),
            ))
            .map_err(draw_err)?;
        }
    }

    root.present().map_err(draw_err)?;
    Ok(())
}
