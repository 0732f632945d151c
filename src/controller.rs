//! Interactive ranked bar chart: top-N view with a control that expands to the full chart
//! and back.
//!
//! The controller owns its chart handle. Every re-render destroys the previous handle
//! before the backend is asked for a new one, so a container never holds two charts.

use serde::{Deserialize, Serialize};

use crate::control::{ClickEvent, HandlerId, ToggleControl};
use crate::error::RenderResult;
use crate::models::DataPoint;
use crate::ranking::{RankedView, select, visible_count};
use crate::viz::{BarChartRenderer, ChartBackend, ChartHandle, ContainerId};

/// Bars shown before the chart is expanded.
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// Only the `limit` largest entries.
    #[default]
    TopN,
    /// Every entry.
    All,
}

impl ToggleMode {
    pub fn shows_all(self) -> bool {
        matches!(self, ToggleMode::All)
    }

    pub fn flipped(self) -> Self {
        match self {
            ToggleMode::TopN => ToggleMode::All,
            ToggleMode::All => ToggleMode::TopN,
        }
    }
}

/// Control texts. `show_top` may contain `{n}`, replaced by the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleLabels {
    pub show_all: String,
    pub show_top: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            show_all: "Show full chart".to_string(),
            show_top: "Show top {n}".to_string(),
        }
    }
}

impl ToggleLabels {
    /// Text offering the other mode while `mode` is displayed.
    pub fn for_mode(&self, mode: ToggleMode, limit: i64) -> String {
        match mode {
            ToggleMode::TopN => self.show_all.clone(),
            ToggleMode::All => self.show_top.replace("{n}", &limit.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountOptions {
    pub limit: i64,
    pub padding_left: Option<u32>,
    pub labels: ToggleLabels,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            padding_left: None,
            labels: ToggleLabels::default(),
        }
    }
}

/// Owns one container, its live chart, and the optional toggle control bound to it.
pub struct ToggleController<B: ChartBackend, C: ToggleControl> {
    backend: B,
    renderer: BarChartRenderer,
    dataset: Vec<DataPoint>,
    container: ContainerId,
    control: Option<C>,
    options: MountOptions,
    mode: ToggleMode,
    handle: Option<B::Handle>,
    handler: Option<HandlerId>,
    next_handler: HandlerId,
}

impl<B: ChartBackend, C: ToggleControl> ToggleController<B, C> {
    /// Render the top-N chart into `container` and wire up `control`.
    ///
    /// An empty dataset renders nothing and hides the control. A dataset that fits in
    /// `limit` renders fully and hides the control, since there is nothing to expand.
    pub fn mount(
        backend: B,
        renderer: BarChartRenderer,
        dataset: Vec<DataPoint>,
        container: impl Into<ContainerId>,
        control: Option<C>,
        options: MountOptions,
    ) -> RenderResult<Self> {
        let mut this = Self {
            backend,
            renderer,
            dataset,
            container: container.into(),
            control,
            options,
            mode: ToggleMode::TopN,
            handle: None,
            handler: None,
            next_handler: HandlerId::first(),
        };

        if this.dataset.is_empty() {
            log::debug!("{}: empty dataset, nothing to render", this.container);
            this.hide_control();
            return Ok(this);
        }

        this.draw()?;
        if this.is_expandable() {
            let label = this.label();
            if let Some(control) = this.control.as_mut() {
                control.set_visible(true);
                control.set_text(&label);
            }
            this.rebind();
        } else {
            this.hide_control();
        }
        Ok(this)
    }

    /// Handle a click delivered to `handler`.
    ///
    /// Returns `Ok(false)` when `handler` is not the one currently bound (a click queued
    /// before the last rebind); such clicks change nothing. Otherwise the default action
    /// is prevented, the old chart is destroyed, the mode flips, the control gets a new
    /// label and a fresh handler, and the chart for the new mode is rendered.
    ///
    /// If the old chart cannot be destroyed nothing else changes. If the new chart fails
    /// to render, the mode and label have already moved on and no chart is live; the
    /// next click renders again.
    pub fn on_click(&mut self, handler: HandlerId, event: &mut ClickEvent) -> RenderResult<bool> {
        if self.handler != Some(handler) {
            log::debug!("{}: ignoring click for stale {}", self.container, handler);
            return Ok(false);
        }
        event.prevent_default();
        self.release()?;
        self.mode = self.mode.flipped();
        let label = self.label();
        if let Some(control) = self.control.as_mut() {
            control.set_text(&label);
        }
        self.rebind();
        self.draw()?;
        log::info!(
            "{}: switched to {:?} ({} bars)",
            self.container,
            self.mode,
            self.current_view().len()
        );
        Ok(true)
    }

    /// Click the control as a user would. Does nothing when the control is missing,
    /// hidden, or unbound.
    pub fn activate(&mut self) -> RenderResult<bool> {
        let Some(handler) = self
            .control
            .as_ref()
            .filter(|c| c.is_visible())
            .and_then(|c| c.bound_handler())
        else {
            return Ok(false);
        };
        let mut event = ClickEvent::new();
        self.on_click(handler, &mut event)
    }

    /// Destroy the live chart and unbind the control, giving back the backend and control.
    pub fn unmount(mut self) -> RenderResult<(B, Option<C>)> {
        self.release()?;
        if let Some(control) = self.control.as_mut() {
            control.replace_click_handler(None);
        }
        self.handler = None;
        Ok((self.backend, self.control))
    }

    pub fn mode(&self) -> ToggleMode {
        self.mode
    }

    /// The view for the current mode, recomputed from the dataset.
    pub fn current_view(&self) -> RankedView {
        select(&self.dataset, self.options.limit, self.mode.shows_all())
    }

    pub fn container(&self) -> &ContainerId {
        &self.container
    }

    pub fn control(&self) -> Option<&C> {
        self.control.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn renderer(&self) -> &BarChartRenderer {
        &self.renderer
    }

    pub fn handle(&self) -> Option<&B::Handle> {
        self.handle.as_ref()
    }

    pub fn has_live_chart(&self) -> bool {
        self.handle.is_some()
    }

    pub fn options(&self) -> &MountOptions {
        &self.options
    }

    fn is_expandable(&self) -> bool {
        self.dataset.len() > visible_count(self.options.limit)
    }

    fn label(&self) -> String {
        self.options.labels.for_mode(self.mode, self.options.limit)
    }

    /// Destroy the live chart. The handle is kept when destroying fails.
    fn release(&mut self) -> RenderResult<()> {
        if let Some(previous) = self.handle.as_mut() {
            previous.destroy()?;
            self.handle = None;
        }
        Ok(())
    }

    /// Render the current view. Expects no chart to be live.
    fn draw(&mut self) -> RenderResult<()> {
        let view = self.current_view();
        let handle = self.renderer.render(
            &mut self.backend,
            &view,
            &self.container,
            self.options.padding_left,
        )?;
        self.handle = Some(handle);
        Ok(())
    }

    fn rebind(&mut self) {
        let Some(control) = self.control.as_mut() else {
            return;
        };
        let id = self.next_handler;
        self.next_handler = id.next();
        control.replace_click_handler(Some(id));
        self.handler = Some(id);
    }

    fn hide_control(&mut self) {
        if let Some(control) = self.control.as_mut() {
            control.set_visible(false);
            control.replace_click_handler(None);
        }
        self.handler = None;
    }
}
