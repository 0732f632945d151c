/*!
 * Desktop viewer for buildstats - ranked chroot build charts
 *
 * Opens a dataset (.json or .csv), shows the top-N chart and a button that
 * expands it to the full chart and back.
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::Result;
use buildstats::config::DashboardConfig;
use buildstats::control::Button;
use buildstats::controller::ToggleController;
use buildstats::storage;
use buildstats::viz::retained::RetainedBackend;
use buildstats::viz::util::{default_label_area_px, format_value};
use buildstats::viz::{CHROME_HEIGHT_PX, ChartConfig, ContainerId, ROW_HEIGHT_PX};
use eframe::egui;
use std::path::{Path, PathBuf};

const CONTAINER: &str = "chroots";

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let dataset = args.next();
    let config = args.next();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([360.0, 300.0])
            .with_title("Chroot builds - buildstats"),
        ..Default::default()
    };

    eframe::run_native(
        "buildstats",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(dataset, config)))),
    )
}

/// Main application state
struct ViewerApp {
    config: DashboardConfig,
    backend: RetainedBackend,
    chart: Option<ToggleController<RetainedBackend, Button>>,
    source: Option<PathBuf>,
    status_message: String,
    error_message: String,
}

impl ViewerApp {
    fn new(dataset: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        let mut app = Self {
            config: DashboardConfig::default(),
            backend: RetainedBackend::new(),
            chart: None,
            source: None,
            status_message: String::new(),
            error_message: String::new(),
        };
        if let Some(path) = config {
            match DashboardConfig::load(&path) {
                Ok(cfg) => app.config = cfg,
                Err(err) => app.error_message = format!("{err:#}"),
            }
        }
        if let Some(path) = dataset {
            app.open(&path);
        }
        app
    }

    fn open(&mut self, path: &Path) {
        match self.try_open(path) {
            Ok(()) => {
                self.source = Some(path.to_path_buf());
                self.error_message.clear();
            }
            Err(err) => {
                self.error_message = format!("{err:#}");
                self.status_message.clear();
            }
        }
    }

    fn try_open(&mut self, path: &Path) -> Result<()> {
        let points = storage::load_dataset(path)?;
        // Release the previous chart before a new one is bound to the same container.
        if let Some(previous) = self.chart.take() {
            previous.unmount()?;
        }
        let rows = points.len();
        let chart = ToggleController::mount(
            self.backend.clone(),
            self.config.renderer(),
            points,
            CONTAINER,
            Some(Button::default()),
            self.config.mount_options(),
        )?;
        self.chart = Some(chart);
        self.status_message = format!("Loaded {rows} chroots from {}", path.display());
        Ok(())
    }

    fn toggle(&mut self) {
        if let Some(chart) = self.chart.as_mut()
            && let Err(err) = chart.activate()
        {
            self.error_message = format!("Failed to redraw chart: {err}");
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open dataset…").clicked()
                    && let Some(path) = rfd::FileDialog::new()
                        .add_filter("Datasets", &["json", "csv"])
                        .pick_file()
                {
                    self.open(&path);
                }
                if let Some(source) = &self.source {
                    ui.label(source.display().to_string());
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Builds per chroot");
                ui.add_space(8.0);

                let live = self.backend.chart(&ContainerId::from(CONTAINER));
                match live {
                    Some(config) => paint_chart(ui, &config, &self.config.locale),
                    None if self.chart.is_some() => {
                        ui.label("No builds to show.");
                    }
                    None => {
                        ui.label("Open a dataset to show the chart.");
                    }
                }

                let toggle_text = self
                    .chart
                    .as_ref()
                    .and_then(|c| c.control())
                    .and_then(|b| b.click_target().map(|_| b.text().to_string()));
                if let Some(text) = toggle_text
                    && ui.link(text).clicked()
                {
                    self.toggle();
                }

                ui.add_space(10.0);
                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }
            });
        });
    }
}

/// Paint the live bar chart config: labels left, bars in family colors, values at the ends.
fn paint_chart(ui: &mut egui::Ui, config: &ChartConfig, locale: &str) {
    let width = config
        .size
        .width
        .map_or(ui.available_width(), |w| w as f32)
        .min(ui.available_width());
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, config.size.height as f32),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let font = egui::FontId::proportional(12.0);

    let label_area = config.padding_left.unwrap_or_else(|| {
        default_label_area_px(config.axis.categories.iter().map(String::as_str), 12)
    }) as f32;
    let plot_width = (width - label_area - 56.0).max(1.0);
    let max_value = config
        .data
        .values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let row = ROW_HEIGHT_PX as f32;
    let top = rect.top() + CHROME_HEIGHT_PX as f32 / 2.0;

    for (i, (label, value, color)) in config.bars().enumerate() {
        let center_y = top + i as f32 * row + row / 2.0;
        let len = if max_value > 0.0 {
            (value.max(0.0) / max_value) as f32 * plot_width
        } else {
            0.0
        };
        let x0 = rect.left() + label_area;
        let bar = egui::Rect::from_min_size(egui::pos2(x0, center_y - 9.0), egui::vec2(len, 18.0));
        painter.rect_filled(
            bar,
            0.0,
            egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a),
        );
        painter.text(
            egui::pos2(x0 - 6.0, center_y),
            egui::Align2::RIGHT_CENTER,
            label,
            font.clone(),
            text_color,
        );
        if config.data_labels {
            painter.text(
                egui::pos2(x0 + len + 4.0, center_y),
                egui::Align2::LEFT_CENTER,
                format_value(value, locale),
                font.clone(),
                text_color,
            );
        }
    }
}
