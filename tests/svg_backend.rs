use buildstats::control::Button;
use buildstats::controller::{MountOptions, ToggleController};
use buildstats::error::RenderError;
use buildstats::viz::svg::SvgBackend;
use buildstats::viz::{BarChartRenderer, ChartHandle, ContainerId};
use buildstats::{DataPoint, select};
use std::fs;
use tempfile::tempdir;

fn sample(n: usize) -> Vec<DataPoint> {
    (0..n)
        .map(|i| DataPoint::new(format!("epel-{}-x86_64", i), 1000.0 + i as f64))
        .collect()
}

#[test]
fn render_writes_svg_and_destroy_removes_it() {
    let dir = tempdir().unwrap();
    let mut backend = SvgBackend::new(dir.path());
    let container = ContainerId::from("chroots");
    let view = select(&sample(4), 10, false);

    let mut handle = BarChartRenderer::default()
        .render(&mut backend, &view, &container, None)
        .unwrap();
    let path = handle.path().to_path_buf();
    assert_eq!(path, dir.path().join("chroots.svg"));

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("height=\"150\""));
    assert!(svg.contains("epel-3-x86_64"));
    assert!(svg.contains("1,003"));
    assert!(backend.is_live(&container));

    handle.destroy().unwrap();
    assert!(!path.exists());
    assert!(!backend.is_live(&container));
}

#[test]
fn values_follow_the_backend_locale() {
    let dir = tempdir().unwrap();
    let mut backend = SvgBackend::new(dir.path()).with_locale("de");
    let view = select(&sample(1), 10, false);
    let handle = BarChartRenderer::default()
        .render(&mut backend, &view, &ContainerId::from("de"), None)
        .unwrap();
    let svg = fs::read_to_string(handle.path()).unwrap();
    assert!(svg.contains("1.000"));
}

#[test]
fn busy_and_invalid_containers_are_rejected() {
    let dir = tempdir().unwrap();
    let mut backend = SvgBackend::new(dir.path());
    let renderer = BarChartRenderer::default();
    let view = select(&sample(2), 10, false);

    let _live = renderer
        .render(&mut backend, &view, &ContainerId::from("chroots"), None)
        .unwrap();
    let busy = renderer
        .render(&mut backend, &view, &ContainerId::from("chroots"), None)
        .unwrap_err();
    assert!(matches!(busy, RenderError::ContainerBusy(_)));

    for bad in ["", "../escape", "has space", "#chroots"] {
        let err = renderer
            .render(&mut backend, &view, &ContainerId::from(bad), None)
            .unwrap_err();
        assert!(matches!(err, RenderError::InvalidContainer(_)), "{bad:?}");
    }
    assert_eq!(backend.live_count(), 1);
}

#[test]
fn empty_view_still_draws_a_minimum_height_chart() {
    let dir = tempdir().unwrap();
    let mut backend = SvgBackend::new(dir.path().join("nested"));
    let handle = BarChartRenderer::default()
        .render(&mut backend, &select(&[], 10, false), &ContainerId::from("empty"), None)
        .unwrap();
    let svg = fs::read_to_string(handle.path()).unwrap();
    assert!(svg.contains("height=\"100\""));
}

#[test]
fn toggle_controller_keeps_one_file_per_container() {
    let dir = tempdir().unwrap();
    let backend = SvgBackend::new(dir.path());
    let mut chart = ToggleController::mount(
        backend.clone(),
        BarChartRenderer::default(),
        sample(12),
        "chroots",
        Some(Button::default()),
        MountOptions {
            limit: 5,
            ..MountOptions::default()
        },
    )
    .unwrap();
    chart.activate().unwrap();

    let files: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
    assert_eq!(backend.live_count(), 1);
    let svg = fs::read_to_string(dir.path().join("chroots.svg")).unwrap();
    assert!(svg.contains("epel-0-x86_64"));
}
