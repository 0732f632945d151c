use buildstats::models::DataPoint;
use buildstats::storage;
use buildstats::viz::{BarChartRenderer, ChartConfig, ContainerId};
use buildstats::select;
use std::fs;
use tempfile::tempdir;

#[test]
fn json_records_and_columns_load_in_file_order() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("chroots.json");
    fs::write(
        &p,
        r#"[
            ["fedora-40-x86_64", 120],
            {"label": "epel-9-x86_64", "value": 40},
            ["mageia-9-x86_64", "7"]
        ]"#,
    )
    .unwrap();
    let points = storage::load_dataset(&p).unwrap();
    assert_eq!(
        points,
        vec![
            DataPoint::new("fedora-40-x86_64", 120.0),
            DataPoint::new("epel-9-x86_64", 40.0),
            DataPoint::new("mageia-9-x86_64", 7.0),
        ]
    );
}

#[test]
fn empty_json_array_is_an_empty_dataset() {
    assert!(storage::parse_json("[]").unwrap().is_empty());
}

#[test]
fn csv_requires_label_and_value_columns() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("bad.csv");
    fs::write(&p, "name,count\nrhel-9,3\n").unwrap();
    assert!(storage::load_dataset(&p).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(storage::load_dataset(dir.path().join("nope.json")).is_err());
}

#[test]
fn saved_config_reads_back() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("config.json");
    let data = vec![DataPoint::new("fedora-40-x86_64", 1.0)];
    let cfg = BarChartRenderer::default().config(
        &select(&data, 10, false),
        &ContainerId::from("chroots"),
        Some(90),
    );
    storage::save_config_json(&cfg, &p).unwrap();
    let back: ChartConfig = serde_json::from_str(&fs::read_to_string(&p).unwrap()).unwrap();
    assert_eq!(back, cfg);
}
