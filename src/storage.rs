use crate::models::{DataPoint, RawPoint};
use crate::viz::ChartConfig;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Load a dataset from `.json` or `.csv` (anything else is read as JSON).
///
/// JSON may be a list of `["label", value]` columns or of `{"label", "value"}` records.
/// CSV needs a `label,value` header. Rows keep their file order.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<DataPoint>> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();
    let points = match ext.as_str() {
        "csv" => load_csv(path)?,
        _ => load_json(path)?,
    };
    validate(&points).with_context(|| format!("invalid dataset {}", path.display()))?;
    log::debug!("loaded {} rows from {}", points.len(), path.display());
    Ok(points)
}

fn load_json(path: &Path) -> Result<Vec<DataPoint>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_json(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a JSON dataset from a string.
pub fn parse_json(text: &str) -> Result<Vec<DataPoint>> {
    let rows: Vec<RawPoint> = serde_json::from_str(text)?;
    Ok(rows.into_iter().map(DataPoint::from).collect())
}

fn load_csv(path: &Path) -> Result<Vec<DataPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let mut out = Vec::new();
    for (i, row) in rdr.deserialize::<DataPoint>().enumerate() {
        let p = row.with_context(|| format!("{}: row {}", path.display(), i + 1))?;
        out.push(p);
    }
    Ok(out)
}

/// Labels must be unique and values finite.
fn validate(points: &[DataPoint]) -> Result<()> {
    let mut seen = HashSet::new();
    for (i, p) in points.iter().enumerate() {
        if !p.value.is_finite() {
            bail!("row {}: value for {:?} is not a finite number", i + 1, p.label);
        }
        if !seen.insert(p.label.as_str()) {
            bail!("row {}: duplicate label {:?}", i + 1, p.label);
        }
    }
    Ok(())
}

/// Save a chart configuration as pretty JSON.
pub fn save_config_json<P: AsRef<Path>>(config: &ChartConfig, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(config)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
