use crate::models::DataPoint;
use std::ops::Deref;

/// A dataset sorted by value descending (ties keep input order), optionally truncated.
///
/// Always derived from a dataset with [`select`]; never stored on its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RankedView {
    entries: Vec<DataPoint>,
}

impl RankedView {
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|p| p.value)
    }

    pub fn into_inner(self) -> Vec<DataPoint> {
        self.entries
    }
}

impl Deref for RankedView {
    type Target = [DataPoint];

    fn deref(&self) -> &[DataPoint] {
        &self.entries
    }
}

/// Build the ranked view of `dataset`.
///
/// The caller's slice is only read; sorting happens on a copy, so the same dataset
/// can be re-ranked on every toggle. With `show_all` the whole sorted sequence is
/// returned and `limit` is ignored; otherwise at most `limit` entries are kept, and a
/// zero or negative `limit` yields an empty view.
///
/// Values are expected to be finite. Ordering uses IEEE total order with `-0.0` folded
/// into `0.0`, so equal values always tie and a stray NaN ranks ahead of every number
/// instead of aborting the sort.
pub fn select(dataset: &[DataPoint], limit: i64, show_all: bool) -> RankedView {
    let mut entries = dataset.to_vec();
    // `sort_by` is stable.
    entries.sort_by(|a, b| sort_key(b.value).total_cmp(&sort_key(a.value)));
    if !show_all {
        entries.truncate(visible_count(limit));
    }
    RankedView { entries }
}

fn sort_key(value: f64) -> f64 {
    // -0.0 + 0.0 == +0.0
    value + 0.0
}

/// Number of entries a top-N view may show for `limit`.
pub(crate) fn visible_count(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
