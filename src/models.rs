use serde::{Deserialize, Serialize};

/// One build environment ("chroot") and its build count.
///
/// Labels are expected to be unique within a dataset. Values must be finite numbers;
/// the loaders in [`crate::storage`] reject anything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub label: String,
    #[serde(deserialize_with = "de_f64_from_string_or_number")]
    pub value: f64,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<(String, f64)> for DataPoint {
    fn from((label, value): (String, f64)) -> Self {
        Self { label, value }
    }
}

impl From<(&str, f64)> for DataPoint {
    fn from((label, value): (&str, f64)) -> Self {
        Self::new(label, value)
    }
}

/// Raw dataset row as it appears in server-rendered JSON.
///
/// Two shapes are accepted: the chart-columns form `["fedora-40-x86_64", 120]`
/// and the record form `{"label": "...", "value": 120}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPoint {
    Column(String, #[serde(deserialize_with = "de_f64_from_string_or_number")] f64),
    Record(DataPoint),
}

impl From<RawPoint> for DataPoint {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Column(label, value) => Self { label, value },
            RawPoint::Record(p) => p,
        }
    }
}

/// Serde helper: parse `f64` from either a JSON number or a numeric string.
///
/// Server templates sometimes render counts as strings. A string that is not a number
/// is an error, never a silent zero.
fn de_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct F64Visitor;

    impl<'de> Visitor<'de> for F64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a number or a string holding a number")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v as f64)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            s.trim().parse::<f64>().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(F64Visitor)
}
