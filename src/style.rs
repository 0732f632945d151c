//! Category classification: map a chroot label to the color of its distribution family.
//!
//! The palette is an explicit, ordered list of `(pattern, color)` pairs evaluated
//! first-match-wins against the lower-cased label. Order is a priority order: some
//! family tokens share prefixes or appear together in one label (for example
//! `centos-stream+epel-next-9`), and the earlier entry decides.
//!
//! # Example
//!
//! ```rust
//! use buildstats::style::{CategoryPalette, Rgba};
//!
//! let palette = CategoryPalette::default();
//! assert_eq!(palette.classify(Some("Fedora-40-x86_64")), palette.classify(Some("fedora-40-x86_64")));
//! assert_eq!(palette.classify(None), palette.fallback());
//! assert_eq!(Rgba::from_hex("#51a2da").unwrap(), palette.classify(Some("fedora-rawhide")));
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(ParseColorError(s.to_string()));
        }
        let byte = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ParseColorError(s.to_string()))
        };
        let a = if hex.len() == 8 { byte(6)? } else { 255 };
        Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, a))
    }

    /// Hex notation; the alpha byte is only written for translucent colors.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {0:?}, expected #RRGGBB or #RRGGBBAA")]
pub struct ParseColorError(String);

/// Built-in distribution families, in priority order.
const FAMILY_PALETTE: [(&str, Rgba); 9] = [
    ("fedora", Rgba::rgb(0x51, 0xA2, 0xDA)),       // fedora blue
    ("centos", Rgba::rgb(0x93, 0x22, 0x79)),       // centos purple
    ("rhel", Rgba::rgb(0xEE, 0x00, 0x00)),         // red hat red
    ("epel", Rgba::rgb(0xF0, 0xAB, 0x00)),         // amber
    ("mageia", Rgba::rgb(0x35, 0xCA, 0xED)),       // cyan
    ("opensuse", Rgba::rgb(0x73, 0xBA, 0x25)),     // suse green
    ("openmandriva", Rgba::rgb(0x70, 0x3F, 0xEC)), // violet
    ("amazon", Rgba::rgb(0xFF, 0x99, 0x00)),       // orange
    ("alma", Rgba::rgb(0x0F, 0x42, 0x66)),         // navy
];

/// Color for labels no family matches ("unknown/other").
pub const FALLBACK_COLOR: Rgba = Rgba::rgb(0x8B, 0x8D, 0x8F);

/// One `(pattern, color)` entry of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub pattern: String,
    pub color: Rgba,
}

/// Ordered, first-match-wins category palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPalette {
    entries: Vec<PaletteEntry>,
    fallback: Rgba,
}

impl Default for CategoryPalette {
    fn default() -> Self {
        Self::new(
            FAMILY_PALETTE.iter().map(|(pattern, color)| PaletteEntry {
                pattern: (*pattern).to_string(),
                color: *color,
            }),
            FALLBACK_COLOR,
        )
    }
}

impl CategoryPalette {
    /// Build a palette; entry order is kept exactly as given. Patterns are lower-cased
    /// and empty patterns are dropped, since they would match every label.
    pub fn new(entries: impl IntoIterator<Item = PaletteEntry>, fallback: Rgba) -> Self {
        let entries = entries
            .into_iter()
            .filter(|e| !e.pattern.is_empty())
            .map(|e| PaletteEntry {
                pattern: e.pattern.to_lowercase(),
                color: e.color,
            })
            .collect();
        Self { entries, fallback }
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn fallback(&self) -> Rgba {
        self.fallback
    }

    /// Resolve the color for a category label. Total over all inputs.
    pub fn classify(&self, label: Option<&str>) -> Rgba {
        let Some(label) = label.filter(|l| !l.is_empty()) else {
            return self.fallback;
        };
        let lowered = label.to_lowercase();
        self.entries
            .iter()
            .find(|e| lowered.contains(e.pattern.as_str()))
            .map_or(self.fallback, |e| e.color)
    }
}

/// Classify with the built-in palette.
pub fn classify(label: Option<&str>) -> Rgba {
    CategoryPalette::default().classify(label)
}
