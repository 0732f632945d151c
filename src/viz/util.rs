//! Utility functions for the SVG backend: locale mapping, value labels, label area sizing.

use num_format::{Locale, ToFormattedString};
use plotters::style::RGBColor;

use super::text::widest_label_px;
use crate::style::Rgba;

/// Map a user-provided locale tag to a `num_format::Locale` and its decimal separator char.
///
/// Supported tags (case-insensitive): `en`, `us`, `en_US`, `de`, `de_DE`, `german`,
/// `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'), // default
    }
}

/// Format a bar value: whole counts get thousands separators, fractions two decimals.
pub fn format_value(value: f64, locale_tag: &str) -> String {
    let (locale, dec_sep) = map_locale(locale_tag);
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        (value as i64).to_formatted_string(locale)
    } else {
        let s = format!("{value:.2}");
        if dec_sep == '.' { s } else { s.replace('.', &dec_sep.to_string()) }
    }
}

/// Default left label area: widest label plus breathing room, clamped to a sane range.
pub fn default_label_area_px<'a>(labels: impl IntoIterator<Item = &'a str>, font_px: u32) -> u32 {
    widest_label_px(labels, font_px)
        .saturating_add(12)
        .clamp(48, 220)
}

pub fn plotters_color(c: Rgba) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}
