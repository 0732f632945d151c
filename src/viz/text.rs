//! Text measurement and truncation for category labels.

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring
/// on the SVG path).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Width of the widest label in `labels`, or 0 when there are none.
pub fn widest_label_px<'a>(labels: impl IntoIterator<Item = &'a str>, font_px: u32) -> u32 {
    labels
        .into_iter()
        .map(|l| estimate_text_width_px(l, font_px))
        .max()
        .unwrap_or(0)
}

/// Truncate to fit `max_px`, ending in a single ellipsis when anything was cut.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_labels_are_untouched() {
        assert_eq!(truncate_to_width("epel-9", 12, 200), "epel-9");
    }

    #[test]
    fn long_labels_end_in_ellipsis_and_fit() {
        let s = truncate_to_width("openmandriva-rolling-aarch64", 12, 80);
        assert!(s.ends_with('…'));
        assert!(estimate_text_width_px(&s, 12) <= 80);
    }

    #[test]
    fn widest_label_of_nothing_is_zero() {
        assert_eq!(widest_label_px(std::iter::empty(), 12), 0);
        assert_eq!(widest_label_px(["ab", "abcd"], 10), 24);
    }
}
