pub(crate) mod header;
pub(crate) mod programs;
pub(crate) mod resources;

use unicode_width::UnicodeWidthChar;

/// Clip `text` to at most `max_width` terminal columns, appending an
/// ellipsis when anything was cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let total: usize = text.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        width += ch_width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn long_text_gets_an_ellipsis() {
        let clipped = truncate_to_width("a twelve week cohort", 8);
        assert!(clipped.ends_with('…'));
        assert!(clipped.chars().count() <= 8);
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_to_width("anything", 0), "");
    }
}
