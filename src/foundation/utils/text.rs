use unicode_segmentation::UnicodeSegmentation;

/// Fits a value into a fixed-width table cell.
///
/// Values longer than `width` are truncated on a grapheme boundary with a
/// trailing ellipsis, so multi-byte titles don't get split mid-character.
/// Shorter values are padded with spaces to keep the columns aligned.
///
/// # Examples
///
/// ```
/// use cmsctl::foundation::utils::fit_cell;
///
/// assert_eq!(fit_cell("ok", 4), "ok  ");
/// assert_eq!(fit_cell("truncated", 6), "trunc…");
/// ```
pub fn fit_cell(value: &str, width: usize) -> String {
    let graphemes: Vec<&str> = value.graphemes(true).collect();
    if graphemes.len() <= width {
        let padding = width - graphemes.len();
        let mut cell = value.to_string();
        cell.extend(std::iter::repeat(' ').take(padding));
        cell
    } else {
        let mut cell: String = graphemes[..width.saturating_sub(1)].concat();
        cell.push('…');
        cell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_value_is_padded() {
        assert_eq!(fit_cell("abc", 5), "abc  ");
    }

    #[test]
    fn test_exact_width_is_untouched() {
        assert_eq!(fit_cell("abcde", 5), "abcde");
    }

    #[test]
    fn test_long_value_is_truncated_with_ellipsis() {
        assert_eq!(fit_cell("abcdefgh", 5), "abcd…");
    }

    #[test]
    fn test_truncation_respects_grapheme_boundaries() {
        // Each family emoji is a single grapheme built from several scalars.
        let value = "👨‍👩‍👧‍👦👨‍👩‍👧‍👦👨‍👩‍👧‍👦";
        let cell = fit_cell(value, 2);
        assert_eq!(cell.graphemes(true).count(), 2);
        assert!(cell.ends_with('…'));
    }
}
