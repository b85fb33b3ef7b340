//! Shared formatting utilities.
//!
//! Label casing, case-insensitive match highlighting and column padding used by
//! the presenters and the text renderer.

/// Uppercases the first character: `"pending"` becomes `"Pending"`.
///
/// ```rust
/// use storefront_console::ui::helpers::capitalize;
///
/// assert_eq!(capitalize("pending"), "Pending");
/// assert_eq!(capitalize(""), "");
/// ```
#[must_use]
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Tab label with a count, e.g. `"Pending (3)"`.
#[must_use]
pub fn count_label(label: &str, count: usize) -> String {
    format!("{label} ({count})")
}

/// Finds non-overlapping case-insensitive occurrences of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end. Comparison
/// folds each character to its first lowercase form so indices stay aligned
/// with `text`.
///
/// ```rust
/// use storefront_console::ui::helpers::highlight_ranges;
///
/// assert_eq!(highlight_ranges("Jane Smith", "JANE"), vec![(0, 4)]);
/// assert_eq!(highlight_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
/// assert!(highlight_ranges("Tom", "").is_empty());
/// ```
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Wraps highlighted ranges of `text` in brackets for plain-text output.
///
/// ```rust
/// use storefront_console::ui::helpers::mark_ranges;
///
/// assert_eq!(mark_ranges("Jane Smith", &[(0, 4)]), "[Jane] Smith");
/// ```
#[must_use]
pub fn mark_ranges(text: &str, ranges: &[(usize, usize)]) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }
        out.extend(&chars[current_pos..start]);
        out.push('[');
        out.extend(&chars[start..end]);
        out.push(']');
        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

/// Left-aligns `text` in a column of `width` characters, truncating with `...`.
#[must_use]
pub fn pad_column(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let keep = width.saturating_sub(3);
        let truncated: String = text.chars().take(keep).collect();
        format!("{truncated}...")
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_is_char_indexed() {
        assert_eq!(highlight_ranges("Zoë Öst", "öst"), vec![(4, 7)]);
    }

    #[test]
    fn pad_column_truncates() {
        assert_eq!(pad_column("Premium Wireless Headphones", 10), "Premium...");
        assert_eq!(pad_column("Tom", 5), "Tom  ");
    }
}
