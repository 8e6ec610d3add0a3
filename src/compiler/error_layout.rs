//! Fallback layout shown when a keyboard cannot be built.
//!
//! The layout is a fixed 4x4 grid:
//!
//! ```text
//! +------+-------------+------+
//! |      |   heading   |      |
//! +------+-------------+------+
//! |          detail           |
//! |                           |
//! +------+-------------+------+
//! |      |             | back |
//! +------+-------------+------+
//! ```

use crate::catalog::Catalogs;
use crate::compiler::placement::PlacementEngine;
use crate::constants::{BACK_STRING_KEY, BACK_SYMBOL, LINE_ENDING};
use crate::models::{CompiledKey, CompiledValue, PlacementGrid};

const ERROR_GRID_SIZE: i32 = 4;

/// Target number of lines for wrapped detail text.
const WRAP_LINES: f64 = 3.5;

/// Wraps a diagnostic into roughly three balanced lines.
///
/// Only the first line of `info` is kept. Words are packed greedily into
/// lines of about `len / 3.5` characters, separated by single spaces.
///
/// # Examples
///
/// ```
/// use dynkey::compiler::error_layout::wrap_detail;
///
/// let wrapped = wrap_detail("one two three four five six seven eight nine ten\nignored");
/// assert!(!wrapped.contains("ignored"));
/// assert!(wrapped.lines().count() >= 2);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn wrap_detail(info: &str) -> String {
    let first_line = info.lines().next().unwrap_or_default();
    let len = first_line.chars().count();
    if len == 0 {
        return String::new();
    }

    let max_line_length = len as f64 / WRAP_LINES;
    let mut char_count = 0usize;
    let mut lines: Vec<(usize, Vec<&str>)> = Vec::new();

    for word in first_line.split(' ') {
        char_count += word.chars().count() + 1;
        let line_idx = (char_count as f64 / max_line_length) as usize;

        match lines.last_mut() {
            Some((idx, words)) if *idx == line_idx => words.push(word),
            _ => lines.push((line_idx, vec![word])),
        }
    }

    lines
        .into_iter()
        .map(|(_, words)| words.join(" "))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

/// Builds the fixed error layout.
///
/// `show_output_panel` follows the definition's flag when one was parsed.
#[must_use]
pub fn build_error_layout(
    heading: &str,
    detail: &str,
    show_output_panel: bool,
    catalogs: Catalogs<'_>,
) -> PlacementGrid {
    let mut engine = PlacementEngine::new(ERROR_GRID_SIZE, ERROR_GRID_SIZE, show_output_panel);

    // Heading across the top middle
    engine.place(CompiledKey::blank().with_text(heading).with_span(1, 2), 0, 1);

    // Detail across the two middle rows
    engine.place(CompiledKey::blank().with_text(detail).with_span(2, 4), 1, 0);

    let mut back = CompiledKey::blank().with_text(catalogs.strings.lookup(BACK_STRING_KEY));
    back.symbol = catalogs.symbols.resolve_symbol(BACK_SYMBOL);
    back.value = CompiledValue::BackNavigation;
    engine.place(back, 3, 3);

    // Filler
    engine.place(CompiledKey::blank(), 0, 0);
    engine.place(CompiledKey::blank(), 0, 3);
    engine.place(CompiledKey::blank(), 3, 0);
    engine.place(CompiledKey::blank().with_span(1, 2), 3, 1);

    engine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{StringLookup, SymbolCatalog};
    use crate::models::{KeyText, Symbol};

    struct Fixed;

    impl SymbolCatalog for Fixed {
        fn resolve_symbol(&self, name: &str) -> Option<Symbol> {
            (name == "BackIcon").then(|| Symbol::new(name, "M0,0Z"))
        }
    }

    impl StringLookup for Fixed {
        fn lookup(&self, key: &str) -> String {
            format!("<{key}>")
        }
    }

    fn layout(show_output_panel: bool) -> PlacementGrid {
        build_error_layout(
            "Heading",
            "Detail",
            show_output_panel,
            Catalogs::new(&Fixed, &Fixed),
        )
    }

    #[test]
    fn test_fixed_shape() {
        let grid = layout(false);
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);

        let shape: Vec<_> = grid
            .placements()
            .iter()
            .map(|p| (p.row, p.col, p.row_span, p.col_span))
            .collect();
        assert_eq!(
            shape,
            vec![
                (0, 0, 1, 1),
                (0, 1, 1, 2),
                (0, 3, 1, 1),
                (1, 0, 2, 4),
                (3, 0, 1, 1),
                (3, 1, 1, 2),
                (3, 3, 1, 1),
            ]
        );
    }

    #[test]
    fn test_texts_and_back_key() {
        let grid = layout(false);

        assert_eq!(
            grid.placement_at(0, 1).unwrap().key.text,
            KeyText::Plain("Heading".to_string())
        );
        assert_eq!(
            grid.placement_at(1, 0).unwrap().key.text,
            KeyText::Plain("Detail".to_string())
        );

        let back = &grid.placement_at(3, 3).unwrap().key;
        assert_eq!(back.value, CompiledValue::BackNavigation);
        assert_eq!(back.text, KeyText::Plain("<BACK>".to_string()));
        assert_eq!(back.symbol.as_ref().unwrap().name, "BackIcon");

        for (row, col) in [(0, 0), (0, 3), (3, 0), (3, 1)] {
            let filler = &grid.placement_at(row, col).unwrap().key;
            assert_eq!(filler.value, CompiledValue::Empty);
            assert_eq!(filler.text, KeyText::Blank);
        }
    }

    #[test]
    fn test_output_panel_flag_passed_through() {
        assert!(!layout(false).output_row.visible);
        assert!(layout(true).output_row.visible);
    }

    #[test]
    fn test_wrap_keeps_first_line_only() {
        assert_eq!(wrap_detail("short\r\nsecond line"), "short");
        assert_eq!(wrap_detail(""), "");
        assert_eq!(wrap_detail("\nonly second"), "");
    }

    #[test]
    fn test_wrap_preserves_words_and_single_spaces() {
        let input = "Failed to parse keyboard file keyboards/main.json as JSON: expected value at line 1 column 9";
        let wrapped = wrap_detail(input);
        assert_eq!(wrapped.replace(LINE_ENDING, " "), input);
    }

    #[test]
    fn test_wrap_line_count_near_three() {
        let word = "abcd";
        for words in 6..60 {
            let input = vec![word; words].join(" ");
            let lines = wrap_detail(&input).split(LINE_ENDING).count();
            assert!(
                (2..=4).contains(&lines),
                "{} chars wrapped into {} lines",
                input.len(),
                lines
            );
        }
    }
}
