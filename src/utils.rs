use unicode_width::UnicodeWidthStr;

/// Shortens `s` to at most `max_len` chars, ending with `...` when cut.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Horizontal scroll for a single-line input of `width` columns that keeps
/// the cursor (a char index into `text`) visible.
/// Returns `(scroll_x, cursor_column)`, both in terminal columns.
pub fn single_line_scroll(text: &str, cursor_index: usize, width: usize) -> (u16, u16) {
    if width == 0 {
        return (0, 0);
    }
    let before_cursor: String = text.chars().take(cursor_index).collect();
    let cursor_x = before_cursor.width();

    let (scroll, column) = if cursor_x < width {
        (0, cursor_x)
    } else {
        (cursor_x + 1 - width, width - 1)
    };
    (
        u16::try_from(scroll).unwrap_or(u16::MAX),
        u16::try_from(column).unwrap_or(u16::MAX),
    )
}
