//! Plain-text table layout for a rendered grid.

use datagrid_lib::column::Alignment;
use datagrid_lib::grid::GridView;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Pixels per terminal column when reading width hints.
const PIXELS_PER_CHAR: u32 = 10;
const MAX_COLUMN_WIDTH: usize = 40;
const SEPARATOR: &str = " │ ";

pub fn display_width(s: &str) -> usize {
    s.width()
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target_width = max_width - 1;
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push('…');
    result
}

fn align_offset(text_width: usize, available_width: usize, align: Alignment) -> usize {
    if text_width >= available_width {
        return 0;
    }

    match align {
        Alignment::Left => 0,
        Alignment::Center => (available_width - text_width) / 2,
        Alignment::Right => available_width - text_width,
    }
}

/// Truncates or pads `s` to exactly `width` terminal columns.
pub fn fit(s: &str, width: usize, align: Alignment) -> String {
    let text = truncate_to_width(s, width);
    let text_width = display_width(&text);
    let left = align_offset(text_width, width, align);
    let right = width.saturating_sub(text_width + left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Lays the view out as a header line, a rule and one line per row.
///
/// Column widths follow the widest content, bounded below by the column's
/// width hint and above by [`MAX_COLUMN_WIDTH`].
pub fn render(view: &GridView) -> String {
    let header: Vec<String> = view.header.iter().map(|h| h.node.to_plain_text()).collect();
    let rows: Vec<Vec<(String, Alignment)>> = view
        .rows
        .iter()
        .map(|row| {
            row.cells
                .iter()
                .map(|cell| (cell.node.to_plain_text(), cell.node.align()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = view
        .header
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let hint = cell.width.unwrap_or(cell.min_width) / PIXELS_PER_CHAR;
            let content = rows
                .iter()
                .filter_map(|r| r.get(i))
                .map(|(text, _)| display_width(text))
                .chain(std::iter::once(display_width(&header[i])))
                .max()
                .unwrap_or(0);
            content.min(MAX_COLUMN_WIDTH).max(hint as usize)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(
        view.header
            .iter()
            .zip(&header)
            .zip(&widths)
            .map(|((cell, text), &width)| fit(text, width, cell.align))
            .collect::<Vec<_>>()
            .join(SEPARATOR),
    );
    lines.push(
        widths
            .iter()
            .map(|&w| "─".repeat(w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    for row in &rows {
        lines.push(
            row.iter()
                .zip(&widths)
                .map(|((text, align), &width)| fit(text, width, *align))
                .collect::<Vec<_>>()
                .join(SEPARATOR),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use datagrid_lib::column::Column;
    use datagrid_lib::column::ColumnType;
    use datagrid_lib::grid::DataGrid;
    use datagrid_lib::model::Row;

    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn test_fit_alignment() {
        assert_eq!(fit("ab", 6, Alignment::Left), "ab    ");
        assert_eq!(fit("ab", 6, Alignment::Center), "  ab  ");
        assert_eq!(fit("ab", 6, Alignment::Right), "    ab");
    }

    #[test]
    fn test_render_grid() {
        let columns = vec![
            Column::new("name", "Name").min_width(0).sortable(false),
            Column::new("age", "Age").kind(ColumnType::Number).min_width(0).sortable(false),
        ];
        let rows = vec![Row::new(1).set("name", "Jon").set("age", 14)];
        let grid = DataGrid::uncontrolled(columns, rows).unwrap();

        let text = render(&grid.render());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Name │ Age");
        assert_eq!(lines[1], "─────┼────");
        assert_eq!(lines[2], "Jon  │ 14 ");
    }
}
