use crate::TableView;

/// Glyph for a card that is face-down.
pub const HIDDEN_GLYPH: char = '■';

/// Renders the table as text, with column indices on top and row indices on the left.
///
/// ```text
///   0 1 2
/// 0 ■ A ■
/// 1 ■ ■
/// 2 ■ A ■
/// ```
pub fn visualize_table(view: &TableView<'_>) -> String {
    let size = view.size();
    let margin = size.saturating_sub(1).to_string().len();

    let mut result = format!("{:margin$}", "");
    for x in 0..size {
        result += &format!(" {}", x);
    }
    for (idx, point) in view.points().enumerate() {
        if point.x == 0 {
            if idx > 0 {
                // No trailing spaces after an empty last cell
                let trimmed = result.trim_end().len();
                result.truncate(trimmed);
            }
            result += &format!("\n{:>margin$}", point.y);
        }
        result.push(' ');
        if view.is_empty(point) {
            result.push(' ');
        } else if let Some(symbol) = view.visible_symbol(point) {
            result += &symbol.to_string();
        } else {
            result.push(HIDDEN_GLYPH);
        }
    }
    let trimmed = result.trim_end().len();
    result.truncate(trimmed);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Point, Table};

    #[test]
    fn hidden_revealed_and_empty_cells() {
        let board: Board = "BAC\nC..\nAB.".parse().unwrap();
        let mut table = Table::new(&board);
        table.flip(&board, Point::new(1, 0)).unwrap();
        table.mark_matched(Point::new(0, 2), Point::new(1, 0));
        let rendered = visualize_table(&TableView::new(&board, &table));
        assert_eq!(rendered, "  0 1 2\n0 ■ A ■\n1 ■\n2 A ■");
    }

    #[test]
    fn wide_row_indices() {
        let board: Board = "AABBCCDDEE\nFFGGHHIIJJ\nKKLLMMNNOO\nPPQQRRSSTT\nUUVVWWXXYY\nZZaabbccdd\neeffgghhii\njjkkllmmnn\nooppqqrrss\nttuuvvwwxx"
            .parse()
            .unwrap();
        let table = Table::new(&board);
        let rendered = visualize_table(&TableView::new(&board, &table));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "  0 1 2 3 4 5 6 7 8 9");
        assert_eq!(lines[1], "0 ■ ■ ■ ■ ■ ■ ■ ■ ■ ■");
        assert_eq!(lines.len(), 11);
    }
}
