use crate::config::DisplayConfig;
use crate::game::{Board, Cell, PlayerId, COLS};

/// Glyph for one cell.
pub fn cell_glyph(cell: Cell, display: &DisplayConfig) -> &str {
    match cell {
        Cell::Empty => &display.empty,
        Cell::Owner(PlayerId::One) => &display.player_one,
        Cell::Owner(PlayerId::Two) => &display.player_two,
    }
}

/// Render the grid top row first, with column labels 1-7 above it.
pub fn board_to_text(board: &Board, display: &DisplayConfig) -> String {
    let separator = format!("+{}", "----+".repeat(COLS));

    let header: String = (1..=COLS).map(|col| format!("  {col}  ")).collect();
    let mut lines = vec![header.trim_end().to_string(), separator.clone()];

    for row in board.rows_top_down() {
        let mut line = String::from("|");
        for &cell in row {
            line.push(' ');
            line.push_str(cell_glyph(cell, display));
            line.push_str(" |");
        }
        lines.push(line);
        lines.push(separator.clone());
    }

    lines.join("\n")
}
