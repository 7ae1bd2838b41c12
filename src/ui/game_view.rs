use crate::config::DisplayConfig;
use crate::game::{Board, Cell, Game, PlayerId, COLS};
use crate::session::cell_glyph;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, Phase};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board or name prompt
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    match app.phase() {
        Phase::Naming { seat, input, .. } => {
            render_header(frame, "Who is playing?".to_string(), Color::White, chunks[0]);
            render_name_prompt(frame, *seat, input, chunks[1]);
        }
        Phase::Playing {
            game,
            selected_column,
        } => {
            let active = game.active_player();
            let status = format!("{}'s turn  |  Round {}", active.name(), game.round());
            render_header(frame, status, player_color(active.id()), chunks[0]);
            render_board(frame, game.board(), app.display(), Some(*selected_column), chunks[1]);
        }
        Phase::Finished { game } => {
            render_header(frame, "Game Over".to_string(), result_color(game), chunks[0]);
            render_board(frame, game.board(), app.display(), None, chunks[1]);
        }
    }

    render_message(frame, app.message(), chunks[2]);
    render_controls(frame, app, chunks[3]);
}

fn player_color(id: PlayerId) -> Color {
    match id {
        PlayerId::One => Color::Red,
        PlayerId::Two => Color::Blue,
    }
}

fn result_color(game: &Game) -> Color {
    match game.board().winner() {
        Some(id) => player_color(id),
        None => Color::White,
    }
}

fn render_header(frame: &mut Frame, status: String, color: Color, area: Rect) {
    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_name_prompt(frame: &mut Frame, seat: PlayerId, input: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("What's player {seat} name?"),
            Style::default()
                .fg(player_color(seat))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(input.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ]),
    ];

    let prompt = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(prompt, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    display: &DisplayConfig,
    selected_column: Option<usize>,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if Some(col) == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    // Top row first
    for row in board.rows_top_down() {
        let mut row_spans = vec![Span::raw("  ║")];

        for &cell in row {
            // Glyphs are two columns wide, so each cell stays three wide.
            let color = match cell {
                Cell::Empty => Color::DarkGray,
                Cell::Owner(id) => player_color(id),
            };
            let symbol = format!(" {}", cell_glyph(cell, display));
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    if let Some(selected) = selected_column {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..COLS {
            if col == selected {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, app: &App, area: Rect) {
    let help = match app.phase() {
        Phase::Naming { .. } => "Type a name  |  Enter: Confirm  |  Esc: Quit",
        Phase::Playing { .. } => "←/→: Move  |  Enter/1-7: Drop  |  Q/Esc: Quit",
        Phase::Finished { .. } if app.offer_replay() => "Y: New game  |  N/Esc: Quit",
        Phase::Finished { .. } => "N/Esc: Quit",
    };

    let controls = Paragraph::new(Line::from(help))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 22)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_name_prompt_is_drawn() {
        let app = App::new(true, DisplayConfig::default());
        let screen = draw(&app);
        assert!(screen.contains("What's player 1 name?"));
        assert!(screen.contains("Esc: Quit"));
    }

    #[test]
    fn test_board_and_turn_are_drawn() {
        let mut app = App::new(true, DisplayConfig::default());
        for code in "Ada\nGrace\n4".chars().map(|c| match c {
            '\n' => KeyCode::Enter,
            c => KeyCode::Char(c),
        }) {
            app.handle_key(KeyEvent::from(code));
        }
        let screen = draw(&app);
        assert!(screen.contains("Grace's turn"));
        assert!(screen.contains("Round 1"));
        assert!(screen.contains("\u{1F534}"));
    }

    #[test]
    fn test_board_uses_configured_glyphs() {
        let display = DisplayConfig {
            player_one: "XX".into(),
            player_two: "OO".into(),
            empty: "..".into(),
        };
        let mut app = App::new(true, display);
        for code in "Ada\nGrace\n4".chars().map(|c| match c {
            '\n' => KeyCode::Enter,
            c => KeyCode::Char(c),
        }) {
            app.handle_key(KeyEvent::from(code));
        }
        let screen = draw(&app);
        assert!(screen.contains("XX"));
        assert!(screen.contains(".."));
        assert!(!screen.contains("OO"));
    }
}
