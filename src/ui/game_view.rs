use crate::game::{Board, Cell, GameState, Player, SIDE};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_cell: usize,
    ai_pending: bool,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, ai_pending, chunks[0]);
    render_board(frame, game_state.board(), selected_cell, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, game_state.vs_ai(), chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Cyan,
        Player::O => Color::Magenta,
    }
}

fn status_line(game_state: &GameState, ai_pending: bool) -> String {
    if let Some(winner) = game_state.winner() {
        format!("Winner: {}", winner.name())
    } else if game_state.is_draw() {
        "It's a draw!".to_string()
    } else if game_state.vs_ai() {
        if ai_pending {
            "AI thinking...".to_string()
        } else {
            "Your turn (X)".to_string()
        }
    } else {
        format!("Next player: {}", game_state.current_player().name())
    }
}

fn render_header(
    frame: &mut Frame,
    game_state: &GameState,
    ai_pending: bool,
    area: ratatui::layout::Rect,
) {
    let mode = if game_state.vs_ai() {
        "Vs AI"
    } else {
        "Two Players"
    };

    let color = match game_state.winner() {
        Some(winner) => player_color(winner),
        None if game_state.is_draw() => Color::DarkGray,
        None => player_color(game_state.current_player()),
    };

    let status = format!("{}  |  {}", status_line(game_state, ai_pending), mode);

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Tic-Tac-Toe"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_cell: usize,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    lines.push(Line::from("┌───┬───┬───┐"));

    for row in 0..SIDE {
        let mut row_spans = vec![Span::raw("│")];

        for col in 0..SIDE {
            let idx = row * SIDE + col;
            let cell = board.get(idx);
            let (symbol, color) = match cell {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::X => (" X ", Color::Cyan),
                Cell::O => (" O ", Color::Magenta),
            };

            let mut style = Style::default().fg(color);
            if idx == selected_cell {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }

            row_spans.push(Span::styled(symbol, style));
            row_spans.push(Span::raw("│"));
        }

        lines.push(Line::from(row_spans));

        if row < SIDE - 1 {
            lines.push(Line::from("├───┼───┼───┤"));
        }
    }

    lines.push(Line::from("└───┴───┴───┘"));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, vs_ai: bool, area: ratatui::layout::Rect) {
    let line1 = Line::from("←↑↓→: Move  |  Enter: Place  |  R: Restart  |  Q: Quit");
    let toggle_label = if vs_ai { "Two Players" } else { "Play vs AI" };
    let line2 = Line::from(vec![
        Span::styled("M", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(": {}", toggle_label)),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
