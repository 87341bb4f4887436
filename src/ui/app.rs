use crate::ai::{Agent, RandomAgent};
use crate::config::AppConfig;
use crate::game::{GameState, CELLS, SIDE};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// An AI reply scheduled to land once the move delay has passed.
/// At most one exists at a time; reset and mode toggle cancel it.
struct PendingReply {
    cell: usize,
    due: Instant,
}

pub struct App {
    game_state: GameState,
    agent: RandomAgent,
    selected_cell: usize,
    pending_reply: Option<PendingReply>,
    should_quit: bool,
    message: Option<String>,
    move_delay: Duration,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &AppConfig, vs_ai: bool) -> Self {
        App {
            game_state: GameState::with_mode(vs_ai),
            agent: RandomAgent::new(),
            selected_cell: 4, // Start at center
            pending_reply: None,
            should_quit: false,
            message: None,
            move_delay: Duration::from_millis(config.ai.move_delay_ms),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.apply_due_reply();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        let timeout = match &self.pending_reply {
            Some(reply) => reply
                .due
                .saturating_duration_since(Instant::now())
                .min(self.tick_rate),
            None => self.tick_rate,
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_cell % SIDE > 0 {
                    self.selected_cell -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_cell % SIDE < SIDE - 1 {
                    self.selected_cell += 1;
                }
            }
            KeyCode::Up => {
                if self.selected_cell >= SIDE {
                    self.selected_cell -= SIDE;
                }
            }
            KeyCode::Down => {
                if self.selected_cell + SIDE < CELLS {
                    self.selected_cell += SIDE;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_mark();
            }
            KeyCode::Char('r') => {
                self.game_state.reset();
                self.after_restart();
            }
            KeyCode::Char('m') => {
                // Flips the mode and resets the game in one step
                self.game_state.toggle_mode();
                self.after_restart();
            }
            _ => {}
        }
    }

    /// Place the current mark at the selected cell
    fn place_mark(&mut self) {
        if self.pending_reply.is_some() {
            // Reply is on the way; the human keeps waiting
            return;
        }

        if self.game_state.play(self.selected_cell).is_err() {
            // Occupied cell or finished game: ignored, not signalled
            return;
        }

        if self.game_state.vs_ai() && self.game_state.winner().is_none() {
            if let Some(cell) = self.agent.select_action(&self.game_state) {
                self.pending_reply = Some(PendingReply {
                    cell,
                    due: Instant::now() + self.move_delay,
                });
            }
        }

        self.announce_outcome();
    }

    /// Apply the scheduled AI reply once its deadline has passed
    fn apply_due_reply(&mut self) {
        let due = self
            .pending_reply
            .as_ref()
            .is_some_and(|reply| Instant::now() >= reply.due);
        if !due {
            return;
        }

        if let Some(reply) = self.pending_reply.take() {
            let _ = self.game_state.place_ai(reply.cell);
            self.announce_outcome();
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(winner) = self.game_state.winner() {
            self.message = Some(format!("{} wins!", winner.name()));
        } else if self.game_state.is_draw() {
            self.message = Some("It's a draw!".to_string());
        }
    }

    fn after_restart(&mut self) {
        self.pending_reply = None;
        self.selected_cell = 4;
        self.message = Some(if self.game_state.vs_ai() {
            "New game vs AI!".to_string()
        } else {
            "New game started!".to_string()
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_cell,
            self.pending_reply.is_some(),
            &self.message,
        );
    }
}
