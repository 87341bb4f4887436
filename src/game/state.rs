use super::board::Cell;
use super::{Board, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    CellOccupied,
    InvalidCell,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    vs_ai: bool,
}

impl GameState {
    /// Create initial game state in two-player mode
    pub fn initial() -> Self {
        Self::with_mode(false)
    }

    /// Create initial game state with the given AI-mode flag
    pub fn with_mode(vs_ai: bool) -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::X, // X starts
            vs_ai,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether single-player-vs-AI mode is active
    pub fn vs_ai(&self) -> bool {
        self.vs_ai
    }

    /// The winning player, derived from the board
    pub fn winner(&self) -> Option<Player> {
        self.board.winner().and_then(Player::from_cell)
    }

    /// Draw holds only when there is no winner and every cell is filled
    pub fn is_draw(&self) -> bool {
        self.winner().is_none() && self.board.is_full()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.board.is_full()
    }

    /// Get list of legal cells (empty, game not over)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board.empty_cells()
    }

    /// Apply a human move at the given cell.
    ///
    /// Places the mark of the player whose turn it is. The turn flag flips
    /// only in two-player mode; in AI mode the human keeps `X` and the AI
    /// reply is placed separately via [`place_ai`](Self::place_ai).
    pub fn play(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }

        self.board
            .place(cell, self.current_player.to_cell())
            .map_err(|e| match e {
                super::board::MoveError::CellOccupied => MoveError::CellOccupied,
                super::board::MoveError::InvalidCell => MoveError::InvalidCell,
            })?;

        if !self.vs_ai {
            self.current_player = self.current_player.other();
        }

        Ok(())
    }

    /// Place the AI's `O` at the given cell
    pub fn place_ai(&mut self, cell: usize) -> Result<(), MoveError> {
        if self.winner().is_some() {
            return Err(MoveError::GameOver);
        }

        self.board.place(cell, Cell::O).map_err(|e| match e {
            super::board::MoveError::CellOccupied => MoveError::CellOccupied,
            super::board::MoveError::InvalidCell => MoveError::InvalidCell,
        })
    }

    /// Clear the board and give `X` the move, keeping the mode
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
    }

    /// Flip AI mode and reset
    pub fn toggle_mode(&mut self) {
        self.vs_ai = !self.vs_ai;
        self.reset();
    }
}
