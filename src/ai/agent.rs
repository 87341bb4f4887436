use crate::game::GameState;

/// Universal interface for move-selecting agents.
pub trait Agent {
    /// Select a cell to play on the current board, or `None` when no empty
    /// cell remains.
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
