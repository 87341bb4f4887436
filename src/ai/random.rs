use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from the empty cells.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministically seeded agent, for tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        let cells = state.board().empty_cells();
        if cells.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..cells.len());
        Some(cells[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, GameState};

    #[test]
    fn test_random_agent_selects_empty_cell() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();
        state.play(4).unwrap();
        state.play(0).unwrap();

        for _ in 0..100 {
            let cell = agent.select_action(&state).expect("board is not full");
            assert_eq!(state.board().get(cell), Cell::Empty, "cell {} is taken", cell);
        }
    }

    #[test]
    fn test_random_agent_full_board() {
        let mut agent = RandomAgent::new();
        let mut state = GameState::initial();

        // Fill the board to a draw
        for cell in [0, 2, 1, 3, 5, 4, 6, 8, 7] {
            state.play(cell).unwrap();
        }

        assert_eq!(agent.select_action(&state), None);
    }

    #[test]
    fn test_seeded_agent_is_deterministic() {
        let state = GameState::initial();

        let picks: Vec<Option<usize>> = (0..10)
            .map(|_| RandomAgent::with_seed(7).select_action(&state))
            .collect();

        assert!(picks.iter().all(|&pick| pick == picks[0]));
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let cell = if turn % 2 == 0 {
                agent1.select_action(&state).unwrap()
            } else {
                agent2.select_action(&state).unwrap()
            };
            state.play(cell).unwrap();
            turn += 1;
        }

        assert!(state.winner().is_some() || state.is_draw());
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
