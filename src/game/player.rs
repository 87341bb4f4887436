use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The player occupying a cell, if any
    pub fn from_cell(cell: Cell) -> Option<Player> {
        match cell {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::X.other(), Player::O);
        assert_eq!(Player::O.other(), Player::X);
    }

    #[test]
    fn test_cell_conversions() {
        assert_eq!(Player::X.to_cell(), Cell::X);
        assert_eq!(Player::from_cell(Cell::O), Some(Player::O));
        assert_eq!(Player::from_cell(Cell::Empty), None);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::X.name(), "X");
        assert_eq!(Player::O.name(), "O");
    }
}
