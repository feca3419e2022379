use super::board::Cell;

/// One of the two sides. Red moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The opposing player.
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The cell value this player's pieces occupy.
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Red.opponent(), Player::Yellow);
        assert_eq!(Player::Yellow.opponent(), Player::Red);
    }

    #[test]
    fn test_to_cell_is_distinct_from_empty() {
        assert_ne!(Player::Red.to_cell(), Cell::Empty);
        assert_ne!(Player::Yellow.to_cell(), Cell::Empty);
        assert_ne!(Player::Red.to_cell(), Player::Yellow.to_cell());
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Red.name(), "Red");
        assert_eq!(Player::Yellow.name(), "Yellow");
    }
}
