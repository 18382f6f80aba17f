#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub col: i32,
    pub row: i32,
}

impl Point {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn offset_by(&self, direction: Direction) -> Point {
        let (dc, dr) = direction.offset();
        Point::new(self.col + dc, self.row + dr)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
                | (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
        )
    }

    /// Unit offset as (column delta, row delta); row grows downward.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Idle,
    Running,
    Ended,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Moved {
        snake: Vec<Point>,
        score: u32,
        ate_food: bool,
    },
    FoodPlaced {
        position: Point,
    },
    GameOver {
        final_score: u32,
    },
}

/// Per-tick summary for embedders that poll instead of subscribing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub new_head: Point,
    pub ate_food: bool,
    pub collided: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(!Direction::Left.is_opposite(Direction::Up));
        assert!(!Direction::Down.is_opposite(Direction::Down));
    }

    #[test]
    fn test_offset_by_moves_one_cell() {
        let head = Point::new(6, 6);

        assert_eq!(head.offset_by(Direction::Left), Point::new(5, 6));
        assert_eq!(head.offset_by(Direction::Right), Point::new(7, 6));
        assert_eq!(head.offset_by(Direction::Up), Point::new(6, 5));
        assert_eq!(head.offset_by(Direction::Down), Point::new(6, 7));
    }
}
