use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell in the maze. `x` grows to the east and `y` grows to the south, so row 0 is the top row
/// of a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn step(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();

        Position::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Stop,
}

impl Direction {
    /// The moving directions, in the order legal moves are listed
    pub const MOVING: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    fn delta(&self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::Stop => (0, 0),
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Stop => "stop",
        };

        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(
            Position::new(1, 1).manhattan_distance(&Position::new(4, -1)),
            5
        );
        assert_eq!(Position::new(3, 3).manhattan_distance(&Position::new(3, 3)), 0);
    }

    #[test]
    fn test_step() {
        let p = Position::new(2, 2);

        assert_eq!(p.step(Direction::North), Position::new(2, 1));
        assert_eq!(p.step(Direction::South), Position::new(2, 3));
        assert_eq!(p.step(Direction::East), Position::new(3, 2));
        assert_eq!(p.step(Direction::West), Position::new(1, 2));
        assert_eq!(p.step(Direction::Stop), p);
    }

    #[test]
    fn test_reverse() {
        for d in Direction::MOVING {
            assert_ne!(d.reverse(), d);
            assert_eq!(d.reverse().reverse(), d);
        }
        assert_eq!(Direction::Stop.reverse(), Direction::Stop);
    }
}
