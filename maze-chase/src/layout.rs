//! The text format mazes are written in
//!
//! | char | meaning  |
//! |------|----------|
//! | `%`  | wall     |
//! | `.`  | food     |
//! | `o`  | capsule  |
//! | `P`  | runner   |
//! | `G`  | ghost    |
//! | ` `  | empty    |
//!
//! Whitespace around each line is ignored so layouts can be indented, and so are blank lines.
//! Ghosts are numbered in reading order, the first `G` is agent 1.

use std::{collections::BTreeSet, fmt, str::FromStr};

use itertools::Itertools;
use thiserror::Error;

use crate::{Maze, Position, Walls};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("the layout is empty")]
    Empty,
    #[error("row {row} is {found} cells wide, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown tile {tile:?} at row {row}, column {column}")]
    UnknownTile { tile: char, row: usize, column: usize },
    #[error("the layout has no runner")]
    MissingRunner,
    #[error("the layout has more than one runner")]
    MultipleRunners,
    #[error("the layout has no ghosts")]
    NoGhosts,
}

impl FromStr for Maze {
    type Err = LayoutError;

    fn from_str(layout: &str) -> Result<Self, Self::Err> {
        let rows = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();

        let width = match rows.first() {
            Some(first) => first.chars().count(),
            None => return Err(LayoutError::Empty),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        let mut food = BTreeSet::new();
        let mut capsules = BTreeSet::new();
        let mut runner = None;
        let mut ghosts = vec![];

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::Ragged {
                    row,
                    expected: width,
                    found,
                });
            }

            for (column, tile) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                cells.push(tile == '%');

                match tile {
                    '%' | ' ' => {}
                    '.' => {
                        food.insert(position);
                    }
                    'o' => {
                        capsules.insert(position);
                    }
                    'P' => {
                        if runner.replace(position).is_some() {
                            return Err(LayoutError::MultipleRunners);
                        }
                    }
                    'G' => ghosts.push(position),
                    _ => return Err(LayoutError::UnknownTile { tile, row, column }),
                }
            }
        }

        let runner = runner.ok_or(LayoutError::MissingRunner)?;
        if ghosts.is_empty() {
            return Err(LayoutError::NoGhosts);
        }

        Ok(Maze::new(
            Walls::new(width, rows.len(), cells),
            food,
            capsules,
            runner,
            ghosts,
        ))
    }
}

/// Draws the current state in the layout format. Ghosts are drawn where they are now, on top of
/// any food under them
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let walls = self.walls();

        for y in 0..walls.height() {
            if y > 0 {
                writeln!(f)?;
            }

            for x in 0..walls.width() {
                let position = Position::new(x as i32, y as i32);

                let tile = if walls.is_wall(position) {
                    '%'
                } else if self.ghosts().iter().any(|g| g.position == position) {
                    'G'
                } else if self.runner() == position {
                    'P'
                } else if self.has_food(&position) {
                    '.'
                } else if self.has_capsule(&position) {
                    'o'
                } else {
                    ' '
                };

                write!(f, "{}", tile)?;
            }
        }

        Ok(())
    }
}
