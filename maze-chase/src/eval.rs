//! Leaf evaluators for [Maze], meant to be handed to a search
//!
//! ```rust
//! use adversarial_search::{ExpectimaxSearch, SearchOptions};
//! use maze_chase::{Heuristic, Maze};
//!
//! let maze: Maze = "%%%%%\n%P.G%\n%%%%%".parse().unwrap();
//! let heuristic: Heuristic = "better".parse().unwrap();
//!
//! let search = ExpectimaxSearch::new(heuristic, SearchOptions::with_depth(1));
//! assert!(search.choose_action(&maze).unwrap().is_some());
//! ```

use std::{fmt, str::FromStr};

use adversarial_search::Scorable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Maze;

/// Added to distances before dividing so that standing on food doesn't divide by zero
const DISTANCE_EPSILON: f64 = 0.0001;

const FOOD_WEIGHT: f64 = 10.0;
const SCORE_WEIGHT: f64 = 5.0;

/// The game's own score
pub fn score_evaluation(maze: &Maze) -> f64 {
    maze.score() as f64
}

/// Rewards being close to food on top of the score, and treats being caught as the worst
/// possible outcome
pub fn better_evaluation(maze: &Maze) -> f64 {
    let runner = maze.runner();
    if maze.is_threatened(&runner) {
        return f64::NEG_INFINITY;
    }

    let food_term = match maze.closest_food_distance(&runner) {
        Some(distance) => FOOD_WEIGHT / (distance as f64 + DISTANCE_EPSILON),
        None => 0.0,
    };

    food_term + SCORE_WEIGHT * maze.score() as f64
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown heuristic `{0}`, expected `score` or `better`")]
pub struct UnknownHeuristic(String);

/// The evaluators by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// [score_evaluation]
    #[default]
    Score,
    /// [better_evaluation]
    Better,
}

impl Heuristic {
    pub fn as_fn(self) -> fn(&Maze) -> f64 {
        match self {
            Heuristic::Score => score_evaluation,
            Heuristic::Better => better_evaluation,
        }
    }
}

impl Scorable<Maze> for Heuristic {
    fn score(&self, maze: &Maze) -> f64 {
        (self.as_fn())(maze)
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Score => f.write_str("score"),
            Heuristic::Better => f.write_str("better"),
        }
    }
}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "score" => Ok(Heuristic::Score),
            "better" => Ok(Heuristic::Better),
            _ => Err(UnknownHeuristic(s.to_owned())),
        }
    }
}
