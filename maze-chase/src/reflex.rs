use adversarial_search::TurnBasedGame;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use tracing::debug;

use crate::{Direction, Maze, RUNNER};

const DISTANCE_EPSILON: f64 = 0.0001;

/// Picks the runner's move by looking a single step ahead, with no model of the ghosts at all
///
/// Ties between the best moves are broken at random, so the agent owns its RNG
#[derive(Debug)]
pub struct ReflexAgent<R> {
    rng: R,
}

impl ReflexAgent<StdRng> {
    /// A reproducible agent
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Scores one runner move from `maze`
    ///
    /// Standing still and walking into a ghost that isn't scared are never worth anything,
    /// otherwise closer to the food that is on the board right now is better
    pub fn evaluate_action(&self, maze: &Maze, action: Direction) -> f64 {
        if action == Direction::Stop {
            return f64::NEG_INFINITY;
        }

        let next = maze.successor(RUNNER, &action);
        let position = next.runner();
        if next.is_threatened(&position) {
            return f64::NEG_INFINITY;
        }

        match maze.closest_food_distance(&position) {
            Some(distance) => 1.0 / (distance as f64 + DISTANCE_EPSILON),
            None => 0.0,
        }
    }

    /// Picks one of the best scoring legal moves at random. None if the runner can't move
    /// because the game is over
    pub fn choose_action(&mut self, maze: &Maze) -> Option<Direction> {
        let scored = maze
            .legal_actions(RUNNER)
            .into_iter()
            .map(|action| (action, self.evaluate_action(maze, action)))
            .collect_vec();

        let best = scored
            .iter()
            .map(|(_, score)| *score)
            .fold(f64::NEG_INFINITY, f64::max);

        let candidates = scored
            .into_iter()
            .filter(|(_, score)| *score == best)
            .map(|(action, _)| action)
            .collect_vec();

        let chosen = candidates.choose(&mut self.rng).copied();
        debug!(?chosen, best, candidates = candidates.len(), "reflex agent chose");

        chosen
    }
}
