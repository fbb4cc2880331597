use std::{collections::BTreeSet, sync::Arc};

use adversarial_search::{AgentIndex, TurnBasedGame, MAXIMIZING_AGENT};
use itertools::Itertools;
use tracing::trace;

use crate::{Direction, Position};

/// Every runner move costs this much
pub const TIME_PENALTY: i32 = 1;
/// Eating a food pellet
pub const FOOD_REWARD: i32 = 10;
/// Eating the last food pellet, on top of [FOOD_REWARD]
pub const WIN_REWARD: i32 = 500;
/// Running into a ghost that isn't scared
pub const LOSE_PENALTY: i32 = 500;
/// Catching a scared ghost
pub const GHOST_REWARD: i32 = 200;
/// How many of its own moves a ghost stays scared for after the runner eats a capsule
pub const SCARED_TIME: u32 = 40;

/// The runner is always the maximizing agent
pub const RUNNER: AgentIndex = MAXIMIZING_AGENT;

#[derive(Debug, PartialEq, Eq)]
pub struct Walls {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Walls {
    pub(crate) fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), width * height);

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Anything off the board counts as a wall
    pub fn is_wall(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return true;
        }

        let (x, y) = (position.x as usize, position.y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }

        self.cells[y * self.width + x]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub position: Position,
    /// Where the ghost goes back to after it is caught
    pub start: Position,
    pub scared_timer: u32,
    /// The last direction this ghost moved in
    pub heading: Direction,
}

impl Ghost {
    fn new(start: Position) -> Self {
        Self {
            position: start,
            start,
            scared_timer: 0,
            heading: Direction::Stop,
        }
    }

    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win,
    Lose,
}

/// One snapshot of a chase. The runner is agent 0 and ghost `i` is agent `i + 1`
///
/// Snapshots are cheap to clone, the walls are shared between all states of one game.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    walls: Arc<Walls>,
    food: BTreeSet<Position>,
    capsules: BTreeSet<Position>,
    runner: Position,
    ghosts: Vec<Ghost>,
    score: i32,
    outcome: Option<Outcome>,
}

impl Maze {
    pub(crate) fn new(
        walls: Walls,
        food: BTreeSet<Position>,
        capsules: BTreeSet<Position>,
        runner: Position,
        ghost_starts: Vec<Position>,
    ) -> Self {
        Self {
            walls: Arc::new(walls),
            food,
            capsules,
            runner,
            ghosts: ghost_starts.into_iter().map(Ghost::new).collect(),
            score: 0,
            outcome: None,
        }
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn runner(&self) -> Position {
        self.runner
    }

    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn food_count(&self) -> usize {
        self.food.len()
    }

    pub fn has_food(&self, position: &Position) -> bool {
        self.food.contains(position)
    }

    pub fn has_capsule(&self, position: &Position) -> bool {
        self.capsules.contains(position)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    pub fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    /// Manhattan distance from `from` to the nearest food pellet, ignoring walls
    pub fn closest_food_distance(&self, from: &Position) -> Option<u32> {
        self.food.iter().map(|f| f.manhattan_distance(from)).min()
    }

    /// True if a ghost that would end the game is standing on `position`
    pub fn is_threatened(&self, position: &Position) -> bool {
        self.ghosts
            .iter()
            .any(|g| g.position == *position && !g.is_scared())
    }

    fn runner_actions(&self) -> Vec<Direction> {
        Direction::MOVING
            .into_iter()
            .filter(|d| !self.walls.is_wall(self.runner.step(*d)))
            .chain(std::iter::once(Direction::Stop))
            .collect()
    }

    /// Ghosts keep moving and don't turn back unless they are in a dead end
    fn ghost_actions(&self, ghost: &Ghost) -> Vec<Direction> {
        let mut open = Direction::MOVING
            .into_iter()
            .filter(|d| !self.walls.is_wall(ghost.position.step(*d)))
            .collect_vec();

        if open.is_empty() {
            return vec![Direction::Stop];
        }

        if open.len() > 1 {
            let reverse = ghost.heading.reverse();
            open.retain(|d| *d != reverse);
        }

        open
    }

    fn move_runner(&mut self, direction: Direction) {
        let next = self.runner.step(direction);
        if !self.walls.is_wall(next) {
            self.runner = next;
        }

        self.score -= TIME_PENALTY;

        if self.food.remove(&self.runner) {
            self.score += FOOD_REWARD;

            if self.food.is_empty() {
                self.score += WIN_REWARD;
                self.outcome = Some(Outcome::Win);
                return;
            }
        }

        if self.capsules.remove(&self.runner) {
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        self.resolve_collisions();
    }

    fn move_ghost(&mut self, index: usize, direction: Direction) {
        let ghost = match self.ghosts.get_mut(index) {
            Some(g) => g,
            None => return,
        };

        let next = ghost.position.step(direction);
        if !self.walls.is_wall(next) {
            ghost.position = next;
        }
        ghost.heading = direction;
        ghost.scared_timer = ghost.scared_timer.saturating_sub(1);

        self.resolve_collisions();
    }

    fn resolve_collisions(&mut self) {
        for ghost in self.ghosts.iter_mut() {
            if ghost.position != self.runner {
                continue;
            }

            if ghost.is_scared() {
                trace!(at = %self.runner, "caught a scared ghost");
                self.score += GHOST_REWARD;
                *ghost = Ghost::new(ghost.start);
            } else {
                self.score -= LOSE_PENALTY;
                self.outcome = Some(Outcome::Lose);
                return;
            }
        }
    }
}

impl TurnBasedGame for Maze {
    type Action = Direction;

    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> Vec<Direction> {
        if self.outcome.is_some() {
            return vec![];
        }

        if agent == RUNNER {
            return self.runner_actions();
        }

        self.ghosts
            .get(agent - 1)
            .map(|g| self.ghost_actions(g))
            .unwrap_or_default()
    }

    fn successor(&self, agent: AgentIndex, action: &Direction) -> Self {
        let mut next = self.clone();
        if next.outcome.is_some() {
            return next;
        }

        if agent == RUNNER {
            next.move_runner(*action);
        } else {
            next.move_ghost(agent - 1, *action);
        }

        next
    }

    fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}
