//! A small grid chase game to drive [adversarial_search] with: one runner eating its way through
//! a maze while ghosts hunt it down.
//!
//! The runner is the maximizing agent (agent 0) and every ghost is an adversary. Mazes are
//! parsed from a plain text layout, see [layout].
//!
//! ```rust
//! use adversarial_search::{AlphaBetaSearch, SearchOptions};
//! use maze_chase::{score_evaluation, Direction, Maze};
//!
//! let maze: Maze = "
//!     %%%%%
//!     %P.G%
//!     %%%%%
//! "
//! .parse()
//! .unwrap();
//!
//! let search = AlphaBetaSearch::new(score_evaluation, SearchOptions::with_depth(2));
//! assert_eq!(search.choose_action(&maze).unwrap(), Some(Direction::East));
//! ```

pub mod layout;
pub use layout::LayoutError;

mod position;
pub use position::{Direction, Position};

mod maze;
pub use maze::{
    Ghost, Maze, Walls, FOOD_REWARD, GHOST_REWARD, LOSE_PENALTY, RUNNER, SCARED_TIME,
    TIME_PENALTY, WIN_REWARD,
};

mod eval;
pub use eval::{better_evaluation, score_evaluation, Heuristic, UnknownHeuristic};

mod reflex;
pub use reflex::ReflexAgent;
