#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! This crate implements depth limited adversarial search for turn based games with one
//! maximizing agent and any number of adversaries. You provide a game that implements
//! [TurnBasedGame] and a 'scoring' function that turns a game state into an `f64`.
//!
//! Three strategies are available and they all share the same turn/depth bookkeeping:
//!
//! - [Minimax] assumes every adversary picks the move that is worst for the maximizing agent
//! - [AlphaBeta] returns the same answer as [Minimax] but skips branches that can't change it
//! - [Expectimax] models every adversary as picking uniformly at random among its legal moves
//!
//! ```rust
//! use adversarial_search::{MinimaxSearch, SearchOptions, TurnBasedGame};
//!
//! // A single pile of stones. The maximizing agent takes one or two stones, the adversary
//! // always takes one. The game ends when the pile is empty.
//! #[derive(Debug, Clone)]
//! struct Pile(u8);
//!
//! impl TurnBasedGame for Pile {
//!     type Action = u8;
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, agent: usize) -> Vec<u8> {
//!         let most = if agent == 0 { 2 } else { 1 };
//!         (1..=most.min(self.0)).collect()
//!     }
//!
//!     fn successor(&self, _agent: usize, action: &u8) -> Self {
//!         Pile(self.0 - action)
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         self.0 == 0
//!     }
//! }
//!
//! // Fewer stones left is better for us
//! let search = MinimaxSearch::new(|pile: &Pile| -(pile.0 as f64), SearchOptions::with_depth(1));
//! let outcome = search.search(&Pile(5)).unwrap();
//!
//! assert_eq!(outcome.action, Some(2));
//! assert_eq!(outcome.value, -2.0);
//! ```

mod controller;
pub use controller::{route, Step};

mod error;
pub use error::{Result, SearchError};

mod game;
pub use game::{AgentIndex, PlyIndex, TurnBasedGame, MAXIMIZING_AGENT};

mod outcome;
pub use outcome::{SearchOutcome, SearchStats};

mod score;
pub use score::Scorable;

mod search;
pub use search::{
    AdversarialSearch, AlphaBetaSearch, Bounds, ExpectimaxSearch, MinimaxSearch, SearchOptions,
    DEFAULT_DEPTH,
};

pub mod strategy;
pub use strategy::{AdversaryRule, AlphaBeta, Expectimax, Minimax, StrategyKind};

#[cfg(test)]
mod test_tree;
