//! The three ways this crate models the adversaries.
//!
//! Every strategy walks the tree the same way: the turn/depth controller in [crate::route]
//! decides whether a node is scored or expanded, the maximizing agent always takes the highest
//! value among its moves, and ties go to the move listed first. The strategies only differ in
//! what happens on an adversary's turn, which is what [AdversaryRule] captures.
//!
//! - [Minimax]: the adversary takes the lowest value
//! - [AlphaBeta]: the same as [Minimax], but both the adversaries and the maximizing agent stop
//!   looking at moves once the alpha/beta bounds prove the rest can't matter
//! - [Expectimax]: the adversary picks uniformly at random, so its value is the mean of its moves
//!
//! When the strategy is only known at runtime (from a config file, say) use [StrategyKind].
//!
//! ```rust
//! use adversarial_search::{SearchOptions, StrategyKind, TurnBasedGame};
//!
//! #[derive(Debug, Clone)]
//! struct Coin(Option<bool>);
//!
//! impl TurnBasedGame for Coin {
//!     type Action = bool;
//!
//!     fn num_agents(&self) -> usize {
//!         2
//!     }
//!
//!     fn legal_actions(&self, _agent: usize) -> Vec<bool> {
//!         vec![true, false]
//!     }
//!
//!     fn successor(&self, _agent: usize, action: &bool) -> Self {
//!         Coin(Some(*action))
//!     }
//!
//!     fn is_terminal(&self) -> bool {
//!         false
//!     }
//! }
//!
//! let kind: StrategyKind = "expectimax".parse().unwrap();
//! let outcome = kind
//!     .search(&Coin(None), |coin: &Coin| if coin.0 == Some(true) { 1.0 } else { 0.0 }, SearchOptions::with_depth(1))
//!     .unwrap();
//!
//! assert_eq!(outcome.value, 0.5);
//! ```

use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    AdversarialSearch, AgentIndex, Bounds, PlyIndex, Result, Scorable, SearchError,
    SearchOptions, SearchOutcome, SearchStats, TurnBasedGame,
};

mod alpha_beta;
pub use alpha_beta::AlphaBeta;

mod expectimax;
pub use expectimax::Expectimax;

mod minimax;
pub use minimax::Minimax;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Minimax {}
    impl Sealed for super::AlphaBeta {}
    impl Sealed for super::Expectimax {}
}

/// How a strategy values a node where an adversary is to move
///
/// This trait is sealed, the three strategies in this module are the only implementations.
pub trait AdversaryRule: sealed::Sealed + fmt::Debug + Copy + Default + Send + Sync {
    /// Which strategy this is
    const KIND: StrategyKind;

    /// Whether the maximizing agent may stop looking at its moves once it is worth more than
    /// `beta`
    const PRUNES: bool;

    /// The value of the node (`game`, `agent`, `ply`), where `agent` is an adversary
    ///
    /// Children are valued through the search so that they pass through the turn/depth
    /// controller, with `agent + 1` and the same `ply`.
    fn adversary_value<GameType, ScorableType>(
        search: &AdversarialSearch<ScorableType, Self>,
        game: &GameType,
        agent: AgentIndex,
        ply: PlyIndex,
        bounds: Bounds,
        stats: &mut SearchStats,
    ) -> Result<f64>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>;
}

/// The strategies, for picking one at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// See [Minimax]
    Minimax,
    /// See [AlphaBeta]
    AlphaBeta,
    /// See [Expectimax]
    Expectimax,
}

impl StrategyKind {
    /// Every strategy
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Minimax,
        StrategyKind::AlphaBeta,
        StrategyKind::Expectimax,
    ];

    /// The name this strategy is parsed from and displayed as
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Minimax => "minimax",
            StrategyKind::AlphaBeta => "alpha-beta",
            StrategyKind::Expectimax => "expectimax",
        }
    }

    /// Run this strategy from `root`
    ///
    /// This builds the matching [AdversarialSearch] and calls [AdversarialSearch::search()]
    pub fn search<GameType, ScorableType>(
        self,
        root: &GameType,
        score_function: ScorableType,
        options: SearchOptions,
    ) -> Result<SearchOutcome<GameType::Action>>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>,
    {
        match self {
            StrategyKind::Minimax => {
                AdversarialSearch::<_, Minimax>::new(score_function, options).search(root)
            }
            StrategyKind::AlphaBeta => {
                AdversarialSearch::<_, AlphaBeta>::new(score_function, options).search(root)
            }
            StrategyKind::Expectimax => {
                AdversarialSearch::<_, Expectimax>::new(score_function, options).search(root)
            }
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" | "alpha_beta" => Ok(StrategyKind::AlphaBeta),
            "expectimax" => Ok(StrategyKind::Expectimax),
            _ => Err(SearchError::UnknownStrategy {
                name: s.to_owned(),
                expected: StrategyKind::ALL.iter().join(", "),
            }),
        }
    }
}
