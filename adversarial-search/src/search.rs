use std::marker::PhantomData;

use derivative::Derivative;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, trace, warn};

use crate::{
    controller::{route, Step},
    AdversaryRule, AgentIndex, AlphaBeta, Expectimax, Minimax, PlyIndex, Result, Scorable,
    SearchError, SearchOutcome, SearchStats, TurnBasedGame, MAXIMIZING_AGENT,
};

/// Depth used when nothing else is configured
pub const DEFAULT_DEPTH: PlyIndex = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Optional properties that can be defined for an [AdversarialSearch]
///
/// The defaults (as implemented by [Default]) are as follows:
/// ```
/// use adversarial_search::SearchOptions;
///
/// let defaults: SearchOptions = Default::default();
///
/// assert_eq!(defaults.depth, 2);
/// ```
pub struct SearchOptions {
    /// How many plies to look ahead. A ply is one move from every agent
    ///
    /// A depth of 0 scores the root without expanding it
    ///
    /// Defaults to 2
    pub depth: PlyIndex,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

impl SearchOptions {
    /// Options with the given depth, and defaults for everything else
    pub fn with_depth(depth: PlyIndex) -> Self {
        Self {
            depth,
            ..Default::default()
        }
    }
}

/// The pruning window for [AlphaBeta]
///
/// `alpha` is the value the maximizing agent can already guarantee on the path from the root,
/// `beta` the value the adversaries can already hold it to. Bounds travel down the tree by value
/// so a node only ever sees bounds tightened by siblings that were explored before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Best value found so far for the maximizing agent
    pub alpha: f64,
    /// Best value found so far for the adversaries
    pub beta: f64,
}

impl Bounds {
    /// The bounds at the root, nothing is known yet
    pub fn unbounded() -> Self {
        Self {
            alpha: f64::NEG_INFINITY,
            beta: f64::INFINITY,
        }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[derive(Derivative)]
#[derivative(
    Debug(bound = ""),
    Clone(bound = "ScorableType: Clone")
)]
/// This is the struct that wraps a scoring function and a set of options, and can be used to
/// search any [TurnBasedGame] that the scoring function can score
///
/// The adversary model is picked with the `Rule` parameter. See [MinimaxSearch],
/// [AlphaBetaSearch] and [ExpectimaxSearch].
///
/// It also outputs traces using the [tracing] crate.
pub struct AdversarialSearch<ScorableType, Rule> {
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    options: SearchOptions,
    #[derivative(Debug = "ignore")]
    _rule: PhantomData<Rule>,
}

/// Search that assumes every adversary plays the move worst for the maximizing agent
pub type MinimaxSearch<ScorableType> = AdversarialSearch<ScorableType, Minimax>;

/// [MinimaxSearch] with alpha/beta pruning
pub type AlphaBetaSearch<ScorableType> = AdversarialSearch<ScorableType, AlphaBeta>;

/// Search that models every adversary as moving uniformly at random
pub type ExpectimaxSearch<ScorableType> = AdversarialSearch<ScorableType, Expectimax>;

impl<ScorableType, Rule> AdversarialSearch<ScorableType, Rule>
where
    Rule: AdversaryRule,
{
    /// Construct a new search from a scoring function and a set of [SearchOptions]
    ///
    /// [SearchOptions] implements [Default] so you can override specific options and rely on
    /// defaults for the rest.
    pub fn new(score_function: ScorableType, options: SearchOptions) -> Self {
        Self {
            score_function,
            options,
            _rule: PhantomData,
        }
    }

    /// Construct a new search with the default options
    pub fn from_scorer(score_function: ScorableType) -> Self {
        Self::new(score_function, Default::default())
    }

    /// The options this search was built with
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search the game from `root` and return the best move for the maximizing agent, along
    /// with the value of the root and the value of every root move.
    ///
    /// The root is never expanded when it is terminal or when the depth is 0. In both cases it
    /// is scored directly and no action is chosen.
    ///
    /// Ties between root moves go to the move the game listed first.
    pub fn search<GameType>(&self, root: &GameType) -> Result<SearchOutcome<GameType::Action>>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>,
    {
        let span = info_span!(
            "adversarial_search",
            strategy = %Rule::KIND,
            depth = self.options.depth,
            chosen_value = tracing::field::Empty,
            chosen_action = tracing::field::Empty,
            nodes_visited = tracing::field::Empty,
        );
        let _entered = span.enter();

        let mut stats = SearchStats {
            nodes_visited: 1,
            ..Default::default()
        };

        if root.is_terminal() || self.options.depth == 0 {
            stats.leaves_evaluated += 1;
            let value = self.score_function.score(root);

            span.record("chosen_value", value);
            span.record("nodes_visited", stats.nodes_visited);
            warn!(
                value,
                terminal = root.is_terminal(),
                "The root is a leaf, there is no move to choose"
            );

            return Ok(SearchOutcome {
                action: None,
                value,
                options: vec![],
                stats,
            });
        }

        let root_ply = 0;
        let mut bounds = Bounds::unbounded();
        let mut options: Vec<(GameType::Action, f64)> = vec![];
        let mut best: Option<(GameType::Action, f64)> = None;

        for action in self.legal_actions(root, MAXIMIZING_AGENT, root_ply)? {
            let child = root.successor(MAXIMIZING_AGENT, &action);
            let value = self.value(
                &child,
                MAXIMIZING_AGENT + 1,
                root_ply,
                bounds,
                &mut stats,
            )?;
            options.push((action.clone(), value));

            // The first move is taken even if it scores -inf, so the root always has an answer
            let improves = match &best {
                Some((_, best_value)) => value > *best_value,
                None => true,
            };
            if improves {
                best = Some((action, value));
            }

            // Beta is unbounded at the root, so there is never a cutoff here
            if Rule::PRUNES {
                if let Some((_, best_value)) = &best {
                    bounds.alpha = bounds.alpha.max(*best_value);
                }
            }
        }

        let (action, value) = best.ok_or(SearchError::NoLegalActions {
            agent: MAXIMIZING_AGENT,
            ply: root_ply,
        })?;

        span.record("chosen_value", value);
        span.record("chosen_action", format!("{:?}", action).as_str());
        span.record("nodes_visited", stats.nodes_visited);
        info!(
            value,
            nodes_visited = stats.nodes_visited,
            leaves_evaluated = stats.leaves_evaluated,
            cutoffs = stats.cutoffs,
            "finished search",
        );

        Ok(SearchOutcome {
            action: Some(action),
            value,
            options,
            stats,
        })
    }

    /// Pick the move to make from `root`
    ///
    /// This uses [AdversarialSearch::search()] and only keeps the chosen move
    pub fn choose_action<GameType>(&self, root: &GameType) -> Result<Option<GameType::Action>>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>,
    {
        Ok(self.search(root)?.action)
    }

    /// The value of the node (`game`, `agent`, `ply`)
    ///
    /// This is the recursive entry point every rule calls for its children. It routes the node
    /// through the turn/depth controller and hands it to the scoring function, the maximizing
    /// rule or the strategy's adversary rule.
    pub(crate) fn value<GameType>(
        &self,
        game: &GameType,
        agent: AgentIndex,
        ply: PlyIndex,
        bounds: Bounds,
        stats: &mut SearchStats,
    ) -> Result<f64>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>,
    {
        stats.nodes_visited += 1;

        match route(game, agent, ply, self.options.depth) {
            Step::Evaluate => {
                stats.leaves_evaluated += 1;
                Ok(self.score_function.score(game))
            }
            Step::Maximize { ply } => self.max_value(game, ply, bounds, stats),
            Step::Adversary { agent, ply } => {
                Rule::adversary_value(self, game, agent, ply, bounds, stats)
            }
        }
    }

    /// The maximizing agent's move. Keeps the first of equal values, and with a pruning rule
    /// gives up on the node as soon as it is worth more than the adversaries above will allow
    fn max_value<GameType>(
        &self,
        game: &GameType,
        ply: PlyIndex,
        bounds: Bounds,
        stats: &mut SearchStats,
    ) -> Result<f64>
    where
        GameType: TurnBasedGame,
        ScorableType: Scorable<GameType>,
    {
        let mut bounds = bounds;
        let mut best = f64::NEG_INFINITY;

        for action in self.legal_actions(game, MAXIMIZING_AGENT, ply)? {
            let child = game.successor(MAXIMIZING_AGENT, &action);
            let value = self.value(&child, MAXIMIZING_AGENT + 1, ply, bounds, stats)?;

            if value > best {
                best = value;
            }

            if Rule::PRUNES {
                if best > bounds.beta {
                    stats.cutoffs += 1;
                    trace!(ply, best, beta = bounds.beta, "beta cutoff");
                    return Ok(best);
                }

                bounds.alpha = bounds.alpha.max(best);
            }
        }

        Ok(best)
    }

    /// The legal actions for `agent`, which must not be empty at a node that is being expanded
    pub(crate) fn legal_actions<GameType>(
        &self,
        game: &GameType,
        agent: AgentIndex,
        ply: PlyIndex,
    ) -> Result<Vec<GameType::Action>>
    where
        GameType: TurnBasedGame,
    {
        let actions = game.legal_actions(agent);

        if actions.is_empty() {
            return Err(SearchError::NoLegalActions { agent, ply });
        }

        Ok(actions)
    }
}
