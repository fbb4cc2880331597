use crate::{
    AdversarialSearch, AgentIndex, Bounds, PlyIndex, Result, Scorable, SearchStats,
    TurnBasedGame,
};

use super::{AdversaryRule, StrategyKind};

/// Every adversary picks uniformly at random among its legal moves, so an adversary node is
/// worth the mean of its children
///
/// Nothing is pruned. An expectation can't be bounded by a single child the way a minimum can.
#[derive(Debug, Clone, Copy, Default)]
pub struct Expectimax;

impl AdversaryRule for Expectimax {
    const KIND: StrategyKind = StrategyKind::Expectimax;
    const PRUNES: bool = false;

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
        ScorableType: Scorable<GameType>,
    {
        // Never empty, so the probability is always finite
        let actions = search.legal_actions(game, agent, ply)?;
        let probability = 1.0 / actions.len() as f64;

        let mut expected = 0.0;
        for action in &actions {
            let child = game.successor(agent, action);
            expected += probability * search.value(&child, agent + 1, ply, bounds, stats)?;
        }

        Ok(expected)
    }
}
