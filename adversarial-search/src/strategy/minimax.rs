use crate::{
    AdversarialSearch, AgentIndex, Bounds, PlyIndex, Result, Scorable, SearchStats,
    TurnBasedGame,
};

use super::{AdversaryRule, StrategyKind};

/// Every adversary plays the move with the lowest value for the maximizing agent
///
/// This explores the whole tree down to the depth limit. See [super::AlphaBeta] for a version
/// that reaches the same answer while skipping branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax;

impl AdversaryRule for Minimax {
    const KIND: StrategyKind = StrategyKind::Minimax;
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
        let mut best = f64::INFINITY;

        for action in search.legal_actions(game, agent, ply)? {
            let child = game.successor(agent, &action);
            let value = search.value(&child, agent + 1, ply, bounds, stats)?;

            best = best.min(value);
        }

        Ok(best)
    }
}
