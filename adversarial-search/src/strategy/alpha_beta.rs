use tracing::trace;

use crate::{
    AdversarialSearch, AgentIndex, Bounds, PlyIndex, Result, Scorable, SearchStats,
    TurnBasedGame,
};

use super::{AdversaryRule, StrategyKind};

/// [super::Minimax] with Alpha-Beta pruning
///
/// An adversary stops looking at its moves as soon as one of them is worth less than `alpha`,
/// since the maximizing agent above already has something better and will never come this way.
/// The maximizing agent does the same with `beta`. Both comparisons are strict, so a branch that
/// only ties a bound is still explored and ties are broken exactly like [super::Minimax] breaks
/// them.
///
/// The chosen move and the root value are always the same as [super::Minimax].
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl AdversaryRule for AlphaBeta {
    const KIND: StrategyKind = StrategyKind::AlphaBeta;
    const PRUNES: bool = true;

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
        let mut bounds = bounds;
        let mut best = f64::INFINITY;

        for action in search.legal_actions(game, agent, ply)? {
            let child = game.successor(agent, &action);
            let value = search.value(&child, agent + 1, ply, bounds, stats)?;

            best = best.min(value);

            if best < bounds.alpha {
                stats.cutoffs += 1;
                trace!(agent, ply, best, alpha = bounds.alpha, "alpha cutoff");
                return Ok(best);
            }

            bounds.beta = bounds.beta.min(best);
        }

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::{
        test_tree::{random_tree, TreeGame},
        AlphaBetaSearch, MinimaxSearch, SearchOptions,
    };

    fn node_value(game: &TreeGame) -> f64 {
        game.value()
    }

    #[test]
    fn test_agrees_with_minimax_on_random_trees() {
        let mut rng = StdRng::seed_from_u64(7);

        for agents in 2..=3 {
            for depth in 1..=2 {
                for _ in 0..50 {
                    let game = TreeGame::new(agents, random_tree(&mut rng, agents * depth));
                    let options = SearchOptions::with_depth(depth);

                    let minimax = MinimaxSearch::new(node_value, options)
                        .search(&game)
                        .unwrap();
                    let alpha_beta = AlphaBetaSearch::new(node_value, options)
                        .search(&game)
                        .unwrap();

                    assert_eq!(alpha_beta.action, minimax.action);
                    assert_eq!(alpha_beta.value, minimax.value);
                    assert!(alpha_beta.stats.nodes_visited <= minimax.stats.nodes_visited);
                    assert!(alpha_beta.stats.leaves_evaluated <= minimax.stats.leaves_evaluated);
                }
            }
        }
    }

    #[test]
    fn test_never_prunes_without_a_sibling() {
        // A single line of play has nothing to compare against
        let mut rng = StdRng::seed_from_u64(11);
        let mut game = random_tree(&mut rng, 0);
        for label in ["z", "y", "x", "w"] {
            game = crate::test_tree::branch(vec![(label, game)]);
        }
        let game = TreeGame::new(2, game);

        let outcome = AlphaBetaSearch::new(node_value, SearchOptions::with_depth(2))
            .search(&game)
            .unwrap();

        assert_eq!(outcome.stats.cutoffs, 0);
        assert_eq!(outcome.stats.nodes_visited, 5);
        assert_eq!(outcome.action, Some("w"));
    }
}
