//! Turn and depth bookkeeping shared by every strategy.
//!
//! Agents move in index order. Once the last adversary has moved, control wraps back to the
//! maximizing agent and the ply count goes up by one. The search stops expanding a node when the
//! game is over or when the wrap would reach the ply budget.

use crate::{AgentIndex, PlyIndex, TurnBasedGame, MAXIMIZING_AGENT};

/// What the search should do with a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Stop here and score the state. Either the game is over or the ply budget is spent
    Evaluate,
    /// The maximizing agent moves, at the given ply
    Maximize {
        /// The ply after any wrap has been applied
        ply: PlyIndex,
    },
    /// An adversary moves
    Adversary {
        /// The adversary to move
        agent: AgentIndex,
        /// The current ply
        ply: PlyIndex,
    },
}

/// Decide how to handle the node (`game`, `agent`, `ply`) when searching `depth` plies deep
///
/// `agent` may be equal to `game.num_agents()`, which means every agent has moved this ply and
/// it is the maximizing agent's turn again. A terminal state is always evaluated, even before
/// the depth limit.
pub fn route<GameType: TurnBasedGame>(
    game: &GameType,
    agent: AgentIndex,
    ply: PlyIndex,
    depth: PlyIndex,
) -> Step {
    if game.is_terminal() {
        return Step::Evaluate;
    }

    let (agent, ply) = if agent == game.num_agents() {
        (MAXIMIZING_AGENT, ply + 1)
    } else {
        (agent, ply)
    };

    if agent == MAXIMIZING_AGENT && ply == depth {
        return Step::Evaluate;
    }

    if agent == MAXIMIZING_AGENT {
        Step::Maximize { ply }
    } else {
        Step::Adversary { agent, ply }
    }
}
