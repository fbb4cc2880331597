use std::fmt::Debug;

/// Identifies whose turn it is. Agents move in increasing index order each ply
pub type AgentIndex = usize;

/// Counts full rounds of play, where every agent has moved once
pub type PlyIndex = usize;

/// The single agent whose move the search chooses. Every other index is an adversary
pub const MAXIMIZING_AGENT: AgentIndex = 0;

/// The state and rules of a game as seen by the search.
///
/// Implementations own their game logic. The search never mutates a state, it only asks for
/// successors, so every call to [TurnBasedGame::successor] must return an independent value.
pub trait TurnBasedGame: Sized {
    /// A move one agent can make
    type Action: Clone + Debug;

    /// The total number of agents, the maximizing agent included. Expected to be at least 2
    fn num_agents(&self) -> usize;

    /// The moves the given agent may make from this state, in a stable order.
    ///
    /// This may only be empty when [TurnBasedGame::is_terminal] is true. The search treats an
    /// empty list anywhere else as a bug in the game and aborts with
    /// [crate::SearchError::NoLegalActions]
    fn legal_actions(&self, agent: AgentIndex) -> Vec<Self::Action>;

    /// The state after `agent` makes `action`
    fn successor(&self, agent: AgentIndex, action: &Self::Action) -> Self;

    /// True once the game has been definitively won or lost
    fn is_terminal(&self) -> bool;
}
