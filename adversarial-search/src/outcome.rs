use std::fmt::Debug;
use text_trees::StringTreeNode;

/// Counters collected while walking the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Every node the search routed, the root and the leaves included
    pub nodes_visited: u64,
    /// Nodes that were handed to the scoring function
    pub leaves_evaluated: u64,
    /// Times the alpha/beta bounds ended a node's loop over its children
    pub cutoffs: u64,
}

#[derive(Debug, Clone, PartialEq)]
/// This is returned from a search at the root of the tree
pub struct SearchOutcome<Action> {
    /// The chosen move for the maximizing agent
    ///
    /// This is None when the root itself was scored, because it was terminal or the search was
    /// asked for a depth of 0
    pub action: Option<Action>,
    /// The value of the root
    pub value: f64,
    /// Every root move in the order the game listed them, along with the value the search got
    /// back for it.
    ///
    /// With [crate::AlphaBeta] a move that was cut off reports a bound and not its exact value.
    /// The bound is never better than the chosen value, so the chosen move is unaffected
    pub options: Vec<(Action, f64)>,
    /// Counters for this search
    pub stats: SearchStats,
}

impl<Action> SearchOutcome<Action>
where
    Action: Debug + PartialEq,
{
    /// Returns the value the search got back for a given root move, if it was a legal move
    pub fn value_of(&self, action: &Action) -> Option<f64> {
        self.options
            .iter()
            .find(|(a, _)| a == action)
            .map(|(_, value)| *value)
    }

    /// This returns a visual representation of the root of the search
    /// It shows the root value and every root move with its value, the chosen move is marked
    /// with a `*`
    pub fn to_text_tree(&self) -> String {
        let mut root = StringTreeNode::new(format!("root {:?}", self.value));

        for (action, value) in &self.options {
            let marker = if self.action.as_ref() == Some(action) {
                "*"
            } else {
                " "
            };
            root.push_node(StringTreeNode::new(format!(
                "{} {:?} {:?}",
                marker, action, value
            )));
        }

        format!("{}", root)
    }
}
