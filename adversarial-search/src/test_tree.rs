//! An explicit game tree for tests. Whoever is to move picks one of the current node's
//! children, so the shape of the tree decides the outcome and the scores are known up front.

use std::{cell::Cell, rc::Rc};

use crate::{AgentIndex, TurnBasedGame};

#[derive(Debug, Clone)]
pub(crate) struct Tree {
    value: f64,
    terminal: bool,
    children: Vec<(&'static str, Rc<Tree>)>,
}

impl Tree {
    /// The score of this node if it is ever evaluated
    pub(crate) fn scored(mut self, value: f64) -> Self {
        self.value = value;
        self
    }
}

/// A node the test expects to be scored at the depth limit
pub(crate) fn leaf(value: f64) -> Tree {
    Tree {
        value,
        terminal: false,
        children: vec![],
    }
}

/// A node where the game is over
pub(crate) fn terminal(value: f64) -> Tree {
    Tree {
        value,
        terminal: true,
        children: vec![],
    }
}

pub(crate) fn branch(children: Vec<(&'static str, Tree)>) -> Tree {
    Tree {
        value: 0.0,
        terminal: false,
        children: children
            .into_iter()
            .map(|(label, child)| (label, Rc::new(child)))
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TreeGame {
    agents: usize,
    node: Rc<Tree>,
    enumerations: Rc<Cell<usize>>,
}

impl TreeGame {
    pub(crate) fn new(agents: usize, root: Tree) -> Self {
        Self {
            agents,
            node: Rc::new(root),
            enumerations: Rc::new(Cell::new(0)),
        }
    }

    pub(crate) fn scored(self, value: f64) -> Self {
        let root = (*self.node).clone().scored(value);

        Self {
            node: Rc::new(root),
            ..self
        }
    }

    pub(crate) fn value(&self) -> f64 {
        self.node.value
    }

    /// How many times any state of this game was asked for its legal actions
    pub(crate) fn enumerations(&self) -> usize {
        self.enumerations.get()
    }
}

impl TurnBasedGame for TreeGame {
    type Action = &'static str;

    fn num_agents(&self) -> usize {
        self.agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Vec<&'static str> {
        self.enumerations.set(self.enumerations.get() + 1);

        if self.node.terminal {
            return vec![];
        }

        self.node.children.iter().map(|(label, _)| *label).collect()
    }

    fn successor(&self, _agent: AgentIndex, action: &&'static str) -> Self {
        let child = self
            .node
            .children
            .iter()
            .find(|(label, _)| label == action)
            .map(|(_, child)| child.clone())
            .unwrap_or_else(|| panic!("{} is not a move from this node", action));

        Self {
            agents: self.agents,
            node: child,
            enumerations: self.enumerations.clone(),
        }
    }

    fn is_terminal(&self) -> bool {
        self.node.terminal
    }
}

/// A tree with `levels` moves before every leaf, small integer scores so that ties are common,
/// and the odd game that ends early
pub(crate) fn random_tree<R: rand::Rng>(rng: &mut R, levels: usize) -> Tree {
    const LABELS: [&str; 3] = ["a", "b", "c"];

    let value = rng.gen_range(0..6_u8) as f64;
    if levels == 0 {
        return leaf(value);
    }
    if rng.gen_bool(0.1) {
        return terminal(value);
    }

    let width = rng.gen_range(1..=LABELS.len());
    let children = LABELS[..width]
        .iter()
        .map(|label| (*label, random_tree(rng, levels - 1)))
        .collect();

    branch(children).scored(value)
}
