//! MCTS node structure.
//!
//! Uses arena-based allocation with index references (NodeId): each node
//! stores its parent as an index rather than an owning reference, so the
//! tree has no cycles and is destroyed wholesale with its arena.

use smallvec::SmallVec;

use crate::core::GameState;

/// Index into the MctsTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A node in the MCTS tree.
///
/// Owns one position and its rollout statistics. Children are created all
/// at once by expansion, one per legal move, in ascending move order.
#[derive(Clone, Debug)]
pub struct MctsNode {
    /// The position this node represents.
    pub state: GameState,

    /// Parent node (NONE for the root). Used only to walk upward during
    /// backpropagation, never for state mutation.
    pub parent: NodeId,

    /// Times this node was on a selection/backpropagation path.
    pub visits: u32,

    /// Accumulated rollout value (+1 side-B win, -1 side-A win, 0 draw),
    /// summed without sign inversion per level.
    pub value: f64,

    /// `(move, child)` pairs, empty until expansion. A side has at most
    /// six legal moves.
    pub children: SmallVec<[(usize, NodeId); 6]>,
}

impl MctsNode {
    /// Create an unexpanded node.
    #[must_use]
    pub fn new(state: GameState, parent: NodeId) -> Self {
        Self {
            state,
            parent,
            visits: 0,
            value: 0.0,
            children: SmallVec::new(),
        }
    }

    /// Create a root node.
    #[must_use]
    pub fn root(state: GameState) -> Self {
        Self::new(state, NodeId::NONE)
    }

    /// Whether expansion has populated this node's children.
    #[inline]
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }

    /// Record one rollout result passing through this node.
    #[inline]
    pub fn update(&mut self, result: f64) {
        self.visits += 1;
        self.value += result;
    }
}
