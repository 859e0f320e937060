//! Node model: kinds, statuses, and the arena node itself.
//!
//! Every node variant is a closed enum value; ticking dispatches with one
//! `match` in [`tree`](crate::tree).  Leaf sub-kinds carry their own
//! parameters (fly goal, path endpoints) so no further nesting is needed.
//!
//! # Two renderings
//!
//! | Method                         | Example     | Used by              |
//! |--------------------------------|-------------|----------------------|
//! | `Display`                      | `fly 2,0`   | trace entries        |
//! | [`NodeKind::representation`]   | `[fly 3,1]` | tree notation output |
//!
//! `Display` shows internal 0-based coordinates; `representation` shows the
//! 1-based coordinates the notation is written in.

use std::fmt;

use lb_core::{NodeIdx, Position};

// ── NodeStatus ────────────────────────────────────────────────────────────────

/// Execution status of one node.  Persists between ticks; this is what makes
/// a walk resumable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    #[default]
    NotEntered,
    Running,
    Success,
    Failure,
}

impl NodeStatus {
    /// `Success` or `Failure`.
    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, NodeStatus::Success | NodeStatus::Failure)
    }

    #[inline]
    pub fn from_outcome(ok: bool) -> NodeStatus {
        if ok { NodeStatus::Success } else { NodeStatus::Failure }
    }
}

// ── ActionKind ────────────────────────────────────────────────────────────────

/// Primitive ladybug action performed by an action leaf.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionKind {
    Move,
    TurnLeft,
    TurnRight,
    TakeLeaf,
    PlaceLeaf,
    /// Teleport to an internal (0-based) position.
    Fly(Position),
}

impl ActionKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ActionKind::Move      => "move",
            ActionKind::TurnLeft  => "turnLeft",
            ActionKind::TurnRight => "turnRight",
            ActionKind::TakeLeaf  => "takeLeaf",
            ActionKind::PlaceLeaf => "placeLeaf",
            ActionKind::Fly(_)    => "fly",
        }
    }

    /// Positions embedded in the action, in notation order.
    pub fn positions(self) -> Vec<Position> {
        match self {
            ActionKind::Fly(goal) => vec![goal],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::Fly(goal) => write!(f, "fly {goal}"),
            other => f.write_str(other.keyword()),
        }
    }
}

// ── ConditionKind ─────────────────────────────────────────────────────────────

/// Predicate evaluated by a condition leaf.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    AtEdge,
    LeafFront,
    TreeFront,
    MushroomFront,
    /// Path from the ladybug's own cell to the goal.
    ExistsPathTo(Position),
    /// Path between two fixed cells.
    ExistsPathBetween(Position, Position),
}

impl ConditionKind {
    pub fn keyword(self) -> &'static str {
        match self {
            ConditionKind::AtEdge                  => "atEdge",
            ConditionKind::LeafFront               => "leafFront",
            ConditionKind::TreeFront               => "treeFront",
            ConditionKind::MushroomFront           => "mushroomFront",
            ConditionKind::ExistsPathTo(_)
            | ConditionKind::ExistsPathBetween(..) => "existsPath",
        }
    }

    /// Positions embedded in the condition, in notation order.
    pub fn positions(self) -> Vec<Position> {
        match self {
            ConditionKind::ExistsPathTo(goal)             => vec![goal],
            ConditionKind::ExistsPathBetween(start, goal) => vec![start, goal],
            _ => Vec::new(),
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())?;
        for p in self.positions() {
            write!(f, " {p}")?;
        }
        Ok(())
    }
}

// ── NodeKind ──────────────────────────────────────────────────────────────────

/// The five node variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Succeeds on the first succeeding child.
    Fallback,
    /// Fails on the first failing child.
    Sequence,
    /// Runs every child; succeeds if at least `threshold` of them succeeded.
    Parallel { threshold: u32 },
    Action(ActionKind),
    Condition(ConditionKind),
}

impl NodeKind {
    #[inline]
    pub fn is_composite(self) -> bool {
        matches!(self, NodeKind::Fallback | NodeKind::Sequence | NodeKind::Parallel { .. })
    }

    #[inline]
    pub fn is_action(self) -> bool {
        matches!(self, NodeKind::Action(_))
    }

    /// Lower-case variant name: `fallback`, `sequence`, `parallel`,
    /// `action`, `condition`.
    pub fn category(self) -> &'static str {
        match self {
            NodeKind::Fallback        => "fallback",
            NodeKind::Sequence        => "sequence",
            NodeKind::Parallel { .. } => "parallel",
            NodeKind::Action(_)       => "action",
            NodeKind::Condition(_)    => "condition",
        }
    }

    /// Positions embedded in a leaf, in notation order.
    pub fn positions(self) -> Vec<Position> {
        match self {
            NodeKind::Action(a)    => a.positions(),
            NodeKind::Condition(c) => c.positions(),
            _ => Vec::new(),
        }
    }

    /// The bracketed notation for this kind, with 1-based coordinates.
    pub fn representation(self) -> String {
        let with_coordinates = |keyword: &str| {
            let mut text = keyword.to_string();
            for p in self.positions() {
                let (x, y) = p.to_display();
                text.push_str(&format!(" {x},{y}"));
            }
            text
        };
        match self {
            NodeKind::Fallback               => "[?]".to_string(),
            NodeKind::Sequence               => "[->]".to_string(),
            NodeKind::Parallel { threshold } => format!("[={threshold}>]"),
            NodeKind::Action(a)              => format!("[{}]", with_coordinates(a.keyword())),
            NodeKind::Condition(c)           => format!("([{}])", with_coordinates(c.keyword())),
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Action(a)    => fmt::Display::fmt(a, f),
            NodeKind::Condition(c) => fmt::Display::fmt(c, f),
            composite              => f.write_str(composite.category()),
        }
    }
}

// ── NodeSpec ──────────────────────────────────────────────────────────────────

/// A node as declared in notation: an id plus its kind.  Not yet part of any
/// tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSpec {
    pub id:   String,
    pub kind: NodeKind,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self { id: id.into(), kind }
    }
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// One node in a tree's arena.
///
/// `parent` is a non-owning back-reference; the tree owns every node.  Only
/// composite kinds ever have children.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id:       String,
    pub(crate) kind:     NodeKind,
    pub(crate) parent:   Option<NodeIdx>,
    pub(crate) children: Vec<NodeIdx>,
    pub(crate) status:   NodeStatus,
}

impl Node {
    pub(crate) fn new(spec: NodeSpec, parent: Option<NodeIdx>) -> Self {
        Self {
            id: spec.id,
            kind: spec.kind,
            parent,
            children: Vec::new(),
            status: NodeStatus::NotEntered,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// `None` only for the root.
    pub fn parent(&self) -> Option<NodeIdx> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIdx] {
        &self.children
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }
}
