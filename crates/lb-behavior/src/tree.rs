//! `BehaviorTree`: the node arena plus the resumable tick engine.
//!
//! # Resumable walk
//!
//! A tick never executes more than one action.  Walking the tree from the
//! root, the first unfinished action a composite reaches is installed as the
//! resume pointer (`current`) and the walk halts: every composite on the way
//! back up returns `Running` and keeps its status.  The installed action then
//! runs, finishes, and the next tick's walk skips past it because its status
//! is terminal.
//!
//! ```text
//! tick:
//!   walk(root)
//!   if no halt:  reset statuses, walk(root) again
//!   if halted:   run current action
//!   clear jumped
//! ```
//!
//! Conditions and composites resolve inline and never halt.

use rustc_hash::FxHashMap;
use tracing::debug;

use lb_agent::LadybugStore;
use lb_core::{AgentId, NodeIdx};
use lb_grid::Grid;

use crate::context::TickContext;
use crate::{
    BehaviorError, BehaviorResult, Node, NodeKind, NodeSpec, NodeStatus, Trace, TraceEntry,
    TraceEvent,
};

// ── TreeBuilder ───────────────────────────────────────────────────────────────

/// Incremental construction of a [`BehaviorTree`].
///
/// Nodes are added first and wired afterwards; the parser uses it edge by
/// edge.  Structural validation beyond id uniqueness and composite parents
/// (reachability, presence of an action) is the caller's job.
#[derive(Default)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
    index: FxHashMap<String, NodeIdx>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node.  Fails if the id is already taken.
    pub fn add_node(&mut self, spec: NodeSpec) -> BehaviorResult<NodeIdx> {
        if self.index.contains_key(&spec.id) {
            return Err(BehaviorError::DuplicateNode(spec.id));
        }
        let idx = NodeIdx(self.nodes.len() as u32);
        self.index.insert(spec.id.clone(), idx);
        self.nodes.push(Node::new(spec, None));
        Ok(idx)
    }

    /// Append `child` to `parent`'s children.  `parent` must be a composite
    /// and `child` must not have a parent yet.
    pub fn add_child(&mut self, parent: NodeIdx, child: NodeIdx) -> BehaviorResult<()> {
        let p = &self.nodes[parent.index()];
        if !p.kind.is_composite() {
            return Err(BehaviorError::NotComposite(p.id.clone()));
        }
        debug_assert!(self.nodes[child.index()].parent.is_none(), "child attached twice");
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        Ok(())
    }

    /// Handle of an already-added node.
    pub fn lookup(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn node(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids of nodes not reachable from `root`, in insertion order.
    pub fn unreachable_from(&self, root: NodeIdx) -> Vec<&str> {
        let mut reached = vec![false; self.nodes.len()];
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            reached[idx.index()] = true;
            stack.extend_from_slice(&self.nodes[idx.index()].children);
        }
        self.nodes
            .iter()
            .zip(reached)
            .filter(|(_, r)| !r)
            .map(|(n, _)| n.id.as_str())
            .collect()
    }

    /// Finish the tree with `root` as its root and resume pointer.
    pub fn build(self, root: NodeIdx) -> BehaviorTree {
        BehaviorTree {
            nodes:   self.nodes,
            index:   self.index,
            root,
            current: root,
            jumped:  false,
        }
    }
}

// ── BehaviorTree ──────────────────────────────────────────────────────────────

/// One ladybug's behavior tree.
///
/// Owns every node in a flat arena addressed by [`NodeIdx`] plus an id index
/// kept in step with the arena.  `current` is the resume pointer and
/// `jumped` records a [`jump_to`](Self::jump_to) since the last tick.
#[derive(Clone, Debug)]
pub struct BehaviorTree {
    nodes:   Vec<Node>,
    index:   FxHashMap<String, NodeIdx>,
    root:    NodeIdx,
    current: NodeIdx,
    jumped:  bool,
}

impl BehaviorTree {
    // ── Inspection ────────────────────────────────────────────────────────

    pub fn root(&self) -> NodeIdx {
        self.root
    }

    pub fn root_id(&self) -> &str {
        &self.nodes[self.root.index()].id
    }

    /// Id of the resume pointer.
    pub fn current_id(&self) -> &str {
        &self.nodes[self.current.index()].id
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn lookup(&self, id: &str) -> Option<NodeIdx> {
        self.index.get(id).copied()
    }

    pub fn get(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.lookup(id).map(|idx| self.get(idx))
    }

    pub fn status(&self, id: &str) -> Option<NodeStatus> {
        self.node(id).map(Node::status)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first pre-order over the tree, children left to right.
    pub fn preorder(&self) -> Vec<NodeIdx> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root];
        while let Some(idx) = stack.pop() {
            order.push(idx);
            stack.extend(self.nodes[idx.index()].children.iter().rev());
        }
        order
    }

    fn require(&self, id: &str) -> BehaviorResult<NodeIdx> {
        self.lookup(id).ok_or_else(|| BehaviorError::UnknownNode(id.to_string()))
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance `agent`'s tree by one step and return what happened.
    ///
    /// At most one action executes.  If the walk from the root finishes
    /// without reaching a pending action, every status is reset and the
    /// root is walked once more in the same call.
    ///
    /// After the last walk the resume pointer runs if it is an action,
    /// whether that walk halted or completed.  Nothing runs while no action
    /// has been installed yet.
    pub fn tick(&mut self, grid: &mut Grid, agents: &mut LadybugStore, agent: AgentId) -> Trace {
        let mut ctx = TickContext::new(grid, agents, agent);

        self.walk(self.root, &mut ctx);
        if !ctx.halted {
            debug!(%agent, root = self.root_id(), "tree finished, restarting from root");
            self.reset_subtree(self.root);
            self.walk(self.root, &mut ctx);
        }
        if ctx.halted || self.nodes[self.current.index()].kind.is_action() {
            self.run_action(self.current, &mut ctx);
        } else {
            debug!(%agent, "no action reachable this tick");
        }
        self.jumped = false;
        ctx.trace
    }

    fn walk(&mut self, idx: NodeIdx, ctx: &mut TickContext<'_>) -> NodeStatus {
        let Node { status, kind, .. } = self.nodes[idx.index()];
        if status.is_finished() {
            return status;
        }
        match kind {
            NodeKind::Sequence => self.run_linear(idx, ctx, NodeStatus::Failure, NodeStatus::Success),
            NodeKind::Fallback => self.run_linear(idx, ctx, NodeStatus::Success, NodeStatus::Failure),
            NodeKind::Parallel { threshold } => self.run_parallel(idx, threshold, ctx),
            NodeKind::Action(_) => {
                self.install(idx, ctx);
                NodeStatus::Running
            }
            NodeKind::Condition(condition) => {
                let ok = condition.holds(ctx.grid, ctx.agents, ctx.agent);
                self.finish(idx, NodeStatus::from_outcome(ok), ctx)
            }
        }
    }

    /// Sequence and Fallback: stop at the first child whose status is
    /// `break_on`, otherwise finish with `exhausted`.
    fn run_linear(
        &mut self,
        idx:       NodeIdx,
        ctx:       &mut TickContext<'_>,
        break_on:  NodeStatus,
        exhausted: NodeStatus,
    ) -> NodeStatus {
        self.enter(idx, ctx);
        let mut i = 0;
        while let Some(&child) = self.nodes[idx.index()].children.get(i) {
            i += 1;
            let before = self.nodes[child.index()].status;
            if before == break_on {
                return self.finish(idx, before, ctx);
            }
            if before.is_finished() {
                continue;
            }
            if self.nodes[child.index()].kind.is_action() {
                self.install(child, ctx);
                return NodeStatus::Running;
            }
            let after = self.walk(child, ctx);
            if ctx.halted {
                return NodeStatus::Running;
            }
            if after == break_on {
                return self.finish(idx, after, ctx);
            }
        }
        self.finish(idx, exhausted, ctx)
    }

    /// Parallel: resolve every unfinished child, halting at an action, then
    /// compare the number of succeeded children against `threshold`.
    ///
    /// Finished children are skipped on every pass, so a resumed Parallel
    /// re-scans from its first child.
    fn run_parallel(&mut self, idx: NodeIdx, threshold: u32, ctx: &mut TickContext<'_>) -> NodeStatus {
        self.enter(idx, ctx);
        let mut i = 0;
        while let Some(&child) = self.nodes[idx.index()].children.get(i) {
            i += 1;
            if self.nodes[child.index()].status.is_finished() {
                continue;
            }
            if self.nodes[child.index()].kind.is_action() {
                self.install(child, ctx);
                return NodeStatus::Running;
            }
            self.walk(child, ctx);
            if ctx.halted {
                return NodeStatus::Running;
            }
        }
        let successes = self.nodes[idx.index()]
            .children
            .iter()
            .filter(|c| self.nodes[c.index()].status == NodeStatus::Success)
            .count();
        self.finish(idx, NodeStatus::from_outcome(successes >= threshold as usize), ctx)
    }

    /// Make `idx` the resume pointer and halt the walk.
    fn install(&mut self, idx: NodeIdx, ctx: &mut TickContext<'_>) {
        self.current = idx;
        ctx.halted = true;
        debug!(agent = %ctx.agent, node = self.nodes[idx.index()].id.as_str(), "halt on action");
    }

    /// Log `Entry` and mark running, once per run of a composite.
    fn enter(&mut self, idx: NodeIdx, ctx: &mut TickContext<'_>) {
        if self.nodes[idx.index()].status == NodeStatus::NotEntered {
            self.log(idx, TraceEvent::Entry, ctx);
            self.nodes[idx.index()].status = NodeStatus::Running;
        }
    }

    /// Record a terminal status and log it.
    fn finish(&mut self, idx: NodeIdx, status: NodeStatus, ctx: &mut TickContext<'_>) -> NodeStatus {
        debug_assert!(status.is_finished());
        self.nodes[idx.index()].status = status;
        let event = if status == NodeStatus::Success { TraceEvent::Success } else { TraceEvent::Failure };
        self.log(idx, event, ctx);
        status
    }

    fn run_action(&mut self, idx: NodeIdx, ctx: &mut TickContext<'_>) {
        let node = &self.nodes[idx.index()];
        let NodeKind::Action(action) = node.kind else {
            return;
        };
        let ok = action.perform(ctx.grid, ctx.agents, ctx.agent);
        debug!(agent = %ctx.agent, node = node.id.as_str(), %action, ok, "action performed");
        self.finish(idx, NodeStatus::from_outcome(ok), ctx);
    }

    fn log(&self, idx: NodeIdx, event: TraceEvent, ctx: &mut TickContext<'_>) {
        let node = &self.nodes[idx.index()];
        ctx.trace.push(TraceEntry {
            agent:   ctx.agent,
            node_id: node.id.clone(),
            kind:    node.kind,
            event,
        });
    }

    // ── Resume pointer control ────────────────────────────────────────────

    /// Id of the node the next tick will run.
    ///
    /// A composite resume pointer means a fresh walk from the root.  An
    /// action is reported itself when it is its parent's last child or was
    /// just jumped to; otherwise its next sibling.
    pub fn head(&self) -> &str {
        let current = &self.nodes[self.current.index()];
        if !current.kind.is_action() {
            return self.root_id();
        }
        let Some(parent) = current.parent else {
            return &current.id;
        };
        if self.jumped {
            return &current.id;
        }
        let siblings = &self.nodes[parent.index()].children;
        match siblings.iter().position(|&c| c == self.current) {
            Some(i) if i + 1 < siblings.len() => &self.nodes[siblings[i + 1].index()].id,
            _ => &current.id,
        }
    }

    /// Forget all progress: every node back to `NotEntered`, resume pointer
    /// back to the root.
    pub fn reset(&mut self) {
        self.reset_subtree(self.root);
        self.current = self.root;
        self.jumped = false;
        debug!(root = self.root_id(), "tree reset");
    }

    fn reset_subtree(&mut self, idx: NodeIdx) {
        let mut stack = vec![idx];
        while let Some(i) = stack.pop() {
            let node = &mut self.nodes[i.index()];
            node.status = NodeStatus::NotEntered;
            stack.extend_from_slice(&node.children);
        }
    }

    /// Move the resume pointer to `id` as if the tree had run up to it.
    ///
    /// Along the path from the root, every sibling before the path child is
    /// marked `Success` under a Sequence and `Failure` otherwise, so the
    /// next walk goes straight to the target.  The target's subtree and the
    /// subtrees after it start over.  Jumping to the root is a reset.
    pub fn jump_to(&mut self, id: &str) -> BehaviorResult<()> {
        let target = self.require(id)?;
        if target == self.root {
            self.reset();
            return Ok(());
        }

        let mut path = vec![target];
        while let Some(parent) = self.nodes[path[path.len() - 1].index()].parent {
            path.push(parent);
        }
        path.reverse();

        for pair in path.windows(2) {
            let (parent, on_path) = (pair[0], pair[1]);
            let skipped = match self.nodes[parent.index()].kind {
                NodeKind::Sequence => NodeStatus::Success,
                _ => NodeStatus::Failure,
            };
            if self.nodes[parent.index()].status.is_finished() {
                self.nodes[parent.index()].status = NodeStatus::NotEntered;
            }
            let children = self.nodes[parent.index()].children.len();
            let mut before = true;
            for k in 0..children {
                let child = self.nodes[parent.index()].children[k];
                if child == on_path {
                    before = false;
                } else if before {
                    self.nodes[child.index()].status = skipped;
                } else {
                    self.reset_subtree(child);
                }
            }
        }
        self.reset_subtree(target);

        self.current = target;
        self.jumped = true;
        debug!(node = id, "jumped");
        Ok(())
    }

    // ── Structural edit ───────────────────────────────────────────────────

    /// Insert a new node directly after `existing` under the same parent.
    ///
    /// Fails for an unknown `existing`, for the root, and for an id the
    /// tree already contains.
    pub fn add_sibling(&mut self, existing: &str, spec: NodeSpec) -> BehaviorResult<NodeIdx> {
        let anchor = self.require(existing)?;
        if self.index.contains_key(&spec.id) {
            return Err(BehaviorError::DuplicateNode(spec.id));
        }
        let Some(parent) = self.nodes[anchor.index()].parent else {
            return Err(BehaviorError::RootSibling(existing.to_string()));
        };

        let idx = NodeIdx(self.nodes.len() as u32);
        debug!(existing, new = spec.id.as_str(), kind = %spec.kind, "sibling inserted");
        self.index.insert(spec.id.clone(), idx);
        self.nodes.push(Node::new(spec, Some(parent)));

        let siblings = &mut self.nodes[parent.index()].children;
        let at = siblings.iter().position(|&c| c == anchor).map_or(siblings.len(), |i| i + 1);
        siblings.insert(at, idx);
        Ok(idx)
    }
}
