//! Per-tick execution trace.

use std::fmt;

use lb_core::AgentId;

use crate::NodeKind;

/// What happened to a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraceEvent {
    /// A composite moved from `NotEntered` to `Running`.  Logged by the
    /// private `enter` step of [`BehaviorTree::tick`](crate::BehaviorTree::tick)
    /// in `tree.rs`.
    Entry,
    Success,
    Failure,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TraceEvent::Entry   => "ENTRY",
            TraceEvent::Success => "SUCCESS",
            TraceEvent::Failure => "FAILURE",
        })
    }
}

/// One logged event.  `Display` renders `<agent> <node> <kind> <EVENT>`, for
/// example `1 A move FAILURE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub agent:   AgentId,
    pub node_id: String,
    pub kind:    NodeKind,
    pub event:   TraceEvent,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.agent, self.node_id, self.kind, self.event)
    }
}

/// Ordered events produced by exactly one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: TraceEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append every entry of `other`.
    pub fn extend(&mut self, other: Trace) {
        self.entries.extend(other.entries);
    }

    /// Each entry's `Display` form.
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl IntoIterator for Trace {
    type Item = TraceEntry;
    type IntoIter = std::vec::IntoIter<TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceEntry;
    type IntoIter = std::slice::Iter<'a, TraceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
