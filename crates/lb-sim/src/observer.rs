//! Turn observer trait for rendering and data collection.

use lb_agent::LadybugStore;
use lb_behavior::Trace;
use lb_core::AgentId;
use lb_grid::Grid;

/// Callbacks invoked by [`Game::next_action`][crate::Game::next_action] for
/// every ladybug that takes its turn.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: trace printer
///
/// ```rust,ignore
/// struct TracePrinter;
///
/// impl TurnObserver for TracePrinter {
///     fn on_trace(&mut self, trace: &Trace) {
///         for line in trace.lines() {
///             println!("{line}");
///         }
///     }
/// }
/// ```
pub trait TurnObserver {
    /// Called with the trace of one ladybug's tick, right after it ran.
    fn on_trace(&mut self, _trace: &Trace) {}

    /// Called once the ladybug's turn is over.
    ///
    /// Provides read-only access to the board and every ladybug so that a
    /// renderer can draw the state after this turn.
    fn on_agent_done(
        &mut self,
        _agent:    AgentId,
        _grid:     &Grid,
        _ladybugs: &LadybugStore,
    ) {}
}

/// A [`TurnObserver`] that does nothing.  Use when you only need the returned
/// trace.
pub struct NoopObserver;

impl TurnObserver for NoopObserver {}
