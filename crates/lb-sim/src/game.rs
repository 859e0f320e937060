//! The `Game` struct: loaded board, ladybugs, and their behavior trees.

use tracing::{debug, info, warn};

use lb_agent::{LadybugStore, LadybugStoreBuilder};
use lb_behavior::{BehaviorTree, Trace, TreeParseError, parse_single_node, parse_trees};
use lb_core::{AgentId, Direction, Position};
use lb_grid::{Grid, parse_board};

use crate::{GameError, GameResult, TurnObserver};

// ── Loaded board ──────────────────────────────────────────────────────────────

/// Everything that exists once a board has been loaded.
struct Board {
    /// Live board, mutated by actions.
    grid: Grid,

    /// Live ladybug state.
    ladybugs: LadybugStore,

    /// Board as loaded.  Restored whenever trees are (re)loaded.
    initial_grid: Grid,

    /// Ladybugs as loaded, all inactive.
    initial_ladybugs: LadybugStore,

    /// Behavior tree per ladybug, indexed by `AgentId::index()`.
    trees: Vec<Option<BehaviorTree>>,

    /// `true` once a tree load has succeeded for this board.
    trees_loaded: bool,
}

// ── Game ──────────────────────────────────────────────────────────────────────

/// The simulator state behind every shell command.
///
/// Starts empty.  [`load_board`](Self::load_board) installs a board and its
/// ladybugs; [`load_trees`](Self::load_trees) binds behavior trees to them,
/// which is what makes a ladybug active.  Every other operation needs both.
///
/// Failed loads never change the state.
#[derive(Default)]
pub struct Game {
    board: Option<Board>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Loading ───────────────────────────────────────────────────────────

    /// Parse and install a board.  Any previously bound trees are dropped.
    ///
    /// Returns the number of ladybugs on the board.
    pub fn load_board<S: AsRef<str>>(&mut self, lines: &[S]) -> GameResult<usize> {
        let (grid, spawns) = parse_board(lines).inspect_err(|e| {
            warn!(error = %e, "board rejected");
        })?;
        let ladybugs = LadybugStoreBuilder::from_spawns(&spawns).build();
        info!(
            columns  = grid.columns(),
            rows     = grid.rows(),
            ladybugs = ladybugs.count,
            "board loaded"
        );

        let count = ladybugs.count;
        self.board = Some(Board {
            initial_grid:     grid.clone(),
            initial_ladybugs: ladybugs.clone(),
            grid,
            ladybugs,
            trees:            vec![None; count],
            trees_loaded:     false,
        });
        Ok(count)
    }

    /// Parse one tree file and bind its trees to the first ladybugs.
    ///
    /// Shorthand for [`load_tree_files`](Self::load_tree_files) with a single
    /// file.
    pub fn load_trees<S: AsRef<str>>(&mut self, lines: &[S]) -> GameResult<usize> {
        self.load_tree_files(&[lines])
    }

    /// Parse several tree files and bind their trees to ladybugs in order.
    ///
    /// File 1's trees go to the first ladybugs, file 2's to the next free
    /// ones, and so on.  Every file is parsed before anything is committed.
    /// On success the board and ladybugs restart from their loaded state and
    /// every ladybug without a new tree becomes inactive.
    ///
    /// Returns the number of trees bound.
    pub fn load_tree_files<F, S>(&mut self, files: &[F]) -> GameResult<usize>
    where
        F: AsRef<[S]>,
        S: AsRef<str>,
    {
        let board = self.board.as_mut().ok_or(GameError::BoardNotLoaded)?;
        let total = board.initial_ladybugs.count;

        let mut parsed = Vec::new();
        for file in files {
            let free = total - parsed.len();
            let trees = parse_trees(file.as_ref(), free).map_err(|e| match e {
                TreeParseError::TooManyTrees { trees, .. } => {
                    TreeParseError::TooManyTrees { trees: parsed.len() + trees, ladybugs: total }
                }
                other => other,
            });
            match trees {
                Ok(trees) => parsed.extend(trees),
                Err(e) => {
                    warn!(error = %e, "trees rejected");
                    return Err(e.into());
                }
            }
        }
        if parsed.is_empty() {
            warn!("trees rejected: no tree files given");
            return Err(TreeParseError::NoTrees.into());
        }

        board.grid = board.initial_grid.clone();
        board.ladybugs = board.initial_ladybugs.clone();
        board.ladybugs.deactivate_all();
        board.trees = vec![None; total];

        let bound = parsed.len();
        for (index, tree) in parsed.into_iter().enumerate() {
            let agent = AgentId::from_index(index);
            board.trees[index] = Some(tree);
            board.ladybugs.set_active(agent, true);
        }
        board.trees_loaded = true;
        info!(trees = bound, ladybugs = total, "trees loaded");
        Ok(bound)
    }

    // ── Turns ─────────────────────────────────────────────────────────────

    /// Tick one ladybug's tree once.
    pub fn tick(&mut self, agent: AgentId) -> GameResult<Trace> {
        let board = self.ready_mut()?;
        let Board { grid, ladybugs, trees, .. } = board;
        let tree = tree_of(trees, ladybugs, agent)?;
        Ok(tree.tick(grid, ladybugs, agent))
    }

    /// Give every active ladybug one turn, in ascending id order.
    ///
    /// `observer` sees each ladybug's trace and the board after its turn.
    /// Returns all traces concatenated.
    pub fn next_action(&mut self, observer: &mut impl TurnObserver) -> GameResult<Trace> {
        let board = self.ready_mut()?;
        let Board { grid, ladybugs, trees, .. } = board;

        let active: Vec<AgentId> = ladybugs.active_ids().collect();
        let mut all = Trace::new();
        for agent in active {
            let tree = tree_of(trees, ladybugs, agent)?;
            let trace = tree.tick(grid, ladybugs, agent);
            observer.on_trace(&trace);
            observer.on_agent_done(agent, grid, ladybugs);
            all.extend(trace);
        }
        debug!(entries = all.len(), "turn complete");
        Ok(all)
    }

    // ── Tree inspection and control ───────────────────────────────────────

    /// Id of the node `agent`'s next tick will run.
    pub fn head(&self, agent: AgentId) -> GameResult<&str> {
        Ok(self.tree(agent)?.head())
    }

    /// Restart `agent`'s tree from its root.
    pub fn reset_tree(&mut self, agent: AgentId) -> GameResult<()> {
        self.tree_mut(agent)?.reset();
        Ok(())
    }

    /// Move `agent`'s resume pointer to `node`.
    pub fn jump_to(&mut self, agent: AgentId, node: &str) -> GameResult<()> {
        Ok(self.tree_mut(agent)?.jump_to(node)?)
    }

    /// Parse `token` (`id[representation]`) and insert it right after
    /// `existing` in `agent`'s tree.
    pub fn add_sibling(&mut self, agent: AgentId, existing: &str, token: &str) -> GameResult<()> {
        let spec = parse_single_node(token)?;
        self.tree_mut(agent)?.add_sibling(existing, spec)?;
        Ok(())
    }

    /// `true` if `agent`'s tree contains a node named `node`.
    pub fn has_node(&self, agent: AgentId, node: &str) -> GameResult<bool> {
        Ok(self.tree(agent)?.has_node(node))
    }

    /// The tree bound to `agent`.
    pub fn tree(&self, agent: AgentId) -> GameResult<&BehaviorTree> {
        let board = self.ready()?;
        check_active(&board.ladybugs, agent)?;
        board.trees[agent.index()].as_ref().ok_or(GameError::InactiveLadybug(agent))
    }

    fn tree_mut(&mut self, agent: AgentId) -> GameResult<&mut BehaviorTree> {
        let Board { ladybugs, trees, .. } = self.ready_mut()?;
        tree_of(trees, ladybugs, agent)
    }

    // ── Board inspection ──────────────────────────────────────────────────

    /// Current cell and facing of an active ladybug.
    pub fn position(&self, agent: AgentId) -> GameResult<(Position, Direction)> {
        let board = self.ready()?;
        check_active(&board.ladybugs, agent)?;
        Ok((board.ladybugs.position(agent), board.ladybugs.direction(agent)))
    }

    /// Ids of all ladybugs with a bound tree, ascending.
    pub fn active_ladybugs(&self) -> GameResult<Vec<AgentId>> {
        Ok(self.ready()?.ladybugs.active_ids().collect())
    }

    pub fn grid(&self) -> GameResult<&Grid> {
        Ok(&self.loaded()?.grid)
    }

    pub fn ladybugs(&self) -> GameResult<&LadybugStore> {
        Ok(&self.loaded()?.ladybugs)
    }

    #[inline]
    pub fn is_board_loaded(&self) -> bool {
        self.board.is_some()
    }

    #[inline]
    pub fn trees_loaded(&self) -> bool {
        self.board.as_ref().is_some_and(|b| b.trees_loaded)
    }

    /// `true` if `agent` exists and has a bound tree.
    pub fn is_active(&self, agent: AgentId) -> bool {
        self.board
            .as_ref()
            .is_some_and(|b| b.ladybugs.contains(agent) && b.ladybugs.is_active(agent))
    }

    // ── State guards ──────────────────────────────────────────────────────

    fn loaded(&self) -> GameResult<&Board> {
        self.board.as_ref().ok_or(GameError::BoardNotLoaded)
    }

    fn ready(&self) -> GameResult<&Board> {
        let board = self.loaded()?;
        if !board.trees_loaded {
            return Err(GameError::TreesNotLoaded);
        }
        Ok(board)
    }

    fn ready_mut(&mut self) -> GameResult<&mut Board> {
        let board = self.board.as_mut().ok_or(GameError::BoardNotLoaded)?;
        if !board.trees_loaded {
            return Err(GameError::TreesNotLoaded);
        }
        Ok(board)
    }
}

fn check_active(ladybugs: &LadybugStore, agent: AgentId) -> GameResult<()> {
    if !ladybugs.contains(agent) {
        return Err(GameError::UnknownLadybug(agent));
    }
    if !ladybugs.is_active(agent) {
        return Err(GameError::InactiveLadybug(agent));
    }
    Ok(())
}

/// Borrow `agent`'s tree out of `trees` while the store stays borrowable.
fn tree_of<'a>(
    trees:    &'a mut [Option<BehaviorTree>],
    ladybugs: &LadybugStore,
    agent:    AgentId,
) -> GameResult<&'a mut BehaviorTree> {
    check_active(ladybugs, agent)?;
    trees[agent.index()].as_mut().ok_or(GameError::InactiveLadybug(agent))
}
