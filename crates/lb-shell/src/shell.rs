//! The command interpreter.
//!
//! [`Shell`] owns a [`Game`] and two writers: product output (echoed files,
//! traces, boards) goes to `out`, user errors go to `err` as
//! `Error, <message>`.  Both are generic so tests can drive the shell over
//! in-memory buffers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::debug;

use lb_agent::LadybugStore;
use lb_behavior::Trace;
use lb_core::AgentId;
use lb_grid::Grid;
use lb_sim::{Game, TurnObserver};

use crate::{Command, ShellError, ShellResult, render};

/// Whether the read loop keeps going after a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<O: Write, E: Write> {
    game: Game,
    out:  O,
    err:  E,
}

impl<O: Write, E: Write> Shell<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { game: Game::new(), out, err }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Unwrap the writers (e.g. to inspect buffered output in tests).
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Only I/O failures end the loop early; command errors are reported on
    /// `err` and reading continues.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parse and execute one line, reporting command errors on `err`.
    pub fn handle_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        match Command::parse(line).and_then(|command| self.execute(command)) {
            Ok(flow) => Ok(flow),
            Err(ShellError::Output(e)) => Err(e),
            Err(e) => {
                debug!(line, error = %e, "command failed");
                writeln!(self.err, "Error, {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute one command.  Errors are returned, not printed.
    pub fn execute(&mut self, command: Command) -> ShellResult<Flow> {
        match command {
            Command::LoadBoard(path) => {
                let lines = read_lines(&path)?;
                self.echo(&lines)?;
                self.game.load_board(&lines)?;
            }
            Command::LoadTrees(paths) => {
                let mut files = Vec::with_capacity(paths.len());
                for path in &paths {
                    let lines = read_lines(path)?;
                    self.echo(&lines)?;
                    files.push(lines);
                }
                self.game.load_tree_files(&files)?;
            }
            Command::ListLadybugs => {
                let ids: Vec<String> = self
                    .game
                    .active_ladybugs()?
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                writeln!(self.out, "{}", ids.join(" "))?;
            }
            Command::NextAction => {
                let mut printer = TurnPrinter::new(&mut self.out);
                self.game.next_action(&mut printer)?;
                if let Some(e) = printer.take_error() {
                    return Err(ShellError::Output(e));
                }
            }
            Command::PrintPosition(agent) => {
                let (position, _) = self.game.position(agent)?;
                writeln!(self.out, "{}", render::position(position))?;
            }
            Command::PrintBoard => {
                let grid = self.game.grid()?;
                let ladybugs = self.game.ladybugs()?;
                let lines = if self.game.trees_loaded() {
                    render::board(grid, ladybugs, ladybugs.active_ids())
                } else {
                    render::board(grid, ladybugs, ladybugs.agent_ids())
                };
                for line in lines {
                    writeln!(self.out, "{line}")?;
                }
            }
            Command::Head(agent) => {
                let head = self.game.head(agent)?;
                writeln!(self.out, "{head}")?;
            }
            Command::ResetTree(agent) => self.game.reset_tree(agent)?,
            Command::JumpTo { agent, node } => self.game.jump_to(agent, &node)?,
            Command::AddSibling { agent, existing, node } => {
                self.game.add_sibling(agent, &existing, &node)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn echo(&mut self, lines: &[String]) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        Ok(())
    }
}

fn read_lines(path: &Path) -> ShellResult<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|source| ShellError::Read {
        path: path.display().to_string(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

// ── Turn printer ──────────────────────────────────────────────────────────────

/// A [`TurnObserver`] that prints each ladybug's trace followed by the board.
///
/// Errors from the writer are stored internally because `TurnObserver`
/// methods have no return value.  Check with
/// [`take_error`][Self::take_error] after the turn.
pub struct TurnPrinter<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl<W: Write> TurnPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    fn write_lines(&mut self, lines: impl IntoIterator<Item = String>) {
        if self.last_error.is_some() {
            return;
        }
        for line in lines {
            if let Err(e) = writeln!(self.out, "{line}") {
                // Keep only the first error.
                self.last_error = Some(e);
                return;
            }
        }
    }
}

impl<W: Write> TurnObserver for TurnPrinter<W> {
    fn on_trace(&mut self, trace: &Trace) {
        let lines: Vec<String> = trace.into_iter().map(render::trace_line).collect();
        self.write_lines(lines);
    }

    fn on_agent_done(&mut self, _agent: AgentId, grid: &Grid, ladybugs: &LadybugStore) {
        self.write_lines(render::board(grid, ladybugs, ladybugs.active_ids()));
    }
}
