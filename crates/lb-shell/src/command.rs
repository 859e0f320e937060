//! Command-line parsing for the interactive shell.
//!
//! Commands are whitespace-separated words.  Multi-word keywords
//! (`load board`, `next action`, ...) are matched as a prefix; the remaining
//! words are arguments.  The node argument of `add sibling` is the rest of
//! the line, so it may contain spaces (`X[fly 2,3]`).

use std::path::PathBuf;

use lb_core::AgentId;

use crate::{ShellError, ShellResult};

/// One parsed shell command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LoadBoard(PathBuf),
    LoadTrees(Vec<PathBuf>),
    ListLadybugs,
    NextAction,
    PrintPosition(AgentId),
    PrintBoard,
    Head(AgentId),
    ResetTree(AgentId),
    JumpTo { agent: AgentId, node: String },
    AddSibling { agent: AgentId, existing: String, node: String },
    Quit,
}

/// Keyword prefix and usage text of every command, for arity errors.
const USAGE: &[(&[&str], &str)] = &[
    (&["load", "board"],     "load board <path>"),
    (&["load", "trees"],     "load trees <path>..."),
    (&["list", "ladybugs"],  "list ladybugs"),
    (&["next", "action"],    "next action"),
    (&["print", "position"], "print position <id>"),
    (&["print", "board"],    "print board"),
    (&["head"],              "head <id>"),
    (&["reset", "tree"],     "reset tree <id>"),
    (&["jump", "to"],        "jump to <id> <node>"),
    (&["add", "sibling"],    "add sibling <id> <existing> <node>"),
    (&["quit"],              "quit"),
];

impl Command {
    /// Parse one input line.
    pub fn parse(line: &str) -> ShellResult<Command> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let command = match words.as_slice() {
            ["load", "board", path] => Command::LoadBoard(PathBuf::from(path)),
            ["load", "trees", paths @ ..] if !paths.is_empty() => {
                Command::LoadTrees(paths.iter().map(PathBuf::from).collect())
            }
            ["list", "ladybugs"] => Command::ListLadybugs,
            ["next", "action"] => Command::NextAction,
            ["print", "position", id] => Command::PrintPosition(ladybug(id)?),
            ["print", "board"] => Command::PrintBoard,
            ["head", id] => Command::Head(ladybug(id)?),
            ["reset", "tree", id] => Command::ResetTree(ladybug(id)?),
            ["jump", "to", id, node] => Command::JumpTo {
                agent: ladybug(id)?,
                node:  node.to_string(),
            },
            ["add", "sibling", id, existing, node @ ..] if !node.is_empty() => Command::AddSibling {
                agent:    ladybug(id)?,
                existing: existing.to_string(),
                node:     node.join(" "),
            },
            ["quit"] => Command::Quit,
            _ => return Err(mismatch(&words, line)),
        };
        Ok(command)
    }
}

/// A known keyword with the wrong arguments is a usage error; anything else
/// is unknown.
fn mismatch(words: &[&str], line: &str) -> ShellError {
    USAGE
        .iter()
        .find(|(keyword, _)| words.starts_with(keyword))
        .map(|&(_, usage)| ShellError::Usage(usage))
        .unwrap_or_else(|| ShellError::UnknownCommand(line.trim().to_string()))
}

/// Ladybug ids are positive integers.
fn ladybug(text: &str) -> ShellResult<AgentId> {
    text.parse::<u32>()
        .ok()
        .filter(|&n| n > 0)
        .map(AgentId)
        .ok_or_else(|| ShellError::InvalidLadybug(text.to_string()))
}
