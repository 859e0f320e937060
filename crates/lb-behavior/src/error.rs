//! Behavior-tree error types.
//!
//! Two families: [`BehaviorError`] for edits on a built tree, and
//! [`TreeParseError`] for rejected tree notation.  Neither covers runtime
//! action failures, which are ordinary `NodeStatus::Failure` outcomes.

use thiserror::Error;

/// Errors from operations on an existing [`BehaviorTree`](crate::BehaviorTree).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    #[error("node '{0}' already exists")]
    DuplicateNode(String),

    #[error("the root node '{0}' can not have siblings")]
    RootSibling(String),

    #[error("node '{0}' is not a composite and can not have children")]
    NotComposite(String),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;

/// Errors from [`parse_trees`](crate::parse_trees) and
/// [`parse_single_node`](crate::parse_single_node).
///
/// `line` is the 1-based line number inside the parsed input.  Errors raised
/// for a single node token carry `line: 0`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeParseError {
    #[error("line {line}: expected 'flowchart TD' before any edge")]
    MissingHeader { line: usize },

    #[error("line {line}: invalid edge syntax: {text}")]
    InvalidEdge { line: usize, text: String },

    #[error("line {line}: invalid node format: {text}")]
    InvalidNode { line: usize, text: String },

    #[error("line {line}: unknown action: {keyword}")]
    UnknownAction { line: usize, keyword: String },

    #[error("line {line}: unknown condition: {text}")]
    UnknownCondition { line: usize, text: String },

    #[error("line {line}: invalid parallel threshold: {text}")]
    InvalidThreshold { line: usize, text: String },

    #[error("line {line}: invalid coordinates: {text}")]
    InvalidCoordinates { line: usize, text: String },

    #[error("line {line}: action '{keyword}' takes no arguments")]
    UnexpectedArguments { line: usize, keyword: String },

    #[error("line {line}: node '{id}' is already defined")]
    Redefinition { line: usize, id: String },

    #[error("line {line}: {kind} node '{id}' can not be a parent")]
    NotComposite { line: usize, id: String, kind: &'static str },

    #[error("tree {tree}: node '{id}' is not reachable from the root")]
    Disconnected { tree: usize, id: String },

    #[error("tree {tree}: a tree must contain at least one action")]
    NoAction { tree: usize },

    #[error("no tree found")]
    NoTrees,

    #[error("{trees} trees but only {ladybugs} ladybugs")]
    TooManyTrees { trees: usize, ladybugs: usize },
}

pub type ParseResult<T> = Result<T, TreeParseError>;
