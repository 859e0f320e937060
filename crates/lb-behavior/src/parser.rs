//! Tree notation parser.
//!
//! # Format
//!
//! A flow-chart edge list.  Each `flowchart TD` header opens a new tree;
//! every following non-blank line up to the next header is an edge:
//!
//! ```text
//! flowchart TD
//!     A[->] --> B([treeFront])
//!     A --> C[?]
//!     C --> D[turnLeft]
//!     C --> E[move]
//! ```
//!
//! The first edge's parent is the root.  A node's representation is given
//! once, at its first occurrence; later occurrences use the bare id.  The
//! child side of an edge always carries a representation, so every edge
//! introduces a new node.  A block may instead consist of one standalone
//! node line (`A[move]`), which becomes a one-node tree.
//!
//! | Representation              | Node                                  |
//! |-----------------------------|---------------------------------------|
//! | `[?]`                       | Fallback                              |
//! | `[->]`                      | Sequence                              |
//! | `[=K>]`                     | Parallel, threshold `K >= 1`          |
//! | `([condition])`             | Condition                             |
//! | `[action]`                  | Action                                |
//!
//! Composite markers are also accepted in round brackets (`([?])`).
//! Coordinates are written `x,y`, 1-based, column first.  Two pairs are
//! separated by whitespace or a comma (`1,1 3,3`, `1,1, 3,3`, `1,1,3,3`).

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use lb_core::{NodeIdx, Position};

use crate::{
    ActionKind, BehaviorTree, ConditionKind, NodeKind, NodeSpec, ParseResult, TreeBuilder,
    TreeParseError,
};

const ID: &str = r"[^\s\[(]+";
const REPRESENTATION: &str = r"\(\[[^\]]+\]\)|\[[^\]]+\]";
const PAIR: &str = r"(-?\d+)\s*,\s*(-?\d+)";

static HEADER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*flowchart TD\s*$").unwrap());

static EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<parent>{ID}(?:{REPRESENTATION})?)\s*-->\s*(?P<child>{ID}(?:{REPRESENTATION}))\s*$"
    ))
    .unwrap()
});

static NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^(?P<id>{ID})(?P<repr>{REPRESENTATION})?$")).unwrap()
});

static PARALLEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^=(?P<threshold>[1-9]\d*)>$").unwrap());

static PAIRS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{PAIR}(?:(?:\s*,\s*|\s+){PAIR})*$")).unwrap());

static PAIR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(PAIR).unwrap());

// ── Entry points ──────────────────────────────────────────────────────────────

/// Parse every tree in `lines`.
///
/// Fails on the first violation; nothing is returned for a partially valid
/// input.  More headers than `ladybugs` is an error, as is an input without
/// any tree.
pub fn parse_trees<S: AsRef<str>>(lines: &[S], ladybugs: usize) -> ParseResult<Vec<BehaviorTree>> {
    let mut trees   = Vec::new();
    let mut block   = None::<Block>;
    let mut headers = 0;

    for (i, raw) in lines.iter().enumerate() {
        let line_no = i + 1;
        let line = raw.as_ref().trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        if HEADER_RE.is_match(line) {
            if let Some(done) = block.take() {
                trees.push(done.finish()?);
            }
            headers += 1;
            if headers > ladybugs {
                return Err(TreeParseError::TooManyTrees { trees: headers, ladybugs });
            }
            block = Some(Block::new(headers));
            continue;
        }
        match block.as_mut() {
            Some(b) => b.add_line(line, line_no)?,
            None => return Err(TreeParseError::MissingHeader { line: line_no }),
        }
    }
    if let Some(done) = block.take() {
        trees.push(done.finish()?);
    }
    if trees.is_empty() {
        return Err(TreeParseError::NoTrees);
    }
    debug!(trees = trees.len(), "tree notation parsed");
    Ok(trees)
}

/// Parse one `id[representation]` token, as used for runtime sibling
/// insertion.  The representation is mandatory.
pub fn parse_single_node(token: &str) -> ParseResult<NodeSpec> {
    let token = token.trim();
    let invalid = || TreeParseError::InvalidNode { line: 0, text: token.to_string() };
    let caps = NODE_RE.captures(token).ok_or_else(invalid)?;
    let repr = caps.name("repr").ok_or_else(invalid)?;
    let kind = parse_kind(repr.as_str(), 0)?;
    Ok(NodeSpec::new(&caps["id"], kind))
}

// ── Block ─────────────────────────────────────────────────────────────────────

/// One header block under construction.
struct Block {
    number:     usize,
    builder:    TreeBuilder,
    root:       Option<NodeIdx>,
    has_action: bool,
}

impl Block {
    fn new(number: usize) -> Self {
        Self { number, builder: TreeBuilder::new(), root: None, has_action: false }
    }

    fn add_line(&mut self, line: &str, line_no: usize) -> ParseResult<()> {
        if let Some(caps) = EDGE_RE.captures(line) {
            let parent = self.side(&caps["parent"], line_no)?;
            let child  = self.side(&caps["child"], line_no)?;
            let node = self.builder.node(parent);
            let (id, kind) = (node.id().to_string(), node.kind().category());
            self.builder
                .add_child(parent, child)
                .map_err(|_| TreeParseError::NotComposite { line: line_no, id, kind })?;
            self.root.get_or_insert(parent);
            return Ok(());
        }

        // A lone node line is only a root declaration at the top of a block.
        if self.builder.is_empty() {
            if let Some(caps) = NODE_RE.captures(line.trim()) {
                if caps.name("repr").is_some() {
                    let root = self.side(line.trim(), line_no)?;
                    self.root = Some(root);
                    return Ok(());
                }
            }
        }
        Err(TreeParseError::InvalidEdge { line: line_no, text: line.trim().to_string() })
    }

    /// Resolve one side of an edge to a node, creating it on first sight.
    fn side(&mut self, token: &str, line_no: usize) -> ParseResult<NodeIdx> {
        let invalid = || TreeParseError::InvalidNode { line: line_no, text: token.to_string() };
        let caps = NODE_RE.captures(token).ok_or_else(invalid)?;
        let id = &caps["id"];

        match (self.builder.lookup(id), caps.name("repr")) {
            (Some(idx), None) => Ok(idx),
            (Some(_), Some(_)) => Err(TreeParseError::Redefinition { line: line_no, id: id.to_string() }),
            (None, None) => Err(invalid()),
            (None, Some(repr)) => {
                let kind = parse_kind(repr.as_str(), line_no)?;
                self.has_action |= kind.is_action();
                self.builder
                    .add_node(NodeSpec::new(id, kind))
                    .map_err(|_| TreeParseError::Redefinition { line: line_no, id: id.to_string() })
            }
        }
    }

    fn finish(self) -> ParseResult<BehaviorTree> {
        let Some(root) = self.root else {
            return Err(TreeParseError::NoAction { tree: self.number });
        };
        if let Some(id) = self.builder.unreachable_from(root).first() {
            return Err(TreeParseError::Disconnected { tree: self.number, id: id.to_string() });
        }
        if !self.has_action {
            return Err(TreeParseError::NoAction { tree: self.number });
        }
        Ok(self.builder.build(root))
    }
}

// ── Representations ───────────────────────────────────────────────────────────

/// Map a bracketed representation to a node kind.
fn parse_kind(repr: &str, line: usize) -> ParseResult<NodeKind> {
    let (inner, round) = if let Some(s) = repr.strip_prefix("([").and_then(|s| s.strip_suffix("])")) {
        (s.trim(), true)
    } else if let Some(s) = repr.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        (s.trim(), false)
    } else {
        return Err(TreeParseError::InvalidNode { line, text: repr.to_string() });
    };

    match inner {
        "?"  => return Ok(NodeKind::Fallback),
        "->" => return Ok(NodeKind::Sequence),
        _ => {}
    }
    if inner.starts_with('=') && inner.ends_with('>') {
        let threshold = PARALLEL_RE
            .captures(inner)
            .and_then(|c| c["threshold"].parse::<u32>().ok())
            .ok_or_else(|| TreeParseError::InvalidThreshold { line, text: inner.to_string() })?;
        return Ok(NodeKind::Parallel { threshold });
    }
    if round {
        parse_condition(inner, line).map(NodeKind::Condition)
    } else {
        parse_action(inner, line).map(NodeKind::Action)
    }
}

/// Split `text` into its keyword and the trimmed remainder.
fn keyword_and_args(text: &str) -> (&str, &str) {
    match text.split_once(char::is_whitespace) {
        Some((keyword, args)) => (keyword, args.trim()),
        None => (text, ""),
    }
}

fn parse_action(text: &str, line: usize) -> ParseResult<ActionKind> {
    let (keyword, args) = keyword_and_args(text);
    let action = match keyword {
        "move"      => ActionKind::Move,
        "turnLeft"  => ActionKind::TurnLeft,
        "turnRight" => ActionKind::TurnRight,
        "takeLeaf"  => ActionKind::TakeLeaf,
        "placeLeaf" => ActionKind::PlaceLeaf,
        "fly" => {
            return match parse_positions(args, line)?.as_slice() {
                [goal] => Ok(ActionKind::Fly(*goal)),
                _ => Err(TreeParseError::InvalidCoordinates { line, text: args.to_string() }),
            };
        }
        _ => return Err(TreeParseError::UnknownAction { line, keyword: keyword.to_string() }),
    };
    if !args.is_empty() {
        return Err(TreeParseError::UnexpectedArguments { line, keyword: keyword.to_string() });
    }
    Ok(action)
}

fn parse_condition(text: &str, line: usize) -> ParseResult<ConditionKind> {
    let (keyword, args) = keyword_and_args(text);
    if keyword == "existsPath" {
        return match parse_positions(args, line)?.as_slice() {
            [goal] => Ok(ConditionKind::ExistsPathTo(*goal)),
            [start, goal] => Ok(ConditionKind::ExistsPathBetween(*start, *goal)),
            _ => Err(TreeParseError::InvalidCoordinates { line, text: args.to_string() }),
        };
    }
    let condition = match keyword {
        "atEdge"        => ConditionKind::AtEdge,
        "leafFront"     => ConditionKind::LeafFront,
        "treeFront"     => ConditionKind::TreeFront,
        "mushroomFront" => ConditionKind::MushroomFront,
        _ => return Err(TreeParseError::UnknownCondition { line, text: text.to_string() }),
    };
    if !args.is_empty() {
        return Err(TreeParseError::UnknownCondition { line, text: text.to_string() });
    }
    Ok(condition)
}

/// `x,y` pairs separated by whitespace or a comma, converted to internal positions.
fn parse_positions(text: &str, line: usize) -> ParseResult<Vec<Position>> {
    let invalid = || TreeParseError::InvalidCoordinates { line, text: text.to_string() };
    if !PAIRS_RE.is_match(text) {
        return Err(invalid());
    }
    PAIR_RE
        .captures_iter(text)
        .map(|c| {
            let x = c[1].parse::<i32>().ok().filter(|&x| x > i32::MIN).ok_or_else(invalid)?;
            let y = c[2].parse::<i32>().ok().filter(|&y| y > i32::MIN).ok_or_else(invalid)?;
            Ok(Position::from_display(x, y))
        })
        .collect()
}
