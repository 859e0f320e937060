//! Text rendering of boards, positions and trace lines.
//!
//! Everything shown to the user uses 1-based `(x, y)` coordinates, column
//! first.

use rustc_hash::FxHashMap;

use lb_agent::LadybugStore;
use lb_behavior::{NodeKind, TraceEntry};
use lb_core::{AgentId, Position};
use lb_grid::Grid;

const CORNER:     char = '+';
const HORIZONTAL: char = '-';
const VERTICAL:   char = '|';

/// `(x, y)`, 1-based.
pub fn position(p: Position) -> String {
    let (x, y) = p.to_display();
    format!("({x}, {y})")
}

/// One trace entry as `<agent> <node> <type> <EVENT>`.
///
/// Leaf coordinates are shown as `(x, y)`, e.g. `1 F fly (3, 2) SUCCESS`.
pub fn trace_line(entry: &TraceEntry) -> String {
    let kind = match entry.kind {
        NodeKind::Action(a)    => with_positions(a.keyword(), entry.kind),
        NodeKind::Condition(c) => with_positions(c.keyword(), entry.kind),
        composite              => composite.to_string(),
    };
    format!("{} {} {} {}", entry.agent, entry.node_id, kind, entry.event)
}

fn with_positions(keyword: &str, kind: NodeKind) -> String {
    let mut text = keyword.to_string();
    for p in kind.positions() {
        text.push(' ');
        text.push_str(&position(p));
    }
    text
}

/// The board framed by a border, with the `visible` ladybugs drawn as their
/// direction symbol on top of the cells.
pub fn board(
    grid:     &Grid,
    ladybugs: &LadybugStore,
    visible:  impl IntoIterator<Item = AgentId>,
) -> Vec<String> {
    let glyphs: FxHashMap<Position, char> = visible
        .into_iter()
        .map(|agent| (ladybugs.position(agent), ladybugs.direction(agent).symbol()))
        .collect();

    let border = format!("{CORNER}{}{CORNER}", HORIZONTAL.to_string().repeat(grid.columns()));
    let mut lines = Vec::with_capacity(grid.rows() + 2);
    lines.push(border.clone());
    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.columns() + 2);
        line.push(VERTICAL);
        for column in 0..grid.columns() {
            let p = Position::new(column as i32, row as i32);
            line.push(glyphs.get(&p).copied().unwrap_or_else(|| grid.cell_at(p).symbol()));
        }
        line.push(VERTICAL);
        lines.push(line);
    }
    lines.push(border);
    lines
}
