//! Rendering a tree back into its notation.

use crate::BehaviorTree;

impl BehaviorTree {
    /// The tree as notation text: a header, then one edge per parent/child
    /// pair in depth-first pre-order.  Each node's representation appears at
    /// its first occurrence; the root's on the first edge.  A childless root
    /// is written as a single standalone node line.
    ///
    /// Parsing the output yields a tree with the same ids, edges and kinds.
    pub fn to_notation(&self) -> String {
        let mut out = String::from("flowchart TD\n");
        let root = self.get(self.root());
        if root.children().is_empty() {
            out.push_str(&format!("    {}{}\n", root.id(), root.kind().representation()));
            return out;
        }

        let mut root_declared = false;
        for idx in self.preorder() {
            let parent = self.get(idx);
            for &c in parent.children() {
                let child = self.get(c);
                let left = if root_declared {
                    parent.id().to_string()
                } else {
                    root_declared = true;
                    format!("{}{}", parent.id(), parent.kind().representation())
                };
                out.push_str(&format!(
                    "    {left} --> {}{}\n",
                    child.id(),
                    child.kind().representation()
                ));
            }
        }
        out
    }
}
