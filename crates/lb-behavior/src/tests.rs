//! Unit tests for lb-behavior.
//!
//! Tick tests compare whole traces as `Display` lines, the same text a user
//! sees, so each expected trace reads as a transcript.

#[cfg(test)]
mod helpers {
    use lb_agent::{LadybugStore, LadybugStoreBuilder};
    use lb_core::AgentId;
    use lb_grid::{Grid, parse_board};

    use crate::{BehaviorTree, parse_trees};

    pub const A: AgentId = AgentId(1);

    pub struct World {
        pub grid:   Grid,
        pub agents: LadybugStore,
        pub tree:   BehaviorTree,
    }

    impl World {
        pub fn new(board: &[&str], notation: &str) -> World {
            let (grid, spawns) = parse_board(board).unwrap();
            let agents = LadybugStoreBuilder::from_spawns(&spawns).build();
            let lines: Vec<&str> = notation.lines().collect();
            let tree = parse_trees(&lines, agents.count).unwrap().remove(0);
            World { grid, agents, tree }
        }

        /// Tick ladybug 1 and return the trace lines.
        pub fn tick(&mut self) -> Vec<String> {
            self.tree.tick(&mut self.grid, &mut self.agents, A).lines()
        }
    }

    pub fn parse(notation: &str) -> BehaviorTree {
        let lines: Vec<&str> = notation.lines().collect();
        parse_trees(&lines, 1).unwrap().remove(0)
    }

    pub const SEQUENCE: &str = "\
flowchart TD
    S[->] --> T[turnRight]
    S --> M[move]";
}

// ── Node kinds ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinds {
    use lb_core::Position;

    use crate::{ActionKind, ConditionKind, NodeKind, NodeStatus};

    #[test]
    fn display_uses_internal_coordinates() {
        let fly = NodeKind::Action(ActionKind::Fly(Position::new(2, 0)));
        assert_eq!(fly.to_string(), "fly 2,0");
        let between = NodeKind::Condition(ConditionKind::ExistsPathBetween(
            Position::new(0, 0),
            Position::new(2, 2),
        ));
        assert_eq!(between.to_string(), "existsPath 0,0 2,2");
        assert_eq!(NodeKind::Parallel { threshold: 3 }.to_string(), "parallel");
        assert_eq!(NodeKind::Action(ActionKind::TurnLeft).to_string(), "turnLeft");
    }

    #[test]
    fn representation_uses_notation_coordinates() {
        let fly = NodeKind::Action(ActionKind::Fly(Position::new(2, 0)));
        assert_eq!(fly.representation(), "[fly 3,1]");
        let to = NodeKind::Condition(ConditionKind::ExistsPathTo(Position::new(0, 4)));
        assert_eq!(to.representation(), "([existsPath 1,5])");
        assert_eq!(NodeKind::Fallback.representation(), "[?]");
        assert_eq!(NodeKind::Sequence.representation(), "[->]");
        assert_eq!(NodeKind::Parallel { threshold: 2 }.representation(), "[=2>]");
        assert_eq!(NodeKind::Condition(ConditionKind::AtEdge).representation(), "([atEdge])");
    }

    #[test]
    fn classification() {
        assert!(NodeKind::Sequence.is_composite());
        assert!(!NodeKind::Action(ActionKind::Move).is_composite());
        assert!(NodeKind::Action(ActionKind::Move).is_action());
        assert!(!NodeKind::Condition(ConditionKind::TreeFront).is_action());
        assert!(!NodeStatus::Running.is_finished());
        assert!(NodeStatus::Failure.is_finished());
    }
}

// ── Parser ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parser {
    use lb_core::Position;

    use super::helpers::parse;
    use crate::{
        ActionKind, ConditionKind, NodeKind, NodeSpec, TreeParseError, parse_single_node,
        parse_trees,
    };

    fn parse_err(notation: &str, ladybugs: usize) -> TreeParseError {
        let lines: Vec<&str> = notation.lines().collect();
        parse_trees(&lines, ladybugs).unwrap_err()
    }

    fn kind_of(tree: &crate::BehaviorTree, id: &str) -> NodeKind {
        tree.node(id).unwrap().kind()
    }

    #[test]
    fn standalone_root_line() {
        let tree = parse("flowchart TD\nA[move]");
        assert_eq!(tree.root_id(), "A");
        assert_eq!(tree.len(), 1);
        assert_eq!(kind_of(&tree, "A"), NodeKind::Action(ActionKind::Move));
    }

    #[test]
    fn edges_build_ordered_children() {
        let tree = parse(
            "flowchart TD
    A[->] --> B([treeFront])
    A --> C[?]
    C --> D[turnLeft]
    C --> E[move]",
        );
        assert_eq!(tree.root_id(), "A");
        let ids = |id: &str| -> Vec<String> {
            tree.node(id)
                .unwrap()
                .children()
                .iter()
                .map(|&c| tree.get(c).id().to_string())
                .collect()
        };
        assert_eq!(ids("A"), vec!["B", "C"]);
        assert_eq!(ids("C"), vec!["D", "E"]);
        assert_eq!(kind_of(&tree, "B"), NodeKind::Condition(ConditionKind::TreeFront));
        assert_eq!(kind_of(&tree, "C"), NodeKind::Fallback);
        assert_eq!(tree.get(tree.lookup("D").unwrap()).parent(), tree.lookup("C"));
    }

    #[test]
    fn indentation_and_blank_lines_optional() {
        let tree = parse("\nflowchart TD\n\nA[->] --> B[move]\n\n  A --> C[turnLeft]\n");
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn composite_markers_in_round_brackets() {
        let tree = parse("flowchart TD\n    A([?]) --> B([->])\n    B --> C([=1>])\n    C --> D[move]");
        assert_eq!(kind_of(&tree, "A"), NodeKind::Fallback);
        assert_eq!(kind_of(&tree, "B"), NodeKind::Sequence);
        assert_eq!(kind_of(&tree, "C"), NodeKind::Parallel { threshold: 1 });
    }

    #[test]
    fn leaf_parameters_are_one_based_column_first() {
        let tree = parse(
            "flowchart TD
    A[=2>] --> B[fly 3,1]
    A --> C([existsPath 2,4])
    A --> D([existsPath 1,1 -2, 7])",
        );
        assert_eq!(kind_of(&tree, "A"), NodeKind::Parallel { threshold: 2 });
        assert_eq!(kind_of(&tree, "B"), NodeKind::Action(ActionKind::Fly(Position::new(2, 0))));
        assert_eq!(
            kind_of(&tree, "C"),
            NodeKind::Condition(ConditionKind::ExistsPathTo(Position::new(1, 3)))
        );
        assert_eq!(
            kind_of(&tree, "D"),
            NodeKind::Condition(ConditionKind::ExistsPathBetween(
                Position::new(0, 0),
                Position::new(-3, 6)
            ))
        );
    }

    #[test]
    fn coordinate_pairs_separated_by_comma() {
        let tree = parse(
            "flowchart TD
    A[->] --> B([existsPath 1,1, 3,3])
    A --> C([existsPath 1,1,3,3])
    A --> D([existsPath 1, 1 ,3 , 3])
    A --> E[move]",
        );
        let between = NodeKind::Condition(ConditionKind::ExistsPathBetween(
            Position::new(0, 0),
            Position::new(2, 2),
        ));
        for id in ["B", "C", "D"] {
            assert_eq!(kind_of(&tree, id), between, "{id}");
        }
    }

    #[test]
    fn several_trees() {
        let lines = [
            "flowchart TD",
            "    A[->] --> B[move]",
            "flowchart TD",
            "    A[?] --> B[turnLeft]",
        ];
        let trees = parse_trees(&lines, 2).unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[1].node("A").unwrap().kind(), NodeKind::Fallback);
    }

    #[test]
    fn more_trees_than_ladybugs() {
        let err = parse_err("flowchart TD\nA[move]\nflowchart TD\nB[move]", 1);
        assert_eq!(err, TreeParseError::TooManyTrees { trees: 2, ladybugs: 1 });
    }

    #[test]
    fn empty_input() {
        assert_eq!(parse_err("", 3), TreeParseError::NoTrees);
        assert_eq!(parse_err("\n\n", 3), TreeParseError::NoTrees);
    }

    #[test]
    fn edge_before_header() {
        assert_eq!(parse_err("A[->] --> B[move]", 1), TreeParseError::MissingHeader { line: 1 });
        assert_eq!(
            parse_err("flowchart LR\nA[->] --> B[move]", 1),
            TreeParseError::MissingHeader { line: 1 }
        );
    }

    #[test]
    fn malformed_edge() {
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] -> B[move]", 1),
            TreeParseError::InvalidEdge { line: 2, .. }
        ));
        // The child must always carry a representation.
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] --> B[move]\n    A --> B", 1),
            TreeParseError::InvalidEdge { line: 3, .. }
        ));
        // A lone node line after edges is not a root declaration.
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] --> B[move]\n    C[move]", 1),
            TreeParseError::InvalidEdge { line: 3, .. }
        ));
    }

    #[test]
    fn undeclared_parent() {
        assert!(matches!(
            parse_err("flowchart TD\n    A --> B[move]", 1),
            TreeParseError::InvalidNode { line: 2, .. }
        ));
    }

    #[test]
    fn redefinition() {
        let err = parse_err("flowchart TD\n    A[->] --> B[move]\n    A[?] --> C[move]", 1);
        assert_eq!(err, TreeParseError::Redefinition { line: 3, id: "A".into() });
        let err = parse_err("flowchart TD\n    A[->] --> B[move]\n    A --> B[move]", 1);
        assert_eq!(err, TreeParseError::Redefinition { line: 3, id: "B".into() });
    }

    #[test]
    fn leaf_as_parent() {
        let err = parse_err("flowchart TD\n    A[->] --> B[move]\n    B --> C[move]", 1);
        assert_eq!(err, TreeParseError::NotComposite { line: 3, id: "B".into(), kind: "action" });
    }

    #[test]
    fn tree_without_action() {
        let err = parse_err("flowchart TD\n    A[->] --> B([atEdge])", 1);
        assert_eq!(err, TreeParseError::NoAction { tree: 1 });
        let err = parse_err("flowchart TD\nA[move]\nflowchart TD\n", 2);
        assert_eq!(err, TreeParseError::NoAction { tree: 2 });
    }

    #[test]
    fn unreachable_subtree() {
        let err = parse_err("flowchart TD\n    A[->] --> B[move]\n    C[?] --> D[move]", 1);
        assert_eq!(err, TreeParseError::Disconnected { tree: 1, id: "C".into() });
    }

    #[test]
    fn bad_thresholds() {
        for text in ["[=0>]", "[=x>]", "[=>]", "[=99999999999>]"] {
            let notation = format!("flowchart TD\n    A{text} --> B[move]");
            assert!(
                matches!(parse_err(&notation, 1), TreeParseError::InvalidThreshold { line: 2, .. }),
                "{text}"
            );
        }
    }

    #[test]
    fn unknown_keywords() {
        assert_eq!(
            parse_err("flowchart TD\n    A[->] --> B[jump]", 1),
            TreeParseError::UnknownAction { line: 2, keyword: "jump".into() }
        );
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] --> B([isDark])", 1),
            TreeParseError::UnknownCondition { line: 2, .. }
        ));
        // Actions are never written in round brackets.
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] --> B([move])", 1),
            TreeParseError::UnknownCondition { line: 2, .. }
        ));
        assert!(matches!(
            parse_err("flowchart TD\n    A[->] --> B([atEdge 1,1])", 1),
            TreeParseError::UnknownCondition { line: 2, .. }
        ));
    }

    #[test]
    fn argument_checks() {
        assert_eq!(
            parse_err("flowchart TD\n    A[->] --> B[move 1,1]", 1),
            TreeParseError::UnexpectedArguments { line: 2, keyword: "move".into() }
        );
        for text in ["[fly]", "[fly 1]", "[fly 1,1 2,2]", "[fly a,b]", "([existsPath])",
                     "([existsPath 1,1 2,2 3,3])", "([existsPath 1,1,2,2,3,3])",
                     "([existsPath 1,1,1])", "([existsPath 1,1,,2,2])"] {
            let notation = format!("flowchart TD\n    A[->] --> B{text}\n    A --> C[move]");
            assert!(
                matches!(parse_err(&notation, 1), TreeParseError::InvalidCoordinates { line: 2, .. }),
                "{text}"
            );
        }
    }

    #[test]
    fn single_node_token() {
        assert_eq!(
            parse_single_node("N[turnLeft]").unwrap(),
            NodeSpec::new("N", NodeKind::Action(ActionKind::TurnLeft))
        );
        assert_eq!(
            parse_single_node("  Q([leafFront]) ").unwrap(),
            NodeSpec::new("Q", NodeKind::Condition(ConditionKind::LeafFront))
        );
        assert!(matches!(parse_single_node("N"), Err(TreeParseError::InvalidNode { .. })));
        assert!(matches!(parse_single_node("N [move]"), Err(TreeParseError::InvalidNode { .. })));
        assert!(matches!(parse_single_node("N[sing]"), Err(TreeParseError::UnknownAction { .. })));
    }
}

// ── Tick engine ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use lb_core::{Direction, Position};

    use super::helpers::{A, SEQUENCE, World};
    use crate::NodeStatus;

    #[test]
    fn single_action_off_grid_fails() {
        let mut w = World::new(&["^..", ".#."], "flowchart TD\nA[move]");
        assert_eq!(w.tick(), vec!["1 A move FAILURE"]);
        assert_eq!(w.agents.position(A), Position::new(0, 0));
        // Every further tick runs the same single action again.
        assert_eq!(w.tick(), vec!["1 A move FAILURE"]);
    }

    #[test]
    fn sequence_runs_one_action_per_tick() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        assert_eq!(w.tick(), vec!["1 S sequence ENTRY", "1 T turnRight SUCCESS"]);
        assert_eq!(w.agents.direction(A), Direction::Right);
        assert_eq!(w.agents.position(A), Position::new(0, 0));

        assert_eq!(w.tick(), vec!["1 M move SUCCESS"]);
        assert_eq!(w.agents.position(A), Position::new(1, 0));
        assert_eq!(w.agents.direction(A), Direction::Right);
        assert_eq!(w.tree.status("S"), Some(NodeStatus::Running));

        // The finished sequence reports, then starts over in the same tick.
        assert_eq!(
            w.tick(),
            vec![
                "1 S sequence SUCCESS",
                "1 S sequence ENTRY",
                "1 T turnRight SUCCESS",
            ]
        );
        assert_eq!(w.agents.direction(A), Direction::Down);
    }

    #[test]
    fn sequence_fails_on_failed_child() {
        let mut w = World::new(
            &["^."],
            "flowchart TD\n    S[->] --> M[move]\n    S --> T[turnLeft]",
        );
        assert_eq!(w.tick(), vec!["1 S sequence ENTRY", "1 M move FAILURE"]);
        // T is never reached: the failed child ends the sequence.
        assert_eq!(
            w.tick(),
            vec!["1 S sequence FAILURE", "1 S sequence ENTRY", "1 M move FAILURE"]
        );
        assert_eq!(w.agents.direction(A), Direction::Up);
    }

    #[test]
    fn fallback_tries_children_in_order() {
        let mut w = World::new(
            &[">#", ".."],
            "flowchart TD
    F[?] --> Q[->]
    Q --> T([treeFront])
    Q --> R[turnRight]
    F --> M[move]",
        );
        assert_eq!(
            w.tick(),
            vec![
                "1 F fallback ENTRY",
                "1 Q sequence ENTRY",
                "1 T treeFront SUCCESS",
                "1 R turnRight SUCCESS",
            ]
        );
        assert_eq!(
            w.tick(),
            vec![
                "1 Q sequence SUCCESS",
                "1 F fallback SUCCESS",
                "1 F fallback ENTRY",
                "1 Q sequence ENTRY",
                "1 T treeFront FAILURE",
                "1 Q sequence FAILURE",
                "1 M move SUCCESS",
            ]
        );
        assert_eq!(w.agents.position(A), Position::new(0, 1));
    }

    #[test]
    fn parallel_halts_on_action_then_counts_successes() {
        let mut w = World::new(
            &["^..", "...", "..."],
            "flowchart TD
    P[=2>] --> C1([atEdge])
    P --> X[turnLeft]
    P --> C2([existsPath 3,3])
    P --> C3([existsPath 1,1 3,3])",
        );
        assert_eq!(
            w.tick(),
            vec![
                "1 P parallel ENTRY",
                "1 C1 atEdge SUCCESS",
                "1 X turnLeft SUCCESS",
            ]
        );
        let second = w.tick();
        assert_eq!(
            second[..3],
            [
                "1 C2 existsPath 2,2 SUCCESS",
                "1 C3 existsPath 0,0 2,2 SUCCESS",
                "1 P parallel SUCCESS",
            ]
        );
        assert_eq!(second[3], "1 P parallel ENTRY");
        assert_eq!(w.agents.direction(A), Direction::Down);
    }

    #[test]
    fn parallel_below_threshold_fails() {
        let mut w = World::new(
            &["...", ".^.", "..."],
            "flowchart TD
    P[=2>] --> C1([atEdge])
    P --> C2([treeFront])
    P --> X[turnLeft]",
        );
        w.tick();
        // X succeeded, both conditions failed: 1 < 2.
        assert_eq!(w.tick()[0], "1 P parallel FAILURE");
    }

    #[test]
    fn no_reachable_action_runs_nothing() {
        let mut w = World::new(
            &["^.", ".."],
            "flowchart TD\n    F[?] --> C([atEdge])\n    F --> M[move]",
        );
        let trace = w.tick();
        assert_eq!(
            trace,
            vec![
                "1 F fallback ENTRY",
                "1 C atEdge SUCCESS",
                "1 F fallback SUCCESS",
                "1 F fallback ENTRY",
                "1 C atEdge SUCCESS",
                "1 F fallback SUCCESS",
            ]
        );
        assert_eq!(w.agents.position(A), Position::new(0, 0));
        assert_eq!(w.tree.head(), "F");
    }

    #[test]
    fn completed_walk_still_runs_installed_action() {
        let mut w = World::new(
            &["#.", ">."],
            "flowchart TD\n    F[?] --> C([treeFront])\n    F --> L[turnLeft]",
        );
        assert_eq!(
            w.tick(),
            vec!["1 F fallback ENTRY", "1 C treeFront FAILURE", "1 L turnLeft SUCCESS"]
        );
        assert_eq!(w.agents.direction(A), Direction::Up);

        // The restarted walk succeeds on the condition, yet L from the
        // previous tick is still the resume pointer and runs again.
        assert_eq!(
            w.tick(),
            vec![
                "1 F fallback SUCCESS",
                "1 F fallback ENTRY",
                "1 C treeFront SUCCESS",
                "1 F fallback SUCCESS",
                "1 L turnLeft SUCCESS",
            ]
        );
        assert_eq!(w.agents.direction(A), Direction::Left);
        assert_eq!(w.tree.head(), "L");
    }

    #[test]
    fn at_most_one_action_per_tick() {
        let mut w = World::new(
            &[">....", "....."],
            "flowchart TD
    S[->] --> M1[move]
    S --> M2[move]
    S --> L([leafFront])
    S --> M3[move]",
        );
        for _ in 0..10 {
            let before = w.agents.position(A);
            let trace = w.tick();
            let actions = trace.iter().filter(|l| l.contains(" move ")).count();
            assert!(actions <= 1, "{trace:?}");
            let after = w.agents.position(A);
            assert!(after.column - before.column <= 1);
        }
    }

    #[test]
    fn conditions_see_the_grid() {
        let mut w = World::new(
            &[">*", ".."],
            "flowchart TD
    S[->] --> L([leafFront])
    S --> T[takeLeaf]
    S --> P[placeLeaf]",
        );
        w.tick();
        assert!(w.grid.is_empty(Position::new(1, 0)));
        assert_eq!(w.tick(), vec!["1 P placeLeaf SUCCESS"]);
        assert!(!w.grid.is_empty(Position::new(1, 0)));
    }
}

// ── Head / reset / jump ───────────────────────────────────────────────────────

#[cfg(test)]
mod resume {
    use lb_core::{Direction, Position};

    use super::helpers::{A, SEQUENCE, World};
    use crate::{BehaviorError, NodeStatus};

    const FALLBACK: &str = "\
flowchart TD
    F[?] --> C([treeFront])
    F --> Q[->]
    Q --> L[turnLeft]
    Q --> M[move]";

    #[test]
    fn fresh_tree_heads_at_root() {
        let w = World::new(&["^."], SEQUENCE);
        assert_eq!(w.tree.head(), "S");
        assert_eq!(w.tree.current_id(), "S");
    }

    #[test]
    fn head_is_next_sibling_then_last_action() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tick();
        assert_eq!(w.tree.head(), "M");
        w.tick();
        assert_eq!(w.tree.head(), "M");
    }

    #[test]
    fn reset_then_head_is_root() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tick();
        w.tree.reset();
        assert_eq!(w.tree.head(), "S");
        assert!(w.tree.preorder().iter().all(|&i| w.tree.get(i).status() == NodeStatus::NotEntered));
        // Reset leaves the world alone.
        assert_eq!(w.agents.direction(A), Direction::Right);
    }

    #[test]
    fn jump_under_sequence_marks_earlier_siblings_succeeded() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tree.jump_to("M").unwrap();
        assert_eq!(w.tree.status("T"), Some(NodeStatus::Success));
        assert_eq!(w.tree.status("M"), Some(NodeStatus::NotEntered));
        assert_eq!(w.tree.head(), "M");

        assert_eq!(w.tick(), vec!["1 S sequence ENTRY", "1 M move FAILURE"]);
        assert_eq!(w.agents.direction(A), Direction::Up);
        assert_eq!(w.tree.head(), "M");
    }

    #[test]
    fn jump_under_fallback_marks_earlier_siblings_failed() {
        let mut w = World::new(&[">", "."], FALLBACK);
        w.tree.jump_to("M").unwrap();
        assert_eq!(w.tree.status("C"), Some(NodeStatus::Failure));
        assert_eq!(w.tree.status("L"), Some(NodeStatus::Success));
        assert_eq!(
            w.tick(),
            vec![
                "1 F fallback ENTRY",
                "1 Q sequence ENTRY",
                "1 M move FAILURE",
            ]
        );
    }

    #[test]
    fn jump_restarts_target_and_later_siblings() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tick();
        w.tick();
        w.tree.jump_to("T").unwrap();
        assert_eq!(w.tree.status("T"), Some(NodeStatus::NotEntered));
        assert_eq!(w.tree.status("M"), Some(NodeStatus::NotEntered));
        assert_eq!(w.tick(), vec!["1 T turnRight SUCCESS"]);
        // Facing down after the second turn, one row below (1,0).
        assert_eq!(w.tick(), vec!["1 M move SUCCESS"]);
        assert_eq!(w.agents.position(A), Position::new(1, 1));
    }

    #[test]
    fn jump_to_root_behaves_like_reset() {
        let mut reset = World::new(&[">..", "...", "..."], FALLBACK);
        let mut jumped = World::new(&[">..", "...", "..."], FALLBACK);
        reset.tick();
        jumped.tick();
        reset.tree.reset();
        jumped.tree.jump_to("F").unwrap();
        assert_eq!(reset.tree.head(), jumped.tree.head());
        for _ in 0..6 {
            assert_eq!(reset.tick(), jumped.tick());
            assert_eq!(reset.tree.head(), jumped.tree.head());
        }
        assert_eq!(reset.agents, jumped.agents);
    }

    #[test]
    fn jump_to_unknown_node() {
        let mut w = World::new(&["^."], SEQUENCE);
        assert_eq!(w.tree.jump_to("Z"), Err(BehaviorError::UnknownNode("Z".into())));
        assert_eq!(w.tree.head(), "S");
    }
}

// ── Sibling insertion ─────────────────────────────────────────────────────────

#[cfg(test)]
mod sibling {
    use lb_core::Direction;

    use super::helpers::{A, SEQUENCE, World};
    use crate::{ActionKind, BehaviorError, NodeKind, NodeSpec};

    fn turn_left(id: &str) -> NodeSpec {
        NodeSpec::new(id, NodeKind::Action(ActionKind::TurnLeft))
    }

    #[test]
    fn inserted_directly_after_existing() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tree.add_sibling("T", turn_left("N")).unwrap();
        assert!(w.tree.has_node("N"));
        let order: Vec<_> = w.tree.preorder().iter().map(|&i| w.tree.get(i).id().to_string()).collect();
        assert_eq!(order, vec!["S", "T", "N", "M"]);

        assert_eq!(w.tick(), vec!["1 S sequence ENTRY", "1 T turnRight SUCCESS"]);
        assert_eq!(w.tick(), vec!["1 N turnLeft SUCCESS"]);
        assert_eq!(w.agents.direction(A), Direction::Up);
    }

    #[test]
    fn appended_after_last_child() {
        let mut w = World::new(&["^.", ".."], SEQUENCE);
        w.tree.add_sibling("M", turn_left("N")).unwrap();
        let root = w.tree.node("S").unwrap();
        assert_eq!(w.tree.get(root.children()[2]).id(), "N");
    }

    #[test]
    fn rejected_edits() {
        let mut w = World::new(&["^."], SEQUENCE);
        assert_eq!(
            w.tree.add_sibling("S", turn_left("N")),
            Err(BehaviorError::RootSibling("S".into()))
        );
        assert_eq!(
            w.tree.add_sibling("T", turn_left("M")),
            Err(BehaviorError::DuplicateNode("M".into()))
        );
        assert_eq!(
            w.tree.add_sibling("X", turn_left("N")),
            Err(BehaviorError::UnknownNode("X".into()))
        );
        assert_eq!(w.tree.len(), 3);
    }
}

// ── Notation round trip ───────────────────────────────────────────────────────

#[cfg(test)]
mod notation {
    use super::helpers::parse;
    use crate::BehaviorTree;

    /// `(id, kind, parent id)` for every node in pre-order.
    fn shape(tree: &BehaviorTree) -> Vec<(String, String, Option<String>)> {
        tree.preorder()
            .into_iter()
            .map(|i| {
                let n = tree.get(i);
                let parent = n.parent().map(|p| tree.get(p).id().to_string());
                (n.id().to_string(), format!("{:?}", n.kind()), parent)
            })
            .collect()
    }

    #[test]
    fn round_trip_preserves_structure() {
        let source = "flowchart TD
    A[?] --> B[->]
    B --> C([existsPath 2,3])
    B --> D[fly 2,3]
    A --> E[=2>]
    E --> F([atEdge])
    E --> G([existsPath 1,1 4,4])
    E --> H[placeLeaf]
    A --> I[move]";
        let tree = parse(source);
        let rendered = tree.to_notation();
        let again = parse(&rendered);
        assert_eq!(shape(&tree), shape(&again));
        assert_eq!(rendered, again.to_notation());
    }

    #[test]
    fn rendering_format() {
        let tree = parse("flowchart TD\nA[->] --> B[fly 3,1]\nA --> C([mushroomFront])");
        assert_eq!(
            tree.to_notation(),
            "flowchart TD\n    A[->] --> B[fly 3,1]\n    A --> C([mushroomFront])\n"
        );
    }

    #[test]
    fn single_node_tree() {
        let tree = parse("flowchart TD\nA[turnLeft]");
        assert_eq!(tree.to_notation(), "flowchart TD\n    A[turnLeft]\n");
        assert_eq!(shape(&parse(&tree.to_notation())), shape(&tree));
    }
}
