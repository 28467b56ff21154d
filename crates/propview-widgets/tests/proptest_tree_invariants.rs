//! Property-based invariant tests for the property tree.
//!
//! 1. The balance scan matches a reference depth count for any sequence.
//! 2. Trees built from nested collections are always balanced.
//! 3. Rows inside a collapsed collection repeat the header's bottom edge.
//! 4. Bottom edges never decrease, whatever the sequence or scroll offset.
//! 5. Balanced, fully expanded trees render without diagnostics.
//! 6. Collapsed collections never invert connectors or underflow the stack.

use std::time::Duration;

use propview_core::event::{FrameClock, FrameInput, PointerState};
use propview_core::geometry::Bounds;
use propview_render::DisplayList;
use propview_widgets::{
    CollectionKind, Diagnostic, PropertiesConfig, PropertiesPanel, PropertiesState, PropertyEntry,
    PropertyStore,
};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
enum Op {
    Header(CollectionKind, bool),
    Value(usize),
    Closer,
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(usize),
    Collection(CollectionKind, bool, Vec<Node>),
}

fn kind_strategy() -> impl Strategy<Value = CollectionKind> {
    prop_oneof![
        Just(CollectionKind::Object),
        Just(CollectionKind::Array),
        Just(CollectionKind::Map),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (kind_strategy(), any::<bool>()).prop_map(|(k, c)| Op::Header(k, c)),
        (1usize..4).prop_map(Op::Value),
        Just(Op::Closer),
    ]
}

fn tree_strategy() -> impl Strategy<Value = Vec<Node>> {
    let leaf = (1usize..4).prop_map(Node::Leaf);
    let node = leaf.prop_recursive(5, 64, 6, |inner| {
        (kind_strategy(), any::<bool>(), prop::collection::vec(inner, 0..6))
            .prop_map(|(k, c, children)| Node::Collection(k, c, children))
    });
    prop::collection::vec(node, 0..8)
}

fn multiline(lines: usize) -> String {
    vec!["line"; lines].join("\n")
}

fn store_from_ops(ops: &[Op]) -> PropertyStore<'static> {
    let mut store = PropertyStore::with_capacity(ops.len());
    for op in ops {
        let added = match op {
            Op::Header(kind, collapsed) => store.add_header("h", *kind).and_then(|i| {
                store.set_collapsed(i, *collapsed)?;
                Ok(i)
            }),
            Op::Value(lines) => store.add_multiline("v", multiline(*lines)),
            Op::Closer => store.add_closer(),
        };
        added.unwrap();
    }
    store
}

fn flatten(nodes: &[Node], out: &mut Vec<Op>) {
    for node in nodes {
        match node {
            Node::Leaf(lines) => out.push(Op::Value(*lines)),
            Node::Collection(kind, collapsed, children) => {
                out.push(Op::Header(*kind, *collapsed));
                flatten(children, out);
                out.push(Op::Closer);
            }
        }
    }
}

fn expand_all(ops: &mut [Op]) {
    for op in ops {
        if let Op::Header(_, collapsed) = op {
            *collapsed = false;
        }
    }
}

struct Rendered {
    heights: Vec<i32>,
    visible: usize,
    diagnostics: Vec<Diagnostic>,
    start_y: i32,
}

fn render(store: PropertyStore<'static>, height: i32, scroll: i32) -> (Rendered, PropertyStore<'static>) {
    let config = PropertiesConfig::default().with_balance_check(false);
    let start_y = config.padding_y - scroll;
    let panel = PropertiesPanel::with_config(config);
    let mut state = PropertiesState::new(store);
    state.set_scroll_y(scroll);
    let mut surface = DisplayList::new();
    let input = FrameInput::new(
        PointerState::at(-1, -1),
        FrameClock::new(Duration::from_secs(1), Duration::from_millis(16)),
    );
    let report = panel
        .render(Bounds::new(0, 0, 400, height), &input, &mut surface, &mut state)
        .clone();
    let rendered = Rendered {
        heights: state.line_heights().to_vec(),
        visible: report.visible_count,
        diagnostics: report.diagnostics,
        start_y,
    };
    (rendered, state.store().clone())
}

/// Index of the closer matching each header.
fn matching_closers(store: &PropertyStore<'_>) -> Vec<(usize, usize)> {
    let mut stack = Vec::new();
    let mut pairs = Vec::new();
    for (i, entry) in store.iter().enumerate() {
        match entry {
            PropertyEntry::Header(_) => stack.push(i),
            PropertyEntry::Closer => {
                if let Some(h) = stack.pop() {
                    pairs.push((h, i));
                }
            }
            PropertyEntry::Value(_) => {}
        }
    }
    pairs
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Balance scan matches a reference count
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn balance_matches_reference(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let store = store_from_ops(&ops);
        let mut depth = 0i32;
        let mut went_negative = false;
        for op in &ops {
            match op {
                Op::Header(..) => depth += 1,
                Op::Closer => depth -= 1,
                Op::Value(_) => {}
            }
            went_negative |= depth < 0;
        }
        let balance = store.balance();
        prop_assert_eq!(balance.surplus, depth);
        prop_assert_eq!(balance.first_underflow.is_some(), went_negative);
        prop_assert_eq!(balance.is_balanced(), depth == 0 && !went_negative);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Nested trees are balanced
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nested_trees_are_balanced(tree in tree_strategy()) {
        let mut ops = Vec::new();
        flatten(&tree, &mut ops);
        prop_assert!(store_from_ops(&ops).balance().is_balanced());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Collapse containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn collapsed_contents_have_zero_height(tree in tree_strategy()) {
        let mut ops = Vec::new();
        flatten(&tree, &mut ops);
        let (rendered, store) = render(store_from_ops(&ops), 1_000_000, 0);

        // Every entry is indexed even when hidden.
        prop_assert_eq!(rendered.visible, store.len());
        prop_assert_eq!(rendered.heights.len(), store.len());

        for (header, closer) in matching_closers(&store) {
            let previous = if header == 0 { rendered.start_y } else { rendered.heights[header - 1] };
            let header_shown = rendered.heights[header] != previous;
            let collapsed = store.is_collapsed(header).unwrap();
            if header_shown && collapsed {
                for i in header + 1..=closer {
                    prop_assert_eq!(
                        rendered.heights[i],
                        rendered.heights[header],
                        "entry {} inside collapsed header {}", i, header
                    );
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Height monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn heights_never_decrease(
        ops in prop::collection::vec(op_strategy(), 0..64),
        height in 0i32..600,
        scroll in 0i32..400,
    ) {
        let (rendered, store) = render(store_from_ops(&ops), height, scroll);
        prop_assert!(rendered.visible <= store.len());
        prop_assert_eq!(rendered.heights.len(), rendered.visible);
        let mut previous = rendered.start_y;
        for &h in &rendered.heights {
            prop_assert!(h >= previous, "{} < {}", h, previous);
            previous = h;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Clean trees render cleanly
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn expanded_balanced_trees_have_no_diagnostics(tree in tree_strategy()) {
        let mut ops = Vec::new();
        flatten(&tree, &mut ops);
        expand_all(&mut ops);
        let (rendered, _) = render(store_from_ops(&ops), 1_000_000, 0);
        prop_assert!(rendered.diagnostics.is_empty(), "{:?}", rendered.diagnostics);
    }

    #[test]
    fn collapsed_balanced_trees_have_no_structural_errors(tree in tree_strategy()) {
        let mut ops = Vec::new();
        flatten(&tree, &mut ops);
        let (rendered, _) = render(store_from_ops(&ops), 1_000_000, 0);
        let structural: Vec<_> = rendered
            .diagnostics
            .iter()
            .filter(|d| {
                matches!(
                    d,
                    Diagnostic::InvertedGeometry { .. } | Diagnostic::StackUnderflow { .. }
                )
            })
            .collect();
        prop_assert!(structural.is_empty(), "{:?}", structural);
    }

    #[test]
    fn underflows_never_exceed_closers(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let closers = ops.iter().filter(|op| matches!(op, Op::Closer)).count();
        let (rendered, _) = render(store_from_ops(&ops), 1_000_000, 0);
        let underflows = rendered
            .diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::StackUnderflow { .. }))
            .count();
        prop_assert!(underflows <= closers);
    }
}
