//! Concrete scenarios with literal expected immediate-dominator maps.

use lt_dominators::{build_control_dependence, build_dominators, BlockId, Mode, SimpleCfg};

fn id(n: usize) -> BlockId {
    BlockId::new(n)
}

/// S1 — Linear chain: `0 (entry) -> 1 -> 2 -> 3 (exit)`.
#[test]
fn linear_chain() {
    let mut cfg = SimpleCfg::new(4, id(0), id(3));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(1), id(2));
    cfg.add_edge(id(2), id(3));

    let dom = build_dominators(&cfg, Mode::Dominators);
    assert!(dom.is_valid());
    assert_eq!(dom.immediate_dominator(id(0)), None);
    assert_eq!(dom.immediate_dominator(id(1)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(2)), Some(id(1)));
    assert_eq!(dom.immediate_dominator(id(3)), Some(id(2)));
}

/// S2 — Diamond: `0->1, 0->2, 1->3, 2->3`.
#[test]
fn diamond() {
    let mut cfg = SimpleCfg::new(4, id(0), id(3));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(0), id(2));
    cfg.add_edge(id(1), id(3));
    cfg.add_edge(id(2), id(3));

    let dom = build_dominators(&cfg, Mode::Dominators);
    assert_eq!(dom.immediate_dominator(id(1)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(2)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(3)), Some(id(0)));

    let pdom = build_dominators(&cfg, Mode::PostDominators);
    assert!(pdom.is_valid());
    assert_eq!(pdom.immediate_dominator(id(0)), Some(id(3)));
    assert_eq!(pdom.immediate_dominator(id(1)), Some(id(3)));
    assert_eq!(pdom.immediate_dominator(id(2)), Some(id(3)));
}

/// S3 — Simple loop: `0->1, 1->2, 2->1, 2->3`.
#[test]
fn simple_loop() {
    let mut cfg = SimpleCfg::new(4, id(0), id(3));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(1), id(2));
    cfg.add_edge(id(2), id(1));
    cfg.add_edge(id(2), id(3));

    let dom = build_dominators(&cfg, Mode::Dominators);
    assert_eq!(dom.immediate_dominator(id(1)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(2)), Some(id(1)));
    assert_eq!(dom.immediate_dominator(id(3)), Some(id(2)));

    assert!(dom.dominates(id(1), id(2)));
    assert!(!dom.dominates(id(2), id(1)));
}

/// S4 — Irreducible two-headed loop: `0->1, 0->2, 1->2, 2->1, 1->3, 2->3`.
///
/// The canonical case a naive iterative fix-point algorithm can get wrong but
/// Lengauer-Tarjan handles correctly.
#[test]
fn irreducible_two_headed_loop() {
    let mut cfg = SimpleCfg::new(4, id(0), id(3));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(0), id(2));
    cfg.add_edge(id(1), id(2));
    cfg.add_edge(id(2), id(1));
    cfg.add_edge(id(1), id(3));
    cfg.add_edge(id(2), id(3));

    let dom = build_dominators(&cfg, Mode::Dominators);
    assert_eq!(dom.immediate_dominator(id(1)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(2)), Some(id(0)));
    assert_eq!(dom.immediate_dominator(id(3)), Some(id(0)));
}

/// S5 — Unreachable exit (forward mode): `0->1, 1->0`, exit `2` has no
/// incoming edges. Forward analysis must still succeed.
#[test]
fn unreachable_exit_is_tolerated_in_forward_mode() {
    let mut cfg = SimpleCfg::new(3, id(0), id(2));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(1), id(0));

    let dom = build_dominators(&cfg, Mode::Dominators);
    assert!(dom.is_valid());
    assert_eq!(dom.immediate_dominator(id(1)), Some(id(0)));
    assert_eq!(dom.df_number(id(2)), 2);
}

/// S6 — Control dependence on a diamond with a tail:
/// `0->1, 0->2, 1->3, 2->3, 3->4`.
#[test]
fn control_dependence_on_diamond_with_tail() {
    let mut cfg = SimpleCfg::new(5, id(0), id(4));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(0), id(2));
    cfg.add_edge(id(1), id(3));
    cfg.add_edge(id(2), id(3));
    cfg.add_edge(id(3), id(4));

    let pdom = build_dominators(&cfg, Mode::PostDominators);
    assert!(pdom.is_valid());
    assert_eq!(pdom.immediate_dominator(id(0)), Some(id(3)));

    let cd = build_control_dependence(&pdom, &cfg).expect("post-dominators are valid");

    let mut controlled = cd.directly_controls(id(0)).to_vec();
    controlled.sort_by_key(BlockId::index);
    assert_eq!(controlled, vec![id(1), id(2)]);

    assert!(cd.directly_controls(id(1)).is_empty());
    assert!(cd.directly_controls(id(2)).is_empty());
    assert!(cd.directly_controls(id(3)).is_empty());
}

/// A post-dominator-mode entry unreachable from exit is invalid, not fatal,
/// and the control-dependence builder must reject it cleanly.
#[test]
fn disconnected_entry_marks_post_dominators_invalid() {
    let mut cfg = SimpleCfg::new(3, id(0), id(2));
    cfg.add_edge(id(1), id(2));

    let pdom = build_dominators(&cfg, Mode::PostDominators);
    assert!(!pdom.is_valid());
    assert_eq!(pdom.unreachable_blocks(), &[id(0)]);

    let err = build_control_dependence(&pdom, &cfg).unwrap_err();
    assert!(matches!(
        err,
        lt_dominators::ControlDependenceError::InvalidPostDominators
    ));
}

/// `numberOfBlocksControlled` must walk the transitive closure, not just the
/// direct relation: a nested diamond `0->{1,2}, 1->{4,5}, 4->3, 5->3, 2->3,
/// 3->6` makes block `0` directly control `{1, 2}`, block `1` in turn
/// directly control `{4, 5}`, and block `2` control nothing (its lone
/// successor `3` is its own immediate post-dominator).
#[test]
fn number_of_blocks_controlled_counts_transitive_closure() {
    let mut cfg = SimpleCfg::new(7, id(0), id(6));
    cfg.add_edge(id(0), id(1));
    cfg.add_edge(id(0), id(2));
    cfg.add_edge(id(1), id(4));
    cfg.add_edge(id(1), id(5));
    cfg.add_edge(id(4), id(3));
    cfg.add_edge(id(5), id(3));
    cfg.add_edge(id(2), id(3));
    cfg.add_edge(id(3), id(6));

    let pdom = build_dominators(&cfg, Mode::PostDominators);
    assert!(pdom.is_valid());

    let cd = build_control_dependence(&pdom, &cfg).expect("post-dominators are valid");

    let mut direct0 = cd.directly_controls(id(0)).to_vec();
    direct0.sort_by_key(BlockId::index);
    assert_eq!(direct0, vec![id(1), id(2)]);

    let mut direct1 = cd.directly_controls(id(1)).to_vec();
    direct1.sort_by_key(BlockId::index);
    assert_eq!(direct1, vec![id(4), id(5)]);

    assert!(cd.directly_controls(id(2)).is_empty());

    // Block 0's transitive closure is {1, 2} plus what 1 in turn controls,
    // {4, 5}: four distinct blocks, each counted once.
    assert_eq!(cd.number_of_blocks_controlled(id(0)), 4);
    assert_eq!(cd.number_of_blocks_controlled(id(1)), 2);
    assert_eq!(cd.number_of_blocks_controlled(id(2)), 0);
}
