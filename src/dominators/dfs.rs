use crate::cfg::{BlockId, ControlFlowGraph};
use crate::node_info::NodeInfoTable;

use super::Mode;

/// One level of the explicit DFS stack: the DF-index of the node whose
/// children are being enumerated, the combined (exception-then-normal) edge
/// list for that node, and how far into it we've scanned.
struct Frame {
    parent_df_index: usize,
    edges: Vec<BlockId>,
    pos: usize,
}

/// Iteratively number `cfg` (or its reverse, in post-dominator mode) in
/// pre-order starting from the mode's root (entry for dominators, exit for
/// post-dominators), building the [`NodeInfoTable`] as it goes.
///
/// Returns the populated table and a dense `df_number` array indexed by raw
/// block id (`-1` for blocks not reached by this traversal). An explicit
/// stack is used throughout — compiler CFGs can be too deep for a recursive
/// walk to be safe.
pub(crate) fn number<G: ControlFlowGraph + ?Sized>(
    cfg: &G,
    mode: Mode,
    root: BlockId,
) -> (NodeInfoTable, Vec<i64>) {
    let n = cfg.next_block_id();
    let mut df_number = vec![-1i64; n];
    let mut table = NodeInfoTable::with_capacity(n);
    let mut stack: Vec<Frame> = Vec::new();

    df_number[root.index()] = 0;
    let root_df_index = table.push(root, 0);
    stack.push(Frame {
        parent_df_index: root_df_index,
        edges: combined_children(cfg, mode, root),
        pos: 0,
    });

    while let Some(frame) = stack.last_mut() {
        if frame.pos >= frame.edges.len() {
            stack.pop();
            continue;
        }
        let child = frame.edges[frame.pos];
        frame.pos += 1;
        if df_number[child.index()] != -1 {
            continue;
        }

        let parent_df_index = frame.parent_df_index;
        let df_num = table.len() as i64;
        df_number[child.index()] = df_num;
        let child_df_index = table.push(child, parent_df_index);
        stack.push(Frame {
            parent_df_index: child_df_index,
            edges: combined_children(cfg, mode, child),
            pos: 0,
        });
    }

    (table, df_number)
}

/// The out-edges used to drive the DFS traversal itself: successors in
/// dominator mode, predecessors in post-dominator mode. Exception edges are
/// concatenated first, matching spec.md's "exception edges are scanned
/// before normal edges".
fn combined_children<G: ControlFlowGraph + ?Sized>(
    cfg: &G,
    mode: Mode,
    id: BlockId,
) -> Vec<BlockId> {
    let (exceptional, normal): (&[BlockId], &[BlockId]) = match mode {
        Mode::Dominators => (cfg.exception_successors(id), cfg.successors(id)),
        Mode::PostDominators => (cfg.exception_predecessors(id), cfg.predecessors(id)),
    };
    let mut combined = Vec::with_capacity(exceptional.len() + normal.len());
    combined.extend_from_slice(exceptional);
    combined.extend_from_slice(normal);
    combined
}

/// The in-edges used when computing a node's semidominator: predecessors in
/// dominator mode, successors in post-dominator mode — the opposite
/// direction from [`combined_children`].
pub(crate) fn combined_parents<G: ControlFlowGraph + ?Sized>(
    cfg: &G,
    mode: Mode,
    id: BlockId,
) -> Vec<BlockId> {
    let (exceptional, normal): (&[BlockId], &[BlockId]) = match mode {
        Mode::Dominators => (cfg.exception_predecessors(id), cfg.predecessors(id)),
        Mode::PostDominators => (cfg.exception_successors(id), cfg.successors(id)),
    };
    let mut combined = Vec::with_capacity(exceptional.len() + normal.len());
    combined.extend_from_slice(exceptional);
    combined.extend_from_slice(normal);
    combined
}
