//! The Lengauer-Tarjan main pass: semidominator computation, the weighted
//! link/eval forest, and the immediate-dominator fix-up.

use crate::cfg::ControlFlowGraph;
use crate::node_info::NodeInfoTable;

use super::{dfs, Mode};

/// Find the ancestor of `v` whose label has the minimal semidominator
/// number, compressing the link/eval forest path to `v` along the way.
fn eval(info: &mut NodeInfoTable, v: usize) -> usize {
    if info[v].ancestor == 0 {
        return info[v].label;
    }
    compress(info, v);
    let ancestor = info[v].ancestor;
    if info[info[ancestor].label].sdno >= info[info[v].label].sdno {
        info[v].label
    } else {
        info[ancestor].label
    }
}

/// Compress the ancestor path from `v` towards the forest root, propagating
/// the minimal-semidominator label along the way.
///
/// Implemented iteratively (collect-then-unwind) rather than recursively:
/// compiler CFGs can produce link/eval chains thousands of nodes deep, which
/// would overflow a native call stack.
fn compress(info: &mut NodeInfoTable, v: usize) {
    let mut path = Vec::new();
    let mut x = v;
    while info[info[x].ancestor].ancestor != 0 {
        path.push(x);
        x = info[x].ancestor;
    }
    while let Some(node) = path.pop() {
        let ancestor = info[node].ancestor;
        if info[info[ancestor].label].sdno < info[info[node].label].sdno {
            info[node].label = info[ancestor].label;
        }
        info[node].ancestor = info[ancestor].ancestor;
    }
}

/// Link `child` beneath `parent` in the link/eval forest, rebalancing via the
/// `size`/`child` fields so the forest stays shallow (the "sophisticated"
/// Tarjan link, not plain union).
fn link(info: &mut NodeInfoTable, parent: usize, child: usize) {
    let mut s = child;
    let sdno = info[info[child].label].sdno;
    while sdno < info[info[info[s].child].label].sdno {
        let s_child = info[s].child;
        let grandchild = info[s_child].child;
        if info[s].size + info[grandchild].size >= 2 * info[s_child].size {
            info[s_child].ancestor = s;
            info[s].child = grandchild;
        } else {
            info[s_child].size = info[s].size;
            info[s].ancestor = s_child;
            s = s_child;
        }
    }
    info[s].label = info[child].label;
    info[parent].size += info[child].size;
    if info[parent].size < 2 * info[child].size {
        let tmp = s;
        s = info[parent].child;
        info[parent].child = tmp;
    }
    while s != 0 {
        let next = info[s].child;
        info[s].ancestor = parent;
        s = next;
    }
}

/// Run the main Lengauer-Tarjan pass over an already-DFS-numbered table,
/// leaving each reachable node's `idom` field holding its final immediate
/// dominator's DF-index.
///
/// `df_number` maps raw block id to DF-number (`-1` if this traversal never
/// reached it); it's consulted when computing semidominators because a
/// node's CFG neighbor may lie outside the reachable subgraph this table
/// covers.
pub(crate) fn compute<G: ControlFlowGraph + ?Sized>(
    table: &mut NodeInfoTable,
    df_number: &[i64],
    cfg: &G,
    mode: Mode,
) {
    let n = table.len();
    for i in (2..=n).rev() {
        let block = table[i].block;
        let parent = table[i].parent;

        for neighbor in dfs::combined_parents(cfg, mode, block) {
            let neighbor_df = df_number[neighbor.index()];
            if neighbor_df < 0 {
                continue;
            }
            let v = neighbor_df as usize + 1;
            let u = eval(table, v);
            if table[u].sdno < table[i].sdno {
                table[i].sdno = table[u].sdno;
            }
        }

        let sdno = table[i].sdno;
        table[sdno].bucket.push(i);
        link(table, parent, i);

        let parent_bucket = std::mem::take(&mut table[parent].bucket);
        for v in parent_bucket {
            let u = eval(table, v);
            table[v].idom = if table[u].sdno < table[v].sdno { u } else { parent };
        }
    }

    for i in 2..=n {
        if table[i].idom != table[i].sdno {
            let candidate = table[i].idom;
            table[i].idom = table[candidate].idom;
        }
    }
}
