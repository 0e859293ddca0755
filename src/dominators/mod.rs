//! Dominator and post-dominator analysis.
//!
//! [`build_dominators`] runs the Lengauer-Tarjan algorithm over a
//! [`ControlFlowGraph`] — forward, for ordinary dominators, or over the
//! reversed graph (successors and predecessors swapped, exit as root), for
//! post-dominators. The whole computation happens eagerly inside the call;
//! the returned [`DominatorResult`] is immutable and holds nothing but the
//! two small per-block maps describing it.
//!
//! **Forward mode aborts on caller corruption.** Every non-exit block must be
//! reachable from the entry block. A CFG that violates this is a caller bug,
//! not a data condition this crate tries to recover from: `build_dominators`
//! panics, after logging the offending block ids via `tracing`, rather than
//! return a partially-useful result. Post-dominator mode is the one place an
//! unreachable root condition (the entry unreachable from exit) is routine —
//! see [`DominatorResult::is_valid`].

mod dfs;
mod lt;

use crate::cfg::{BlockId, ControlFlowGraph};

/// Which direction to run the analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Ordinary dominators, rooted at the CFG's entry block.
    Dominators,
    /// Post-dominators, rooted at the CFG's exit block over the reversed
    /// graph (successors and predecessors swapped).
    PostDominators,
}

/// The result of a dominator or post-dominator analysis: a DF-numbering and
/// an immediate-dominator map, both indexed by block id.
#[derive(Debug, Clone)]
pub struct DominatorResult {
    mode: Mode,
    df_number: Vec<i64>,
    idom: Vec<Option<BlockId>>,
    valid: bool,
    unreachable: Vec<BlockId>,
}

impl DominatorResult {
    /// Which mode produced this result.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// `false` only in post-dominator mode, and only when the entry block was
    /// unreachable from the exit block. Forward-mode results are always
    /// valid (an unreachable non-exit block is fatal, not representable
    /// here).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Blocks this analysis could not reach from its root. Empty unless
    /// [`is_valid`](Self::is_valid) is `false`, or in forward mode where the
    /// sole unreachable block is always the exit.
    #[must_use]
    pub fn unreachable_blocks(&self) -> &[BlockId] {
        &self.unreachable
    }

    /// DF-number of `block`, or `-1` if it was never reached by this
    /// traversal's root.
    #[must_use]
    pub fn df_number(&self, block: BlockId) -> i64 {
        self.df_number
            .get(block.index())
            .copied()
            .unwrap_or(-1)
    }

    /// The immediate (post-)dominator of `block`, or `None` for the root or
    /// for a block this analysis never reached.
    #[must_use]
    pub fn immediate_dominator(&self, block: BlockId) -> Option<BlockId> {
        self.idom.get(block.index()).copied().flatten()
    }

    /// Does `a` (post-)dominate `b`? Every block (post-)dominates itself.
    ///
    /// Walks `b`'s immediate-dominator chain upward, short-circuiting as
    /// soon as the walked node's DF-number drops below `a`'s — at that point
    /// the walk has left the subtree `a` could possibly dominate.
    #[must_use]
    pub fn dominates(&self, a: BlockId, b: BlockId) -> bool {
        if a == b {
            return true;
        }
        let df_a = self.df_number(a);
        let mut current = Some(b);
        while let Some(d) = current {
            if self.df_number(d) < df_a {
                return false;
            }
            if d == a {
                return true;
            }
            current = self.immediate_dominator(d);
        }
        false
    }
}

/// Compute dominators (or post-dominators) of `cfg`.
///
/// # Panics
///
/// In [`Mode::Dominators`], panics if any block other than the CFG's exit is
/// unreachable from the entry — this is always a caller bug (a malformed or
/// partially-built CFG), not a condition this crate recovers from. See the
/// module docs.
pub fn build_dominators<G: ControlFlowGraph + ?Sized>(cfg: &G, mode: Mode) -> DominatorResult {
    let root = match mode {
        Mode::Dominators => cfg.entry(),
        Mode::PostDominators => cfg.exit(),
    };
    let tolerated = match mode {
        Mode::Dominators => cfg.exit(),
        Mode::PostDominators => cfg.entry(),
    };

    tracing::debug!(
        mode = ?mode,
        root = %root,
        block_count = cfg.next_block_id(),
        "starting dominator analysis"
    );

    let (mut table, mut df_number) = dfs::number(cfg, mode, root);
    lt::compute(&mut table, &df_number, cfg, mode);

    let reachable = table.len();
    let mut idom = vec![None; cfg.next_block_id()];
    for i in 2..=reachable {
        let dominated = table[i].block;
        let dominator = table[table[i].idom].block;
        idom[dominated.index()] = Some(dominator);
        tracing::trace!(block = %dominated, dominator = %dominator, "resolved immediate dominator");
    }
    table.shrink_to_zero();

    let unreached: Vec<BlockId> = cfg
        .nodes()
        .into_iter()
        .filter(|block| df_number[block.index()] < 0)
        .collect();

    let mut valid = true;
    let mut unreachable_out = Vec::new();

    if !unreached.is_empty() {
        match mode {
            Mode::Dominators => {
                if unreached.len() == 1 && unreached[0] == tolerated {
                    df_number[tolerated.index()] = reachable as i64;
                    tracing::debug!(exit = %tolerated, "exit block unreachable from entry; tolerated");
                } else {
                    tracing::error!(unreachable = ?unreached, "unreachable block(s) in forward dominator analysis");
                    panic!(
                        "unreachable block(s) in forward dominator analysis: {unreached:?} \
                         (only the exit block may be unreachable from the entry)"
                    );
                }
            }
            Mode::PostDominators => {
                valid = false;
                if unreached.contains(&tolerated) {
                    df_number[tolerated.index()] = reachable as i64;
                }
                tracing::debug!(
                    unreachable = ?unreached,
                    "entry unreachable from exit; post-dominator result is invalid"
                );
                unreachable_out = unreached;
            }
        }
    }

    DominatorResult {
        mode,
        df_number,
        idom,
        valid,
        unreachable: unreachable_out,
    }
}
