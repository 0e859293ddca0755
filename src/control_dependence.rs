//! Control-dependence derivation from a post-dominator result.
//!
//! A block `a` controls `b` iff `b` post-dominates some successor of `a` but
//! not `a` itself. Walking from each successor of `a` up the post-dominator
//! tree until `postIdom(a)` is reached (exclusive) enumerates exactly the set
//! of blocks `a` directly controls.

use std::collections::HashMap;

use bitvec::prelude::*;

use crate::cfg::{BlockId, ControlFlowGraph};
use crate::dominators::DominatorResult;
use crate::error::ControlDependenceError;

/// For every block, the set of blocks it directly controls.
///
/// Built once, against a frozen post-dominator result and CFG snapshot, and
/// read-only thereafter.
#[derive(Debug, Clone)]
pub struct ControlDependence {
    directly_controls: HashMap<BlockId, Vec<BlockId>>,
    block_count: usize,
}

impl ControlDependence {
    /// The blocks `block` directly controls, in no particular order. Empty
    /// if `block` controls nothing.
    #[must_use]
    pub fn directly_controls(&self, block: BlockId) -> &[BlockId] {
        self.directly_controls
            .get(&block)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Transitive closure size of [`directly_controls`](Self::directly_controls)
    /// starting from `block`: every block directly controlled, plus every
    /// block those in turn control, counted once each. Diagnostics only.
    #[must_use]
    pub fn number_of_blocks_controlled(&self, block: BlockId) -> usize {
        let mut seen = bitvec![0; self.block_count];
        let mut stack = vec![block];
        let mut count = 0;

        while let Some(current) = stack.pop() {
            for &controlled in self.directly_controls(current) {
                let idx = controlled.index();
                if !seen[idx] {
                    seen.set(idx, true);
                    count += 1;
                    stack.push(controlled);
                }
            }
        }

        count
    }
}

/// Build the control-dependence relation from a post-dominator analysis.
///
/// # Errors
///
/// Returns [`ControlDependenceError::InvalidPostDominators`] if `post_dom`
/// was computed with `is_valid() == false` — control dependence is only
/// meaningful relative to a complete post-dominator tree.
pub fn build_control_dependence<G: ControlFlowGraph + ?Sized>(
    post_dom: &DominatorResult,
    cfg: &G,
) -> Result<ControlDependence, ControlDependenceError> {
    if !post_dom.is_valid() {
        return Err(ControlDependenceError::InvalidPostDominators);
    }

    let mut directly_controls: HashMap<BlockId, Vec<BlockId>> = HashMap::new();

    for a in cfg.nodes() {
        let post_idom_a = post_dom.immediate_dominator(a);

        let mut successors = Vec::new();
        successors.extend_from_slice(cfg.exception_successors(a));
        successors.extend_from_slice(cfg.successors(a));

        let mut controlled = Vec::new();
        for s in successors {
            let mut current = Some(s);
            while let Some(b) = current {
                if Some(b) == post_idom_a {
                    break;
                }
                controlled.push(b);
                current = post_dom.immediate_dominator(b);
            }
        }

        if !controlled.is_empty() {
            tracing::trace!(block = %a, controlled = ?controlled, "resolved control dependence");
            directly_controls.insert(a, controlled);
        }
    }

    Ok(ControlDependence {
        directly_controls,
        block_count: cfg.next_block_id(),
    })
}
