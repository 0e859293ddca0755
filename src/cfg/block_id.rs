/// Identifier for a basic block within a [`ControlFlowGraph`](super::ControlFlowGraph).
///
/// Block ids are stable small non-negative integers, densely numbered up to
/// the CFG's `next_block_id()`. The dominator engine never assigns or
/// renumbers them; it only ever reads them off the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub usize);

impl BlockId {
    /// Create a new block id.
    pub fn new(id: usize) -> Self {
        BlockId(id)
    }

    /// Get the numeric id.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for BlockId {
    fn from(value: usize) -> Self {
        BlockId(value)
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BB{}", self.0)
    }
}
