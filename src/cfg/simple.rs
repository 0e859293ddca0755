use super::{BlockId, ControlFlowGraph};

/// A minimal, dense [`ControlFlowGraph`] implementation.
///
/// This is the reference adapter used by this crate's own tests and is a
/// reasonable starting point for embedding the engine: it carries no block
/// payload (instructions, liveness, exception tables) at all, only the edge
/// structure the engine actually needs. Real callers normally adapt their own
/// CFG container instead of using this type directly.
#[derive(Debug, Clone)]
pub struct SimpleCfg {
    entry: BlockId,
    exit: BlockId,
    next_block_id: usize,
    successors: Vec<Vec<BlockId>>,
    predecessors: Vec<Vec<BlockId>>,
    exception_successors: Vec<Vec<BlockId>>,
    exception_predecessors: Vec<Vec<BlockId>>,
}

impl SimpleCfg {
    /// Create an empty CFG with `block_count` blocks (ids `0..block_count`),
    /// the given entry and exit blocks, and no edges.
    #[must_use]
    pub fn new(block_count: usize, entry: BlockId, exit: BlockId) -> Self {
        Self {
            entry,
            exit,
            next_block_id: block_count,
            successors: vec![Vec::new(); block_count],
            predecessors: vec![Vec::new(); block_count],
            exception_successors: vec![Vec::new(); block_count],
            exception_predecessors: vec![Vec::new(); block_count],
        }
    }

    /// Add a normal control-flow edge `from -> to`.
    pub fn add_edge(&mut self, from: BlockId, to: BlockId) {
        self.successors[from.index()].push(to);
        self.predecessors[to.index()].push(from);
    }

    /// Add an exception edge `from -> to`.
    pub fn add_exception_edge(&mut self, from: BlockId, to: BlockId) {
        self.exception_successors[from.index()].push(to);
        self.exception_predecessors[to.index()].push(from);
    }
}

impl ControlFlowGraph for SimpleCfg {
    fn next_block_id(&self) -> usize {
        self.next_block_id
    }

    fn entry(&self) -> BlockId {
        self.entry
    }

    fn exit(&self) -> BlockId {
        self.exit
    }

    fn nodes(&self) -> Vec<BlockId> {
        (0..self.next_block_id).map(BlockId::new).collect()
    }

    fn successors(&self, id: BlockId) -> &[BlockId] {
        &self.successors[id.index()]
    }

    fn predecessors(&self, id: BlockId) -> &[BlockId] {
        &self.predecessors[id.index()]
    }

    fn exception_successors(&self, id: BlockId) -> &[BlockId] {
        &self.exception_successors[id.index()]
    }

    fn exception_predecessors(&self, id: BlockId) -> &[BlockId] {
        &self.exception_predecessors[id.index()]
    }
}
