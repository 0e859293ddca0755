use crate::cfg::BlockId;

/// Per-block scratch state the Lengauer-Tarjan algorithm threads through its
/// DFS, link/eval forest, and semidominator/immediate-dominator passes.
///
/// Indexed by *DF-index* (DF-number + 1); index `0` is a sentinel node whose
/// `label` and `ancestor` are always `0`, which lets `eval`/`compress` treat
/// the forest root uniformly instead of special-casing it.
#[derive(Debug, Clone)]
pub(crate) struct NodeInfo {
    /// The CFG block this record describes. Unused at index 0.
    pub block: BlockId,
    /// DF-index of the DFS parent; `0` for the root.
    pub parent: usize,
    /// Semidominator number (a DF-index); initialized to this node's own index.
    pub sdno: usize,
    /// Best immediate-dominator candidate found so far (a DF-index).
    pub idom: usize,
    /// Link in the link/eval forest; `0` means not yet linked.
    pub ancestor: usize,
    /// Link/eval label: the ancestor with the minimal semidominator seen so far.
    pub label: usize,
    /// Child link used for weighted balancing of the link/eval forest.
    pub child: usize,
    /// Subtree size used for weighted balancing.
    pub size: usize,
    /// DF-indices whose semidominator is this node.
    ///
    /// Buckets are rarely large relative to the graph, so a plain `Vec` beats
    /// a bitset sized to the whole node count.
    pub bucket: Vec<usize>,
}

impl NodeInfo {
    fn sentinel() -> Self {
        NodeInfo {
            block: BlockId::new(0),
            parent: 0,
            sdno: 0,
            idom: 0,
            ancestor: 0,
            label: 0,
            child: 0,
            size: 0,
            bucket: Vec::new(),
        }
    }
}

/// Arena-style table of [`NodeInfo`] records, one per DF-index `0..=n`.
///
/// Sized once at construction and shrunk to zero as soon as the dominator
/// engine has materialized its public result; nothing outside the `dominators`
/// module ever reads from it afterwards.
pub(crate) struct NodeInfoTable {
    entries: Vec<NodeInfo>,
}

impl NodeInfoTable {
    /// Allocate a table sized for up to `reachable_capacity` reachable nodes
    /// (DF-indices `1..=reachable_capacity`), plus the sentinel at index 0.
    pub fn with_capacity(reachable_capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(reachable_capacity + 1);
        entries.push(NodeInfo::sentinel());
        NodeInfoTable { entries }
    }

    /// Number of DF-indices currently populated, excluding the sentinel.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Append a freshly-discovered node, returning its DF-index.
    pub fn push(&mut self, block: BlockId, parent: usize) -> usize {
        let index = self.entries.len();
        self.entries.push(NodeInfo {
            block,
            parent,
            sdno: index,
            idom: parent,
            ancestor: 0,
            label: index,
            child: 0,
            size: 1,
            bucket: Vec::new(),
        });
        index
    }

    /// Release the scratch storage. Only the `df_number`/`idom` maps remain
    /// live in the public result after this is called.
    pub fn shrink_to_zero(&mut self) {
        self.entries.clear();
        self.entries.shrink_to_fit();
    }
}

impl std::ops::Index<usize> for NodeInfoTable {
    type Output = NodeInfo;
    fn index(&self, i: usize) -> &NodeInfo {
        &self.entries[i]
    }
}

impl std::ops::IndexMut<usize> for NodeInfoTable {
    fn index_mut(&mut self, i: usize) -> &mut NodeInfo {
        &mut self.entries[i]
    }
}
