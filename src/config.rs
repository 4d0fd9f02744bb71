//! Configuration for spatial index construction

/// Configuration descriptor for building a spatial index.
#[derive(Debug, Clone)]
pub struct IndexDesc {
    /// Number of subdivision generations below the root. Depth 0 is a
    /// single childless node; depth `d` eagerly allocates a complete
    /// 8-ary tree of `(8^(d+1) - 1) / 7` nodes.
    pub depth: u32,
    /// Number of insertions between `IndexEvent::BatchIndexed`
    /// notifications during population. Callers driving a large build
    /// incrementally use this as their yield granularity.
    pub batch_size: usize,
}

impl Default for IndexDesc {
    fn default() -> Self {
        Self {
            depth: 3,
            batch_size: 1000,
        }
    }
}
