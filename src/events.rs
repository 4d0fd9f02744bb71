//! Event types for EchoRay

/// Notifications emitted by an [`IndexBuilder`](crate::octree::IndexBuilder)
/// over its event channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEvent {
    /// Another full batch of triangles has been indexed. `indexed` is the
    /// running total across the whole build.
    BatchIndexed { indexed: u64 },
    /// The build is complete and the index is ready for queries.
    BuildCompleted { triangles: usize, nodes: usize },
}
