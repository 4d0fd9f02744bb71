//! Batched index population.

use crossbeam_channel::{Receiver, Sender};

use crate::config::IndexDesc;
use crate::error::{EchoRayError, Result};
use crate::events::IndexEvent;
use crate::geometry::{Aabb, Triangle};
use crate::octree::node::NodeId;
use crate::octree::tree::Octree;
use crate::scene::GeometryProvider;

/// Populates an octree from a stream of triangles, in bounded batches.
///
/// The builder owns the tree for the whole build phase; the only way to
/// get the `Octree` out is [`finish`](IndexBuilder::finish), so a query
/// handle cannot exist against a half-built index. Callers that spread a
/// large build over time insert one batch, handle whatever else needs the
/// thread, and come back; every `batch_size` insertions the builder
/// emits [`IndexEvent::BatchIndexed`] on its event channel, and
/// `finish()` emits [`IndexEvent::BuildCompleted`], which observers on
/// other threads treat as the readiness signal.
#[derive(Debug)]
pub struct IndexBuilder {
    octree: Octree,
    batch_size: usize,
    batch_fill: usize,
    indexed: u64,
    events: Option<Sender<IndexEvent>>,
}

impl IndexBuilder {
    /// Creates a builder with an empty tree sized to `bounds`.
    ///
    /// Fails if the tree itself cannot be built (see
    /// [`Octree::build`]) or if `desc.batch_size` is zero.
    pub fn new(desc: &IndexDesc, bounds: Aabb) -> Result<Self> {
        if desc.batch_size == 0 {
            return Err(EchoRayError::Configuration(
                "batch size must be at least 1".into(),
            ));
        }
        Ok(Self {
            octree: Octree::build(bounds, desc.depth)?,
            batch_size: desc.batch_size,
            batch_fill: 0,
            indexed: 0,
            events: None,
        })
    }

    /// Subscribes to build progress events. A later call replaces the
    /// previous subscriber.
    pub fn subscribe(&mut self) -> Receiver<IndexEvent> {
        let (sender, receiver) = crossbeam_channel::unbounded();
        self.events = Some(sender);
        receiver
    }

    /// Indexes one triangle, emitting a batch event when the current
    /// batch fills up.
    pub fn insert(&mut self, triangle: Triangle) -> NodeId {
        let node = self.octree.insert(triangle);
        self.indexed += 1;
        self.batch_fill += 1;
        if self.batch_fill >= self.batch_size {
            self.batch_fill = 0;
            self.send(IndexEvent::BatchIndexed {
                indexed: self.indexed,
            });
        }
        node
    }

    /// Indexes every triangle in the iterator.
    pub fn extend(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        for triangle in triangles {
            self.insert(triangle);
        }
    }

    /// Running total of indexed triangles.
    pub fn indexed(&self) -> u64 {
        self.indexed
    }

    /// Completes the build and releases the index for querying.
    pub fn finish(self) -> Octree {
        log::info!(
            "total indexed triangles: {} across {} octree nodes",
            self.octree.triangle_count(),
            self.octree.node_count()
        );
        self.send(IndexEvent::BuildCompleted {
            triangles: self.octree.triangle_count(),
            nodes: self.octree.node_count(),
        });
        self.octree
    }

    fn send(&self, event: IndexEvent) {
        if let Some(events) = &self.events {
            // a dropped receiver just means nobody is watching
            let _ = events.send(event);
        }
    }
}

/// One-shot build: sizes the root from the provider's scene bounds,
/// indexes every triangle it enumerates, and returns the finished index.
pub fn build_index(desc: &IndexDesc, provider: &impl GeometryProvider) -> Result<Octree> {
    let mut builder = IndexBuilder::new(desc, provider.scene_bounds())?;
    provider.for_each_triangle(&mut |triangle| {
        builder.insert(triangle);
    });
    Ok(builder.finish())
}
