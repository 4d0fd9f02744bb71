//! Owner metadata for indexed geometry.

use uuid::Uuid;

use crate::math::Affine3A;

/// Immutable metadata for an object that contributed triangles to the
/// index.
///
/// Hits report the owning object so acoustic collaborators can resolve
/// surface properties; the engine itself only reads the layer (for mask
/// filtering) and the transform (once, when baking triangles).
#[derive(Debug, Clone)]
pub struct SceneObject {
    id: Uuid,
    name: String,
    layer: u8,
    transform: Affine3A,
}

impl SceneObject {
    /// Creates an object record. `layer` is a bit index into a
    /// [`LayerMask`].
    ///
    /// # Panics
    ///
    /// Panics if `layer` is 32 or greater.
    pub fn new(name: impl Into<String>, layer: u8, transform: Affine3A) -> Self {
        assert!(layer < 32, "layer index must be below 32");
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            layer,
            transform,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn layer(&self) -> u8 {
        self.layer
    }

    pub fn transform(&self) -> Affine3A {
        self.transform
    }
}

/// A set of layers, one bit per layer index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerMask(u32);

impl LayerMask {
    pub const ALL: Self = Self(u32::MAX);
    pub const NONE: Self = Self(0);

    /// Mask containing only `layer`.
    pub fn only(layer: u8) -> Self {
        Self(1 << layer)
    }

    /// This mask with `layer` added.
    pub fn with(self, layer: u8) -> Self {
        Self(self.0 | (1 << layer))
    }

    pub fn contains(self, layer: u8) -> bool {
        self.0 & (1 << layer) != 0
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}
