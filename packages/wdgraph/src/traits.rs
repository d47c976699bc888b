//! Capability traits shared by the storage representations and the graph wrapper.

use crate::core::{Label, Weight};
use crate::error::GraphError;

/// Minimal read-only view over a storage representation.
///
/// Iterators borrow the storage; callers that need to keep the data around
/// must clone it (the wrapper does this for every public accessor).
pub trait GraphStorage {
    type Label: Label;
    type Weight: Weight;

    /// Number of vertices.
    fn order(&self) -> usize;
    /// Number of edges.
    fn size(&self) -> usize;

    fn contains(&self, v: &Self::Label) -> bool;
    fn labels(&self) -> Box<dyn Iterator<Item = &Self::Label> + '_>;

    /// Every stored edge as `(from, to, weight)`, in storage order.
    fn edge_triples(
        &self,
    ) -> Box<dyn Iterator<Item = (&Self::Label, &Self::Label, Self::Weight)> + '_>;
    fn weight_between(&self, from: &Self::Label, to: &Self::Label) -> Option<Self::Weight>;

    /// Outgoing edges of `v` as `(target, weight)`. Empty for an absent vertex.
    fn successors<'a>(
        &'a self,
        v: &'a Self::Label,
    ) -> Box<dyn Iterator<Item = (&'a Self::Label, Self::Weight)> + 'a>;

    /// Incoming edges of `v` as `(source, weight)`. Empty for an absent vertex.
    fn predecessors<'a>(
        &'a self,
        v: &'a Self::Label,
    ) -> Box<dyn Iterator<Item = (&'a Self::Label, Self::Weight)> + 'a>;

    /// Checks the representation invariants without repairing anything.
    fn check(&self) -> Result<(), GraphError>;
}

/// Storage types implement this to mark they are a storage representation.
pub trait StorageRepresentation: GraphStorage {
    fn with_node_capacity(capacity: usize) -> Self;
}

/// Mutable storage operations. Storages do not police weights; the wrapper does.
pub trait MutableStorage: StorageRepresentation {
    /// Returns false when the vertex was already present.
    fn insert_node(&mut self, v: Self::Label) -> bool;

    /// Removes the vertex with every incident edge. Returns false when absent.
    fn remove_node(&mut self, v: &Self::Label) -> bool;

    /// Creates or replaces `from -> to`, interning both endpoints.
    /// Returns the replaced weight, if any.
    fn put_edge(
        &mut self,
        from: Self::Label,
        to: Self::Label,
        weight: Self::Weight,
    ) -> Option<Self::Weight>;

    /// Deletes `from -> to`. Endpoints stay. Returns the deleted weight, if any.
    fn take_edge(&mut self, from: &Self::Label, to: &Self::Label) -> Option<Self::Weight>;
}

/// Trait for converting between storage representations (expensive, may allocate).
pub trait StorageConvert<Target> {
    fn convert(&self) -> Target;
}

/// Any readable storage converts into any mutable storage over the same label
/// and weight types. Vertices are copied first, in storage order, so isolated
/// vertices survive the conversion.
impl<S, Target> StorageConvert<Target> for S
where
    S: GraphStorage,
    Target: MutableStorage<Label = S::Label, Weight = S::Weight>,
{
    fn convert(&self) -> Target {
        let mut target = Target::with_node_capacity(self.order());
        for label in self.labels() {
            target.insert_node(label.clone());
        }
        for (from, to, weight) in self.edge_triples() {
            target.put_edge(from.clone(), to.clone(), weight);
        }
        target
    }
}
