//! WeightedDirectedGraph wrapper. It wraps a storage representation S, enforces
//! the positive-weight invariant and hands out owned copies of everything it
//! reports. The storage is a type parameter, so `EdgeList` and `AdjacencyMap`
//! graphs share one implementation and one behavior.

use crate::core::{Label, Weight};
use crate::error::GraphError;
use crate::storage::AdjacencyMap;
use crate::traits::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};
use std::marker::PhantomData;
use tracing::trace;

#[derive(Clone, Debug)]
pub struct WeightedDirectedGraph<L, W = i32, S = AdjacencyMap<L, W>>
where
    L: Label,
    W: Weight,
    S: MutableStorage<Label = L, Weight = W>,
{
    storage: S,
    _label: PhantomData<L>,
    _weight: PhantomData<W>,
}

impl<L, W, S> WeightedDirectedGraph<L, W, S>
where
    L: Label,
    W: Weight,
    S: MutableStorage<Label = L, Weight = W>,
{
    /// Empty graph.
    pub fn new() -> Self {
        Self::with_storage(S::with_node_capacity(0))
    }

    /// Wraps an existing storage. The storage is checked so that a graph never
    /// starts out in a state its own operations could not have produced.
    pub fn try_from_storage(storage: S) -> Result<Self, GraphError> {
        storage.check()?;
        Ok(Self::with_storage(storage))
    }

    fn with_storage(storage: S) -> Self {
        Self {
            storage,
            _label: PhantomData,
            _weight: PhantomData,
        }
    }

    pub fn from_vertices_and_edges<UK, NI, EI>(
        nodes_iter: NI,
        edges_iter: EI,
    ) -> Result<Self, GraphError>
    where
        UK: Into<L>,
        NI: IntoIterator<Item = UK>,
        EI: IntoIterator<Item = (UK, UK, W)>,
    {
        let nodes = Vec::from_iter(nodes_iter);

        let mut graph = Self::with_storage(S::with_node_capacity(nodes.len()));
        for node in nodes {
            graph.add(node.into());
        }
        for (from, to, weight) in edges_iter {
            graph.set(from.into(), to.into(), weight)?;
        }

        Ok(graph)
    }

    pub fn from_edges<UK, EI>(edges_iter: EI) -> Result<Self, GraphError>
    where
        UK: Into<L>,
        EI: IntoIterator<Item = (UK, UK, W)>,
    {
        Self::from_vertices_and_edges(std::iter::empty::<UK>(), edges_iter)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Convert storage representation to another storage type.
    pub fn convert_storage<TargetS>(&self) -> TargetS
    where
        S: StorageConvert<TargetS>,
    {
        self.storage.convert()
    }

    /// Convert into a graph backed by another storage.
    pub fn into_storage<TargetS>(self) -> WeightedDirectedGraph<L, W, TargetS>
    where
        S: StorageConvert<TargetS>,
        TargetS: MutableStorage<Label = L, Weight = W>,
    {
        WeightedDirectedGraph::with_storage(self.storage.convert())
    }

    /// Adds `vertex` if absent. Returns false, without touching the graph,
    /// when it is already present.
    pub fn add(&mut self, vertex: L) -> bool {
        let added = self.storage.insert_node(vertex);
        trace!(added, "add vertex");
        added
    }

    /// Sets the weight of `source -> target` and returns the previous weight,
    /// zero when there was no such edge.
    ///
    /// Both labels are vertices afterwards, whatever the weight. A positive
    /// weight creates or replaces the edge; zero deletes it. A negative weight
    /// is rejected before anything is touched.
    pub fn set(&mut self, source: L, target: L, weight: W) -> Result<W, GraphError> {
        if weight < W::zero() {
            return Err(GraphError::NegativeWeight {
                from: format!("{source:?}"),
                to: format!("{target:?}"),
                weight: format!("{weight:?}"),
            });
        }

        let previous = if weight.is_positive() {
            self.storage.put_edge(source, target, weight)
        } else {
            self.storage.insert_node(source.clone());
            self.storage.insert_node(target.clone());
            self.storage.take_edge(&source, &target)
        };
        trace!(?weight, ?previous, "set edge");

        Ok(previous.unwrap_or_else(W::zero))
    }

    /// Removes `vertex` and every edge into or out of it.
    pub fn remove(&mut self, vertex: &L) -> bool {
        let removed = self.storage.remove_node(vertex);
        trace!(removed, "remove vertex");
        removed
    }

    /// Owned copy of the vertex set.
    pub fn vertices(&self) -> BTreeSet<L> {
        self.storage.labels().cloned().collect()
    }

    /// Owned map `source -> weight` of the edges into `target`.
    /// Empty when `target` is absent.
    pub fn sources(&self, target: &L) -> BTreeMap<L, W> {
        self.storage
            .predecessors(target)
            .map(|(source, weight)| (source.clone(), weight))
            .collect()
    }

    /// Owned map `target -> weight` of the edges out of `source`.
    /// Empty when `source` is absent.
    pub fn targets(&self, source: &L) -> BTreeMap<L, W> {
        self.storage
            .successors(source)
            .map(|(target, weight)| (target.clone(), weight))
            .collect()
    }

    pub fn contains(&self, vertex: &L) -> bool {
        self.storage.contains(vertex)
    }

    pub fn weight(&self, source: &L, target: &L) -> Option<W> {
        self.storage.weight_between(source, target)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.storage.order()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.storage.size()
    }

    /// Every edge, sorted by `(source, target)`.
    pub fn edges(&self) -> Vec<(L, L, W)> {
        let mut edges: Vec<_> = self
            .storage
            .edge_triples()
            .map(|(from, to, weight)| (from.clone(), to.clone(), weight))
            .collect();
        edges.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));
        edges
    }

    pub fn validate(&self) -> Result<(), GraphError> {
        self.storage.check()
    }
}

impl<L, W, S> Default for WeightedDirectedGraph<L, W, S>
where
    L: Label,
    W: Weight,
    S: MutableStorage<Label = L, Weight = W>,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Graphs compare by content, never by representation.
impl<L, W, S, T> PartialEq<WeightedDirectedGraph<L, W, T>> for WeightedDirectedGraph<L, W, S>
where
    L: Label,
    W: Weight,
    S: MutableStorage<Label = L, Weight = W>,
    T: MutableStorage<Label = L, Weight = W>,
{
    fn eq(&self, other: &WeightedDirectedGraph<L, W, T>) -> bool {
        self.vertices() == other.vertices() && self.edges() == other.edges()
    }
}

/// One `source -> target: weight` line per edge, sorted by `(source, target)`.
/// A graph without edges renders as the empty string.
impl<L, W, S> Display for WeightedDirectedGraph<L, W, S>
where
    L: Label + Display,
    W: Weight + Display,
    S: MutableStorage<Label = L, Weight = W>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (source, target, weight) in self.edges() {
            writeln!(f, "{source} -> {target}: {weight}")?;
        }
        Ok(())
    }
}
