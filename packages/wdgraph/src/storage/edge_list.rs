//! EdgeList: the edge-centric representation (vertex set + flat list of edges).
//! Every edge query is a linear scan over `edges`.

use crate::core::{Label, Weight};
use crate::error::GraphError;
use crate::traits::{GraphStorage, MutableStorage, StorageRepresentation};
use indexmap::IndexSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeRecord<L, W> {
    pub from: L,
    pub to: L,
    pub weight: W,
}

impl<L, W> EdgeRecord<L, W> {
    pub fn new(from: L, to: L, weight: W) -> Self {
        EdgeRecord { from, to, weight }
    }
}

#[derive(Clone, Debug)]
pub struct EdgeList<L = String, W = i32>
where
    L: Label,
    W: Weight,
{
    pub nodes: IndexSet<L>,
    pub edges: Vec<EdgeRecord<L, W>>,
}

impl<L, W> EdgeList<L, W>
where
    L: Label,
    W: Weight,
{
    pub fn new() -> Self {
        Self {
            nodes: IndexSet::new(),
            edges: Vec::new(),
        }
    }

    fn position(&self, from: &L, to: &L) -> Option<usize> {
        self.edges
            .iter()
            .position(|edge| &edge.from == from && &edge.to == to)
    }
}

impl<L, W> Default for EdgeList<L, W>
where
    L: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> StorageRepresentation for EdgeList<L, W>
where
    L: Label,
    W: Weight,
{
    fn with_node_capacity(capacity: usize) -> Self {
        Self {
            nodes: IndexSet::with_capacity(capacity),
            edges: Vec::new(),
        }
    }
}

impl<L, W> GraphStorage for EdgeList<L, W>
where
    L: Label,
    W: Weight,
{
    type Label = L;
    type Weight = W;

    fn order(&self) -> usize {
        self.nodes.len()
    }
    fn size(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, v: &L) -> bool {
        self.nodes.contains(v)
    }
    fn labels(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        Box::new(self.nodes.iter())
    }

    fn edge_triples(&self) -> Box<dyn Iterator<Item = (&L, &L, W)> + '_> {
        Box::new(
            self.edges
                .iter()
                .map(|edge| (&edge.from, &edge.to, edge.weight)),
        )
    }
    fn weight_between(&self, from: &L, to: &L) -> Option<W> {
        self.position(from, to).map(|i| self.edges[i].weight)
    }

    fn successors<'a>(&'a self, v: &'a L) -> Box<dyn Iterator<Item = (&'a L, W)> + 'a> {
        Box::new(
            self.edges
                .iter()
                .filter(move |edge| &edge.from == v)
                .map(|edge| (&edge.to, edge.weight)),
        )
    }
    fn predecessors<'a>(&'a self, v: &'a L) -> Box<dyn Iterator<Item = (&'a L, W)> + 'a> {
        Box::new(
            self.edges
                .iter()
                .filter(move |edge| &edge.to == v)
                .map(|edge| (&edge.from, edge.weight)),
        )
    }

    fn check(&self) -> Result<(), GraphError> {
        for (i, edge) in self.edges.iter().enumerate() {
            if !edge.weight.is_positive() {
                return Err(GraphError::Inconsistent(format!(
                    "edge {:?} -> {:?} has non-positive weight {:?}",
                    edge.from, edge.to, edge.weight
                )));
            }
            if !self.nodes.contains(&edge.from) || !self.nodes.contains(&edge.to) {
                return Err(GraphError::Inconsistent(format!(
                    "edge {:?} -> {:?} has an endpoint outside the vertex set",
                    edge.from, edge.to
                )));
            }
            if self.edges[i + 1..]
                .iter()
                .any(|other| other.from == edge.from && other.to == edge.to)
            {
                return Err(GraphError::Inconsistent(format!(
                    "parallel edges {:?} -> {:?}",
                    edge.from, edge.to
                )));
            }
        }
        Ok(())
    }
}

impl<L, W> MutableStorage for EdgeList<L, W>
where
    L: Label,
    W: Weight,
{
    fn insert_node(&mut self, v: L) -> bool {
        self.nodes.insert(v)
    }

    fn remove_node(&mut self, v: &L) -> bool {
        if !self.nodes.shift_remove(v) {
            return false;
        }
        self.edges.retain(|edge| &edge.from != v && &edge.to != v);
        true
    }

    fn put_edge(&mut self, from: L, to: L, weight: W) -> Option<W> {
        if let Some(i) = self.position(&from, &to) {
            return Some(std::mem::replace(&mut self.edges[i].weight, weight));
        }
        self.nodes.insert(from.clone());
        self.nodes.insert(to.clone());
        self.edges.push(EdgeRecord::new(from, to, weight));
        None
    }

    fn take_edge(&mut self, from: &L, to: &L) -> Option<W> {
        let i = self.position(from, to)?;
        Some(self.edges.remove(i).weight)
    }
}
