//! AdjacencyMap: the vertex-centric representation. Each vertex owns its
//! outgoing weights plus a reverse index of incoming weights, so both
//! `successors` and `predecessors` are direct lookups.

use crate::core::{Label, Weight};
use crate::error::GraphError;
use crate::traits::{GraphStorage, MutableStorage, StorageRepresentation};
use indexmap::IndexMap;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexRecord<L, W>
where
    L: Label,
{
    pub outgoing: BTreeMap<L, W>,
    pub incoming: BTreeMap<L, W>,
}

impl<L, W> Default for VertexRecord<L, W>
where
    L: Label,
{
    fn default() -> Self {
        Self {
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AdjacencyMap<L = String, W = i32>
where
    L: Label,
    W: Weight,
{
    pub vertices: IndexMap<L, VertexRecord<L, W>>,
}

impl<L, W> AdjacencyMap<L, W>
where
    L: Label,
    W: Weight,
{
    pub fn new() -> Self {
        Self {
            vertices: IndexMap::new(),
        }
    }
}

impl<L, W> Default for AdjacencyMap<L, W>
where
    L: Label,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, W> StorageRepresentation for AdjacencyMap<L, W>
where
    L: Label,
    W: Weight,
{
    fn with_node_capacity(capacity: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity(capacity),
        }
    }
}

impl<L, W> GraphStorage for AdjacencyMap<L, W>
where
    L: Label,
    W: Weight,
{
    type Label = L;
    type Weight = W;

    fn order(&self) -> usize {
        self.vertices.len()
    }
    fn size(&self) -> usize {
        self.vertices
            .values()
            .map(|record| record.outgoing.len())
            .sum()
    }

    fn contains(&self, v: &L) -> bool {
        self.vertices.contains_key(v)
    }
    fn labels(&self) -> Box<dyn Iterator<Item = &L> + '_> {
        Box::new(self.vertices.keys())
    }

    fn edge_triples(&self) -> Box<dyn Iterator<Item = (&L, &L, W)> + '_> {
        Box::new(self.vertices.iter().flat_map(|(from, record)| {
            record
                .outgoing
                .iter()
                .map(move |(to, weight)| (from, to, *weight))
        }))
    }
    fn weight_between(&self, from: &L, to: &L) -> Option<W> {
        self.vertices.get(from)?.outgoing.get(to).copied()
    }

    fn successors<'a>(&'a self, v: &'a L) -> Box<dyn Iterator<Item = (&'a L, W)> + 'a> {
        match self.vertices.get(v) {
            Some(record) => Box::new(record.outgoing.iter().map(|(to, w)| (to, *w))),
            None => Box::new(std::iter::empty()),
        }
    }
    fn predecessors<'a>(&'a self, v: &'a L) -> Box<dyn Iterator<Item = (&'a L, W)> + 'a> {
        match self.vertices.get(v) {
            Some(record) => Box::new(record.incoming.iter().map(|(from, w)| (from, *w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn check(&self) -> Result<(), GraphError> {
        for (from, record) in &self.vertices {
            for (to, weight) in &record.outgoing {
                if !weight.is_positive() {
                    return Err(GraphError::Inconsistent(format!(
                        "edge {from:?} -> {to:?} has non-positive weight {weight:?}"
                    )));
                }
                let mirrored = self
                    .vertices
                    .get(to)
                    .and_then(|target| target.incoming.get(from));
                if mirrored != Some(weight) {
                    return Err(GraphError::Inconsistent(format!(
                        "edge {from:?} -> {to:?} is missing from the reverse index"
                    )));
                }
            }
            for (source, weight) in &record.incoming {
                let forward = self
                    .vertices
                    .get(source)
                    .and_then(|origin| origin.outgoing.get(from));
                if forward != Some(weight) {
                    return Err(GraphError::Inconsistent(format!(
                        "reverse entry {source:?} -> {from:?} has no forward edge"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl<L, W> MutableStorage for AdjacencyMap<L, W>
where
    L: Label,
    W: Weight,
{
    fn insert_node(&mut self, v: L) -> bool {
        if self.vertices.contains_key(&v) {
            return false;
        }
        self.vertices.insert(v, VertexRecord::default());
        true
    }

    fn remove_node(&mut self, v: &L) -> bool {
        let Some(record) = self.vertices.shift_remove(v) else {
            return false;
        };
        for to in record.outgoing.keys() {
            if let Some(target) = self.vertices.get_mut(to) {
                target.incoming.remove(v);
            }
        }
        for from in record.incoming.keys() {
            if let Some(source) = self.vertices.get_mut(from) {
                source.outgoing.remove(v);
            }
        }
        true
    }

    fn put_edge(&mut self, from: L, to: L, weight: W) -> Option<W> {
        self.insert_node(from.clone());
        self.vertices
            .entry(to.clone())
            .or_default()
            .incoming
            .insert(from.clone(), weight);
        self.vertices
            .entry(from)
            .or_default()
            .outgoing
            .insert(to, weight)
    }

    fn take_edge(&mut self, from: &L, to: &L) -> Option<W> {
        let previous = self.vertices.get_mut(from)?.outgoing.remove(to)?;
        if let Some(target) = self.vertices.get_mut(to) {
            target.incoming.remove(from);
        }
        Some(previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_edge_keeps_reverse_index_in_sync() {
        let mut storage = AdjacencyMap::<char, i32>::new();
        assert_eq!(storage.put_edge('a', 'b', 4), None);
        assert_eq!(storage.put_edge('a', 'b', 9), Some(4));

        assert_eq!(storage.vertices[&'b'].incoming.get(&'a'), Some(&9));
        assert_eq!(storage.size(), 1);
        assert_eq!(storage.check(), Ok(()));
    }

    #[test]
    fn self_loop_is_stored_once_and_removed_cleanly() {
        let mut storage = AdjacencyMap::<char, i32>::new();
        storage.put_edge('a', 'a', 2);
        storage.put_edge('a', 'b', 1);
        assert_eq!(storage.size(), 2);

        assert!(storage.remove_node(&'a'));
        assert_eq!(storage.size(), 0);
        assert!(storage.vertices[&'b'].incoming.is_empty());
        assert_eq!(storage.check(), Ok(()));
    }

    #[test]
    fn take_edge_leaves_both_vertices() {
        let mut storage = AdjacencyMap::<char, i32>::new();
        storage.put_edge('x', 'y', 5);

        assert_eq!(storage.take_edge(&'x', &'y'), Some(5));
        assert_eq!(storage.take_edge(&'x', &'y'), None);
        assert_eq!(storage.order(), 2);
        assert_eq!(storage.check(), Ok(()));
    }

    #[test]
    fn check_reports_broken_reverse_index() {
        let mut storage = AdjacencyMap::<char, i32>::new();
        storage.put_edge('x', 'y', 5);
        if let Some(record) = storage.vertices.get_mut(&'y') {
            record.incoming.clear();
        }

        assert!(matches!(storage.check(), Err(GraphError::Inconsistent(_))));
    }
}
