pub mod adjacency_map;
pub mod edge_list;

pub use adjacency_map::{AdjacencyMap, VertexRecord};
pub use edge_list::{EdgeList, EdgeRecord};
