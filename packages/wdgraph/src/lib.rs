//! Generic, mutable, weighted directed graphs.
//!
//! [`WeightedDirectedGraph`] is the public face; the data lives in one of two
//! interchangeable storages, [`EdgeList`] or [`AdjacencyMap`] (the default).

pub mod core;
pub mod error;
pub mod storage;
pub mod traits;
pub mod wrappers;

pub use crate::core::*;
pub use error::*;
pub use storage::*;
pub use traits::*;
pub use wrappers::*;
