//! Bridge-word poetry over a word affinity graph.

pub mod error;
pub mod poet;
pub mod tokenize;

pub use error::*;
pub use poet::*;
pub use tokenize::*;
