//! core small types

use std::fmt::Debug;
use std::hash::Hash;

/// Vertex label. Anything comparable, hashable and cloneable can label a vertex.
pub trait Label: Clone + Ord + Hash + Debug {}

impl<T> Label for T where T: Clone + Ord + Hash + Debug {}

/// Minimal integer weight trait
pub trait Weight:
    Copy + Ord + std::ops::Add<Output = Self> + Debug + Send + Sync + 'static
{
    fn zero() -> Self;

    fn is_positive(self) -> bool {
        self > Self::zero()
    }
}

impl Weight for i32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for i64 {
    fn zero() -> Self {
        0
    }
}

impl Weight for u32 {
    fn zero() -> Self {
        0
    }
}
impl Weight for u64 {
    fn zero() -> Self {
        0
    }
}
