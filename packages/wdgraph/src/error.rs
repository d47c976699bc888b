use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Negative weight {weight} for edge {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Inconsistent graph storage: {0}")]
    Inconsistent(String),
}
