use std::path::PathBuf;

use thiserror::Error;
use wdgraph::GraphError;

#[derive(Error, Debug)]
pub enum PoetError {
    #[error("Cannot read corpus {path:?}")]
    Corpus {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read corpus")]
    Read(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
