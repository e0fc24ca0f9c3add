//! Error types for graph construction and chain queries

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChainError {
    /// A name was referenced that is neither the base resource nor
    /// produced by any reaction.
    #[error("unknown resource '{0}'")]
    UnknownResource(String),

    #[error("resource '{0}' is produced by more than one reaction")]
    DuplicateRecipe(String),

    #[error("reaction list contains a cycle through '{0}'")]
    CyclicDependency(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
