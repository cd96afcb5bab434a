//! Error types for class-name formatting.
//!
//! Every failure here is a programmer error at the call site: nothing is
//! retried and the builder never tries to recover.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassError {
    /// The block part of a descriptor resolved to an empty name.
    #[error("invalid BEM descriptor: {0}")]
    InvalidDescriptor(String),

    /// A `ClassBuilder` was constructed without a usable primary class.
    #[error("ClassBuilder requires a primary class name")]
    MissingPrimaryClass,

    /// A child class was requested for an element the module never declared.
    #[error("module `{module}` has no element `{element}`")]
    UnknownElement { module: String, element: String },
}

pub type Result<T> = std::result::Result<T, ClassError>;
