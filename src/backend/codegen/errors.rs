//! Define error types for tree → Java emission.
//!
//! These are *contract* failures, not user-facing diagnostics: the backend assumes a validated,
//! fully-annotated tree, so every variant here marks a broken invariant in the upstream pipeline.
//! Emission stops at the first one and the partial output is discarded, never returned.

use thiserror::Error;

/// Error during Java emission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("access to `{0}` has no resolved variable binding")]
    UnresolvedVariable(String),
    #[error("call to `{0}` has no resolved function binding")]
    UnresolvedFunction(String),
    #[error("return statements must carry a value")]
    MissingReturnValue,
    #[error("declaration of `{0}` has neither a declared type nor a literal initializer to infer one from")]
    UntypedDeclaration(String),
    #[error("list initializer for global `{0}` contains a non-literal element")]
    NonLiteralListElement(String),
}
