//! Runtime error types
//!
//! Illegal unit arithmetic and missing static transformers are compile errors
//! and never reach this module. The only runtime failure is a lookup miss in
//! the dynamic [`crate::dispatch::TransformerTable`].

/// Result type for runtime transformer lookups
pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// Neither an exact-type override nor a category default is registered
    #[error("no transformer registered for {type_name} or its category {category}")]
    Unregistered {
        type_name: &'static str,
        category: &'static str,
    },
}
