//! Error types for the schema builder.
//!
//! Creating a type never fails on its own: absent annotations resolve to `None` and a missing
//! directive registry yields empty directive lists. Errors only come from collaborators (the directive
//! registry rejecting a placement) or from the I/O boundary (reading a class index).

use miette::Diagnostic;
use thiserror::Error;

use schema_core::locations::DirectiveLocation;

/// Errors raised while building schema descriptors.
#[derive(Debug, Error, Diagnostic)]
pub enum SchemaError {
    #[error("directive @{directive} is placed on {location} of `{reference}`, but is only allowed on {allowed}")]
    #[diagnostic(
        code(schema::directive_location),
        help("remove the annotation, or declare the location on the directive type")
    )]
    DirectiveLocationNotAllowed {
        directive: String,
        location: DirectiveLocation,
        reference: String,
        allowed: String,
    },

    #[error("class `{0}` is not present in the class index")]
    #[diagnostic(code(schema::unknown_class))]
    UnknownClass(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(schema::io))]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    #[diagnostic(code(schema::json))]
    Json(#[from] serde_json::Error),
}

/// Result type for schema building operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
