//! Form and query-string definitions backing the directory routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod shops;

#[derive(Debug, Error)]
/// Errors that can occur when processing request data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Malformed(String),
}
