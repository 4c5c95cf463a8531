use kview_kube::{CacheError, PathError};
use kview_view::ViewError;

/// Possible errors from rendering kubernetes objects.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum PrinterError {
    /// Required argument is missing or empty.
    #[error("invalid input: {0} is missing")]
    InvalidInput(&'static str),

    /// Configuration builder was created without an object.
    #[error("object is nil")]
    NilObject,

    /// There is no handler registered for the kind.
    #[error("kind '{0}' is not supported")]
    UnsupportedKind(String),

    /// Handler is already registered for the kind.
    #[error("handler for kind '{0}' is already registered")]
    DuplicateHandler(String),

    /// Handler needs at least one object to render a list.
    #[error("list of '{0}' cannot be empty")]
    EmptyList(String),

    /// Object cannot be read as the expected kind.
    #[error("invalid object: {0}")]
    InvalidObject(String),

    /// Content path cannot be built.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Object cache failed.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// View component cannot be built.
    #[error(transparent)]
    View(#[from] ViewError),
}
