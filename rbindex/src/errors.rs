use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;

use crate::common::{atomic, Atomic};

/// Error kinds for ordered index operations.
///
/// Each kind describes a category of failure. Note that an absent key is
/// never an error here: `find` and `remove` report it through their return
/// value, and inserting an already-present key is a distinct success outcome.
///
/// # Examples
///
/// ```rust,ignore
/// use rbindex::errors::{IndexError, ErrorKind, IndexResult};
///
/// fn example() -> IndexResult<()> {
///     Err(IndexError::new("node allocation failed", ErrorKind::OutOfMemory))
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// Heap allocation failed while creating a node
    OutOfMemory,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::OutOfMemory => write!(f, "Out of memory"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Custom error type for the ordered index.
///
/// `IndexError` encapsulates the error message, kind, and optional cause.
/// It supports error chaining and backtraces for debugging.
///
/// # Type alias
///
/// The `IndexResult<T>` type alias is equivalent to `Result<T, IndexError>`
/// and is used throughout the codebase for operations that can fail.
#[derive(Clone)]
pub struct IndexError {
    message: String,
    error_kind: ErrorKind,
    cause: Option<Box<IndexError>>,
    backtrace: Atomic<Backtrace>,
}

impl IndexError {
    /// Creates a new `IndexError` with the specified message and error kind.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    ///
    /// # Returns
    ///
    /// A new `IndexError` instance.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        IndexError {
            message: message.to_string(),
            error_kind,
            cause: None,
            backtrace: atomic(Backtrace::new()),
        }
    }

    /// Creates a new `IndexError` with a cause error.
    ///
    /// This creates an error chain where the cause error is preserved for
    /// debugging.
    ///
    /// # Arguments
    ///
    /// * `message` - A description of the error
    /// * `error_kind` - The category of error
    /// * `cause` - The underlying error that caused this error
    ///
    /// # Returns
    ///
    /// A new `IndexError` instance with the cause error attached.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: IndexError) -> Self {
        IndexError {
            message: message.to_string(),
            error_kind,
            cause: Some(Box::new(cause)),
            backtrace: atomic(Backtrace::new()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn cause(&self) -> Option<&Box<IndexError>> {
        self.cause.as_ref()
    }
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Debug for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{}\nCaused by: {:?}", self.message, cause),
            None => write!(f, "{}\n{:?}", self.message, self.backtrace.read()),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for ordered index operations.
///
/// `IndexResult<T>` is shorthand for `Result<T, IndexError>`.
/// All fallible index operations return this type.
pub type IndexResult<T> = Result<T, IndexError>;
