use thiserror::Error;

/// The kind of a [`PreparseDataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PreparseDataErrorKind {
    /// The buffer for the finalized data could not be allocated.
    #[error("failed to allocate {words} words of preparse data")]
    AllocationFailed {
        /// Number of words requested, preamble included.
        words: usize,
    },
    /// The logged records do not fit into the size field of the preamble.
    #[error("{words} words of records exceed the preparse data format")]
    TooLarge {
        /// Number of words in the variable-length section.
        words: usize,
    },
}

/// An error encountered while finalizing preparse data.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct PreparseDataError {
    pub(crate) kind: PreparseDataErrorKind,
    #[source]
    pub(crate) source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl PreparseDataError {
    /// Creates a new error from a known kind of error as well as an arbitrary error payload.
    pub(crate) fn new<E>(kind: PreparseDataErrorKind, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let source = Some(source.into());
        Self { kind, source }
    }

    /// Returns the corresponding [`PreparseDataErrorKind`] for this error.
    pub fn kind(&self) -> PreparseDataErrorKind {
        self.kind
    }
}

impl From<PreparseDataErrorKind> for PreparseDataError {
    fn from(kind: PreparseDataErrorKind) -> Self {
        Self { kind, source: None }
    }
}
