//! Errors reported by the dimless tools

mod context;
mod location;
mod traits;

use std::path::PathBuf;

pub use context::Context;
pub use location::ErrorLocation;
pub use traits::AsDimlessError;

/// Unified error representation for display to users
///
/// Holds the file the error belongs to, a message, an optional location in
/// that file and any notes or help attached by the originating error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimlessError {
    path: PathBuf,
    message: String,
    location: Option<ErrorLocation>,
    context: Vec<Context>,
    context_with_source: Vec<(Context, ErrorLocation)>,
}

impl DimlessError {
    /// Creates a new `DimlessError` without source location information
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimless_shared::error::{AsDimlessError, DimlessError};
    /// use std::path::PathBuf;
    ///
    /// struct SimpleError(String);
    ///
    /// impl AsDimlessError for SimpleError {
    ///     fn message(&self) -> String {
    ///         self.0.clone()
    ///     }
    /// }
    ///
    /// let error = SimpleError("no dependent quantity".to_string());
    /// let error = DimlessError::from_error(&error, PathBuf::from("pendulum.dl"));
    /// assert_eq!(error.message(), "no dependent quantity");
    /// assert!(error.location().is_none());
    /// ```
    pub fn from_error(error: &impl AsDimlessError, path: PathBuf) -> Self {
        Self {
            path,
            message: error.message(),
            location: None,
            context: error.context(),
            context_with_source: vec![],
        }
    }

    /// Creates a new `DimlessError`, using the source text to compute the
    /// line and column of the error and of any located context
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dimless_shared::error::{AsDimlessError, DimlessError, ErrorLocation};
    /// use std::path::PathBuf;
    ///
    /// struct PositionalError(usize);
    ///
    /// impl AsDimlessError for PositionalError {
    ///     fn message(&self) -> String {
    ///         "unexpected character".to_string()
    ///     }
    ///
    ///     fn error_location(&self, source: &str) -> Option<ErrorLocation> {
    ///         Some(ErrorLocation::from_source_and_offset(source, self.0))
    ///     }
    /// }
    ///
    /// let source = "T : time\nL : length $";
    /// let error = DimlessError::from_error_with_source(&PositionalError(20), PathBuf::from("a.dl"), source);
    /// let location = error.location().expect("location should be present");
    /// assert_eq!(location.line(), 2);
    /// assert_eq!(location.column(), 12);
    /// ```
    pub fn from_error_with_source(
        error: &impl AsDimlessError,
        path: PathBuf,
        source: &str,
    ) -> Self {
        let mut context = error.context();
        let mut context_with_source = vec![];

        for (context_item, location) in error.context_with_source(source) {
            match location {
                Some(location) => context_with_source.push((context_item, location)),
                None => context.push(context_item),
            }
        }

        Self {
            path,
            message: error.message(),
            location: error.error_location(source),
            context,
            context_with_source,
        }
    }

    /// Creates a new `DimlessError`, with location information only when the
    /// source text is available
    pub fn from_error_with_optional_source(
        error: &impl AsDimlessError,
        path: PathBuf,
        source: Option<&str>,
    ) -> Self {
        match source {
            Some(source) => Self::from_error_with_source(error, path, source),
            None => Self::from_error(error, path),
        }
    }

    /// Returns the path of the file the error belongs to
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the location of the error, if known
    #[must_use]
    pub const fn location(&self) -> Option<&ErrorLocation> {
        self.location.as_ref()
    }

    /// Returns the notes and help messages without a location
    #[must_use]
    pub fn context(&self) -> &[Context] {
        &self.context
    }

    /// Returns the notes and help messages that point into the source
    #[must_use]
    pub fn context_with_source(&self) -> &[(Context, ErrorLocation)] {
        &self.context_with_source
    }
}
