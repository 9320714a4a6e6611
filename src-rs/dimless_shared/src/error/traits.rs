use crate::error::{Context, ErrorLocation};

/// Trait for error types that can be rendered as a [`DimlessError`](crate::error::DimlessError).
///
/// Model construction errors only provide a message and context, while
/// parser errors also know where in the declaration file they occurred.
pub trait AsDimlessError {
    /// Returns the primary error message.
    fn message(&self) -> String;

    /// Returns notes and help messages attached to the error.
    fn context(&self) -> Vec<Context> {
        vec![]
    }

    /// Returns the location of the error in the given source text.
    fn error_location(&self, source: &str) -> Option<ErrorLocation> {
        let _ = source;
        None
    }

    /// Returns context items that may point at a location in the source text.
    ///
    /// Items whose location is `None` are treated like [`Self::context`].
    fn context_with_source(&self, source: &str) -> Vec<(Context, Option<ErrorLocation>)> {
        let _ = source;
        vec![]
    }
}
