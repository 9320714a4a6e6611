use std::fmt;

/// Additional information attached to an error.
///
/// # Examples
///
/// ```rust
/// use dimless_shared::error::Context;
///
/// let note = Context::Note("the matrix has rank 2".to_string());
/// let help = Context::Help("mark exactly 2 quantities with `@scaling`".to_string());
///
/// assert_eq!(note.to_string(), "note: the matrix has rank 2");
/// assert_eq!(help.to_string(), "help: mark exactly 2 quantities with `@scaling`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Context {
    /// Supplementary detail about the error.
    Note(String),
    /// A suggestion for fixing the error.
    Help(String),
}

impl Context {
    /// Returns the label shown before the message, `note` or `help`
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Note(_) => "note",
            Self::Help(_) => "help",
        }
    }

    /// Returns the message of the context item
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Note(message) | Self::Help(message) => message,
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.message())
    }
}
