//! Shared diagnostics for the dimless tools
//!
//! Every error type in the workspace implements [`error::AsDimlessError`] so
//! that the command line front end can render it uniformly.

pub mod error;
pub mod span;
