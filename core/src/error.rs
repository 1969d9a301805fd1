use thiserror::Error;

/// A queried word is not a vertex of the graph.
///
/// The `Display` text is the message shown to users, so callers can print
/// the error directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No \"{0}\" in the graph!")]
    Missing(String),

    #[error("No \"{0}\" and \"{1}\" in the graph!")]
    MissingBoth(String, String),
}
