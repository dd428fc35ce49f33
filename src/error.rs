//! Error type shared by the unit helpers, breakpoint helpers and theme loader.

/// Errors raised while turning theme tokens into CSS.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("malformed CSS length: {0:?}")]
    MalformedLength(String),
    #[error("breakpoint {0:?} is not defined in the breakpoint map")]
    MissingBreakpoint(String),
    #[error("cannot compute a percentage of zero total columns (span {span})")]
    DivisionByZero { span: i32 },
    #[error("invalid theme: {0}")]
    Theme(#[from] serde_json::Error),
}

/// Shorthand result alias used throughout the crate.
pub type Result<T, E = StyleError> = std::result::Result<T, E>;
