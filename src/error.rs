//! Error types for service command generation and dispatch.

use thiserror::Error;

/// Errors raised at the point of misuse.
///
/// The command-generation layer is fail-fast: nothing here is retried or
/// swallowed. Failures of the injected run and filesystem capabilities are
/// not part of this taxonomy; they surface through `anyhow` at the manager
/// seams.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The action is outside the generator family's closed set.
    #[error("action not supported by this init system: {action}")]
    UnsupportedAction { action: String },

    /// The action was excluded from a generator's allowed subset.
    #[error("no such operation: {action}")]
    NoSuchOperation { action: String },

    /// Registry lookup by an identifier other than "systemd" or "init".
    #[error("unknown init system: {name}")]
    UnknownInitSystem { name: String },

    /// Runlevel outside {0-6, s}.
    #[error("invalid runlevel: {runlevel}")]
    InvalidRunlevel { runlevel: String },

    /// Target name outside the canonical systemd target set.
    #[error("invalid systemd target: {target}")]
    InvalidTarget { target: String },
}

/// Result alias for the command-generation layer.
pub type ServiceResult<T> = Result<T, ServiceError>;
