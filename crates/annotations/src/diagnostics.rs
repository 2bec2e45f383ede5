//! Warnings produced while scanning.
//!
//! Every rejected key, fragment or request yields one [`Diagnostic`]. They
//! are logged through `tracing` as they happen and also returned to the
//! caller, so a hook can surface them without a subscriber.

use mount_chown_core::{OwnerParseError, OwnerRangeError};
use thiserror::Error;

/// `tracing` target for scanner diagnostics.
pub(crate) const LOG_TARGET: &str = "mount_chown::annotations";

/// A rejected key, fragment or request. `Display` gives the warning text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Key is inside the namespace but not `<name>.<argument>`
    #[error("malformed chown annotation key {key}, ignored")]
    MalformedKey {
        /// Full input key
        key: String,
    },
    /// Owner value did not parse
    #[error("invalid owner argument for {name} with error {source}, ignored")]
    InvalidOwner {
        /// Request name
        name: String,
        /// Parser error
        source: OwnerParseError,
    },
    /// Owner value parsed to negative or too wide ids
    #[error("invalid owner argument for {name}: {source}, ignored")]
    OwnerOutOfRange {
        /// Request name
        name: String,
        /// Range error
        source: OwnerRangeError,
    },
    /// Argument kind is not one of mount-point, owner, policy
    #[error("invalid chown argument {argument} for request {name}, ignored")]
    UnknownArgument {
        /// Request name
        name: String,
        /// The unrecognized argument literal
        argument: String,
    },
    /// Request never got a non-empty mount point
    #[error("empty mount-point argument value for {name}, ignored")]
    MissingMountPoint {
        /// Request name
        name: String,
    },
    /// Request never got a valid owner
    #[error("empty owner argument value for {name}, ignored")]
    MissingOwner {
        /// Request name
        name: String,
    },
    /// Policy value is not recognized
    #[error("invalid policy argument value {policy} for {name}, ignored")]
    InvalidPolicy {
        /// Request name
        name: String,
        /// The rejected value
        policy: String,
    },
}

impl Diagnostic {
    /// The request name this diagnostic is about, if the key had one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Diagnostic::MalformedKey { .. } => None,
            Diagnostic::InvalidOwner { name, .. }
            | Diagnostic::OwnerOutOfRange { name, .. }
            | Diagnostic::UnknownArgument { name, .. }
            | Diagnostic::MissingMountPoint { name }
            | Diagnostic::MissingOwner { name }
            | Diagnostic::InvalidPolicy { name, .. } => Some(name.as_str()),
        }
    }

    /// Emit this diagnostic as a warning.
    pub(crate) fn log(&self) {
        match self {
            Diagnostic::MalformedKey { key } => {
                tracing::warn!(target: LOG_TARGET, key = %key, "{}", self)
            }
            Diagnostic::InvalidOwner { name, source } => {
                tracing::warn!(target: LOG_TARGET, name = %name, error = %source, "{}", self)
            }
            Diagnostic::OwnerOutOfRange { name, source } => {
                tracing::warn!(target: LOG_TARGET, name = %name, error = %source, "{}", self)
            }
            Diagnostic::UnknownArgument { name, argument } => {
                tracing::warn!(target: LOG_TARGET, name = %name, argument = %argument, "{}", self)
            }
            Diagnostic::InvalidPolicy { name, policy } => {
                tracing::warn!(target: LOG_TARGET, name = %name, policy = %policy, "{}", self)
            }
            Diagnostic::MissingMountPoint { name } | Diagnostic::MissingOwner { name } => {
                tracing::warn!(target: LOG_TARGET, name = %name, "{}", self)
            }
        }
    }
}

/// Log `diagnostic` and append it to `sink`.
pub(crate) fn report(sink: &mut Vec<Diagnostic>, diagnostic: Diagnostic) {
    diagnostic.log();
    sink.push(diagnostic);
}
