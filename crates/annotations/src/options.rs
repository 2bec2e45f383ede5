//! Scanner configuration.
//!
//! The namespace is fixed at [`ANNOTATION_PREFIX`](crate::keys::ANNOTATION_PREFIX);
//! only key strictness is configurable.

use serde::Deserialize;
use thiserror::Error;

/// Error loading [`ScanOptions`] from a configuration document
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML, has unknown fields, or has fields of
    /// the wrong type
    #[error("invalid scanner configuration: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Options for scanning annotations.
///
/// Use the builder pattern to configure options:
///
/// ```
/// use mount_chown_annotations::ScanOptions;
///
/// let opts = ScanOptions::new().strict_keys(true);
/// assert!(opts.strict_keys);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanOptions {
    /// Treat keys with segments after the argument kind as malformed.
    pub strict_keys: bool,
}

impl ScanOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set strict key matching.
    pub fn strict_keys(mut self, strict: bool) -> Self {
        self.strict_keys = strict;
        self
    }

    /// Load options from a TOML document.
    ///
    /// Missing fields take their defaults; unknown fields are rejected.
    ///
    /// ```toml
    /// strict_keys = true
    /// ```
    pub fn from_toml_str(doc: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(doc)?)
    }
}
