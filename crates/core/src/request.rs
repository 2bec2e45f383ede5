//! Ownership change request types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::owner::Owner;

/// Literal for [`Policy::Recursive`].
pub const POLICY_RECURSIVE: &str = "recursive";
/// Literal for [`Policy::RootOnly`].
pub const POLICY_ROOT_ONLY: &str = "root-only";

/// Error for a policy value outside the recognized literals
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown chown policy {0:?}")]
pub struct PolicyParseError(pub String);

/// How broadly an ownership change is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// No policy given; the executor applies its default (root only).
    #[default]
    #[serde(rename = "")]
    Unspecified,
    /// Change the mount point and everything below it.
    #[serde(rename = "recursive")]
    Recursive,
    /// Change only the mount point itself.
    #[serde(rename = "root-only")]
    RootOnly,
}

impl Policy {
    /// The annotation literal for this policy (`""` when unspecified).
    pub fn as_str(&self) -> &'static str {
        match self {
            Policy::Unspecified => "",
            Policy::Recursive => POLICY_RECURSIVE,
            Policy::RootOnly => POLICY_ROOT_ONLY,
        }
    }

    /// Whether the change must walk the whole subtree.
    pub fn is_recursive(&self) -> bool {
        matches!(self, Policy::Recursive)
    }
}

impl FromStr for Policy {
    type Err = PolicyParseError;

    /// The empty string is accepted and means [`Policy::Unspecified`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Policy::Unspecified),
            POLICY_RECURSIVE => Ok(Policy::Recursive),
            POLICY_ROOT_ONLY => Ok(Policy::RootOnly),
            other => Err(PolicyParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully validated ownership change request.
///
/// Produced only by the finalization pass; every field is known to be usable
/// by an executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChownRequest {
    /// Grouping name taken from the annotation keys.
    pub name: String,
    /// Mount destination to change, never empty.
    pub mount_point: String,
    /// Target user and group.
    #[serde(flatten)]
    pub owner: Owner,
    /// Application policy.
    #[serde(default)]
    pub policy: Policy,
}

impl ChownRequest {
    /// Target user id
    pub fn user(&self) -> u32 {
        self.owner.uid
    }

    /// Target group id
    pub fn group(&self) -> u32 {
        self.owner.gid
    }

    /// Whether the change must walk the whole subtree.
    pub fn is_recursive(&self) -> bool {
        self.policy.is_recursive()
    }
}

/// A request being assembled from annotation fragments.
///
/// Fields start unset and are filled one fragment at a time; a fragment only
/// touches the field it targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRequest {
    /// Grouping name taken from the annotation keys.
    pub name: String,
    /// Mount destination (empty until a `mount-point` fragment is seen).
    pub mount_point: String,
    /// Target owner (None until a valid `owner` fragment is seen).
    pub owner: Option<Owner>,
    /// Raw policy value, validated at finalization.
    pub policy: String,
}

impl PartialRequest {
    /// Create an empty request for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        PartialRequest {
            name: name.into(),
            ..Default::default()
        }
    }
}
