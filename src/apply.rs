//! Dispatch of validated requests to an ownership-change executor.
//!
//! The executor is supplied by the hook binary; this crate never touches the
//! filesystem itself.

use std::collections::BTreeMap;
use std::fmt;

use crate::types::ChownRequest;

/// `tracing` target for executor failures.
const LOG_TARGET: &str = "mount_chown::apply";

/// Applies one ownership change.
///
/// Implementations change `request.mount_point` to `request.owner`, walking
/// the subtree when `request.is_recursive()` and touching only the mount
/// point otherwise.
pub trait ChownExecutor {
    /// Error reported for a failed change.
    type Error: fmt::Display;

    /// Apply `request`.
    fn chown(&self, request: &ChownRequest) -> Result<(), Self::Error>;
}

/// Outcome of [`apply_requests`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Mount points changed successfully.
    pub applied: Vec<String>,
    /// Mount points whose change failed, with the error text.
    pub failed: Vec<(String, String)>,
}

impl ApplySummary {
    /// Whether every request was applied.
    pub fn all_applied(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Hand every request to `executor`, in mount-point order.
///
/// Failures are logged and recorded but don't stop the remaining requests.
pub fn apply_requests<E: ChownExecutor>(
    requests: &BTreeMap<String, ChownRequest>,
    executor: &E,
) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for (mount_point, request) in requests {
        match executor.chown(request) {
            Ok(()) => {
                tracing::debug!(
                    target: LOG_TARGET,
                    name = %request.name,
                    mount_point = %mount_point,
                    owner = %request.owner,
                    policy = %request.policy,
                    "applied chown request"
                );
                summary.applied.push(mount_point.clone());
            }
            Err(e) => {
                tracing::warn!(
                    target: LOG_TARGET,
                    name = %request.name,
                    mount_point = %mount_point,
                    error = %e,
                    "chown request failed"
                );
                summary.failed.push((mount_point.clone(), e.to_string()));
            }
        }
    }

    summary
}
