//! Core types for mount ownership requests
//!
//! This crate defines the request model shared by the annotation scanner and
//! the executor seam:
//! - Owner: validated `uid:gid` pair, plus the owner specification parser
//! - Policy: recursive, root-only, or unspecified
//! - PartialRequest: a request while it is being assembled
//! - ChownRequest: a validated request ready for an executor

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod owner;
pub mod request;

pub use owner::{parse_owner, Owner, OwnerParseError, OwnerRangeError};
pub use request::{
    ChownRequest, PartialRequest, Policy, PolicyParseError, POLICY_RECURSIVE, POLICY_ROOT_ONLY,
};
