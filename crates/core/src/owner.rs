//! Owner specification parsing
//!
//! An owner specification is the value of an `owner` annotation:
//!
//! | Syntax | Meaning | Example |
//! |--------|---------|---------|
//! | `uid` | user id, group defaults to `0` | `1000` |
//! | `uid:gid` | user id and group id | `1000:100` |
//!
//! Parsing happens in two steps. [`parse_owner`] only checks the shape and
//! that each segment is a base-10 integer; sign and width are checked by
//! [`Owner::try_from_ids`], so callers can report a negative id differently
//! from a non-numeric one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// Separator between the uid and gid segments.
const SEP: char = ':';

/// Error type for owner specification parsing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OwnerParseError {
    /// Not one or two `:`-separated segments
    #[error("expected one or two parts in the owner but got {0}")]
    WrongSegmentCount(usize),
    /// A segment is not a base-10 integer
    #[error("invalid numeric id {segment:?}: {source}")]
    NonNumeric {
        /// The offending segment
        segment: String,
        /// Underlying integer parse failure
        source: ParseIntError,
    },
}

/// Error type for ids that parsed but cannot be used as uid/gid
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OwnerRangeError {
    /// uid or gid below zero
    #[error("negative uid or gid ({uid}:{gid})")]
    Negative {
        /// Parsed uid
        uid: i64,
        /// Parsed gid
        gid: i64,
    },
    /// uid or gid wider than 32 bits
    #[error("uid or gid out of range ({uid}:{gid})")]
    OutOfRange {
        /// Parsed uid
        uid: i64,
        /// Parsed gid
        gid: i64,
    },
}

/// Parse an owner specification into `(uid, gid)`.
///
/// The group defaults to `0` when omitted. Signs are accepted here; use
/// [`Owner::try_from_ids`] to reject negative ids.
pub fn parse_owner(value: &str) -> Result<(i64, i64), OwnerParseError> {
    let parts: Vec<&str> = value.split(SEP).collect();
    if parts.is_empty() || parts.len() > 2 {
        return Err(OwnerParseError::WrongSegmentCount(parts.len()));
    }

    let uid = parse_id(parts[0])?;
    let gid = match parts.get(1) {
        Some(segment) => parse_id(segment)?,
        None => 0,
    };
    Ok((uid, gid))
}

fn parse_id(segment: &str) -> Result<i64, OwnerParseError> {
    segment
        .parse::<i64>()
        .map_err(|source| OwnerParseError::NonNumeric {
            segment: segment.to_string(),
            source,
        })
}

/// A validated `uid:gid` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner {
    /// User id
    #[serde(rename = "user")]
    pub uid: u32,
    /// Group id
    #[serde(rename = "group")]
    pub gid: u32,
}

impl Owner {
    /// Create an owner from ids already known to be valid
    pub fn new(uid: u32, gid: u32) -> Self {
        Owner { uid, gid }
    }

    /// Check parsed ids and build an owner.
    ///
    /// Negative ids are reported before out-of-range ones.
    pub fn try_from_ids(uid: i64, gid: i64) -> Result<Self, OwnerRangeError> {
        if uid < 0 || gid < 0 {
            return Err(OwnerRangeError::Negative { uid, gid });
        }
        match (u32::try_from(uid), u32::try_from(gid)) {
            (Ok(uid), Ok(gid)) => Ok(Owner { uid, gid }),
            _ => Err(OwnerRangeError::OutOfRange { uid, gid }),
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEP}{}", self.uid, self.gid)
    }
}
