//! Grammar-level splitting of Amazon Resource Name (ARN) strings.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::string::{String, ToString};
use core::fmt::{self, Display};

use thiserror::Error;

/// Canonical template quoted by [`InvalidArnFormat`] messages.
pub const ARN_TEMPLATE: &str = "arn:<partition>:<service>:<region>:<account-id>:<resource_id>";

/// Raw captures of a single ARN string, borrowed from the input.
///
/// Segments that were present but empty are already normalized to `None`;
/// only the grammar is enforced here. In particular the partition is kept as
/// an unvalidated token, to be resolved against the closed partition set by
/// the `aws-arn` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArnComponents<'a> {
    /// The partition token, e.g. `aws`.
    pub partition: Option<&'a str>,
    /// The service namespace, e.g. `iam`.
    pub service: Option<&'a str>,
    /// The region, e.g. `us-west-2`.
    pub region: Option<&'a str>,
    /// The account id.
    pub account_id: Option<&'a str>,
    /// The resource type, present only when the resource segment carried a
    /// `:` or `/` delimiter after a leading non-delimiter run.
    pub resource_type: Option<&'a str>,
    /// The remainder of the resource segment, which may itself contain `:`
    /// and `/`.
    pub resource_id: Option<&'a str>,
}

/// Error type returned when an input does not match the ARN grammar.
///
/// The message quotes both the expected template and the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct InvalidArnFormat {
    /// The input that failed to match.
    pub input: String,
}

impl Display for InvalidArnFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ARN must match {ARN_TEMPLATE:?}, got: {:?}", self.input)
    }
}

impl<'a> ArnComponents<'a> {
    /// Applies the ARN grammar to `input` and borrows the captures.
    ///
    /// The input must consist of the literal `arn` prefix and five further
    /// `:`-separated segments. The first four segments may be empty but may
    /// not contain `:`; the fifth is the resource segment and keeps every
    /// remaining character, including further `:` and `/`.
    ///
    /// # Errors
    /// [`InvalidArnFormat`] when the prefix is wrong or a separating colon
    /// is missing.
    pub fn parse(input: &'a str) -> Result<Self, InvalidArnFormat> {
        let malformed = || InvalidArnFormat {
            input: input.to_string(),
        };

        let mut segments = input.splitn(6, ':');
        if segments.next() != Some("arn") {
            return Err(malformed());
        }
        let partition = non_empty(segments.next().ok_or_else(malformed)?);
        let service = non_empty(segments.next().ok_or_else(malformed)?);
        let region = non_empty(segments.next().ok_or_else(malformed)?);
        let account_id = non_empty(segments.next().ok_or_else(malformed)?);
        let (resource_type, resource_id) =
            split_resource(segments.next().ok_or_else(malformed)?);

        Ok(Self {
            partition,
            service,
            region,
            account_id,
            resource_type,
            resource_id,
        })
    }
}

impl<'a> TryFrom<&'a str> for ArnComponents<'a> {
    type Error = InvalidArnFormat;

    #[inline]
    fn try_from(input: &'a str) -> Result<Self, Self::Error> {
        Self::parse(input)
    }
}

/// Splits the trailing resource segment into an optional type and the id
/// remainder.
///
/// The type is a leading run of one or more characters other than `:` and
/// `/`, terminated by a single `:` or `/`. A delimiter in first position
/// means there is no type; it stays part of the id.
fn split_resource(resource: &str) -> (Option<&str>, Option<&str>) {
    match resource.split_once([':', '/']) {
        Some((resource_type, resource_id)) if !resource_type.is_empty() => {
            (Some(resource_type), non_empty(resource_id))
        }
        _ => (None, non_empty(resource)),
    }
}

fn non_empty(segment: &str) -> Option<&str> {
    (!segment.is_empty()).then_some(segment)
}
