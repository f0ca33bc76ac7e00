use alloc::string::String;
use core::fmt::{self, Display};
use core::str::FromStr;

use thiserror::Error;

/// Top-level namespace an ARN belongs to.
///
/// The set is closed; see
/// <https://docs.aws.amazon.com/general/latest/gr/aws-arns-and-namespaces.html>.
/// Members are looked up by their exact string value with
/// [`Partition::for_value`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Partition {
    /// Commercial regions (`aws`). The default partition.
    #[default]
    Aws,
    /// China regions (`aws-cn`).
    AwsCn,
    /// GovCloud (US) regions (`aws-us-gov`).
    AwsUsGov,
}

/// Error type returned when a string names no [`Partition`] member.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown partition value: {value:?}, must be one of: {:?}", Partition::VALUES)]
pub struct UnknownPartition {
    /// The value that matched no member.
    pub value: String,
}

impl Partition {
    /// Every member, in declaration order.
    pub const ALL: [Self; 3] = [Self::Aws, Self::AwsCn, Self::AwsUsGov];

    /// The legal string values, in declaration order.
    pub const VALUES: [&'static str; 3] = [
        Self::Aws.as_str(),
        Self::AwsCn.as_str(),
        Self::AwsUsGov.as_str(),
    ];

    /// Returns the canonical string value of this member.
    ///
    /// # Examples
    /// ```rust
    /// # use aws_arn::Partition;
    /// assert_eq!(Partition::AwsUsGov.as_str(), "aws-us-gov");
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::AwsCn => "aws-cn",
            Self::AwsUsGov => "aws-us-gov",
        }
    }

    /// Looks up the member whose string value equals `value`.
    ///
    /// The match is exact and case-sensitive; there is no normalization.
    ///
    /// # Errors
    /// [`UnknownPartition`] when no member matches. The error carries the
    /// offending value and its message lists every legal value.
    ///
    /// # Examples
    /// ```rust
    /// # use aws_arn::Partition;
    /// assert_eq!(Partition::for_value("aws-cn"), Ok(Partition::AwsCn));
    /// assert!(Partition::for_value("azure").is_err());
    /// ```
    #[inline]
    pub fn for_value(value: &str) -> Result<Self, UnknownPartition> {
        Self::ALL
            .into_iter()
            .find(|member| member.as_str() == value)
            .ok_or_else(|| UnknownPartition {
                value: value.into(),
            })
    }
}

impl Display for Partition {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Partition {
    type Err = UnknownPartition;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::for_value(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Unwrap is not an issue in test")]
pub(crate) mod test {
    use alloc::string::ToString;

    use proptest::prelude::*;

    use super::*;

    pub(crate) fn arb_partition() -> impl Strategy<Value = Partition> {
        prop_oneof![
            Just(Partition::Aws),
            Just(Partition::AwsCn),
            Just(Partition::AwsUsGov),
        ]
    }

    #[test]
    fn for_value_round_trips_every_member() {
        for value in Partition::VALUES {
            assert_eq!(Partition::for_value(value).unwrap().as_str(), value);
        }
    }

    #[test]
    fn for_value_rejects_unknown_values() {
        let error = Partition::for_value("foobar").unwrap_err();
        assert_eq!(error.value, "foobar");

        let message = error.to_string();
        assert!(message.contains("\"foobar\""), "{message}");
        for value in Partition::VALUES {
            assert!(message.contains(value), "{message}");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(Partition::for_value("AWS").is_err());
        assert!(Partition::for_value("Aws-Cn").is_err());
    }

    #[test]
    fn default_is_aws() {
        assert_eq!(Partition::default(), Partition::Aws);
    }

    proptest! {
        #[test]
        fn display_matches_value(partition in arb_partition()) {
            prop_assert_eq!(partition.to_string(), partition.as_str());
            prop_assert_eq!(partition.as_str().parse::<Partition>().unwrap(), partition);
        }
    }
}
