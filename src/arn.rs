use alloc::string::String;
use core::fmt::{self, Display};
use core::str::FromStr;

use parsing::{ArnComponents, InvalidArnFormat};
use thiserror::Error;

use crate::partition::{Partition, UnknownPartition};

/// Error type returned when a string cannot become an [`Arn`].
///
/// Each variant wraps the error of the stage that failed and is propagated
/// unchanged, so the message always names the exact failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseArnError {
    /// The input does not match the ARN grammar.
    #[error(transparent)]
    Format(#[from] InvalidArnFormat),
    /// The partition segment names no known partition.
    #[error(transparent)]
    Partition(#[from] UnknownPartition),
}

/// An Amazon Resource Name, decomposed into its six fields.
///
/// Values are immutable once constructed; assemble one with [`Arn::builder`]
/// or parse one from its string form. Every field except the partition is
/// optional, and an absent field renders as an empty segment.
///
/// Formatting always joins the resource type and id with `/`, so an ARN
/// parsed from the `type:id` form renders back as `type/id`.
///
/// # Examples
/// ```rust
/// use aws_arn::{Arn, Partition};
///
/// let arn: Arn = "arn:aws:iam:us-west-2:1234:user/julian".parse()?;
/// assert_eq!(arn.partition(), Partition::Aws);
/// assert_eq!(arn.service(), Some("iam"));
/// assert_eq!(arn.resource_type(), Some("user"));
/// assert_eq!(arn.resource_id(), Some("julian"));
/// # Ok::<_, aws_arn::ParseArnError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arn {
    partition: Partition,
    service: Option<String>,
    region: Option<String>,
    account_id: Option<String>,
    resource_type: Option<String>,
    resource_id: Option<String>,
}

impl Arn {
    /// Returns a builder with every field unset.
    ///
    /// # Examples
    /// ```rust
    /// use aws_arn::Arn;
    ///
    /// let arn = Arn::builder()
    ///     .service("iam")
    ///     .region("us-west-2")
    ///     .account_id("1234")
    ///     .resource_type("user")
    ///     .resource_id("julian")
    ///     .build();
    /// assert_eq!(arn.to_string(), "arn:aws:iam:us-west-2:1234:user/julian");
    /// ```
    #[inline]
    #[must_use]
    pub fn builder() -> ArnBuilder {
        ArnBuilder::default()
    }

    /// Parses `input` against the ARN grammar.
    ///
    /// Empty segments parse as absent fields, and an empty partition segment
    /// falls back to [`Partition::Aws`]. The resource part splits into a type
    /// and an id at its first `:` or `/`.
    ///
    /// # Errors
    /// [`ParseArnError::Format`] when `input` does not match the grammar,
    /// [`ParseArnError::Partition`] when the partition segment names no known
    /// partition.
    pub fn parse(input: &str) -> Result<Self, ParseArnError> {
        let components = ArnComponents::parse(input)?;
        let partition = match components.partition {
            Some(value) => Partition::for_value(value)?,
            None => Partition::default(),
        };
        Ok(Self {
            partition,
            service: components.service.map(String::from),
            region: components.region.map(String::from),
            account_id: components.account_id.map(String::from),
            resource_type: components.resource_type.map(String::from),
            resource_id: components.resource_id.map(String::from),
        })
    }

    /// Returns the partition.
    #[inline]
    #[must_use]
    pub const fn partition(&self) -> Partition {
        self.partition
    }

    /// Returns the service namespace, if set.
    #[inline]
    #[must_use]
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Returns the region, if set.
    #[inline]
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Returns the account id, if set.
    #[inline]
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Returns the resource type, if set.
    #[inline]
    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    /// Returns the resource id, if set.
    #[inline]
    #[must_use]
    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }
}

impl Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:",
            self.partition,
            self.service.as_deref().unwrap_or(""),
            self.region.as_deref().unwrap_or(""),
            self.account_id.as_deref().unwrap_or(""),
        )?;
        if let Some(resource_type) = &self.resource_type {
            write!(f, "{resource_type}/")?;
        }
        f.write_str(self.resource_id.as_deref().unwrap_or(""))
    }
}

impl FromStr for Arn {
    type Err = ParseArnError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Arn {
    type Error = ParseArnError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

/// Assembles an [`Arn`] field by field.
///
/// Setters consume and return the builder. Unset fields stay absent, and the
/// partition defaults to [`Partition::Aws`]; [`ArnBuilder::build`] therefore
/// never fails. Obtained from [`Arn::builder`].
#[derive(Debug, Clone, Default)]
pub struct ArnBuilder {
    arn: Arn,
}

impl ArnBuilder {
    /// Sets the partition.
    #[inline]
    #[must_use]
    pub fn partition(mut self, partition: Partition) -> Self {
        self.arn.partition = partition;
        self
    }

    /// Sets the service namespace.
    #[inline]
    #[must_use]
    pub fn service(mut self, service: impl Into<String>) -> Self {
        self.arn.service = Some(service.into());
        self
    }

    /// Sets the region.
    #[inline]
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.arn.region = Some(region.into());
        self
    }

    /// Sets the account id.
    #[inline]
    #[must_use]
    pub fn account_id(mut self, account_id: impl Into<String>) -> Self {
        self.arn.account_id = Some(account_id.into());
        self
    }

    /// Sets the resource type.
    #[inline]
    #[must_use]
    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.arn.resource_type = Some(resource_type.into());
        self
    }

    /// Sets the resource id.
    #[inline]
    #[must_use]
    pub fn resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.arn.resource_id = Some(resource_id.into());
        self
    }

    /// Returns the assembled [`Arn`].
    #[inline]
    #[must_use]
    pub fn build(self) -> Arn {
        self.arn
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Unwrap is not an issue in test")]
mod tests {
    use alloc::string::ToString;

    use proptest::prelude::*;

    use crate::arb_partition;

    use super::*;

    fn arb_resource() -> impl Strategy<Value = (Option<String>, Option<String>)> {
        prop_oneof![
            proptest::option::of("[a-z0-9._-]{1,12}").prop_map(|id| (None, id)),
            ("[a-z0-9._-]{1,12}", proptest::option::of("[a-z0-9/:._-]{1,16}"))
                .prop_map(|(ty, id)| (Some(ty), id)),
        ]
    }

    prop_compose! {
        fn arb_arn()(
            partition in arb_partition(),
            service in proptest::option::of("[a-z0-9-]{1,12}"),
            region in proptest::option::of("[a-z0-9-]{1,12}"),
            account_id in proptest::option::of("[0-9]{1,12}"),
            (resource_type, resource_id) in arb_resource(),
        ) -> Arn {
            Arn {
                partition,
                service,
                region,
                account_id,
                resource_type,
                resource_id,
            }
        }
    }

    #[test]
    fn builder_populates_every_field() {
        let arn = Arn::builder()
            .partition(Partition::Aws)
            .service("iam")
            .region("us-west-2")
            .account_id("1234")
            .resource_type("user")
            .resource_id("julian")
            .build();

        assert_eq!(arn.partition(), Partition::Aws);
        assert_eq!(arn.service(), Some("iam"));
        assert_eq!(arn.region(), Some("us-west-2"));
        assert_eq!(arn.account_id(), Some("1234"));
        assert_eq!(arn.resource_type(), Some("user"));
        assert_eq!(arn.resource_id(), Some("julian"));
    }

    #[test]
    fn default_arn_is_all_absent_in_the_aws_partition() {
        let arn = Arn::default();

        assert_eq!(arn.partition(), Partition::Aws);
        assert_eq!(arn.service(), None);
        assert_eq!(arn.to_string(), "arn:aws::::");
        assert_eq!("arn:::::".parse::<Arn>().unwrap(), arn);
    }

    #[test]
    fn absent_fields_render_as_empty_segments() {
        let arn = Arn::builder()
            .partition(Partition::AwsCn)
            .service("s3")
            .resource_id("bucket")
            .build();

        assert_eq!(arn.to_string(), "arn:aws-cn:s3:::bucket");
    }

    #[test]
    fn resource_type_renders_with_a_slash_even_without_an_id() {
        let arn = Arn::builder().service("s3").resource_type("bucket").build();

        assert_eq!(arn.to_string(), "arn:aws:s3:::bucket/");
        assert_eq!(arn.to_string().parse::<Arn>().unwrap(), arn);
    }

    #[test]
    fn parse_keeps_later_delimiters_inside_the_resource_id() {
        let arn: Arn = "arn:aws:s3:::photos/2024/cat.jpg".parse().unwrap();

        assert_eq!(arn.resource_type(), Some("photos"));
        assert_eq!(arn.resource_id(), Some("2024/cat.jpg"));
    }

    #[test]
    fn unknown_partition_is_propagated_unchanged() {
        let error = "arn:azure:storage:::blob".parse::<Arn>().unwrap_err();

        assert_eq!(
            error,
            ParseArnError::Partition(UnknownPartition {
                value: "azure".into(),
            })
        );
    }

    #[test]
    fn malformed_input_is_propagated_unchanged() {
        let error = "arn:aws:iam".parse::<Arn>().unwrap_err();

        assert_eq!(
            error,
            ParseArnError::Format(InvalidArnFormat {
                input: "arn:aws:iam".into(),
            })
        );
    }

    #[cfg(feature = "macro")]
    #[test]
    fn arn_macro_matches_runtime_parsing() {
        let by_macro = crate::arn!("arn:aws-cn:s3:::bucket/key");
        let by_parse: Arn = "arn:aws-cn:s3:::bucket/key".parse().unwrap();

        assert_eq!(by_macro, by_parse);
    }

    proptest! {
        #[test]
        fn formatted_arn_parses_back(arn in arb_arn()) {
            let rendered = arn.to_string();
            prop_assert_eq!(rendered.parse::<Arn>().unwrap(), arn);
        }

        #[test]
        fn parsing_never_panics(input in "\\PC{0,40}") {
            drop(Arn::parse(&input));
        }
    }
}
