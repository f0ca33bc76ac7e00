//! # Amazon Resource Name (ARN) primitives for Rust
//!
//! Building blocks to parse, assemble and format **ARNs** of the shape
//! `arn:<partition>:<service>:<region>:<account-id>:<resource-id>`.
//! The crate provides:
//! - [`Arn`]: an immutable ARN value decomposed into its six fields, built
//!   either from a string or field by field through [`ArnBuilder`].
//! - [`Partition`]: the closed set of AWS partitions (`aws`, `aws-cn` and
//!   `aws-us-gov`), looked up by exact string value.
//! - [`ParseArnError`]: the parse failures, each carrying enough context to
//!   name the offending input.
//!
//! ## Overview
//! - **Decomposed parsing**: the grammar split lives in its own crate and
//!   yields borrowed segments; [`Arn::parse`] then resolves the partition and
//!   takes ownership of the rest.
//! - **Lenient segments**: any segment may be empty, and an empty partition
//!   falls back to [`Partition::Aws`].
//! - **Deterministic formatting**: a resource type is always rejoined to the
//!   id with `/`, regardless of which delimiter the input used.
//!
//! ## Examples
//! ### Parse an ARN
//! ```rust
//! use aws_arn::{Arn, Partition};
//!
//! let arn: Arn = "arn:aws:iam:us-west-2:1234:user/julian".parse()?;
//! assert_eq!(arn.partition(), Partition::Aws);
//! assert_eq!(arn.service(), Some("iam"));
//! assert_eq!(arn.resource_type(), Some("user"));
//! assert_eq!(arn.resource_id(), Some("julian"));
//! # Ok::<_, aws_arn::ParseArnError>(())
//! ```
//!
//! ### Assemble an ARN from parts
//! ```rust
//! use aws_arn::{Arn, Partition};
//!
//! let arn = Arn::builder()
//!     .partition(Partition::AwsCn)
//!     .service("s3")
//!     .resource_type("bucket")
//!     .resource_id("photos/cat.jpg")
//!     .build();
//! assert_eq!(arn.to_string(), "arn:aws-cn:s3:::bucket/photos/cat.jpg");
//! ```
//!
//! ### Absent fields
//! ```rust
//! use aws_arn::{Arn, Partition};
//!
//! let arn: Arn = "arn::s3:::bucket:key".parse()?;
//! assert_eq!(arn.partition(), Partition::Aws);
//! assert_eq!(arn.region(), None);
//! // The resource delimiter is normalized on output.
//! assert_eq!(arn.to_string(), "arn:aws:s3:::bucket/key");
//! # Ok::<_, aws_arn::ParseArnError>(())
//! ```
//!
//! ## Feature flags
//! - `std` *(default)*: `std` integration for the error types through
//!   `thiserror`.
//! - `serde`: `Serialize`/`Deserialize` for [`Arn`] and [`Partition`] as their
//!   canonical strings.
//! - `macro`: the `arn!` macro, which checks an ARN literal at compile time
//!   and expands to the equivalent builder calls.
//!
//! ## No-std?
//! Supported without `std` (disable default features). Allocation is still
//! required since parsed fields are owned strings.

#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

extern crate alloc;

mod arn;
mod partition;

pub use arn::{Arn, ArnBuilder, ParseArnError};
pub use partition::{Partition, UnknownPartition};

/// Grammar-level failure carried by [`ParseArnError::Format`].
pub use parsing::InvalidArnFormat;

#[cfg(feature = "serde")]
mod serde_impl;

#[cfg(feature = "macro")]
pub use arn_macro::arn;

#[cfg(test)]
pub(crate) use partition::test::arb_partition;
