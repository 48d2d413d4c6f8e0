//! Strict, allocation-free validation of Semantic Version numbers.
//!
//! ## Motivation
//!
//! This crate checks version strings against the [Semantic Versioning 2.0.0](https://semver.org)
//! grammar and extracts their components, targeting environments where allocations are
//! not an option or simply not worth it.
//!
//! - The input is scanned once, from left to right, without recursion
//! - Nothing is allocated, pre-release and build fields are returned as slices of the input
//! - All state lives in a small [`Context`] that can be reused for many inputs
//! - Rejections report one of a few [`ErrorKind`]s and the offending part of the input
//! - Without the default `std` feature, the crate is `no_std`
//!
//! ## Examples
//!
//! ```rust
//! use strict_semver::{parse, ErrorKind, Version};
//!
//! let version = parse("1.2.3");
//! assert_eq!(version, Ok(Version::new(1, 2, 3)));
//!
//! // `1-meh` is a single identifier, not the number 1 followed by a hyphen
//! let version = parse("3.4.5-a.1-meh.2+20160404").unwrap();
//! assert_eq!(version.pre_release, Some("a.1-meh.2"));
//! assert_eq!(version.build, Some("20160404"));
//!
//! // leading zeroes are rejected
//! assert_eq!(parse("1.02.3").unwrap_err().error_kind(), ErrorKind::VersionMissing);
//! assert_eq!(parse("1.2.3-068").unwrap_err().error_kind(), ErrorKind::BadPreRelease);
//!
//! // there can only be one build field
//! assert_eq!(parse("2.3.4+abcdef.16.5+meh").unwrap_err().error_kind(), ErrorKind::GarbageRemains);
//! ```
//!
//! A [`Context`] keeps the scanning state and can be reused without any allocation:
//!
//! ```rust
//! use strict_semver::Context;
//!
//! let mut context = Context::new("1.2.3-rc.1");
//! assert!(context.parse().is_ok());
//! assert_eq!(context.pre_release(), Some("rc.1"));
//!
//! for input in &["0.0.0", "10.20.30+build"] {
//!     context.init(input);
//!     assert!(context.parse().is_ok());
//! }
//! context.release();
//! ```
//!
//! Errors render with the erroneous input marked:
//!
//! ```rust
//! let error = strict_semver::parse("1.2.3-068").unwrap_err();
//! assert_eq!(
//!     format!("{:#}", error),
//!     "Could not parse the pre-release identifier: Unexpected `068`
//! |    1.2.3-068
//! |    ~~~~~~^^^
//! "
//! );
//! ```
//!
//! ## Custom versions
//!
//! Any type implementing [`VersionBuilder`] can be the target of [`parse_into`].
//! With the `semver` feature, this includes [`semver::Version`](https://docs.rs/semver).
//!
//! ```rust
//! # #[derive(Debug, Default)]
//! # struct Numbers([u64; 3]);
//! use strict_semver::VersionBuilder;
//!
//! impl VersionBuilder<'_> for Numbers {
//!     type Out = [u64; 3];
//!
//!     fn new() -> Self {
//!         Self::default()
//!     }
//!
//!     fn set_major(&mut self, major: u64) {
//!         self.0[0] = major;
//!     }
//!
//!     fn set_minor(&mut self, minor: u64) {
//!         self.0[1] = minor;
//!     }
//!
//!     fn set_patch(&mut self, patch: u64) {
//!         self.0[2] = patch;
//!     }
//!
//!     fn build(self) -> Self::Out {
//!         self.0
//!     }
//! }
//!
//! assert_eq!(strict_semver::parse_into::<Numbers>("1.3.7-alpha21+build.42"), Ok([1, 3, 7]));
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    unused_results,
    unused,
    while_true
)]

#[cfg(feature = "std")]
pub use strict_semver_parser::OwnedError;
pub use strict_semver_parser::{
    parse, parse_into, result_code, Context, Error, ErrorKind, Identifier, Identifiers, Span,
    Version, VersionBuilder, RESULT_OK,
};

#[cfg(test)]
mod tests;
