//! Strict, allocation-free scanner for Semantic Version numbers.
//!
//! The scanner validates a string against the [Semantic Versioning 2.0.0](https://semver.org) grammar
//! in a single pass, extracts major, minor and patch, and locates the pre-release and build
//! metadata fields without copying them.
//!
//! It never allocates, never recurses and works on a small, reusable [`Context`].
//! Without the default `std` feature, the crate is `no_std`.
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

use core::ops::Range;

mod error;
mod scanner;

#[cfg(feature = "std")]
pub use error::OwnedError;
pub use error::{result_code, Error, ErrorKind, RESULT_OK};
pub use scanner::Context;
pub use strict_semver_version_builder::{Identifier, VersionBuilder};

/// Parse a string slice into a [`Version`].
///
/// The input must be a complete semantic version, without any surrounding whitespace
/// or a leading `v`.
///
/// ## Examples
///
/// ```rust
/// use strict_semver_parser::{parse, ErrorKind, Version};
///
/// let version = parse("1.2.3");
/// assert_eq!(version, Ok(Version::new(1, 2, 3)));
///
/// let version = parse("3.4.5-a.1-meh.2+20160404").unwrap();
/// assert_eq!(version.pre_release, Some("a.1-meh.2"));
/// assert_eq!(version.build, Some("20160404"));
///
/// assert_eq!(parse("1.2").unwrap_err().error_kind(), ErrorKind::VersionMissing);
/// assert_eq!(parse("1.2.3-068").unwrap_err().error_kind(), ErrorKind::BadPreRelease);
/// ```
pub fn parse(input: &str) -> Result<Version<'_>, Error<'_>> {
    parse_into::<Version<'_>>(input)
}

/// Parse a string slice into any [`VersionBuilder`].
///
/// ## Examples
///
/// ```rust
/// use strict_semver_parser::VersionBuilder;
///
/// struct IsPreRelease(bool);
///
/// impl<'input> VersionBuilder<'input> for IsPreRelease {
///     type Out = bool;
///
///     fn new() -> Self {
///        IsPreRelease(false)
///     }
///
///     fn set_pre_release(&mut self, _input: &'input str) {
///         self.0 = true;
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// fn is_pre_release(v: &str) -> bool {
///     strict_semver_parser::parse_into::<IsPreRelease>(v).unwrap_or_default()
/// }
///
/// assert!(is_pre_release("1.2.3-pre"));
/// assert!(!is_pre_release("1.2.3"));
/// assert!(!is_pre_release("1.2.3+build"));
/// assert!(!is_pre_release("1.2.3-01"));
/// ```
pub fn parse_into<'input, V>(input: &'input str) -> Result<V::Out, Error<'input>>
where
    V: VersionBuilder<'input>,
{
    let mut context = Context::new(input);
    context.parse()?;
    Ok(context.build_into::<V>())
}

/// A byte range into the input of a parse.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Creates a new span from `start` (inclusive) to `end` (exclusive).
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The byte offset where the span starts.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// The byte offset right after the span.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    ///
    /// A span that ends before it starts has a length of zero.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no input.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the part of `input` covered by this span.
    ///
    /// Returns an empty string if the span does not fit into `input`.
    pub fn at<'input>(&self, input: &'input str) -> &'input str {
        input.get(self.start..self.end).unwrap_or_default()
    }
}

impl From<Span> for Range<usize> {
    fn from(s: Span) -> Self {
        s.start..s.end
    }
}

/// Iterator over the dot-separated identifiers of a pre-release or build field.
///
/// The iterator works on a field that was accepted by [`Context::parse`] and does not
/// validate it again.
///
/// ## Examples
///
/// ```rust
/// use strict_semver_parser::{Identifier, Identifiers};
///
/// let mut identifiers = Identifiers::new("a.1-meh.2");
/// assert_eq!(identifiers.next(), Some(Identifier::AlphaNumeric("a")));
/// assert_eq!(identifiers.next(), Some(Identifier::AlphaNumeric("1-meh")));
/// assert_eq!(identifiers.next(), Some(Identifier::Numeric(2)));
/// assert_eq!(identifiers.next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Identifiers<'input> {
    inner: Option<core::str::Split<'input, char>>,
}

impl<'input> Identifiers<'input> {
    /// Creates an iterator over the identifiers of `field`.
    ///
    /// An empty field has no identifiers.
    pub fn new(field: &'input str) -> Self {
        let inner = if field.is_empty() {
            None
        } else {
            Some(field.split('.'))
        };
        Identifiers { inner }
    }
}

impl<'input> Iterator for Identifiers<'input> {
    type Item = Identifier<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next().map(Identifier::from)
    }
}

/// Represents a parsed semantic version.
///
/// The version is bound to the lifetime of the input string and
/// borrows its pre-release and build fields from there.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Version<'input> {
    /// The major version.
    pub major: u64,
    /// The minor version.
    pub minor: u64,
    /// The patch version.
    pub patch: u64,
    /// The pre-release field, without the leading `-`.
    pub pre_release: Option<&'input str>,
    /// The build metadata field, without the leading `+`.
    pub build: Option<&'input str>,
}

impl<'input> Version<'input> {
    /// Constructs a new version without pre-release or build metadata.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use strict_semver_parser::Version;
    /// let version = Version::new(1, 2, 3);
    /// assert_eq!(version.major, 1);
    /// assert!(!version.is_pre_release());
    /// ```
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: None,
            build: None,
        }
    }

    /// Returns `true` if this version has a pre-release field.
    pub fn is_pre_release(&self) -> bool {
        self.pre_release.is_some()
    }

    /// Returns the identifiers of the pre-release field.
    pub fn pre_release_identifiers(&self) -> Identifiers<'input> {
        Identifiers::new(self.pre_release.unwrap_or_default())
    }

    /// Returns the identifiers of the build metadata field.
    pub fn build_identifiers(&self) -> Identifiers<'input> {
        Identifiers::new(self.build.unwrap_or_default())
    }
}

impl<'input> VersionBuilder<'input> for Version<'input> {
    type Out = Self;

    fn new() -> Self {
        Version::new(0, 0, 0)
    }

    fn set_major(&mut self, major: u64) {
        self.major = major;
    }

    fn set_minor(&mut self, minor: u64) {
        self.minor = minor;
    }

    fn set_patch(&mut self, patch: u64) {
        self.patch = patch;
    }

    fn set_pre_release(&mut self, pre_release: &'input str) {
        self.pre_release = Some(pre_release);
    }

    fn set_build(&mut self, build: &'input str) {
        self.build = Some(build);
    }

    fn build(self) -> Self::Out {
        self
    }
}
