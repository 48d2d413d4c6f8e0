//! VersionBuilder trait for the strict scanner of Semantic Version numbers.
#![cfg_attr(not(any(test, feature = "semver")), no_std)]
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

/// A single identifier of a pre-release or build field.
///
/// This is a borrowed view into the input and never allocates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Identifier<'input> {
    /// An identifier that's solely digits, without leading zero, fitting into an `u64`.
    Numeric(u64),
    /// Any other identifier, including numbers that overflow an `u64`.
    AlphaNumeric(&'input str),
}

impl<'input> Identifier<'input> {
    /// Returns the numeric value if this is a numeric identifier.
    ///
    /// ## Examples
    ///
    /// ```
    /// # use strict_semver_version_builder::Identifier;
    /// assert_eq!(Identifier::from("42").as_numeric(), Some(42));
    /// assert_eq!(Identifier::from("rc1").as_numeric(), None);
    /// ```
    pub fn as_numeric(&self) -> Option<u64> {
        match self {
            Identifier::Numeric(num) => Some(*num),
            Identifier::AlphaNumeric(_) => None,
        }
    }

    /// Returns `true` if this is a numeric identifier.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }
}

impl<'input> From<&'input str> for Identifier<'input> {
    fn from(identifier: &'input str) -> Self {
        let bytes = identifier.as_bytes();
        let leading_zero = bytes.len() > 1 && bytes[0] == b'0';
        if bytes.is_empty() || leading_zero || !bytes.iter().all(u8::is_ascii_digit) {
            return Identifier::AlphaNumeric(identifier);
        }
        // overflowing numbers stay opaque
        identifier
            .parse::<u64>()
            .map_or(Identifier::AlphaNumeric(identifier), Identifier::Numeric)
    }
}

/// Trait to abstract over version building.
///
/// The methods to implement in this trait represent the components of a
/// semantic version, but allow for parsing into a custom type.
///
/// The trait is generic over the lifetime of the input string, so that one could
/// parse into a version without having to allocate.
///
/// All methods but [`VersionBuilder::new`] and [`VersionBuilder::build`] have a default
/// implementation that does nothing and ignores the input.
/// This can be used to implement some form of validation without needing to keep the result.
///
/// A builder is only ever driven from a successful parse, so every value it
/// receives is already validated.
///
/// ## Example
///
/// ```rust
/// # use strict_semver_version_builder::{Identifier, VersionBuilder};
/// #[derive(Debug, Default)]
/// struct NumericPreReleases(usize);
///
/// impl<'input> VersionBuilder<'input> for NumericPreReleases {
///     type Out = usize;
///
///     fn new() -> Self {
///         Self::default()
///     }
///
///     fn add_pre_release(&mut self, identifier: Identifier<'input>) {
///         if identifier.is_numeric() {
///             self.0 += 1;
///         }
///     }
///
///     fn build(self) -> Self::Out {
///         self.0
///     }
/// }
///
/// let mut builder = NumericPreReleases::new();
/// builder.add_pre_release(Identifier::from("alpha"));
/// builder.add_pre_release(Identifier::from("1"));
/// assert_eq!(builder.build(), 1);
/// ```
pub trait VersionBuilder<'input> {
    /// The return type of the final version.
    type Out;

    /// Construct a new version builder.
    ///
    /// The function must not fail and the version (if returned from [`VersionBuilder::build`] at this point)
    /// should represent something akin to "0.0.0"
    fn new() -> Self;

    /// Set the major version component.
    #[allow(unused)]
    fn set_major(&mut self, major: u64) {}

    /// Set the minor version component.
    #[allow(unused)]
    fn set_minor(&mut self, minor: u64) {}

    /// Set the patch version component.
    #[allow(unused)]
    fn set_patch(&mut self, patch: u64) {}

    /// Set the complete pre-release field, without the leading `-`.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    /// If it is called, it is called before any [`VersionBuilder::add_pre_release`].
    #[allow(unused)]
    fn set_pre_release(&mut self, pre_release: &'input str) {}

    /// Add a single pre-release identifier.
    ///
    /// This method is called once for every dot-separated identifier
    /// of the pre-release field, in order.
    #[allow(unused)]
    fn add_pre_release(&mut self, identifier: Identifier<'input>) {}

    /// Set the complete build field, without the leading `+`.
    ///
    /// This component is optional and might not be called
    /// before [`VersionBuilder::build`].
    /// If it is called, it is called before any [`VersionBuilder::add_build`].
    #[allow(unused)]
    fn set_build(&mut self, build: &'input str) {}

    /// Add a single build identifier.
    ///
    /// This method is called once for every dot-separated identifier
    /// of the build field, in order.
    #[allow(unused)]
    fn add_build(&mut self, identifier: Identifier<'input>) {}

    /// Construct the final version.
    fn build(self) -> Self::Out;
}

/// Every field accepted by the scanner is also a valid [`semver::Prerelease`]
/// or [`semver::BuildMetadata`], so the conversions below cannot be rejected.
#[cfg(any(test, feature = "semver"))]
impl<'input> VersionBuilder<'input> for semver::Version {
    type Out = Self;

    fn new() -> Self {
        semver::Version::new(0, 0, 0)
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
        let pre = semver::Prerelease::new(pre_release);
        debug_assert!(pre.is_ok(), "invalid pre-release field `{}`", pre_release);
        if let Ok(pre) = pre {
            self.pre = pre;
        }
    }

    fn set_build(&mut self, build: &'input str) {
        let metadata = semver::BuildMetadata::new(build);
        debug_assert!(metadata.is_ok(), "invalid build field `{}`", build);
        if let Ok(metadata) = metadata {
            self.build = metadata;
        }
    }

    fn build(self) -> Self::Out {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0" => Identifier::Numeric(0); "zero")]
    #[test_case("42" => Identifier::Numeric(42); "number")]
    #[test_case("18446744073709551615" => Identifier::Numeric(u64::MAX); "max number")]
    #[test_case("18446744073709551616" => Identifier::AlphaNumeric("18446744073709551616"); "overflowing number")]
    #[test_case("007" => Identifier::AlphaNumeric("007"); "leading zero")]
    #[test_case("rc1" => Identifier::AlphaNumeric("rc1"); "alphanumeric")]
    #[test_case("1-meh" => Identifier::AlphaNumeric("1-meh"); "number with hyphen")]
    #[test_case("" => Identifier::AlphaNumeric(""); "empty")]
    fn test_identifier_from_str(input: &str) -> Identifier<'_> {
        Identifier::from(input)
    }

    #[test]
    fn test_identifier_accessors() {
        assert_eq!(Identifier::Numeric(7).as_numeric(), Some(7));
        assert!(Identifier::Numeric(7).is_numeric());
        assert_eq!(Identifier::AlphaNumeric("x").as_numeric(), None);
        assert!(!Identifier::AlphaNumeric("x").is_numeric());
    }

    #[test]
    fn test_semver_builder() {
        let mut version = <semver::Version as VersionBuilder<'_>>::new();
        version.set_major(3);
        version.set_minor(4);
        version.set_patch(5);
        version.set_pre_release("a.1-meh.2");
        version.set_build("20160404");
        assert_eq!(
            version.build(),
            semver::Version::parse("3.4.5-a.1-meh.2+20160404").unwrap()
        );
    }

    #[test]
    fn test_semver_builder_keeps_long_numbers() {
        let mut version = <semver::Version as VersionBuilder<'_>>::new();
        version.set_major(1);
        version.set_pre_release("98765432109876543210987654321");
        assert_eq!(version.pre.as_str(), "98765432109876543210987654321");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid pre-release field `a..b`")]
    fn test_semver_builder_rejects_invalid_pre_release() {
        let mut version = <semver::Version as VersionBuilder<'_>>::new();
        version.set_pre_release("a..b");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid build field `a+b`")]
    fn test_semver_builder_rejects_invalid_build() {
        let mut version = <semver::Version as VersionBuilder<'_>>::new();
        version.set_build("a+b");
    }

    #[test]
    fn test_default_methods_are_noops() {
        struct Count(u8);

        impl VersionBuilder<'_> for Count {
            type Out = u8;

            fn new() -> Self {
                Count(0)
            }

            fn build(self) -> Self::Out {
                self.0
            }
        }

        let mut count = Count::new();
        count.set_major(1);
        count.set_pre_release("alpha");
        count.add_pre_release(Identifier::AlphaNumeric("alpha"));
        count.set_build("b");
        count.add_build(Identifier::AlphaNumeric("b"));
        assert_eq!(count.build(), 0);
    }
}
