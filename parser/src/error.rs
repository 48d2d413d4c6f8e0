use crate::Span;
use core::{
    fmt::{self, Display},
    ops::Range,
};

/// Result code of a parse that matched the complete input.
///
/// Failed parses map to the negative codes of [`ErrorKind::code`].
pub const RESULT_OK: i32 = 0;

/// Returns the numeric result code for the outcome of a parse.
///
/// # Examples
///
/// ```rust
/// use strict_semver_parser::{result_code, Context, RESULT_OK};
///
/// let mut context = Context::new("1.2.3");
/// assert_eq!(result_code(&context.parse()), RESULT_OK);
///
/// context.init("1.2.3-068");
/// assert_eq!(result_code(&context.parse()), -3);
/// ```
pub fn result_code<T>(result: &Result<T, Error<'_>>) -> i32 {
    match result {
        Ok(_) => RESULT_OK,
        Err(error) => error.code(),
    }
}

/// The reason why a version was rejected.
///
/// Exactly one kind is reported per parse: the first failure along the
/// left-to-right scan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input was empty.
    Empty,
    /// One of major, minor, or patch is missing, is not separated by a `.`,
    /// or has a leading zero.
    VersionMissing,
    /// A `-` was found, but the pre-release identifiers that follow are malformed.
    BadPreRelease,
    /// A `+` was found, but the build identifiers that follow are malformed.
    BadMetadata,
    /// The version is valid up to a point, but there is unrecognized input left.
    GarbageRemains,
}

impl ErrorKind {
    /// Returns the numeric result code for this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strict_semver_parser::ErrorKind;
    ///
    /// assert_eq!(ErrorKind::Empty.code(), -1);
    /// assert_eq!(ErrorKind::GarbageRemains.code(), -5);
    /// ```
    pub fn code(self) -> i32 {
        match self {
            ErrorKind::Empty => -1,
            ErrorKind::VersionMissing => -2,
            ErrorKind::BadPreRelease => -3,
            ErrorKind::BadMetadata => -4,
            ErrorKind::GarbageRemains => -5,
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Empty => f.pad("empty"),
            ErrorKind::VersionMissing => f.pad("version missing"),
            ErrorKind::BadPreRelease => f.pad("bad pre-release"),
            ErrorKind::BadMetadata => f.pad("bad metadata"),
            ErrorKind::GarbageRemains => f.pad("garbage remains"),
        }
    }
}

/// Possible errors that happen during parsing
/// and the location of the input where the error occurred.
///
/// # Example
///
/// ```rust
/// let error = strict_semver_parser::parse("1.2.3-068").unwrap_err();
/// assert_eq!(error.to_string(), "Could not parse the pre-release identifier: Unexpected `068`");
///
/// let error = strict_semver_parser::parse("1.2.3!").unwrap_err();
/// assert_eq!(error.to_string(), "Unexpected `!`");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Error<'input> {
    input: &'input str,
    span: Span,
    kind: ErrorKind,
}

impl<'input> Error<'input> {
    pub(crate) fn new(input: &'input str, span: Span, kind: ErrorKind) -> Self {
        Self { input, span, kind }
    }

    /// Creates a new [`OwnedError`] out of this [`Error`].
    ///
    /// This is specialized version of [`Clone`] which returns a different type.
    #[cfg(feature = "std")]
    #[inline]
    pub fn owned(&self) -> OwnedError {
        OwnedError {
            input: self.input.into(),
            span: self.span,
            kind: self.kind,
        }
    }

    /// Returns the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse("1.2").unwrap_err();
    /// assert_eq!(error.input(), "1.2");
    /// ```
    #[inline]
    pub fn input(&self) -> &'input str {
        self.input
    }

    /// Returns range into the input string that points to the erroneous input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse("52.068.123").unwrap_err();
    /// assert_eq!(error.error_span(), 3..6);
    /// ```
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.span.into()
    }

    /// Returns the kind of error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use strict_semver_parser::{parse, ErrorKind};
    ///
    /// assert_eq!(parse("").unwrap_err().error_kind(), ErrorKind::Empty);
    /// assert_eq!(parse("1.2").unwrap_err().error_kind(), ErrorKind::VersionMissing);
    /// assert_eq!(parse("1.2.3-01").unwrap_err().error_kind(), ErrorKind::BadPreRelease);
    /// assert_eq!(parse("1.2.3+").unwrap_err().error_kind(), ErrorKind::BadMetadata);
    /// assert_eq!(parse("1.2.3+a+b").unwrap_err().error_kind(), ErrorKind::GarbageRemains);
    /// ```
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the numeric result code, see [`ErrorKind::code`].
    #[inline]
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// Returns a slice from the original input line that triggered the error.
    ///
    /// The slice is empty if the input ended where more was expected.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse("1.2.3 abc").unwrap_err();
    /// assert_eq!(error.erroneous_input(), " abc");
    /// ```
    #[inline]
    pub fn erroneous_input(&self) -> &'input str {
        self.span.at(self.input)
    }

    /// Returns a text representation of the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse("1.").unwrap_err();
    /// assert_eq!(error.error_line(), String::from("Could not parse the version core: No input"));
    /// ```
    ///
    /// This is equivalent to the [`Display`] implementation.
    #[cfg(feature = "std")]
    pub fn error_line(&self) -> String {
        let mut line = String::new();
        let _ = self.write_line(&mut line);
        line
    }

    /// Returns a caret line indication the erroneous input if it was written under the original input line.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let error = strict_semver_parser::parse("foo").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "^");
    ///
    /// let error = strict_semver_parser::parse("1.2.3 bar").unwrap_err();
    /// assert_eq!(error.indicate_erroneous_input(), "~~~~~^^^^");
    /// ```
    #[cfg(feature = "std")]
    pub fn indicate_erroneous_input(&self) -> String {
        let mut line = String::new();
        let _ = self.write_indicator(&mut line);
        line
    }

    fn write_line<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let segment = match self.kind {
            ErrorKind::Empty => return w.write_str("Could not parse an empty version"),
            ErrorKind::GarbageRemains => {
                return write!(w, "Unexpected `{}`", self.erroneous_input());
            }
            ErrorKind::VersionMissing => "version core",
            ErrorKind::BadPreRelease => "pre-release identifier",
            ErrorKind::BadMetadata => "build identifier",
        };
        match self.erroneous_input() {
            "" => write!(w, "Could not parse the {}: No input", segment),
            erroneous => write!(w, "Could not parse the {}: Unexpected `{}`", segment, erroneous),
        }
    }

    // column widths are counted in chars so the carets line up under non-ascii input
    fn write_indicator<W: fmt::Write>(&self, w: &mut W) -> fmt::Result {
        let before = self.input.get(..self.span.start()).unwrap_or_default();
        for _ in before.chars() {
            w.write_char('~')?;
        }
        for _ in self.erroneous_input().chars() {
            w.write_char('^')?;
        }
        Ok(())
    }
}

impl Display for Error<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_line(f)?;
        if f.alternate() {
            writeln!(f)?;
            writeln!(f, "|    {}", self.input)?;
            f.write_str("|    ")?;
            self.write_indicator(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error<'_> {}

/// Owned version of [`Error`] which clones the input string.
#[cfg(feature = "std")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedError {
    input: String,
    span: Span,
    kind: ErrorKind,
}

#[cfg(feature = "std")]
impl OwnedError {
    /// Return a borrowed version of this error.
    pub fn borrowed(&self) -> Error<'_> {
        Error {
            input: &self.input,
            span: self.span,
            kind: self.kind,
        }
    }

    /// See [`Error::input`].
    #[inline]
    pub fn input(&self) -> &str {
        self.borrowed().input()
    }

    /// See [`Error::error_span`].
    #[inline]
    pub fn error_span(&self) -> Range<usize> {
        self.borrowed().error_span()
    }

    /// See [`Error::error_kind`].
    #[inline]
    pub fn error_kind(&self) -> ErrorKind {
        self.kind
    }

    /// See [`Error::code`].
    #[inline]
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// See [`Error::erroneous_input`].
    #[inline]
    pub fn erroneous_input(&self) -> &str {
        self.borrowed().erroneous_input()
    }

    /// See [`Error::error_line`].
    #[inline]
    pub fn error_line(&self) -> String {
        self.borrowed().error_line()
    }

    /// See [`Error::indicate_erroneous_input`].
    #[inline]
    pub fn indicate_erroneous_input(&self) -> String {
        self.borrowed().indicate_erroneous_input()
    }
}

#[cfg(feature = "std")]
impl Display for OwnedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.borrowed().fmt(f)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OwnedError {}
