use crate::{Error, ErrorKind, Identifiers, Span, Version, VersionBuilder};

/// Parsing context for a single version string.
///
/// The context borrows the input and holds nothing but a few offsets and numbers,
/// so it lives on the stack and can be reused for any number of parses.
/// Every call to [`Context::parse`] starts over from the beginning of the input.
///
/// The accessors for major, minor, patch, pre-release and build metadata
/// are only meaningful after [`Context::parse`] returned `Ok`.
/// After a failed parse they hold whatever was recognized before the failure.
///
/// ## Examples
///
/// ```rust
/// use strict_semver_parser::Context;
///
/// let mut context = Context::new("3.4.5-a.1-meh.2+20160404");
/// assert!(context.parse().is_ok());
/// assert_eq!((context.major(), context.minor(), context.patch()), (3, 4, 5));
/// assert_eq!(context.pre_release(), Some("a.1-meh.2"));
/// assert_eq!(context.metadata(), Some("20160404"));
///
/// context.init("1.2.3-068");
/// assert!(context.parse().is_err());
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Context<'input> {
    source: &'input str,
    cursor: usize,
    saved_cursor: Option<usize>,
    major: u64,
    minor: u64,
    patch: u64,
    has_pre_release: bool,
    pre_release: Span,
    has_metadata: bool,
    metadata: Span,
}

impl<'input> Context<'input> {
    /// Creates a context bound to the given input.
    pub fn new(input: &'input str) -> Self {
        Context {
            source: input,
            cursor: 0,
            saved_cursor: None,
            major: 0,
            minor: 0,
            patch: 0,
            has_pre_release: false,
            pre_release: Span::default(),
            has_metadata: false,
            metadata: Span::default(),
        }
    }

    /// Binds this context to a new input and clears all state.
    pub fn init(&mut self, input: &'input str) {
        *self = Self::new(input);
    }

    /// Releases the context.
    ///
    /// The context owns no resources, this only ends its use.
    pub fn release(self) {}

    /// Parses the input as a semantic version.
    ///
    /// The input is matched in a single pass from left to right,
    /// the first failure along the way determines the [`ErrorKind`].
    /// Calling this method again on the same input yields the same result.
    pub fn parse(&mut self) -> Result<(), Error<'input>> {
        self.reset();
        let result = self.scan();
        #[cfg(feature = "tracing")]
        self.trace_verdict(&result);
        result
    }

    /// Feeds the parsed components into a [`VersionBuilder`].
    ///
    /// The pre-release and build fields are passed both as a whole and
    /// split into their identifiers.
    /// Only meaningful after a successful [`Context::parse`].
    pub fn build_into<V>(&self) -> V::Out
    where
        V: VersionBuilder<'input>,
    {
        let mut builder = V::new();
        builder.set_major(self.major);
        builder.set_minor(self.minor);
        builder.set_patch(self.patch);
        if let Some(pre_release) = self.pre_release() {
            builder.set_pre_release(pre_release);
            for identifier in Identifiers::new(pre_release) {
                builder.add_pre_release(identifier);
            }
        }
        if let Some(metadata) = self.metadata() {
            builder.set_build(metadata);
            for identifier in Identifiers::new(metadata) {
                builder.add_build(identifier);
            }
        }
        builder.build()
    }

    /// Returns a snapshot of the parsed components.
    ///
    /// Only meaningful after a successful [`Context::parse`].
    pub fn version(&self) -> Version<'input> {
        Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release(),
            build: self.metadata(),
        }
    }

    /// The input this context is bound to.
    #[inline]
    pub fn source(&self) -> &'input str {
        self.source
    }

    /// The current scan position, as byte offset into [`Context::source`].
    ///
    /// After a parse, this is where the scan stopped.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The major version.
    #[inline]
    pub fn major(&self) -> u64 {
        self.major
    }

    /// The minor version.
    #[inline]
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// The patch version.
    #[inline]
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Whether a `-` introduced a pre-release field.
    #[inline]
    pub fn has_pre_release(&self) -> bool {
        self.has_pre_release
    }

    /// Location of the pre-release field, without the leading `-`.
    #[inline]
    pub fn pre_release_span(&self) -> Span {
        self.pre_release
    }

    /// The pre-release field, without the leading `-`.
    pub fn pre_release(&self) -> Option<&'input str> {
        if self.has_pre_release {
            Some(self.pre_release.at(self.source))
        } else {
            None
        }
    }

    /// Whether a `+` introduced a build metadata field.
    #[inline]
    pub fn has_metadata(&self) -> bool {
        self.has_metadata
    }

    /// Location of the build metadata field, without the leading `+`.
    #[inline]
    pub fn metadata_span(&self) -> Span {
        self.metadata
    }

    /// The build metadata field, without the leading `+`.
    pub fn metadata(&self) -> Option<&'input str> {
        if self.has_metadata {
            Some(self.metadata.at(self.source))
        } else {
            None
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.source);
    }

    fn scan(&mut self) -> Result<(), Error<'input>> {
        if !self.has_more() {
            return Err(Error::new(self.source, Span::new(0, 0), ErrorKind::Empty));
        }

        self.major = self.version_number()?;
        self.version_separator()?;
        self.minor = self.version_number()?;
        self.version_separator()?;
        self.patch = self.version_number()?;

        if self.expect(b'-') {
            self.has_pre_release = true;
            self.pre_release = Span::new(self.cursor, self.cursor);
            self.pre_release = self.identifiers(ErrorKind::BadPreRelease)?;
        }

        if self.expect(b'+') {
            self.has_metadata = true;
            self.metadata = Span::new(self.cursor, self.cursor);
            self.metadata = self.identifiers(ErrorKind::BadMetadata)?;
        }

        // this includes a second `+` field
        if self.has_more() {
            let garbage = Span::new(self.cursor, self.source.len());
            return Err(Error::new(self.source, garbage, ErrorKind::GarbageRemains));
        }

        Ok(())
    }

    fn version_number(&mut self) -> Result<u64, Error<'input>> {
        let start = self.cursor;
        let number = self.numeric_identifier();
        number.ok_or_else(|| self.failure(ErrorKind::VersionMissing, start))
    }

    fn version_separator(&mut self) -> Result<(), Error<'input>> {
        if self.expect(b'.') {
            Ok(())
        } else {
            Err(self.failure(ErrorKind::VersionMissing, self.cursor))
        }
    }

    /// Matches `identifier ('.' identifier)*`, returning the span of the whole list.
    ///
    /// Every identifier is first tried as a number. If that fails, or the number is
    /// directly followed by a `-` (as in `1-meh`), the cursor goes back to the start
    /// of the identifier and it is matched as an alphanumeric identifier instead.
    fn identifiers(&mut self, kind: ErrorKind) -> Result<Span, Error<'input>> {
        let start = self.cursor;
        loop {
            self.save();
            let numeric = self.numeric_identifier().is_some() && self.peek() != Some(b'-');
            if !numeric {
                self.restore();
                let identifier_start = self.cursor;
                if !self.alphanumeric_identifier() || self.cursor == identifier_start {
                    return Err(self.failure(kind, identifier_start));
                }
            }
            if !self.expect(b'.') {
                break;
            }
        }
        Ok(Span::new(start, self.cursor))
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.cursor).copied()
    }

    #[inline]
    fn has_more(&self) -> bool {
        self.cursor < self.source.len()
    }

    fn expect(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Consumes a run of digits.
    ///
    /// Fails without moving if there is no digit. Otherwise the whole run is consumed,
    /// but the match still fails on a leading zero or if the value overflows an `u64`.
    fn numeric_identifier(&mut self) -> Option<u64> {
        let start = self.cursor;
        let leading_zero = self.peek() == Some(b'0');
        let mut value = Some(0_u64);
        while let Some(digit @ b'0'..=b'9') = self.peek() {
            value = value
                .and_then(|v| v.checked_mul(10))
                .and_then(|v| v.checked_add(u64::from(digit - b'0')));
            self.cursor += 1;
        }
        match self.cursor - start {
            0 => None,
            1 => value,
            _ if leading_zero => None,
            _ => value,
        }
    }

    /// Consumes a run of `[0-9A-Za-z-]`, which may be empty.
    ///
    /// Any run longer than one character that starts with `0` is rejected,
    /// even if it contains letters.
    fn alphanumeric_identifier(&mut self) -> bool {
        let start = self.cursor;
        let leading_zero = self.peek() == Some(b'0');
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric() || b == b'-') {
            self.cursor += 1;
        }
        !(leading_zero && self.cursor - start > 1)
    }

    #[inline]
    fn save(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    #[inline]
    fn restore(&mut self) {
        if let Some(saved) = self.saved_cursor {
            self.cursor = saved;
        }
    }

    /// Error pointing at the input consumed since `start`,
    /// or at the next character if nothing was consumed.
    fn failure(&self, kind: ErrorKind, start: usize) -> Error<'input> {
        let end = if self.cursor > start {
            self.cursor
        } else {
            self.source
                .get(self.cursor..)
                .and_then(|rest| rest.chars().next())
                .map_or(self.cursor, |c| self.cursor + c.len_utf8())
        };
        Error::new(self.source, Span::new(start, end), kind)
    }

    #[cfg(feature = "tracing")]
    fn trace_verdict(&self, result: &Result<(), Error<'input>>) {
        match result {
            Ok(()) => tracing::trace!(
                input = self.source,
                major = self.major,
                minor = self.minor,
                patch = self.patch,
                pre_release = self.has_pre_release,
                metadata = self.has_metadata,
                "accepted version"
            ),
            Err(error) => tracing::trace!(
                input = self.source,
                kind = %error.error_kind(),
                span = ?error.error_span(),
                "rejected version"
            ),
        }
    }
}
