mod custom_test {
    use crate::{Identifier, VersionBuilder};

    /// Simpler version struct that lives only on the stack
    #[derive(Debug, Default)]
    struct MyVersion {
        numbers: [u64; 3],
        numeric_pre_releases: usize,
        has_build: bool,
    }

    /// The VersionBuilder trait is generic over the lifetime of the input string.
    /// We don't store references to those strings, so we don't care about the specific lifetime.
    impl VersionBuilder<'_> for MyVersion {
        /// We will modify the target struct directly
        type Out = Self;

        /// Construct a new builder instance.
        fn new() -> Self {
            Self::default()
        }

        /// Construct the final result. In this case, we can just return ourselves.
        fn build(self) -> Self::Out {
            self
        }

        fn set_major(&mut self, major: u64) {
            self.numbers[0] = major;
        }

        fn set_minor(&mut self, minor: u64) {
            self.numbers[1] = minor;
        }

        fn set_patch(&mut self, patch: u64) {
            self.numbers[2] = patch;
        }

        /// Called once per pre-release identifier, already classified.
        fn add_pre_release(&mut self, identifier: Identifier<'_>) {
            if identifier.is_numeric() {
                self.numeric_pre_releases += 1;
            }
        }

        /// Called with the whole build field.
        fn set_build(&mut self, _build: &str) {
            self.has_build = true;
        }
    }

    #[test]
    fn test_custom_version_builder() {
        let input = "1.3.7-alpha.21.x.4+build.42";

        let my_version = crate::parse_into::<MyVersion>(input).unwrap();

        assert_eq!([1, 3, 7], my_version.numbers);
        assert_eq!(2, my_version.numeric_pre_releases);
        assert!(my_version.has_build);
    }
}

mod stability_test {
    use crate::{Identifier, VersionBuilder};
    use test_case::test_case;

    #[derive(Debug, PartialEq, Eq)]
    enum Stability {
        /// 0.y.z, anything may change
        Initial,
        /// `numbered` if the last pre-release identifier is a number, as in `rc.2`
        PreRelease { numbered: bool },
        Stable,
    }

    /// Answers a question about the version without keeping any of it
    #[derive(Debug, Default)]
    struct StabilityCheck {
        major: u64,
        last_pre_release_is_numeric: Option<bool>,
    }

    impl VersionBuilder<'_> for StabilityCheck {
        type Out = Stability;

        fn new() -> Self {
            Self::default()
        }

        fn set_major(&mut self, major: u64) {
            self.major = major;
        }

        fn add_pre_release(&mut self, identifier: Identifier<'_>) {
            self.last_pre_release_is_numeric = Some(identifier.is_numeric());
        }

        fn build(self) -> Self::Out {
            match (self.last_pre_release_is_numeric, self.major) {
                (Some(numbered), _) => Stability::PreRelease { numbered },
                (None, 0) => Stability::Initial,
                (None, _) => Stability::Stable,
            }
        }
    }

    fn stability(v: &str) -> Option<Stability> {
        crate::parse_into::<StabilityCheck>(v).ok()
    }

    #[test_case("1.2.3" => Some(Stability::Stable); "release")]
    #[test_case("1.2.3+build.7" => Some(Stability::Stable); "release with build")]
    #[test_case("0.9.1" => Some(Stability::Initial); "initial development")]
    #[test_case("1.0.0-rc.2" => Some(Stability::PreRelease { numbered: true }); "numbered")]
    #[test_case("0.1.0-alpha.1+build.7" => Some(Stability::PreRelease { numbered: true }); "numbered initial")]
    #[test_case("1.0.0-beta" => Some(Stability::PreRelease { numbered: false }); "named")]
    #[test_case("1.0.0-2.beta" => Some(Stability::PreRelease { numbered: false }); "number first")]
    #[test_case("1.0.0-rc.1-meh" => Some(Stability::PreRelease { numbered: false }); "number with hyphen")]
    #[test_case("2.0.0-99999999999999999999999" => Some(Stability::PreRelease { numbered: false }); "overflowing number")]
    #[test_case("1.2.3-068" => None; "invalid")]
    fn test_stability(input: &str) -> Option<Stability> {
        stability(input)
    }
}

mod semver_test {
    use semver::Version;
    use test_case::test_case;

    #[test_case("0.0.0"; "zeroes")]
    #[test_case("1.2.3"; "plain")]
    #[test_case("10.20.30"; "multi digit")]
    #[test_case("1.2.3-15"; "numeric pre release")]
    #[test_case("1.2.3-a.1.b.c-df.15"; "mixed pre release")]
    #[test_case("3.4.5-a.1-meh.2+20160404"; "ambiguous pre release")]
    #[test_case("2.3.4+abcdef.16.5"; "build")]
    #[test_case("1.0.0-alpha.beta"; "alpha beta")]
    #[test_case("1.0.0-x.7.z.92"; "semver example")]
    #[test_case("1.0.0-x-y-z.--"; "hyphens")]
    #[test_case("1.0.0-beta+exp.sha.f5114"; "semver build example")]
    #[test_case("1.2.3-98765432109876543210987654321"; "huge number")]
    #[test_case("18446744073709551615.0.0"; "max major")]
    fn test_agrees_with_semver(input: &str) {
        let parsed = crate::parse_into::<Version>(input).unwrap();
        assert_eq!(parsed, Version::parse(input).unwrap());
        assert_eq!(parsed.to_string(), input);
    }

    #[test_case(""; "empty")]
    #[test_case("1.2"; "missing patch")]
    #[test_case("01.2.3"; "leading zero")]
    #[test_case("1.2.3-01"; "leading zero pre release")]
    #[test_case("1.2.3-"; "empty pre release")]
    #[test_case("1.2.3-a..b"; "empty identifier")]
    #[test_case("1.2.3+"; "empty build")]
    #[test_case("1.2.3+a+b"; "second build")]
    #[test_case("1.2.3 "; "trailing whitespace")]
    #[test_case("v1.2.3"; "leading v")]
    fn test_both_reject(input: &str) {
        assert!(crate::parse(input).is_err());
        assert!(Version::parse(input).is_err());
    }
}

mod property_test {
    use crate::{parse, Context, ErrorKind};

    #[test]
    fn test_leading_zero_by_digit_count() {
        for run in &["0", "1", "9", "10", "100", "00", "01", "007", "0000"] {
            let rejected = run.len() > 1 && run.starts_with('0');
            for input in &[
                format!("{}.0.0", run),
                format!("0.{}.0", run),
                format!("0.0.{}", run),
            ] {
                let result = parse(input).map_err(|e| e.error_kind());
                if rejected {
                    assert_eq!(result, Err(ErrorKind::VersionMissing), "{}", input);
                } else {
                    assert!(result.is_ok(), "{}", input);
                }
            }
        }
    }

    #[test]
    fn test_reparse_yields_identical_results() {
        let inputs = [
            "1.2.3",
            "3.4.5-a.1-meh.2+20160404",
            "2.3.4+abcdef.16.5",
            "1.2.3-068",
            "2.3.4+abcdef.16.5+meh",
            "",
        ];
        let mut context = Context::new("");
        for input in &inputs {
            context.init(input);
            let first = context.parse();
            let first_version = context.version();
            let first_spans = (context.pre_release_span(), context.metadata_span());
            for _ in 0..3 {
                assert_eq!(context.parse(), first);
                assert_eq!(context.version(), first_version);
                assert_eq!(
                    (context.pre_release_span(), context.metadata_span()),
                    first_spans
                );
            }
        }
    }

    #[test]
    fn test_every_prefix_has_a_verdict() {
        let input = "12.34.56-alpha.1-meh.0+build.7.x";
        let mut context = Context::new(input);
        for end in 0..=input.len() {
            context.init(&input[..end]);
            match context.parse() {
                Ok(()) => assert_eq!(context.cursor(), end),
                Err(error) => {
                    assert!(error.error_span().end <= end);
                    assert!(error.code() < 0);
                }
            }
        }
        assert_eq!(context.parse(), Ok(()));
    }
}
