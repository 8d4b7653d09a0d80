use std::{fmt, str::FromStr};

use crate::{ParseError, Platform};

const RUNNING_ON: &str = ". Running on: ";
const SEPARATOR: &str = " - ";

/// The line printed by the reporter.
///
/// Formats as `<tag>. Running on: <os> - <arch>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The product identifier leading the line.
    pub tag: String,
    /// The platform the binary was built for.
    pub platform: Platform,
}

/// Checks that a product tag keeps the report to one labelled line.
pub fn check_tag(tag: &str) -> Result<&str, ParseError> {
    if tag.trim().is_empty() || tag.contains(['\n', '\r']) {
        return Err(ParseError::InvalidTag(tag.to_owned()));
    }
    Ok(tag)
}

impl Report {
    /// Creates a new report.
    pub fn new(tag: impl Into<String>, platform: Platform) -> Self {
        Self {
            tag: tag.into(),
            platform,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Platform { os, arch } = self.platform;
        write!(f, "{}{RUNNING_ON}{os}{SEPARATOR}{arch}", self.tag)
    }
}

impl FromStr for Report {
    type Err = ParseError;

    /// Parses a single report line, without the trailing newline.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseError::MalformedReport(s.to_owned());
        let (tag, labels) = s.rsplit_once(RUNNING_ON).ok_or_else(malformed)?;
        let tag = check_tag(tag).map_err(|_| malformed())?;
        let (os, arch) = labels.split_once(SEPARATOR).ok_or_else(malformed)?;
        let platform = Platform {
            os: os.parse()?,
            arch: arch.parse()?,
        };
        Ok(Self::new(tag, platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Arch, Os};

    #[test]
    fn formats_linux_x86_64() {
        let report = Report::new(
            "Go Go C Container",
            Platform {
                os: Os::Linux,
                arch: Arch::X86_64,
            },
        );
        assert_eq!(
            report.to_string(),
            "Go Go C Container. Running on: Linux - x86_64"
        );
    }

    #[test]
    fn formats_unknown_platform() {
        let report = Report::new("Go Go C Container", Platform::UNKNOWN);
        assert_eq!(
            report.to_string(),
            "Go Go C Container. Running on: UNKNOWN - UNKNOWN"
        );
    }

    #[test]
    fn axes_are_independent() {
        let report = Report::new(
            "tag",
            Platform {
                os: Os::Linux,
                arch: Arch::Unknown,
            },
        );
        assert_eq!(report.to_string(), "tag. Running on: Linux - UNKNOWN");
    }

    #[test]
    fn parses_printed_line() {
        let line = "Go Go C Container. Running on: Unix - RISC-V";
        let report: Report = line.parse().unwrap();
        assert_eq!(report.tag, "Go Go C Container");
        assert_eq!(report.platform.os, Os::Unix);
        assert_eq!(report.platform.arch, Arch::RiscV);
        assert_eq!(report.to_string(), line);
    }

    #[test]
    fn tag_may_contain_the_separator() {
        let line = "a - b. c. Running on: Windows - ARM64";
        let report: Report = line.parse().unwrap();
        assert_eq!(report.tag, "a - b. c");
        assert_eq!(report.platform.arch, Arch::Arm64);
    }

    #[test]
    fn accepts_single_line_tags() {
        assert_eq!(check_tag("Go Go C Container"), Ok("Go Go C Container"));
        assert_eq!(check_tag("a - b. c"), Ok("a - b. c"));
    }

    #[test]
    fn rejects_empty_or_multi_line_tags() {
        for tag in ["", "   ", "Go\nGo", "Go\r\nGo", "Go\r"] {
            assert_eq!(
                check_tag(tag),
                Err(ParseError::InvalidTag(tag.to_owned())),
                "{tag:?}"
            );
        }
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(matches!(
            "hello world".parse::<Report>(),
            Err(ParseError::MalformedReport(_))
        ));
        assert!(matches!(
            ". Running on: Linux - x86_64".parse::<Report>(),
            Err(ParseError::MalformedReport(_))
        ));
        assert!(matches!(
            "x. Running on: Linux".parse::<Report>(),
            Err(ParseError::MalformedReport(_))
        ));
        assert_eq!(
            "x. Running on: Plan9 - x86_64".parse::<Report>(),
            Err(ParseError::UnknownOs("Plan9".to_owned()))
        );
        assert_eq!(
            "x. Running on: Linux - vax".parse::<Report>(),
            Err(ParseError::UnknownArch("vax".to_owned()))
        );
    }
}
