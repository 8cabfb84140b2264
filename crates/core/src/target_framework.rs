//! Target framework short-name normalization
//!
//! .NET 5 and later accept both `net6.0` and `net60` as the same moniker, while the build
//! output directory is always named after the dotted form. Everything else
//! (`netcoreapp3.1`, `netstandard2.1`, `net472`, ...) is kept exactly as reported.

use std::fmt;

/// Numeric version of a dotted `net<major>.<minor>` moniker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameworkVersion {
    pub major: u32,
    pub minor: u32,
}

impl FrameworkVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// A normalized target framework short name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetFramework {
    short_name: String,
    version: Option<FrameworkVersion>,
}

impl TargetFramework {
    /// Parse a short name. Unrecognized names are kept verbatim and carry no version.
    pub fn parse(short_name: &str) -> Self {
        let trimmed = short_name.trim();

        if let Some((canonical, version)) = parse_modern(trimmed) {
            return Self {
                short_name: canonical,
                version: Some(version),
            };
        }

        Self {
            short_name: trimmed.to_string(),
            version: None,
        }
    }

    /// Canonical short name, used verbatim in output paths.
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Version of a `net5.0`-era moniker; `None` for legacy and unrecognized names.
    pub fn version(&self) -> Option<FrameworkVersion> {
        self.version
    }

    /// Whether the moniker is at least `net<major>.<minor>`. Unversioned names never are.
    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        self.version
            .is_some_and(|v| v >= FrameworkVersion::new(major, minor))
    }

    /// Whether the moniker names a .NET Framework target (`net20` .. `net481`).
    pub fn is_net_framework(&self) -> bool {
        let Some(digits) = self.short_name.strip_prefix("net") else {
            return false;
        };
        (2..=3).contains(&digits.len())
            && digits.chars().all(|c| c.is_ascii_digit())
            && matches!(digits.as_bytes()[0], b'1'..=b'4')
    }
}

impl fmt::Display for TargetFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name)
    }
}

/// Recognize `net<major>.<minor>[-platform]` and `net<d><d>[-platform]` (major >= 5).
fn parse_modern(short_name: &str) -> Option<(String, FrameworkVersion)> {
    let rest = short_name.strip_prefix("net")?;
    let (numeric, platform) = match rest.split_once('-') {
        Some((numeric, platform)) => (numeric, Some(platform)),
        None => (rest, None),
    };

    let version = match numeric.split_once('.') {
        Some((major, minor)) if is_digits(major) && is_digits(minor) => {
            FrameworkVersion::new(major.parse().ok()?, minor.parse().ok()?)
        }
        // net50 .. net90
        None if numeric.len() == 2 && is_digits(numeric) => {
            let bytes = numeric.as_bytes();
            FrameworkVersion::new(u32::from(bytes[0] - b'0'), u32::from(bytes[1] - b'0'))
        }
        _ => return None,
    };

    // Below 5.0 the moniker belongs to .NET Framework (net45, net48, ...)
    if version.major < 5 {
        return None;
    }

    let mut canonical = format!("net{version}");
    if let Some(platform) = platform {
        canonical.push('-');
        canonical.push_str(platform);
    }
    Some((canonical, version))
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_names_are_kept() {
        for version in 5..=9 {
            let name = format!("net{version}.0");
            let framework = TargetFramework::parse(&name);
            assert_eq!(framework.short_name(), name);
            assert_eq!(framework.version(), Some(FrameworkVersion::new(version, 0)));
        }
    }

    #[test]
    fn test_undotted_names_normalize_to_dotted() {
        for version in 5..=9 {
            let dotted = TargetFramework::parse(&format!("net{version}.0"));
            let undotted = TargetFramework::parse(&format!("net{version}0"));
            assert_eq!(undotted, dotted);
        }
    }

    #[test]
    fn test_platform_suffix() {
        let framework = TargetFramework::parse("net60-windows");
        assert_eq!(framework.short_name(), "net6.0-windows");
        assert_eq!(framework.version(), Some(FrameworkVersion::new(6, 0)));

        let framework = TargetFramework::parse("net8.0-android");
        assert_eq!(framework.short_name(), "net8.0-android");
    }

    #[test]
    fn test_double_digit_major() {
        let framework = TargetFramework::parse("net10.0");
        assert_eq!(framework.version(), Some(FrameworkVersion::new(10, 0)));
        assert!(framework.is_at_least(9, 0));
    }

    #[test]
    fn test_legacy_names_pass_through() {
        for name in ["netcoreapp1.0", "netcoreapp3.1", "netstandard2.1", "net472", "net48"] {
            let framework = TargetFramework::parse(name);
            assert_eq!(framework.short_name(), name);
            assert_eq!(framework.version(), None);
            assert!(!framework.is_at_least(1, 0));
        }
    }

    #[test]
    fn test_unrecognized_names_pass_through() {
        for name in ["banana", "net", "net5", "net100", "net6.x", ""] {
            let framework = TargetFramework::parse(name);
            assert_eq!(framework.short_name(), name);
            assert_eq!(framework.version(), None);
        }
    }

    #[test]
    fn test_net_framework_detection() {
        assert!(TargetFramework::parse("net472").is_net_framework());
        assert!(TargetFramework::parse("net48").is_net_framework());
        assert!(TargetFramework::parse("net20").is_net_framework());
        assert!(!TargetFramework::parse("net60").is_net_framework());
        assert!(!TargetFramework::parse("net6.0").is_net_framework());
        assert!(!TargetFramework::parse("netcoreapp3.1").is_net_framework());
    }

    #[test]
    fn test_version_ordering() {
        assert!(FrameworkVersion::new(6, 0) < FrameworkVersion::new(7, 0));
        assert!(FrameworkVersion::new(10, 0) > FrameworkVersion::new(9, 0));
        assert!(TargetFramework::parse("net70").is_at_least(6, 0));
    }
}
