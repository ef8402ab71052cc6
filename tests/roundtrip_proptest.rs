//! Property-based tests for the parse/format laws of all four coordinate shapes.

use proptest::prelude::*;

use pkgps::{Nevr, Nevra, Nvr, Nvra};

mod strategies {
    use super::*;

    /// Package names: may contain hyphens, dots and `+`, but never start or end with a hyphen
    pub fn name() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_+][A-Za-z0-9_+.-]{0,20}[A-Za-z0-9_+]"
    }

    /// Versions: no hyphen (it separates the release) and no colon (it separates the epoch)
    pub fn version() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_+.~^]{1,16}"
    }

    /// Releases without an architecture: no hyphen
    pub fn release() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_+.~^]{1,16}"
    }

    /// Architectures: no dot, since the last dot separates them
    pub fn arch() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_]{1,10}"
    }
}

proptest! {
    #[test]
    fn nvr_roundtrip(
        name in strategies::name(),
        version in strategies::version(),
        release in strategies::release(),
    ) {
        let formatted = Nvr::new(name.as_str(), version.as_str(), release.as_str()).to_string();
        let parsed = Nvr::parse(&formatted).unwrap();
        prop_assert_eq!(parsed.decompose(), (name.as_str(), version.as_str(), release.as_str()));
        prop_assert_eq!(parsed.to_string(), formatted);
    }

    #[test]
    fn nevr_roundtrip(
        name in strategies::name(),
        epoch in any::<u32>(),
        version in strategies::version(),
        release in strategies::release(),
    ) {
        let nevr = Nevr::new(name.as_str(), epoch, version.as_str(), release.as_str());
        let formatted = nevr.to_string();
        prop_assert_eq!(Nevr::parse(&formatted).unwrap(), nevr.clone());

        let normalized = nevr.as_normalized_form();
        prop_assert_eq!(Nevr::parse(&normalized).unwrap(), nevr);
    }

    #[test]
    fn nvra_roundtrip(
        name in strategies::name(),
        version in strategies::version(),
        release in strategies::release(),
        arch in strategies::arch(),
    ) {
        let nvra = Nvra::new(name.as_str(), version.as_str(), release.as_str(), arch.as_str());
        let formatted = nvra.to_string();
        let parsed = Nvra::parse(&formatted).unwrap();
        prop_assert_eq!(&parsed, &nvra);
        prop_assert_eq!(parsed.to_string(), formatted);
    }

    #[test]
    fn nevra_roundtrip(
        name in strategies::name(),
        epoch in any::<u32>(),
        version in strategies::version(),
        release in strategies::release(),
        arch in strategies::arch(),
    ) {
        let nevra = Nevra::new(name.as_str(), epoch, version.as_str(), release.as_str(), arch.as_str());
        let formatted = nevra.to_string();
        prop_assert_eq!(Nevra::parse(&formatted).unwrap(), nevra.clone());
        prop_assert_eq!(formatted.contains(':'), epoch != 0);
    }

    /// Anything with fewer than two hyphens is never a valid NVR
    #[test]
    fn too_few_hyphens_rejected(input in "[A-Za-z0-9_.:]{0,20}(-[A-Za-z0-9_.:]{0,20})?") {
        prop_assert!(Nvr::parse(&input).is_err());
        prop_assert!(Nevr::parse(&input).is_err());
        prop_assert!(Nvra::parse(&input).is_err());
        prop_assert!(Nevra::parse(&input).is_err());
    }

    #[test]
    fn parse_optional_matches_parse(input in "[a-z0-9.:-]{0,24}") {
        prop_assert_eq!(Nevra::parse_optional(Some(input.as_str())), Nevra::parse(&input).map(Some));
        prop_assert_eq!(Nvr::parse_optional(Some(input.as_str())), Nvr::parse(&input).map(Some));
    }
}
