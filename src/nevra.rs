use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::errors::{CoordinateKind, MalformedCoordinates, Reason, Result};
use crate::fields::Fields;

type Split<T> = std::result::Result<T, Reason>;

/// Split on the last two field separators into (name, version, release).
///
/// Working from the right keeps separators that are part of the name, e.g. `gcc-c++`.
fn split_nvr(input: &str) -> Split<(&str, &str, &str)> {
    let (rest, release) =
        input
            .rsplit_once(FIELD_SEPARATOR)
            .ok_or(Reason::MissingSeparator {
                separator: FIELD_SEPARATOR,
                field: RELEASE,
            })?;
    let (name, version) = rest
        .rsplit_once(FIELD_SEPARATOR)
        .ok_or(Reason::MissingSeparator {
            separator: FIELD_SEPARATOR,
            field: VERSION,
        })?;

    Ok((name, version, release))
}

/// Split an optional leading `epoch:` off a version, defaulting the epoch to zero.
fn split_epoch(epoch_version: &str) -> Split<(u32, &str)> {
    match epoch_version.split_once(EPOCH_SEPARATOR) {
        Some((epoch, version)) => Ok((epoch.parse()?, version)),
        None => Ok((0, epoch_version)),
    }
}

/// Split the trailing `.arch` off a release.
fn split_arch(release_arch: &str) -> Split<(&str, &str)> {
    release_arch
        .rsplit_once(ARCH_SEPARATOR)
        .ok_or(Reason::MissingSeparator {
            separator: ARCH_SEPARATOR,
            field: ARCH,
        })
}

fn non_empty<'a>(field: &'static str, value: &'a str) -> Split<&'a str> {
    if value.is_empty() {
        Err(Reason::EmptyField(field))
    } else {
        Ok(value)
    }
}

fn validate_epoch(epoch: i64) -> Split<u32> {
    if epoch < 0 {
        return Err(Reason::NegativeEpoch(epoch));
    }
    u32::try_from(epoch).map_err(|_| Reason::EpochOutOfRange(epoch))
}

fn malformed(input: &str, kind: CoordinateKind) -> impl FnOnce(Reason) -> MalformedCoordinates {
    move |reason| MalformedCoordinates::new(input, kind, reason)
}

/// Name-Version-Release coordinates, e.g. `curl-7.76.1-26.el9`.
///
/// The name may itself contain hyphens; version and release are always taken
/// from the last two hyphen-separated segments.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Nvr<'a> {
    name: Cow<'a, str>,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
}

impl<'a> Nvr<'a> {
    /// Create a new NVR
    pub fn new<T: Into<Cow<'a, str>>>(name: T, version: T, release: T) -> Nvr<'a> {
        Nvr {
            name: name.into(),
            version: version.into(),
            release: release.into(),
        }
    }

    /// Parse an NVR from a string, borrowing the fields from it
    pub fn parse(nvr: &'a str) -> Result<Self> {
        let (name, version, release) =
            Nvr::parse_values(nvr).map_err(malformed(nvr, CoordinateKind::Nvr))?;
        log::trace!("parsed NVR {:?}", nvr);
        Ok(Nvr::new(name, version, release))
    }

    /// Parse an NVR if one is present
    pub fn parse_optional(nvr: Option<&'a str>) -> Result<Option<Self>> {
        nvr.map(Nvr::parse).transpose()
    }

    fn parse_values(nvr: &'a str) -> Split<(&'a str, &'a str, &'a str)> {
        let (name, version, release) = split_nvr(nvr)?;
        Ok((
            non_empty(NAME, name)?,
            non_empty(VERSION, version)?,
            non_empty(RELEASE, release)?,
        ))
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Return the name, version and release values as a 3-element tuple
    pub fn decompose(&self) -> (&str, &str, &str) {
        (&self.name, &self.version, &self.release)
    }

    /// Return the fields as an ordered name to value mapping
    pub fn to_mapping(&self) -> Fields<'_> {
        Fields::with_capacity(3)
            .push(NAME, self.name())
            .push(VERSION, self.version())
            .push(RELEASE, self.release())
    }

    /// Copy any borrowed fields so the value no longer depends on its input
    pub fn into_owned(self) -> Nvr<'static> {
        Nvr {
            name: Cow::Owned(self.name.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
        }
    }
}

impl fmt::Display for Nvr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.name, self.version, self.release)
    }
}

/// Name-Epoch:Version-Release coordinates, e.g. `curl-1:7.76.1-26.el9`.
///
/// A missing epoch is equivalent to an epoch of zero, and a zero epoch is left
/// out of the string form.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Nevr<'a> {
    name: Cow<'a, str>,
    epoch: u32,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
}

impl<'a> Nevr<'a> {
    /// Create a new NEVR
    pub fn new<T: Into<Cow<'a, str>>>(name: T, epoch: u32, version: T, release: T) -> Nevr<'a> {
        Nevr {
            name: name.into(),
            epoch,
            version: version.into(),
            release: release.into(),
        }
    }

    /// Create a new NEVR from a signed epoch, failing if it is negative or doesn't fit in 32 bits
    pub fn try_new<T: Into<Cow<'a, str>>>(
        name: T,
        epoch: i64,
        version: T,
        release: T,
    ) -> Result<Nevr<'a>> {
        let epoch = validate_epoch(epoch)
            .map_err(malformed(&format!("epoch={}", epoch), CoordinateKind::Nevr))?;
        Ok(Nevr::new(name, epoch, version, release))
    }

    /// Parse a NEVR from a string, borrowing the fields from it
    pub fn parse(nevr: &'a str) -> Result<Self> {
        let (name, epoch, version, release) =
            Nevr::parse_values(nevr).map_err(malformed(nevr, CoordinateKind::Nevr))?;
        log::trace!("parsed NEVR {:?}", nevr);
        Ok(Nevr::new(name, epoch, version, release))
    }

    /// Parse a NEVR if one is present
    pub fn parse_optional(nevr: Option<&'a str>) -> Result<Option<Self>> {
        nevr.map(Nevr::parse).transpose()
    }

    fn parse_values(nevr: &'a str) -> Split<(&'a str, u32, &'a str, &'a str)> {
        let (name, epoch_version, release) = split_nvr(nevr)?;
        let (epoch, version) = split_epoch(epoch_version)?;
        Ok((
            non_empty(NAME, name)?,
            epoch,
            non_empty(VERSION, version)?,
            non_empty(RELEASE, release)?,
        ))
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The epoch value
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// Return the name, epoch, version and release values as a 4-element tuple
    pub fn decompose(&self) -> (&str, u32, &str, &str) {
        (&self.name, self.epoch, &self.version, &self.release)
    }

    /// Return the fields as an ordered name to value mapping
    pub fn to_mapping(&self) -> Fields<'_> {
        Fields::with_capacity(4)
            .push(NAME, self.name())
            .push(EPOCH, self.epoch)
            .push(VERSION, self.version())
            .push(RELEASE, self.release())
    }

    /// The same coordinates without the epoch
    pub fn nvr(&self) -> Nvr<'_> {
        Nvr::new(self.name(), self.version(), self.release())
    }

    /// Write a NEVR string in a normalized form which always includes the epoch
    ///
    /// The standard string representation leaves out a zero epoch. Sometimes it is useful to
    /// write NEVRs such that equivalent values are represented identically, therefore this
    /// "normalized" form will always include it.
    pub fn as_normalized_form(&self) -> String {
        format!(
            "{}-{}:{}-{}",
            self.name, self.epoch, self.version, self.release
        )
    }

    /// Copy any borrowed fields so the value no longer depends on its input
    pub fn into_owned(self) -> Nevr<'static> {
        Nevr {
            name: Cow::Owned(self.name.into_owned()),
            epoch: self.epoch,
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
        }
    }
}

impl fmt::Display for Nevr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.name)?;
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}-{}", self.version, self.release)
    }
}

/// Name-Version-Release.Architecture coordinates, e.g. `curl-7.76.1-26.el9.aarch64`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Nvra<'a> {
    name: Cow<'a, str>,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
    arch: Cow<'a, str>,
}

impl<'a> Nvra<'a> {
    /// Create a new NVRA
    pub fn new<T: Into<Cow<'a, str>>>(name: T, version: T, release: T, arch: T) -> Nvra<'a> {
        Nvra {
            name: name.into(),
            version: version.into(),
            release: release.into(),
            arch: arch.into(),
        }
    }

    /// Parse an NVRA from a string, borrowing the fields from it
    pub fn parse(nvra: &'a str) -> Result<Self> {
        let (name, version, release, arch) =
            Nvra::parse_values(nvra).map_err(malformed(nvra, CoordinateKind::Nvra))?;
        log::trace!("parsed NVRA {:?}", nvra);
        Ok(Nvra::new(name, version, release, arch))
    }

    /// Parse an NVRA if one is present
    pub fn parse_optional(nvra: Option<&'a str>) -> Result<Option<Self>> {
        nvra.map(Nvra::parse).transpose()
    }

    fn parse_values(nvra: &'a str) -> Split<(&'a str, &'a str, &'a str, &'a str)> {
        let (name, version, release_arch) = split_nvr(nvra)?;
        let (release, arch) = split_arch(release_arch)?;
        Ok((
            non_empty(NAME, name)?,
            non_empty(VERSION, version)?,
            non_empty(RELEASE, release)?,
            non_empty(ARCH, arch)?,
        ))
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// The arch value
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Alias of [`Nvra::arch`]
    pub fn architecture(&self) -> &str {
        self.arch()
    }

    /// Return the name, version, release and arch values as a 4-element tuple
    pub fn decompose(&self) -> (&str, &str, &str, &str) {
        (&self.name, &self.version, &self.release, &self.arch)
    }

    /// Return the fields as an ordered name to value mapping
    pub fn to_mapping(&self) -> Fields<'_> {
        Fields::with_capacity(4)
            .push(NAME, self.name())
            .push(VERSION, self.version())
            .push(RELEASE, self.release())
            .push(ARCH, self.arch())
    }

    /// The same coordinates without the architecture
    pub fn nvr(&self) -> Nvr<'_> {
        Nvr::new(self.name(), self.version(), self.release())
    }

    /// Copy any borrowed fields so the value no longer depends on its input
    pub fn into_owned(self) -> Nvra<'static> {
        Nvra {
            name: Cow::Owned(self.name.into_owned()),
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
            arch: Cow::Owned(self.arch.into_owned()),
        }
    }
}

impl fmt::Display for Nvra<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}.{}",
            self.name, self.version, self.release, self.arch
        )
    }
}

/// A full "NEVRA" consists of 5 different components - Name, Epoch, Version, Release, and Architecture.
///
/// Name is the name of the package. It may contain hyphens.
///
/// Epoch overrides all other fields and is generally only used as a last resort - in cases where
/// a change to the versioning scheme or packaging error creates a situation where newer packages
/// might otherwise sort as being older. A missing epoch is equivalent to an epoch of zero.
///
/// Version is the normal version string used by the upstream project.
///
/// Release indicates the number of times this package has been released, and may also indicate
/// other details such as the OS it was built for (fc40, el9).
///
/// Architecture indicates the CPU architecture that this package is intended to support.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Nevra<'a> {
    name: Cow<'a, str>,
    epoch: u32,
    version: Cow<'a, str>,
    release: Cow<'a, str>,
    arch: Cow<'a, str>,
}

impl<'a> Nevra<'a> {
    /// Create a new NEVRA
    pub fn new<T: Into<Cow<'a, str>>>(
        name: T,
        epoch: u32,
        version: T,
        release: T,
        arch: T,
    ) -> Nevra<'a> {
        Nevra {
            name: name.into(),
            epoch,
            version: version.into(),
            release: release.into(),
            arch: arch.into(),
        }
    }

    /// Create a new NEVRA from a signed epoch, failing if it is negative or doesn't fit in 32 bits
    pub fn try_new<T: Into<Cow<'a, str>>>(
        name: T,
        epoch: i64,
        version: T,
        release: T,
        arch: T,
    ) -> Result<Nevra<'a>> {
        let epoch = validate_epoch(epoch)
            .map_err(malformed(&format!("epoch={}", epoch), CoordinateKind::Nevra))?;
        Ok(Nevra::new(name, epoch, version, release, arch))
    }

    /// Parse a NEVRA from a string, borrowing the fields from it
    pub fn parse(nevra: &'a str) -> Result<Self> {
        let (name, epoch, version, release, arch) =
            Nevra::parse_values(nevra).map_err(malformed(nevra, CoordinateKind::Nevra))?;
        log::trace!("parsed NEVRA {:?}", nevra);
        Ok(Nevra::new(name, epoch, version, release, arch))
    }

    /// Parse a NEVRA if one is present
    pub fn parse_optional(nevra: Option<&'a str>) -> Result<Option<Self>> {
        nevra.map(Nevra::parse).transpose()
    }

    fn parse_values(nevra: &'a str) -> Split<(&'a str, u32, &'a str, &'a str, &'a str)> {
        let (name, epoch_version, release_arch) = split_nvr(nevra)?;
        let (epoch, version) = split_epoch(epoch_version)?;
        let (release, arch) = split_arch(release_arch)?;
        Ok((
            non_empty(NAME, name)?,
            epoch,
            non_empty(VERSION, version)?,
            non_empty(RELEASE, release)?,
            non_empty(ARCH, arch)?,
        ))
    }

    /// The name value
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The epoch value
    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    /// The version value
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The release value
    pub fn release(&self) -> &str {
        &self.release
    }

    /// The arch value
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Alias of [`Nevra::arch`]
    pub fn architecture(&self) -> &str {
        self.arch()
    }

    /// Return the name, epoch, version, release and arch values as a 5-element tuple
    pub fn decompose(&self) -> (&str, u32, &str, &str, &str) {
        (
            &self.name,
            self.epoch,
            &self.version,
            &self.release,
            &self.arch,
        )
    }

    /// Return the fields as an ordered name to value mapping
    pub fn to_mapping(&self) -> Fields<'_> {
        Fields::with_capacity(5)
            .push(NAME, self.name())
            .push(EPOCH, self.epoch)
            .push(VERSION, self.version())
            .push(RELEASE, self.release())
            .push(ARCH, self.arch())
    }

    /// The same coordinates without the architecture
    pub fn nevr(&self) -> Nevr<'_> {
        Nevr::new(self.name(), self.epoch, self.version(), self.release())
    }

    /// The same coordinates without the epoch
    ///
    /// This is the form typically used for RPM filenames.
    pub fn nvra(&self) -> Nvra<'_> {
        Nvra::new(self.name(), self.version(), self.release(), self.arch())
    }

    /// Write a NEVRA string in a normalized form which always includes the epoch
    ///
    /// The standard string representation leaves out a zero epoch. Sometimes it is useful to
    /// write NEVRAs such that equivalent values are represented identically, therefore this
    /// "normalized" form will always include it.
    pub fn as_normalized_form(&self) -> String {
        format!(
            "{}-{}:{}-{}.{}",
            self.name, self.epoch, self.version, self.release, self.arch
        )
    }

    /// Copy any borrowed fields so the value no longer depends on its input
    pub fn into_owned(self) -> Nevra<'static> {
        Nevra {
            name: Cow::Owned(self.name.into_owned()),
            epoch: self.epoch,
            version: Cow::Owned(self.version.into_owned()),
            release: Cow::Owned(self.release.into_owned()),
            arch: Cow::Owned(self.arch.into_owned()),
        }
    }
}

impl fmt::Display for Nevra<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-", self.name)?;
        if self.epoch != 0 {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}-{}.{}", self.version, self.release, self.arch)
    }
}

impl FromStr for Nvr<'static> {
    type Err = MalformedCoordinates;

    fn from_str(s: &str) -> Result<Self> {
        Nvr::parse(s).map(Nvr::into_owned)
    }
}

impl FromStr for Nevr<'static> {
    type Err = MalformedCoordinates;

    fn from_str(s: &str) -> Result<Self> {
        Nevr::parse(s).map(Nevr::into_owned)
    }
}

impl FromStr for Nvra<'static> {
    type Err = MalformedCoordinates;

    fn from_str(s: &str) -> Result<Self> {
        Nvra::parse(s).map(Nvra::into_owned)
    }
}

impl FromStr for Nevra<'static> {
    type Err = MalformedCoordinates;

    fn from_str(s: &str) -> Result<Self> {
        Nevra::parse(s).map(Nevra::into_owned)
    }
}

impl<'a> TryFrom<&'a str> for Nvr<'a> {
    type Error = MalformedCoordinates;

    fn try_from(s: &'a str) -> Result<Self> {
        Nvr::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for Nevr<'a> {
    type Error = MalformedCoordinates;

    fn try_from(s: &'a str) -> Result<Self> {
        Nevr::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for Nvra<'a> {
    type Error = MalformedCoordinates;

    fn try_from(s: &'a str) -> Result<Self> {
        Nvra::parse(s)
    }
}

impl<'a> TryFrom<&'a str> for Nevra<'a> {
    type Error = MalformedCoordinates;

    fn try_from(s: &'a str) -> Result<Self> {
        Nevra::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    impl serde::Serialize for Nvr<'_> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> serde::Deserialize<'de> for Nvr<'static> {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for Nevr<'_> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> serde::Deserialize<'de> for Nevr<'static> {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for Nvra<'_> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> serde::Deserialize<'de> for Nvra<'static> {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }

    impl serde::Serialize for Nevra<'_> {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> serde::Deserialize<'de> for Nevra<'static> {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(serde::de::Error::custom)
        }
    }
}
