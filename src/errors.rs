use std::fmt;
use std::num::ParseIntError;

/// The coordinate shape a string was being parsed or constructed as.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CoordinateKind {
    /// `name-version-release`
    Nvr,
    /// `name-epoch:version-release`
    Nevr,
    /// `name-version-release.arch`
    Nvra,
    /// `name-epoch:version-release.arch`
    Nevra,
}

impl CoordinateKind {
    /// The upper-case shape name, e.g. `NEVRA`
    pub fn as_str(&self) -> &'static str {
        match self {
            CoordinateKind::Nvr => "NVR",
            CoordinateKind::Nevr => "NEVR",
            CoordinateKind::Nvra => "NVRA",
            CoordinateKind::Nevra => "NEVRA",
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lower-level cause of a [`MalformedCoordinates`] error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Reason {
    /// A separator needed to split off `field` is missing
    #[error("missing `{separator}` separator before {field}")]
    MissingSeparator {
        /// The separator that wasn't found
        separator: char,
        /// The field that would have followed it
        field: &'static str,
    },

    /// Two separators are adjacent, or the input starts or ends with one
    #[error("{0} is empty")]
    EmptyField(&'static str),

    /// The text before `:` isn't a 32-bit unsigned integer
    #[error("epoch is not an unsigned integer")]
    InvalidEpoch(#[source] ParseIntError),

    /// A negative epoch was passed to a validating constructor
    #[error("epoch {0} is negative")]
    NegativeEpoch(i64),

    /// An epoch above `u32::MAX` was passed to a validating constructor
    #[error("epoch {0} does not fit in 32 bits")]
    EpochOutOfRange(i64),
}

impl From<ParseIntError> for Reason {
    fn from(error: ParseIntError) -> Self {
        Reason::InvalidEpoch(error)
    }
}

/// Raised whenever a string can't be split into the fields of the requested
/// coordinate shape, or when a coordinate is constructed with an invalid epoch.
///
/// The underlying [`Reason`] is available both through [`MalformedCoordinates::reason`]
/// and as the [`std::error::Error::source`] of this error.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("malformed {kind} coordinates {offender:?}")]
pub struct MalformedCoordinates {
    offender: String,
    kind: CoordinateKind,
    #[source]
    reason: Reason,
}

impl MalformedCoordinates {
    pub(crate) fn new(offender: impl Into<String>, kind: CoordinateKind, reason: Reason) -> Self {
        let offender = offender.into();
        log::debug!("rejecting {kind} coordinates {offender:?}: {reason}");
        MalformedCoordinates {
            offender,
            kind,
            reason,
        }
    }

    /// The input that failed to parse, or a description of the invalid field
    /// for construction failures (e.g. `epoch=-1`).
    pub fn offender(&self) -> &str {
        &self.offender
    }

    /// The shape that was being parsed or constructed.
    pub fn kind(&self) -> CoordinateKind {
        self.kind
    }

    /// Why the split or validation failed
    pub fn reason(&self) -> &Reason {
        &self.reason
    }
}

/// Result of parsing or constructing coordinates
pub type Result<T> = std::result::Result<T, MalformedCoordinates>;
