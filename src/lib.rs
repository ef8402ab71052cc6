//! # pkgps
//!
//! Parsing and formatting of package coordinates as used by RPM-based distributions:
//!
//! * [`Nvr`]: `name-version-release`
//! * [`Nevr`]: `name-epoch:version-release`
//! * [`Nvra`]: `name-version-release.arch`
//! * [`Nevra`]: `name-epoch:version-release.arch`
//!
//! Version and release are split off from the right, so package names containing
//! hyphens (`gcc-c++`, `perl-Text-Tabs+Wrap`) are kept intact. A zero epoch is
//! left out of the string form.
//!
//! # Example
//!
//! ```rust
//! use pkgps::{Nevra, Nvr};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let nevra = Nevra::parse("curl-1:8.6.0-7.fc40.aarch64")?;
//! let (name, epoch, version, release, arch) = nevra.decompose();
//! assert_eq!((name, epoch, version, release, arch), ("curl", 1, "8.6.0", "7.fc40", "aarch64"));
//! assert_eq!(nevra.to_string(), "curl-1:8.6.0-7.fc40.aarch64");
//!
//! let nvr = Nvr::parse("gcc-c++-14.0.1-0.15.fc40")?;
//! assert_eq!(nvr.name(), "gcc-c++");
//!
//! assert!(Nvr::parse("kernel").is_err());
//! # Ok(())
//! # }
//! ```

#![allow(unknown_lints, clippy::uninlined_format_args)]
#![warn(missing_docs)]

mod errors;
pub use crate::errors::*;

pub(crate) mod constants;
pub use crate::constants::{ARCH_SEPARATOR, EPOCH_SEPARATOR, FIELD_SEPARATOR};

mod fields;
pub use crate::fields::*;

mod nevra;
pub use crate::nevra::*;
