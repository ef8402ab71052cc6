/// Separates name, version and release. Names may contain it too, so it is split from the right.
pub const FIELD_SEPARATOR: char = '-';

/// Separates the epoch from the version.
pub const EPOCH_SEPARATOR: char = ':';

/// Separates the release from the architecture.
pub const ARCH_SEPARATOR: char = '.';

pub(crate) const NAME: &str = "name";
pub(crate) const EPOCH: &str = "epoch";
pub(crate) const VERSION: &str = "version";
pub(crate) const RELEASE: &str = "release";
pub(crate) const ARCH: &str = "arch";
