//! Unicode version numbers.

use std::{fmt, str::FromStr};

use crate::Error;

/// A Unicode Standard version, e.g. `15.1.0`.
///
/// Versions order numerically, which is the order layers are chained in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnicodeVersion {
    /// Major version
    pub major: u8,
    /// Minor version
    pub minor: u8,
    /// Update version
    pub update: u8,
}

impl UnicodeVersion {
    /// Creates a version.
    #[must_use]
    pub const fn new(major: u8, minor: u8, update: u8) -> Self {
        Self {
            major,
            minor,
            update,
        }
    }
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.update)
    }
}

impl FromStr for UnicodeVersion {
    type Err = Error;

    /// Parses `major.minor[.update]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u8, Error> {
            match parts.next() {
                Some(part) => part.parse::<u8>().map_err(|_| {
                    malformed_error!("Invalid version component '{}' in '{}'", part, s)
                }),
                None if required => Err(malformed_error!("Incomplete version '{}'", s)),
                None => Ok(0),
            }
        };

        let major = next(true)?;
        let minor = next(true)?;
        let update = next(false)?;

        if parts.next().is_some() {
            return Err(malformed_error!("Too many version components in '{}'", s));
        }

        Ok(Self::new(major, minor, update))
    }
}
