//! Document versions.
//!
//! A saved project records the version of the tool that wrote it as a
//! `(major, minor, build, revision)` tuple. Versions are totally ordered
//! lexicographically, which is what compatibility thresholds compare against.

use crate::TypesError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Version of the tool that last saved a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DocumentVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl DocumentVersion {
    /// Version written by this build of the tool when no override is configured.
    pub const CURRENT: Self = Self::new(4, 1, 0, 0);

    /// Creates a version from its four components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Returns true if this version is older than or equal to `threshold`.
    #[must_use]
    pub fn is_older_or_equal(&self, threshold: &Self) -> bool {
        self <= threshold
    }

    /// Returns true if this version is strictly newer than `other`.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl PartialOrd for DocumentVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DocumentVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.build.cmp(&other.build))
            .then(self.revision.cmp(&other.revision))
    }
}

impl fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for DocumentVersion {
    type Err = TypesError;

    /// Parses `major.minor[.build[.revision]]`; missing parts are zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('.').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(TypesError::InvalidVersion(s.to_string()));
        }
        let mut numbers = [0u32; 4];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .map_err(|_| TypesError::InvalidVersion(s.to_string()))?;
        }
        Ok(Self::new(numbers[0], numbers[1], numbers[2], numbers[3]))
    }
}
