//! Dot-separated numeric versions and host stacking-order selection.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::GridError;
use crate::result::GridResult;

/// A version made of numeric components, e.g. `1.4.2`.
///
/// Missing trailing components compare as zero, so `1.2` equals `1.2.0`.
/// Only built through `FromStr`, which requires at least one component.
#[derive(Debug, Clone)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    fn significant(&self) -> &[u64] {
        let len = self
            .components
            .iter()
            .rposition(|&c| c != 0)
            .map_or(0, |pos| pos + 1);
        &self.components[..len]
    }
}

impl FromStr for Version {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('v').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(GridError::InvalidVersion(s.to_string()));
        }
        let components = digits
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(GridError::InvalidVersion(s.to_string()));
                }
                part.parse::<u64>()
                    .map_err(|_| GridError::InvalidVersion(s.to_string()))
            })
            .collect::<GridResult<Vec<u64>>>()?;
        Ok(Self { components })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", parts.join("."))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|i| {
                let a = self.components.get(i).copied().unwrap_or(0);
                let b = other.components.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

/// Compare two version strings.
pub fn compare_versions(a: &str, b: &str) -> GridResult<Ordering> {
    Ok(a.parse::<Version>()?.cmp(&b.parse::<Version>()?))
}

/// Picks the stacking order for the plugin window based on the host version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackingPolicy {
    pub baseline: Version,
    pub modern: i32,
    pub legacy: i32,
}

impl StackingPolicy {
    /// Hosts at or above the baseline get `modern`, older hosts get `legacy`.
    pub fn stacking_for(&self, host_version: &Version) -> i32 {
        if *host_version >= self.baseline {
            self.modern
        } else {
            self.legacy
        }
    }
}
