//! Generation tokens for discarding stale fetch results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker distinguishing successive Search or Recipe instances.
///
/// Issued from a monotonically increasing counter held by
/// [`AppState`](crate::app::AppState). A fetch response is applied only when its
/// generation equals the generation of the entity that is active when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}
