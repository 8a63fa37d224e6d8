use serde::{Deserialize, Serialize};

/// Number of shares. Unsigned, so the non-negative invariant holds by
/// construction; addition saturates and subtraction is checked, so
/// neither can wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShareCount(u64);

impl ShareCount {
    pub fn new(value: u64) -> Self {
        ShareCount(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Saturating addition. A position cannot wrap past `u64::MAX`, it
    /// caps there instead.
    pub fn add(&self, other: ShareCount) -> ShareCount {
        ShareCount(self.0.saturating_add(other.0))
    }

    /// Checked subtraction. None when `other` exceeds the held count.
    pub fn subtract(&self, other: ShareCount) -> Option<ShareCount> {
        self.0.checked_sub(other.0).map(ShareCount)
    }
}

impl std::fmt::Display for ShareCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
