//! Access tier definitions and the plan catalog.
//!
//! Every tier computation in the crate goes through [`resolve_tier`] so the
//! slug table exists exactly once.

use serde::{Deserialize, Serialize};

use super::Subscription;

/// Numeric subscription rank. Higher unlocks more gated content.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccessTier(u8);

impl AccessTier {
    /// Visible to everyone, including anonymous viewers.
    pub const OPEN: AccessTier = AccessTier(0);

    pub const fn new(rank: u8) -> Self {
        Self(rank)
    }

    /// Returns the numeric rank of this tier for comparison.
    pub fn rank(&self) -> u8 {
        self.0
    }

    /// Returns true if this tier meets the given requirement.
    pub fn satisfies(&self, required: AccessTier) -> bool {
        self.0 >= required.0
    }
}

impl From<u8> for AccessTier {
    fn from(rank: u8) -> Self {
        Self(rank)
    }
}

impl std::fmt::Display for AccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tier {}", self.0)
    }
}

/// Plan slug to tier rank.
///
/// | Slug | Tier |
/// |------|------|
/// | free | 0 |
/// | basic | 1 |
/// | advanced | 2 |
/// | pro | 2 |
/// | vip | 3 |
///
/// `advanced` and `pro` share a rank.
pub const PLAN_TIERS: [(&str, AccessTier); 5] = [
    ("free", AccessTier::new(0)),
    ("basic", AccessTier::new(1)),
    ("advanced", AccessTier::new(2)),
    ("pro", AccessTier::new(2)),
    ("vip", AccessTier::new(3)),
];

/// Looks up a plan slug, ignoring ASCII case and surrounding whitespace.
/// Unknown slugs resolve to tier 0.
pub fn tier_for_plan(plan_slug: &str) -> AccessTier {
    let slug = plan_slug.trim();
    PLAN_TIERS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(slug))
        .map(|(_, tier)| *tier)
        .unwrap_or(AccessTier::OPEN)
}

/// Maps a viewer's current subscription to a tier.
///
/// Absent subscriptions and unknown slugs degrade to tier 0; this never fails.
pub fn resolve_tier(subscription: Option<&Subscription>) -> AccessTier {
    subscription
        .map(|s| tier_for_plan(&s.plan_slug))
        .unwrap_or(AccessTier::OPEN)
}
