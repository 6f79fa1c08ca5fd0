//! Publication and tier gating for content items.
//!
//! Two independent gates apply to every item: it must be published, and the
//! viewer's tier must reach the item's `min_tier`. The management capability
//! bypasses both.

use serde::{Deserialize, Serialize};

use super::AccessTier;

/// Anything carrying a publication flag and a minimum tier.
pub trait Gated {
    fn min_tier(&self) -> AccessTier;
    fn is_published(&self) -> bool;
}

/// Outcome of evaluating both gates for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Visible,
    /// Not published and the viewer cannot manage content.
    Unpublished,
    /// Published, but the viewer's tier is below the item's requirement.
    InsufficientTier {
        required: AccessTier,
        actual: AccessTier,
    },
}

impl GateDecision {
    pub fn is_visible(&self) -> bool {
        matches!(self, GateDecision::Visible)
    }
}

/// Evaluates the gates for a single item.
pub fn evaluate<G: Gated + ?Sized>(
    item: &G,
    viewer_tier: AccessTier,
    has_management_capability: bool,
) -> GateDecision {
    if has_management_capability {
        return GateDecision::Visible;
    }
    if !item.is_published() {
        return GateDecision::Unpublished;
    }
    if !viewer_tier.satisfies(item.min_tier()) {
        return GateDecision::InsufficientTier {
            required: item.min_tier(),
            actual: viewer_tier,
        };
    }
    GateDecision::Visible
}

/// Returns true if the viewer may see the item.
pub fn can_view<G: Gated + ?Sized>(
    item: &G,
    viewer_tier: AccessTier,
    has_management_capability: bool,
) -> bool {
    evaluate(item, viewer_tier, has_management_capability).is_visible()
}

/// Storage-level form of the gates, pushed down into listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "snake_case")]
pub enum Visibility {
    /// Management view: no publication or tier predicate.
    Everything,
    /// `published = true AND min_tier <= max_tier`.
    PublishedUpTo { max_tier: AccessTier },
}

impl Visibility {
    pub fn for_viewer(viewer_tier: AccessTier, has_management_capability: bool) -> Self {
        if has_management_capability {
            Visibility::Everything
        } else {
            Visibility::PublishedUpTo {
                max_tier: viewer_tier,
            }
        }
    }

    /// Same predicate as [`can_view`], for adapters that filter in process.
    pub fn admits<G: Gated + ?Sized>(&self, item: &G) -> bool {
        match self {
            Visibility::Everything => true,
            Visibility::PublishedUpTo { max_tier } => can_view(item, *max_tier, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Item {
        min_tier: u8,
        published: bool,
    }

    impl Gated for Item {
        fn min_tier(&self) -> AccessTier {
            AccessTier::new(self.min_tier)
        }

        fn is_published(&self) -> bool {
            self.published
        }
    }

    fn item(min_tier: u8, published: bool) -> Item {
        Item {
            min_tier,
            published,
        }
    }

    #[test]
    fn open_published_item_is_visible_to_everyone() {
        assert!(can_view(&item(0, true), AccessTier::OPEN, false));
    }

    #[test]
    fn open_unpublished_item_is_hidden() {
        assert!(!can_view(&item(0, false), AccessTier::new(3), false));
        assert_eq!(
            evaluate(&item(0, false), AccessTier::new(3), false),
            GateDecision::Unpublished
        );
    }

    #[test]
    fn under_tier_viewer_gets_insufficient_tier() {
        assert_eq!(
            evaluate(&item(2, true), AccessTier::new(1), false),
            GateDecision::InsufficientTier {
                required: AccessTier::new(2),
                actual: AccessTier::new(1),
            }
        );
    }

    #[test]
    fn management_sees_unpublished_gated_items() {
        assert!(can_view(&item(3, false), AccessTier::OPEN, true));
    }

    #[test]
    fn visibility_for_manager_is_everything() {
        assert_eq!(
            Visibility::for_viewer(AccessTier::OPEN, true),
            Visibility::Everything
        );
    }

    #[test]
    fn visibility_admits_matches_can_view() {
        let scope = Visibility::for_viewer(AccessTier::new(1), false);
        assert!(scope.admits(&item(1, true)));
        assert!(!scope.admits(&item(2, true)));
        assert!(!scope.admits(&item(0, false)));
    }

    proptest! {
        #[test]
        fn management_always_sees(min_tier in 0u8..=10, tier in 0u8..=10, published in any::<bool>()) {
            prop_assert!(can_view(&item(min_tier, published), AccessTier::new(tier), true));
        }

        #[test]
        fn unpublished_never_visible_without_management(min_tier in 0u8..=10, tier in 0u8..=10) {
            prop_assert!(!can_view(&item(min_tier, false), AccessTier::new(tier), false));
        }

        #[test]
        fn published_visible_iff_tier_reaches_min(min_tier in 0u8..=10, tier in 0u8..=10) {
            prop_assert_eq!(
                can_view(&item(min_tier, true), AccessTier::new(tier), false),
                tier >= min_tier
            );
        }
    }
}
