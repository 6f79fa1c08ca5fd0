//! Access domain module.
//!
//! Resolves a viewer's subscription tier and decides content visibility.
//!
//! # Module Structure
//!
//! - `tier` - AccessTier and the plan slug catalog
//! - `subscription` - Subscription snapshot and status
//! - `viewer` - Per-request identity and permission flags
//! - `gating` - Publication + tier gates

mod gating;
mod subscription;
mod tier;
mod viewer;

pub use gating::{can_view, evaluate, GateDecision, Gated, Visibility};
pub use subscription::{Subscription, SubscriptionStatus};
pub use tier::{resolve_tier, tier_for_plan, AccessTier, PLAN_TIERS};
pub use viewer::{Permission, Viewer};
