//! Subscription snapshot used for tier resolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Subscription lifecycle status as stored by billing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Active,
    Trial,
    Expired,
}

impl SubscriptionStatus {
    /// Returns true if a subscription in this status counts as current.
    pub fn is_current(&self) -> bool {
        matches!(self, SubscriptionStatus::Active | SubscriptionStatus::Trial)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionStatus::Active => "active",
            SubscriptionStatus::Trial => "trial",
            SubscriptionStatus::Expired => "expired",
        }
    }

    /// Parses a stored status value, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Some(SubscriptionStatus::Active),
            "trial" | "trialing" => Some(SubscriptionStatus::Trial),
            "expired" => Some(SubscriptionStatus::Expired),
            _ => None,
        }
    }
}

/// A viewer's subscription, referencing a plan by slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub user_id: UserId,
    pub plan_slug: String,
    pub status: SubscriptionStatus,
}

impl Subscription {
    pub fn new(user_id: UserId, plan_slug: impl Into<String>, status: SubscriptionStatus) -> Self {
        Self {
            user_id,
            plan_slug: plan_slug.into(),
            status,
        }
    }

    pub fn is_current(&self) -> bool {
        self.status.is_current()
    }
}
