//! Subscription reader port.
//!
//! Looks up the one subscription that decides a viewer's tier.
//!
//! # Design
//!
//! - **Current only**: implementations return the subscription whose status
//!   is `active` or `trial`; expired rows are never returned.
//! - **Single row**: a user has at most one current subscription. When storage
//!   holds several, the most recently started one wins.

use crate::domain::access::Subscription;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Reader port for the viewer's current subscription.
#[async_trait]
pub trait SubscriptionReader: Send + Sync {
    /// Returns the current subscription for `user_id`, or `None` if the user
    /// has no active or trial subscription.
    async fn current_for_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError>;
}
