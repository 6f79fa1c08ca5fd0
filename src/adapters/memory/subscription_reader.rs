//! In-memory implementation of the `SubscriptionReader` port.

use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

use crate::domain::access::Subscription;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SubscriptionReader;

use super::poisoned;

/// Subscriptions held in insertion order.
///
/// When several current subscriptions exist for a user, the most recently
/// inserted one wins.
#[derive(Default)]
pub struct InMemorySubscriptionReader {
    subscriptions: RwLock<Vec<Subscription>>,
}

impl InMemorySubscriptionReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, subscription: Subscription) {
        self.subscriptions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subscription);
    }
}

#[async_trait]
impl SubscriptionReader for InMemorySubscriptionReader {
    async fn current_for_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError> {
        let subscriptions = self.subscriptions.read().map_err(poisoned)?;
        Ok(subscriptions
            .iter()
            .rev()
            .find(|s| &s.user_id == user_id && s.is_current())
            .cloned())
    }
}
