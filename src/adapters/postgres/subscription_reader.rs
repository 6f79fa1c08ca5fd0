//! PostgreSQL implementation of SubscriptionReader.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::access::{Subscription, SubscriptionStatus};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::SubscriptionReader;

use super::db_error;

/// Stored status values that count as a current subscription.
const CURRENT_STATUSES: [&str; 3] = ["active", "trial", "trialing"];

/// PostgreSQL implementation of the SubscriptionReader port.
pub struct PostgresSubscriptionReader {
    pool: PgPool,
}

impl PostgresSubscriptionReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SubscriptionRow {
    user_id: String,
    plan_slug: String,
    status: String,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let status = SubscriptionStatus::parse(&row.status).ok_or_else(|| {
            DomainError::database(format!("Invalid subscription status: {}", row.status))
        })?;
        let user_id = UserId::new(row.user_id)
            .map_err(|e| DomainError::database(format!("Invalid user_id: {}", e)))?;
        Ok(Subscription::new(user_id, row.plan_slug, status))
    }
}

#[async_trait]
impl SubscriptionReader for PostgresSubscriptionReader {
    async fn current_for_user(&self, user_id: &UserId) -> Result<Option<Subscription>, DomainError> {
        let row: Option<SubscriptionRow> = sqlx::query_as(
            r#"
            SELECT user_id, plan_slug, status
            FROM subscriptions
            WHERE user_id = $1 AND status = ANY($2)
            ORDER BY started_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id.as_str())
        .bind(&CURRENT_STATUSES[..])
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to get subscription"))?;

        row.map(Subscription::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_with_trialing_status_is_current() {
        let row = SubscriptionRow {
            user_id: "u-1".to_string(),
            plan_slug: "basic".to_string(),
            status: "trialing".to_string(),
        };

        let subscription = Subscription::try_from(row).unwrap();

        assert!(subscription.is_current());
    }

    #[test]
    fn current_statuses_match_domain_rule() {
        for value in CURRENT_STATUSES {
            let status = SubscriptionStatus::parse(value).unwrap();
            assert!(status.is_current(), "{value} should be current");
        }
        for status in [
            SubscriptionStatus::Active,
            SubscriptionStatus::Trial,
            SubscriptionStatus::Expired,
        ] {
            assert_eq!(
                CURRENT_STATUSES.contains(&status.as_str()),
                status.is_current(),
                "{} disagrees with is_current",
                status.as_str()
            );
        }
    }

    #[test]
    fn every_schema_status_parses() {
        let schema = include_str!("../../../migrations/0001_init.sql");
        for value in ["active", "trial", "trialing", "expired"] {
            assert!(schema.contains(&format!("'{value}'")), "{value} missing from schema");
            assert!(SubscriptionStatus::parse(value).is_some());
        }
        for value in CURRENT_STATUSES {
            assert!(schema.contains(&format!("'{value}'")), "{value} missing from schema");
        }
    }

    #[test]
    fn row_with_unknown_status_is_rejected() {
        let row = SubscriptionRow {
            user_id: "u-1".to_string(),
            plan_slug: "basic".to_string(),
            status: "paused".to_string(),
        };

        assert!(Subscription::try_from(row).is_err());
    }
}
