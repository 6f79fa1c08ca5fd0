//! PostgreSQL implementation of ContentReader.
//!
//! The gating predicate is evaluated in SQL so `LIMIT/OFFSET` and the count
//! both see only admitted rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::access::{AccessTier, Visibility};
use crate::domain::content::{ContentKind, Slug, TieredContentItem};
use crate::domain::foundation::{ContentId, DomainError, Fetched, ListOptions, Timestamp};
use crate::ports::ContentReader;

use super::{db_error, to_sql_window};

/// PostgreSQL implementation of the ContentReader port.
pub struct PostgresContentReader {
    pool: PgPool,
}

impl PostgresContentReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ContentRow {
    id: Uuid,
    kind: String,
    slug: String,
    title: String,
    excerpt: Option<String>,
    body: String,
    cover_image_url: Option<String>,
    min_tier: i16,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ContentRow> for TieredContentItem {
    type Error = DomainError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        let kind = ContentKind::parse(&row.kind)
            .ok_or_else(|| DomainError::database(format!("Invalid content kind: {}", row.kind)))?;
        let slug = Slug::new(row.slug)
            .map_err(|e| DomainError::database(format!("Invalid stored slug: {}", e)))?;
        let min_tier = u8::try_from(row.min_tier)
            .map_err(|_| DomainError::database(format!("Invalid min_tier: {}", row.min_tier)))?;

        Ok(TieredContentItem {
            id: ContentId::from_uuid(row.id),
            kind,
            slug,
            title: row.title,
            excerpt: row.excerpt,
            body: row.body,
            cover_image_url: row.cover_image_url,
            min_tier: AccessTier::new(min_tier),
            published: row.published,
            published_at: row.published_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

/// `(bypass, max_tier)` bind values for the gating predicate.
fn gate_binds(visibility: Visibility) -> (bool, i16) {
    match visibility {
        Visibility::Everything => (true, i16::MAX),
        Visibility::PublishedUpTo { max_tier } => (false, i16::from(max_tier.rank())),
    }
}

#[async_trait]
impl ContentReader for PostgresContentReader {
    async fn list(
        &self,
        kind: ContentKind,
        visibility: Visibility,
        options: ListOptions,
    ) -> Result<Fetched<TieredContentItem>, DomainError> {
        let (bypass, max_tier) = gate_binds(visibility);
        let (limit, offset) = to_sql_window(options)?;

        let rows: Vec<ContentRow> = sqlx::query_as(
            r#"
            SELECT id, kind, slug, title, excerpt, body, cover_image_url,
                   min_tier, published, published_at, created_at
            FROM content_items
            WHERE kind = $1 AND ($2 OR (published AND min_tier <= $3))
            ORDER BY published_at DESC NULLS LAST, created_at DESC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(kind.as_str())
        .bind(bypass)
        .bind(max_tier)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list content"))?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM content_items
            WHERE kind = $1 AND ($2 OR (published AND min_tier <= $3))
            "#,
        )
        .bind(kind.as_str())
        .bind(bypass)
        .bind(max_tier)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("Failed to count content"))?;

        let items = rows
            .into_iter()
            .map(TieredContentItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Fetched {
            items,
            total: total.max(0) as u64,
        })
    }

    async fn find_by_slug(
        &self,
        kind: ContentKind,
        slug: &str,
    ) -> Result<Option<TieredContentItem>, DomainError> {
        let row: Option<ContentRow> = sqlx::query_as(
            r#"
            SELECT id, kind, slug, title, excerpt, body, cover_image_url,
                   min_tier, published, published_at, created_at
            FROM content_items
            WHERE kind = $1 AND slug = $2
            "#,
        )
        .bind(kind.as_str())
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to get content"))?;

        row.map(TieredContentItem::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(min_tier: i16) -> ContentRow {
        ContentRow {
            id: Uuid::new_v4(),
            kind: "blog_post".to_string(),
            slug: "launch-control".to_string(),
            title: "Launch control".to_string(),
            excerpt: None,
            body: "...".to_string(),
            cover_image_url: None,
            min_tier,
            published: true,
            published_at: Some(Utc::now()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn converts_valid_row() {
        let item = TieredContentItem::try_from(row(2)).unwrap();
        assert_eq!(item.kind, ContentKind::BlogPost);
        assert_eq!(item.min_tier, AccessTier::new(2));
    }

    #[test]
    fn negative_min_tier_is_rejected() {
        assert!(TieredContentItem::try_from(row(-1)).is_err());
    }

    #[test]
    fn manager_binds_bypass() {
        assert!(gate_binds(Visibility::Everything).0);
        assert_eq!(
            gate_binds(Visibility::PublishedUpTo {
                max_tier: AccessTier::new(1)
            }),
            (false, 1)
        );
    }
}
