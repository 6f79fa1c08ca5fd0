//! PostgreSQL implementations of GeoEntityReader for venues and events.
//!
//! Venues are returned in `(created_at, id)` order and events in
//! `(starts_at, id)` order so storage pagination is stable between
//! requests. Translations live in a `jsonb` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, EventId, Fetched, ListOptions, Timestamp, VenueId};
use crate::domain::geo::{Coordinates, Event, Translations, Venue};
use crate::ports::GeoEntityReader;

use super::{db_error, to_sql_window};

fn coordinates(latitude: f64, longitude: f64) -> Result<Coordinates, DomainError> {
    Coordinates::new(latitude, longitude)
        .map_err(|e| DomainError::database(format!("Invalid stored coordinates: {}", e)))
}

fn translations(value: Option<serde_json::Value>) -> Result<Option<Translations>, DomainError> {
    value
        .filter(|v| !v.is_null())
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| DomainError::database(format!("Invalid translations: {}", e)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Venues
// ════════════════════════════════════════════════════════════════════════════════

/// PostgreSQL venue reader.
pub struct PostgresVenueReader {
    pool: PgPool,
}

impl PostgresVenueReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct VenueRow {
    id: Uuid,
    slug: String,
    name: String,
    description: Option<String>,
    address: Option<String>,
    city: Option<String>,
    latitude: f64,
    longitude: f64,
    translations: Option<serde_json::Value>,
}

impl TryFrom<VenueRow> for Venue {
    type Error = DomainError;

    fn try_from(row: VenueRow) -> Result<Self, Self::Error> {
        Ok(Venue {
            id: VenueId::from_uuid(row.id),
            slug: row.slug,
            name: row.name,
            description: row.description,
            address: row.address,
            city: row.city,
            coordinates: coordinates(row.latitude, row.longitude)?,
            translations: translations(row.translations)?,
        })
    }
}

#[async_trait]
impl GeoEntityReader<Venue> for PostgresVenueReader {
    async fn list(&self, options: ListOptions) -> Result<Fetched<Venue>, DomainError> {
        let (limit, offset) = to_sql_window(options)?;

        let rows: Vec<VenueRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, description, address, city,
                   latitude, longitude, translations
            FROM venues
            ORDER BY created_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list venues"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count venues"))?;

        Ok(Fetched {
            items: rows
                .into_iter()
                .map(Venue::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total: total.max(0) as u64,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Venue>, DomainError> {
        let row: Option<VenueRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, description, address, city,
                   latitude, longitude, translations
            FROM venues
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to get venue"))?;

        row.map(Venue::try_from).transpose()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Events
// ════════════════════════════════════════════════════════════════════════════════

/// PostgreSQL event reader.
pub struct PostgresEventReader {
    pool: PgPool,
}

impl PostgresEventReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    slug: String,
    name: String,
    description: Option<String>,
    location: Option<String>,
    starts_at: DateTime<Utc>,
    latitude: f64,
    longitude: f64,
    translations: Option<serde_json::Value>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Event {
            id: EventId::from_uuid(row.id),
            slug: row.slug,
            name: row.name,
            description: row.description,
            location: row.location,
            starts_at: Timestamp::from_datetime(row.starts_at),
            coordinates: coordinates(row.latitude, row.longitude)?,
            translations: translations(row.translations)?,
        })
    }
}

#[async_trait]
impl GeoEntityReader<Event> for PostgresEventReader {
    async fn list(&self, options: ListOptions) -> Result<Fetched<Event>, DomainError> {
        let (limit, offset) = to_sql_window(options)?;

        let rows: Vec<EventRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, description, location, starts_at,
                   latitude, longitude, translations
            FROM events
            ORDER BY starts_at, id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("Failed to list events"))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("Failed to count events"))?;

        Ok(Fetched {
            items: rows
                .into_iter()
                .map(Event::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            total: total.max(0) as u64,
        })
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, DomainError> {
        let row: Option<EventRow> = sqlx::query_as(
            r#"
            SELECT id, slug, name, description, location, starts_at,
                   latitude, longitude, translations
            FROM events
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("Failed to get event"))?;

        row.map(Event::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::TranslatableField;
    use serde_json::json;

    fn venue_row(latitude: f64, translations: Option<serde_json::Value>) -> VenueRow {
        VenueRow {
            id: Uuid::new_v4(),
            slug: "smolensk-ring".to_string(),
            name: "Smolensk Ring".to_string(),
            description: None,
            address: None,
            city: Some("Smolensk".to_string()),
            latitude,
            longitude: 32.35,
            translations,
        }
    }

    #[test]
    fn decodes_jsonb_translations() {
        let row = venue_row(54.88, Some(json!({"ru": {"name": "Смоленское кольцо"}})));

        let venue = Venue::try_from(row).unwrap();

        let translations = venue.translations.unwrap();
        assert_eq!(
            translations.get("ru", TranslatableField::Name),
            Some("Смоленское кольцо")
        );
    }

    #[test]
    fn json_null_translations_are_none() {
        let venue = Venue::try_from(venue_row(54.88, Some(serde_json::Value::Null))).unwrap();
        assert!(venue.translations.is_none());
    }

    #[test]
    fn malformed_translations_are_rejected() {
        assert!(Venue::try_from(venue_row(54.88, Some(json!(["ru"])))).is_err());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        assert!(Venue::try_from(venue_row(120.0, None)).is_err());
    }
}
