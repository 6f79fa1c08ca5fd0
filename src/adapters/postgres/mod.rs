//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresSubscriptionReader` - Current subscription lookups
//! - `PostgresContentReader` - Gated news and blog listings
//! - `PostgresVenueReader` / `PostgresEventReader` - Geo entity listings

mod content_reader;
mod geo_entity_reader;
mod subscription_reader;

pub use content_reader::PostgresContentReader;
pub use geo_entity_reader::{PostgresEventReader, PostgresVenueReader};
pub use subscription_reader::PostgresSubscriptionReader;

use crate::domain::foundation::{DomainError, ListOptions};

/// Maps a sqlx failure onto a `DatabaseError` with context.
fn db_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::database(format!("{}: {}", context, e))
}

/// `(LIMIT, OFFSET)` bind values. A `NULL` limit returns every row.
fn to_sql_window(options: ListOptions) -> Result<(Option<i64>, i64), DomainError> {
    let limit = options
        .limit
        .map(i64::try_from)
        .transpose()
        .map_err(|_| DomainError::validation("page_size", "Page size is too large"))?;
    let offset = i64::try_from(options.offset.unwrap_or(0))
        .map_err(|_| DomainError::validation("page", "Page number is too large"))?;
    Ok((limit, offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpaginated_window_has_null_limit() {
        assert_eq!(to_sql_window(ListOptions::unpaginated()).unwrap(), (None, 0));
    }

    #[test]
    fn paginated_window_binds_both() {
        let options = ListOptions {
            limit: Some(20),
            offset: Some(40),
        };
        assert_eq!(to_sql_window(options).unwrap(), (Some(20), 40));
    }

    #[test]
    fn oversized_offset_is_validation_error() {
        let options = ListOptions {
            limit: Some(1),
            offset: Some(u64::MAX),
        };
        assert!(to_sql_window(options).is_err());
    }
}
