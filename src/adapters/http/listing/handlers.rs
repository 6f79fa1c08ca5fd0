//! HTTP handlers for venue and event listings.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::application::handlers::{
    GetGeoEntityHandler, GetGeoEntityQuery, ListGeoEntitiesHandler, ListGeoEntitiesQuery,
};
use crate::domain::geo::{GeoEntity, ListingPage, Located};

use super::super::error::ApiError;
use super::super::query::Query;
use super::super::state::AppState;
use super::dto::{unlocated, EventResponse, GeoListParams, LocaleParams, VenueResponse};

async fn list<T, R>(
    state: &AppState,
    handler: ListGeoEntitiesHandler<T>,
    params: GeoListParams,
) -> Result<ListingPage<R>, ApiError>
where
    T: GeoEntity,
    R: From<Located<T>>,
{
    let geo = params.to_geo_query(state.listing.default_page_size, state.listing.max_page_size)?;
    let locale = state.overlay_locale(params.locale);

    let page = handler.handle(ListGeoEntitiesQuery { geo, locale }).await?;

    Ok(page.map(R::from))
}

async fn get<T, R>(
    state: &AppState,
    handler: GetGeoEntityHandler<T>,
    slug: String,
    params: LocaleParams,
) -> Result<R, ApiError>
where
    T: GeoEntity,
    R: From<Located<T>>,
{
    let locale = state.overlay_locale(params.locale);
    let entity = handler.handle(GetGeoEntityQuery { slug, locale }).await?;
    Ok(R::from(unlocated(entity)))
}

/// GET /api/venues
pub async fn list_venues(
    State(state): State<AppState>,
    Query(params): Query<GeoListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page: ListingPage<VenueResponse> = list(&state, state.list_venues_handler(), params).await?;
    Ok(Json(page))
}

/// GET /api/venues/:slug
pub async fn get_venue(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<impl IntoResponse, ApiError> {
    let venue: VenueResponse = get(&state, state.get_venue_handler(), slug, params).await?;
    Ok(Json(venue))
}

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<GeoListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page: ListingPage<EventResponse> = list(&state, state.list_events_handler(), params).await?;
    Ok(Json(page))
}

/// GET /api/events/:slug
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(params): Query<LocaleParams>,
) -> Result<impl IntoResponse, ApiError> {
    let event: EventResponse = get(&state, state.get_event_handler(), slug, params).await?;
    Ok(Json(event))
}
