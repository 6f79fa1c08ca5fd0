//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    GetContentHandler, GetGeoEntityHandler, ListContentHandler, ListGeoEntitiesHandler,
    ResolveViewerTierHandler, ResolveViewerTierQuery, ViewerAccess,
};
use crate::config::ListingConfig;
use crate::domain::access::Viewer;
use crate::domain::content::ContentError;
use crate::domain::geo::{Event, Venue};
use crate::ports::{ContentReader, EventReader, SubscriptionReader, VenueReader};

/// Arc-wrapped ports plus listing limits, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub subscription_reader: Arc<dyn SubscriptionReader>,
    pub content_reader: Arc<dyn ContentReader>,
    pub venue_reader: Arc<VenueReader>,
    pub event_reader: Arc<EventReader>,
    pub listing: Arc<ListingConfig>,
}

impl AppState {
    pub fn resolve_viewer_tier_handler(&self) -> ResolveViewerTierHandler {
        ResolveViewerTierHandler::new(self.subscription_reader.clone())
    }

    pub fn list_content_handler(&self) -> ListContentHandler {
        ListContentHandler::new(self.content_reader.clone())
    }

    pub fn get_content_handler(&self) -> GetContentHandler {
        GetContentHandler::new(self.content_reader.clone())
    }

    pub fn list_venues_handler(&self) -> ListGeoEntitiesHandler<Venue> {
        ListGeoEntitiesHandler::new(self.venue_reader.clone())
    }

    pub fn get_venue_handler(&self) -> GetGeoEntityHandler<Venue> {
        GetGeoEntityHandler::new(self.venue_reader.clone())
    }

    pub fn list_events_handler(&self) -> ListGeoEntitiesHandler<Event> {
        ListGeoEntitiesHandler::new(self.event_reader.clone())
    }

    pub fn get_event_handler(&self) -> GetGeoEntityHandler<Event> {
        GetGeoEntityHandler::new(self.event_reader.clone())
    }

    /// Resolves tier and management capability for one request.
    pub async fn viewer_access(&self, viewer: Viewer) -> Result<ViewerAccess, ContentError> {
        self.resolve_viewer_tier_handler()
            .handle(ResolveViewerTierQuery { viewer })
            .await
    }

    /// Locale to overlay, or `None` when the stored values already match.
    pub fn overlay_locale(&self, requested: Option<String>) -> Option<String> {
        requested
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty() && self.listing.needs_overlay(l))
    }
}
