//! Distance-aware listing: augment, filter, sort, and paginate.
//!
//! Two pagination strategies exist and each has its own result shape:
//!
//! - **Storage**: offset/limit applied by the storage port; distance is
//!   computed and filtered on the returned page only. The page reports
//!   `storage_total`, the pre-distance-filter count.
//! - **In-memory**: storage returns the full eligible set, which is
//!   distance-filtered, sorted ascending, then sliced. The page reports
//!   `matched_total`, the post-filter count.
//!
//! The in-memory path materializes every candidate for the request. Venue and
//! event sets are small and bounded, which is what makes this acceptable.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Fetched, ListOptions, PageRequest, StoragePage, ValidationError};

use super::{Coordinates, GeoTagged};

/// An entity paired with its distance from the request's reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Located<T> {
    #[serde(flatten)]
    pub item: T,
    /// Kilometers from the reference point; `None` without one.
    pub distance_km: Option<f64>,
}

impl<T> Located<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Located<U> {
        Located {
            item: f(self.item),
            distance_km: self.distance_km,
        }
    }
}

/// Computes each entity's distance from `reference`.
pub fn with_distance<T: GeoTagged>(entities: Vec<T>, reference: Option<Coordinates>) -> Vec<Located<T>> {
    entities
        .into_iter()
        .map(|item| {
            let distance_km = reference.map(|origin| origin.distance_to(&item.coordinates()));
            Located { item, distance_km }
        })
        .collect()
}

/// Keeps entities within `max_distance_km`. Identity when no limit is given.
///
/// Entities without a computed distance never pass a limit.
pub fn filter_by_max_distance<T>(located: Vec<Located<T>>, max_distance_km: Option<f64>) -> Vec<Located<T>> {
    let Some(max) = max_distance_km else {
        return located;
    };
    located
        .into_iter()
        .filter(|entry| matches!(entry.distance_km, Some(d) if d <= max))
        .collect()
}

/// Stable ascending sort by distance with unknown distances last.
pub fn sort_by_distance<T>(located: &mut [Located<T>]) {
    located.sort_by(|a, b| match (a.distance_km, b.distance_km) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

/// Which pagination strategy a query runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStrategy {
    Storage,
    InMemory,
}

/// Validated listing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoQuery {
    reference: Option<Coordinates>,
    max_distance_km: Option<f64>,
    sort_by_distance: bool,
    page: PageRequest,
}

impl GeoQuery {
    /// Validates the parameter combination.
    ///
    /// A distance limit requires a reference point and must be a finite,
    /// non-negative number of kilometers.
    pub fn new(
        reference: Option<Coordinates>,
        max_distance_km: Option<f64>,
        sort_by_distance: bool,
        page: PageRequest,
    ) -> Result<Self, ValidationError> {
        if let Some(max) = max_distance_km {
            if reference.is_none() {
                return Err(ValidationError::missing_dependency(
                    "max_distance_km",
                    "lat/lng reference point",
                ));
            }
            if !max.is_finite() || max < 0.0 {
                return Err(ValidationError::out_of_range(
                    "max_distance_km",
                    0.0,
                    f64::MAX,
                    max,
                ));
            }
        }
        Ok(Self {
            reference,
            max_distance_km,
            sort_by_distance,
            page,
        })
    }

    pub fn reference(&self) -> Option<Coordinates> {
        self.reference
    }

    pub fn max_distance_km(&self) -> Option<f64> {
        self.max_distance_km
    }

    pub fn page(&self) -> PageRequest {
        self.page
    }

    /// In-memory only when sorting by distance from an actual reference point.
    pub fn strategy(&self) -> PaginationStrategy {
        if self.sort_by_distance && self.reference.is_some() {
            PaginationStrategy::InMemory
        } else {
            PaginationStrategy::Storage
        }
    }

    /// What to ask storage for under this query's strategy.
    pub fn list_options(&self) -> ListOptions {
        match self.strategy() {
            PaginationStrategy::Storage => self.page.to_list_options(),
            PaginationStrategy::InMemory => ListOptions::unpaginated(),
        }
    }
}

/// A page sliced in memory after sorting by distance.
///
/// `matched_total` counts entities that survived the distance filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistancePage<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub matched_total: u64,
    pub has_more: bool,
}

impl<T> DistancePage<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> DistancePage<U> {
        DistancePage {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            page_size: self.page_size,
            matched_total: self.matched_total,
            has_more: self.has_more,
        }
    }
}

/// Result of a listing request, tagged by the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pagination", rename_all = "snake_case")]
pub enum ListingPage<T> {
    Storage(StoragePage<T>),
    DistanceSorted(DistancePage<T>),
}

impl<T> ListingPage<T> {
    pub fn items(&self) -> &[T] {
        match self {
            ListingPage::Storage(page) => &page.items,
            ListingPage::DistanceSorted(page) => &page.items,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListingPage<U> {
        match self {
            ListingPage::Storage(page) => ListingPage::Storage(page.map(f)),
            ListingPage::DistanceSorted(page) => ListingPage::DistanceSorted(page.map(f)),
        }
    }
}

/// Storage strategy: decorate and filter the page storage already cut.
pub fn paginate_from_storage<T: GeoTagged>(
    fetched: Fetched<T>,
    query: &GeoQuery,
) -> StoragePage<Located<T>> {
    let located = with_distance(fetched.items, query.reference());
    let kept = filter_by_max_distance(located, query.max_distance_km());
    StoragePage::new(kept, query.page(), fetched.total)
}

/// In-memory strategy: decorate, filter, sort, then slice the full set.
pub fn sort_and_paginate<T: GeoTagged>(entities: Vec<T>, query: &GeoQuery) -> DistancePage<Located<T>> {
    let located = with_distance(entities, query.reference());
    let mut kept = filter_by_max_distance(located, query.max_distance_km());
    sort_by_distance(&mut kept);

    let matched_total = kept.len() as u64;
    let page = query.page();
    let has_more = page.skip() + page.take() < matched_total;
    DistancePage {
        items: page.slice(kept),
        page: page.page(),
        page_size: page.page_size(),
        matched_total,
        has_more,
    }
}

/// Runs whichever strategy the query selects over rows fetched with
/// [`GeoQuery::list_options`].
pub fn assemble_page<T: GeoTagged>(fetched: Fetched<T>, query: &GeoQuery) -> ListingPage<Located<T>> {
    match query.strategy() {
        PaginationStrategy::Storage => ListingPage::Storage(paginate_from_storage(fetched, query)),
        PaginationStrategy::InMemory => {
            ListingPage::DistanceSorted(sort_and_paginate(fetched.items, query))
        }
    }
}
