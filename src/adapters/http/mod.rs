//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter:
//! - `content` - `/api/news`, `/api/blog`
//! - `listing` - `/api/venues`, `/api/events`
//! - `access` - `/api/viewer/tier`

pub mod access;
pub mod content;
pub mod error;
pub mod listing;
mod query;
mod router;
mod state;
pub mod viewer;

pub use error::{ApiError, ErrorResponse};
pub use query::Query;
pub use router::{api_router, app_router, health};
pub use state::AppState;
pub use viewer::ViewerContext;
