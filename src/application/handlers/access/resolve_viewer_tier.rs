//! ResolveViewerTierHandler - Query handler computing a viewer's access tier.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::access::{resolve_tier, AccessTier, Subscription, Viewer};
use crate::domain::content::ContentError;
use crate::ports::SubscriptionReader;

/// Query to resolve the tier of the requesting viewer.
#[derive(Debug, Clone)]
pub struct ResolveViewerTierQuery {
    pub viewer: Viewer,
}

/// What the viewer may see, resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewerAccess {
    pub tier: AccessTier,
    pub manage_content: bool,
}

impl ViewerAccess {
    /// Access of a viewer with no subscription and no permissions.
    pub fn anonymous() -> Self {
        Self {
            tier: AccessTier::OPEN,
            manage_content: false,
        }
    }
}

/// Handler resolving subscription tier and management capability.
///
/// Anonymous viewers never touch storage. Storage failures propagate; only
/// the absence of a subscription degrades to tier 0.
pub struct ResolveViewerTierHandler {
    reader: Arc<dyn SubscriptionReader>,
}

impl ResolveViewerTierHandler {
    pub fn new(reader: Arc<dyn SubscriptionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ResolveViewerTierQuery) -> Result<ViewerAccess, ContentError> {
        let manage_content = query.viewer.can_manage_content();

        let Some(user_id) = query.viewer.user_id() else {
            return Ok(ViewerAccess {
                manage_content,
                ..ViewerAccess::anonymous()
            });
        };

        let subscription = self
            .reader
            .current_for_user(user_id)
            .await?
            .filter(Subscription::is_current);

        let tier = resolve_tier(subscription.as_ref());
        debug!(user_id = %user_id, tier = tier.rank(), manage_content, "Resolved viewer tier");

        Ok(ViewerAccess {
            tier,
            manage_content,
        })
    }
}
