//! HTTP DTOs for the viewer tier endpoint.

use serde::{Deserialize, Serialize};

use crate::application::handlers::ViewerAccess;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerTierResponse {
    pub authenticated: bool,
    pub tier: u8,
    pub manage_content: bool,
}

impl ViewerTierResponse {
    pub fn new(authenticated: bool, access: ViewerAccess) -> Self {
        Self {
            authenticated,
            tier: access.tier.rank(),
            manage_content: access.manage_content,
        }
    }
}
