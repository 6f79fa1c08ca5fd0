//! Per-request viewer identity and capabilities.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;

/// Capability flags granted by the auth provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Content management: bypasses publication and tier gating.
    ManageContent,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ManageContent => "manage_content",
        }
    }

    /// Parses a permission name. Unknown names are ignored by callers.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "manage_content" => Some(Permission::ManageContent),
            _ => None,
        }
    }
}

/// Who is asking. Immutable for the duration of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewer {
    user_id: Option<UserId>,
    permissions: BTreeSet<Permission>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            permissions: BTreeSet::new(),
        }
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permissions.insert(permission);
        self
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Whether content gating is bypassed for this viewer.
    pub fn can_manage_content(&self) -> bool {
        self.has_permission(Permission::ManageContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_identity_or_permissions() {
        let viewer = Viewer::anonymous();
        assert!(viewer.is_anonymous());
        assert!(!viewer.can_manage_content());
    }

    #[test]
    fn manage_content_grants_bypass() {
        let viewer = Viewer::authenticated(UserId::new("editor").unwrap())
            .with_permission(Permission::ManageContent);
        assert!(viewer.can_manage_content());
        assert_eq!(Permission::ManageContent.as_str(), "manage_content");
    }

    #[test]
    fn permission_names_parse() {
        assert_eq!(Permission::parse("manage_content"), Some(Permission::ManageContent));
        assert_eq!(Permission::parse(" manage_content "), Some(Permission::ManageContent));
        assert_eq!(Permission::parse("root"), None);
    }
}
