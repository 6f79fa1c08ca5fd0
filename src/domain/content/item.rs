//! Tiered content items (news and blog posts).

use serde::{Deserialize, Serialize};

use crate::domain::access::{AccessTier, Gated};
use crate::domain::foundation::{ContentId, Timestamp, ValidationError};

/// Which editorial stream an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    News,
    BlogPost,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::News => "news",
            ContentKind::BlogPost => "blog_post",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "news" => Some(ContentKind::News),
            "blog_post" => Some(ContentKind::BlogPost),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// URL slug of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Slug(String);

impl Slug {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "slug",
                "only lowercase letters, digits and '-' are allowed",
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A news item or blog post with its publication and tier gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredContentItem {
    pub id: ContentId,
    pub kind: ContentKind,
    pub slug: Slug,
    pub title: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub cover_image_url: Option<String>,
    /// Minimum tier required to read. 0 means everyone.
    #[serde(default)]
    pub min_tier: AccessTier,
    pub published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl Gated for TieredContentItem {
    fn min_tier(&self) -> AccessTier {
        self.min_tier
    }

    fn is_published(&self) -> bool {
        self.published
    }
}
