//! Catalog entities surfaced by the REST layer.
//!
//! These mirror the store's serialized shapes; the service passes fields
//! through without interpreting them.

use serde::{Deserialize, Serialize};

/// Entity kind used to scope description/tag/badge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Feature,
    Table,
    Dashboard,
    User,
}

impl ResourceType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Feature => "Feature",
            ResourceType::Table => "Table",
            ResourceType::Dashboard => "Dashboard",
            ResourceType::User => "User",
        }
    }
}

/// Free-form label attached to a resource.
///
/// `tag_type` is `"default"` for user tags; `"owner"` tags are derived from
/// ownership data and are not editable through the tag endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub tag_name: String,
    pub tag_type: String,
}

/// Categorized label, distinct from free-form tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub badge_name: String,
    pub category: String,
}

/// A named, versioned data attribute used in ML pipelines.
///
/// Identified by an opaque URI key, conventionally
/// `<db>://<cluster>.<schema>/<table>/<feature>` (not validated here).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub key: String,
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub feature_group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub availability: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owners: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<Badge>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_timestamp: Option<i64>,
}
