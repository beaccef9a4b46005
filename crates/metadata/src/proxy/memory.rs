//! In-memory store proxy for local development and tests.

use crate::error::{ProxyError, Result};
use crate::models::{Badge, Feature, ResourceType, Tag};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

use super::ProxyClient;

#[derive(Debug, Default)]
struct FeatureRecord {
    feature: Feature,
    description: Option<String>,
    tags: Vec<Tag>,
    badges: Vec<Badge>,
}

/// Metadata store held in process memory, keyed by feature URI.
///
/// Only the `Feature` resource kind is populated; lookups for other kinds
/// report `NotFound` like any unknown URI would.
#[derive(Default)]
pub struct InMemoryProxy {
    features: RwLock<HashMap<String, FeatureRecord>>,
}

impl InMemoryProxy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a feature, keyed by `feature.key`. Replaces any existing record
    /// with the same key.
    pub fn insert_feature(&self, feature: Feature) {
        let mut map = self.features.write();
        let description = feature.description.clone();
        let tags = feature.tags.clone();
        let badges = feature.badges.clone();
        map.insert(
            feature.key.clone(),
            FeatureRecord {
                feature,
                description,
                tags,
                badges,
            },
        );
    }
}

#[async_trait]
impl ProxyClient for InMemoryProxy {
    async fn get_feature(&self, feature_uri: &str) -> Result<Feature> {
        let map = self.features.read();
        let record = map.get(feature_uri).ok_or(ProxyError::NotFound)?;
        let mut feature = record.feature.clone();
        feature.description = record.description.clone();
        feature.tags = record.tags.clone();
        feature.badges = record.badges.clone();
        Ok(feature)
    }

    async fn get_resource_description(
        &self,
        _resource_type: ResourceType,
        uri: &str,
    ) -> Result<Option<String>> {
        let map = self.features.read();
        let record = map.get(uri).ok_or(ProxyError::NotFound)?;
        Ok(record.description.clone())
    }

    async fn put_resource_description(
        &self,
        _resource_type: ResourceType,
        uri: &str,
        description: &str,
    ) -> Result<()> {
        let mut map = self.features.write();
        let record = map.get_mut(uri).ok_or(ProxyError::NotFound)?;
        record.description = Some(description.to_string());
        Ok(())
    }

    async fn add_tag(
        &self,
        id: &str,
        _resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Result<()> {
        let mut map = self.features.write();
        let record = map.get_mut(id).ok_or(ProxyError::NotFound)?;
        let exists = record
            .tags
            .iter()
            .any(|t| t.tag_name == tag && t.tag_type == tag_type);
        if !exists {
            record.tags.push(Tag {
                tag_name: tag.to_string(),
                tag_type: tag_type.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_tag(
        &self,
        id: &str,
        _resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Result<()> {
        let mut map = self.features.write();
        let record = map.get_mut(id).ok_or(ProxyError::NotFound)?;
        record
            .tags
            .retain(|t| !(t.tag_name == tag && t.tag_type == tag_type));
        Ok(())
    }

    async fn add_badge(
        &self,
        id: &str,
        _resource_type: ResourceType,
        badge_name: &str,
        category: &str,
    ) -> Result<()> {
        let mut map = self.features.write();
        let record = map.get_mut(id).ok_or(ProxyError::NotFound)?;
        let exists = record
            .badges
            .iter()
            .any(|b| b.badge_name == badge_name && b.category == category);
        if !exists {
            record.badges.push(Badge {
                badge_name: badge_name.to_string(),
                category: category.to_string(),
            });
        }
        Ok(())
    }

    async fn delete_badge(
        &self,
        id: &str,
        _resource_type: ResourceType,
        badge_name: &str,
        category: &str,
    ) -> Result<()> {
        let mut map = self.features.write();
        let record = map.get_mut(id).ok_or(ProxyError::NotFound)?;
        record
            .badges
            .retain(|b| !(b.badge_name == badge_name && b.category == category));
        Ok(())
    }
}
