#![allow(dead_code)]

use axum::{Extension, Router};
use featstore_metadata::api::{self, ApiState};
use featstore_metadata::error::{ProxyError, Result};
use featstore_metadata::models::{Feature, ResourceType};
use featstore_metadata::proxy::{InMemoryProxy, ProxyClient};
use featstore_test_support::TestServer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const FEATURE_URI: &str = "db://c.s/t/f1";

pub fn sample_feature() -> Feature {
    Feature {
        key: FEATURE_URI.to_string(),
        name: "f1".to_string(),
        version: "2".to_string(),
        feature_group: "clicks".to_string(),
        data_type: Some("float".to_string()),
        description: Some("hourly count of clicks".to_string()),
        ..Feature::default()
    }
}

pub fn app_with(proxy: Arc<dyn ProxyClient>) -> Router {
    api::router().layer(Extension(Arc::new(ApiState { proxy })))
}

/// Serve the API over an in-memory proxy seeded with [`sample_feature`].
pub async fn serve_seeded() -> anyhow::Result<TestServer> {
    let proxy = InMemoryProxy::new();
    proxy.insert_feature(sample_feature());
    featstore_test_support::serve(app_with(Arc::new(proxy))).await
}

/// Percent-encode a feature URI for use as a single path segment.
pub fn encode_uri(uri: &str) -> String {
    uri.replace('%', "%25")
        .replace(':', "%3A")
        .replace('/', "%2F")
}

/// Proxy where every store call fails with an internal error.
pub struct BrokenProxy;

#[async_trait::async_trait]
impl ProxyClient for BrokenProxy {
    async fn get_feature(&self, _feature_uri: &str) -> Result<Feature> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn get_resource_description(
        &self,
        _resource_type: ResourceType,
        _uri: &str,
    ) -> Result<Option<String>> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn put_resource_description(
        &self,
        _resource_type: ResourceType,
        _uri: &str,
        _description: &str,
    ) -> Result<()> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn add_tag(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _tag: &str,
        _tag_type: &str,
    ) -> Result<()> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn delete_tag(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _tag: &str,
        _tag_type: &str,
    ) -> Result<()> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn add_badge(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _badge_name: &str,
        _category: &str,
    ) -> Result<()> {
        Err(ProxyError::Internal("boom".to_string()))
    }

    async fn delete_badge(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _badge_name: &str,
        _category: &str,
    ) -> Result<()> {
        Err(ProxyError::Internal("boom".to_string()))
    }
}

/// Proxy that counts store invocations; every call succeeds.
#[derive(Default)]
pub struct RecordingProxy {
    pub calls: AtomicUsize,
}

impl RecordingProxy {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl ProxyClient for RecordingProxy {
    async fn get_feature(&self, _feature_uri: &str) -> Result<Feature> {
        self.record();
        Ok(sample_feature())
    }

    async fn get_resource_description(
        &self,
        _resource_type: ResourceType,
        _uri: &str,
    ) -> Result<Option<String>> {
        self.record();
        Ok(None)
    }

    async fn put_resource_description(
        &self,
        _resource_type: ResourceType,
        _uri: &str,
        _description: &str,
    ) -> Result<()> {
        self.record();
        Ok(())
    }

    async fn add_tag(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _tag: &str,
        _tag_type: &str,
    ) -> Result<()> {
        self.record();
        Ok(())
    }

    async fn delete_tag(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _tag: &str,
        _tag_type: &str,
    ) -> Result<()> {
        self.record();
        Ok(())
    }

    async fn add_badge(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _badge_name: &str,
        _category: &str,
    ) -> Result<()> {
        self.record();
        Ok(())
    }

    async fn delete_badge(
        &self,
        _id: &str,
        _resource_type: ResourceType,
        _badge_name: &str,
        _category: &str,
    ) -> Result<()> {
        self.record();
        Ok(())
    }
}
