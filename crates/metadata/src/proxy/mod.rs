//! Backing metadata store contract.
//!
//! The store that owns and persists catalog entities is external to this
//! service; everything it exposes to the REST layer goes through
//! [`ProxyClient`]. Handlers hold an injected `Arc<dyn ProxyClient>` rather
//! than reaching for a process-wide accessor.

use crate::error::Result;
use crate::models::{Feature, ResourceType};
use async_trait::async_trait;

mod memory;

pub use memory::InMemoryProxy;

/// Operations the REST layer needs from a metadata store.
///
/// Implementations signal outcomes through [`crate::error::ProxyError`];
/// `NotFound` is the only variant handlers distinguish, everything else is a
/// store-side failure.
#[async_trait]
pub trait ProxyClient: Send + Sync {
    /// Look up a feature by its URI key.
    async fn get_feature(&self, feature_uri: &str) -> Result<Feature>;

    /// Fetch the description attached to `(resource_type, uri)`.
    ///
    /// A resource can exist with no description; that is `Ok(None)`, not
    /// `NotFound`.
    async fn get_resource_description(
        &self,
        resource_type: ResourceType,
        uri: &str,
    ) -> Result<Option<String>>;

    /// Create or replace the description attached to `(resource_type, uri)`.
    async fn put_resource_description(
        &self,
        resource_type: ResourceType,
        uri: &str,
        description: &str,
    ) -> Result<()>;

    /// Attach a tag to a resource. Adding an already-present tag is a no-op.
    async fn add_tag(
        &self,
        id: &str,
        resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Result<()>;

    /// Detach a tag from a resource.
    async fn delete_tag(
        &self,
        id: &str,
        resource_type: ResourceType,
        tag: &str,
        tag_type: &str,
    ) -> Result<()>;

    /// Attach a badge to a resource. Re-adding an existing badge is a no-op.
    async fn add_badge(
        &self,
        id: &str,
        resource_type: ResourceType,
        badge_name: &str,
        category: &str,
    ) -> Result<()>;

    /// Detach a badge from a resource.
    async fn delete_badge(
        &self,
        id: &str,
        resource_type: ResourceType,
        badge_name: &str,
        category: &str,
    ) -> Result<()>;
}
