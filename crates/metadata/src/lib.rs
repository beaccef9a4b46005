//! Feature metadata catalog REST service.
//!
//! Thin resource handlers over a pluggable metadata store proxy: feature
//! retrieval, description editing, tag and badge management. The store itself
//! lives behind the [`proxy::ProxyClient`] trait; this crate only translates
//! store outcomes into HTTP responses.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod proxy;
