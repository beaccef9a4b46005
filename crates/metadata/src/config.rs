//! Service configuration (flags + environment).

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Which store proxy backs the service.
///
/// Production graph-store backends plug in here; only the in-memory proxy
/// ships with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProxyBackend {
    Memory,
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "featstore-metadata",
    about = "Feature metadata catalog REST service"
)]
pub struct ServiceConfig {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "FEATSTORE_BIND", default_value = "127.0.0.1:5002")]
    pub bind: SocketAddr,

    /// Emit logs as JSON (one object per line).
    #[arg(long, env = "FEATSTORE_LOG_JSON", default_value_t = false)]
    pub log_json: bool,

    /// Backing metadata store implementation.
    #[arg(long, env = "FEATSTORE_PROXY", value_enum, default_value = "memory")]
    pub proxy: ProxyBackend,
}
