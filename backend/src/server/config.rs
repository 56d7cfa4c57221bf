//! HTTP server configuration object.

use std::net::SocketAddr;

use trivia::outbound::persistence::DbPool;

/// Listener address and database pool for the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    /// Construct a configuration listening on `bind_addr` and serving data
    /// from `db_pool`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
