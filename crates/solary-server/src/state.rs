//! Shared application state injected into all routes.

use solary_core::PortalUrls;

use crate::config::Config;
use crate::persistence::{Database, SqliteRepository};

pub struct AppState {
    repository: SqliteRepository,
    portal_urls: PortalUrls,
}

impl AppState {
    pub fn new(db: Database, config: Config) -> Self {
        Self {
            repository: SqliteRepository::new(db),
            portal_urls: config.portal_urls(),
        }
    }

    pub fn repository(&self) -> &SqliteRepository {
        &self.repository
    }

    pub fn portal_urls(&self) -> &PortalUrls {
        &self.portal_urls
    }
}
