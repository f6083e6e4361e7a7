//! Catalog service abstractions and concrete implementations.

pub mod met;

use thiserror::Error;

/// Object detail payload returned by catalog lookups.
#[derive(Debug, Clone, Default)]
pub struct ObjectRecord {
    pub title: String,
    pub artist_display_name: String,
}

/// Failure classes reported by catalog calls.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// The service rejected the call for exceeding its request-rate limit.
    #[error("catalog request was rate limited")]
    Throttled,
    /// Connectivity, timeout, server, or payload failure.
    #[error("catalog request failed: {0}")]
    Transport(String),
}

/// Interface implemented by concrete catalog service clients.
pub trait CatalogService {
    /// Searches for objects matching `title`, most relevant first.
    fn search_by_title(&self, title: &str) -> Result<Vec<u64>, CatalogError>;

    /// Fetches the detail record for one object identifier.
    fn fetch_object(&self, object_id: u64) -> Result<ObjectRecord, CatalogError>;
}
