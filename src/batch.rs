//! Sequential batch orchestration over a query list.

use std::thread;
use std::time::Duration;

use log::{info, warn};
use serde::Serialize;

use crate::catalog::CatalogService;
use crate::resolver::{Query, Resolver};

/// Outcome of one query. The batch output preserves input order so line N
/// of the report corresponds to item N of the input list.
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionResult {
    pub title: String,
    pub artist: Option<String>,
    #[serde(rename = "objectID")]
    pub object_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pacing applied between queries, a cooperative-throttling contract with
/// the upstream service rather than a performance knob.
#[derive(Debug, Clone)]
pub struct BatchPacing {
    pub inter_query_delay: Duration,
    /// Longer delay after a query that failed, to avoid hammering a
    /// struggling service.
    pub post_error_delay: Duration,
}

impl Default for BatchPacing {
    fn default() -> Self {
        Self {
            inter_query_delay: Duration::from_millis(800),
            post_error_delay: Duration::from_secs(2),
        }
    }
}

/// Runs a resolver over an ordered query sequence.
pub struct BatchRunner<S: CatalogService> {
    resolver: Resolver<S>,
    pacing: BatchPacing,
}

impl<S: CatalogService> BatchRunner<S> {
    /// Creates a runner over `resolver` with the given pacing.
    pub fn new(resolver: Resolver<S>, pacing: BatchPacing) -> Self {
        Self { resolver, pacing }
    }

    /// Resolves every query in input order. A per-item failure is recorded
    /// in that item's result and never aborts the batch.
    pub fn run(&self, queries: &[Query]) -> Vec<ResolutionResult> {
        let mut results = Vec::with_capacity(queries.len());
        for (index, query) in queries.iter().enumerate() {
            match self.resolver.resolve(query) {
                Ok(object_id) => {
                    info!(
                        "{:3}. {:50} => {}",
                        index + 1,
                        truncate_title(&query.title),
                        object_id
                            .map(|id| id.to_string())
                            .unwrap_or_else(|| "not found".to_string())
                    );
                    results.push(ResolutionResult {
                        title: query.title.clone(),
                        artist: query.artist.clone(),
                        object_id,
                        error: None,
                    });
                    thread::sleep(self.pacing.inter_query_delay);
                }
                Err(err) => {
                    warn!(
                        "{:3}. {:50} => ERROR: {}",
                        index + 1,
                        truncate_title(&query.title),
                        err
                    );
                    results.push(ResolutionResult {
                        title: query.title.clone(),
                        artist: query.artist.clone(),
                        object_id: None,
                        error: Some(err.to_string()),
                    });
                    thread::sleep(self.pacing.post_error_delay);
                }
            }
        }
        results
    }
}

fn truncate_title(title: &str) -> String {
    title.chars().take(50).collect()
}
