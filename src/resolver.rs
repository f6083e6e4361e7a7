//! Title-to-identifier resolution with retry, backoff, and disambiguation.

use std::thread;
use std::time::Duration;

use log::{debug, info, warn};
use rand::RngExt;
use thiserror::Error;

use crate::catalog::{CatalogError, CatalogService};

/// Cap on detail fetches per query, to bound sub-request fan-out.
const CANDIDATE_SCAN_CAP: usize = 20;

/// One title lookup request.
#[derive(Debug, Clone)]
pub struct Query {
    pub title: String,
    pub artist: Option<String>,
}

impl Query {
    /// Creates a query from a title and optional artist name.
    pub fn new(title: &str, artist: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.map(str::to_string),
        }
    }
}

/// Attempt budget and delays applied by [`Resolver`].
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Search attempts per query before giving up.
    pub max_retries: u32,
    /// Per-attempt backoff increment after a throttled search.
    pub throttle_backoff_base: Duration,
    /// Jitter range added to the throttle backoff, to avoid synchronized
    /// retry storms across concurrent callers.
    pub throttle_jitter_min: Duration,
    pub throttle_jitter_max: Duration,
    /// Fixed delay before retrying a search that failed in transport.
    pub transport_retry_delay: Duration,
    /// Pacing delay before each candidate detail fetch.
    pub fetch_pacing_delay: Duration,
    /// Fixed wait after a throttled detail fetch, before skipping on.
    pub fetch_throttle_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            throttle_backoff_base: Duration::from_secs(5),
            throttle_jitter_min: Duration::from_secs(1),
            throttle_jitter_max: Duration::from_secs(3),
            transport_retry_delay: Duration::from_secs(3),
            fetch_pacing_delay: Duration::from_millis(300),
            fetch_throttle_delay: Duration::from_secs(3),
        }
    }
}

impl RetryPolicy {
    /// Backoff for a throttled search: linear in the attempt count plus
    /// uniform jitter.
    fn throttle_backoff(&self, attempt: u32) -> Duration {
        let base = self.throttle_backoff_base * (attempt + 1);
        let jitter = if self.throttle_jitter_max > self.throttle_jitter_min {
            let secs = rand::rng().random_range(
                self.throttle_jitter_min.as_secs_f64()..=self.throttle_jitter_max.as_secs_f64(),
            );
            Duration::from_secs_f64(secs)
        } else {
            self.throttle_jitter_min
        };
        base + jitter
    }
}

/// Terminal failure raised after transport retries are exhausted.
#[derive(Debug, Error)]
#[error("catalog service unavailable for '{title}': {source}")]
pub struct ServiceError {
    pub title: String,
    #[source]
    pub source: CatalogError,
}

/// Resolves title queries against one catalog service.
pub struct Resolver<S: CatalogService> {
    service: S,
    policy: RetryPolicy,
}

impl<S: CatalogService> Resolver<S> {
    /// Creates a resolver over `service` with the given retry policy.
    pub fn new(service: S, policy: RetryPolicy) -> Self {
        Self { service, policy }
    }

    /// Resolves one query to an object identifier, or `None` when the
    /// catalog has no answer.
    ///
    /// Rate limiting is expected and non-fatal: a search throttled past the
    /// retry budget degrades to `Ok(None)`. Other transport failures that
    /// persist past the budget surface as [`ServiceError`].
    pub fn resolve(&self, query: &Query) -> Result<Option<u64>, ServiceError> {
        for attempt in 0..self.policy.max_retries {
            let transport_err = match self.service.search_by_title(&query.title) {
                Ok(candidates) => {
                    if candidates.is_empty() {
                        return Ok(None);
                    }
                    match self.disambiguate(query, &candidates) {
                        Ok(object_id) => return Ok(Some(object_id)),
                        // A failed detail fetch restarts the whole attempt,
                        // search included.
                        Err(err) => err,
                    }
                }
                Err(CatalogError::Throttled) => {
                    let wait = self.policy.throttle_backoff(attempt);
                    info!(
                        "Rate limited searching '{}', waiting {:.1}s",
                        query.title,
                        wait.as_secs_f64()
                    );
                    thread::sleep(wait);
                    continue;
                }
                Err(err) => err,
            };

            if attempt + 1 >= self.policy.max_retries {
                return Err(ServiceError {
                    title: query.title.clone(),
                    source: transport_err,
                });
            }
            warn!(
                "Lookup for '{}' failed ({}), retrying",
                query.title, transport_err
            );
            thread::sleep(self.policy.transport_retry_delay);
        }
        // Throttled on every attempt: unresolved, not fatal.
        Ok(None)
    }

    /// Scans a bounded prefix of the candidate list in search order and
    /// returns the first candidate matched by the artist or title rule,
    /// falling back to the top relevance hit. A transport failure on a
    /// detail fetch abandons the scan so the caller can retry the attempt.
    fn disambiguate(&self, query: &Query, candidates: &[u64]) -> Result<u64, CatalogError> {
        for &candidate in candidates.iter().take(CANDIDATE_SCAN_CAP) {
            thread::sleep(self.policy.fetch_pacing_delay);
            let record = match self.service.fetch_object(candidate) {
                Ok(record) => record,
                Err(CatalogError::Throttled) => {
                    debug!("Rate limited fetching object {candidate}, skipping");
                    thread::sleep(self.policy.fetch_throttle_delay);
                    continue;
                }
                Err(err) => return Err(err),
            };

            if let Some(artist) = query.artist.as_deref().filter(|artist| !artist.is_empty()) {
                if record
                    .artist_display_name
                    .to_lowercase()
                    .contains(&artist.to_lowercase())
                {
                    return Ok(candidate);
                }
            }
            if record.title.trim().to_lowercase() == query.title.trim().to_lowercase() {
                return Ok(candidate);
            }
        }
        // No rule matched within the scanned prefix. The top relevance hit
        // is a better answer for an ambiguous title than no answer at all.
        Ok(candidates[0])
    }
}
