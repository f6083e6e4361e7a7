//! Rendering of batch results for human and machine consumption.

use crate::batch::ResolutionResult;

/// Comma-joined resolved identifiers, unresolved entries omitted, resolved
/// order preserved.
pub fn comma_separated_ids(results: &[ResolutionResult]) -> String {
    results
        .iter()
        .filter_map(|result| result.object_id)
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Number of entries that resolved to an identifier.
pub fn resolved_count(results: &[ResolutionResult]) -> usize {
    results
        .iter()
        .filter(|result| result.object_id.is_some())
        .count()
}

/// Pretty JSON dump of the full result sequence, unresolved and errored
/// entries included.
pub fn results_json(results: &[ResolutionResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
