//! Catalogue search
//!
//! Case-insensitive substring matching over the fixed catalogue, plus the
//! bounded recent-searches list. Any simulated network latency lives at the
//! frontend boundary; the matching itself is synchronous and pure.

use crate::models::CatalogueEntry;

/// Maximum number of remembered search queries
pub const RECENT_SEARCH_LIMIT: usize = 5;

/// Filter catalogue entries whose name or city contains the query.
///
/// Matching is case-insensitive and preserves catalogue order; there is no
/// ranking or fuzzy matching. An empty or whitespace-only query yields no
/// matches.
pub fn search_catalogue<'a>(query: &str, entries: &'a [CatalogueEntry]) -> Vec<&'a CatalogueEntry> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            entry.name.to_lowercase().contains(&needle)
                || entry.city.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Record an executed query in the recent-searches list.
///
/// Removes any prior occurrence of the identical string, prepends the query,
/// and truncates to [`RECENT_SEARCH_LIMIT`]. Most recent first.
pub fn remember_query(recent: &mut Vec<String>, query: &str) {
    recent.retain(|s| s != query);
    recent.insert(0, query.to_string());
    recent.truncate(RECENT_SEARCH_LIMIT);
}
