//! Catalog filtering
//!
//! Pure projections of the catalog used to build every view. Nothing here
//! caches results; the catalog is small enough that filtering on every
//! keystroke is cheaper than tracking invalidation.

use crate::catalog::{AppRecord, CategoryFilter};
use crate::storage::FavoriteSet;

/// Whether `query` should restrict the results at all
pub fn is_search_active(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Case-insensitive substring match against the record name or category token
///
/// The query is lowercased but not trimmed, so inner and surrounding spaces are
/// part of the needle. Callers decide via [`is_search_active`] whether to apply it.
pub fn matches_query(record: &AppRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    record.name.to_lowercase().contains(&needle)
        || record.category.as_str().to_lowercase().contains(&needle)
}

/// Records passing both the category filter and the search query, in catalog order
pub fn filter_apps<'a>(
    records: &'a [AppRecord],
    category: CategoryFilter,
    query: &str,
) -> Vec<&'a AppRecord> {
    let search = is_search_active(query);

    records
        .iter()
        .filter(|record| category.matches(record.category))
        .filter(|record| !search || matches_query(record, query))
        .collect()
}

/// Records whose id is in `favorites`, in catalog order
///
/// Ids with no catalog record are skipped.
pub fn favorite_apps<'a>(records: &'a [AppRecord], favorites: &FavoriteSet) -> Vec<&'a AppRecord> {
    records
        .iter()
        .filter(|record| favorites.contains(&record.id))
        .collect()
}
