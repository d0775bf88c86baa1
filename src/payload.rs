use crate::config::SearchConfig;
use crate::models::{ParsedQuery, QueryFilters, SearchFilters, SearchPayload};

/// Literal meaning "match everything", for both the query text and any
/// filter dimension.
pub const WILDCARD: &str = "*";

/// Resolve the query text that will actually be searched: the caller's
/// query if non-empty, else the parsed query's text, else the wildcard.
pub fn effective_query(query: &str, parsed: Option<&ParsedQuery>) -> String {
    if !query.is_empty() {
        return query.to_string();
    }
    if let Some(parsed) = parsed {
        if !parsed.query.is_empty() {
            return parsed.query.clone();
        }
    }
    WILDCARD.to_string()
}

/// Build the request payload from the caller's query and parsed filter
/// state.
///
/// Wildcard (or blank) queries ask for everything, so they get the large
/// configured limit instead of the caller's. Filter dimensions containing
/// the wildcard are dropped; if nothing survives, the filters field is
/// omitted entirely.
pub fn build_payload(
    query: &str,
    parsed: Option<&ParsedQuery>,
    config: &SearchConfig,
) -> SearchPayload {
    let effective = effective_query(query, parsed);
    let trimmed = effective.trim();
    let is_wildcard = trimmed == WILDCARD || trimmed.is_empty();

    let limit = if is_wildcard {
        config.wildcard_limit
    } else {
        parsed
            .and_then(|p| p.limit)
            .filter(|l| *l > 0)
            .unwrap_or(config.default_limit)
    };

    let score_threshold = parsed.and_then(|p| p.score_threshold).unwrap_or(0.0);

    let filters = parsed
        .and_then(|p| p.filters.as_ref())
        .and_then(prune_wildcard_filters);

    SearchPayload {
        query: effective,
        limit,
        score_threshold,
        filters,
    }
}

/// Drop every filter dimension containing the wildcard; return None when
/// no dimension narrows the search.
fn prune_wildcard_filters(filters: &QueryFilters) -> Option<SearchFilters> {
    let has_wildcard = |dim: &[String]| dim.iter().any(|v| v == WILDCARD);

    let narrows = !has_wildcard(&filters.data_sources)
        || !has_wildcard(&filters.document_types)
        || !has_wildcard(&filters.owners)
        || filters
            .connector_types
            .as_deref()
            .is_some_and(|ct| !has_wildcard(ct));

    if !narrows {
        return None;
    }

    let mut pruned = SearchFilters::default();
    if !has_wildcard(&filters.data_sources) {
        pruned.data_sources = Some(filters.data_sources.clone());
    }
    if !has_wildcard(&filters.document_types) {
        pruned.document_types = Some(filters.document_types.clone());
    }
    if !has_wildcard(&filters.owners) {
        pruned.owners = Some(filters.owners.clone());
    }
    if let Some(ct) = &filters.connector_types {
        if !has_wildcard(ct) {
            pruned.connector_types = Some(ct.clone());
        }
    }

    if pruned.is_empty() {
        None
    } else {
        Some(pruned)
    }
}
