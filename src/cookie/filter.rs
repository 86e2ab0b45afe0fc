//! Case-insensitive substring search over a cookie list.
//!
//! A record matches when any of `name`, `domain`, `value`, or `path`
//! contains the query. Filtering is pure and order-preserving, so it can be
//! re-applied to the same snapshot any number of times with the same result.

use crate::cookie::session::SessionCookie;

/// Returns `true` when any searchable field of `cookie` contains `query`.
///
/// `query` must already be lowercase; [`filter_cookies`] takes care of that.
pub fn matches_query(cookie: &SessionCookie, query: &str) -> bool {
    if cookie.name.to_lowercase().contains(query) {
        return true;
    }
    if cookie.domain.to_lowercase().contains(query) {
        return true;
    }
    if cookie.value.to_lowercase().contains(query) {
        return true;
    }
    cookie.path.to_lowercase().contains(query)
}

/// Filters `items` down to the records matching `query`, preserving order.
pub fn filter_cookies(items: &[SessionCookie], query: &str) -> Vec<SessionCookie> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_query(item, &query))
        .cloned()
        .collect()
}
