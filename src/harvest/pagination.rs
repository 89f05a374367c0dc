use tracing::debug;

use super::retry::{RetryPolicy, call_with_retry};
use crate::api::{ApiError, Page};

/// Collect every item of a cursor-paginated listing
///
/// `fetch_page` is called with an empty cursor first, then with each returned cursor
/// until a page reports none. Items are returned in page order. Each page fetch is
/// retried on rate limiting; any other error stops the harvest.
///
/// There is no page limit: a listing that never stops returning cursors is followed
/// forever.
pub fn harvest<T, F>(policy: &RetryPolicy, resource: &str, mut fetch_page: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(&str) -> Result<Page<T>, ApiError>,
{
    let mut items = Vec::new();
    let mut cursor = String::new();
    let mut pages: usize = 0;

    loop {
        let page = call_with_retry(policy, || fetch_page(&cursor))?;
        pages += 1;
        items.extend(page.items);

        match page.next_cursor {
            Some(next) => {
                debug!(resource, pages, items = items.len(), cursor = %next, "Fetching more");
                cursor = next;
            }
            None => break,
        }
    }

    debug!(resource, pages, items = items.len(), "Harvest complete");
    Ok(items)
}
