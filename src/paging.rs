//! Cursor pagination driver.
//!
//! Every list endpoint the backup uses pages the same way: ask for up to
//! `limit` items, get back a batch plus an optional `next` cursor, pass that
//! cursor as `until` on the following request.  [`fetch_all_pages`] runs that
//! loop to completion and hands back the concatenated result.
//!
//! The loop ends **only** when the server omits the cursor.  Page length is
//! never used as a stop signal: an empty page with a cursor keeps going, and a
//! full page without one stops.

use std::collections::HashSet;

use crate::api::{
    ApiError,
    types::{Cursor, Page},
};

/// Collect every item from a cursor-paginated listing.
///
/// `fetch_page(limit, until)` performs one request.  Items are returned in
/// the order the pages arrived.  A server that hands back any cursor already
/// sent in this listing would otherwise spin forever, so that is reported as
/// [`ApiError::StalledCursor`].
pub fn fetch_all_pages<T, F>(page_size: u32, mut fetch_page: F) -> Result<Vec<T>, ApiError>
where
    F: FnMut(u32, Option<&Cursor>) -> Result<Page<T>, ApiError>,
{
    let mut items = Vec::new();
    let mut cursor: Option<Cursor> = None;
    let mut sent: HashSet<Cursor> = HashSet::new();
    let mut pages = 0usize;

    loop {
        let page = fetch_page(page_size, cursor.as_ref())?;
        pages += 1;
        tracing::debug!(
            page = pages,
            items = page.items.len(),
            next = ?page.next,
            "fetched page"
        );
        items.extend(page.items);

        match page.next {
            None => return Ok(items),
            Some(next) if sent.contains(&next) => {
                return Err(ApiError::StalledCursor(next));
            },
            Some(next) => {
                sent.insert(next.clone());
                cursor = Some(next);
            },
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
