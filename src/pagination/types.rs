//! Pagination types and the shared cursor/limit state machine
//!
//! `PageState` holds everything about "where we are" in the remote
//! collection; the async and blocking lists differ only in how they invoke
//! the fetch collaborator, so both drive the same state machine and can
//! never drift apart on truncation or exhaustion rules.

use crate::error::{Error, Result};

/// Items requested per page when the caller does not choose one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One request to the fetch collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Cursor of the page to fetch; `None` for the first page
    pub cursor: Option<String>,
    /// Number of items to request for this page
    pub page_size: usize,
}

/// One page returned by the fetch collaborator.
#[derive(Debug, Clone)]
pub struct FetchedPage<T> {
    /// Items in remote order
    pub items: Vec<T>,
    /// Cursor of the following page, or `None` if this was the last one
    pub next_cursor: Option<String>,
}

/// Caller-side pagination controls.
///
/// `limit` caps the total number of items the list will ever materialize;
/// `page_size` is how many items each page request asks for.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    limit: Option<usize>,
    page_size: Option<usize>,
}

impl ListOptions {
    /// Create options with the defaults: unbounded, pages of
    /// [`DEFAULT_PAGE_SIZE`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the total number of items fetched across all pages
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the number of items requested per page
    #[must_use]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }
}

/// Cursor and exhaustion bookkeeping shared by both list variants.
///
/// The owning list holds the item buffer; this type decides what to
/// request next and how much of each returned page to keep.
#[derive(Debug, Clone)]
pub(crate) struct PageState {
    cursor: Option<String>,
    exhausted: bool,
    limit: Option<usize>,
    page_size: usize,
}

impl PageState {
    pub(crate) fn new(options: &ListOptions) -> Result<Self> {
        let page_size = options.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(Error::invalid_configuration("page_size must be positive"));
        }
        Ok(Self {
            cursor: None,
            // A zero limit is an immediately-exhausted, empty list.
            exhausted: options.limit == Some(0),
            limit: options.limit,
            page_size,
        })
    }

    /// Next request needed to grow a buffer of `buffered` items.
    ///
    /// Returns `None` once the source is exhausted or the limit leaves no
    /// room; in the latter case the state is marked exhausted so no later
    /// call can fetch either.
    pub(crate) fn next_request(&mut self, buffered: usize) -> Option<PageRequest> {
        if self.exhausted {
            return None;
        }
        let room = match self.limit {
            Some(limit) if buffered >= limit => {
                self.exhausted = true;
                return None;
            }
            Some(limit) => limit - buffered,
            None => self.page_size,
        };
        Some(PageRequest {
            cursor: self.cursor.clone(),
            page_size: self.page_size.min(room),
        })
    }

    /// Record a fetched page and return how many of its items to keep.
    ///
    /// Marks the state exhausted when the source reported no next cursor,
    /// returned a short page, or the limit has been reached.
    pub(crate) fn record_page(
        &mut self,
        buffered: usize,
        returned: usize,
        requested: usize,
        next_cursor: Option<String>,
    ) -> usize {
        let keep = match self.limit {
            Some(limit) => returned.min(limit.saturating_sub(buffered)),
            None => returned,
        };
        self.cursor = next_cursor;
        if self.cursor.is_none() || returned < requested {
            self.exhausted = true;
        }
        if let Some(limit) = self.limit {
            if buffered + keep >= limit {
                self.exhausted = true;
            }
        }
        keep
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    #[cfg(test)]
    pub(crate) fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}
