//! Blocking lazy-loading paginated list
//!
//! Same state machine and invariants as the async
//! [`PaginatedList`](super::PaginatedList); operations block the calling
//! thread instead of suspending. A single instance is not meant to be
//! shared across threads — callers that do must bring their own lock.

use super::list::resolve_bounds;
use super::types::{FetchedPage, ListOptions, PageRequest, PageState};
use crate::error::{Error, Result};
use std::ops::RangeBounds;

/// Fetch collaborator for the blocking [`PaginatedList`].
///
/// Any `FnMut(PageRequest) -> Result<FetchedPage<T>>` closure qualifies.
pub trait FetchPageBlocking<T> {
    /// Fetch one page of items
    fn fetch_page(&mut self, request: PageRequest) -> Result<FetchedPage<T>>;
}

impl<T, F> FetchPageBlocking<T> for F
where
    F: FnMut(PageRequest) -> Result<FetchedPage<T>>,
{
    fn fetch_page(&mut self, request: PageRequest) -> Result<FetchedPage<T>> {
        self(request)
    }
}

/// Blocking lazy-loading paginated list that fetches pages on demand.
///
/// ```rust,ignore
/// let mut cards = client.cards().list(ListOptions::new().page_size(50))?;
///
/// for card in cards.iter() {
///     println!("{}", card?.name);
/// }
/// ```
pub struct PaginatedList<T> {
    fetcher: Box<dyn FetchPageBlocking<T>>,
    state: PageState,
    buffer: Vec<T>,
}

impl<T> std::fmt::Debug for PaginatedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedList")
            .field("loaded", &self.buffer.len())
            .field("exhausted", &self.state.is_exhausted())
            .finish_non_exhaustive()
    }
}

impl<T: Clone> PaginatedList<T> {
    /// Create a list over the given fetch collaborator.
    ///
    /// Returns `InvalidConfiguration` if `options` asks for a zero page
    /// size. No request is made until an operation needs items.
    pub fn new(fetcher: impl FetchPageBlocking<T> + 'static, options: ListOptions) -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(fetcher),
            state: PageState::new(&options)?,
            buffer: Vec::new(),
        })
    }

    /// Number of items materialized so far (never triggers a fetch)
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether no items have been materialized yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check whether the source has been exhausted
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    fn ensure(&mut self, n: usize) -> Result<()> {
        while self.buffer.len() < n {
            let Some(request) = self.state.next_request(self.buffer.len()) else {
                return Ok(());
            };
            let requested = request.page_size;
            let page = self.fetcher.fetch_page(request)?;
            let keep = self.state.record_page(
                self.buffer.len(),
                page.items.len(),
                requested,
                page.next_cursor,
            );
            self.buffer.extend(page.items.into_iter().take(keep));
        }
        Ok(())
    }

    fn ensure_all(&mut self) -> Result<()> {
        while !self.state.is_exhausted() {
            let target = self.buffer.len() + 1;
            self.ensure(target)?;
        }
        Ok(())
    }

    /// Get the item at `index`, fetching pages as needed.
    ///
    /// Returns `OutOfRange` if the source exhausts before reaching it.
    pub fn get(&mut self, index: usize) -> Result<T> {
        self.ensure(index + 1)?;
        self.buffer
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_range(index, self.buffer.len()))
    }

    /// Get the first item, or `None` if the source is empty
    pub fn first(&mut self) -> Result<Option<T>> {
        self.ensure(1)?;
        Ok(self.buffer.first().cloned())
    }

    /// Get a sub-range of items, fetching pages as needed
    pub fn slice(&mut self, range: impl RangeBounds<usize>) -> Result<Vec<T>> {
        self.slice_step(range, 1)
    }

    /// Like [`slice`](Self::slice), keeping every `step`-th item.
    ///
    /// Returns `UnsupportedIndex` for a zero step.
    pub fn slice_step(&mut self, range: impl RangeBounds<usize>, step: usize) -> Result<Vec<T>> {
        let (start, stop) = resolve_bounds(&range, step)?;
        match stop {
            Some(stop) => self.ensure(stop)?,
            None => self.ensure_all()?,
        }
        let stop = stop.unwrap_or(self.buffer.len()).min(self.buffer.len());
        let start = start.min(stop);
        Ok(self.buffer[start..stop]
            .iter()
            .step_by(step)
            .cloned()
            .collect())
    }

    /// Materialize and return the first `n` items (fewer if the source
    /// exhausts first). Idempotent.
    pub fn fetch(&mut self, n: usize) -> Result<Vec<T>> {
        self.ensure(n)?;
        Ok(self.buffer.iter().take(n).cloned().collect())
    }

    /// Fetch and return all items, respecting the configured limit
    pub fn all(&mut self) -> Result<Vec<T>> {
        self.ensure_all()?;
        Ok(self.buffer.clone())
    }

    /// Iterate over the items, fetching pages as needed.
    ///
    /// Each iterator starts from the beginning: already-buffered items are
    /// replayed without a fetch, then the remote source is resumed from
    /// the current cursor if it was not already exhausted. A fetch error
    /// is yielded once and ends the iteration.
    pub fn iter(&mut self) -> Iter<'_, T> {
        Iter {
            list: self,
            index: 0,
            failed: false,
        }
    }
}

/// Iterator over a blocking [`PaginatedList`].
///
/// Holds only a position index; the list keeps exclusive ownership of the
/// buffer, so items are cloned out as they are yielded.
pub struct Iter<'a, T> {
    list: &'a mut PaginatedList<T>,
    index: usize,
    failed: bool,
}

impl<T: Clone> Iterator for Iter<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Err(err) = self.list.ensure(self.index + 1) {
            self.failed = true;
            return Some(Err(err));
        }
        let item = self.list.buffer.get(self.index).cloned()?;
        self.index += 1;
        Some(Ok(item))
    }
}
