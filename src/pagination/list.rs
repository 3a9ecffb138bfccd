//! Asynchronous lazy-loading paginated list

use super::types::{FetchedPage, ListOptions, PageRequest, PageState};
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::stream::{self, Stream};
use std::ops::{Bound, RangeBounds};

/// Fetch collaborator for the asynchronous [`PaginatedList`].
///
/// Implementations issue one remote call per invocation and return the
/// page's items in remote order plus the cursor of the following page
/// (`None` when this was the final page). The list never invokes this
/// twice for the same cursor value.
#[async_trait]
pub trait FetchPage<T>: Send {
    /// Fetch one page of items
    async fn fetch_page(&mut self, request: PageRequest) -> Result<FetchedPage<T>>;
}

/// Async lazy-loading paginated list that fetches pages on demand.
///
/// Items are materialized into an internal append-only buffer as pages are
/// fetched; every operation that may need more items is an explicit
/// suspension point. Fetch errors propagate unchanged and leave the list
/// exactly as it was before the failed call, so the operation can simply
/// be retried. The same holds for cancellation: dropping an in-flight
/// operation cannot apply a partial page, because the buffer and cursor
/// are only touched after a fetch completes.
///
/// All fetching operations take `&mut self`, so a single instance cannot
/// be driven from two tasks at once without an external lock.
///
/// ```rust,ignore
/// let mut clans = client.clans().search(params, ListOptions::new().limit(50))?;
///
/// // Stream items, fetching pages as needed
/// let mut stream = clans.stream();
/// while let Some(clan) = stream.try_next().await? {
///     println!("{}", clan.name);
/// }
///
/// // Explicit index and slice access
/// let fifth = clans.get(5).await?;
/// let top_ten = clans.slice(..10).await?;
///
/// // Fetch everything (respecting the configured limit)
/// let all = clans.all().await?;
/// ```
pub struct PaginatedList<T> {
    fetcher: Box<dyn FetchPage<T>>,
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
    pub fn new(fetcher: impl FetchPage<T> + 'static, options: ListOptions) -> Result<Self> {
        Ok(Self {
            fetcher: Box::new(fetcher),
            state: PageState::new(&options)?,
            buffer: Vec::new(),
        })
    }

    /// Number of items materialized so far.
    ///
    /// Never triggers a fetch; the remote source does not report a total
    /// count, so this reflects only what prior operations have loaded.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check whether no items have been materialized yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Check whether the source has been exhausted (no further fetches
    /// will happen for this list)
    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    /// Materialize at least `n` items, or exhaust the source trying
    async fn ensure(&mut self, n: usize) -> Result<()> {
        while self.buffer.len() < n {
            let Some(request) = self.state.next_request(self.buffer.len()) else {
                return Ok(());
            };
            let requested = request.page_size;
            let page = self.fetcher.fetch_page(request).await?;
            // No await below this point: a dropped or failed fetch leaves
            // buffer, cursor and exhaustion untouched.
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

    /// Materialize everything up to the limit or remote exhaustion
    async fn ensure_all(&mut self) -> Result<()> {
        while !self.state.is_exhausted() {
            let target = self.buffer.len() + 1;
            self.ensure(target).await?;
        }
        Ok(())
    }

    /// Get the item at `index`, fetching pages as needed.
    ///
    /// Returns `OutOfRange` if the source exhausts before reaching it.
    pub async fn get(&mut self, index: usize) -> Result<T> {
        self.ensure(index + 1).await?;
        self.buffer
            .get(index)
            .cloned()
            .ok_or_else(|| Error::out_of_range(index, self.buffer.len()))
    }

    /// Get the first item, or `None` if the source is empty
    pub async fn first(&mut self) -> Result<Option<T>> {
        self.ensure(1).await?;
        Ok(self.buffer.first().cloned())
    }

    /// Get a sub-range of items, fetching pages as needed.
    ///
    /// An open end materializes everything up to the limit or exhaustion.
    /// Out-of-bounds ranges are clamped to what the source can provide.
    pub async fn slice(&mut self, range: impl RangeBounds<usize>) -> Result<Vec<T>> {
        self.slice_step(range, 1).await
    }

    /// Like [`slice`](Self::slice), keeping every `step`-th item.
    ///
    /// Returns `UnsupportedIndex` for a zero step.
    pub async fn slice_step(
        &mut self,
        range: impl RangeBounds<usize>,
        step: usize,
    ) -> Result<Vec<T>> {
        let (start, stop) = resolve_bounds(&range, step)?;
        match stop {
            Some(stop) => self.ensure(stop).await?,
            None => self.ensure_all().await?,
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
    /// exhausts first).
    ///
    /// Idempotent: items already buffered are never fetched again.
    pub async fn fetch(&mut self, n: usize) -> Result<Vec<T>> {
        self.ensure(n).await?;
        Ok(self.buffer.iter().take(n).cloned().collect())
    }

    /// Fetch and return all items, respecting the configured limit.
    ///
    /// May issue many requests on an unbounded list over a large remote
    /// collection; prefer [`stream`](Self::stream) or a `limit` there.
    pub async fn all(&mut self) -> Result<Vec<T>> {
        self.ensure_all().await?;
        Ok(self.buffer.clone())
    }

    /// Stream the items, fetching pages as needed.
    ///
    /// Each stream starts from the beginning: already-buffered items are
    /// replayed without a fetch, then the remote source is resumed from
    /// the current cursor if it was not already exhausted.
    pub fn stream(&mut self) -> impl Stream<Item = Result<T>> + '_ {
        stream::try_unfold((self, 0usize), |(list, index)| async move {
            list.ensure(index + 1).await?;
            let item = list.buffer.get(index).cloned();
            Ok(item.map(|item| (item, (list, index + 1))))
        })
    }
}

/// Resolve generic range bounds into `(start, exclusive stop)`
pub(super) fn resolve_bounds(
    range: &impl RangeBounds<usize>,
    step: usize,
) -> Result<(usize, Option<usize>)> {
    if step == 0 {
        return Err(Error::unsupported_index("slice step must be at least 1"));
    }
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
    };
    let stop = match range.end_bound() {
        Bound::Unbounded => None,
        Bound::Included(&e) => Some(e + 1),
        Bound::Excluded(&e) => Some(e),
    };
    Ok((start, stop))
}
