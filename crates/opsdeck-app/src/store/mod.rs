//! # Domain Store Slice
//!
//! Every resource domain in the console holds the same client-side cache
//! shape: an ordered item list, at most one selected item, loading and
//! error flags, and a free-form filter map. [`Slice`] expresses that shape
//! once; the per-domain states in [`crate::views`] wrap it.
//!
//! ## Transition Contract
//!
//! Async operations move through `pending → fulfilled | rejected`:
//!
//! - List fetch: pending sets `loading` and clears `error`; fulfilled
//!   replaces `items` wholesale (never merges); rejected records the
//!   failure message and leaves the stale items usable.
//! - Create: fulfilled inserts the new entity at the domain's insert
//!   position without refetching.
//! - Update: fulfilled replaces the entity in place by id; an absent id is
//!   a silent no-op.
//! - Delete: fulfilled filters the entity out; the selection is cleared
//!   iff it pointed at the deleted id.
//!
//! ## Overlapping Fetches
//!
//! Each fetch carries a [`FetchToken`]. A result only commits if its token
//! is still the latest issued for the slice, so a slow early response can
//! never overwrite a newer one. There is no cancellation beyond dropping
//! the stale result.

use std::collections::BTreeMap;

/// Where a freshly created entity lands in the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOrder {
    /// New items go to the front (contracts, templates, documents)
    Prepend,
    /// New items go to the back (calendar events, rbac lists)
    Append,
}

/// An entity cached by a [`Slice`].
pub trait Entity: Clone {
    /// Insert position for create transitions in this domain.
    const INSERT_ORDER: InsertOrder;

    /// Server-assigned identifier.
    fn entity_id(&self) -> i64;
}

/// Token identifying one in-flight list fetch.
///
/// Obtained from [`Slice::begin_fetch`] and handed back to
/// [`Slice::finish_fetch`] or [`Slice::fail_fetch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// The normalized client-side cache for one resource domain.
#[derive(Debug, Clone)]
pub struct Slice<T: Entity> {
    items: Vec<T>,
    selected: Option<T>,
    loading: bool,
    error: Option<String>,
    filters: BTreeMap<String, String>,
    fetch_seq: u64,
}

impl<T: Entity> Default for Slice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
            filters: BTreeMap::new(),
            fetch_seq: 0,
        }
    }
}

impl<T: Entity> Slice<T> {
    /// Create an empty slice.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    /// Cached items in server order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The selected item, if any.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Whether a request for this slice is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The last recorded failure message, if not yet cleared.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current filter predicates, sent verbatim as query parameters.
    pub fn filters(&self) -> &BTreeMap<String, String> {
        &self.filters
    }

    /// Find an item by id.
    pub fn find(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    // =========================================================================
    // Fetch Transitions
    // =========================================================================

    /// Pending: mark a new list fetch in flight.
    ///
    /// Clears any prior error, sets `loading`, and issues the token the
    /// resolution transitions must present.
    pub fn begin_fetch(&mut self) -> FetchToken {
        self.fetch_seq += 1;
        self.loading = true;
        self.error = None;
        FetchToken(self.fetch_seq)
    }

    /// Fulfilled: replace the item list wholesale.
    ///
    /// Returns `false` (and changes nothing) if a newer fetch was issued
    /// after this token, in which case the stale result is dropped.
    pub fn finish_fetch(&mut self, token: FetchToken, items: Vec<T>) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    /// Rejected: record the failure, keeping the stale items usable.
    ///
    /// Returns `false` if the token is stale, same as [`Self::finish_fetch`].
    pub fn fail_fetch(&mut self, token: FetchToken, message: impl Into<String>) -> bool {
        if token.0 != self.fetch_seq {
            return false;
        }
        self.error = Some(message.into());
        self.loading = false;
        true
    }

    // =========================================================================
    // Mutation Transitions
    // =========================================================================

    /// Pending: mark a write in flight (same loading/error discipline as a
    /// fetch, but without a token since writes never race on commit order).
    pub fn begin_mutation(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Create fulfilled: insert the server-confirmed entity.
    pub fn apply_created(&mut self, entity: T) {
        match T::INSERT_ORDER {
            InsertOrder::Prepend => self.items.insert(0, entity),
            InsertOrder::Append => self.items.push(entity),
        }
        self.loading = false;
    }

    /// Update fulfilled: replace the entity in place by id.
    ///
    /// Returns `false` when the id is not present; the list is left
    /// unchanged (intentional idempotence, not an error).
    pub fn apply_updated(&mut self, entity: T) -> bool {
        self.loading = false;
        let id = entity.entity_id();
        match self.items.iter_mut().find(|item| item.entity_id() == id) {
            Some(slot) => {
                *slot = entity;
                true
            }
            None => false,
        }
    }

    /// Delete fulfilled: drop the entity by id; clear the selection iff it
    /// pointed at the deleted entity.
    pub fn apply_deleted(&mut self, id: i64) {
        self.items.retain(|item| item.entity_id() != id);
        if self
            .selected
            .as_ref()
            .is_some_and(|s| s.entity_id() == id)
        {
            self.selected = None;
        }
        self.loading = false;
    }

    /// Rejected write: record the failure message.
    pub fn fail_mutation(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    // =========================================================================
    // Local-Only Transitions
    // =========================================================================

    /// Select an item for detail/edit views.
    pub fn select(&mut self, entity: T) {
        self.selected = Some(entity);
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Set one filter predicate.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.filters.insert(key.into(), value.into());
    }

    /// Remove one filter predicate.
    pub fn remove_filter(&mut self, key: &str) {
        self.filters.remove(key);
    }

    /// Replace the whole filter map (used by filter-draft commits).
    pub fn replace_filters(&mut self, filters: BTreeMap<String, String>) {
        self.filters = filters;
    }

    /// Drop all filter predicates.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Clear a displayed error once the view has surfaced it.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
