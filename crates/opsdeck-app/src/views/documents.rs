//! # Documents View State

use opsdeck_types::{Document, DocumentStats};

use crate::store::{Entity, InsertOrder, Slice};

impl Entity for Document {
    const INSERT_ORDER: InsertOrder = InsertOrder::Prepend;

    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Document domain state: the document list plus search results and stats.
///
/// Search results live beside the main list rather than replacing it, so
/// clearing a search restores the browse view without a refetch.
#[derive(Debug, Clone, Default)]
pub struct DocumentsState {
    /// The document list slice
    pub documents: Slice<Document>,
    search_results: Vec<Document>,
    search_query: Option<String>,
    searching: bool,
    search_error: Option<String>,
    stats: Option<DocumentStats>,
}

impl DocumentsState {
    /// Create an empty documents state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Pending: a search for `query` is in flight.
    pub fn begin_search(&mut self, query: impl Into<String>) {
        self.search_query = Some(query.into());
        self.searching = true;
        self.search_error = None;
    }

    /// Fulfilled: commit results if this is still the active query.
    pub fn finish_search(&mut self, query: &str, results: Vec<Document>) -> bool {
        if self.search_query.as_deref() != Some(query) {
            return false;
        }
        self.search_results = results;
        self.searching = false;
        true
    }

    /// Rejected: record the failure if this is still the active query.
    pub fn fail_search(&mut self, query: &str, message: impl Into<String>) -> bool {
        if self.search_query.as_deref() != Some(query) {
            return false;
        }
        self.search_error = Some(message.into());
        self.searching = false;
        true
    }

    /// Leave search mode and drop its results.
    pub fn clear_search(&mut self) {
        self.search_query = None;
        self.search_results.clear();
        self.searching = false;
        self.search_error = None;
    }

    /// Results for the active query.
    pub fn search_results(&self) -> &[Document] {
        &self.search_results
    }

    /// The active search query, if any.
    pub fn search_query(&self) -> Option<&str> {
        self.search_query.as_deref()
    }

    /// Whether a search is in flight.
    pub fn searching(&self) -> bool {
        self.searching
    }

    /// Last search failure, if any.
    pub fn search_error(&self) -> Option<&str> {
        self.search_error.as_deref()
    }

    // =========================================================================
    // Stats
    // =========================================================================

    /// Store the stats payload.
    pub fn set_stats(&mut self, stats: DocumentStats) {
        self.stats = Some(stats);
    }

    /// Last fetched stats, if any.
    pub fn stats(&self) -> Option<&DocumentStats> {
        self.stats.as_ref()
    }
}
