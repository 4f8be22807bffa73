//! # Contracts View State

use opsdeck_types::{Contract, ContractStats, ContractTemplate, GeneratedPdf};

use crate::store::{Entity, InsertOrder, Slice};

impl Entity for Contract {
    const INSERT_ORDER: InsertOrder = InsertOrder::Prepend;

    fn entity_id(&self) -> i64 {
        self.id
    }
}

/// Contract domain state: the contract list plus templates and stats.
///
/// Newly created contracts land at the front of the list, matching how
/// the console surfaces the most recent work first. Templates are
/// read-only here and refresh wholesale.
#[derive(Debug, Clone, Default)]
pub struct ContractsState {
    /// The contract list slice
    pub contracts: Slice<Contract>,
    templates: Vec<ContractTemplate>,
    templates_loading: bool,
    templates_error: Option<String>,
    stats: Option<ContractStats>,
    last_generated_pdf: Option<GeneratedPdf>,
}

impl ContractsState {
    /// Create an empty contracts state.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Templates
    // =========================================================================

    /// Pending: a template fetch is in flight.
    pub fn begin_templates_fetch(&mut self) {
        self.templates_loading = true;
        self.templates_error = None;
    }

    /// Fulfilled: replace the template list wholesale.
    pub fn finish_templates_fetch(&mut self, templates: Vec<ContractTemplate>) {
        self.templates = templates;
        self.templates_loading = false;
    }

    /// Rejected: record the failure, keep the stale templates.
    pub fn fail_templates_fetch(&mut self, message: impl Into<String>) {
        self.templates_error = Some(message.into());
        self.templates_loading = false;
    }

    /// Cached templates.
    pub fn templates(&self) -> &[ContractTemplate] {
        &self.templates
    }

    /// Whether a template fetch is in flight.
    pub fn templates_loading(&self) -> bool {
        self.templates_loading
    }

    /// Last template-fetch failure, if any.
    pub fn templates_error(&self) -> Option<&str> {
        self.templates_error.as_deref()
    }

    // =========================================================================
    // Stats & PDF
    // =========================================================================

    /// Store the stats payload.
    pub fn set_stats(&mut self, stats: ContractStats) {
        self.stats = Some(stats);
    }

    /// Last fetched stats, if any.
    pub fn stats(&self) -> Option<&ContractStats> {
        self.stats.as_ref()
    }

    /// Remember the most recent generated-PDF descriptor so the view can
    /// offer the download link.
    pub fn set_generated_pdf(&mut self, pdf: GeneratedPdf) {
        self.last_generated_pdf = Some(pdf);
    }

    /// The most recent generated PDF, if any.
    pub fn generated_pdf(&self) -> Option<&GeneratedPdf> {
        self.last_generated_pdf.as_ref()
    }
}
