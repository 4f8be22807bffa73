//! Document workflows: list, upload, update, delete, download, search,
//! stats.

use opsdeck_types::{CreateDocumentRequest, Document, UpdateDocumentRequest};

use crate::core::AppCore;
use crate::errors::AppError;
use crate::ui::forms;

/// Fetch the document list with the slice's current filters.
pub async fn fetch_documents(core: &AppCore) -> Result<(), AppError> {
    let (token, filters) = {
        let mut state = core.documents.write().await;
        (state.documents.begin_fetch(), state.documents.filters().clone())
    };
    match core.document_api().list_documents(&filters).await {
        Ok(documents) => {
            let mut state = core.documents.write().await;
            if !state.documents.finish_fetch(token, documents) {
                tracing::debug!("dropped stale document list response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            let mut state = core.documents.write().await;
            state.documents.fail_fetch(token, err.user_message());
            Err(err)
        }
    }
}

/// Upload a document and prepend it to the list.
pub async fn upload_document(
    core: &AppCore,
    req: CreateDocumentRequest,
) -> Result<Document, AppError> {
    forms::validate_document(&req).map_err(AppError::validation)?;

    core.documents.write().await.documents.begin_mutation();
    match core.document_api().create_document(&req).await {
        Ok(document) => {
            core.documents.write().await.documents.apply_created(document.clone());
            core.toast_success(format!("\"{}\" uploaded", document.name)).await;
            Ok(document)
        }
        Err(err) => fail_document_write(core, err, "upload document").await,
    }
}

/// Rename or retag a document.
pub async fn update_document(
    core: &AppCore,
    id: i64,
    req: UpdateDocumentRequest,
) -> Result<Document, AppError> {
    core.documents.write().await.documents.begin_mutation();
    match core.document_api().update_document(id, &req).await {
        Ok(document) => {
            let mut state = core.documents.write().await;
            if !state.documents.apply_updated(document.clone()) {
                tracing::debug!(id, "updated document is not in the cached list");
            }
            drop(state);
            core.toast_success(format!("\"{}\" updated", document.name)).await;
            Ok(document)
        }
        Err(err) => fail_document_write(core, err, "update document").await,
    }
}

/// Delete a document and drop it from the list.
pub async fn delete_document(core: &AppCore, id: i64) -> Result<(), AppError> {
    core.documents.write().await.documents.begin_mutation();
    match core.document_api().delete_document(id).await {
        Ok(()) => {
            core.documents.write().await.documents.apply_deleted(id);
            core.toast_success("Document deleted").await;
            Ok(())
        }
        Err(err) => fail_document_write::<()>(core, err, "delete document").await,
    }
}

async fn fail_document_write<T>(
    core: &AppCore,
    err: opsdeck_api::ApiError,
    action: &str,
) -> Result<T, AppError> {
    let err = AppError::from(err);
    let message = err.user_message();
    tracing::warn!(action, %message, "document write failed");
    core.documents.write().await.documents.fail_mutation(message.clone());
    core.toast_error(message).await;
    Err(err)
}

// =============================================================================
// Download, Search, Stats
// =============================================================================

/// Fetch a document's raw bytes.
///
/// Store state is untouched; the caller hands the bytes to the platform's
/// save/open mechanism.
pub async fn download_document(core: &AppCore, id: i64) -> Result<Vec<u8>, AppError> {
    match core.document_api().download(id).await {
        Ok(bytes) => Ok(bytes),
        Err(err) => {
            let err = AppError::from(err);
            core.toast_error(err.user_message()).await;
            Err(err)
        }
    }
}

/// Run a full-text search; only the latest query's results are committed.
pub async fn search_documents(core: &AppCore, query: &str) -> Result<(), AppError> {
    let query = query.trim();
    if query.is_empty() {
        core.documents.write().await.clear_search();
        return Ok(());
    }

    core.documents.write().await.begin_search(query);
    match core.document_api().search(query).await {
        Ok(results) => {
            let mut state = core.documents.write().await;
            if !state.finish_search(query, results) {
                tracing::debug!(query, "dropped superseded search response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            let mut state = core.documents.write().await;
            state.fail_search(query, err.user_message());
            Err(err)
        }
    }
}

/// Fetch the aggregate counters.
pub async fn fetch_stats(core: &AppCore) -> Result<(), AppError> {
    let stats = core.document_api().stats().await?;
    core.documents.write().await.set_stats(stats);
    Ok(())
}
