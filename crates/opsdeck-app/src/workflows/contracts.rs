//! Contract workflows: contract CRUD, templates, stats, and PDF generation.

use std::collections::BTreeMap;

use opsdeck_types::{Contract, CreateContractRequest, UpdateContractRequest};

use crate::core::AppCore;
use crate::errors::AppError;
use crate::ui::forms;

/// Fetch the contract list with the slice's current filters.
pub async fn fetch_contracts(core: &AppCore) -> Result<(), AppError> {
    let (token, filters) = {
        let mut state = core.contracts.write().await;
        (state.contracts.begin_fetch(), state.contracts.filters().clone())
    };
    match core.contract_api().list_contracts(&filters).await {
        Ok(contracts) => {
            let mut state = core.contracts.write().await;
            if !state.contracts.finish_fetch(token, contracts) {
                tracing::debug!("dropped stale contract list response");
            }
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            let mut state = core.contracts.write().await;
            state.contracts.fail_fetch(token, err.user_message());
            Err(err)
        }
    }
}

/// Create a contract and prepend it to the list.
pub async fn create_contract(
    core: &AppCore,
    req: CreateContractRequest,
) -> Result<Contract, AppError> {
    forms::validate_contract(&req).map_err(AppError::validation)?;

    core.contracts.write().await.contracts.begin_mutation();
    match core.contract_api().create_contract(&req).await {
        Ok(contract) => {
            core.contracts.write().await.contracts.apply_created(contract.clone());
            core.toast_success(format!("Contract \"{}\" created", contract.title)).await;
            Ok(contract)
        }
        Err(err) => fail_contract_write(core, err, "create contract").await,
    }
}

/// Update a contract in place.
pub async fn update_contract(
    core: &AppCore,
    id: i64,
    req: UpdateContractRequest,
) -> Result<Contract, AppError> {
    core.contracts.write().await.contracts.begin_mutation();
    match core.contract_api().update_contract(id, &req).await {
        Ok(contract) => {
            let mut state = core.contracts.write().await;
            if !state.contracts.apply_updated(contract.clone()) {
                tracing::debug!(id, "updated contract is not in the cached list");
            }
            drop(state);
            core.toast_success(format!("Contract \"{}\" updated", contract.title)).await;
            Ok(contract)
        }
        Err(err) => fail_contract_write(core, err, "update contract").await,
    }
}

/// Delete a contract and drop it from the list.
pub async fn delete_contract(core: &AppCore, id: i64) -> Result<(), AppError> {
    core.contracts.write().await.contracts.begin_mutation();
    match core.contract_api().delete_contract(id).await {
        Ok(()) => {
            core.contracts.write().await.contracts.apply_deleted(id);
            core.toast_success("Contract deleted").await;
            Ok(())
        }
        Err(err) => fail_contract_write::<()>(core, err, "delete contract").await,
    }
}

async fn fail_contract_write<T>(
    core: &AppCore,
    err: opsdeck_api::ApiError,
    action: &str,
) -> Result<T, AppError> {
    let err = AppError::from(err);
    let message = err.user_message();
    tracing::warn!(action, %message, "contract write failed");
    core.contracts.write().await.contracts.fail_mutation(message.clone());
    core.toast_error(message).await;
    Err(err)
}

// =============================================================================
// Templates, Stats, PDF
// =============================================================================

/// Fetch the contract templates.
pub async fn fetch_templates(core: &AppCore) -> Result<(), AppError> {
    core.contracts.write().await.begin_templates_fetch();
    match core.contract_api().list_templates().await {
        Ok(templates) => {
            core.contracts.write().await.finish_templates_fetch(templates);
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.contracts.write().await.fail_templates_fetch(err.user_message());
            Err(err)
        }
    }
}

/// Fetch the aggregate counters.
pub async fn fetch_stats(core: &AppCore) -> Result<(), AppError> {
    let stats = core.contract_api().stats().await?;
    core.contracts.write().await.set_stats(stats);
    Ok(())
}

/// Generate a PDF for one contract and remember its download descriptor.
pub async fn generate_pdf(core: &AppCore, id: i64) -> Result<(), AppError> {
    match core.contract_api().generate_pdf(id).await {
        Ok(pdf) => {
            core.contracts.write().await.set_generated_pdf(pdf);
            core.toast_success("PDF ready").await;
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            core.toast_error(err.user_message()).await;
            Err(err)
        }
    }
}

/// Convenience for screens that want contracts filtered by status without
/// touching the slice's saved filters.
pub async fn fetch_contracts_by_status(
    core: &AppCore,
    status: &str,
) -> Result<(), AppError> {
    {
        let mut state = core.contracts.write().await;
        let mut filters = BTreeMap::new();
        filters.insert("status".to_string(), status.to_string());
        state.contracts.replace_filters(filters);
    }
    fetch_contracts(core).await
}
