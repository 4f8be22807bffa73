//! # Contract Domain Types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Entities
// =============================================================================

/// A tracked contract.
///
/// `status` and `signature_status` are independent lifecycle axes; the
/// client carries both verbatim and does not validate their combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Server-assigned identifier
    pub id: i64,
    /// Contract title
    pub title: String,
    /// Contract category (free text: "service", "nda", ...)
    #[serde(rename = "type")]
    pub contract_type: String,
    /// Lifecycle status (free text: "draft", "active", "expired", ...)
    pub status: String,
    /// Signature workflow status (free text: "unsigned", "pending", "signed")
    #[serde(default)]
    pub signature_status: Option<String>,
    /// Contract start date
    pub start_date: NaiveDate,
    /// Contract end date, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Monetary value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Other party to the contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
}

/// A reusable contract template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractTemplate {
    /// Server-assigned identifier
    pub id: i64,
    /// Template name
    pub name: String,
    /// Contract category the template produces
    #[serde(rename = "type")]
    pub contract_type: String,
    /// Template body
    pub body: String,
}

/// Aggregate counters returned by `GET /contracts/stats`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContractStats {
    /// Total number of contracts
    pub total: u64,
    /// Contracts in "active" status
    pub active: u64,
    /// Contracts in "draft" status
    pub draft: u64,
    /// Contracts past their end date
    pub expired: u64,
}

/// Descriptor returned by `POST /contracts/:id/generate-pdf`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPdf {
    /// Download URL for the rendered document
    pub url: String,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Payload for `POST /contracts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateContractRequest {
    /// Contract title
    pub title: String,
    /// Contract category
    #[serde(rename = "type")]
    pub contract_type: String,
    /// Initial lifecycle status
    pub status: String,
    /// Contract start date
    pub start_date: NaiveDate,
    /// Contract end date, if bounded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// Monetary value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Other party to the contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
}

/// Payload for `PUT /contracts/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateContractRequest {
    /// New title, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New lifecycle status, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// New signature status, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_status: Option<String>,
    /// New end date, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    /// New value, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// New counterparty, if changing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_type_field_renames() {
        let contract: Contract = serde_json::from_str(
            r#"{
                "id": 42,
                "title": "MSA",
                "type": "service",
                "status": "draft",
                "start_date": "2024-01-01"
            }"#,
        )
        .unwrap();
        assert_eq!(contract.contract_type, "service");
        assert_eq!(contract.signature_status, None);

        let json = serde_json::to_value(&contract).unwrap();
        assert_eq!(json["type"], "service");
        assert!(json.get("contract_type").is_none());
    }

    #[test]
    fn test_create_request_serializes_dates_as_iso() {
        let req = CreateContractRequest {
            title: "MSA".into(),
            contract_type: "service".into(),
            status: "draft".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: None,
            value: None,
            counterparty: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["start_date"], "2024-01-01");
        assert!(json.get("end_date").is_none());
    }
}
