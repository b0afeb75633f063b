use chrono::NaiveDate;

/// Shortest contract term the drafting form accepts, in months.
pub const MIN_DURATION_MONTHS: u32 = 1;
/// Longest contract term the drafting form accepts, in months.
pub const MAX_DURATION_MONTHS: u32 = 60;

/// Supported contract templates.
///
/// Adding a contract type means adding a variant here plus its template
/// in `draft-engine`; matches over this enum are exhaustive on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    Nda,
    RentAgreement,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContractRequest {
    pub contract_type: ContractType,
    pub party1: String,
    pub party2: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub duration_months: u32,
}

/// A generated contract. No identity beyond its text; never persisted.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ContractDocument {
    pub text: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ClauseReviewResult {
    /// Subsequence of the clause catalog, in catalog order, not found in
    /// the reviewed text. Empty means every expected clause is present.
    pub missing_clauses: Vec<String>,
}

impl ClauseReviewResult {
    pub fn all_present(&self) -> bool {
        self.missing_clauses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_type_uses_snake_case_api_values() {
        assert_eq!(
            serde_json::to_string(&ContractType::Nda).unwrap(),
            "\"nda\""
        );
        assert_eq!(
            serde_json::to_string(&ContractType::RentAgreement).unwrap(),
            "\"rent_agreement\""
        );

        let parsed: ContractType = serde_json::from_str("\"rent_agreement\"").unwrap();
        assert_eq!(parsed, ContractType::RentAgreement);
    }

    #[test]
    fn contract_request_roundtrips_through_json() {
        let json = r#"{
            "contract_type": "nda",
            "party1": "Acme",
            "party2": "Beta",
            "location": "Mumbai",
            "start_date": "2025-01-15",
            "duration_months": 12
        }"#;

        let req: ContractRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.contract_type, ContractType::Nda);
        assert_eq!(req.start_date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert_eq!(req.duration_months, 12);
    }

    #[test]
    fn empty_missing_list_means_all_present() {
        let result = ClauseReviewResult {
            missing_clauses: vec![],
        };
        assert!(result.all_present());

        let result = ClauseReviewResult {
            missing_clauses: vec!["termination".to_string()],
        };
        assert!(!result.all_present());
    }
}
