//! Template registry and metadata

use serde::{Deserialize, Serialize};
use shared_types::ContractType;

/// Information about an available contract template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInfo {
    /// API value selecting this template
    pub contract_type: ContractType,
    /// Template name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Required input fields
    pub required_inputs: Vec<String>,
}

/// List all available contract templates
pub fn list_templates() -> Vec<TemplateInfo> {
    let required: Vec<String> = [
        "party1",
        "party2",
        "location",
        "start_date",
        "duration_months",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    vec![
        TemplateInfo {
            contract_type: ContractType::Nda,
            name: "nda".to_string(),
            description: "Mutual non-disclosure agreement between two parties".to_string(),
            required_inputs: required.clone(),
        },
        TemplateInfo {
            contract_type: ContractType::RentAgreement,
            name: "rent_agreement".to_string(),
            description: "Residential rental agreement between landlord and tenant".to_string(),
            required_inputs: required,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_both_contract_types() {
        let templates = list_templates();
        assert_eq!(templates.len(), 2);
        assert!(templates
            .iter()
            .any(|t| t.contract_type == ContractType::Nda));
        assert!(templates
            .iter()
            .any(|t| t.contract_type == ContractType::RentAgreement));
    }

    #[test]
    fn every_template_requires_the_five_form_fields() {
        for template in list_templates() {
            assert_eq!(template.required_inputs.len(), 5, "{}", template.name);
        }
    }
}
