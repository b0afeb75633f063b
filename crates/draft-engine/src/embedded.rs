//! Embedded template loader
//!
//! Contract templates live as external text files and are embedded in
//! the binary at compile time. Placeholders use `{field_name}` markers.

use shared_types::ContractType;

/// NDA template - loaded from templates/nda.txt
const NDA_TEMPLATE: &str = include_str!("../templates/nda.txt");

/// Rent agreement template - loaded from templates/rent_agreement.txt
const RENT_AGREEMENT_TEMPLATE: &str = include_str!("../templates/rent_agreement.txt");

/// Template source for a contract type. Exhaustive by construction; a
/// new contract type does not compile until its template is wired here.
pub fn template_source(contract_type: ContractType) -> &'static str {
    match contract_type {
        ContractType::Nda => NDA_TEMPLATE,
        ContractType::RentAgreement => RENT_AGREEMENT_TEMPLATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_templates_are_nonempty() {
        assert!(!template_source(ContractType::Nda).is_empty());
        assert!(!template_source(ContractType::RentAgreement).is_empty());
    }

    #[test]
    fn templates_carry_all_placeholders() {
        for contract_type in [ContractType::Nda, ContractType::RentAgreement] {
            let source = template_source(contract_type);
            for field in [
                "{party1}",
                "{party2}",
                "{location}",
                "{start_date}",
                "{duration_months}",
            ] {
                assert!(
                    source.contains(field),
                    "{:?} template missing {}",
                    contract_type,
                    field
                );
            }
        }
    }
}
