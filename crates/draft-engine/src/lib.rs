//! Contract drafting from embedded templates.
//!
//! Selects a template by [`ContractType`] and substitutes the form
//! fields into its `{field_name}` placeholders. Drafting is a pure
//! function of the request: no escaping, no IO, no error path once the
//! fields have passed form validation upstream.

pub mod embedded;
pub mod registry;

use shared_types::{ContractDocument, ContractRequest};

pub use registry::{list_templates, TemplateInfo};

/// Fill the template selected by the request's contract type and return
/// the resulting text verbatim.
pub fn draft_contract(request: &ContractRequest) -> ContractDocument {
    let source = embedded::template_source(request.contract_type);

    let text = source
        .replace("{party1}", &request.party1)
        .replace("{party2}", &request.party2)
        .replace("{location}", &request.location)
        .replace("{start_date}", &request.start_date.to_string())
        .replace("{duration_months}", &request.duration_months.to_string());

    ContractDocument { text }
}
