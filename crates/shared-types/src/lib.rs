pub mod types;

pub use types::{
    ClauseReviewResult, ContractDocument, ContractRequest, ContractType, MAX_DURATION_MONTHS,
    MIN_DURATION_MONTHS,
};
