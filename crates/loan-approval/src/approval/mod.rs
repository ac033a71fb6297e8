//! Loan approval routing.
//!
//! A [`Request`] walks an [`ApprovalChain`] from its lowest level upward; the first
//! [`ApprovalLevel`] whose ceiling covers the amount approves it. Requests nobody can
//! approve come back rejected rather than as errors. [`LoanRange`] holds the
//! console-side bounds checked before a request is ever built.

mod chain;
mod domain;
mod range;

#[cfg(test)]
mod tests;

pub use chain::{
    ApprovalChain, ApprovalLevel, ChainError, CHAIN_EXHAUSTED_MESSAGE, NULL_REQUEST_MESSAGE,
};
pub use domain::{
    ApprovalResult, BusinessType, Request, Response, MAX_MESSAGE_LEN, MISSING_MESSAGE,
};
pub use range::{parse_amount, AmountError, LoanRange, DEFAULT_LOAN_MAX, DEFAULT_LOAN_MIN};

pub(crate) use chain::standard_levels;
