use serde::Serialize;
use tracing::debug;

use super::domain::{BusinessType, Request, Response};

pub const NULL_REQUEST_MESSAGE: &str = "Request is null!";
pub const CHAIN_EXHAUSTED_MESSAGE: &str = "this is the last handler.\n";

/// One link in the chain: an authorization ceiling and the role that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApprovalLevel {
    pub limit: u32,
    pub label: String,
}

impl ApprovalLevel {
    pub fn new(label: impl Into<String>, limit: u32) -> Self {
        Self {
            limit,
            label: label.into(),
        }
    }

    /// Loan business only, and no more than this level's ceiling.
    pub fn authorizes(&self, request: &Request) -> bool {
        request.business_type() == BusinessType::Loan && request.loan_amount() <= self.limit
    }

    pub fn approval_message(&self) -> String {
        format!("{} approved", self.label)
    }
}

/// Rejections raised while assembling a chain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("an approval chain needs at least one level")]
    Empty,
    #[error("approval level #{position} has a blank label")]
    BlankLabel { position: usize },
    #[error("approval level '{label}' limit {limit} must exceed the previous limit {previous}")]
    NonIncreasingLimit {
        label: String,
        limit: u32,
        previous: u32,
    },
}

/// Ordered approval levels with strictly increasing limits.
///
/// The topology is validated once in [`ApprovalChain::new`] and never changes
/// afterwards, so a single instance can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalChain {
    levels: Vec<ApprovalLevel>,
}

impl ApprovalChain {
    pub fn new(levels: Vec<ApprovalLevel>) -> Result<Self, ChainError> {
        if levels.is_empty() {
            return Err(ChainError::Empty);
        }

        let mut previous: Option<u32> = None;
        for (position, level) in levels.iter().enumerate() {
            if level.label.trim().is_empty() {
                return Err(ChainError::BlankLabel { position });
            }
            if let Some(previous) = previous {
                if level.limit <= previous {
                    return Err(ChainError::NonIncreasingLimit {
                        label: level.label.clone(),
                        limit: level.limit,
                        previous,
                    });
                }
            }
            previous = Some(level.limit);
        }

        Ok(Self { levels })
    }

    /// Employee through TopBankManager, each authorized up to the next 10,000.
    pub fn standard() -> Self {
        Self {
            levels: standard_levels(),
        }
    }

    pub fn levels(&self) -> &[ApprovalLevel] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn max_limit(&self) -> u32 {
        self.levels.last().map(|level| level.limit).unwrap_or(0)
    }

    /// First level in chain order that authorizes the request.
    pub fn route(&self, request: &Request) -> Option<&ApprovalLevel> {
        self.levels.iter().find(|level| level.authorizes(request))
    }

    pub fn handle(&self, request: Option<&Request>) -> Response {
        match request {
            Some(request) => self.handle_request(request),
            None => Response::rejected(NULL_REQUEST_MESSAGE),
        }
    }

    pub fn handle_request(&self, request: &Request) -> Response {
        match self.route(request) {
            Some(level) => {
                debug!(
                    amount = request.loan_amount(),
                    level = %level.label,
                    limit = level.limit,
                    "loan request approved"
                );
                Response::approved(&level.approval_message())
            }
            None => {
                debug!(
                    amount = request.loan_amount(),
                    levels = self.levels.len(),
                    "approval chain exhausted"
                );
                Response::rejected(CHAIN_EXHAUSTED_MESSAGE)
            }
        }
    }
}

pub(crate) fn standard_levels() -> Vec<ApprovalLevel> {
    vec![
        ApprovalLevel::new("Employee", 10_000),
        ApprovalLevel::new("BankManager", 20_000),
        ApprovalLevel::new("CityBankManager", 30_000),
        ApprovalLevel::new("ProvinceBankManager", 40_000),
        ApprovalLevel::new("TopBankManager", 50_000),
    ]
}
