use crate::approval::{ApprovalChain, ApprovalLevel, Request};

pub(super) fn standard_chain() -> ApprovalChain {
    ApprovalChain::standard()
}

/// Three-level chain used to check that routing follows the supplied levels.
pub(super) fn branch_chain() -> ApprovalChain {
    ApprovalChain::new(vec![
        ApprovalLevel::new("Teller", 1_000),
        ApprovalLevel::new("Supervisor", 7_500),
        ApprovalLevel::new("Director", 25_000),
    ])
    .expect("branch chain is strictly increasing")
}

pub(super) fn loan(amount: u32) -> Request {
    Request::loan(amount)
}
