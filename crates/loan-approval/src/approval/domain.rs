use serde::{Deserialize, Serialize};

/// Longest message a [`Response`] will carry; anything beyond is dropped.
pub const MAX_MESSAGE_LEN: usize = 100;

/// Placeholder stored when a response is built without a message.
pub const MISSING_MESSAGE: &str = "null";

/// Kind of business a request asks the bank to authorize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Loan,
}

impl BusinessType {
    pub fn code(self) -> u8 {
        match self {
            BusinessType::Loan => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BusinessType::Loan => "loan",
        }
    }
}

/// A single ask handed to the approval chain.
///
/// The loan amount is taken as-is: range validation belongs to whoever builds
/// the request (see [`super::LoanRange`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Request {
    business_type: BusinessType,
    loan_amount: u32,
}

impl Request {
    pub fn new(business_type: BusinessType, loan_amount: u32) -> Self {
        Self {
            business_type,
            loan_amount,
        }
    }

    pub fn loan(loan_amount: u32) -> Self {
        Self::new(BusinessType::Loan, loan_amount)
    }

    pub fn business_type(&self) -> BusinessType {
        self.business_type
    }

    pub fn loan_amount(&self) -> u32 {
        self.loan_amount
    }
}

/// Outcome of a trip through the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalResult {
    Approved,
    Rejected,
}

impl ApprovalResult {
    /// Numeric code reported to the console: 0 approved, 1 rejected.
    pub fn code(self) -> u8 {
        match self {
            ApprovalResult::Approved => 0,
            ApprovalResult::Rejected => 1,
        }
    }
}

/// Result plus a human-readable reason, produced by whichever level ends the traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ResponseRecord")]
pub struct Response {
    result: ApprovalResult,
    message: String,
}

#[derive(Deserialize)]
struct ResponseRecord {
    result: ApprovalResult,
    #[serde(default)]
    message: Option<String>,
}

impl From<ResponseRecord> for Response {
    fn from(record: ResponseRecord) -> Self {
        Response::new(record.result, record.message.as_deref())
    }
}

impl Response {
    /// Builds a response, substituting `"null"` for a missing message and
    /// silently truncating anything longer than [`MAX_MESSAGE_LEN`] characters.
    pub fn new(result: ApprovalResult, message: Option<&str>) -> Self {
        let message = match message {
            Some(text) => truncate_message(text),
            None => MISSING_MESSAGE.to_string(),
        };

        Self { result, message }
    }

    pub fn approved(message: &str) -> Self {
        Self::new(ApprovalResult::Approved, Some(message))
    }

    pub fn rejected(message: &str) -> Self {
        Self::new(ApprovalResult::Rejected, Some(message))
    }

    pub fn result(&self) -> ApprovalResult {
        self.result
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_approved(&self) -> bool {
        self.result == ApprovalResult::Approved
    }
}

fn truncate_message(text: &str) -> String {
    match text.char_indices().nth(MAX_MESSAGE_LEN) {
        Some((cut, _)) => text[..cut].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_respects_multibyte_boundaries() {
        let text = "é".repeat(MAX_MESSAGE_LEN + 5);
        let response = Response::rejected(&text);
        assert_eq!(response.message().chars().count(), MAX_MESSAGE_LEN);
        assert!(response.message().chars().all(|ch| ch == 'é'));
    }

    #[test]
    fn decoded_responses_keep_the_message_bound() {
        let long = "x".repeat(500);
        let payload = serde_json::json!({ "result": "approved", "message": long });

        let response: Response = serde_json::from_value(payload).expect("response decodes");

        assert_eq!(response.result(), ApprovalResult::Approved);
        assert_eq!(response.message().len(), MAX_MESSAGE_LEN);
    }

    #[test]
    fn decoded_response_without_message_reads_null() {
        let payload = serde_json::json!({ "result": "rejected", "message": null });

        let response: Response = serde_json::from_value(payload).expect("response decodes");

        assert_eq!(response.message(), MISSING_MESSAGE);
    }

    #[test]
    fn result_codes_match_console_contract() {
        assert_eq!(ApprovalResult::Approved.code(), 0);
        assert_eq!(ApprovalResult::Rejected.code(), 1);
        assert_eq!(BusinessType::Loan.code(), 1);
    }
}
