use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

pub const DEFAULT_LOAN_MIN: u32 = 5_000;
pub const DEFAULT_LOAN_MAX: u32 = 50_000;

/// Problems with a loan amount supplied at the console, caught before the chain runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("no loan amount was provided")]
    Missing,
    #[error("'{input}' is not a valid loan amount")]
    NotANumber { input: String },
    #[error("The amount of loan is out of range, the range is {min}~{max}")]
    OutOfRange { amount: u32, min: u32, max: u32 },
}

/// Inclusive bounds the shell enforces on every amount it accepts.
///
/// Always `min <= max`; deserialized values go through [`LoanRange::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds")]
pub struct LoanRange {
    min: u32,
    max: u32,
}

#[derive(Deserialize)]
struct RangeBounds {
    min: u32,
    max: u32,
}

impl TryFrom<RangeBounds> for LoanRange {
    type Error = ConfigError;

    fn try_from(bounds: RangeBounds) -> Result<Self, Self::Error> {
        LoanRange::new(bounds.min, bounds.max)
    }
}

impl Default for LoanRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_LOAN_MIN,
            max: DEFAULT_LOAN_MAX,
        }
    }
}

impl LoanRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, amount: u32) -> bool {
        (self.min..=self.max).contains(&amount)
    }

    pub fn check(&self, amount: u32) -> Result<u32, AmountError> {
        if self.contains(amount) {
            Ok(amount)
        } else {
            Err(AmountError::OutOfRange {
                amount,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Reads a whole-number amount from user input; surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Result<u32, AmountError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Missing);
    }

    trimmed
        .parse::<u32>()
        .map_err(|_| AmountError::NotANumber {
            input: trimmed.to_string(),
        })
}
