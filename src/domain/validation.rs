//! Amount validation against a balance snapshot.
//!
//! Everything here is a pure function of `(input, balance, decimals)`: the
//! same snapshot always yields the same result and nothing is cached between
//! evaluations.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::warn;

use super::{
    amount::{self, Decimals, ParseError, TokenAmount},
    status::ValidationStatus,
};

/// Progress of the balance fetch owned by the balance collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum LoadingStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// A balance snapshot. `amount == None` means the balance is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceInfo {
    pub amount: Option<TokenAmount>,
    pub status: LoadingStatus,
}

impl BalanceInfo {
    /// Nothing fetched yet (initial state, or wallet disconnected).
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn loading() -> Self {
        Self {
            amount: None,
            status: LoadingStatus::Loading,
        }
    }

    pub fn loaded(amount: TokenAmount) -> Self {
        Self {
            amount: Some(amount),
            status: LoadingStatus::Loaded,
        }
    }

    pub fn failed() -> Self {
        Self {
            amount: None,
            status: LoadingStatus::Error,
        }
    }
}

/// Why an input was not accepted as a transaction amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum RejectReason {
    Empty,
    NotANumber,
    ExceedsPrecision,
    ExceedsBalance,
    Zero,
}

impl From<ParseError> for RejectReason {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::Empty => RejectReason::Empty,
            ParseError::NotANumber => RejectReason::NotANumber,
            ParseError::ExceedsPrecision => RejectReason::ExceedsPrecision,
        }
    }
}

/// Fine-grained result of checking one input against a known balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationOutcome {
    /// Positive and within the balance.
    Exact(TokenAmount),
    Rejected(RejectReason),
}

impl ValidationOutcome {
    pub fn amount(&self) -> Option<&TokenAmount> {
        match self {
            Self::Exact(amount) => Some(amount),
            Self::Rejected(_) => None,
        }
    }
}

/// What an amount-bound flow needs to render and submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountValidation {
    /// Full balance rendered at token precision, or empty when unknown/zero.
    pub max_amount: String,
    pub status: ValidationStatus,
    /// The exact amount to submit. Only set when `status` is `Valid`.
    pub parsed_amount: Option<TokenAmount>,
}

impl AmountValidation {
    fn without_amount(status: ValidationStatus) -> Self {
        Self {
            max_amount: String::new(),
            status,
            parsed_amount: None,
        }
    }
}

/// Check `input` against a known `balance`.
pub fn validate_outcome(
    input: &str,
    balance: &TokenAmount,
    decimals: Decimals,
) -> ValidationOutcome {
    check(input, &at_precision(balance, decimals), decimals)
}

/// Derive max amount, status and the exact parsed amount for a withdraw field.
pub fn validate(
    input: &str,
    balance: Option<&TokenAmount>,
    decimals: Decimals,
) -> AmountValidation {
    let Some(balance) = balance else {
        return AmountValidation::without_amount(ValidationStatus::NotConnected);
    };
    let balance = at_precision(balance, decimals);

    if balance.is_zero() {
        return AmountValidation::without_amount(ValidationStatus::InsufficientBalance);
    }

    let max_amount = amount::format(&balance, decimals.digits());

    match check(input, &balance, decimals) {
        ValidationOutcome::Exact(parsed) => AmountValidation {
            max_amount,
            status: ValidationStatus::Valid,
            parsed_amount: Some(parsed),
        },
        ValidationOutcome::Rejected(RejectReason::ExceedsBalance) => AmountValidation {
            max_amount,
            status: ValidationStatus::InsufficientBalance,
            parsed_amount: None,
        },
        ValidationOutcome::Rejected(_) => AmountValidation {
            max_amount,
            status: ValidationStatus::NoAmount,
            parsed_amount: None,
        },
    }
}

/// `balance` counted at the flow's precision, so base units compare like for like.
fn at_precision(balance: &TokenAmount, decimals: Decimals) -> TokenAmount {
    if balance.decimals() != decimals {
        warn!(
            "Balance has {} decimals but the flow uses {}, rescaling",
            balance.decimals(),
            decimals
        );
    }
    balance.rescale(decimals)
}

fn check(input: &str, balance: &TokenAmount, decimals: Decimals) -> ValidationOutcome {
    let parsed = match amount::parse(input, decimals) {
        Ok(parsed) => parsed,
        Err(err) => return ValidationOutcome::Rejected(err.into()),
    };

    if parsed.is_zero() {
        ValidationOutcome::Rejected(RejectReason::Zero)
    } else if parsed.exceeds(balance) {
        ValidationOutcome::Rejected(RejectReason::ExceedsBalance)
    } else {
        ValidationOutcome::Exact(parsed)
    }
}
