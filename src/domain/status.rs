//! Flow status machine.
//!
//! One [`ValidationStatus`] is derived per flow from its balance snapshot and,
//! for amount-bound flows, the raw input. It is recomputed on every call and
//! never stored.

use serde::{Deserialize, Serialize};
use strum::Display;

use super::{
    amount::{Decimals, TokenAmount},
    validation::{self, BalanceInfo, LoadingStatus},
};

/// UI-facing status of a flow. Serialized in camelCase so it can key a
/// label table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ValidationStatus {
    NotConnected,
    InsufficientBalance,
    NoAmount,
    Loading,
    Valid,
}

impl ValidationStatus {
    /// Whether the submit button is enabled. `NotConnected` stays enabled so
    /// pressing it can prompt a wallet connection.
    pub fn allows_submit(self) -> bool {
        matches!(self, ValidationStatus::NotConnected | ValidationStatus::Valid)
    }
}

/// How a flow turns its inputs into a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    /// A typed amount is checked against the balance.
    AmountBound,
    /// The whole balance is the amount; no text field is consulted.
    WholeBalanceOnly { on_zero: ValidationStatus },
}

/// The three pool flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FlowKind {
    Withdraw,
    ExitAll,
    Claim,
}

impl FlowKind {
    pub fn mode(self) -> StatusMode {
        match self {
            FlowKind::Withdraw => StatusMode::AmountBound,
            FlowKind::ExitAll => StatusMode::WholeBalanceOnly {
                on_zero: ValidationStatus::InsufficientBalance,
            },
            FlowKind::Claim => StatusMode::WholeBalanceOnly {
                on_zero: ValidationStatus::NoAmount,
            },
        }
    }
}

impl StatusMode {
    /// Status for a balance and raw input. `input` is ignored by
    /// `WholeBalanceOnly`.
    pub fn status(
        self,
        balance: &BalanceInfo,
        input: &str,
        decimals: Decimals,
    ) -> ValidationStatus {
        if balance.amount.is_none() && balance.status == LoadingStatus::Loading {
            return ValidationStatus::Loading;
        }

        match self {
            StatusMode::AmountBound => {
                validation::validate(input, balance.amount.as_ref(), decimals).status
            }
            StatusMode::WholeBalanceOnly { on_zero } => {
                whole_balance_status(balance.amount.as_ref(), on_zero)
            }
        }
    }
}

fn whole_balance_status(
    balance: Option<&TokenAmount>,
    on_zero: ValidationStatus,
) -> ValidationStatus {
    match balance {
        None => ValidationStatus::NotConnected,
        Some(amount) if amount.is_zero() => on_zero,
        Some(_) => ValidationStatus::Valid,
    }
}

/// Status of `flow` for the given snapshot.
pub fn status_for(
    flow: FlowKind,
    balance: &BalanceInfo,
    input: &str,
    decimals: Decimals,
) -> ValidationStatus {
    flow.mode().status(balance, input, decimals)
}

/// What a submit event is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Ask the account module to connect a wallet; no transaction.
    PromptConnect,
    /// Invoke the flow's action exactly once.
    Dispatch,
    /// Do nothing.
    Inert,
}

impl Submission {
    pub fn for_status(status: ValidationStatus) -> Self {
        match status {
            ValidationStatus::NotConnected => Submission::PromptConnect,
            ValidationStatus::Valid => Submission::Dispatch,
            ValidationStatus::InsufficientBalance
            | ValidationStatus::NoAmount
            | ValidationStatus::Loading => Submission::Inert,
        }
    }
}
