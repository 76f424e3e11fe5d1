use serde::{Deserialize, Serialize};
use strum::Display;

use crate::domain::amount::TokenAmount;

/// Actions emitted by the flow components and handled by the app loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Quit,
    Error(String),

    // Account
    ShowAccount,

    // Pool transactions
    Withdraw(TokenAmount),
    WithdrawAllIncludingRewards,
    ClaimRewards,
}
