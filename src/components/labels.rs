//! Button labels keyed by flow status.

use serde::{Deserialize, Serialize};

use crate::domain::status::ValidationStatus;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlLabels {
    pub not_connected: String,
    pub insufficient_balance: String,
    pub no_amount: String,
    pub loading: String,
    pub valid: String,
}

impl ControlLabels {
    /// Generic labels with `action` shown when the flow can be submitted.
    pub fn with_action(action: &str) -> Self {
        Self {
            not_connected: "Connect wallet".to_string(),
            insufficient_balance: "Insufficient balance".to_string(),
            no_amount: "Enter an amount".to_string(),
            loading: "Loading".to_string(),
            valid: action.to_string(),
        }
    }

    pub fn claim() -> Self {
        Self {
            not_connected: "Connect wallet".to_string(),
            insufficient_balance: String::new(),
            no_amount: "No rewards to claim".to_string(),
            loading: String::new(),
            valid: "Claim rewards".to_string(),
        }
    }

    pub fn label(&self, status: ValidationStatus) -> &str {
        match status {
            ValidationStatus::NotConnected => &self.not_connected,
            ValidationStatus::InsufficientBalance => &self.insufficient_balance,
            ValidationStatus::NoAmount => &self.no_amount,
            ValidationStatus::Loading => &self.loading,
            ValidationStatus::Valid => &self.valid,
        }
    }
}
