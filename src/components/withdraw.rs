//! Withdraw component for taking stake out of a pool.
//!
//! The same component drives both the amount-bound withdraw and the
//! exit-all-including-rewards flow; the latter has no amount field.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{
    action::Action,
    domain::{
        amount::{self, Decimals},
        input,
        status::{self, FlowKind, Submission, ValidationStatus},
        validation::{self, AmountValidation, BalanceInfo},
    },
};

use super::{Component, labels::ControlLabels};

/// Component for withdrawing staked tokens.
pub struct WithdrawControls {
    action_tx: UnboundedSender<Action>,
    decimals: Decimals,
    exit_all_balance: bool,
    labels: ControlLabels,
    pub amount: String,
    pub staked_balance: BalanceInfo,
}

impl WithdrawControls {
    pub fn new(
        action_tx: UnboundedSender<Action>,
        decimals: Decimals,
        exit_all_balance: bool,
    ) -> Self {
        Self {
            action_tx,
            decimals,
            exit_all_balance,
            labels: ControlLabels::with_action("Withdraw"),
            amount: String::new(),
            staked_balance: BalanceInfo::idle(),
        }
    }

    /// Replace the staked balance snapshot.
    pub fn set_balance(&mut self, balance: BalanceInfo) {
        self.staked_balance = balance;
    }

    pub fn flow(&self) -> FlowKind {
        if self.exit_all_balance {
            FlowKind::ExitAll
        } else {
            FlowKind::Withdraw
        }
    }

    /// Validator output for the current input.
    pub fn validation(&self) -> AmountValidation {
        validation::validate(&self.amount, self.staked_balance.amount.as_ref(), self.decimals)
    }

    pub fn status(&self) -> ValidationStatus {
        status::status_for(self.flow(), &self.staked_balance, &self.amount, self.decimals)
    }

    pub fn button_label(&self) -> &str {
        self.labels.label(self.status())
    }

    pub fn is_enabled(&self) -> bool {
        self.status().allows_submit()
    }

    /// The max shortcut is offered once a balance is known.
    pub fn shows_max(&self) -> bool {
        !self.exit_all_balance && self.validation().status != ValidationStatus::NotConnected
    }

    /// Staked balance at full precision, `"0"` while unknown.
    pub fn display_balance(&self) -> String {
        match &self.staked_balance.amount {
            Some(balance) => amount::format(balance, self.decimals.digits()),
            None => "0".to_string(),
        }
    }

    /// Clear the amount field.
    pub fn clear(&mut self) {
        self.amount.clear();
    }

    /// Put the whole staked balance into the amount field.
    pub fn fill_max(&mut self) {
        if self.exit_all_balance {
            return;
        }
        self.amount = self.validation().max_amount;
    }

    /// Append `text` if the result is still a legal amount prefix.
    fn push_input(&mut self, text: &str) {
        if self.exit_all_balance {
            return;
        }
        let candidate = format!("{}{}", self.amount, text);
        if input::accepts(&candidate, self.decimals) {
            self.amount = candidate;
        }
    }

    /// Dispatch the flow's action if its status allows it.
    pub fn submit(&mut self) -> Result<()> {
        let status = self.status();
        match Submission::for_status(status) {
            Submission::PromptConnect => {
                self.action_tx.send(Action::ShowAccount)?;
            }
            Submission::Dispatch if self.exit_all_balance => {
                self.action_tx.send(Action::WithdrawAllIncludingRewards)?;
            }
            Submission::Dispatch => {
                if let Some(amount) = self.validation().parsed_amount {
                    self.action_tx.send(Action::Withdraw(amount))?;
                }
            }
            Submission::Inert => {
                debug!("Ignoring {} submit while {}", self.flow(), status);
            }
        }
        Ok(())
    }
}

impl Component for WithdrawControls {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Enter => self.submit()?,
            KeyCode::Esc => self.clear(),
            KeyCode::Backspace => {
                self.amount.pop();
            }
            // 'm' can never be part of an amount, so it is free for the shortcut
            KeyCode::Char('m') => self.fill_max(),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.push_input(c.encode_utf8(&mut buf));
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_paste(&mut self, text: &str) -> Result<()> {
        self.push_input(text.trim());
        Ok(())
    }
}
