//! Claim component for collecting accrued rewards.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use crate::{
    action::Action,
    domain::{
        amount::{self, Decimals},
        status::{self, FlowKind, Submission, ValidationStatus},
        validation::BalanceInfo,
    },
};

use super::{Component, labels::ControlLabels};

pub struct ClaimControls {
    action_tx: UnboundedSender<Action>,
    decimals: Decimals,
    labels: ControlLabels,
    pub rewards_balance: BalanceInfo,
}

impl ClaimControls {
    pub fn new(action_tx: UnboundedSender<Action>, decimals: Decimals) -> Self {
        Self {
            action_tx,
            decimals,
            labels: ControlLabels::claim(),
            rewards_balance: BalanceInfo::idle(),
        }
    }

    pub fn set_balance(&mut self, balance: BalanceInfo) {
        self.rewards_balance = balance;
    }

    pub fn status(&self) -> ValidationStatus {
        status::status_for(FlowKind::Claim, &self.rewards_balance, "", self.decimals)
    }

    pub fn button_label(&self) -> &str {
        self.labels.label(self.status())
    }

    pub fn is_enabled(&self) -> bool {
        self.status().allows_submit()
    }

    pub fn display_balance(&self) -> String {
        match &self.rewards_balance.amount {
            Some(rewards) => amount::format(rewards, self.decimals.digits()),
            None => "0".to_string(),
        }
    }

    pub fn submit(&mut self) -> Result<()> {
        let status = self.status();
        match Submission::for_status(status) {
            Submission::PromptConnect => self.action_tx.send(Action::ShowAccount)?,
            Submission::Dispatch => self.action_tx.send(Action::ClaimRewards)?,
            Submission::Inert => debug!("Ignoring claim while {}", status),
        }
        Ok(())
    }
}

impl Component for ClaimControls {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Enter {
            self.submit()?;
        }
        Ok(())
    }
}
