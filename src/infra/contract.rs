use color_eyre::eyre::Result;
use tracing::info;

use crate::{config::ContractGroup, domain::amount::TokenAmount};

/// Transaction surface of a staking contract.
pub trait PoolContract {
    fn withdraw(&mut self, amount: &TokenAmount) -> Result<()>;
    fn withdraw_all_including_rewards(&mut self) -> Result<()>;
    fn claim(&mut self) -> Result<()>;
}

/// Wallet connection surface.
pub trait AccountModule {
    /// Ask the user to connect a wallet.
    fn show_account(&mut self) -> Result<()>;
}

/// A call made against a [`PoolContract`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractCall {
    Withdraw(TokenAmount),
    WithdrawAllIncludingRewards,
    Claim,
}

/// Contract client that records calls instead of broadcasting them.
pub struct DryRunContract {
    contract_group: ContractGroup,
    pub calls: Vec<ContractCall>,
}

impl DryRunContract {
    pub fn new(contract_group: ContractGroup) -> Self {
        Self {
            contract_group,
            calls: Vec::new(),
        }
    }

    pub fn contract_group(&self) -> &ContractGroup {
        &self.contract_group
    }
}

impl PoolContract for DryRunContract {
    fn withdraw(&mut self, amount: &TokenAmount) -> Result<()> {
        info!(
            "[{}] withdraw {} base units",
            self.contract_group,
            amount.base_units()
        );
        self.calls.push(ContractCall::Withdraw(amount.clone()));
        Ok(())
    }

    fn withdraw_all_including_rewards(&mut self) -> Result<()> {
        info!("[{}] withdrawAllIncludingRewards", self.contract_group);
        self.calls.push(ContractCall::WithdrawAllIncludingRewards);
        Ok(())
    }

    fn claim(&mut self) -> Result<()> {
        info!("[{}] claim", self.contract_group);
        self.calls.push(ContractCall::Claim);
        Ok(())
    }
}

/// Account module that asks for a wallet on the console.
#[derive(Default)]
pub struct ConsoleAccountModule {
    pub prompts: usize,
}

impl ConsoleAccountModule {
    pub const PROMPT: &'static str = "Connect a wallet to continue";
}

impl AccountModule for ConsoleAccountModule {
    fn show_account(&mut self) -> Result<()> {
        info!("Wallet connection requested");
        println!("{}", Self::PROMPT);
        self.prompts += 1;
        Ok(())
    }
}
