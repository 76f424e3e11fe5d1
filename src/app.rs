use color_eyre::eyre::{Result, eyre};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use stakepool_controls::{
    action::Action,
    components::{Component, claim::ClaimControls, withdraw::WithdrawControls},
    config::PoolConfig,
    domain::{
        amount::{Decimals, TokenAmount},
        validation::{BalanceInfo, LoadingStatus},
    },
    infra::contract::{AccountModule, ConsoleAccountModule, DryRunContract, PoolContract},
};

use crate::cli::{Args, Command};

pub struct App {
    pub should_quit: bool,
    pub config: PoolConfig,
    pub action_tx: UnboundedSender<Action>,
    pub action_rx: UnboundedReceiver<Action>,
    pub withdraw_component: WithdrawControls,
    pub exit_component: WithdrawControls,
    pub claim_component: ClaimControls,
    pub contract: Box<dyn PoolContract>,
    pub account_module: Box<dyn AccountModule>,
    pub status_message: String,
}

impl App {
    pub fn new(args: &Args) -> Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let config = PoolConfig::from_pool(&args.pool)?;
        let stake_decimals = config.stake_token.decimals;
        let reward_decimals = config.reward_token.decimals;

        let staked = balance_from_args(args.staked.as_deref(), args.loading, stake_decimals)?;
        let rewards = balance_from_args(args.rewards.as_deref(), args.loading, reward_decimals)?;

        let mut withdraw_component =
            WithdrawControls::new(action_tx.clone(), stake_decimals, false);
        let mut exit_component = WithdrawControls::new(action_tx.clone(), stake_decimals, true);
        let mut claim_component = ClaimControls::new(action_tx.clone(), reward_decimals);
        withdraw_component.set_balance(staked.clone());
        exit_component.set_balance(staked);
        claim_component.set_balance(rewards);

        let contract = DryRunContract::new(config.contract_group.clone());

        info!("Using pool {} ({})", config.name, config.contract_group);

        Ok(Self {
            should_quit: false,
            config,
            action_tx,
            action_rx,
            withdraw_component,
            exit_component,
            claim_component,
            contract: Box::new(contract),
            account_module: Box::new(ConsoleAccountModule::default()),
            status_message: String::new(),
        })
    }

    pub async fn run(&mut self, command: &Command) -> Result<()> {
        match command {
            Command::Status => {
                self.print_status();
                return Ok(());
            }
            Command::Withdraw { amount, max } => {
                if *max {
                    self.withdraw_component.fill_max();
                } else if let Some(amount) = amount {
                    self.type_amount(amount)?;
                }
                self.status_message = format!(
                    "Withdraw not submitted: {}",
                    self.withdraw_component.status()
                );
                self.withdraw_component.handle_key_event(enter())?;
            }
            Command::Exit => {
                self.status_message =
                    format!("Exit not submitted: {}", self.exit_component.status());
                self.exit_component.handle_key_event(enter())?;
            }
            Command::Claim => {
                self.status_message =
                    format!("Claim not submitted: {}", self.claim_component.status());
                self.claim_component.handle_key_event(enter())?;
            }
        }

        self.action_tx.send(Action::Quit)?;

        while let Some(action) = self.action_rx.recv().await {
            self.handle_action(action)?;
            if self.should_quit {
                break;
            }
        }
        // Failures are reported back through the channel after Quit.
        self.drain_actions()?;

        println!("{}", self.status_message);
        Ok(())
    }

    /// Replay `amount` as keystrokes. A keystroke the field refuses would
    /// leave a different amount than the one given, so that is an error.
    fn type_amount(&mut self, amount: &str) -> Result<()> {
        for c in amount.chars() {
            self.withdraw_component
                .handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))?;
        }

        if self.withdraw_component.amount != amount {
            return Err(eyre!(
                "'{}' is not a valid {} amount ({} decimals)",
                amount,
                self.config.stake_token.symbol,
                self.config.stake_token.decimals
            ));
        }
        Ok(())
    }

    fn drain_actions(&mut self) -> Result<()> {
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_action(action)?;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> Result<()> {
        debug!("Handling action: {:?}", action);
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::Error(msg) => {
                error!("{}", msg);
                self.status_message = msg;
            }
            Action::ShowAccount => {
                self.account_module.show_account()?;
                self.status_message = "Nothing submitted: no wallet connected".to_string();
            }
            Action::Withdraw(amount) => match self.contract.withdraw(&amount) {
                Ok(()) => {
                    self.status_message = format!(
                        "Withdrew {} {}",
                        amount,
                        self.config.stake_token.symbol
                    );
                    self.withdraw_component.clear();
                }
                Err(e) => {
                    self.action_tx
                        .send(Action::Error(format!("Withdraw failed: {}", e)))?;
                }
            },
            Action::WithdrawAllIncludingRewards => {
                match self.contract.withdraw_all_including_rewards() {
                    Ok(()) => {
                        self.status_message = format!(
                            "Withdrew {} {} and all {} rewards",
                            self.exit_component.display_balance(),
                            self.config.stake_token.symbol,
                            self.config.reward_token.symbol
                        );
                    }
                    Err(e) => {
                        self.action_tx
                            .send(Action::Error(format!("Exit failed: {}", e)))?;
                    }
                }
            }
            Action::ClaimRewards => match self.contract.claim() {
                Ok(()) => {
                    self.status_message = format!(
                        "Claimed {} {}",
                        self.claim_component.display_balance(),
                        self.config.reward_token.symbol
                    );
                }
                Err(e) => {
                    self.action_tx
                        .send(Action::Error(format!("Claim failed: {}", e)))?;
                }
            },
        }
        Ok(())
    }

    fn print_status(&self) {
        let stake = &self.config.stake_token.symbol;
        let reward = &self.config.reward_token.symbol;

        println!("Pool:      {} ({})", self.config.name, self.config.contract_group);
        if let Some(ref url) = self.config.liquidity_url {
            println!("Liquidity: {}", url);
        }
        println!(
            "Staked:    {} {}{}",
            self.withdraw_component.display_balance(),
            stake,
            loading_suffix(&self.withdraw_component.staked_balance)
        );
        println!(
            "Rewards:   {} {}{}",
            self.claim_component.display_balance(),
            reward,
            loading_suffix(&self.claim_component.rewards_balance)
        );
        println!();

        let max_amount = self.withdraw_component.validation().max_amount;
        println!(
            "withdraw   {:<20} [{}] max={}",
            self.withdraw_component.status().to_string(),
            self.withdraw_component.button_label(),
            if max_amount.is_empty() { "-" } else { max_amount.as_str() }
        );
        println!(
            "exit       {:<20} [{}]",
            self.exit_component.status().to_string(),
            self.exit_component.button_label()
        );
        println!(
            "claim      {:<20} [{}]",
            self.claim_component.status().to_string(),
            self.claim_component.button_label()
        );
    }
}

fn enter() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

fn balance_from_args(raw: Option<&str>, loading: bool, decimals: Decimals) -> Result<BalanceInfo> {
    let amount = raw
        .map(|s| TokenAmount::from_base_units_str(s, decimals))
        .transpose()
        .map_err(|e| eyre!("Invalid base-unit balance: {}", e))?;

    Ok(match (amount, loading) {
        (amount, true) => BalanceInfo {
            amount,
            status: LoadingStatus::Loading,
        },
        (Some(amount), false) => BalanceInfo::loaded(amount),
        (None, false) => BalanceInfo::idle(),
    })
}

fn loading_suffix(balance: &BalanceInfo) -> &'static str {
    if balance.status == LoadingStatus::Loading {
        " (loading)"
    } else {
        ""
    }
}
