//! End-to-end flow tests.
//!
//! Covers the three pool flows against a dry-run contract:
//! 1. Not connected -> connect prompt only
//! 2. Withdraw a typed amount, then the max amount
//! 3. Exit-all and claim on zero and non-zero balances

use crossterm::event::KeyCode;
use stakepool_controls::{
    action::Action,
    components::{Component, claim::ClaimControls, withdraw::WithdrawControls},
    config::PoolConfig,
    domain::{
        amount::{self, TokenAmount},
        status::ValidationStatus,
        validation::BalanceInfo,
    },
    infra::contract::{ConsoleAccountModule, ContractCall, DryRunContract},
};
use tokio::sync::mpsc;

use super::{key, pump, type_str};

fn pool() -> PoolConfig {
    PoolConfig::from_pool("unipool-ant-v2-eth").expect("known pool")
}

#[test]
fn test_not_connected_only_prompts() {
    let pool = pool();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut withdraw = WithdrawControls::new(tx.clone(), pool.stake_token.decimals, false);
    let mut exit = WithdrawControls::new(tx.clone(), pool.stake_token.decimals, true);
    let mut claim = ClaimControls::new(tx, pool.reward_token.decimals);
    let mut contract = DryRunContract::new(pool.contract_group.clone());
    let mut account = ConsoleAccountModule::default();

    type_str(&mut withdraw, "1.5");
    withdraw.handle_key_event(key(KeyCode::Enter)).unwrap();
    exit.handle_key_event(key(KeyCode::Enter)).unwrap();
    claim.handle_key_event(key(KeyCode::Enter)).unwrap();

    let handled = pump(&mut rx, &mut contract, &mut account);
    assert_eq!(handled, vec![Action::ShowAccount; 3]);
    assert_eq!(account.prompts, 3);
    assert!(contract.calls.is_empty());
}

#[test]
fn test_withdraw_typed_then_max() {
    let pool = pool();
    let decimals = pool.stake_token.decimals;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut withdraw = WithdrawControls::new(tx, decimals, false);
    let mut contract = DryRunContract::new(pool.contract_group.clone());
    let mut account = ConsoleAccountModule::default();

    // 12.345678901234567891 UNI, beyond what an f64 can hold exactly.
    let staked = TokenAmount::from_base_units_str("12345678901234567891", decimals).unwrap();
    withdraw.set_balance(BalanceInfo::loaded(staked.clone()));

    type_str(&mut withdraw, "2.000000000000000001");
    assert_eq!(withdraw.status(), ValidationStatus::Valid);
    withdraw.handle_key_event(key(KeyCode::Enter)).unwrap();

    withdraw.handle_key_event(key(KeyCode::Esc)).unwrap();
    withdraw.handle_key_event(key(KeyCode::Char('m'))).unwrap();
    assert_eq!(withdraw.amount, "12.345678901234567891");
    withdraw.handle_key_event(key(KeyCode::Enter)).unwrap();

    pump(&mut rx, &mut contract, &mut account);
    assert_eq!(
        contract.calls,
        vec![
            ContractCall::Withdraw(TokenAmount::new(2_000_000_000_000_000_001u64, decimals)),
            ContractCall::Withdraw(staked),
        ]
    );
    assert_eq!(account.prompts, 0);
}

#[test]
fn test_withdraw_over_balance_is_inert() {
    let pool = pool();
    let decimals = pool.stake_token.decimals;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut withdraw = WithdrawControls::new(tx, decimals, false);
    let mut contract = DryRunContract::new(pool.contract_group.clone());
    let mut account = ConsoleAccountModule::default();

    withdraw.set_balance(BalanceInfo::loaded(amount::parse("1", decimals).unwrap()));
    type_str(&mut withdraw, "1.000000000000000001");
    assert_eq!(withdraw.status(), ValidationStatus::InsufficientBalance);
    assert_eq!(withdraw.button_label(), "Insufficient balance");

    withdraw.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(pump(&mut rx, &mut contract, &mut account).is_empty());
    assert!(contract.calls.is_empty());
}

#[test]
fn test_exit_and_claim() {
    let pool = PoolConfig::from_pool("balancer-ant-v2-usdc").unwrap();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut exit = WithdrawControls::new(tx.clone(), pool.stake_token.decimals, true);
    let mut claim = ClaimControls::new(tx, pool.reward_token.decimals);
    let mut contract = DryRunContract::new(pool.contract_group.clone());
    let mut account = ConsoleAccountModule::default();

    exit.set_balance(BalanceInfo::loaded(TokenAmount::zero(pool.stake_token.decimals)));
    claim.set_balance(BalanceInfo::loaded(TokenAmount::zero(pool.reward_token.decimals)));
    assert_eq!(exit.status(), ValidationStatus::InsufficientBalance);
    assert_eq!(claim.status(), ValidationStatus::NoAmount);
    exit.handle_key_event(key(KeyCode::Enter)).unwrap();
    claim.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(pump(&mut rx, &mut contract, &mut account).is_empty());

    exit.set_balance(BalanceInfo::loaded(TokenAmount::new(5u32, pool.stake_token.decimals)));
    claim.set_balance(BalanceInfo::loaded(TokenAmount::new(7u32, pool.reward_token.decimals)));
    exit.handle_key_event(key(KeyCode::Enter)).unwrap();
    claim.handle_key_event(key(KeyCode::Enter)).unwrap();

    let handled = pump(&mut rx, &mut contract, &mut account);
    assert_eq!(handled, vec![Action::WithdrawAllIncludingRewards, Action::ClaimRewards]);
    assert_eq!(
        contract.calls,
        vec![ContractCall::WithdrawAllIncludingRewards, ContractCall::Claim]
    );
    assert_eq!(contract.contract_group().to_string(), "balancer");
}

#[test]
fn test_loading_balance_blocks_submission() {
    let pool = pool();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut exit = WithdrawControls::new(tx.clone(), pool.stake_token.decimals, true);
    let mut claim = ClaimControls::new(tx, pool.reward_token.decimals);
    let mut contract = DryRunContract::new(pool.contract_group.clone());
    let mut account = ConsoleAccountModule::default();

    exit.set_balance(BalanceInfo::loading());
    claim.set_balance(BalanceInfo::loading());
    assert_eq!(exit.status(), ValidationStatus::Loading);
    assert_eq!(claim.status(), ValidationStatus::Loading);
    assert!(!exit.is_enabled());

    exit.handle_key_event(key(KeyCode::Enter)).unwrap();
    claim.handle_key_event(key(KeyCode::Enter)).unwrap();
    assert!(pump(&mut rx, &mut contract, &mut account).is_empty());
    assert_eq!(account.prompts, 0);
}
