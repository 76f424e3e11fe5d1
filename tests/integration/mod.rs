//! Integration tests for stakepool-controls.
//!
//! Drives the public library the way the app does: key events into flow
//! components, actions out of the channel, collaborators invoked per action.

pub mod e2e_flows;
pub mod properties;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use stakepool_controls::{
    action::Action,
    components::Component,
    domain::amount::{Decimals, TokenAmount},
    infra::contract::{AccountModule, PoolContract},
};
use tokio::sync::mpsc::UnboundedReceiver;

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn type_str(component: &mut impl Component, s: &str) {
    for c in s.chars() {
        component
            .handle_key_event(key(KeyCode::Char(c)))
            .expect("key event");
    }
}

pub fn whole(n: u64) -> TokenAmount {
    TokenAmount::new(n, Decimals::new(0).expect("valid decimals"))
}

/// Drain pending actions and forward them to the collaborators, returning
/// what was handled.
pub fn pump(
    rx: &mut UnboundedReceiver<Action>,
    contract: &mut impl PoolContract,
    account: &mut impl AccountModule,
) -> Vec<Action> {
    let mut handled = Vec::new();
    while let Ok(action) = rx.try_recv() {
        match &action {
            Action::ShowAccount => account.show_account().expect("show account"),
            Action::Withdraw(amount) => contract.withdraw(amount).expect("withdraw"),
            Action::WithdrawAllIncludingRewards => contract
                .withdraw_all_including_rewards()
                .expect("withdraw all"),
            Action::ClaimRewards => contract.claim().expect("claim"),
            Action::Quit | Action::Error(_) => {}
        }
        handled.push(action);
    }
    handled
}
