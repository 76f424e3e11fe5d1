//! Properties of the amount pipeline that must hold for every input.

use num_bigint::BigUint;
use stakepool_controls::domain::{
    amount::{self, Decimals, MAX_DECIMALS, TokenAmount},
    input,
    status::{FlowKind, ValidationStatus, status_for},
    validation::{self, BalanceInfo},
};

use super::whole;

#[test]
fn test_round_trip_every_precision() {
    let samples = [
        "0",
        "1",
        "999",
        "1000000000000000000",
        "115792089237316195423570985008687907853269984665640564039457584007913129639935",
    ];
    for d in 0..=MAX_DECIMALS {
        let decimals = Decimals::new(d).unwrap();
        for sample in samples {
            let x = TokenAmount::from_base_units_str(sample, decimals).unwrap();
            let rendered = amount::format(&x, decimals.digits());
            assert_eq!(amount::parse(&rendered, decimals).unwrap(), x, "{sample} @ {d}");
        }
    }
}

#[test]
fn test_filter_rejects_two_dots_or_long_fractions() {
    for d in 0..=MAX_DECIMALS {
        let decimals = Decimals::new(d).unwrap();
        assert!(!input::accepts("1.2.3", decimals));
        assert!(!input::accepts("..", decimals));

        let too_long = format!("0.{}", "1".repeat(usize::from(d) + 1));
        assert!(!input::accepts(&too_long, decimals));

        let just_right = format!("0.{}", "1".repeat(usize::from(d)));
        assert!(input::accepts(&just_right, decimals));
    }
}

#[test]
fn test_accepted_complete_inputs_parse() {
    let decimals = Decimals::new(4).unwrap();
    for s in ["0", "1.", ".5", "12.3456", "00.0001"] {
        assert!(input::accepts(s, decimals));
        assert!(amount::parse(s, decimals).is_ok(), "{s}");
    }
}

#[test]
fn test_validator_table() {
    let zero = Decimals::new(0).unwrap();

    for input in ["", "50", "junk"] {
        assert_eq!(
            validation::validate(input, None, Decimals::ERC20).status,
            ValidationStatus::NotConnected
        );
    }

    let balance = TokenAmount::new(100u32, Decimals::ERC20);
    let empty = validation::validate("", Some(&balance), Decimals::ERC20);
    assert_eq!(empty.status, ValidationStatus::NoAmount);
    assert_eq!(empty.parsed_amount, None);

    let valid = validation::validate("50", Some(&whole(100)), zero);
    assert_eq!(valid.status, ValidationStatus::Valid);
    assert_eq!(valid.parsed_amount, Some(whole(50)));

    assert_eq!(
        validation::validate("150", Some(&whole(100)), zero).status,
        ValidationStatus::InsufficientBalance
    );
    assert_eq!(
        validation::validate("0", Some(&whole(100)), zero).status,
        ValidationStatus::NoAmount
    );
}

#[test]
fn test_exit_all_machine() {
    let zero = Decimals::new(0).unwrap();
    assert_eq!(
        status_for(FlowKind::ExitAll, &BalanceInfo::loaded(whole(0)), "", zero),
        ValidationStatus::InsufficientBalance
    );
    assert_eq!(
        status_for(FlowKind::ExitAll, &BalanceInfo::idle(), "", zero),
        ValidationStatus::NotConnected
    );
    assert_eq!(
        status_for(FlowKind::ExitAll, &BalanceInfo::loaded(whole(5)), "not a number", zero),
        ValidationStatus::Valid
    );
}

#[test]
fn test_validation_is_idempotent() {
    let balance = TokenAmount::new(BigUint::from(u128::MAX) * 1000u32, Decimals::new(30).unwrap());
    let decimals = balance.decimals();
    for input in ["", "1", "340282366920938463.4633", "1.2.3", "0"] {
        let first = validation::validate(input, Some(&balance), decimals);
        let second = validation::validate(input, Some(&balance), decimals);
        assert_eq!(first, second, "{input}");
    }
}
