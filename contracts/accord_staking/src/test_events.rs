//! Event emission tests covering the notifications off-chain observers
//! rebuild ledger history from.

#![cfg(test)]

use crate::test_helpers::{
    add_reward_token, advance_time, deposit, fund, set_time, setup,
};
use crate::DEFAULT_VESTING_WINDOW_SECS;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Env, FromVal, Symbol};

#[test]
fn test_deposit_event() {
    let e = Env::default();
    let s = setup(&e);
    let user = Address::generate(&e);

    deposit(&e, &s, &user, 1_000);

    // Ignore the claim-token mint events; ours is the pool's last.
    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    let topic_account = Address::from_val(&e, &event.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "deposit"));
    assert_eq!(topic_account, user);

    let data = <(i128, i128, i128)>::from_val(&e, &event.2);
    assert_eq!(data, (1_000, 1_000, 1_000));
}

#[test]
fn test_withdrawal_event() {
    let e = Env::default();
    let s = setup(&e);
    let user = Address::generate(&e);
    let recipient = Address::generate(&e);

    deposit(&e, &s, &user, 1_000);
    s.client.withdraw(&user, &400, &recipient);

    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    let topic_account = Address::from_val(&e, &event.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "withdrawal"));
    assert_eq!(topic_account, user);

    let data = <(Address, i128, i128)>::from_val(&e, &event.2);
    assert_eq!(data, (recipient, 400, 600));
}

#[test]
fn test_claim_event() {
    let e = Env::default();
    set_time(&e, 10_000);
    let s = setup(&e);
    let user = Address::generate(&e);

    deposit(&e, &s, &user, 1_000);
    let token = add_reward_token(&e, &s);
    fund(&e, &s, &token, 700_000);
    advance_time(&e, DEFAULT_VESTING_WINDOW_SECS);

    s.client.claim(&user, &vec![&e, token.clone()], &user);

    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    let topic_account = Address::from_val(&e, &event.1.get(1).unwrap());
    let topic_token = Address::from_val(&e, &event.1.get(2).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "claim"));
    assert_eq!(topic_account, user);
    assert_eq!(topic_token, token);

    let data = <(Address, i128)>::from_val(&e, &event.2);
    assert_eq!(data, (user, 700_000));
}

#[test]
fn test_funded_event_tags_boost() {
    let e = Env::default();
    set_time(&e, 10_000);
    let s = setup(&e);
    let token = add_reward_token(&e, &s);

    crate::test_helpers::mint_and_approve(&e, &token, &s.treasury, &s.pool_id, 900_000);
    s.client
        .fund_from_treasury(&s.governance, &token, &900_000, &true);

    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    let topic_token = Address::from_val(&e, &event.1.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "funded"));
    assert_eq!(topic_token, token);

    let data = <(Address, i128, i128, bool)>::from_val(&e, &event.2);
    assert_eq!(data, (s.treasury.clone(), 900_000, 900_000, true));
}

#[test]
fn test_token_registered_event() {
    let e = Env::default();
    let s = setup(&e);
    let token = Address::generate(&e);

    s.client.register_reward_token(&s.governance, &token, &false);

    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "token_registered"));

    let data = <(Address, bool)>::from_val(&e, &event.2);
    assert_eq!(data, (token, false));
}

#[test]
fn test_token_retired_event() {
    let e = Env::default();
    let s = setup(&e);
    let token = Address::generate(&e);

    s.client.register_reward_token(&s.governance, &token, &false);
    s.client.retire_reward_token(&s.governance, &token);

    let event = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == s.pool_id)
        .unwrap();

    let topic_name = Symbol::from_val(&e, &event.1.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "token_retired"));

    let data = Address::from_val(&e, &event.2);
    assert_eq!(data, token);
}
