//! Reentrancy tests: a malicious reward token that calls back into the pool
//! from inside its transfer must not be able to double-draw.

#![cfg(test)]

use crate::test_helpers::{advance_time, deposit, set_time, setup};
use crate::test_token::{ReentrantToken, ReentrantTokenClient};
use crate::DEFAULT_VESTING_WINDOW_SECS;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

#[test]
fn test_reentrant_claim_is_rejected() {
    let e = Env::default();
    set_time(&e, 10_000);
    let s = setup(&e);
    let user = Address::generate(&e);

    deposit(&e, &s, &user, 1_000);

    // A reward token that re-enters pool.claim from inside transfer.
    let evil = e.register(ReentrantToken, ());
    let evil_client = ReentrantTokenClient::new(&e, &evil);
    s.client.register_reward_token(&s.governance, &evil, &false);

    let funder = Address::generate(&e);
    evil_client.mint(&funder, &700_000);
    evil_client.approve(&funder, &s.pool_id, &700_000, &10_000u32);
    s.client.fund(&funder, &evil, &700_000);
    advance_time(&e, DEFAULT_VESTING_WINDOW_SECS);

    // The payout transfer re-enters claim; the guard rejects it, which
    // fails the inner call and rolls the whole operation back.
    evil_client.set_reenter(&s.pool_id, &user);
    let result = s.client.try_claim(&user, &vec![&e, evil.clone()], &user);
    assert!(result.is_err());

    // Nothing was paid and nothing was lost.
    assert_eq!(evil_client.balance(&user), 0);
    assert_eq!(evil_client.balance(&s.pool_id), 700_000);
    assert!(!s.client.is_locked());
    assert_eq!(s.client.pending_reward(&user, &evil), 700_000);
}

#[test]
fn test_lock_releases_after_normal_operations() {
    let e = Env::default();
    let s = setup(&e);
    let user = Address::generate(&e);

    deposit(&e, &s, &user, 1_000);
    assert!(!s.client.is_locked());

    s.client.withdraw(&user, &500, &user);
    assert!(!s.client.is_locked());
}
