//! Initialization tests: one-time wiring gated on the construction-time
//! initializer, config contents, and launch-time token registration.

#![cfg(test)]

use crate::test_helpers::setup;
use crate::{ContractError, StakingPool, StakingPoolClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{vec, Address, Env, Vec};

#[test]
fn test_initialize_sets_config() {
    let e = Env::default();
    let s = setup(&e);

    let cfg = s.client.get_config();
    assert_eq!(cfg.governance, s.governance);
    assert_eq!(cfg.treasury, s.treasury);
    assert_eq!(cfg.principal_token, s.principal);
    assert_eq!(cfg.claim_token, s.claim);
    // Stellar assets expose 7 decimals.
    assert_eq!(cfg.principal_decimals, 7);
}

#[test]
fn test_initialize_registers_principal_as_permanent() {
    let e = Env::default();
    let s = setup(&e);

    let tokens = s.client.reward_tokens();
    assert_eq!(tokens, vec![&e, s.principal.clone()]);

    let state = s.client.reward_state(&s.principal).unwrap();
    assert!(state.permanent);
    assert_eq!(state.vesting_remaining, 0);
    assert_eq!(state.claimable_pool, 0);
}

#[test]
fn test_initialize_registers_initial_tokens() {
    let e = Env::default();
    e.mock_all_auths();

    let initializer = Address::generate(&e);
    let governance = Address::generate(&e);
    let treasury = Address::generate(&e);
    let token_admin = Address::generate(&e);

    let pool_id = e.register(StakingPool, (&initializer,));
    let client = StakingPoolClient::new(&e, &pool_id);

    let principal = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let claim = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    StellarAssetClient::new(&e, &claim).set_admin(&pool_id);

    let extra = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();

    client.initialize(
        &initializer,
        &governance,
        &principal,
        &claim,
        &treasury,
        &vec![&e, extra.clone()],
    );

    assert_eq!(
        client.reward_tokens(),
        vec![&e, principal.clone(), extra.clone()]
    );
    assert!(!client.reward_state(&extra).unwrap().permanent);
}

#[test]
fn test_reinitialize_rejected() {
    let e = Env::default();
    let s = setup(&e);

    let result = s.client.try_initialize(
        &s.initializer,
        &s.governance,
        &s.principal,
        &s.claim,
        &s.treasury,
        &Vec::new(&e),
    );
    assert_eq!(result, Err(Ok(ContractError::AlreadyInitialized)));
}

#[test]
fn test_initialize_wrong_caller_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let initializer = Address::generate(&e);
    let token_admin = Address::generate(&e);
    let pool_id = e.register(StakingPool, (&initializer,));
    let client = StakingPoolClient::new(&e, &pool_id);

    let principal = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    let claim = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();

    let intruder = Address::generate(&e);
    let result = client.try_initialize(
        &intruder,
        &intruder,
        &principal,
        &claim,
        &intruder,
        &Vec::new(&e),
    );
    assert_eq!(result, Err(Ok(ContractError::NotInitializer)));
}

#[test]
fn test_operations_before_initialize_rejected() {
    let e = Env::default();
    e.mock_all_auths();

    let initializer = Address::generate(&e);
    let pool_id = e.register(StakingPool, (&initializer,));
    let client = StakingPoolClient::new(&e, &pool_id);

    let user = Address::generate(&e);
    assert_eq!(
        client.try_deposit(&user, &100),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_withdraw(&user, &100, &user),
        Err(Ok(ContractError::NotInitialized))
    );
    assert_eq!(
        client.try_voting_power(&user),
        Err(Ok(ContractError::NotInitialized))
    );
}

#[test]
fn test_initialize_empty_pool_state() {
    let e = Env::default();
    let s = setup(&e);

    assert_eq!(s.client.total_staked(), 0);
    assert_eq!(s.client.escrow_balance(), 0);
    assert_eq!(s.client.staked_of(&s.governance), 0);
    assert_eq!(s.client.get_position(&s.governance), None);
    assert!(!s.client.is_locked());
}
