//! Shared test helpers for accord_staking tests.
//! Wires a pool with a Stellar asset principal, hands the claim token's
//! admin role to the pool, and provides mint/approve/deposit/fund plumbing.

#![cfg(test)]

use crate::{StakingPool, StakingPoolClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Vec};

pub struct Setup<'a> {
    pub client: StakingPoolClient<'a>,
    pub pool_id: Address,
    pub initializer: Address,
    pub governance: Address,
    pub treasury: Address,
    pub principal: Address,
    pub claim: Address,
    pub token_admin: Address,
}

/// Full pool setup with a Stellar asset principal and no initial reward
/// tokens beyond the principal itself.
pub fn setup(e: &Env) -> Setup<'_> {
    let token_admin = Address::generate(e);
    let principal = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    setup_with_principal(e, &principal, &token_admin)
}

/// Pool setup against a caller-provided principal token (used by the mock
/// fee-token and decimal-fairness tests).
pub fn setup_with_principal<'a>(
    e: &'a Env,
    principal: &Address,
    token_admin: &Address,
) -> Setup<'a> {
    e.mock_all_auths();

    let initializer = Address::generate(e);
    let governance = Address::generate(e);
    let treasury = Address::generate(e);

    let pool_id = e.register(StakingPool, (&initializer,));
    let client = StakingPoolClient::new(e, &pool_id);

    let claim = e
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    StellarAssetClient::new(e, &claim).set_admin(&pool_id);

    client.initialize(
        &initializer,
        &governance,
        principal,
        &claim,
        &treasury,
        &Vec::new(e),
    );

    Setup {
        client,
        pool_id,
        initializer,
        governance,
        treasury,
        principal: principal.clone(),
        claim,
        token_admin: token_admin.clone(),
    }
}

/// Register a fresh Stellar asset as a non-permanent reward token.
pub fn add_reward_token(e: &Env, s: &Setup) -> Address {
    let token = e
        .register_stellar_asset_contract_v2(s.token_admin.clone())
        .address();
    s.client.register_reward_token(&s.governance, &token, &false);
    token
}

/// Mint `amount` of a Stellar asset to `owner` and approve `spender`.
pub fn mint_and_approve(e: &Env, token: &Address, owner: &Address, spender: &Address, amount: i128) {
    StellarAssetClient::new(e, token).mint(owner, &amount);
    let expiration = e.ledger().sequence().saturating_add(10_000);
    TokenClient::new(e, token).approve(owner, spender, &amount, &expiration);
}

/// Mint, approve, and deposit principal for `user`.
pub fn deposit(e: &Env, s: &Setup, user: &Address, amount: i128) {
    mint_and_approve(e, &s.principal, user, &s.pool_id, amount);
    s.client.deposit(user, &amount);
}

/// Fund a reward token from a throwaway funder. Returns the funder.
pub fn fund(e: &Env, s: &Setup, token: &Address, amount: i128) -> Address {
    let funder = Address::generate(e);
    mint_and_approve(e, token, &funder, &s.pool_id, amount);
    s.client.fund(&funder, token, &amount);
    funder
}

pub fn advance_time(e: &Env, secs: u64) {
    e.ledger().with_mut(|li| li.timestamp += secs);
}

pub fn set_time(e: &Env, ts: u64) {
    e.ledger().with_mut(|li| li.timestamp = ts);
}

pub fn balance(e: &Env, token: &Address, id: &Address) -> i128 {
    TokenClient::new(e, token).balance(id)
}
