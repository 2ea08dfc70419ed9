//! Stake Ledger: per-account positions, global totals, principal escrow, and
//! the mirrored claim token.
//!
//! Every other component divides by the totals kept here, so all mutation
//! goes through the checked helpers below. The escrow counter keeps staked
//! principal distinct from the same token's reward-pool holdings when the
//! principal is itself a registered reward token.

use accord_errors::ContractError;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

use crate::{math, Config, DataKey, StakePosition};

/// Read an account's position, if it has one.
pub fn position(e: &Env, account: &Address) -> Option<StakePosition> {
    e.storage()
        .persistent()
        .get(&DataKey::Position(account.clone()))
}

pub fn set_position(e: &Env, account: &Address, pos: &StakePosition) {
    e.storage()
        .persistent()
        .set(&DataKey::Position(account.clone()), pos);
}

/// Tear down a fully-withdrawn position. Debt entries are left in place:
/// they persist indefinitely and must remain safe to read when stale.
pub fn remove_position(e: &Env, account: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Position(account.clone()));
}

/// An account's staked balance; zero without a position.
pub fn staked_of(e: &Env, account: &Address) -> i128 {
    position(e, account).map(|p| p.staked).unwrap_or(0)
}

/// Sum of all staked balances.
pub fn total_staked(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalStaked)
        .unwrap_or(0)
}

pub fn add_total_staked(e: &Env, delta: i128) -> Result<(), ContractError> {
    let next = math::add_i128(total_staked(e), delta)?;
    e.storage().instance().set(&DataKey::TotalStaked, &next);
    Ok(())
}

pub fn sub_total_staked(e: &Env, delta: i128) -> Result<(), ContractError> {
    let next = math::sub_i128(total_staked(e), delta)?;
    if next < 0 {
        return Err(ContractError::Underflow);
    }
    e.storage().instance().set(&DataKey::TotalStaked, &next);
    Ok(())
}

/// Held principal attributable to staked deposits rather than reward pools.
pub fn escrow_balance(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Escrow).unwrap_or(0)
}

pub fn add_escrow(e: &Env, delta: i128) -> Result<(), ContractError> {
    let next = math::add_i128(escrow_balance(e), delta)?;
    e.storage().instance().set(&DataKey::Escrow, &next);
    Ok(())
}

pub fn sub_escrow(e: &Env, delta: i128) -> Result<(), ContractError> {
    let next = math::sub_i128(escrow_balance(e), delta)?;
    if next < 0 {
        return Err(ContractError::Underflow);
    }
    e.storage().instance().set(&DataKey::Escrow, &next);
    Ok(())
}

/// Mint claim tokens 1:1 against newly credited principal. The pool is the
/// claim token's admin.
pub fn mint_claim(e: &Env, cfg: &Config, to: &Address, amount: i128) {
    StellarAssetClient::new(e, &cfg.claim_token).mint(to, &amount);
}

/// Burn claim tokens 1:1 against withdrawn principal. Burns from the staker,
/// who has already authorized the enclosing withdrawal.
pub fn burn_claim(e: &Env, cfg: &Config, from: &Address, amount: i128) {
    TokenClient::new(e, &cfg.claim_token).burn(from, &amount);
}
