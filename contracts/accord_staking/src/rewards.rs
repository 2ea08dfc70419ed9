//! Cumulative Debt Accountant.
//!
//! Entitlement is computed without iterating accounts: a global per-share
//! accumulator advances as rewards vest, and each (account, token) pair
//! snapshots it as "debt" at every settlement. Newly earned reward is
//! `balance × (acc − debt) / SHARE_SCALE`.
//!
//! A debt exceeding the current accumulator is only possible after a token
//! was retired (accumulator reset) and later re-registered; the effective
//! debt then heals to zero so the account keeps everything accrued since
//! re-registration. Every deposit/withdrawal runs the full claim sequence
//! with the pre-mutation balance before balances move; this is the defense
//! against same-transaction dilution.

use accord_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::{events, math, registry, streaming, token_transfers, DataKey};

/// Fixed-point scale for the per-share accumulator.
pub const SHARE_SCALE: i128 = 1_000_000_000_000;

/// Global per-share accumulator for `token`. Survives retirement; reset to
/// zero only on (re-)registration.
pub fn acc_per_share(e: &Env, token: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::AccPerShare(token.clone()))
        .unwrap_or(0)
}

pub fn set_acc_per_share(e: &Env, token: &Address, value: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::AccPerShare(token.clone()), &value);
}

/// The accumulator snapshot taken at `account`'s last settlement of `token`.
pub fn debt_of(e: &Env, account: &Address, token: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::Debt(account.clone(), token.clone()))
        .unwrap_or(0)
}

pub fn set_debt(e: &Env, account: &Address, token: &Address, value: i128) {
    e.storage()
        .persistent()
        .set(&DataKey::Debt(account.clone(), token.clone()), &value);
}

/// Stale-debt auto-heal: a debt above the accumulator proves the token was
/// retired and re-registered since the account last settled. Healing to zero
/// (not to the current accumulator) keeps everything accrued since
/// re-registration claimable.
#[must_use]
pub fn effective_debt(debt: i128, acc: i128) -> i128 {
    if debt > acc {
        0
    } else {
        debt
    }
}

/// Newly earned reward for a balance held since the `eff_debt` snapshot.
pub fn pending_amount(staked: i128, acc: i128, eff_debt: i128) -> Result<i128, ContractError> {
    if staked <= 0 {
        return Ok(0);
    }
    math::mul_div(staked, math::sub_i128(acc, eff_debt)?, SHARE_SCALE)
}

/// Full claim sequence for one (account, token) pair: settle the stream,
/// heal stale debt, pay the pending share to `recipient`, and re-anchor the
/// debt snapshot unconditionally so the same interval cannot be claimed
/// twice. Returns the amount paid.
pub fn claim_one(
    e: &Env,
    account: &Address,
    token: &Address,
    staked: i128,
    recipient: &Address,
) -> Result<i128, ContractError> {
    streaming::settle(e, token)?;

    let acc = acc_per_share(e, token);
    let debt = debt_of(e, account, token);
    let pending = pending_amount(staked, acc, effective_debt(debt, acc))?;

    set_debt(e, account, token, acc);

    if pending > 0 {
        let mut state = streaming::must_get(e, token)?;
        if pending > state.claimable_pool {
            return Err(ContractError::InsufficientRewardPool);
        }
        state.claimable_pool = math::sub_i128(state.claimable_pool, pending)?;
        streaming::set(e, token, &state);

        token_transfers::transfer_out(e, token, recipient, pending)?;
        events::emit_claim(e, account, token, recipient, pending);
    }
    Ok(pending)
}

/// Settle and pay out every registered reward token for `account` at its
/// current balance. Deposits and withdrawals call this before any balance
/// mutation: the accountant's formula is only correct while the balance is
/// constant between settlements.
pub fn harvest_all(e: &Env, account: &Address, staked: i128) -> Result<(), ContractError> {
    for token in registry::reward_tokens(e).iter() {
        claim_one(e, account, &token, staked, account)?;
    }
    Ok(())
}
