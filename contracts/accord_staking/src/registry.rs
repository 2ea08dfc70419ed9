//! Token Lifecycle Registry.
//!
//! Tracks which tokens participate in reward streaming. Non-permanent
//! entries are bounded by a fixed slot count; the principal token and
//! explicitly trusted tokens bypass the cap. Retirement requires a fully
//! drained stream and deliberately leaves the accumulator and every debt
//! snapshot untouched: deleting them would mean iterating an unbounded
//! account set. The accumulator reset on (re-)registration plus stale-debt
//! healing on the next claim make retire/re-register cycles safe.

use accord_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::{events, rewards, streaming, Config, DataKey, RewardState};

/// Non-permanent reward token slots.
pub const MAX_REWARD_TOKENS: u32 = 10;

/// The ordered set of registered reward tokens.
pub fn reward_tokens(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::RewardTokens)
        .unwrap_or_else(|| Vec::new(e))
}

fn set_reward_tokens(e: &Env, tokens: &Vec<Address>) {
    e.storage().instance().set(&DataKey::RewardTokens, tokens);
}

/// Whether `token` is currently in the registered set.
pub fn is_registered(e: &Env, token: &Address) -> bool {
    e.storage()
        .persistent()
        .has(&DataKey::Reward(token.clone()))
}

fn non_permanent_count(e: &Env) -> u32 {
    let mut count = 0;
    for token in reward_tokens(e).iter() {
        if let Some(state) = streaming::get(e, &token) {
            if !state.permanent {
                count += 1;
            }
        }
    }
    count
}

/// Add `token` to the registered set with an empty, idle stream. First-time
/// and re-registration alike reset the per-share accumulator to zero.
pub fn register(
    e: &Env,
    cfg: &Config,
    token: &Address,
    permanent: bool,
) -> Result<(), ContractError> {
    if is_registered(e, token) {
        return Err(ContractError::TokenAlreadyRegistered);
    }

    let permanent = permanent || *token == cfg.principal_token;
    if !permanent && non_permanent_count(e) >= MAX_REWARD_TOKENS {
        return Err(ContractError::RewardSlotsFull);
    }

    let now = e.ledger().timestamp();
    let state = RewardState {
        permanent,
        vesting_remaining: 0,
        claimable_pool: 0,
        last_settled: now,
        vesting_start: now,
        vesting_end: now,
    };
    streaming::set(e, token, &state);
    rewards::set_acc_per_share(e, token, 0);

    let mut tokens = reward_tokens(e);
    tokens.push_back(token.clone());
    set_reward_tokens(e, &tokens);

    events::emit_token_registered(e, token, permanent);
    Ok(())
}

/// Remove `token` from the registered set. Requires a fully drained stream
/// (no claimable pool, nothing vesting) and that the token is neither
/// permanent nor the staking principal. Deletes the streaming state but
/// leaves the accumulator and all debt snapshots in place.
pub fn retire(e: &Env, cfg: &Config, token: &Address) -> Result<(), ContractError> {
    let state = streaming::must_get(e, token)?;

    if state.permanent || *token == cfg.principal_token {
        return Err(ContractError::TokenNotRetirable);
    }
    if state.claimable_pool != 0 || state.vesting_remaining != 0 {
        return Err(ContractError::TokenNotRetirable);
    }

    let mut tokens = reward_tokens(e);
    if let Some(index) = tokens.first_index_of(token.clone()) {
        let _ = tokens.remove(index);
    }
    set_reward_tokens(e, &tokens);
    streaming::remove(e, token);

    events::emit_token_retired(e, token);
    Ok(())
}
