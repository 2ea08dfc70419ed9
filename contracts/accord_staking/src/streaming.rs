//! Reward Streaming Engine.
//!
//! Each registered token owns a vesting window over which funded rewards
//! unlock linearly into its claimable pool. Settlement is lazy: every
//! read/mutation settles first, vesting the elapsed-proportional share and
//! bumping the per-share accumulator.
//!
//! While `total_staked == 0` the stream pauses: `last_settled` is frozen and
//! nothing vests, so the last staker's exit never forfeits unvested rewards
//! to nobody. The first deposit after a zero-staked interval resumes every
//! stream by shifting its window forward by the paused duration.

use accord_errors::ContractError;
use soroban_sdk::{Address, Env};

use crate::{math, parameters, registry, rewards, stake, DataKey, RewardState};

/// Read a token's streaming state, if the token is registered.
pub fn get(e: &Env, token: &Address) -> Option<RewardState> {
    e.storage().persistent().get(&DataKey::Reward(token.clone()))
}

/// Read a token's streaming state, failing for unregistered tokens.
pub fn must_get(e: &Env, token: &Address) -> Result<RewardState, ContractError> {
    get(e, token).ok_or(ContractError::TokenNotRegistered)
}

pub fn set(e: &Env, token: &Address, state: &RewardState) {
    e.storage()
        .persistent()
        .set(&DataKey::Reward(token.clone()), state);
}

pub fn remove(e: &Env, token: &Address) {
    e.storage()
        .persistent()
        .remove(&DataKey::Reward(token.clone()));
}

/// Amount vested between `last_settled` and `now`, proportional to the
/// elapsed share of the remaining window. Past the window end the entire
/// remainder has vested.
pub fn accrued_at(state: &RewardState, now: u64) -> Result<i128, ContractError> {
    if state.vesting_remaining <= 0 || now <= state.last_settled {
        return Ok(0);
    }
    if now >= state.vesting_end {
        return Ok(state.vesting_remaining);
    }
    let elapsed = (now - state.last_settled) as i128;
    let remaining_window = (state.vesting_end - state.last_settled) as i128;
    if remaining_window <= 0 {
        return Ok(state.vesting_remaining);
    }
    math::mul_div(state.vesting_remaining, elapsed, remaining_window)
}

/// Lazily advance vesting for `token`. Moves the vested share into the
/// claimable pool and bumps the per-share accumulator, but only while
/// `total_staked > 0`. At zero stake this is a no-op and `last_settled`
/// does not advance (the pause).
pub fn settle(e: &Env, token: &Address) -> Result<(), ContractError> {
    let mut state = must_get(e, token)?;
    let now = e.ledger().timestamp();
    let total = stake::total_staked(e);
    if total <= 0 || now <= state.last_settled {
        return Ok(());
    }

    let vested = accrued_at(&state, now)?;
    if vested > 0 {
        state.vesting_remaining = math::sub_i128(state.vesting_remaining, vested)?;
        state.claimable_pool = math::add_i128(state.claimable_pool, vested)?;

        let acc = rewards::acc_per_share(e, token);
        let bump = math::mul_div(vested, rewards::SHARE_SCALE, total)?;
        rewards::set_acc_per_share(e, token, math::add_i128(acc, bump)?);
    }
    state.last_settled = now;
    set(e, token, &state);
    Ok(())
}

/// Fold newly received funding into the stream: settle what has already
/// vested, then roll the un-vested remainder together with `received` into a
/// fresh window starting now.
pub fn roll_window(e: &Env, token: &Address, received: i128) -> Result<(), ContractError> {
    settle(e, token)?;

    let mut state = must_get(e, token)?;
    let now = e.ledger().timestamp();
    state.vesting_remaining = math::add_i128(state.vesting_remaining, received)?;
    state.vesting_start = now;
    state.vesting_end = math::add_u64(now, parameters::vesting_window_secs(e))?;
    state.last_settled = now;
    set(e, token, &state);
    Ok(())
}

/// Resume every paused stream after a zero-staked interval. Windows shift
/// forward by the paused duration so streaming continues at its original
/// rate; the preserved remainder is not dumped on the first depositor.
pub fn resume_all(e: &Env, now: u64) -> Result<(), ContractError> {
    for token in registry::reward_tokens(e).iter() {
        if let Some(mut state) = get(e, &token) {
            if now <= state.last_settled {
                continue;
            }
            let paused = now - state.last_settled;
            if state.vesting_remaining > 0 {
                state.vesting_start = math::add_u64(state.vesting_start, paused)?;
                state.vesting_end = math::add_u64(state.vesting_end, paused)?;
            }
            state.last_settled = now;
            set(e, &token, &state);
        }
    }
    Ok(())
}
