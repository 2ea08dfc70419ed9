//! Protocol parameters (governance-controlled).
//!
//! Two wall-clock windows are tunable: the vesting window new funding
//! streams over, and the cooldown governance applies between a deposit and
//! a counted vote. Both carry defaults so the pool works unconfigured, and
//! bounds that keep a misconfigured value from bricking streams.

use accord_errors::ContractError;
use soroban_sdk::Env;

use crate::DataKey;

/// Default vesting window for newly funded rewards: 7 days.
pub const DEFAULT_VESTING_WINDOW_SECS: u64 = 7 * 24 * 60 * 60;

/// Vesting window bounds: one hour to one year.
pub const MIN_VESTING_WINDOW_SECS: u64 = 60 * 60;
pub const MAX_VESTING_WINDOW_SECS: u64 = 365 * 24 * 60 * 60;

/// Default vote cooldown after a deposit: 10 minutes.
pub const DEFAULT_VOTE_COOLDOWN_SECS: u64 = 10 * 60;

/// Vote cooldown upper bound: one day.
pub const MAX_VOTE_COOLDOWN_SECS: u64 = 24 * 60 * 60;

/// Seconds a funded reward amount streams over.
pub fn vesting_window_secs(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::VestingWindowSecs)
        .unwrap_or(DEFAULT_VESTING_WINDOW_SECS)
}

/// Store the vesting window. Caller is responsible for governance checks.
pub fn set_vesting_window_secs(e: &Env, value: u64) -> Result<(), ContractError> {
    if !(MIN_VESTING_WINDOW_SECS..=MAX_VESTING_WINDOW_SECS).contains(&value) {
        return Err(ContractError::InvalidParameter);
    }
    e.storage().instance().set(&DataKey::VestingWindowSecs, &value);
    Ok(())
}

/// Seconds that must elapse after a deposit before governance counts the
/// depositor's vote.
pub fn vote_cooldown_secs(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&DataKey::VoteCooldownSecs)
        .unwrap_or(DEFAULT_VOTE_COOLDOWN_SECS)
}

/// Store the vote cooldown. Caller is responsible for governance checks.
pub fn set_vote_cooldown_secs(e: &Env, value: u64) -> Result<(), ContractError> {
    if value > MAX_VOTE_COOLDOWN_SECS {
        return Err(ContractError::InvalidParameter);
    }
    e.storage().instance().set(&DataKey::VoteCooldownSecs, &value);
    Ok(())
}
