//! Voting Power Oracle.
//!
//! Governance weighs votes by a time-weighted score derived from the stake
//! ledger: staked balance, normalized to 18 decimals, multiplied by whole
//! days staked. Normalization makes a low-precision and a high-precision
//! principal staked in equal value for equal duration score equally.
//!
//! The flow for the manipulation guard is:
//!   1. Every deposit stamps `last_stake_ts` (withdrawals do not).
//!   2. Governance reads `vote_eligible` before counting a vote.
//!   3. Any deposit inside the cooldown resets the gate regardless of the
//!      account's pre-existing accrued power, defeating the
//!      borrow→deposit→vote→withdraw composition.

use accord_errors::ContractError;

use crate::math;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Decimal precision all principal balances are rescaled to before scoring.
pub const NORMALIZED_DECIMALS: u32 = 18;

/// Rescale a balance from the principal token's native precision to an
/// 18-decimal equivalent. Checked: an amount too large to rescale is an
/// overflow error, never a silent wrap.
pub fn normalize_to_18(amount: i128, decimals: u32) -> Result<i128, ContractError> {
    if decimals == NORMALIZED_DECIMALS {
        return Ok(amount);
    }
    if decimals < NORMALIZED_DECIMALS {
        let factor = 10i128
            .checked_pow(NORMALIZED_DECIMALS - decimals)
            .ok_or(ContractError::Overflow)?;
        math::mul_i128(amount, factor)
    } else {
        let factor = 10i128
            .checked_pow(decimals - NORMALIZED_DECIMALS)
            .ok_or(ContractError::Overflow)?;
        math::div_i128(amount, factor)
    }
}

/// Time-weighted voting power: `normalize(staked) × days staked`.
pub fn power(
    staked: i128,
    decimals: u32,
    origin_ts: u64,
    now: u64,
) -> Result<i128, ContractError> {
    if staked <= 0 || now <= origin_ts {
        return Ok(0);
    }
    let normalized = normalize_to_18(staked, decimals)?;
    let staked_secs = (now - origin_ts) as i128;
    math::div_i128(
        math::mul_i128(normalized, staked_secs)?,
        SECONDS_PER_DAY as i128,
    )
}

/// Returns `true` when the vote cooldown has fully elapsed since the
/// account's most recent deposit. A `last_stake_ts` of 0 means the account
/// has never deposited.
#[must_use]
pub fn cooldown_elapsed(now: u64, last_stake_ts: u64, cooldown_secs: u64) -> bool {
    now >= last_stake_ts.saturating_add(cooldown_secs)
}
