//! Event emitters for the staking pool.
//!
//! Off-chain observers reconstruct ledger history from these notifications
//! rather than by re-reading mutable state retroactively, so every mutating
//! operation publishes exactly one event per observable effect.

use soroban_sdk::{Address, Env, Symbol};

/// Emitted once when the pool is initialized.
///
/// # Topics
/// * `Symbol` - "initialized"
///
/// # Data
/// * `Address` - Governance address
/// * `Address` - Principal token
/// * `Address` - Claim token
pub fn emit_initialized(e: &Env, governance: &Address, principal: &Address, claim: &Address) {
    let topics = (Symbol::new(e, "initialized"),);
    let data = (governance.clone(), principal.clone(), claim.clone());
    e.events().publish(topics, data);
}

/// Emitted when an account deposits principal.
///
/// # Topics
/// * `Symbol` - "deposit"
/// * `Address` - The depositing account
///
/// # Data
/// * `i128` - The requested amount
/// * `i128` - The credited amount (measured balance delta)
/// * `i128` - The account's new staked balance
pub fn emit_deposit(e: &Env, account: &Address, requested: i128, credited: i128, staked: i128) {
    let topics = (Symbol::new(e, "deposit"), account.clone());
    let data = (requested, credited, staked);
    e.events().publish(topics, data);
}

/// Emitted when an account withdraws principal.
///
/// # Topics
/// * `Symbol` - "withdrawal"
/// * `Address` - The withdrawing account
///
/// # Data
/// * `Address` - The recipient of the principal
/// * `i128` - The amount withdrawn
/// * `i128` - The account's remaining staked balance
pub fn emit_withdrawal(
    e: &Env,
    account: &Address,
    recipient: &Address,
    amount: i128,
    remaining: i128,
) {
    let topics = (Symbol::new(e, "withdrawal"), account.clone());
    let data = (recipient.clone(), amount, remaining);
    e.events().publish(topics, data);
}

/// Emitted when a reward claim pays out a nonzero amount.
///
/// # Topics
/// * `Symbol` - "claim"
/// * `Address` - The claiming account
/// * `Address` - The reward token
///
/// # Data
/// * `Address` - The recipient of the reward
/// * `i128` - The amount paid
pub fn emit_claim(e: &Env, account: &Address, token: &Address, recipient: &Address, amount: i128) {
    let topics = (Symbol::new(e, "claim"), account.clone(), token.clone());
    let data = (recipient.clone(), amount);
    e.events().publish(topics, data);
}

/// Emitted when a reward token is funded.
///
/// # Topics
/// * `Symbol` - "funded"
/// * `Address` - The reward token
///
/// # Data
/// * `Address` - The funding source
/// * `i128` - The requested amount
/// * `i128` - The received amount (measured balance delta)
/// * `bool` - Whether this was a treasury boost action
pub fn emit_funded(
    e: &Env,
    token: &Address,
    source: &Address,
    requested: i128,
    received: i128,
    boost: bool,
) {
    let topics = (Symbol::new(e, "funded"), token.clone());
    let data = (source.clone(), requested, received, boost);
    e.events().publish(topics, data);
}

/// Emitted when a token joins the registered reward set.
///
/// # Topics
/// * `Symbol` - "token_registered"
///
/// # Data
/// * `Address` - The token
/// * `bool` - Whether the token is permanent (bypasses the slot cap)
pub fn emit_token_registered(e: &Env, token: &Address, permanent: bool) {
    let topics = (Symbol::new(e, "token_registered"),);
    let data = (token.clone(), permanent);
    e.events().publish(topics, data);
}

/// Emitted when a token is retired from the registered reward set.
///
/// # Topics
/// * `Symbol` - "token_retired"
///
/// # Data
/// * `Address` - The token
pub fn emit_token_retired(e: &Env, token: &Address) {
    let topics = (Symbol::new(e, "token_retired"),);
    e.events().publish(topics, token.clone());
}

/// Emitted when governance updates the vesting window.
///
/// # Topics
/// * `Symbol` - "vesting_window_updated"
///
/// # Data
/// * `u64` - Old window in seconds
/// * `u64` - New window in seconds
pub fn emit_vesting_window_updated(e: &Env, old_secs: u64, new_secs: u64) {
    let topics = (Symbol::new(e, "vesting_window_updated"),);
    e.events().publish(topics, (old_secs, new_secs));
}

/// Emitted when governance updates the vote cooldown.
///
/// # Topics
/// * `Symbol` - "vote_cooldown_updated"
///
/// # Data
/// * `u64` - Old cooldown in seconds
/// * `u64` - New cooldown in seconds
pub fn emit_vote_cooldown_updated(e: &Env, old_secs: u64, new_secs: u64) {
    let topics = (Symbol::new(e, "vote_cooldown_updated"),);
    e.events().publish(topics, (old_secs, new_secs));
}
