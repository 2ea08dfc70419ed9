//! Reentrancy guard held across every mutating entry point.
//!
//! Reward and principal tokens are external contracts; a transfer-out can
//! call back into the pool before state finalizes. The guard is a storage
//! flag checked on entry and cleared on exit. A failed invocation rolls the
//! flag back together with everything else, so the lock can never stick.

use accord_errors::ContractError;
use soroban_sdk::Env;

use crate::DataKey;

/// Run `f` with the reentrancy lock held.
pub fn with_guard<T, F: FnOnce() -> Result<T, ContractError>>(
    e: &Env,
    f: F,
) -> Result<T, ContractError> {
    if is_locked(e) {
        return Err(ContractError::ReentrancyDetected);
    }
    set_locked(e, true);
    let result = f();
    set_locked(e, false);
    result
}

/// Check whether the lock is currently held.
pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::ReentrancyLock)
        .unwrap_or(false)
}

fn set_locked(e: &Env, locked: bool) {
    e.storage().instance().set(&DataKey::ReentrancyLock, &locked);
}
