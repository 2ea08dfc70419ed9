//! Token movement helpers for the staking pool.
//! Centralizes allowance checks, transfer operations, and balance-delta
//! measurement for inbound transfers.

use accord_errors::ContractError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

fn token_client<'a>(e: &'a Env, token: &Address) -> TokenClient<'a> {
    TokenClient::new(e, token)
}

/// @notice Returns the pool's current balance of `token`.
pub fn held_balance(e: &Env, token: &Address) -> i128 {
    let contract = e.current_contract_address();
    token_client(e, token).balance(&contract)
}

/// @notice Checks that owner has granted the pool enough allowance for amount.
/// @dev Uses token allowance(owner, spender) where spender is the pool.
pub fn require_allowance(
    e: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let contract = e.current_contract_address();
    let allowance = token_client(e, token).allowance(owner, &contract);
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance);
    }
    Ok(())
}

/// @notice Transfers `amount` of `token` from owner into the pool.
/// @dev Returns the **measured balance delta**, which is the only amount the
///      ledger may credit: fee-charging tokens deliver less than requested.
pub fn transfer_in(
    e: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<i128, ContractError> {
    require_allowance(e, token, owner, amount)?;

    let contract = e.current_contract_address();
    let client = token_client(e, token);
    let before = client.balance(&contract);
    client.transfer_from(&contract, owner, &contract, &amount);
    let after = client.balance(&contract);

    let received = after.checked_sub(before).ok_or(ContractError::Underflow)?;
    if received <= 0 {
        return Err(ContractError::NothingReceived);
    }
    Ok(received)
}

/// @notice Transfers `amount` of `token` from the pool to recipient.
/// @dev Internal state must already be final: this is an external call.
pub fn transfer_out(
    e: &Env,
    token: &Address,
    recipient: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    if amount <= 0 {
        return Ok(());
    }
    let contract = e.current_contract_address();
    token_client(e, token).transfer(&contract, recipient, &amount);
    Ok(())
}
