//! Input validation shared by the public entry points.

use accord_errors::ContractError;

/// Reject zero and negative amounts before any state is touched.
#[inline]
pub fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::AmountMustBePositive);
    }
    Ok(())
}
