//! Overflow-safe arithmetic helpers for financial calculations.
//!
//! All functions use checked arithmetic and map overflow/underflow/div-by-zero
//! onto the shared `ContractError` codes so callers can propagate with `?`.

use accord_errors::ContractError;

/// Checked `i128` addition.
#[inline]
pub fn add_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` subtraction.
#[inline]
pub fn sub_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

/// Checked `i128` multiplication.
#[inline]
pub fn mul_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

/// Checked `i128` division.
#[inline]
pub fn div_i128(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_div(b).ok_or(ContractError::DivisionByZero)
}

/// Checked `a * b / d`.
#[inline]
pub fn mul_div(a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    div_i128(mul_i128(a, b)?, d)
}

/// Checked `u64` addition.
#[inline]
pub fn add_u64(a: u64, b: u64) -> Result<u64, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}
