#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring, alerting, and dashboards.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup and initialization errors (codes 1-99).
    Initialization,
    /// Caller identity and permission errors (codes 100-199).
    Authorization,
    /// Stake ledger errors (codes 200-299).
    Stake,
    /// Reward streaming and claim errors (codes 300-399).
    Rewards,
    /// Reward-token lifecycle registry errors (codes 400-499).
    Registry,
    /// Protocol parameter errors (codes 500-599).
    Parameter,
    /// Safe-math errors (codes 700-799).
    Arithmetic,
}

/// @title  ContractError
/// @notice Canonical error enum shared by all Accord smart contracts.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///         Use the ErrorExt trait to retrieve the category and description.
///
/// Error Code Layout:
///   1  -  99  : Initialization
///   100 - 199 : Authorization
///   200 - 299 : Stake
///   300 - 399 : Rewards
///   400 - 499 : Registry
///   500 - 599 : Parameter
///   700 - 799 : Arithmetic
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Initialization (1-99) ---
    /// Contract has not been initialized yet.
    /// Contracts: staking
    NotInitialized = 1,

    /// Contract has already been initialized and cannot be re-initialized.
    /// Contracts: staking
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the initializer fixed at construction time.
    /// Contracts: staking
    NotInitializer = 100,

    /// Caller is not the governance address.
    /// Contracts: staking
    NotGovernance = 101,

    // --- Stake (200-299) ---
    /// Amount argument must be strictly positive (> 0).
    /// Contracts: staking
    AmountMustBePositive = 200,

    /// Requested withdrawal exceeds the caller's staked balance.
    /// Contracts: staking
    InsufficientStake = 201,

    /// No stake position exists for the given account.
    /// Contracts: staking
    PositionNotFound = 202,

    /// A transfer-in moved no tokens into the contract.
    /// Contracts: staking
    NothingReceived = 203,

    /// Token allowance granted to the contract is insufficient.
    /// Contracts: staking
    InsufficientAllowance = 204,

    /// Reentrancy was detected; the call is rejected.
    /// Contracts: staking
    ReentrancyDetected = 205,

    // --- Rewards (300-399) ---
    /// Token is not in the registered reward set.
    /// Contracts: staking
    TokenNotRegistered = 300,

    /// A claim would draw more than the token's claimable pool holds.
    /// Contracts: staking
    InsufficientRewardPool = 301,

    // --- Registry (400-499) ---
    /// Token is already in the registered reward set.
    /// Contracts: staking
    TokenAlreadyRegistered = 400,

    /// All non-permanent reward token slots are occupied.
    /// Contracts: staking
    RewardSlotsFull = 401,

    /// Token cannot be retired: pool or stream outstanding, or the token
    /// is permanent or the staking principal.
    /// Contracts: staking
    TokenNotRetirable = 402,

    // --- Parameter (500-599) ---
    /// Parameter value is outside its permitted bounds.
    /// Contracts: staking
    InvalidParameter = 500,

    // --- Arithmetic (700-799) ---
    /// Integer overflow detected during a checked arithmetic operation.
    /// Contracts: staking
    Overflow = 700,

    /// Integer underflow detected during a checked arithmetic operation.
    /// Contracts: staking
    Underflow = 701,

    /// Division by zero detected during a checked arithmetic operation.
    /// Contracts: staking
    DivisionByZero = 702,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
/// @dev    Use this for structured logging, monitoring, and off-chain display.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotInitialized | ContractError::AlreadyInitialized => {
                ErrorCategory::Initialization
            }
            ContractError::NotInitializer | ContractError::NotGovernance => {
                ErrorCategory::Authorization
            }

            ContractError::AmountMustBePositive
            | ContractError::InsufficientStake
            | ContractError::PositionNotFound
            | ContractError::NothingReceived
            | ContractError::InsufficientAllowance
            | ContractError::ReentrancyDetected => ErrorCategory::Stake,

            ContractError::TokenNotRegistered | ContractError::InsufficientRewardPool => {
                ErrorCategory::Rewards
            }

            ContractError::TokenAlreadyRegistered
            | ContractError::RewardSlotsFull
            | ContractError::TokenNotRetirable => ErrorCategory::Registry,

            ContractError::InvalidParameter => ErrorCategory::Parameter,

            ContractError::Overflow
            | ContractError::Underflow
            | ContractError::DivisionByZero => ErrorCategory::Arithmetic,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract has not been initialized",
            ContractError::AlreadyInitialized => "Contract has already been initialized",
            ContractError::NotInitializer => "Caller is not the construction-time initializer",
            ContractError::NotGovernance => "Caller is not the governance address",
            ContractError::AmountMustBePositive => "Amount must be strictly positive (> 0)",
            ContractError::InsufficientStake => "Withdrawal exceeds the staked balance",
            ContractError::PositionNotFound => "No stake position for the given account",
            ContractError::NothingReceived => "Transfer-in moved no tokens into the contract",
            ContractError::InsufficientAllowance => "Token allowance is insufficient",
            ContractError::ReentrancyDetected => "Reentrancy detected; call rejected",
            ContractError::TokenNotRegistered => "Token is not a registered reward token",
            ContractError::InsufficientRewardPool => {
                "Claim exceeds the token's claimable reward pool"
            }
            ContractError::TokenAlreadyRegistered => "Token is already a registered reward token",
            ContractError::RewardSlotsFull => "All non-permanent reward token slots are occupied",
            ContractError::TokenNotRetirable => {
                "Token has an outstanding pool or stream, or is permanent"
            }
            ContractError::InvalidParameter => "Parameter value is outside permitted bounds",
            ContractError::Overflow => "Integer overflow in checked arithmetic",
            ContractError::Underflow => "Integer underflow in checked arithmetic",
            ContractError::DivisionByZero => "Division by zero in checked arithmetic",
        }
    }
}
