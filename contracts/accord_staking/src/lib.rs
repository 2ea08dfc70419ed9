#![no_std]

//! # Accord Staking Pool
//!
//! Reward-and-participation ledger for the Accord governance protocol.
//! Accounts deposit the principal token and receive a mirrored claim token;
//! while staked they accrue a share of every registered reward stream and a
//! time-weighted voting-power score consumed by the governance contract.
//!
//! ## Components
//! - Stake ledger: positions, totals, principal escrow, claim-token mirror
//! - Streaming engine: per-token vesting windows with lazy settlement
//! - Debt accountant: per-share accumulator + debt snapshots, settled
//!   before every balance mutation
//! - Lifecycle registry: bounded reward-token set with safe re-admission
//! - Voting oracle: decimal-normalized, time-weighted score plus a
//!   deposit-cooldown gate
//!
//! ## Security
//! - One-time initialization gated on an address fixed at construction
//! - Reentrancy lock held across every mutating entry point
//! - Transfer-in amounts measured as balance deltas (fee-token safe)
//! - Settlement-before-mutation defeats same-transaction dilution

use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Vec};

pub use accord_errors::{ContractError, ErrorExt};

mod events;
mod guard;
mod math;
mod parameters;
mod registry;
mod rewards;
mod stake;
mod streaming;
mod token_transfers;
mod validation;
mod voting;

pub use parameters::{DEFAULT_VESTING_WINDOW_SECS, DEFAULT_VOTE_COOLDOWN_SECS};
pub use registry::MAX_REWARD_TOKENS;
pub use rewards::SHARE_SCALE;
pub use voting::{NORMALIZED_DECIMALS, SECONDS_PER_DAY};

/// Pool wiring fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Gates lifecycle operations, parameters, and treasury funding.
    pub governance: Address,
    /// Source of `fund_from_treasury` transfers.
    pub treasury: Address,
    /// The staked token.
    pub principal_token: Address,
    /// Mirrored 1:1 receipt token; the pool is its admin.
    pub claim_token: Address,
    /// Native decimal precision of the principal token.
    pub principal_decimals: u32,
}

/// One account's stake.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    pub staked: i128,
    /// Anchors the time-weighting window for voting power. Preserved across
    /// top-ups; re-anchored only when the position is created from zero.
    pub origin_ts: u64,
    /// Updated on every deposit (never on withdrawal); gates short-horizon
    /// vote manipulation.
    pub last_stake_ts: u64,
}

/// Per-token streaming state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardState {
    /// Permanent tokens bypass the non-permanent slot cap and cannot be
    /// retired.
    pub permanent: bool,
    /// Funded amount still vesting toward the claimable pool.
    pub vesting_remaining: i128,
    /// Fully vested rewards not yet claimed.
    pub claimable_pool: i128,
    /// Last timestamp settlement advanced to; frozen while nothing is
    /// staked.
    pub last_settled: u64,
    pub vesting_start: u64,
    pub vesting_end: u64,
}

/// Storage keys for the staking pool.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Address fixed at construction; the only one allowed to initialize.
    Initializer,
    Config,
    /// Account -> StakePosition
    Position(Address),
    TotalStaked,
    /// Held principal attributable to stakes rather than reward pools.
    Escrow,
    /// Ordered set of registered reward tokens.
    RewardTokens,
    /// Token -> RewardState
    Reward(Address),
    /// Token -> per-share accumulator (scaled by SHARE_SCALE)
    AccPerShare(Address),
    /// (Account, Token) -> accumulator snapshot at last settlement
    Debt(Address, Address),
    ReentrancyLock,
    VestingWindowSecs,
    VoteCooldownSecs,
}

fn read_config(e: &Env) -> Result<Config, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

fn require_governance(e: &Env, caller: &Address) -> Result<Config, ContractError> {
    caller.require_auth();
    let cfg = read_config(e)?;
    if *caller != cfg.governance {
        return Err(ContractError::NotGovernance);
    }
    Ok(cfg)
}

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    /// Pin the address allowed to initialize. Runs at deploy time, closing
    /// the window where an attacker could initialize first with malicious
    /// parameters.
    pub fn __constructor(e: Env, initializer: Address) {
        e.storage().instance().set(&DataKey::Initializer, &initializer);
    }

    /// One-time wiring of the pool.
    ///
    /// Registers the principal token as a permanent reward token, then each
    /// entry of `initial_tokens` as non-permanent.
    ///
    /// # Arguments
    /// * `caller` - Must be the construction-time initializer
    /// * `governance` - Address gating lifecycle and parameter operations
    /// * `principal_token` - The staked token
    /// * `claim_token` - Mirror token; the pool must be its admin
    /// * `treasury` - Source of `fund_from_treasury` transfers
    /// * `initial_tokens` - Reward tokens to register at launch
    pub fn initialize(
        e: Env,
        caller: Address,
        governance: Address,
        principal_token: Address,
        claim_token: Address,
        treasury: Address,
        initial_tokens: Vec<Address>,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        let initializer: Address = e
            .storage()
            .instance()
            .get(&DataKey::Initializer)
            .ok_or(ContractError::NotInitialized)?;
        if caller != initializer {
            return Err(ContractError::NotInitializer);
        }
        if e.storage().instance().has(&DataKey::Config) {
            return Err(ContractError::AlreadyInitialized);
        }

        let principal_decimals = TokenClient::new(&e, &principal_token).decimals();
        let cfg = Config {
            governance: governance.clone(),
            treasury,
            principal_token: principal_token.clone(),
            claim_token: claim_token.clone(),
            principal_decimals,
        };
        e.storage().instance().set(&DataKey::Config, &cfg);

        registry::register(&e, &cfg, &principal_token, true)?;
        for token in initial_tokens.iter() {
            registry::register(&e, &cfg, &token, false)?;
        }

        events::emit_initialized(&e, &governance, &principal_token, &claim_token);
        Ok(())
    }

    /// Deposit principal and receive claim tokens 1:1.
    ///
    /// Settles and pays out every registered reward token at the
    /// pre-deposit balance first, so the new balance cannot earn a
    /// backdated share. Credits the measured transfer delta, not the
    /// requested amount. Returns the credited amount.
    pub fn deposit(e: Env, from: Address, amount: i128) -> Result<i128, ContractError> {
        from.require_auth();
        guard::with_guard(&e, || {
            validation::require_positive(amount)?;
            let cfg = read_config(&e)?;

            let old_total = stake::total_staked(&e);
            let mut pos = stake::position(&e, &from).unwrap_or(StakePosition {
                staked: 0,
                origin_ts: 0,
                last_stake_ts: 0,
            });

            rewards::harvest_all(&e, &from, pos.staked)?;

            let credited = token_transfers::transfer_in(&e, &cfg.principal_token, &from, amount)?;
            let now = e.ledger().timestamp();

            if old_total == 0 {
                streaming::resume_all(&e, now)?;
            }

            if pos.staked == 0 {
                pos.origin_ts = now;
            }
            pos.staked = math::add_i128(pos.staked, credited)?;
            pos.last_stake_ts = now;
            stake::set_position(&e, &from, &pos);

            stake::add_total_staked(&e, credited)?;
            stake::add_escrow(&e, credited)?;
            stake::mint_claim(&e, &cfg, &from, credited);

            events::emit_deposit(&e, &from, amount, credited, pos.staked);
            Ok(credited)
        })
    }

    /// Withdraw staked principal to `recipient`, burning claim tokens 1:1.
    ///
    /// Settles and pays out every registered reward token at the
    /// pre-withdrawal balance first. A full withdrawal tears the position
    /// down; debt snapshots persist.
    pub fn withdraw(
        e: Env,
        from: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<(), ContractError> {
        from.require_auth();
        guard::with_guard(&e, || {
            validation::require_positive(amount)?;
            let cfg = read_config(&e)?;

            let mut pos =
                stake::position(&e, &from).ok_or(ContractError::PositionNotFound)?;
            if amount > pos.staked {
                return Err(ContractError::InsufficientStake);
            }

            rewards::harvest_all(&e, &from, pos.staked)?;

            pos.staked = math::sub_i128(pos.staked, amount)?;
            stake::sub_total_staked(&e, amount)?;
            stake::sub_escrow(&e, amount)?;
            stake::burn_claim(&e, &cfg, &from, amount);

            if pos.staked == 0 {
                stake::remove_position(&e, &from);
            } else {
                stake::set_position(&e, &from, &pos);
            }

            token_transfers::transfer_out(&e, &cfg.principal_token, &recipient, amount)?;
            events::emit_withdrawal(&e, &from, &recipient, amount, pos.staked);
            Ok(())
        })
    }

    /// Claim pending rewards for the given tokens, paid to `recipient`.
    /// Returns the total paid across all tokens. Claiming with nothing
    /// pending pays zero; claiming an unregistered token fails.
    pub fn claim(
        e: Env,
        from: Address,
        tokens: Vec<Address>,
        recipient: Address,
    ) -> Result<i128, ContractError> {
        from.require_auth();
        guard::with_guard(&e, || {
            read_config(&e)?;
            let staked = stake::staked_of(&e, &from);

            let mut total_paid: i128 = 0;
            for token in tokens.iter() {
                let paid = rewards::claim_one(&e, &from, &token, staked, &recipient)?;
                total_paid = math::add_i128(total_paid, paid)?;
            }
            Ok(total_paid)
        })
    }

    /// Permissionless reward funding. Transfers `amount` of `token` in,
    /// settles the stream, and rolls the un-vested remainder plus the
    /// received amount into a fresh vesting window. Returns the received
    /// amount.
    pub fn fund(
        e: Env,
        from: Address,
        token: Address,
        amount: i128,
    ) -> Result<i128, ContractError> {
        from.require_auth();
        guard::with_guard(&e, || {
            validation::require_positive(amount)?;
            read_config(&e)?;
            if !registry::is_registered(&e, &token) {
                return Err(ContractError::TokenNotRegistered);
            }

            let received = token_transfers::transfer_in(&e, &token, &from, amount)?;
            streaming::roll_window(&e, &token, received)?;

            events::emit_funded(&e, &token, &from, amount, received, false);
            Ok(received)
        })
    }

    /// Governance-triggered funding sourced from the treasury, executed
    /// when a spending proposal passes. Behaves exactly like `fund`;
    /// `is_boost` only tags the emitted event for off-chain observers.
    pub fn fund_from_treasury(
        e: Env,
        caller: Address,
        token: Address,
        amount: i128,
        is_boost: bool,
    ) -> Result<i128, ContractError> {
        let cfg = require_governance(&e, &caller)?;
        guard::with_guard(&e, || {
            validation::require_positive(amount)?;
            if !registry::is_registered(&e, &token) {
                return Err(ContractError::TokenNotRegistered);
            }

            let received = token_transfers::transfer_in(&e, &token, &cfg.treasury, amount)?;
            streaming::roll_window(&e, &token, received)?;

            events::emit_funded(&e, &token, &cfg.treasury, amount, received, is_boost);
            Ok(received)
        })
    }

    /// Add a token to the registered reward set. Governance-only.
    pub fn register_reward_token(
        e: Env,
        caller: Address,
        token: Address,
        permanent: bool,
    ) -> Result<(), ContractError> {
        let cfg = require_governance(&e, &caller)?;
        registry::register(&e, &cfg, &token, permanent)
    }

    /// Retire a fully drained token from the reward set. Governance-only.
    pub fn retire_reward_token(e: Env, caller: Address, token: Address) -> Result<(), ContractError> {
        let cfg = require_governance(&e, &caller)?;
        registry::retire(&e, &cfg, &token)
    }

    /// Set the vesting window for future funding. Governance-only.
    pub fn set_vesting_window_secs(
        e: Env,
        caller: Address,
        value: u64,
    ) -> Result<(), ContractError> {
        require_governance(&e, &caller)?;
        let old = parameters::vesting_window_secs(&e);
        parameters::set_vesting_window_secs(&e, value)?;
        events::emit_vesting_window_updated(&e, old, value);
        Ok(())
    }

    /// Set the post-deposit vote cooldown. Governance-only.
    pub fn set_vote_cooldown_secs(
        e: Env,
        caller: Address,
        value: u64,
    ) -> Result<(), ContractError> {
        require_governance(&e, &caller)?;
        let old = parameters::vote_cooldown_secs(&e);
        parameters::set_vote_cooldown_secs(&e, value)?;
        events::emit_vote_cooldown_updated(&e, old, value);
        Ok(())
    }

    // --- Read-only getters ---

    pub fn get_config(e: Env) -> Result<Config, ContractError> {
        read_config(&e)
    }

    pub fn get_position(e: Env, account: Address) -> Option<StakePosition> {
        stake::position(&e, &account)
    }

    pub fn staked_of(e: Env, account: Address) -> i128 {
        stake::staked_of(&e, &account)
    }

    pub fn total_staked(e: Env) -> i128 {
        stake::total_staked(&e)
    }

    pub fn escrow_balance(e: Env) -> i128 {
        stake::escrow_balance(&e)
    }

    /// The pool's full holding of `token`, escrow and reward pools alike.
    pub fn held_balance(e: Env, token: Address) -> i128 {
        token_transfers::held_balance(&e, &token)
    }

    pub fn reward_tokens(e: Env) -> Vec<Address> {
        registry::reward_tokens(&e)
    }

    pub fn reward_state(e: Env, token: Address) -> Option<RewardState> {
        streaming::get(&e, &token)
    }

    pub fn acc_per_share(e: Env, token: Address) -> i128 {
        rewards::acc_per_share(&e, &token)
    }

    pub fn reward_debt(e: Env, account: Address, token: Address) -> i128 {
        rewards::debt_of(&e, &account, &token)
    }

    /// Project `account`'s claimable amount for `token` as of now, without
    /// mutating any state.
    pub fn pending_reward(
        e: Env,
        account: Address,
        token: Address,
    ) -> Result<i128, ContractError> {
        let state = streaming::must_get(&e, &token)?;
        let mut acc = rewards::acc_per_share(&e, &token);

        let total = stake::total_staked(&e);
        if total > 0 {
            let vested = streaming::accrued_at(&state, e.ledger().timestamp())?;
            if vested > 0 {
                let bump = math::mul_div(vested, rewards::SHARE_SCALE, total)?;
                acc = math::add_i128(acc, bump)?;
            }
        }

        let staked = stake::staked_of(&e, &account);
        let debt = rewards::debt_of(&e, &account, &token);
        rewards::pending_amount(staked, acc, rewards::effective_debt(debt, acc))
    }

    /// Time-weighted voting power: staked balance normalized to 18 decimals
    /// multiplied by days staked since the position's origin.
    pub fn voting_power(e: Env, account: Address) -> Result<i128, ContractError> {
        let cfg = read_config(&e)?;
        match stake::position(&e, &account) {
            Some(pos) => voting::power(
                pos.staked,
                cfg.principal_decimals,
                pos.origin_ts,
                e.ledger().timestamp(),
            ),
            None => Ok(0),
        }
    }

    /// Timestamp of the account's most recent deposit; 0 if none. Exposed
    /// so governance can gate votes on a minimum cooldown.
    pub fn last_stake_timestamp(e: Env, account: Address) -> u64 {
        stake::position(&e, &account)
            .map(|p| p.last_stake_ts)
            .unwrap_or(0)
    }

    /// Whether the vote cooldown has elapsed since the account's most
    /// recent deposit. Any deposit inside the window resets the gate
    /// regardless of pre-existing accrued power.
    pub fn vote_eligible(e: Env, account: Address) -> bool {
        let last = stake::position(&e, &account)
            .map(|p| p.last_stake_ts)
            .unwrap_or(0);
        voting::cooldown_elapsed(
            e.ledger().timestamp(),
            last,
            parameters::vote_cooldown_secs(&e),
        )
    }

    pub fn vesting_window_secs(e: Env) -> u64 {
        parameters::vesting_window_secs(&e)
    }

    pub fn vote_cooldown_secs(e: Env) -> u64 {
        parameters::vote_cooldown_secs(&e)
    }

    /// Check if the reentrancy lock is currently held.
    pub fn is_locked(e: Env) -> bool {
        guard::is_locked(&e)
    }
}

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod test_initialize;







#[cfg(test)]
mod test_events;

#[cfg(test)]
mod test_reentrancy;
