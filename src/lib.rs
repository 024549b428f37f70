#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

pub mod admin;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod registry;
pub mod storage;

pub use errors::SplitError;
pub use storage::{Config, SplitEntry, UpdateRecord};

/// Royalty split registry and distribution contract.
///
/// - A work's owner records how revenue is shared (a "split") exactly once,
///   then may replace it wholesale
/// - Anyone holding funds can pay a work; the payment is divided across the
///   split's recipients in proportion to their basis-point shares
/// - The administrator tunes the global limits and can pause mutations
#[contract]
pub struct RoyaltySplits;

#[contractimpl]
impl RoyaltySplits {
    /// One-time setup of the administrator and the token used for payouts.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `admin` - Identity allowed to change the global configuration
    /// * `token` - Token contract that distributions are paid in
    ///
    /// # Errors
    /// - `AlreadyInitialized` if called more than once
    /// - `InvalidPrincipal` if `admin` is the burn address
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), SplitError> {
        admin.require_auth();

        if storage::has_config(&env) {
            return Err(SplitError::AlreadyInitialized);
        }
        if admin == storage::burn_address(&env) {
            return Err(SplitError::InvalidPrincipal);
        }

        storage::write_config(&env, &Config::new(admin.clone(), token.clone()));
        storage::write_next_work_id(&env, 0);

        events::initialized(&env, &admin, &token);
        Ok(())
    }

    // ── configuration ─────────────────────────────────────────

    /// Hand administration to `new_admin`.
    ///
    /// # Arguments
    /// * `caller` - Current administrator; must authorize the call
    /// * `new_admin` - Identity taking over
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `InvalidPrincipal` if `new_admin` is the burn address
    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_admin(&env, &mut config, &caller, new_admin)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Pause or resume `define_split`, `update_split` and `distribute`.
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `InvalidPauseState` if the flag already has that value
    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_paused(&env, &mut config, &caller, paused)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Set the share denominator. Existing splits are not re-validated.
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `InvalidBasisPoints` if `basis_points` is zero
    pub fn set_basis_points(
        env: Env,
        caller: Address,
        basis_points: u32,
    ) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_basis_points(&env, &mut config, &caller, basis_points)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Set the smallest share a split entry may carry.
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `InvalidMinShare` if `min_share` is zero or above `max_share`
    pub fn set_min_share(env: Env, caller: Address, min_share: u32) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_min_share(&env, &mut config, &caller, min_share)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Set the largest share a split entry may carry.
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `InvalidMaxShare` if `max_share` is below `min_share` or above the
    ///   denominator
    pub fn set_max_share(env: Env, caller: Address, max_share: u32) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_max_share(&env, &mut config, &caller, max_share)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Set the maximum number of entries in a split.
    ///
    /// # Errors
    /// - `NotAuthorized` unless `caller` is the administrator
    /// - `MaxSplitsExceeded` if `max_splits` is zero
    pub fn set_max_splits(env: Env, caller: Address, max_splits: u32) -> Result<(), SplitError> {
        caller.require_auth();
        let mut config = storage::read_config(&env);
        admin::set_max_splits(&env, &mut config, &caller, max_splits)?;
        storage::write_config(&env, &config);
        Ok(())
    }

    /// Full configuration snapshot.
    pub fn get_config(env: Env) -> Config {
        storage::read_config(&env)
    }

    /// Current administrator.
    pub fn get_admin(env: Env) -> Address {
        storage::read_config(&env).admin
    }

    /// Token contract distributions are paid in.
    pub fn get_token(env: Env) -> Address {
        storage::read_config(&env).token
    }

    /// Whether mutations are currently paused.
    pub fn is_paused(env: Env) -> bool {
        storage::read_config(&env).paused
    }

    /// Current share denominator.
    pub fn get_basis_points(env: Env) -> u32 {
        storage::read_config(&env).basis_points
    }

    // ── split registry ────────────────────────────────────────

    /// Record the split for a work. The caller becomes its permanent owner.
    ///
    /// # Arguments
    /// * `env` - The contract environment
    /// * `caller` - Identity defining the split; must authorize the call
    /// * `work_id` - Work identifier, must be non-zero
    /// * `splits` - Ordered recipients and their basis-point shares
    ///
    /// # Errors
    /// - `Paused` while the contract is paused
    /// - `InvalidWorkId`, `MaxSplitsExceeded`, `DuplicateRecipient`,
    ///   `InvalidPrincipal`, `InvalidShare`, `InvalidSplit` on malformed input
    /// - `SplitAlreadyDefined` if the work already has a split
    pub fn define_split(
        env: Env,
        caller: Address,
        work_id: u64,
        splits: Vec<SplitEntry>,
    ) -> Result<(), SplitError> {
        caller.require_auth();
        let config = storage::read_config(&env);
        registry::define_split(&env, &config, &caller, work_id, splits)
    }

    /// Replace the split of a work. Only its owner may call this.
    ///
    /// # Errors
    /// - `Paused` while the contract is paused
    /// - `NotAuthorized` unless `caller` defined the split
    /// - the structural errors of [`RoyaltySplits::define_split`]
    /// - `SplitNotFound` if the work has no split
    pub fn update_split(
        env: Env,
        caller: Address,
        work_id: u64,
        new_splits: Vec<SplitEntry>,
    ) -> Result<(), SplitError> {
        caller.require_auth();
        let config = storage::read_config(&env);
        registry::update_split(&env, &config, &caller, work_id, new_splits)
    }

    /// Recorded split of `work_id`, in entry order.
    pub fn get_split(env: Env, work_id: u64) -> Option<Vec<SplitEntry>> {
        storage::read_split(&env, work_id)
    }

    /// Identity that defined the split of `work_id`.
    pub fn get_owner(env: Env, work_id: u64) -> Option<Address> {
        storage::read_owner(&env, work_id)
    }

    /// Share last recorded for `recipient` on `work_id`. A recipient dropped by
    /// an update keeps reporting its previous share.
    pub fn get_share(env: Env, work_id: u64, recipient: Address) -> Option<u32> {
        storage::read_share(&env, work_id, recipient)
    }

    /// Ledger, timestamp and updater of the last `update_split` on `work_id`.
    pub fn get_update_record(env: Env, work_id: u64) -> Option<UpdateRecord> {
        storage::read_update(&env, work_id)
    }

    // ── distribution ──────────────────────────────────────────

    /// Pay `amount` from `payer` across the split of `work_id`.
    ///
    /// Returns the payout of every recipient, in split order. Either every
    /// transfer is applied or none is.
    ///
    /// # Errors
    /// - `Paused`, `InvalidWorkId`, `InvalidAmount`, `SplitNotFound`
    /// - `InsufficientFunds` if the payer's balance cannot cover the payment
    /// - `ArithmeticOverflow` / `ArithmeticUnderflow` if a payout cannot be
    ///   represented or rounds down to zero
    pub fn distribute(
        env: Env,
        payer: Address,
        work_id: u64,
        amount: i128,
    ) -> Result<Vec<i128>, SplitError> {
        payer.require_auth();
        let config = storage::read_config(&env);
        distribution::distribute(&env, &config, &payer, work_id, amount)
    }

    // ── work id sequencer ─────────────────────────────────────

    /// Last value issued by [`RoyaltySplits::increment_work_id`], 0 before the first.
    pub fn get_next_work_id(env: Env) -> u64 {
        storage::read_next_work_id(&env)
    }

    /// Advance the work id counter and return the new value.
    pub fn increment_work_id(env: Env) -> Result<u64, SplitError> {
        let next = storage::read_next_work_id(&env)
            .checked_add(1)
            .ok_or(SplitError::ArithmeticOverflow)?;
        storage::write_next_work_id(&env, next);

        events::work_id_issued(&env, next);
        Ok(next)
    }
}
