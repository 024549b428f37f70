//! Split registry: define-once, owner-gated update.

use soroban_sdk::{Address, Env, Vec};

use crate::{
    errors::SplitError,
    events,
    storage::{self, burn_address, Config, SplitEntry, UpdateRecord},
};

/// Structural checks shared by define and update, in reporting order:
/// work id, length, duplicates, per-entry principal and share range, total.
pub fn validate_split(
    env: &Env,
    config: &Config,
    work_id: u64,
    splits: &Vec<SplitEntry>,
) -> Result<(), SplitError> {
    if work_id == 0 {
        return Err(SplitError::InvalidWorkId);
    }

    if splits.len() > config.max_splits {
        return Err(SplitError::MaxSplitsExceeded);
    }

    for (i, entry) in splits.iter().enumerate() {
        for other in splits.iter().skip(i + 1) {
            if entry.recipient == other.recipient {
                return Err(SplitError::DuplicateRecipient);
            }
        }
    }

    let burn = burn_address(env);
    for entry in splits.iter() {
        if entry.recipient == burn {
            return Err(SplitError::InvalidPrincipal);
        }
        if entry.share < config.min_share || entry.share > config.max_share {
            return Err(SplitError::InvalidShare);
        }
    }

    let total: u64 = splits
        .iter()
        .try_fold(0u64, |acc, entry| acc.checked_add(entry.share as u64))
        .ok_or(SplitError::ArithmeticOverflow)?;

    if total != config.basis_points as u64 {
        return Err(SplitError::InvalidSplit);
    }

    Ok(())
}

pub fn define_split(
    env: &Env,
    config: &Config,
    caller: &Address,
    work_id: u64,
    splits: Vec<SplitEntry>,
) -> Result<(), SplitError> {
    if config.paused {
        return Err(SplitError::Paused);
    }

    validate_split(env, config, work_id, &splits)?;

    if storage::has_split(env, work_id) {
        return Err(SplitError::SplitAlreadyDefined);
    }

    storage::write_split(env, work_id, &splits);
    storage::write_owner(env, work_id, caller);
    storage::write_shares(env, work_id, &splits);

    events::split_defined(env, work_id, caller, splits.len());
    Ok(())
}

/// Replaces a split wholesale. Ownership is checked before any structural
/// validation, so a non-owner always sees `NotAuthorized`, even for work id 0
/// or a work that was never defined.
pub fn update_split(
    env: &Env,
    config: &Config,
    caller: &Address,
    work_id: u64,
    new_splits: Vec<SplitEntry>,
) -> Result<(), SplitError> {
    if config.paused {
        return Err(SplitError::Paused);
    }

    if storage::read_owner(env, work_id).as_ref() != Some(caller) {
        return Err(SplitError::NotAuthorized);
    }

    validate_split(env, config, work_id, &new_splits)?;

    let old_splits = storage::read_split(env, work_id).ok_or(SplitError::SplitNotFound)?;

    storage::write_split(env, work_id, &new_splits);
    // Shares of recipients dropped from the split stay queryable.
    storage::write_shares(env, work_id, &new_splits);
    storage::write_update(
        env,
        work_id,
        &UpdateRecord {
            ledger: env.ledger().sequence(),
            timestamp: env.ledger().timestamp(),
            updater: caller.clone(),
        },
    );

    events::split_updated(env, work_id, caller, old_splits.len(), new_splits.len());
    Ok(())
}
