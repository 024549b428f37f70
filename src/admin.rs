//! Administrator-only configuration mutators.
//!
//! Each setter checks the caller against the stored administrator first, then
//! its own range rule, and touches exactly one field of [`Config`].

use soroban_sdk::{Address, Env};

use crate::{
    errors::SplitError,
    events,
    storage::{burn_address, Config},
};

pub fn require_admin(config: &Config, caller: &Address) -> Result<(), SplitError> {
    if *caller != config.admin {
        return Err(SplitError::NotAuthorized);
    }
    Ok(())
}

pub fn set_admin(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    new_admin: Address,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if new_admin == burn_address(env) {
        return Err(SplitError::InvalidPrincipal);
    }

    events::admin_changed(env, &config.admin, &new_admin);
    config.admin = new_admin;
    Ok(())
}

/// Fails on no-op transitions.
pub fn set_paused(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    paused: bool,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if paused == config.paused {
        return Err(SplitError::InvalidPauseState);
    }

    config.paused = paused;
    events::pause_changed(env, caller, paused);
    Ok(())
}

/// Existing splits keep their recorded shares; `max_share` is not clamped.
pub fn set_basis_points(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    basis_points: u32,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if basis_points == 0 {
        return Err(SplitError::InvalidBasisPoints);
    }

    events::config_changed(env, events::FIELD_BASIS_POINTS, config.basis_points, basis_points);
    config.basis_points = basis_points;
    Ok(())
}

pub fn set_min_share(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    min_share: u32,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if min_share == 0 || min_share > config.max_share {
        return Err(SplitError::InvalidMinShare);
    }

    events::config_changed(env, events::FIELD_MIN_SHARE, config.min_share, min_share);
    config.min_share = min_share;
    Ok(())
}

pub fn set_max_share(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    max_share: u32,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if max_share < config.min_share || max_share > config.basis_points {
        return Err(SplitError::InvalidMaxShare);
    }

    events::config_changed(env, events::FIELD_MAX_SHARE, config.max_share, max_share);
    config.max_share = max_share;
    Ok(())
}

pub fn set_max_splits(
    env: &Env,
    config: &mut Config,
    caller: &Address,
    max_splits: u32,
) -> Result<(), SplitError> {
    require_admin(config, caller)?;
    if max_splits == 0 {
        return Err(SplitError::MaxSplitsExceeded);
    }

    events::config_changed(env, events::FIELD_MAX_SPLITS, config.max_splits, max_splits);
    config.max_splits = max_splits;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoyaltySplits;
    use soroban_sdk::testutils::Address as _;

    fn setup() -> (Env, Address, Config) {
        let env = Env::default();
        let contract_id = env.register_contract(None, RoyaltySplits);
        let config = Config::new(Address::generate(&env), Address::generate(&env));
        (env, contract_id, config)
    }

    #[test]
    fn require_admin_matches_only_stored_admin() {
        let (env, _, config) = setup();
        let stranger = Address::generate(&env);

        assert_eq!(require_admin(&config, &config.admin), Ok(()));
        assert_eq!(
            require_admin(&config, &stranger),
            Err(SplitError::NotAuthorized)
        );
    }

    #[test]
    fn min_share_bounded_by_max_share() {
        let (env, contract_id, mut config) = setup();
        let admin = config.admin.clone();
        config.max_share = 5_000;

        env.as_contract(&contract_id, || {
            assert_eq!(
                set_min_share(&env, &mut config, &admin, 5_001),
                Err(SplitError::InvalidMinShare)
            );
            assert_eq!(set_min_share(&env, &mut config, &admin, 5_000), Ok(()));
        });
        assert_eq!(config.min_share, 5_000);
    }

    #[test]
    fn max_share_bounded_by_min_share_and_denominator() {
        let (env, contract_id, mut config) = setup();
        let admin = config.admin.clone();
        config.min_share = 100;

        env.as_contract(&contract_id, || {
            assert_eq!(
                set_max_share(&env, &mut config, &admin, 99),
                Err(SplitError::InvalidMaxShare)
            );
            assert_eq!(
                set_max_share(&env, &mut config, &admin, 10_001),
                Err(SplitError::InvalidMaxShare)
            );
            assert_eq!(set_max_share(&env, &mut config, &admin, 100), Ok(()));
        });
        assert_eq!(config.max_share, 100);
    }

    #[test]
    fn burn_address_cannot_become_admin() {
        let (env, contract_id, mut config) = setup();
        let admin = config.admin.clone();

        env.as_contract(&contract_id, || {
            let burn = burn_address(&env);
            assert_eq!(
                set_admin(&env, &mut config, &admin, burn),
                Err(SplitError::InvalidPrincipal)
            );
        });
        assert_eq!(config.admin, admin);
    }

    #[test]
    fn failed_setter_leaves_config_untouched() {
        let (env, contract_id, mut config) = setup();
        let before = config.clone();
        let admin = config.admin.clone();

        env.as_contract(&contract_id, || {
            assert_eq!(
                set_basis_points(&env, &mut config, &admin, 0),
                Err(SplitError::InvalidBasisPoints)
            );
            assert_eq!(
                set_max_splits(&env, &mut config, &admin, 0),
                Err(SplitError::MaxSplitsExceeded)
            );
            assert_eq!(
                set_paused(&env, &mut config, &admin, false),
                Err(SplitError::InvalidPauseState)
            );
        });
        assert_eq!(config, before);
    }
}
