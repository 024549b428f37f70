//! Proportional distribution of a single payment across a registered split.

use soroban_sdk::{token, Address, Env, Vec};

use crate::{
    errors::SplitError,
    events,
    storage::{self, Config, SplitEntry},
};

/// Payout per entry, in split order: `floor(amount * share / basis_points)`.
///
/// Fails the whole computation if any payout would be zero or negative, so a
/// payment too small to reach every recipient is never partially applied.
pub fn compute_payouts(
    env: &Env,
    splits: &Vec<SplitEntry>,
    amount: i128,
    basis_points: u32,
) -> Result<Vec<i128>, SplitError> {
    let mut payouts = Vec::new(env);
    for entry in splits.iter() {
        let payout = amount
            .checked_mul(entry.share as i128)
            .ok_or(SplitError::ArithmeticOverflow)?
            .checked_div(basis_points as i128)
            .ok_or(SplitError::ArithmeticOverflow)?;

        if payout <= 0 {
            return Err(SplitError::ArithmeticUnderflow);
        }
        payouts.push_back(payout);
    }
    Ok(payouts)
}

pub fn sum_payouts(payouts: &Vec<i128>) -> Result<i128, SplitError> {
    payouts
        .iter()
        .try_fold(0i128, |acc, payout| acc.checked_add(payout))
        .ok_or(SplitError::ArithmeticOverflow)
}

/// Pays every recipient of `work_id` from `payer`'s token balance.
///
/// All payouts are computed and checked against the payer's balance before
/// the first transfer. Rounding dust is never transferred and stays with the
/// payer.
pub fn distribute(
    env: &Env,
    config: &Config,
    payer: &Address,
    work_id: u64,
    amount: i128,
) -> Result<Vec<i128>, SplitError> {
    if config.paused {
        return Err(SplitError::Paused);
    }
    if work_id == 0 {
        return Err(SplitError::InvalidWorkId);
    }
    if amount <= 0 {
        return Err(SplitError::InvalidAmount);
    }

    let splits = storage::read_split(env, work_id).ok_or(SplitError::SplitNotFound)?;

    let token = token::Client::new(env, &config.token);
    let balance = token.balance(payer);
    if balance < amount {
        return Err(SplitError::InsufficientFunds);
    }

    let payouts = compute_payouts(env, &splits, amount, config.basis_points)?;

    // A denominator lowered after the split was recorded can push the total
    // above `amount`.
    let total = sum_payouts(&payouts)?;
    if total > balance {
        return Err(SplitError::InsufficientFunds);
    }

    for (entry, payout) in splits.iter().zip(payouts.iter()) {
        token.transfer(payer, &entry.recipient, &payout);
        events::payout(env, work_id, &entry.recipient, payout);
    }

    events::distributed(env, work_id, payer, amount, total);
    Ok(payouts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{testutils::Address as _, vec};

    fn splits(env: &Env, shares: &[u32]) -> Vec<SplitEntry> {
        let mut out = Vec::new(env);
        for share in shares {
            out.push_back(SplitEntry {
                recipient: Address::generate(env),
                share: *share,
            });
        }
        out
    }

    #[test]
    fn payouts_follow_shares_in_order() {
        let env = Env::default();
        let splits = splits(&env, &[6_000, 4_000]);

        assert_eq!(
            compute_payouts(&env, &splits, 10_000, 10_000),
            Ok(vec![&env, 6_000, 4_000])
        );
    }

    #[test]
    fn payouts_round_down_and_leave_dust() {
        let env = Env::default();
        let splits = splits(&env, &[3_333, 3_333, 3_334]);

        let payouts = compute_payouts(&env, &splits, 100, 10_000).unwrap();
        assert_eq!(payouts, vec![&env, 33, 33, 33]);
        assert_eq!(sum_payouts(&payouts), Ok(99));
    }

    #[test]
    fn zero_payout_fails_whole_computation() {
        let env = Env::default();
        // 1% of 99 = 0.99, rounds to 0 for the second entry.
        let splits = splits(&env, &[9_900, 100]);

        assert_eq!(
            compute_payouts(&env, &splits, 99, 10_000),
            Err(SplitError::ArithmeticUnderflow)
        );
    }

    #[test]
    fn single_unit_payment_underflows() {
        let env = Env::default();
        let splits = splits(&env, &[5_000, 5_000]);

        assert_eq!(
            compute_payouts(&env, &splits, 1, 10_000),
            Err(SplitError::ArithmeticUnderflow)
        );
    }

    #[test]
    fn multiplication_overflow_is_reported() {
        let env = Env::default();
        let splits = splits(&env, &[10_000]);

        assert_eq!(
            compute_payouts(&env, &splits, i128::MAX, 10_000),
            Err(SplitError::ArithmeticOverflow)
        );
    }

    #[test]
    fn large_amounts_within_range() {
        let env = Env::default();
        let splits = splits(&env, &[9_900, 100]);
        let amount = u64::MAX as i128;

        let payouts = compute_payouts(&env, &splits, amount, 10_000).unwrap();
        assert_eq!(payouts.get(0), Some(amount * 9_900 / 10_000));
        assert_eq!(payouts.get(1), Some(amount * 100 / 10_000));
    }

    #[test]
    fn denominator_change_scales_payouts() {
        let env = Env::default();
        let splits = splits(&env, &[6_000, 4_000]);

        // Shares recorded against 10000 but paid against 20000 halve every payout.
        assert_eq!(
            compute_payouts(&env, &splits, 10_000, 20_000),
            Ok(vec![&env, 3_000, 2_000])
        );
    }

    #[test]
    fn empty_split_pays_nothing() {
        let env = Env::default();
        let splits: Vec<SplitEntry> = Vec::new(&env);

        let payouts = compute_payouts(&env, &splits, 1_000, 10_000).unwrap();
        assert!(payouts.is_empty());
        assert_eq!(sum_payouts(&payouts), Ok(0));
    }
}
