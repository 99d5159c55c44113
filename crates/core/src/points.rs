//! Point balance arithmetic.
//!
//! A balance is the running sum of a user's point transactions and may never
//! drop below zero. The database enforces the same rule with a `CHECK`
//! constraint and a conditional update; this module is the pure version used
//! for pre-checks.

use crate::error::CoreError;

/// Apply a signed `delta` to `balance`.
///
/// Fails with [`CoreError::Conflict`] if the result would be negative and
/// with [`CoreError::Validation`] on overflow.
pub fn apply_delta(balance: i64, delta: i64) -> Result<i64, CoreError> {
    let next = balance
        .checked_add(delta)
        .ok_or_else(|| CoreError::Validation("point amount out of range".to_string()))?;
    if next < 0 {
        return Err(CoreError::Conflict(format!(
            "insufficient points: balance {balance}, change {delta}"
        )));
    }
    Ok(next)
}

/// Recompute a balance by replaying a ledger from zero, skipping any
/// transaction that would overdraw.
///
/// This is the reference model for `points.balance`: applying the same
/// amounts through the repository must end on the same balance. Returns
/// the final balance and the indices of rejected transactions.
pub fn replay(amounts: &[i64]) -> (i64, Vec<usize>) {
    let mut balance = 0;
    let mut rejected = Vec::new();
    for (i, amount) in amounts.iter().enumerate() {
        match apply_delta(balance, *amount) {
            Ok(next) => balance = next,
            Err(_) => rejected.push(i),
        }
    }
    (balance, rejected)
}
