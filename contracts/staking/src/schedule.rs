//! Operator-driven reward schedule: funding new periods and changing the
//! period length.

use nftpool_shared::{validate_duration, validate_reward_amount};
use soroban_sdk::{log, Env};

use crate::accrual::PoolState;
use crate::error::StakingError;
use crate::gate::OperatorCap;
use crate::{custody, events, storage};

/// Start a new period worth `amount` plus the running period's leftover.
/// The reward tokens must already sit in the pool.
pub fn fund(env: &Env, cap: &OperatorCap, amount: i128) -> Result<PoolState, StakingError> {
    if !validate_reward_amount(amount) {
        return Err(StakingError::InvalidAmount);
    }

    let config = storage::config(env)?;
    let now = env.ledger().timestamp();
    let reserve = custody::reward_reserve(env, &config.reward_token);

    let pool = storage::pool(env)?.fund(amount, now, reserve)?;
    storage::set_pool(env, &pool);

    events::reward_added(env, amount, pool.reward_rate, pool.period_finish);

    log!(
        env,
        "Pool funded with {} by {}: rate={}, finish={}",
        amount,
        cap.operator().clone(),
        pool.reward_rate,
        pool.period_finish
    );

    Ok(pool)
}

pub fn set_duration(env: &Env, cap: &OperatorCap, seconds: u64) -> Result<(), StakingError> {
    if !validate_duration(seconds) {
        return Err(StakingError::InvalidDuration);
    }

    let now = env.ledger().timestamp();
    let mut pool = storage::pool(env)?.settle(now)?;
    if !pool.can_change_duration(now) {
        return Err(StakingError::PeriodNotComplete);
    }

    pool.rewards_duration = seconds;
    storage::set_pool(env, &pool);

    events::duration_changed(env, seconds);

    log!(env, "Rewards duration set to {} by {}", seconds, cap.operator().clone());

    Ok(())
}
