//! Reward-per-unit accumulator arithmetic.
//!
//! Everything in this module is pure: the ledger loads `PoolState` and
//! `Account` from storage, runs them through these transformations and
//! writes the results back. Division always truncates, so rounding dust
//! stays in the pool.

use nftpool_shared::REWARD_SCALE;
use soroban_sdk::contracttype;

use crate::error::StakingError;

/// Pool-wide accounting state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    pub total_staked: u32,
    pub reward_per_unit_stored: i128, // Scaled by REWARD_SCALE
    pub reward_rate: i128,            // Reward units per second
    pub last_settle_time: u64,
    pub period_finish: u64,
    pub rewards_duration: u64,
}

/// Per-participant accounting state.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Account {
    pub staked_count: u32,
    pub reward_owed: i128,
    pub reward_per_unit_checkpoint: i128,
}

impl PoolState {
    pub fn new(rewards_duration: u64) -> Self {
        Self {
            rewards_duration,
            ..Self::default()
        }
    }

    /// Latest instant the current rate still applies to.
    pub fn last_time_applicable(&self, now: u64) -> u64 {
        now.min(self.period_finish)
    }

    /// Accumulator value as of `now`, without mutating anything.
    pub fn reward_per_unit(&self, now: u64) -> Result<i128, StakingError> {
        if self.total_staked == 0 {
            return Ok(self.reward_per_unit_stored);
        }

        let elapsed = self
            .last_time_applicable(now)
            .saturating_sub(self.last_settle_time);

        let accrued = i128::from(elapsed)
            .checked_mul(self.reward_rate)
            .and_then(|v| v.checked_mul(REWARD_SCALE))
            .ok_or(StakingError::NumericOverflow)?
            / i128::from(self.total_staked);

        self.reward_per_unit_stored
            .checked_add(accrued)
            .ok_or(StakingError::NumericOverflow)
    }

    /// Bring the accumulator up to `now`. Time spent with an empty pool is
    /// skipped, never credited later.
    pub fn settle(&self, now: u64) -> Result<PoolState, StakingError> {
        Ok(PoolState {
            reward_per_unit_stored: self.reward_per_unit(now)?,
            last_settle_time: self.last_time_applicable(now),
            ..self.clone()
        })
    }

    pub fn reward_for_duration(&self) -> Result<i128, StakingError> {
        self.reward_rate
            .checked_mul(i128::from(self.rewards_duration))
            .ok_or(StakingError::NumericOverflow)
    }

    /// Start a new reward period carrying `amount` plus whatever the running
    /// period has not emitted yet. `reserve` is the pool's reward balance.
    ///
    /// A schedule is only accepted if the accumulator can absorb the whole
    /// period, so settling inside it can never overflow.
    pub fn fund(&self, amount: i128, now: u64, reserve: i128) -> Result<PoolState, StakingError> {
        if self.rewards_duration == 0 {
            return Err(StakingError::InvalidDuration);
        }

        let settled = self.settle(now)?;
        let duration = i128::from(settled.rewards_duration);

        let reward_rate = if now >= settled.period_finish {
            amount / duration
        } else {
            let remaining = i128::from(settled.period_finish - now);
            let leftover = remaining
                .checked_mul(settled.reward_rate)
                .ok_or(StakingError::NumericOverflow)?;
            amount
                .checked_add(leftover)
                .ok_or(StakingError::NumericOverflow)?
                / duration
        };

        let committed = reward_rate
            .checked_mul(duration)
            .ok_or(StakingError::NumericOverflow)?;
        if committed > reserve {
            return Err(StakingError::RewardTooHigh);
        }
        committed
            .checked_mul(REWARD_SCALE)
            .and_then(|v| v.checked_add(settled.reward_per_unit_stored))
            .ok_or(StakingError::RewardTooHigh)?;

        let period_finish = now
            .checked_add(settled.rewards_duration)
            .ok_or(StakingError::NumericOverflow)?;

        Ok(PoolState {
            reward_rate,
            last_settle_time: now,
            period_finish,
            ..settled
        })
    }

    /// The duration may only change once the running period is over, or
    /// before any period has been started.
    pub fn can_change_duration(&self, now: u64) -> bool {
        self.period_finish == 0 || now > self.period_finish
    }
}

impl Account {
    /// Unclaimed reward as of accumulator value `reward_per_unit`.
    pub fn earned(&self, reward_per_unit: i128) -> Result<i128, StakingError> {
        let delta = reward_per_unit
            .checked_sub(self.reward_per_unit_checkpoint)
            .ok_or(StakingError::NumericOverflow)?;

        // split so count * delta is never formed in full
        let count = i128::from(self.staked_count);
        let whole = (delta / REWARD_SCALE)
            .checked_mul(count)
            .ok_or(StakingError::NumericOverflow)?;
        let fresh = whole
            .checked_add((delta % REWARD_SCALE) * count / REWARD_SCALE)
            .ok_or(StakingError::NumericOverflow)?;

        self.reward_owed
            .checked_add(fresh)
            .ok_or(StakingError::NumericOverflow)
    }

    pub fn settle(&self, reward_per_unit: i128) -> Result<Account, StakingError> {
        Ok(Account {
            reward_owed: self.earned(reward_per_unit)?,
            reward_per_unit_checkpoint: reward_per_unit,
            ..self.clone()
        })
    }
}
