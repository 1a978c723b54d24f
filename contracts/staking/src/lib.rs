#![no_std]
#[cfg(test)]
#[macro_use]
extern crate std;

mod accrual;
mod custody;
mod error;
mod events;
mod gate;
mod ledger;
mod registry;
mod schedule;
mod storage;

use nftpool_shared::validate_duration;
use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

pub use accrual::{Account, PoolState};
pub use error::StakingError;
pub use events::{
    AdminChanged, Deposited, DurationChanged, PausedChanged, PaymentMade, RewardAdded, Withdrawn,
};
pub use storage::Config;

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    /// Initialize the pool
    ///
    /// * `asset_contract` - contract that owns and transfers the stakeable NFTs
    /// * `reward_token` - token the rewards are paid in
    /// * `rewards_duration` - length of a reward period in seconds
    pub fn initialize(
        env: Env,
        admin: Address,
        asset_contract: Address,
        reward_token: Address,
        rewards_duration: u64,
    ) -> Result<(), StakingError> {
        if storage::has_config(&env) {
            return Err(StakingError::AlreadyInitialized);
        }
        if !validate_duration(rewards_duration) {
            return Err(StakingError::InvalidDuration);
        }

        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            asset_contract,
            reward_token,
        };

        storage::set_config(&env, &config);
        storage::set_pool(&env, &PoolState::new(rewards_duration));
        storage::set_paused(&env, false);

        log!(&env, "Staking pool initialized by admin: {}", admin);

        Ok(())
    }

    /// Stake the given assets. The pool must be approved as operator on the
    /// asset contract beforehand.
    pub fn deposit(env: Env, participant: Address, asset_ids: Vec<u64>) -> Result<(), StakingError> {
        participant.require_auth();
        ledger::deposit(&env, &participant, &asset_ids)
    }

    /// Return staked assets to their staker. Allowed while paused.
    pub fn withdraw(env: Env, participant: Address, asset_ids: Vec<u64>) -> Result<(), StakingError> {
        participant.require_auth();
        ledger::withdraw(&env, &participant, &asset_ids)
    }

    /// Pay out all accrued reward, returning the amount paid
    pub fn claim(env: Env, participant: Address) -> Result<i128, StakingError> {
        participant.require_auth();
        ledger::claim(&env, &participant)
    }

    /// Withdraw the given assets and claim in one call
    pub fn exit(env: Env, participant: Address, asset_ids: Vec<u64>) -> Result<i128, StakingError> {
        participant.require_auth();
        ledger::withdraw(&env, &participant, &asset_ids)?;
        ledger::claim(&env, &participant)
    }

    /// Start a new reward period of `amount` on top of any leftover from the
    /// running one. Admin only.
    pub fn fund(env: Env, admin: Address, amount: i128) -> Result<(), StakingError> {
        let cap = gate::authorize(&env, &admin)?;
        schedule::fund(&env, &cap, amount)?;
        Ok(())
    }

    /// Admin function to change the period length once the current period is over
    pub fn set_duration(env: Env, admin: Address, seconds: u64) -> Result<(), StakingError> {
        let cap = gate::authorize(&env, &admin)?;
        schedule::set_duration(&env, &cap, seconds)
    }

    /// Admin function to pause/unpause deposits
    pub fn set_paused(env: Env, admin: Address, paused: bool) -> Result<(), StakingError> {
        let cap = gate::authorize(&env, &admin)?;
        gate::set_paused(&env, &cap, paused);
        Ok(())
    }

    /// Admin function to hand the operator role to another address
    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), StakingError> {
        let cap = gate::authorize(&env, &admin)?;
        gate::set_admin(&env, &cap, &new_admin)
    }

    // Queries

    pub fn earned(env: Env, participant: Address) -> Result<i128, StakingError> {
        ledger::earned(&env, &participant)
    }

    pub fn staked_count_of(env: Env, participant: Address) -> Result<u32, StakingError> {
        Ok(Self::get_account(env, participant)?.staked_count)
    }

    pub fn get_account(env: Env, participant: Address) -> Result<Account, StakingError> {
        storage::ensure_initialized(&env)?;
        Ok(storage::account(&env, &participant))
    }

    pub fn custodian_of(env: Env, asset_id: u64) -> Result<Option<Address>, StakingError> {
        storage::ensure_initialized(&env)?;
        Ok(registry::custodian_of(&env, asset_id))
    }

    pub fn total_staked(env: Env) -> Result<u32, StakingError> {
        Ok(storage::pool(&env)?.total_staked)
    }

    pub fn reward_rate(env: Env) -> Result<i128, StakingError> {
        Ok(storage::pool(&env)?.reward_rate)
    }

    pub fn period_finish(env: Env) -> Result<u64, StakingError> {
        Ok(storage::pool(&env)?.period_finish)
    }

    pub fn rewards_duration(env: Env) -> Result<u64, StakingError> {
        Ok(storage::pool(&env)?.rewards_duration)
    }

    pub fn last_settle_time(env: Env) -> Result<u64, StakingError> {
        Ok(storage::pool(&env)?.last_settle_time)
    }

    pub fn last_time_applicable(env: Env) -> Result<u64, StakingError> {
        Ok(storage::pool(&env)?.last_time_applicable(env.ledger().timestamp()))
    }

    /// Accumulator value as of now, scaled by `REWARD_SCALE`
    pub fn reward_per_unit(env: Env) -> Result<i128, StakingError> {
        storage::pool(&env)?.reward_per_unit(env.ledger().timestamp())
    }

    pub fn reward_for_duration(env: Env) -> Result<i128, StakingError> {
        storage::pool(&env)?.reward_for_duration()
    }

    pub fn get_pool(env: Env) -> Result<PoolState, StakingError> {
        storage::pool(&env)
    }

    pub fn is_paused(env: Env) -> Result<bool, StakingError> {
        storage::ensure_initialized(&env)?;
        Ok(storage::is_paused(&env))
    }

    pub fn get_config(env: Env) -> Result<Config, StakingError> {
        storage::config(&env)
    }
}

#[cfg(test)]
mod testutils;
