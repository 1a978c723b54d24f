//! Stake ledger: deposit, withdraw and claim.
//!
//! Every operation settles the accumulator first, then applies and persists
//! its own bookkeeping, and only then calls out to the collaborators. A
//! failing collaborator call aborts the invocation and the host discards all
//! writes made so far.

use soroban_sdk::{log, Address, Env, Vec};

use crate::accrual::{Account, PoolState};
use crate::error::StakingError;
use crate::{custody, events, gate, registry, storage};

pub fn settle_pool(env: &Env) -> Result<PoolState, StakingError> {
    storage::pool(env)?.settle(env.ledger().timestamp())
}

fn settle_account(
    env: &Env,
    pool: &PoolState,
    participant: &Address,
) -> Result<Account, StakingError> {
    storage::account(env, participant).settle(pool.reward_per_unit_stored)
}

/// Read-only view of what `participant` could claim right now.
pub fn earned(env: &Env, participant: &Address) -> Result<i128, StakingError> {
    let reward_per_unit = storage::pool(env)?.reward_per_unit(env.ledger().timestamp())?;
    storage::account(env, participant).earned(reward_per_unit)
}

pub fn deposit(env: &Env, participant: &Address, asset_ids: &Vec<u64>) -> Result<(), StakingError> {
    gate::ensure_active(env)?;
    if asset_ids.is_empty() {
        return Err(StakingError::EmptyRequest);
    }

    let config = storage::config(env)?;
    let mut pool = settle_pool(env)?;
    let mut account = settle_account(env, &pool, participant)?;

    for asset_id in asset_ids.iter() {
        registry::assign(env, asset_id, participant)?;
    }

    let count = asset_ids.len();
    account.staked_count = account
        .staked_count
        .checked_add(count)
        .ok_or(StakingError::NumericOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(count)
        .ok_or(StakingError::NumericOverflow)?;

    storage::set_pool(env, &pool);
    storage::set_account(env, participant, &account);

    let pool_address = env.current_contract_address();
    for asset_id in asset_ids.iter() {
        custody::move_asset(env, &config.asset_contract, participant, &pool_address, asset_id)?;
    }

    events::deposited(env, participant, asset_ids);

    log!(env, "User {} deposited {} assets", participant.clone(), count);

    Ok(())
}

pub fn withdraw(env: &Env, participant: &Address, asset_ids: &Vec<u64>) -> Result<(), StakingError> {
    if asset_ids.is_empty() {
        return Err(StakingError::EmptyRequest);
    }

    let config = storage::config(env)?;
    let mut pool = settle_pool(env)?;
    let mut account = settle_account(env, &pool, participant)?;

    for asset_id in asset_ids.iter() {
        if registry::custodian_of(env, asset_id).as_ref() != Some(participant) {
            return Err(StakingError::NotStaker);
        }
        registry::clear(env, asset_id, participant)?;
    }

    let count = asset_ids.len();
    account.staked_count = account
        .staked_count
        .checked_sub(count)
        .ok_or(StakingError::NumericOverflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_sub(count)
        .ok_or(StakingError::NumericOverflow)?;

    storage::set_pool(env, &pool);
    storage::set_account(env, participant, &account);

    let pool_address = env.current_contract_address();
    for asset_id in asset_ids.iter() {
        custody::move_asset(env, &config.asset_contract, &pool_address, participant, asset_id)?;
    }

    events::withdrawn(env, participant, asset_ids);

    log!(env, "User {} withdrew {} assets", participant.clone(), count);

    Ok(())
}

/// Pays out everything owed to `participant`. Returns the amount paid; zero
/// owed is not an error and produces neither a transfer nor an event.
pub fn claim(env: &Env, participant: &Address) -> Result<i128, StakingError> {
    let config = storage::config(env)?;
    let pool = settle_pool(env)?;
    let mut account = settle_account(env, &pool, participant)?;

    let owed = account.reward_owed;
    if owed > 0 {
        account.reward_owed = 0;
    }

    storage::set_pool(env, &pool);
    storage::set_account(env, participant, &account);

    if owed <= 0 {
        return Ok(0);
    }

    custody::pay_reward(env, &config.reward_token, participant, owed)?;

    events::payment_made(env, participant, owed);

    log!(env, "User {} claimed {} reward", participant.clone(), owed);

    Ok(owed)
}
