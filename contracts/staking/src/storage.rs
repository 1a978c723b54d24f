use soroban_sdk::{contracttype, Address, Env};

use crate::accrual::{Account, PoolState};
use crate::error::StakingError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub asset_contract: Address,
    pub reward_token: Address,
}

// Storage Keys
#[contracttype]
pub enum DataKey {
    Config,
    Paused,
    Pool,
    Account(Address),
    Custodian(u64),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn ensure_initialized(env: &Env) -> Result<(), StakingError> {
    if has_config(env) {
        Ok(())
    } else {
        Err(StakingError::NotInitialized)
    }
}

pub fn config(env: &Env) -> Result<Config, StakingError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn pool(env: &Env) -> Result<PoolState, StakingError> {
    env.storage()
        .instance()
        .get(&DataKey::Pool)
        .ok_or(StakingError::NotInitialized)
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&DataKey::Pool, pool);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

/// Accounts are created lazily; an address that never interacted reads as zero.
pub fn account(env: &Env, participant: &Address) -> Account {
    env.storage()
        .persistent()
        .get(&DataKey::Account(participant.clone()))
        .unwrap_or_default()
}

pub fn set_account(env: &Env, participant: &Address, account: &Account) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(participant.clone()), account);
}
