//! Asset id → custodian mapping. Only bookkeeping lives here; the assets
//! themselves are moved by the ledger through the asset contract.

use soroban_sdk::{Address, Env};

use crate::error::StakingError;
use crate::storage::DataKey;

pub fn custodian_of(env: &Env, asset_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Custodian(asset_id))
}

pub fn assign(env: &Env, asset_id: u64, participant: &Address) -> Result<(), StakingError> {
    let key = DataKey::Custodian(asset_id);
    if env.storage().persistent().has(&key) {
        return Err(StakingError::AlreadyStaked);
    }
    env.storage().persistent().set(&key, participant);
    Ok(())
}

pub fn clear(env: &Env, asset_id: u64, expected: &Address) -> Result<(), StakingError> {
    match custodian_of(env, asset_id) {
        Some(custodian) if custodian == *expected => {
            env.storage().persistent().remove(&DataKey::Custodian(asset_id));
            Ok(())
        }
        _ => Err(StakingError::NotCustodian),
    }
}
