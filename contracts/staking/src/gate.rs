//! Operator capability and the pause switch.

use soroban_sdk::{log, Address, Env};

use crate::error::StakingError;
use crate::{events, storage};

/// Proof that the current invocation was authorized by the operator.
/// Only `authorize` can build one; privileged internals take it by reference.
pub struct OperatorCap {
    operator: Address,
}

impl OperatorCap {
    pub fn operator(&self) -> &Address {
        &self.operator
    }
}

pub fn authorize(env: &Env, caller: &Address) -> Result<OperatorCap, StakingError> {
    caller.require_auth();

    let config = storage::config(env)?;
    if config.admin != *caller {
        return Err(StakingError::NotAuthorized);
    }

    Ok(OperatorCap {
        operator: caller.clone(),
    })
}

/// Paused blocks new deposits only.
pub fn ensure_active(env: &Env) -> Result<(), StakingError> {
    if storage::is_paused(env) {
        return Err(StakingError::Paused);
    }
    Ok(())
}

pub fn set_paused(env: &Env, cap: &OperatorCap, paused: bool) {
    storage::set_paused(env, paused);
    events::paused_changed(env, paused, cap.operator());

    log!(env, "Pause set to {} by {}", paused, cap.operator().clone());
}

pub fn set_admin(env: &Env, cap: &OperatorCap, new_admin: &Address) -> Result<(), StakingError> {
    let mut config = storage::config(env)?;
    config.admin = new_admin.clone();
    storage::set_config(env, &config);

    events::admin_changed(env, cap.operator(), new_admin);

    log!(env, "Operator changed from {} to {}", cap.operator().clone(), new_admin.clone());

    Ok(())
}
