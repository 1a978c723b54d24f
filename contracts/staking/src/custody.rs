//! Calls into the two collaborators: the asset contract that owns the staked
//! NFTs and the token contract the rewards are paid in.

use nftpool_shared::AssetClient;
use soroban_sdk::{token, Address, Env};

use crate::error::StakingError;

/// Move `asset_id` from `from` to `to`, with the pool acting as spender.
pub fn move_asset(
    env: &Env,
    asset_contract: &Address,
    from: &Address,
    to: &Address,
    asset_id: u64,
) -> Result<(), StakingError> {
    let client = AssetClient::new(env, asset_contract);
    let spender = env.current_contract_address();

    match client.try_transfer_from(&spender, from, to, &asset_id) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(err)) => Err(err.into()),
        _ => Err(StakingError::AssetTransferFailed),
    }
}

/// Reward balance held by the pool.
pub fn reward_reserve(env: &Env, reward_token: &Address) -> i128 {
    token::Client::new(env, reward_token).balance(&env.current_contract_address())
}

pub fn pay_reward(
    env: &Env,
    reward_token: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), StakingError> {
    let client = token::Client::new(env, reward_token);

    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(StakingError::RewardTransferFailed),
    }
}
