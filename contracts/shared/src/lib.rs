#![no_std]
use soroban_sdk::{contractclient, contracterror, Address, Env};

/// Shared types used by the pool contract and the asset contracts it custodies.
/// Keeping the collaborator interface here lets any asset contract that
/// implements it be plugged into the pool.

// ============================================================================
// Asset Collaborator Errors
// ============================================================================

/// Failures an asset contract reports from `owner_of` / `transfer_from`.
/// The discriminants are part of the cross-contract ABI.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AssetError {
    NotOwner = 1,
    NotApproved = 2,
    NotExist = 3,
}

// ============================================================================
// Asset Collaborator Interface
// ============================================================================

/// Ownership and transfer surface of a non-fungible asset contract.
///
/// `transfer_from` must reject with `NotOwner` when `from` does not own `id`,
/// with `NotApproved` when `spender` is neither the owner nor an approved
/// operator, and with `NotExist` for unknown ids.
#[contractclient(name = "AssetClient")]
pub trait AssetInterface {
    fn owner_of(env: Env, id: u64) -> Result<Address, AssetError>;

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u64,
    ) -> Result<(), AssetError>;
}

// ============================================================================
// Utility Functions
// ============================================================================

/// Reward amounts may be zero but never negative
pub fn validate_reward_amount(amount: i128) -> bool {
    amount >= 0
}

/// A reward period must last at least one second
pub fn validate_duration(seconds: u64) -> bool {
    seconds > 0
}

// ============================================================================
// Constants
// ============================================================================

/// Fixed-point scale of the reward-per-unit accumulator (18 decimals)
pub const REWARD_SCALE: i128 = 1_000_000_000_000_000_000;
