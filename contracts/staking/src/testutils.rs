use nftpool_shared::AssetError;
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token, Address, Env,
};

use crate::{StakingContract, StakingContractClient};

pub const DURATION: u64 = 31_556_952; // average Gregorian year
pub const RATE: i128 = 1_000_000;
pub const REWARD: i128 = RATE * DURATION as i128;
pub const START: u64 = 1_000;

/// Minimal NFT contract standing in for the asset collaborator.
#[contract]
pub struct MockAsset;

#[contracttype]
pub enum MockKey {
    Owner(u64),
    Operator(Address, Address),
}

#[contractimpl]
impl MockAsset {
    pub fn mint(env: Env, to: Address, id: u64) {
        env.storage().persistent().set(&MockKey::Owner(id), &to);
    }

    pub fn set_approval_for_all(env: Env, owner: Address, operator: Address, approved: bool) {
        owner.require_auth();
        env.storage()
            .persistent()
            .set(&MockKey::Operator(owner, operator), &approved);
    }

    pub fn owner_of(env: Env, id: u64) -> Result<Address, AssetError> {
        env.storage()
            .persistent()
            .get(&MockKey::Owner(id))
            .ok_or(AssetError::NotExist)
    }

    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        id: u64,
    ) -> Result<(), AssetError> {
        spender.require_auth();

        let owner = Self::owner_of(env.clone(), id)?;
        if owner != from {
            return Err(AssetError::NotOwner);
        }
        let approved: bool = env
            .storage()
            .persistent()
            .get(&MockKey::Operator(owner.clone(), spender.clone()))
            .unwrap_or(false);
        if spender != owner && !approved {
            return Err(AssetError::NotApproved);
        }

        env.storage().persistent().set(&MockKey::Owner(id), &to);
        Ok(())
    }
}

pub struct Setup {
    pub env: Env,
    pub admin: Address,
    pub pool_id: Address,
    pub pool: StakingContractClient<'static>,
    pub asset: MockAssetClient<'static>,
    pub reward: token::Client<'static>,
    pub reward_admin: token::StellarAssetClient<'static>,
}

impl Setup {
    /// Pool holding `REWARD` tokens, not yet funded, at ledger time `START`.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        // long scenarios outgrow the default per-env budget
        env.budget().reset_unlimited();
        env.ledger().with_mut(|li| {
            li.timestamp = START;
        });

        let admin = Address::generate(&env);
        let reward_id = env.register_stellar_asset_contract(admin.clone());
        let asset_id = env.register_contract(None, MockAsset);
        let pool_id = env.register_contract(None, StakingContract);

        let pool = StakingContractClient::new(&env, &pool_id);
        let asset = MockAssetClient::new(&env, &asset_id);
        let reward = token::Client::new(&env, &reward_id);
        let reward_admin = token::StellarAssetClient::new(&env, &reward_id);

        pool.initialize(&admin, &asset_id, &reward_id, &DURATION);
        reward_admin.mint(&pool_id, &REWARD);

        Setup {
            env,
            admin,
            pool_id,
            pool,
            asset,
            reward,
            reward_admin,
        }
    }

    /// Same as `new`, with the whole reserve committed over one period.
    pub fn funded() -> Self {
        let setup = Self::new();
        setup.pool.fund(&setup.admin, &REWARD);
        setup
    }

    /// New participant owning `ids`, with the pool approved as operator.
    pub fn holder(&self, ids: &[u64]) -> Address {
        let holder = Address::generate(&self.env);
        for id in ids {
            self.asset.mint(&holder, id);
        }
        self.asset
            .set_approval_for_all(&holder, &self.pool_id, &true);
        holder
    }

    pub fn now(&self) -> u64 {
        self.env.ledger().timestamp()
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.now();
        self.env.ledger().with_mut(|li| {
            li.timestamp = now + seconds;
        });
    }
}
