use soroban_sdk::{contracttype, symbol_short, Address, Env, Vec};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposited {
    pub participant: Address,
    pub count: u32,
    pub asset_ids: Vec<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub participant: Address,
    pub count: u32,
    pub asset_ids: Vec<u64>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentMade {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardAdded {
    pub amount: i128,
    pub reward_rate: i128,
    pub period_finish: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DurationChanged {
    pub seconds: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PausedChanged {
    pub paused: bool,
    pub operator: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChanged {
    pub previous: Address,
    pub admin: Address,
}

pub fn deposited(env: &Env, participant: &Address, asset_ids: &Vec<u64>) {
    let event = Deposited {
        participant: participant.clone(),
        count: asset_ids.len(),
        asset_ids: asset_ids.clone(),
    };
    env.events()
        .publish((symbol_short!("deposit"), participant.clone()), event);
}

pub fn withdrawn(env: &Env, participant: &Address, asset_ids: &Vec<u64>) {
    let event = Withdrawn {
        participant: participant.clone(),
        count: asset_ids.len(),
        asset_ids: asset_ids.clone(),
    };
    env.events()
        .publish((symbol_short!("withdraw"), participant.clone()), event);
}

pub fn payment_made(env: &Env, participant: &Address, amount: i128) {
    let event = PaymentMade {
        participant: participant.clone(),
        amount,
    };
    env.events()
        .publish((symbol_short!("paid"), participant.clone()), event);
}

pub fn reward_added(env: &Env, amount: i128, reward_rate: i128, period_finish: u64) {
    let event = RewardAdded {
        amount,
        reward_rate,
        period_finish,
    };
    env.events().publish((symbol_short!("funded"),), event);
}

pub fn duration_changed(env: &Env, seconds: u64) {
    env.events()
        .publish((symbol_short!("duration"),), DurationChanged { seconds });
}

pub fn paused_changed(env: &Env, paused: bool, operator: &Address) {
    let event = PausedChanged {
        paused,
        operator: operator.clone(),
    };
    env.events().publish((symbol_short!("paused"),), event);
}

pub fn admin_changed(env: &Env, previous: &Address, admin: &Address) {
    let event = AdminChanged {
        previous: previous.clone(),
        admin: admin.clone(),
    };
    env.events().publish((symbol_short!("admin"),), event);
}
