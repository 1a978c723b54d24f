use nftpool_shared::AssetError;
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StakingError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotAuthorized = 3,
    EmptyRequest = 4,
    AlreadyStaked = 5,
    NotCustodian = 6,
    NotStaker = 7,
    Paused = 8,
    PeriodNotComplete = 9,
    RewardTooHigh = 10,
    NotOwner = 11,
    NotApproved = 12,
    NotExist = 13,
    AssetTransferFailed = 14,
    RewardTransferFailed = 15,
    InvalidAmount = 16,
    InvalidDuration = 17,
    NumericOverflow = 18,
}

impl From<AssetError> for StakingError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::NotOwner => StakingError::NotOwner,
            AssetError::NotApproved => StakingError::NotApproved,
            AssetError::NotExist => StakingError::NotExist,
        }
    }
}
