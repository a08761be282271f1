use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractErrors {
    // Core
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidParameter = 4,
    MathOverflow = 5,

    // Pools
    PoolNotExists = 10,
    PoolAlreadyExists = 11,
    BorrowingDisabled = 12,
    CollateralNotAllowed = 13,

    // Positions
    InsufficientBalance = 20,
    InsufficientLiquidity = 21,
    InsufficientBorrowPower = 22,
    HealthFactorTooLow = 23,

    // Prices
    PriceUnavailable = 30,
}
