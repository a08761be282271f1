use crate::storage::core::{BUMP_CONSTANT, BUMP_CONSTANT_THRESHOLD};
use soroban_sdk::{contracttype, Address, Env};

/// Risk and rate parameters of a pool, fixed when the pool is created.
/// Every value is a fixed-point number where 1_000_000 means 100%.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    pub base_rate: u64,
    pub slope1: u64,
    pub slope2: u64,
    pub optimal_utilization: u64,
    pub collateral_factor: u64,
    pub liquidation_threshold: u64,
    pub liquidation_bonus: u64,
    pub reserve_factor: u64,
    pub can_be_collateral: bool,
    pub can_borrow: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLedger {
    pub asset: Address,
    pub config: PoolConfig,

    // Liquidity actually held by the contract for this asset
    pub reserves: u64,

    // Principal counters, interest is not folded into them
    pub total_deposits: u64,
    pub total_borrows: u64,

    // 1e18 == 1.0
    pub deposit_index: u128,
    pub borrow_index: u128,

    pub current_deposit_rate: u64,
    pub current_borrow_rate: u64,
    pub last_update_timestamp: u64,

    // Protocol share of the borrow interest
    pub reserves_accrued: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolData {
    pub total_deposits: u64,
    pub total_borrows: u64,
    pub available_liquidity: u64,
    pub utilization: u64,
    pub deposit_rate: u64,
    pub borrow_rate: u64,
    pub reserves: u64,
}

#[contracttype]
pub enum PoolsDataKeys {
    Pool(Address),
}

pub struct Pools {
    pub env: Env,
}

impl Pools {
    #[inline(always)]
    pub fn new(e: &Env) -> Pools {
        Pools { env: e.clone() }
    }

    pub fn has(&self, asset: &Address) -> bool {
        self.env
            .storage()
            .persistent()
            .has(&PoolsDataKeys::Pool(asset.clone()))
    }

    pub fn pool(&self, asset: &Address) -> Option<PoolLedger> {
        self.env
            .storage()
            .persistent()
            .get(&PoolsDataKeys::Pool(asset.clone()))
    }

    pub fn set_pool(&self, pool: &PoolLedger) {
        self.env
            .storage()
            .persistent()
            .set(&PoolsDataKeys::Pool(pool.asset.clone()), pool);
        self.bump_pool(&pool.asset);
    }

    pub fn bump_pool(&self, asset: &Address) {
        self.env.storage().persistent().extend_ttl(
            &PoolsDataKeys::Pool(asset.clone()),
            BUMP_CONSTANT_THRESHOLD,
            BUMP_CONSTANT,
        );
    }
}

pub trait PoolsDataFunc {
    fn _pools(&self) -> Pools;
}

impl PoolsDataFunc for Env {
    #[inline(always)]
    fn _pools(&self) -> Pools {
        Pools::new(self)
    }
}
