use crate::errors::ContractErrors;
use crate::storage::pools::{PoolLedger, PoolsDataFunc};
use crate::utils::math::{mul_div, to_u64, SCALE, SCALE_18};
use crate::utils::rates::{borrow_rate, deposit_rate, utilization};
use soroban_sdk::{Address, Env};

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 3600;

/// Linear growth of an index over `elapsed` seconds at a yearly `rate`, in `SCALE_18`.
pub fn growth_factor(rate: u64, elapsed: u64) -> Result<u128, ContractErrors> {
    let rate_18: u128 = (rate as u128)
        .checked_mul(SCALE_18 / SCALE as u128)
        .ok_or(ContractErrors::MathOverflow)?;

    let interest: u128 = mul_div(rate_18, elapsed as u128, SECONDS_PER_YEAR as u128)?;

    SCALE_18
        .checked_add(interest)
        .ok_or(ContractErrors::MathOverflow)
}

/// `index * growth / SCALE_18`, only the interest part goes through the product so large
/// indexes don't overflow.
pub fn grow_index(index: u128, growth: u128) -> Result<u128, ContractErrors> {
    let rate: u128 = growth
        .checked_sub(SCALE_18)
        .ok_or(ContractErrors::MathOverflow)?;
    let interest: u128 = mul_div(index, rate, SCALE_18)?;
    index
        .checked_add(interest)
        .ok_or(ContractErrors::MathOverflow)
}

/// Brings the pool indexes up to `now`. Returns `false` when no time has passed.
pub fn accrue(pool: &mut PoolLedger, now: u64) -> Result<bool, ContractErrors> {
    if now <= pool.last_update_timestamp {
        return Ok(false);
    }

    let elapsed: u64 = now - pool.last_update_timestamp;

    let current_utilization: u64 = utilization(pool.total_borrows, pool.total_deposits);
    let new_borrow_rate: u64 = borrow_rate(current_utilization, &pool.config);
    let new_deposit_rate: u64 = deposit_rate(
        new_borrow_rate,
        current_utilization,
        pool.config.reserve_factor,
    );

    let borrow_growth: u128 = growth_factor(new_borrow_rate, elapsed)?;
    let deposit_growth: u128 = growth_factor(new_deposit_rate, elapsed)?;

    let borrow_interest: u128 = mul_div(
        pool.total_borrows as u128,
        borrow_growth - SCALE_18,
        SCALE_18,
    )?;
    let protocol_cut: u64 = to_u64(mul_div(
        borrow_interest,
        pool.config.reserve_factor as u128,
        SCALE as u128,
    )?)?;

    pool.borrow_index = grow_index(pool.borrow_index, borrow_growth)?;
    pool.deposit_index = grow_index(pool.deposit_index, deposit_growth)?;
    pool.reserves_accrued = pool.reserves_accrued.saturating_add(protocol_cut);
    pool.current_borrow_rate = new_borrow_rate;
    pool.current_deposit_rate = new_deposit_rate;
    pool.last_update_timestamp = now;

    Ok(true)
}

/// Loads a pool with its indexes accrued to the current ledger time. Nothing is persisted.
pub fn load_accrued_pool(e: &Env, asset: &Address) -> Result<PoolLedger, ContractErrors> {
    let mut pool: PoolLedger = e
        ._pools()
        .pool(asset)
        .ok_or(ContractErrors::PoolNotExists)?;

    if accrue(&mut pool, e.ledger().timestamp())? {
        log::debug!(
            "pool accrued: borrow_index={} deposit_index={}",
            pool.borrow_index,
            pool.deposit_index
        );
    }

    Ok(pool)
}
