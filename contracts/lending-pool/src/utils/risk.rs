use crate::errors::ContractErrors;
use crate::oracle::PriceSourceClient;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use crate::storage::pools::PoolLedger;
use crate::storage::positions::UserAccount;
use crate::utils::accrual::load_accrued_pool;
use crate::utils::balances::balance_with_interest;
use crate::utils::math::{mul_div, mul_div_ceil, SCALE};
use soroban_sdk::{contracttype, Address, Env};

/// Health factor reported for accounts without debt.
pub const HEALTH_FACTOR_MAX: u128 = u128::MAX;

/// USD valuation of an account, every value uses `SCALE` fixed-point.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccountData {
    pub collateral_usd: u128,
    pub weighted_collateral_usd: u128,
    pub borrow_capacity_usd: u128,
    pub debt_usd: u128,
    pub health_factor: u128,
}

pub fn asset_price(e: &Env, asset: &Address) -> Result<u128, ContractErrors> {
    let price_source: Address = e
        ._core()
        .address(&CoreDataKeys::PriceSource)
        .ok_or(ContractErrors::PriceUnavailable)?;

    match PriceSourceClient::new(e, &price_source).try_price(asset) {
        Ok(Ok(price)) if price > 0 => Ok(price),
        _ => Err(ContractErrors::PriceUnavailable),
    }
}

/// Collateral is valued rounding down.
fn collateral_value(e: &Env, asset: &Address, balance: u64) -> Result<u128, ContractErrors> {
    if balance == 0 {
        return Ok(0);
    }

    mul_div(balance as u128, asset_price(e, asset)?, SCALE as u128)
}

/// Debt is valued rounding up, any outstanding debt is worth at least one unit.
fn debt_value(e: &Env, asset: &Address, balance: u64) -> Result<u128, ContractErrors> {
    if balance == 0 {
        return Ok(0);
    }

    mul_div_ceil(balance as u128, asset_price(e, asset)?, SCALE as u128)
}

fn checked_sum(a: u128, b: u128) -> Result<u128, ContractErrors> {
    a.checked_add(b).ok_or(ContractErrors::MathOverflow)
}

/// Values every position of the account at current prices, with each pool projected to now.
pub fn account_data(e: &Env, user_account: &UserAccount) -> Result<AccountData, ContractErrors> {
    let mut collateral_usd: u128 = 0;
    let mut weighted_collateral_usd: u128 = 0;
    let mut borrow_capacity_usd: u128 = 0;
    let mut debt_usd: u128 = 0;

    for (asset, deposit) in user_account.deposits.iter() {
        if !user_account.is_collateral(&asset) {
            continue;
        }

        let pool: PoolLedger = load_accrued_pool(e, &asset)?;
        if !pool.config.can_be_collateral {
            continue;
        }

        let balance: u64 =
            balance_with_interest(deposit.principal, deposit.index_snapshot, pool.deposit_index)?;
        let value: u128 = collateral_value(e, &asset, balance)?;

        collateral_usd = checked_sum(collateral_usd, value)?;
        borrow_capacity_usd = checked_sum(
            borrow_capacity_usd,
            mul_div(value, pool.config.collateral_factor as u128, SCALE as u128)?,
        )?;
        weighted_collateral_usd = checked_sum(
            weighted_collateral_usd,
            mul_div(value, pool.config.liquidation_threshold as u128, SCALE as u128)?,
        )?;
    }

    for (asset, borrow) in user_account.borrows.iter() {
        let pool: PoolLedger = load_accrued_pool(e, &asset)?;
        let debt: u64 =
            balance_with_interest(borrow.principal, borrow.index_snapshot, pool.borrow_index)?;
        debt_usd = checked_sum(debt_usd, debt_value(e, &asset, debt)?)?;
    }

    let health_factor: u128 = if debt_usd == 0 {
        HEALTH_FACTOR_MAX
    } else {
        mul_div(weighted_collateral_usd, SCALE as u128, debt_usd)?
    };

    Ok(AccountData {
        collateral_usd,
        weighted_collateral_usd,
        borrow_capacity_usd,
        debt_usd,
        health_factor,
    })
}

pub fn assert_healthy(e: &Env, user_account: &UserAccount) -> Result<(), ContractErrors> {
    if account_data(e, user_account)?.health_factor < SCALE as u128 {
        return Err(ContractErrors::HealthFactorTooLow);
    }

    Ok(())
}

pub fn assert_borrow_power(e: &Env, user_account: &UserAccount) -> Result<(), ContractErrors> {
    let data: AccountData = account_data(e, user_account)?;
    if data.debt_usd > data.borrow_capacity_usd {
        return Err(ContractErrors::InsufficientBorrowPower);
    }

    Ok(())
}
