use crate::errors::ContractErrors;
use crate::storage::pools::PoolLedger;
use crate::storage::positions::{BorrowInfo, DepositInfo};
use crate::utils::math::{mul_div, to_u64};

/// `principal * current_index / index_snapshot`, truncated.
pub fn balance_with_interest(
    principal: u64,
    index_snapshot: u128,
    current_index: u128,
) -> Result<u64, ContractErrors> {
    if principal == 0 || index_snapshot == 0 {
        return Ok(0);
    }

    to_u64(mul_div(principal as u128, current_index, index_snapshot)?)
}

pub fn deposit_balance(
    deposit: &Option<DepositInfo>,
    pool: &PoolLedger,
) -> Result<u64, ContractErrors> {
    match deposit {
        None => Ok(0),
        Some(info) => {
            balance_with_interest(info.principal, info.index_snapshot, pool.deposit_index)
        }
    }
}

pub fn borrow_balance(
    borrow: &Option<BorrowInfo>,
    pool: &PoolLedger,
) -> Result<u64, ContractErrors> {
    match borrow {
        None => Ok(0),
        Some(info) => {
            balance_with_interest(info.principal, info.index_snapshot, pool.borrow_index)
        }
    }
}
