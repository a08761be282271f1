use crate::errors::ContractErrors;
use soroban_sdk::{token, Address, Env};

/// Moves `amount` of `asset` from the account into the contract.
pub fn debit(
    e: &Env,
    asset: &Address,
    account: &Address,
    amount: u64,
) -> Result<(), ContractErrors> {
    let result = token::Client::new(e, asset).try_transfer(
        account,
        &e.current_contract_address(),
        &(amount as i128),
    );

    match result {
        Ok(Ok(())) => Ok(()),
        _ => {
            log::warn!("debit of {} failed", amount);
            Err(ContractErrors::InsufficientBalance)
        }
    }
}

/// Moves `amount` of `asset` from the contract to the account.
pub fn credit(
    e: &Env,
    asset: &Address,
    account: &Address,
    amount: u64,
) -> Result<(), ContractErrors> {
    let result = token::Client::new(e, asset).try_transfer(
        &e.current_contract_address(),
        account,
        &(amount as i128),
    );

    match result {
        Ok(Ok(())) => Ok(()),
        _ => {
            log::warn!("credit of {} failed", amount);
            Err(ContractErrors::InsufficientLiquidity)
        }
    }
}
