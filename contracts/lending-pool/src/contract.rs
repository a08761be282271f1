use crate::errors::ContractErrors;
use crate::events::{
    emit_accrue, emit_borrow, emit_collateral, emit_deposit, emit_new_pool, emit_repay,
    emit_withdraw,
};
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use crate::storage::pools::{PoolConfig, PoolData, PoolLedger, PoolsDataFunc};
use crate::storage::positions::{
    BorrowInfo, DepositInfo, PositionsDataFunc, RateMode, UserAccount,
};
use crate::utils::accrual::{self, load_accrued_pool};
use crate::utils::balances::{borrow_balance, deposit_balance};
use crate::utils::core::{require_admin, validate_admin};
use crate::utils::math::SCALE_18;
use crate::utils::payments::{credit, debit};
use crate::utils::rates::{borrow_rate, utilization};
use crate::utils::risk::{account_data, assert_borrow_power, assert_healthy, AccountData};
use crate::utils::validations::{validate_amount, validate_pool_config};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

pub trait LendingPoolContractTrait {
    // Core
    fn initialize(e: Env, admin: Address) -> Result<(), ContractErrors>;
    fn set_admin(e: Env, new_admin: Address) -> Result<(), ContractErrors>;
    fn set_price_source(e: Env, price_source: Address) -> Result<(), ContractErrors>;
    fn upgrade(e: Env, hash: BytesN<32>) -> Result<(), ContractErrors>;

    // Pools
    fn create_pool(
        e: Env,
        admin: Address,
        asset: Address,
        config: PoolConfig,
    ) -> Result<(), ContractErrors>;
    fn accrue(e: Env, asset: Address) -> Result<(), ContractErrors>;
    fn get_pool(e: Env, asset: Address) -> Result<PoolLedger, ContractErrors>;
    fn get_pools(e: Env) -> Vec<Address>;
    fn get_pool_data(e: Env, asset: Address) -> Result<PoolData, ContractErrors>;

    // Positions
    fn deposit(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
        enable_as_collateral: bool,
    ) -> Result<(), ContractErrors>;
    fn withdraw(e: Env, account: Address, asset: Address, amount: u64)
        -> Result<(), ContractErrors>;
    fn borrow(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
        rate_mode: RateMode,
    ) -> Result<(), ContractErrors>;
    fn repay(e: Env, account: Address, asset: Address, amount: u64)
        -> Result<u64, ContractErrors>;
    fn set_collateral(
        e: Env,
        account: Address,
        asset: Address,
        enabled: bool,
    ) -> Result<(), ContractErrors>;
    fn get_user_account(e: Env, account: Address) -> UserAccount;
    fn get_user_deposit_balance(
        e: Env,
        account: Address,
        asset: Address,
    ) -> Result<u64, ContractErrors>;
    fn get_user_borrow_balance(
        e: Env,
        account: Address,
        asset: Address,
    ) -> Result<u64, ContractErrors>;

    // Risk
    fn get_account_data(e: Env, account: Address) -> Result<AccountData, ContractErrors>;
    fn get_health_factor(e: Env, account: Address) -> Result<u128, ContractErrors>;
}

/// Accrues the pool for a state changing call, the caller persists it.
pub(crate) fn touch_pool(e: &Env, asset: &Address) -> Result<PoolLedger, ContractErrors> {
    let mut pool: PoolLedger = e
        ._pools()
        .pool(asset)
        .ok_or(ContractErrors::PoolNotExists)?;

    if accrual::accrue(&mut pool, e.ledger().timestamp())? {
        emit_accrue(e, asset, pool.borrow_index, pool.deposit_index);
    }

    Ok(pool)
}

#[contract]
pub struct LendingPoolContract;

#[contractimpl]
impl LendingPoolContractTrait for LendingPoolContract {
    fn initialize(e: Env, admin: Address) -> Result<(), ContractErrors> {
        if e._core().is_initialized() {
            return Err(ContractErrors::AlreadyInitialized);
        }

        admin.require_auth();
        e._core().set_address(&CoreDataKeys::Admin, &admin);
        e._core().bump();
        Ok(())
    }

    fn set_admin(e: Env, new_admin: Address) -> Result<(), ContractErrors> {
        require_admin(&e)?;
        e._core().set_address(&CoreDataKeys::Admin, &new_admin);
        e._core().bump();
        Ok(())
    }

    fn set_price_source(e: Env, price_source: Address) -> Result<(), ContractErrors> {
        require_admin(&e)?;
        e._core()
            .set_address(&CoreDataKeys::PriceSource, &price_source);
        e._core().bump();
        Ok(())
    }

    fn upgrade(e: Env, hash: BytesN<32>) -> Result<(), ContractErrors> {
        require_admin(&e)?;
        e.deployer().update_current_contract_wasm(hash);
        e._core().bump();
        Ok(())
    }

    fn create_pool(
        e: Env,
        admin: Address,
        asset: Address,
        config: PoolConfig,
    ) -> Result<(), ContractErrors> {
        validate_admin(&e, &admin)?;

        if e._pools().has(&asset) {
            return Err(ContractErrors::PoolAlreadyExists);
        }

        validate_pool_config(&config)?;

        let initial_borrow_rate: u64 = borrow_rate(0, &config);
        let pool: PoolLedger = PoolLedger {
            asset: asset.clone(),
            config,
            reserves: 0,
            total_deposits: 0,
            total_borrows: 0,
            deposit_index: SCALE_18,
            borrow_index: SCALE_18,
            current_deposit_rate: 0,
            current_borrow_rate: initial_borrow_rate,
            last_update_timestamp: e.ledger().timestamp(),
            reserves_accrued: 0,
        };

        e._pools().set_pool(&pool);
        e._core().add_listed_asset(&asset);
        e._core().bump();
        emit_new_pool(&e, &asset);
        Ok(())
    }

    fn accrue(e: Env, asset: Address) -> Result<(), ContractErrors> {
        let pool: PoolLedger = touch_pool(&e, &asset)?;
        e._pools().set_pool(&pool);
        e._core().bump();
        Ok(())
    }

    fn get_pool(e: Env, asset: Address) -> Result<PoolLedger, ContractErrors> {
        e._core().bump();
        e._pools()
            .pool(&asset)
            .ok_or(ContractErrors::PoolNotExists)
    }

    fn get_pools(e: Env) -> Vec<Address> {
        e._core().bump();
        e._core().listed_assets()
    }

    fn get_pool_data(e: Env, asset: Address) -> Result<PoolData, ContractErrors> {
        e._core().bump();
        let pool: PoolLedger = load_accrued_pool(&e, &asset)?;

        Ok(PoolData {
            total_deposits: pool.total_deposits,
            total_borrows: pool.total_borrows,
            available_liquidity: pool.reserves,
            utilization: utilization(pool.total_borrows, pool.total_deposits),
            deposit_rate: pool.current_deposit_rate,
            borrow_rate: pool.current_borrow_rate,
            reserves: pool.reserves_accrued,
        })
    }

    fn deposit(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
        enable_as_collateral: bool,
    ) -> Result<(), ContractErrors> {
        account.require_auth();
        validate_amount(amount)?;

        let mut pool: PoolLedger = touch_pool(&e, &asset)?;
        if enable_as_collateral && !pool.config.can_be_collateral {
            return Err(ContractErrors::CollateralNotAllowed);
        }

        let mut user_account: UserAccount = e._positions().account(&account);
        let current_balance: u64 =
            deposit_balance(&user_account.deposits.get(asset.clone()), &pool)?;
        let new_balance: u64 = current_balance
            .checked_add(amount)
            .ok_or(ContractErrors::MathOverflow)?;

        debit(&e, &asset, &account, amount)?;

        pool.reserves = pool
            .reserves
            .checked_add(amount)
            .ok_or(ContractErrors::MathOverflow)?;
        pool.total_deposits = pool
            .total_deposits
            .checked_add(amount)
            .ok_or(ContractErrors::MathOverflow)?;

        if enable_as_collateral {
            user_account.enable_collateral(&asset);
        }

        user_account.deposits.set(
            asset.clone(),
            DepositInfo {
                principal: new_balance,
                index_snapshot: pool.deposit_index,
                enabled_as_collateral: user_account.is_collateral(&asset),
                last_action_timestamp: e.ledger().timestamp(),
            },
        );

        e._pools().set_pool(&pool);
        e._positions().set_account(&account, &user_account);
        e._core().bump();
        emit_deposit(&e, &account, &asset, amount);
        Ok(())
    }

    fn withdraw(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
    ) -> Result<(), ContractErrors> {
        account.require_auth();
        validate_amount(amount)?;

        let mut pool: PoolLedger = touch_pool(&e, &asset)?;
        let mut user_account: UserAccount = e._positions().account(&account);
        let deposit: DepositInfo = user_account
            .deposits
            .get(asset.clone())
            .ok_or(ContractErrors::InsufficientBalance)?;

        let current_balance: u64 = deposit_balance(&Some(deposit.clone()), &pool)?;
        if current_balance < amount {
            return Err(ContractErrors::InsufficientBalance);
        }

        if pool.reserves < amount {
            return Err(ContractErrors::InsufficientLiquidity);
        }

        user_account.deposits.set(
            asset.clone(),
            DepositInfo {
                principal: current_balance - amount,
                index_snapshot: pool.deposit_index,
                enabled_as_collateral: deposit.enabled_as_collateral,
                last_action_timestamp: e.ledger().timestamp(),
            },
        );

        pool.reserves -= amount;
        pool.total_deposits = pool.total_deposits.saturating_sub(amount);

        e._pools().set_pool(&pool);
        e._positions().set_account(&account, &user_account);

        credit(&e, &asset, &account, amount)?;

        if user_account.is_collateral(&asset) && user_account.has_debt() {
            assert_healthy(&e, &user_account)?;
        }

        e._core().bump();
        emit_withdraw(&e, &account, &asset, amount);
        Ok(())
    }

    fn borrow(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
        rate_mode: RateMode,
    ) -> Result<(), ContractErrors> {
        account.require_auth();
        validate_amount(amount)?;

        let mut pool: PoolLedger = touch_pool(&e, &asset)?;
        if !pool.config.can_borrow {
            return Err(ContractErrors::BorrowingDisabled);
        }

        if pool.reserves < amount {
            return Err(ContractErrors::InsufficientLiquidity);
        }

        let mut user_account: UserAccount = e._positions().account(&account);
        let current_debt: u64 =
            borrow_balance(&user_account.borrows.get(asset.clone()), &pool)?;
        let new_debt: u64 = current_debt
            .checked_add(amount)
            .ok_or(ContractErrors::MathOverflow)?;

        user_account.borrows.set(
            asset.clone(),
            BorrowInfo {
                principal: new_debt,
                index_snapshot: pool.borrow_index,
                rate_mode,
                stable_rate: match rate_mode {
                    RateMode::Stable => pool.current_borrow_rate,
                    RateMode::Variable => 0,
                },
                last_action_timestamp: e.ledger().timestamp(),
            },
        );

        pool.reserves -= amount;
        pool.total_borrows = pool
            .total_borrows
            .checked_add(amount)
            .ok_or(ContractErrors::MathOverflow)?;

        e._pools().set_pool(&pool);
        e._positions().set_account(&account, &user_account);

        credit(&e, &asset, &account, amount)?;

        // Evaluated on the updated state, a failure discards the whole call
        assert_borrow_power(&e, &user_account)?;

        e._core().bump();
        emit_borrow(&e, &account, &asset, amount);
        Ok(())
    }

    fn repay(
        e: Env,
        account: Address,
        asset: Address,
        amount: u64,
    ) -> Result<u64, ContractErrors> {
        account.require_auth();
        validate_amount(amount)?;

        let mut pool: PoolLedger = touch_pool(&e, &asset)?;
        let mut user_account: UserAccount = e._positions().account(&account);
        let borrow: BorrowInfo = user_account
            .borrows
            .get(asset.clone())
            .ok_or(ContractErrors::InsufficientBalance)?;

        let current_debt: u64 = borrow_balance(&Some(borrow.clone()), &pool)?;
        let actual_repay: u64 = amount.min(current_debt);
        if actual_repay < amount {
            log::debug!("repay of {} capped to the debt {}", amount, current_debt);
        }

        if actual_repay > 0 {
            debit(&e, &asset, &account, actual_repay)?;
        }

        let remaining_debt: u64 = current_debt - actual_repay;
        if remaining_debt == 0 {
            user_account.borrows.remove(asset.clone());
        } else {
            user_account.borrows.set(
                asset.clone(),
                BorrowInfo {
                    principal: remaining_debt,
                    index_snapshot: pool.borrow_index,
                    rate_mode: borrow.rate_mode,
                    stable_rate: borrow.stable_rate,
                    last_action_timestamp: e.ledger().timestamp(),
                },
            );
        }

        pool.reserves = pool
            .reserves
            .checked_add(actual_repay)
            .ok_or(ContractErrors::MathOverflow)?;
        pool.total_borrows = pool.total_borrows.saturating_sub(actual_repay);

        e._pools().set_pool(&pool);
        e._positions().set_account(&account, &user_account);
        e._core().bump();
        emit_repay(&e, &account, &asset, actual_repay);
        Ok(actual_repay)
    }

    fn set_collateral(
        e: Env,
        account: Address,
        asset: Address,
        enabled: bool,
    ) -> Result<(), ContractErrors> {
        account.require_auth();

        let pool: PoolLedger = e
            ._pools()
            .pool(&asset)
            .ok_or(ContractErrors::PoolNotExists)?;

        let mut user_account: UserAccount = e._positions().account(&account);
        let mut deposit: DepositInfo = user_account
            .deposits
            .get(asset.clone())
            .ok_or(ContractErrors::InsufficientBalance)?;

        if enabled {
            if !pool.config.can_be_collateral {
                return Err(ContractErrors::CollateralNotAllowed);
            }
            user_account.enable_collateral(&asset);
        } else {
            user_account.disable_collateral(&asset);
        }

        deposit.enabled_as_collateral = enabled;
        user_account.deposits.set(asset.clone(), deposit);
        e._positions().set_account(&account, &user_account);

        if !enabled && user_account.has_debt() {
            assert_healthy(&e, &user_account)?;
        }

        e._core().bump();
        emit_collateral(&e, &account, &asset, enabled);
        Ok(())
    }

    fn get_user_account(e: Env, account: Address) -> UserAccount {
        e._core().bump();
        e._positions().account(&account)
    }

    fn get_user_deposit_balance(
        e: Env,
        account: Address,
        asset: Address,
    ) -> Result<u64, ContractErrors> {
        e._core().bump();
        let deposit: Option<DepositInfo> =
            e._positions().account(&account).deposits.get(asset.clone());
        if deposit.is_none() {
            return Ok(0);
        }

        deposit_balance(&deposit, &load_accrued_pool(&e, &asset)?)
    }

    fn get_user_borrow_balance(
        e: Env,
        account: Address,
        asset: Address,
    ) -> Result<u64, ContractErrors> {
        e._core().bump();
        let borrow: Option<BorrowInfo> =
            e._positions().account(&account).borrows.get(asset.clone());
        if borrow.is_none() {
            return Ok(0);
        }

        borrow_balance(&borrow, &load_accrued_pool(&e, &asset)?)
    }

    fn get_account_data(e: Env, account: Address) -> Result<AccountData, ContractErrors> {
        e._core().bump();
        account_data(&e, &e._positions().account(&account))
    }

    fn get_health_factor(e: Env, account: Address) -> Result<u128, ContractErrors> {
        e._core().bump();
        Ok(account_data(&e, &e._positions().account(&account))?.health_factor)
    }
}
