#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::pools::PoolConfig;
use crate::storage::positions::{RateMode, UserAccount};
use crate::tests::test_utils::{
    create_test_data, create_token_contract, init_contract, prepare_test_accounts,
    set_ledger_timestamp, TestData,
};
use crate::utils::accrual::SECONDS_PER_YEAR;
use crate::utils::risk::{AccountData, HEALTH_FACTOR_MAX};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};

/// Borrower holds 10_000 xlm (1_000 USD) as collateral against 500 usdc of debt.
fn open_position(test_data: &TestData) -> Address {
    let lender: Address = Address::generate(&test_data.contract_client.env);
    let borrower: Address = Address::generate(&test_data.contract_client.env);
    prepare_test_accounts(test_data, &[&lender, &borrower]);

    test_data.contract_client.deposit(
        &lender,
        &test_data.usdc_token_client.address,
        &1_000,
        &false,
    );
    test_data.contract_client.deposit(
        &borrower,
        &test_data.xlm_token_client.address,
        &10_000,
        &true,
    );
    test_data.contract_client.borrow(
        &borrower,
        &test_data.usdc_token_client.address,
        &500,
        &RateMode::Variable,
    );

    borrower
}

#[test]
pub fn test_empty_account() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let account: Address = Address::generate(&e);
    assert_eq!(
        test_data.contract_client.get_account_data(&account),
        AccountData {
            collateral_usd: 0,
            weighted_collateral_usd: 0,
            borrow_capacity_usd: 0,
            debt_usd: 0,
            health_factor: HEALTH_FACTOR_MAX,
        }
    );
    assert_eq!(
        test_data.contract_client.get_health_factor(&account),
        HEALTH_FACTOR_MAX
    );
}

#[test]
pub fn test_account_data() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);
    let borrower: Address = open_position(&test_data);

    assert_eq!(
        test_data.contract_client.get_account_data(&borrower),
        AccountData {
            collateral_usd: 1_000,
            weighted_collateral_usd: 800,
            borrow_capacity_usd: 750,
            debt_usd: 500,
            health_factor: 1_600_000,
        }
    );

    // Debt is valued with the interest owed as of now
    set_ledger_timestamp(&e, SECONDS_PER_YEAR);
    let data: AccountData = test_data.contract_client.get_account_data(&borrower);
    assert_eq!(data.debt_usd, 541);
    assert_eq!(data.collateral_usd, 1_000);
}

#[test]
pub fn test_withdraw_health_checks() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);
    let borrower: Address = open_position(&test_data);

    let health_error = test_data
        .contract_client
        .try_withdraw(&borrower, &test_data.xlm_token_client.address, &4_000)
        .unwrap_err()
        .unwrap();
    assert_eq!(&health_error, &ContractErrors::HealthFactorTooLow);
    assert_eq!(
        test_data
            .contract_client
            .get_user_deposit_balance(&borrower, &test_data.xlm_token_client.address),
        10_000
    );

    test_data
        .contract_client
        .withdraw(&borrower, &test_data.xlm_token_client.address, &3_000);
    assert_eq!(
        test_data.contract_client.get_health_factor(&borrower),
        1_120_000
    );

    test_data
        .contract_client
        .deposit(&borrower, &test_data.usdc_token_client.address, &200, &false);

    // Prices moved against the borrower
    test_data
        .price_source_client
        .set_price(&test_data.xlm_token_client.address, &50_000);
    assert_eq!(
        test_data.contract_client.get_health_factor(&borrower),
        560_000
    );

    let health_error = test_data
        .contract_client
        .try_withdraw(&borrower, &test_data.xlm_token_client.address, &1)
        .unwrap_err()
        .unwrap();
    assert_eq!(&health_error, &ContractErrors::HealthFactorTooLow);

    // Deposits outside the collateral set are free to leave
    test_data
        .contract_client
        .withdraw(&borrower, &test_data.usdc_token_client.address, &200);
}

#[test]
pub fn test_set_collateral() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);
    let borrower: Address = open_position(&test_data);

    let health_error = test_data
        .contract_client
        .try_set_collateral(&borrower, &test_data.xlm_token_client.address, &false)
        .unwrap_err()
        .unwrap();
    assert_eq!(&health_error, &ContractErrors::HealthFactorTooLow);
    assert!(test_data
        .contract_client
        .get_user_account(&borrower)
        .collateral
        .contains(&test_data.xlm_token_client.address));

    let no_deposit_error = test_data
        .contract_client
        .try_set_collateral(&borrower, &test_data.usdc_token_client.address, &true)
        .unwrap_err()
        .unwrap();
    assert_eq!(&no_deposit_error, &ContractErrors::InsufficientBalance);

    let missing_pool_error = test_data
        .contract_client
        .try_set_collateral(&borrower, &Address::generate(&e), &true)
        .unwrap_err()
        .unwrap();
    assert_eq!(&missing_pool_error, &ContractErrors::PoolNotExists);

    let saver: Address = Address::generate(&e);
    prepare_test_accounts(&test_data, &[&saver]);
    test_data
        .contract_client
        .deposit(&saver, &test_data.xlm_token_client.address, &1_000, &true);

    test_data
        .contract_client
        .set_collateral(&saver, &test_data.xlm_token_client.address, &false);
    let user_account: UserAccount = test_data.contract_client.get_user_account(&saver);
    assert!(user_account.collateral.is_empty());
    assert_eq!(
        user_account
            .deposits
            .get(test_data.xlm_token_client.address.clone())
            .unwrap()
            .enabled_as_collateral,
        false
    );
    assert_eq!(
        test_data.contract_client.get_account_data(&saver).collateral_usd,
        0
    );

    test_data
        .contract_client
        .set_collateral(&saver, &test_data.xlm_token_client.address, &true);
    assert_eq!(
        test_data.contract_client.get_account_data(&saver).collateral_usd,
        100
    );

    let (restricted_asset, restricted_asset_stellar) =
        create_token_contract(&e, &Address::generate(&e));
    test_data.contract_client.create_pool(
        &test_data.admin,
        &restricted_asset.address,
        &PoolConfig {
            can_be_collateral: false,
            ..test_data.pool_config.clone()
        },
    );
    restricted_asset_stellar.mint(&saver, &1_000);
    test_data
        .contract_client
        .deposit(&saver, &restricted_asset.address, &1_000, &false);

    let collateral_error = test_data
        .contract_client
        .try_set_collateral(&saver, &restricted_asset.address, &true)
        .unwrap_err()
        .unwrap();
    assert_eq!(&collateral_error, &ContractErrors::CollateralNotAllowed);
}
