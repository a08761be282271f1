#![cfg(test)]

use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use crate::tests::test_utils::{create_test_data, init_contract, TestData};
use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
use soroban_sdk::{Address, Env, IntoVal};

#[test]
pub fn test_initialize() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);

    test_data.contract_client.initialize(&test_data.admin);

    e.as_contract(&test_data.contract_client.address, || {
        let admin: Address = e._core().address(&CoreDataKeys::Admin).unwrap();
        assert_eq!(&admin, &test_data.admin);
        assert!(e._core().address(&CoreDataKeys::PriceSource).is_none());
        assert_eq!(e._core().listed_assets().len(), 0);
    });

    let already_initialized_error = test_data
        .contract_client
        .try_initialize(&Address::generate(&e))
        .unwrap_err()
        .unwrap();

    assert_eq!(
        &already_initialized_error,
        &ContractErrors::AlreadyInitialized
    );
}

#[test]
pub fn test_not_initialized() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);

    let create_pool_error = test_data
        .contract_client
        .try_create_pool(
            &test_data.admin,
            &test_data.usdc_token_client.address,
            &test_data.pool_config,
        )
        .unwrap_err()
        .unwrap();
    assert_eq!(&create_pool_error, &ContractErrors::NotInitialized);

    let set_price_source_error = test_data
        .contract_client
        .try_set_price_source(&test_data.price_source_client.address)
        .unwrap_err()
        .unwrap();
    assert_eq!(&set_price_source_error, &ContractErrors::NotInitialized);
}

#[test]
pub fn test_core_updates_validations() {
    let e: Env = Env::default();
    let test_data: TestData = create_test_data(&e);
    test_data
        .contract_client
        .mock_all_auths()
        .initialize(&test_data.admin);

    let new_admin: Address = Address::generate(&e);

    let no_admin_signature_error = test_data.contract_client.try_set_admin(&new_admin);
    assert!(no_admin_signature_error.is_err());

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &test_data.admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_admin",
                args: (new_admin.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_admin(&new_admin);

    e.as_contract(&test_data.contract_client.address, || {
        let admin: Address = e._core().address(&CoreDataKeys::Admin).unwrap();
        assert_eq!(&admin, &new_admin);
    });

    // The old admin can no longer list pools
    let unauthorized_error = test_data
        .contract_client
        .mock_all_auths()
        .try_create_pool(
            &test_data.admin,
            &test_data.usdc_token_client.address,
            &test_data.pool_config,
        )
        .unwrap_err()
        .unwrap();
    assert_eq!(&unauthorized_error, &ContractErrors::Unauthorized);

    test_data
        .contract_client
        .mock_auths(&[MockAuth {
            address: &new_admin,
            invoke: &MockAuthInvoke {
                contract: &test_data.contract_client.address,
                fn_name: "set_price_source",
                args: (test_data.price_source_client.address.clone(),).into_val(&e),
                sub_invokes: &[],
            },
        }])
        .set_price_source(&test_data.price_source_client.address);

    e.as_contract(&test_data.contract_client.address, || {
        let price_source: Address = e._core().address(&CoreDataKeys::PriceSource).unwrap();
        assert_eq!(&price_source, &test_data.price_source_client.address);
    });
}

#[test]
pub fn test_full_setup() {
    let e: Env = Env::default();
    e.mock_all_auths();
    let test_data: TestData = create_test_data(&e);
    init_contract(&test_data);

    let pools = test_data.contract_client.get_pools();
    assert_eq!(pools.len(), 2);
    assert_eq!(pools.get(0).unwrap(), test_data.usdc_token_client.address);
    assert_eq!(pools.get(1).unwrap(), test_data.xlm_token_client.address);
}
