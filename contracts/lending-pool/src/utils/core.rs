use crate::errors::ContractErrors;
use crate::storage::core::{CoreDataKeys, CoreStorageFunc};
use soroban_sdk::{Address, Env};

/// Loads the admin and requires its signature.
pub fn require_admin(e: &Env) -> Result<Address, ContractErrors> {
    let admin: Address = e
        ._core()
        .address(&CoreDataKeys::Admin)
        .ok_or(ContractErrors::NotInitialized)?;
    admin.require_auth();
    Ok(admin)
}

/// Same as `require_admin` but for entry points where the caller names itself.
pub fn validate_admin(e: &Env, caller: &Address) -> Result<(), ContractErrors> {
    let admin: Address = e
        ._core()
        .address(&CoreDataKeys::Admin)
        .ok_or(ContractErrors::NotInitialized)?;

    if &admin != caller {
        return Err(ContractErrors::Unauthorized);
    }

    caller.require_auth();
    Ok(())
}
