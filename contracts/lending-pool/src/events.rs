use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_new_pool(e: &Env, asset: &Address) {
    e.events()
        .publish((symbol_short!("new_pool"), asset.clone()), ());
}

pub fn emit_accrue(e: &Env, asset: &Address, borrow_index: u128, deposit_index: u128) {
    e.events().publish(
        (symbol_short!("accrue"), asset.clone()),
        (borrow_index, deposit_index),
    );
}

pub fn emit_deposit(e: &Env, account: &Address, asset: &Address, amount: u64) {
    e.events().publish(
        (symbol_short!("deposit"), account.clone(), asset.clone()),
        amount,
    );
}

pub fn emit_withdraw(e: &Env, account: &Address, asset: &Address, amount: u64) {
    e.events().publish(
        (symbol_short!("withdraw"), account.clone(), asset.clone()),
        amount,
    );
}

pub fn emit_borrow(e: &Env, account: &Address, asset: &Address, amount: u64) {
    e.events().publish(
        (symbol_short!("borrow"), account.clone(), asset.clone()),
        amount,
    );
}

pub fn emit_repay(e: &Env, account: &Address, asset: &Address, amount: u64) {
    e.events().publish(
        (symbol_short!("repay"), account.clone(), asset.clone()),
        amount,
    );
}

pub fn emit_collateral(e: &Env, account: &Address, asset: &Address, enabled: bool) {
    e.events().publish(
        (symbol_short!("collat"), account.clone(), asset.clone()),
        enabled,
    );
}
