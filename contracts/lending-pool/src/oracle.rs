use soroban_sdk::{contractclient, Address, Env};

/// External price feed. Prices are USD per unit of `asset`, 1_000_000 == 1 USD.
#[contractclient(name = "PriceSourceClient")]
pub trait PriceSource {
    fn price(e: Env, asset: Address) -> u128;
}
