#![no_std]

mod contract;
mod errors;
mod events;
mod oracle;
mod storage;
mod utils;

mod tests;

pub use crate::contract::{LendingPoolContract, LendingPoolContractClient};
pub use crate::errors::ContractErrors;
pub use crate::oracle::PriceSourceClient;
