pub mod accrual;
pub mod balances;
pub mod core;
pub mod math;
pub mod payments;
pub mod rates;
pub mod risk;
pub mod validations;
