use crate::errors::ContractErrors;
use num_integer::{div_ceil, div_floor};

/// Fixed-point scale of rates, factors and prices (1_000_000 == 100%).
pub const SCALE: u64 = 1_000_000;

/// Fixed-point scale of the interest indexes.
pub const SCALE_18: u128 = 1_000_000_000_000_000_000;

pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, ContractErrors> {
    if denominator == 0 {
        return Err(ContractErrors::MathOverflow);
    }

    a.checked_mul(b)
        .map(|value| div_floor(value, denominator))
        .ok_or(ContractErrors::MathOverflow)
}

/// Same as `mul_div` but rounds up, used where the protocol must not undervalue.
pub fn mul_div_ceil(a: u128, b: u128, denominator: u128) -> Result<u128, ContractErrors> {
    if denominator == 0 {
        return Err(ContractErrors::MathOverflow);
    }

    a.checked_mul(b)
        .map(|value| div_ceil(value, denominator))
        .ok_or(ContractErrors::MathOverflow)
}

pub fn to_u64(value: u128) -> Result<u64, ContractErrors> {
    u64::try_from(value).map_err(|_| ContractErrors::MathOverflow)
}
