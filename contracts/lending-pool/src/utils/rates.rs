//! Kinked interest rate model. Every input and output uses `SCALE` fixed-point.

use crate::storage::pools::PoolConfig;
use crate::utils::math::SCALE;
use num_integer::div_floor;

/// Share of the deposits currently lent out, capped at 100%.
pub fn utilization(total_borrows: u64, total_deposits: u64) -> u64 {
    if total_deposits == 0 {
        return 0;
    }

    let ratio: u128 = div_floor(
        total_borrows as u128 * SCALE as u128,
        total_deposits as u128,
    );

    ratio.min(SCALE as u128) as u64
}

pub fn borrow_rate(utilization: u64, config: &PoolConfig) -> u64 {
    let utilization: u128 = utilization.min(SCALE) as u128;
    let base_rate: u128 = config.base_rate as u128;
    let slope1: u128 = config.slope1 as u128;
    let slope2: u128 = config.slope2 as u128;
    let optimal: u128 = config.optimal_utilization as u128;

    let rate: u128 = if utilization <= optimal {
        base_rate + div_floor(utilization * slope1, optimal)
    } else {
        base_rate + slope1 + div_floor((utilization - optimal) * slope2, SCALE as u128 - optimal)
    };

    rate as u64
}

/// Depositors earn the borrow interest on the lent out share minus the protocol cut.
pub fn deposit_rate(borrow_rate: u64, utilization: u64, reserve_factor: u64) -> u64 {
    let scale: u128 = SCALE as u128;
    let rate: u128 = div_floor(
        div_floor(
            borrow_rate as u128 * utilization as u128 * (scale - reserve_factor.min(SCALE) as u128),
            scale,
        ),
        scale,
    );

    rate as u64
}
