use crate::errors::ContractErrors;
use crate::storage::pools::PoolConfig;
use crate::utils::math::SCALE;

pub fn validate_amount(amount: u64) -> Result<(), ContractErrors> {
    if amount == 0 {
        return Err(ContractErrors::InvalidParameter);
    }

    Ok(())
}

pub fn validate_pool_config(config: &PoolConfig) -> Result<(), ContractErrors> {
    let values = [
        config.base_rate,
        config.slope1,
        config.slope2,
        config.optimal_utilization,
        config.collateral_factor,
        config.liquidation_threshold,
        config.liquidation_bonus,
        config.reserve_factor,
    ];

    if values.iter().any(|value| *value > SCALE) {
        return Err(ContractErrors::InvalidParameter);
    }

    // Both segments of the rate curve need a non empty range
    if config.optimal_utilization == 0 || config.optimal_utilization == SCALE {
        return Err(ContractErrors::InvalidParameter);
    }

    if config.collateral_factor > config.liquidation_threshold {
        return Err(ContractErrors::InvalidParameter);
    }

    Ok(())
}
