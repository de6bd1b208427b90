use crate::error::ContractError;
use crate::state::{PRICE_SCALE, SWAP_FEE_DENOMINATOR, SWAP_FEE_NUMERATOR};
use cosmwasm_std::{Isqrt, Uint128, Uint256};

/// Calculates the initial LP shares using the geometric mean: sqrt(a * b).
pub(crate) fn calculate_initial_lp_shares(
    amount_a: Uint128,
    amount_b: Uint128,
) -> Result<Uint128, ContractError> {
    let prod = Uint256::from(amount_a) * Uint256::from(amount_b);
    let shares = Uint128::try_from(prod.isqrt())?;
    if shares.is_zero() {
        return Err(ContractError::InsufficientLiquidityMinted {});
    }
    Ok(shares)
}

/// Calculates LP shares for subsequent deposits: proportional to the smaller
/// implied contribution, so existing holders are never diluted.
pub(crate) fn calculate_subsequent_lp_shares(
    amount_a: Uint128,
    amount_b: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
    total_shares: Uint128,
) -> Result<Uint128, ContractError> {
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(ContractError::InsufficientLiquidity {});
    }
    let share_a = amount_a.multiply_ratio(total_shares, reserve_a);
    let share_b = amount_b.multiply_ratio(total_shares, reserve_b);
    let shares = std::cmp::min(share_a, share_b);
    if shares.is_zero() {
        return Err(ContractError::InsufficientLiquidityMinted {});
    }
    Ok(shares)
}

/// Translates an amount of one asset into the equivalent amount of the other
/// at the current reserve ratio (floor division).
pub(crate) fn quote(
    amount: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity {});
    }
    Ok(amount.multiply_ratio(reserve_out, reserve_in))
}

/// Resolves the amounts actually deposited by an add-liquidity call against a
/// funded pool: keeps the current reserve ratio, preferring the caller's full
/// A amount and scaling B down, or the reverse when B is the binding side.
pub(crate) fn calculate_deposit_amounts(
    amount_a_desired: Uint128,
    amount_b_desired: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    let amount_b_optimal = quote(amount_a_desired, reserve_a, reserve_b)?;
    if amount_b_optimal <= amount_b_desired {
        if amount_b_optimal < amount_b_min {
            return Err(ContractError::InsufficientBAmount {});
        }
        Ok((amount_a_desired, amount_b_optimal))
    } else {
        // amount_a_optimal <= amount_a_desired holds here
        let amount_a_optimal = quote(amount_b_desired, reserve_b, reserve_a)?;
        if amount_a_optimal < amount_a_min {
            return Err(ContractError::InsufficientAAmount {});
        }
        Ok((amount_a_optimal, amount_b_desired))
    }
}

/// Calculates the swap output amount under the constant product rule with the
/// fixed fee charged on the input side:
/// out = (in * 997 * reserve_out) / (reserve_in * 1000 + in * 997), floored.
pub(crate) fn calculate_swap_output(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if amount_in.is_zero() {
        return Err(ContractError::InsufficientInputAmount {});
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity {});
    }
    let amount_in_with_fee =
        Uint256::from(amount_in).checked_mul(Uint256::from(SWAP_FEE_NUMERATOR))?;
    let denominator = Uint256::from(reserve_in)
        .checked_mul(Uint256::from(SWAP_FEE_DENOMINATOR))?
        .checked_add(amount_in_with_fee)?;
    let output = amount_in_with_fee.multiply_ratio(Uint256::from(reserve_out), denominator);
    Ok(Uint128::try_from(output)?)
}

/// Calculates the amounts of token A and B to return for burning a given
/// amount of LP shares (proportional, floored).
pub(crate) fn calculate_withdraw_amounts(
    burn_lp_amount: Uint128,
    reserve_a: Uint128,
    reserve_b: Uint128,
    total_shares: Uint128,
) -> Result<(Uint128, Uint128), ContractError> {
    if total_shares.is_zero() {
        return Err(ContractError::InsufficientLiquidity {});
    }
    let return_a = reserve_a.multiply_ratio(burn_lp_amount, total_shares);
    let return_b = reserve_b.multiply_ratio(burn_lp_amount, total_shares);
    Ok((return_a, return_b))
}

/// Spot price of one unit of A in units of B, at 18-decimal fixed point.
pub(crate) fn calculate_spot_price(
    reserve_a: Uint128,
    reserve_b: Uint128,
) -> Result<Uint256, ContractError> {
    if reserve_a.is_zero() {
        return Err(ContractError::InvalidReserve {});
    }
    let scaled = Uint256::from(reserve_b).checked_mul(Uint256::from(PRICE_SCALE))?;
    Ok(scaled.checked_div(Uint256::from(reserve_a))?)
}
