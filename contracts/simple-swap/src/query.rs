use crate::calculations::{calculate_spot_price, calculate_swap_output};
use crate::error::ContractError;
use crate::msg::{AmountOutResponse, PoolStateResponse, PriceResponse};
use crate::state::{RESERVE_A, RESERVE_B, TOKEN_PAIR};
use crate::validation::match_token_pair;
use cosmwasm_std::{to_json_binary, Binary, Deps, Uint128};
use cw20_base::state::TOKEN_INFO;

// --- Query Handler Implementations ---

pub(crate) fn query_pool_state(deps: Deps) -> Result<Binary, ContractError> {
    let pair = TOKEN_PAIR.may_load(deps.storage)?;
    let resp = PoolStateResponse {
        token_a: pair.as_ref().map(|p| p.token_a.clone()),
        token_b: pair.map(|p| p.token_b),
        reserve_a: RESERVE_A.load(deps.storage)?,
        reserve_b: RESERVE_B.load(deps.storage)?,
        total_shares: TOKEN_INFO.load(deps.storage)?.total_supply,
    };
    Ok(to_json_binary(&resp)?)
}

/// Pure pricing helper over caller-supplied reserves; touches no pool state.
pub(crate) fn query_get_amount_out(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Binary, ContractError> {
    let amount_out = calculate_swap_output(amount_in, reserve_in, reserve_out)?;
    Ok(to_json_binary(&AmountOutResponse { amount_out })?)
}

/// Spot price of one unit of the caller's `token_a` in units of the caller's
/// `token_b`, at 18-decimal fixed point.
pub(crate) fn query_get_price(
    deps: Deps,
    token_a: String,
    token_b: String,
) -> Result<Binary, ContractError> {
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let pair = TOKEN_PAIR
        .may_load(deps.storage)?
        .ok_or(ContractError::InvalidTokens {})?;
    let reversed = match_token_pair(&pair, &token_a, &token_b)?;

    let reserve_a = RESERVE_A.load(deps.storage)?;
    let reserve_b = RESERVE_B.load(deps.storage)?;
    let (reserve_side_a, reserve_side_b) = if reversed {
        (reserve_b, reserve_a)
    } else {
        (reserve_a, reserve_b)
    };
    let price = calculate_spot_price(reserve_side_a, reserve_side_b)?;
    Ok(to_json_binary(&PriceResponse { price })?)
}
