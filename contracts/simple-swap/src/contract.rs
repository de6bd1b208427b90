use crate::execute::{execute_add_liquidity, execute_remove_liquidity, execute_swap};
use crate::query::{query_get_amount_out, query_get_price, query_pool_state};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};

// --- Entry Points ---

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    crate::execute::execute_instantiate(deps, env, info, msg)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddLiquidity {
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        } => execute_add_liquidity(
            deps,
            env,
            info,
            token_a,
            token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        ),
        ExecuteMsg::RemoveLiquidity {
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        } => execute_remove_liquidity(
            deps,
            env,
            info,
            token_a,
            token_b,
            liquidity,
            amount_a_min,
            amount_b_min,
            recipient,
            deadline,
        ),
        ExecuteMsg::SwapExactTokensForTokens {
            amount_in,
            amount_out_min,
            path,
            recipient,
            deadline,
        } => execute_swap(
            deps,
            env,
            info,
            amount_in,
            amount_out_min,
            path,
            recipient,
            deadline,
        ),
        // LP share token surface, delegated to the embedded cw20-base ledger.
        ExecuteMsg::Transfer { recipient, amount } => Ok(
            cw20_base::contract::execute_transfer(deps, env, info, recipient, amount)?,
        ),
        ExecuteMsg::Send {
            contract,
            amount,
            msg,
        } => Ok(cw20_base::contract::execute_send(
            deps, env, info, contract, amount, msg,
        )?),
        ExecuteMsg::IncreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_increase_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::DecreaseAllowance {
            spender,
            amount,
            expires,
        } => Ok(cw20_base::allowances::execute_decrease_allowance(
            deps, env, info, spender, amount, expires,
        )?),
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => Ok(cw20_base::allowances::execute_transfer_from(
            deps, env, info, owner, recipient, amount,
        )?),
        ExecuteMsg::SendFrom {
            owner,
            contract,
            amount,
            msg,
        } => Ok(cw20_base::allowances::execute_send_from(
            deps, env, info, owner, contract, amount, msg,
        )?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::PoolState {} => query_pool_state(deps),
        QueryMsg::GetAmountOut {
            amount_in,
            reserve_in,
            reserve_out,
        } => query_get_amount_out(amount_in, reserve_in, reserve_out),
        QueryMsg::GetPrice { token_a, token_b } => query_get_price(deps, token_a, token_b),
        QueryMsg::Balance { address } => {
            Ok(to_json_binary(&cw20_base::contract::query_balance(deps, address)?)?)
        }
        QueryMsg::TokenInfo {} => {
            Ok(to_json_binary(&cw20_base::contract::query_token_info(deps)?)?)
        }
        QueryMsg::Allowance { owner, spender } => Ok(to_json_binary(
            &cw20_base::allowances::query_allowance(deps, owner, spender)?,
        )?),
    }
}
