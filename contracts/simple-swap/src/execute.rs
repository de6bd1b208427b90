use cosmwasm_std::{
    Addr, DepsMut, Env, Event, MessageInfo, Response, Uint128, Uint64,
};
use cw20_base::state::{MinterData, TokenInfo, BALANCES, TOKEN_INFO};

use crate::error::ContractError;
use crate::events::{LiquidityAddedEvent, LiquidityRemovedEvent, SwapEvent};
use crate::msg::InstantiateMsg;
use crate::state::{
    TokenPair, CONTRACT_NAME, CONTRACT_VERSION, LP_TOKEN_DECIMALS, LP_TOKEN_NAME, LP_TOKEN_SYMBOL,
    RESERVE_A, RESERVE_B, TOKEN_PAIR,
};

use crate::calculations::*;
use crate::messaging::*;
use crate::validation::*;

// --- Instantiate Handler ---
pub(crate) fn execute_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    RESERVE_A.save(deps.storage, &Uint128::zero())?;
    RESERVE_B.save(deps.storage, &Uint128::zero())?;

    // The pool is its own LP share ledger; only the pool may mint.
    let token_info = TokenInfo {
        name: LP_TOKEN_NAME.to_string(),
        symbol: LP_TOKEN_SYMBOL.to_string(),
        decimals: LP_TOKEN_DECIMALS,
        total_supply: Uint128::zero(),
        mint: Some(MinterData {
            minter: env.contract.address.clone(),
            cap: None,
        }),
    };
    TOKEN_INFO.save(deps.storage, &token_info)?;
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate_pool_contract")
        .add_attribute("lp_token_name", LP_TOKEN_NAME)
        .add_attribute("lp_token_symbol", LP_TOKEN_SYMBOL))
}

// --- Execute Handler Implementations ---

#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_add_liquidity(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    amount_a_desired: Uint128,
    amount_b_desired: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
    recipient: String,
    deadline: Uint64,
) -> Result<Response, ContractError> {
    assert_not_expired(&env.block, deadline)?;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let pool_addr = env.contract.address.clone();

    // First successful add binds the pair in the caller's order; every later
    // call may name it in either order.
    let reversed = match TOKEN_PAIR.may_load(deps.storage)? {
        Some(pair) => match_token_pair(&pair, &token_a, &token_b)?,
        None => {
            if token_a == token_b {
                return Err(ContractError::InvalidTokens {});
            }
            TOKEN_PAIR.save(
                deps.storage,
                &TokenPair {
                    token_a: token_a.clone(),
                    token_b: token_b.clone(),
                },
            )?;
            false
        }
    };

    let reserve_a = RESERVE_A.load(deps.storage)?;
    let reserve_b = RESERVE_B.load(deps.storage)?;
    let total_shares = TOKEN_INFO.load(deps.storage)?.total_supply;

    // Orient the canonical reserves to the caller's token order so the
    // min-amount errors refer to the caller's A and B.
    let (reserve_side_a, reserve_side_b) = if reversed {
        (reserve_b, reserve_a)
    } else {
        (reserve_a, reserve_b)
    };

    let (amount_a, amount_b, shares_to_mint) = if total_shares.is_zero() {
        let shares = calculate_initial_lp_shares(amount_a_desired, amount_b_desired)?;
        (amount_a_desired, amount_b_desired, shares)
    } else {
        let (amount_a, amount_b) = calculate_deposit_amounts(
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            reserve_side_a,
            reserve_side_b,
        )?;
        let shares = calculate_subsequent_lp_shares(
            amount_a,
            amount_b,
            reserve_side_a,
            reserve_side_b,
            total_shares,
        )?;
        (amount_a, amount_b, shares)
    };

    // Commit reserves and the share mint before handing out transfer
    // messages; the pulls execute afterwards and revert everything on failure.
    if reversed {
        RESERVE_A.save(deps.storage, &reserve_a.checked_add(amount_b)?)?;
        RESERVE_B.save(deps.storage, &reserve_b.checked_add(amount_a)?)?;
    } else {
        RESERVE_A.save(deps.storage, &reserve_a.checked_add(amount_a)?)?;
        RESERVE_B.save(deps.storage, &reserve_b.checked_add(amount_b)?)?;
    }
    mint_lp_shares(&mut deps, &env, &recipient, shares_to_mint)?;

    let pull_a = create_transfer_from_msg(&token_a, &info.sender, &pool_addr, amount_a)?;
    let pull_b = create_transfer_from_msg(&token_b, &info.sender, &pool_addr, amount_b)?;

    let event: Event = LiquidityAddedEvent {
        sender: info.sender.clone(),
        recipient,
        amount_a_deposited: amount_a,
        amount_b_deposited: amount_b,
        shares_minted: shares_to_mint,
    }
    .into();

    Ok(Response::new()
        .add_messages(vec![pull_a, pull_b])
        .add_event(event)
        .add_attribute("action", "add_liquidity")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("amount_a_deposited", amount_a.to_string())
        .add_attribute("amount_b_deposited", amount_b.to_string())
        .add_attribute("shares_minted", shares_to_mint.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn execute_remove_liquidity(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token_a: String,
    token_b: String,
    liquidity: Uint128,
    amount_a_min: Uint128,
    amount_b_min: Uint128,
    recipient: String,
    deadline: Uint64,
) -> Result<Response, ContractError> {
    assert_not_expired(&env.block, deadline)?;
    let token_a = deps.api.addr_validate(&token_a)?;
    let token_b = deps.api.addr_validate(&token_b)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let pair = TOKEN_PAIR
        .may_load(deps.storage)?
        .ok_or(ContractError::InvalidTokens {})?;
    let reversed = match_token_pair(&pair, &token_a, &token_b)?;

    let holder_balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if liquidity.is_zero() || holder_balance < liquidity {
        return Err(ContractError::InsufficientLpTokenBurned {});
    }

    let reserve_a = RESERVE_A.load(deps.storage)?;
    let reserve_b = RESERVE_B.load(deps.storage)?;
    let total_shares = TOKEN_INFO.load(deps.storage)?.total_supply;

    let (reserve_side_a, reserve_side_b) = if reversed {
        (reserve_b, reserve_a)
    } else {
        (reserve_a, reserve_b)
    };
    let (return_a, return_b) =
        calculate_withdraw_amounts(liquidity, reserve_side_a, reserve_side_b, total_shares)?;
    if return_a < amount_a_min {
        return Err(ContractError::InsufficientAAmount {});
    }
    if return_b < amount_b_min {
        return Err(ContractError::InsufficientBAmount {});
    }

    // Burn and decrement reserves before the payout messages run.
    burn_lp_shares(&mut deps, &env, &info.sender, liquidity)?;
    if reversed {
        RESERVE_A.save(deps.storage, &reserve_a.checked_sub(return_b)?)?;
        RESERVE_B.save(deps.storage, &reserve_b.checked_sub(return_a)?)?;
    } else {
        RESERVE_A.save(deps.storage, &reserve_a.checked_sub(return_a)?)?;
        RESERVE_B.save(deps.storage, &reserve_b.checked_sub(return_b)?)?;
    }

    let pay_a = create_transfer_msg(&token_a, &recipient, return_a)?;
    let pay_b = create_transfer_msg(&token_b, &recipient, return_b)?;

    let event: Event = LiquidityRemovedEvent {
        sender: info.sender.clone(),
        recipient,
        shares_burned: liquidity,
        return_a,
        return_b,
    }
    .into();

    Ok(Response::new()
        .add_messages(vec![pay_a, pay_b])
        .add_event(event)
        .add_attribute("action", "remove_liquidity")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("shares_burned", liquidity.to_string())
        .add_attribute("return_a", return_a.to_string())
        .add_attribute("return_b", return_b.to_string()))
}

pub(crate) fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<String>,
    recipient: String,
    deadline: Uint64,
) -> Result<Response, ContractError> {
    assert_not_expired(&env.block, deadline)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let path = path
        .iter()
        .map(|token| deps.api.addr_validate(token))
        .collect::<Result<Vec<Addr>, _>>()?;

    let pair = TOKEN_PAIR
        .may_load(deps.storage)?
        .ok_or(ContractError::InvalidPath {})?;
    let direction = resolve_swap_path(&pair, &path)?;

    let reserve_a = RESERVE_A.load(deps.storage)?;
    let reserve_b = RESERVE_B.load(deps.storage)?;
    let (reserve_in, reserve_out) = match direction {
        SwapDirection::AToB => (reserve_a, reserve_b),
        SwapDirection::BToA => (reserve_b, reserve_a),
    };

    // Priced against the reserves as they stand before this swap's input
    // lands, per the discretized constant-product rule.
    let amount_out = calculate_swap_output(amount_in, reserve_in, reserve_out)?;
    if amount_out < amount_out_min {
        return Err(ContractError::InsufficientOutputAmount {});
    }

    match direction {
        SwapDirection::AToB => {
            RESERVE_A.save(deps.storage, &reserve_a.checked_add(amount_in)?)?;
            RESERVE_B.save(deps.storage, &reserve_b.checked_sub(amount_out)?)?;
        }
        SwapDirection::BToA => {
            RESERVE_B.save(deps.storage, &reserve_b.checked_add(amount_in)?)?;
            RESERVE_A.save(deps.storage, &reserve_a.checked_sub(amount_out)?)?;
        }
    }

    let (offer_token, ask_token) = (path[0].clone(), path[1].clone());
    let pull_msg =
        create_transfer_from_msg(&offer_token, &info.sender, &env.contract.address, amount_in)?;
    let pay_msg = create_transfer_msg(&ask_token, &recipient, amount_out)?;

    let event: Event = SwapEvent {
        sender: info.sender.clone(),
        recipient,
        offer_token: offer_token.clone(),
        ask_token: ask_token.clone(),
        offer_amount: amount_in,
        return_amount: amount_out,
    }
    .into();

    Ok(Response::new()
        .add_messages(vec![pull_msg, pay_msg])
        .add_event(event)
        .add_attribute("action", "swap")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("offer_token", offer_token.to_string())
        .add_attribute("ask_token", ask_token.to_string())
        .add_attribute("offer_amount", amount_in.to_string())
        .add_attribute("return_amount", amount_out.to_string()))
}

// --- Internal Helpers ---

/// Mints LP shares on the embedded cw20-base ledger. The pool itself is the
/// registered minter, so the call runs with the pool as sender.
fn mint_lp_shares(
    deps: &mut DepsMut,
    env: &Env,
    recipient: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let minter_info = MessageInfo {
        sender: env.contract.address.clone(),
        funds: vec![],
    };
    cw20_base::contract::execute_mint(
        deps.branch(),
        env.clone(),
        minter_info,
        recipient.to_string(),
        amount,
    )?;
    Ok(())
}

/// Burns LP shares held by `holder` on the embedded cw20-base ledger.
fn burn_lp_shares(
    deps: &mut DepsMut,
    env: &Env,
    holder: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let holder_info = MessageInfo {
        sender: holder.clone(),
        funds: vec![],
    };
    cw20_base::contract::execute_burn(deps.branch(), env.clone(), holder_info, amount)?;
    Ok(())
}
